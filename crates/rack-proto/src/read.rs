//! Read responses: typed readings from one device.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Response to a device read.
///
/// One read may carry several typed readings (a power sensor reports
/// voltage, current, and power at once). The map is keyed by reading
/// type; `BTreeMap` keeps iteration deterministic for rendering.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReadResponse {
    /// Type of the device that was read.
    #[serde(rename = "type")]
    pub device_type: String,
    /// Readings keyed by reading type.
    pub data: BTreeMap<String, ReadData>,
}

/// A single reading.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReadData {
    /// Reading value; the wire type varies by device.
    pub value: Value,
    /// Unit of measure, when the reading has one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<Unit>,
    /// When the service took the reading.
    pub timestamp: DateTime<Utc>,
}

/// Unit of measure for a reading.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Unit {
    /// Full unit name, e.g. `revolutions per minute`.
    pub name: String,
    /// Short symbol, e.g. `RPM`.
    pub symbol: String,
}
