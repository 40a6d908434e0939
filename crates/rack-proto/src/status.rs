//! Service status responses.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Health report from the device-management service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ServiceStatus {
    /// Service-reported status string, e.g. `ok`.
    pub status: String,
    /// When the service produced the report.
    pub timestamp: DateTime<Utc>,
}
