//! Device info responses: the full record for one device.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Detailed information about one device.
///
/// A richer object graph than a scan entry; rendered in structured
/// modes only.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeviceInfo {
    /// Device identifier.
    pub id: String,
    /// Device type, e.g. `led`, `fan`, `temperature`.
    #[serde(rename = "type")]
    pub device_type: String,
    /// Human-readable device description.
    pub info: String,
    /// Where the device sits.
    pub location: Location,
    /// Free-form properties reported by the service.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub metadata: BTreeMap<String, String>,
    /// When the service produced this record.
    pub timestamp: DateTime<Utc>,
}

/// Physical location of a device.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Location {
    /// Rack identifier.
    pub rack: String,
    /// Board identifier.
    pub board: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_metadata_is_omitted_from_json() {
        let info = DeviceInfo {
            id: "led-1".into(),
            device_type: "led".into(),
            info: "chassis led".into(),
            location: Location {
                rack: "rack-1".into(),
                board: "board-1".into(),
            },
            metadata: BTreeMap::new(),
            timestamp: "2026-08-27T10:15:00Z".parse().expect("timestamp"),
        };
        let json = serde_json::to_string(&info).expect("encode");
        assert!(!json.contains("metadata"));
        assert!(json.contains("\"type\":\"led\""));

        let decoded: DeviceInfo = serde_json::from_str(&json).expect("decode");
        assert_eq!(decoded, info);
    }
}
