//! Scan responses: the rack → board → device hierarchy.

use serde::{Deserialize, Serialize};

use rack_render::Queryable;

/// Full results of a service scan.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScanResults {
    /// Racks known to the service.
    pub racks: Vec<Rack>,
}

impl ScanResults {
    /// Flatten the hierarchy into one entry per device.
    ///
    /// Entries come out in the service's response order; ordering for
    /// display is the caller's job.
    #[must_use]
    pub fn flatten(&self) -> Vec<ScanEntry> {
        let mut entries = Vec::new();
        for rack in &self.racks {
            for board in &rack.boards {
                for device in &board.devices {
                    entries.push(ScanEntry {
                        rack: rack.id.clone(),
                        board: board.id.clone(),
                        device: device.id.clone(),
                        device_type: device.device_type.clone(),
                        info: device.info.clone(),
                    });
                }
            }
        }
        entries
    }

    /// Whether the scan found no devices at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.racks
            .iter()
            .all(|rack| rack.boards.iter().all(|board| board.devices.is_empty()))
    }
}

/// One rack and the boards mounted in it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Rack {
    /// Rack identifier.
    pub id: String,
    /// Boards mounted in the rack.
    pub boards: Vec<Board>,
}

/// One board and the devices attached to it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Board {
    /// Board identifier.
    pub id: String,
    /// Devices attached to the board.
    pub devices: Vec<Device>,
}

/// One device as reported by a scan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Device {
    /// Device identifier.
    pub id: String,
    /// Human-readable device description.
    pub info: String,
    /// Device type, e.g. `led`, `fan`, `temperature`.
    #[serde(rename = "type")]
    pub device_type: String,
}

/// One flattened scan result: the sortable, filterable item.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScanEntry {
    /// Rack identifier.
    pub rack: String,
    /// Board identifier.
    pub board: String,
    /// Device identifier.
    pub device: String,
    /// Device type.
    #[serde(rename = "type")]
    pub device_type: String,
    /// Human-readable device description.
    pub info: String,
}

impl Queryable for ScanEntry {
    fn field_value(&self, field: &str) -> Option<String> {
        match field {
            "rack" => Some(self.rack.clone()),
            "board" => Some(self.board.clone()),
            "device" => Some(self.device.clone()),
            "type" => Some(self.device_type.clone()),
            "info" => Some(self.info.clone()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn results() -> ScanResults {
        ScanResults {
            racks: vec![
                Rack {
                    id: "rack-1".into(),
                    boards: vec![Board {
                        id: "board-1".into(),
                        devices: vec![
                            Device {
                                id: "led-1".into(),
                                info: "chassis led".into(),
                                device_type: "led".into(),
                            },
                            Device {
                                id: "fan-1".into(),
                                info: "intake fan".into(),
                                device_type: "fan".into(),
                            },
                        ],
                    }],
                },
                Rack {
                    id: "rack-2".into(),
                    boards: vec![Board {
                        id: "board-1".into(),
                        devices: vec![Device {
                            id: "temp-0".into(),
                            info: "inlet temperature".into(),
                            device_type: "temperature".into(),
                        }],
                    }],
                },
            ],
        }
    }

    #[test]
    fn flatten_yields_one_entry_per_device() {
        let entries = results().flatten();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].rack, "rack-1");
        assert_eq!(entries[0].device, "led-1");
        assert_eq!(entries[2].rack, "rack-2");
        assert_eq!(entries[2].device_type, "temperature");
    }

    #[test]
    fn empty_scan_is_detected() {
        assert!(ScanResults::default().is_empty());
        assert!(!results().is_empty());
    }

    #[test]
    fn entry_exposes_rendered_field_values() {
        let entry = &results().flatten()[1];
        assert_eq!(entry.field_value("type").as_deref(), Some("fan"));
        assert_eq!(entry.field_value("board").as_deref(), Some("board-1"));
        assert_eq!(entry.field_value("bogus"), None);
    }

    #[test]
    fn device_type_serializes_as_type() {
        let entry = &results().flatten()[0];
        let json = serde_json::to_string(entry).expect("encode");
        assert!(json.contains("\"type\":\"led\""));
    }

    #[test]
    fn scan_results_round_trip() {
        let original = results();
        let json = serde_json::to_string(&original).expect("encode");
        let decoded: ScanResults = serde_json::from_str(&json).expect("decode");
        assert_eq!(decoded, original);
    }
}
