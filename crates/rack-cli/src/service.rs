//! The collaborator boundary: where commands obtain scheme structs.

use rack_proto::{DeviceInfo, ReadResponse, ScanResults, ServiceStatus};

use crate::error::CliError;

/// Supplies typed response objects from the device-management service.
///
/// Everything behind this trait — transport, authentication, retries —
/// is outside the rendering core. Commands only consume the decoded
/// scheme structs it returns.
pub trait DeviceService {
    /// Scan the full rack/board/device hierarchy.
    fn scan(&self) -> Result<ScanResults, CliError>;

    /// Read the current values of one device.
    fn read(&self, rack: &str, board: &str, device: &str) -> Result<ReadResponse, CliError>;

    /// Fetch the full record for one device.
    fn device_info(&self, rack: &str, board: &str, device: &str)
    -> Result<DeviceInfo, CliError>;

    /// Check service health.
    fn status(&self) -> Result<ServiceStatus, CliError>;
}
