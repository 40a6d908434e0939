//! Device service client.

use chrono::Utc;
use tracing::debug;

use rack_proto::{DeviceInfo, ReadResponse, ScanResults, ServiceStatus};

use crate::error::CliError;
use crate::service::DeviceService;

/// Client for the device-management service.
#[derive(Debug, Clone)]
pub struct ServiceClient {
    host: String,
}

impl ServiceClient {
    /// Create a client for the service at the given host URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is not `http://` or `https://`.
    pub fn new(host: impl Into<String>) -> Result<Self, CliError> {
        let host = host.into();
        if !host.starts_with("http://") && !host.starts_with("https://") {
            return Err(CliError::Config(format!(
                "invalid service URL: {host}, must start with http:// or https://"
            )));
        }
        Ok(Self { host })
    }

    /// The configured host URL.
    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }
}

impl DeviceService for ServiceClient {
    fn scan(&self) -> Result<ScanResults, CliError> {
        debug!(host = %self.host, "scanning devices");
        // TODO: wire to the service's scan endpoint once the HTTP
        // transport lands
        Ok(ScanResults::default())
    }

    fn read(&self, rack: &str, board: &str, device: &str) -> Result<ReadResponse, CliError> {
        debug!(host = %self.host, rack, board, device, "reading device");
        // TODO: wire to the service's read endpoint once the HTTP
        // transport lands
        Err(CliError::DeviceNotFound(format!("{rack}/{board}/{device}")))
    }

    fn device_info(
        &self,
        rack: &str,
        board: &str,
        device: &str,
    ) -> Result<DeviceInfo, CliError> {
        debug!(host = %self.host, rack, board, device, "fetching device info");
        // TODO: wire to the service's info endpoint once the HTTP
        // transport lands
        Err(CliError::DeviceNotFound(format!("{rack}/{board}/{device}")))
    }

    fn status(&self) -> Result<ServiceStatus, CliError> {
        debug!(host = %self.host, "checking service status");
        // TODO: wire to the service's health endpoint once the HTTP
        // transport lands
        Ok(ServiceStatus {
            status: "unknown".into(),
            timestamp: Utc::now(),
        })
    }
}
