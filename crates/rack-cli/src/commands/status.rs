//! Status command implementation.

use std::io::Write;

use rack_proto::ServiceStatus;
use rack_render::{Formatter, RenderError, RenderMode, Row, Schema};

use crate::error::CliError;
use crate::service::DeviceService;

/// Status command executor.
#[derive(Debug)]
pub struct StatusCommand<'a, S> {
    service: &'a S,
}

impl<'a, S: DeviceService> StatusCommand<'a, S> {
    /// Create a new status command.
    #[must_use]
    pub fn new(service: &'a S) -> Self {
        Self { service }
    }

    /// Execute the status command.
    ///
    /// # Errors
    ///
    /// Returns an error if the health check or rendering fails.
    pub fn execute<W: Write>(
        &self,
        writer: &mut W,
        format: Option<RenderMode>,
    ) -> Result<(), CliError> {
        let status = self.service.status()?;

        let mut formatter = Formatter::new(writer)
            .with_table(schema(), project_status)
            .with_structured()
            .with_mode(format);
        formatter.add(&status)?;
        formatter.write()?;
        Ok(())
    }
}

fn schema() -> Schema {
    Schema::builder().field("status").field("timestamp").build()
}

fn project_status(status: &ServiceStatus) -> Result<Vec<Row>, RenderError> {
    Ok(vec![Row::new()
        .field("status", status.status.as_str())
        .field("timestamp", status.timestamp.to_rfc3339())])
}

#[cfg(test)]
mod tests {
    use super::*;

    use rack_proto::{DeviceInfo, ReadResponse, ScanResults};

    struct FakeService;

    impl DeviceService for FakeService {
        fn scan(&self) -> Result<ScanResults, CliError> {
            Err(CliError::Connection("not used".into()))
        }

        fn read(&self, _: &str, _: &str, _: &str) -> Result<ReadResponse, CliError> {
            Err(CliError::Connection("not used".into()))
        }

        fn device_info(&self, _: &str, _: &str, _: &str) -> Result<DeviceInfo, CliError> {
            Err(CliError::Connection("not used".into()))
        }

        fn status(&self) -> Result<ServiceStatus, CliError> {
            Ok(ServiceStatus {
                status: "ok".into(),
                timestamp: "2026-08-27T10:15:00Z".parse().expect("timestamp"),
            })
        }
    }

    fn run(format: Option<RenderMode>) -> String {
        let mut buf = Vec::new();
        StatusCommand::new(&FakeService)
            .execute(&mut buf, format)
            .expect("status");
        String::from_utf8(buf).expect("utf8")
    }

    #[test]
    fn table_has_one_row() {
        let out = run(None);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("STATUS"));
        assert!(lines[1].starts_with("ok"));
    }

    #[test]
    fn json_renders_the_single_object_bare() {
        let out = run(Some(RenderMode::Json));
        let decoded: ServiceStatus = serde_json::from_str(&out).expect("decode");
        assert_eq!(decoded.status, "ok");
    }
}
