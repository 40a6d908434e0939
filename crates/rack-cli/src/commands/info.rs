//! Info command implementation.
//!
//! A device record is a nested object graph with no natural tabular
//! shape, so this command configures structured output only; with no
//! explicit format it renders JSON.

use std::io::Write;

use rack_render::{Formatter, RenderMode};

use crate::cli::TargetArgs;
use crate::commands::check_target;
use crate::error::CliError;
use crate::service::DeviceService;

/// Info command executor.
#[derive(Debug)]
pub struct InfoCommand<'a, S> {
    service: &'a S,
}

impl<'a, S: DeviceService> InfoCommand<'a, S> {
    /// Create a new info command.
    #[must_use]
    pub fn new(service: &'a S) -> Self {
        Self { service }
    }

    /// Execute the info command.
    ///
    /// # Errors
    ///
    /// Returns an error if the device is not found, the caller requests
    /// table output, or rendering fails.
    pub fn execute<W: Write>(
        &self,
        writer: &mut W,
        format: Option<RenderMode>,
        args: &TargetArgs,
    ) -> Result<(), CliError> {
        check_target(args)?;
        let info = self
            .service
            .device_info(&args.rack, &args.board, &args.device)?;

        let mut formatter = Formatter::new(writer).with_structured().with_mode(format);
        formatter.add(&info)?;
        formatter.write()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    use rack_proto::{DeviceInfo, Location, ReadResponse, ScanResults, ServiceStatus};
    use rack_render::RenderError;

    struct FakeService {
        info: DeviceInfo,
    }

    impl DeviceService for FakeService {
        fn scan(&self) -> Result<ScanResults, CliError> {
            Err(CliError::Connection("not used".into()))
        }

        fn read(&self, _: &str, _: &str, _: &str) -> Result<ReadResponse, CliError> {
            Err(CliError::Connection("not used".into()))
        }

        fn device_info(&self, _: &str, _: &str, _: &str) -> Result<DeviceInfo, CliError> {
            Ok(self.info.clone())
        }

        fn status(&self) -> Result<ServiceStatus, CliError> {
            Err(CliError::Connection("not used".into()))
        }
    }

    fn fake() -> FakeService {
        FakeService {
            info: DeviceInfo {
                id: "led-1".into(),
                device_type: "led".into(),
                info: "chassis led".into(),
                location: Location {
                    rack: "rack-1".into(),
                    board: "board-1".into(),
                },
                metadata: BTreeMap::from([("color".to_string(), "blue".to_string())]),
                timestamp: "2026-08-27T10:15:00Z".parse().expect("timestamp"),
            },
        }
    }

    fn target() -> TargetArgs {
        TargetArgs {
            rack: "rack-1".into(),
            board: "board-1".into(),
            device: "led-1".into(),
        }
    }

    fn run(format: Option<RenderMode>) -> Result<String, CliError> {
        let service = fake();
        let mut buf = Vec::new();
        InfoCommand::new(&service).execute(&mut buf, format, &target())?;
        Ok(String::from_utf8(buf).expect("utf8"))
    }

    #[test]
    fn defaults_to_json_when_no_table_is_configured() {
        let out = run(None).expect("info");
        let decoded: DeviceInfo = serde_json::from_str(&out).expect("decode");
        assert_eq!(decoded.id, "led-1");
        assert_eq!(decoded.location.rack, "rack-1");
    }

    #[test]
    fn yaml_is_available_on_request() {
        let out = run(Some(RenderMode::Yaml)).expect("info");
        assert!(out.contains("id: led-1"));
        assert!(out.contains("color: blue"));
    }

    #[test]
    fn table_request_is_an_unsupported_format_error() {
        let err = run(Some(RenderMode::Table)).unwrap_err();
        assert!(matches!(
            err,
            CliError::Render(RenderError::UnsupportedFormat(RenderMode::Table))
        ));
    }
}
