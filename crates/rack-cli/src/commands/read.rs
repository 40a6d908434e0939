//! Read command implementation.
//!
//! One read response may carry several typed readings; the table shows
//! one row per reading type.

use std::io::Write;

use serde_json::Value;

use rack_proto::ReadResponse;
use rack_render::{Formatter, RenderError, RenderMode, Row, Schema};

use crate::cli::TargetArgs;
use crate::commands::check_target;
use crate::error::CliError;
use crate::service::DeviceService;

/// Read command executor.
#[derive(Debug)]
pub struct ReadCommand<'a, S> {
    service: &'a S,
}

impl<'a, S: DeviceService> ReadCommand<'a, S> {
    /// Create a new read command.
    #[must_use]
    pub fn new(service: &'a S) -> Self {
        Self { service }
    }

    /// Execute the read command.
    ///
    /// # Errors
    ///
    /// Returns an error if the device is not found, a reading has an
    /// unexpected shape, or rendering fails.
    pub fn execute<W: Write>(
        &self,
        writer: &mut W,
        format: Option<RenderMode>,
        args: &TargetArgs,
    ) -> Result<(), CliError> {
        check_target(args)?;
        let response = self.service.read(&args.rack, &args.board, &args.device)?;

        let mut formatter = Formatter::new(writer)
            .with_table(schema(), project_readings)
            .with_structured()
            .with_mode(format);
        formatter.add(&response)?;
        formatter.write()?;
        Ok(())
    }
}

fn schema() -> Schema {
    Schema::builder()
        .field("type")
        .field("value")
        .field("unit")
        .field("timestamp")
        .hidden("device_type")
        .build()
}

/// Expand one read response into one row per reading type.
///
/// Readings are scalar on the wire; a structured value means the
/// response does not match the shape this command renders.
fn project_readings(response: &ReadResponse) -> Result<Vec<Row>, RenderError> {
    let mut rows = Vec::with_capacity(response.data.len());
    for (reading_type, data) in &response.data {
        if matches!(data.value, Value::Array(_) | Value::Object(_)) {
            return Err(RenderError::Projection(format!(
                "reading '{reading_type}' is not a scalar value"
            )));
        }
        let unit = data
            .unit
            .as_ref()
            .map(|unit| unit.symbol.clone())
            .unwrap_or_default();
        rows.push(
            Row::new()
                .field("type", reading_type.as_str())
                .field("value", data.value.clone())
                .field("unit", unit)
                .field("timestamp", data.timestamp.to_rfc3339())
                .field("device_type", response.device_type.as_str()),
        );
    }
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Utc};
    use serde_json::json;
    use std::collections::BTreeMap;

    use rack_proto::{DeviceInfo, ReadData, ScanResults, ServiceStatus, Unit};

    struct FakeService {
        response: ReadResponse,
    }

    impl DeviceService for FakeService {
        fn scan(&self) -> Result<ScanResults, CliError> {
            Err(CliError::Connection("not used".into()))
        }

        fn read(&self, _: &str, _: &str, _: &str) -> Result<ReadResponse, CliError> {
            Ok(self.response.clone())
        }

        fn device_info(&self, _: &str, _: &str, _: &str) -> Result<DeviceInfo, CliError> {
            Err(CliError::Connection("not used".into()))
        }

        fn status(&self) -> Result<ServiceStatus, CliError> {
            Err(CliError::Connection("not used".into()))
        }
    }

    fn timestamp() -> DateTime<Utc> {
        "2026-08-27T10:15:00Z".parse().expect("timestamp")
    }

    fn fan_response() -> ReadResponse {
        let mut data = BTreeMap::new();
        data.insert(
            "speed".to_string(),
            ReadData {
                value: json!(2400),
                unit: Some(Unit {
                    name: "revolutions per minute".into(),
                    symbol: "RPM".into(),
                }),
                timestamp: timestamp(),
            },
        );
        data.insert(
            "state".to_string(),
            ReadData {
                value: json!("ok"),
                unit: None,
                timestamp: timestamp(),
            },
        );
        ReadResponse {
            device_type: "fan".into(),
            data,
        }
    }

    fn target() -> TargetArgs {
        TargetArgs {
            rack: "rack-1".into(),
            board: "board-1".into(),
            device: "fan-1".into(),
        }
    }

    fn run(response: ReadResponse, format: Option<RenderMode>) -> Result<String, CliError> {
        let service = FakeService { response };
        let mut buf = Vec::new();
        ReadCommand::new(&service).execute(&mut buf, format, &target())?;
        Ok(String::from_utf8(buf).expect("utf8"))
    }

    #[test]
    fn one_row_per_reading_type() {
        let out = run(fan_response(), None).expect("read");
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("TYPE"));
        assert!(lines[1].starts_with("speed") && lines[1].contains("2400") && lines[1].contains("RPM"));
        assert!(lines[2].starts_with("state  ok"));
    }

    #[test]
    fn device_type_column_is_hidden() {
        let out = run(fan_response(), None).expect("read");
        assert!(!out.contains("DEVICE_TYPE"));
        assert!(!out.lines().any(|line| line.contains("fan ")));
    }

    #[test]
    fn json_output_is_the_full_response() {
        let out = run(fan_response(), Some(RenderMode::Json)).expect("read");
        let decoded: ReadResponse = serde_json::from_str(&out).expect("decode");
        assert_eq!(decoded, fan_response());
    }

    #[test]
    fn structured_reading_value_is_a_projection_error() {
        let mut response = fan_response();
        response.data.insert(
            "raw".to_string(),
            ReadData {
                value: json!({"nested": true}),
                unit: None,
                timestamp: timestamp(),
            },
        );
        let err = run(response, None).unwrap_err();
        assert!(matches!(
            err,
            CliError::Render(RenderError::Projection(_))
        ));
    }

    #[test]
    fn empty_target_is_rejected() {
        let service = FakeService { response: fan_response() };
        let mut buf = Vec::new();
        let args = TargetArgs {
            rack: String::new(),
            board: "board-1".into(),
            device: "fan-1".into(),
        };
        let err = ReadCommand::new(&service)
            .execute(&mut buf, None, &args)
            .unwrap_err();
        assert!(matches!(err, CliError::InvalidArgument(_)));
    }
}
