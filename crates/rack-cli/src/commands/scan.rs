//! Scan command implementation.
//!
//! Lists every device the service knows about, one row per device,
//! ordered by the caller's `--order-by` priority list and narrowed by
//! `--filter field=value` conditions.

use std::io::Write;

use rack_proto::ScanEntry;
use rack_render::{
    filter, Formatter, KeyRegistry, Predicate, RenderError, RenderMode, Row, Schema,
};

use crate::cli::ScanArgs;
use crate::error::CliError;
use crate::service::DeviceService;

/// Scan command executor.
#[derive(Debug)]
pub struct ScanCommand<'a, S> {
    service: &'a S,
}

impl<'a, S: DeviceService> ScanCommand<'a, S> {
    /// Create a new scan command.
    #[must_use]
    pub fn new(service: &'a S) -> Self {
        Self { service }
    }

    /// Execute the scan command.
    ///
    /// # Errors
    ///
    /// Returns an error if the scan fails, a filter is malformed, no
    /// requested sort key is registered, or rendering fails.
    pub fn execute<W: Write>(
        &self,
        writer: &mut W,
        sort_keys: &KeyRegistry<ScanEntry>,
        format: Option<RenderMode>,
        args: &ScanArgs,
    ) -> Result<(), CliError> {
        let results = self.service.scan()?;
        let entries = results.flatten();

        let predicates = args
            .filter
            .iter()
            .map(|raw| raw.parse::<Predicate>())
            .collect::<Result<Vec<_>, _>>()?;
        let mut entries = filter::apply(&predicates, entries);

        let keys: Vec<&str> = args.order_by.iter().map(String::as_str).collect();
        sort_keys.order_by(&keys).sort(&mut entries)?;

        let mut formatter = Formatter::new(writer)
            .with_table(schema(), project_entry)
            .with_structured()
            .with_mode(format);
        for entry in &entries {
            formatter.add(entry)?;
        }
        formatter.write()?;
        Ok(())
    }
}

/// Sort keys available to `--order-by`, registered once at startup.
#[must_use]
pub fn sort_keys() -> KeyRegistry<ScanEntry> {
    let mut registry: KeyRegistry<ScanEntry> = KeyRegistry::new();
    registry.register("rack", |a, b| a.rack.cmp(&b.rack));
    registry.register("board", |a, b| a.board.cmp(&b.board));
    registry.register("device", |a, b| a.device.cmp(&b.device));
    registry.register("type", |a, b| a.device_type.cmp(&b.device_type));
    registry
}

fn schema() -> Schema {
    Schema::builder()
        .field("rack")
        .field("board")
        .labeled("device", "device id")
        .field("info")
        .field("type")
        .build()
}

fn project_entry(entry: &ScanEntry) -> Result<Vec<Row>, RenderError> {
    Ok(vec![Row::new()
        .field("rack", entry.rack.as_str())
        .field("board", entry.board.as_str())
        .field("device", entry.device.as_str())
        .field("info", entry.info.as_str())
        .field("type", entry.device_type.as_str())])
}
