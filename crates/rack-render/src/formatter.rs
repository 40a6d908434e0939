//! The output formatter shared by every command.
//!
//! One formatter is built per command invocation, bound to the domain
//! type the command receives from the service. Table support is opted
//! into with a [`Schema`] and a row projector; structured support with
//! [`Formatter::with_structured`]. Rendering happens exactly once:
//! [`Formatter::write`] consumes the formatter.

use std::io::Write;

use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::error::RenderError;
use crate::mode::RenderMode;
use crate::row::Row;
use crate::schema::Schema;

/// Converts one domain object into zero or more canonical rows.
pub type Projector<T> = fn(&T) -> Result<Vec<Row>, RenderError>;

/// Accumulates projected rows and structured payload, negotiates the
/// active render mode, and performs the render.
pub struct Formatter<T, W> {
    writer: W,
    requested: Option<RenderMode>,
    table: Option<(Schema, Projector<T>)>,
    structured: bool,
    rows: Vec<Row>,
    payload: Vec<Value>,
}

impl<T, W> std::fmt::Debug for Formatter<T, W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Formatter")
            .field("requested", &self.requested)
            .field("table", &self.table.as_ref().map(|(schema, _)| schema))
            .field("structured", &self.structured)
            .field("rows", &self.rows.len())
            .field("items", &self.payload.len())
            .finish_non_exhaustive()
    }
}

impl<T: Serialize, W: Write> Formatter<T, W> {
    /// Create a formatter with no configured output, bound to a sink.
    #[must_use]
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            requested: None,
            table: None,
            structured: false,
            rows: Vec::new(),
            payload: Vec::new(),
        }
    }

    /// Configure tabular output: a row template and the projector that
    /// produces rows from each added domain object.
    #[must_use]
    pub fn with_table(mut self, schema: Schema, projector: Projector<T>) -> Self {
        self.table = Some((schema, projector));
        self
    }

    /// Configure structured (JSON/YAML) output of the added objects.
    #[must_use]
    pub fn with_structured(mut self) -> Self {
        self.structured = true;
        self
    }

    /// Record the caller's explicit mode request, if any.
    ///
    /// With no explicit request the formatter falls back to table when
    /// configured, otherwise to JSON.
    #[must_use]
    pub fn with_mode(mut self, mode: Option<RenderMode>) -> Self {
        self.requested = mode;
        self
    }

    /// Add one domain object.
    ///
    /// Runs the bound projector when a table is configured; a single
    /// object may project to zero, one, or many rows. Each row is
    /// validated against the schema, so a shape mismatch surfaces here
    /// as a recoverable [`RenderError::Projection`].
    pub fn add(&mut self, item: &T) -> Result<(), RenderError> {
        if let Some((schema, projector)) = &self.table {
            let rows = projector(item)?;
            for row in &rows {
                schema.check(row)?;
            }
            self.rows.extend(rows);
        }
        if self.structured {
            self.payload.push(serde_json::to_value(item)?);
        }
        Ok(())
    }

    /// Render all accumulated output in the negotiated mode.
    ///
    /// Consuming `self` guarantees the sink is written exactly once per
    /// invocation.
    pub fn write(mut self) -> Result<(), RenderError> {
        let mode = self.negotiate()?;
        debug!(
            mode = %mode,
            rows = self.rows.len(),
            items = self.payload.len(),
            "rendering output"
        );
        match mode {
            RenderMode::Table => self.write_table(),
            RenderMode::Json => self.write_json(),
            RenderMode::Yaml => self.write_yaml(),
        }
    }

    /// Resolve the active mode: honor an explicit request or fall back
    /// to table, then to the first supported structured mode.
    fn negotiate(&self) -> Result<RenderMode, RenderError> {
        if let Some(mode) = self.requested {
            let supported = match mode {
                RenderMode::Table => self.table.is_some(),
                RenderMode::Json | RenderMode::Yaml => self.structured,
            };
            return if supported {
                Ok(mode)
            } else {
                Err(RenderError::UnsupportedFormat(mode))
            };
        }
        if self.table.is_some() {
            Ok(RenderMode::Table)
        } else if self.structured {
            Ok(RenderMode::Json)
        } else {
            Err(RenderError::NoFormatConfigured)
        }
    }

    fn write_table(&mut self) -> Result<(), RenderError> {
        // negotiate() only selects Table when a schema is configured.
        let Some((schema, _)) = &self.table else {
            return Err(RenderError::UnsupportedFormat(RenderMode::Table));
        };

        // Headers are synthesized once per write, independent of rows.
        let headers = schema.headers();
        let names: Vec<&str> = schema.visible().map(|field| field.name()).collect();
        let cells: Vec<Vec<String>> = self
            .rows
            .iter()
            .map(|row| names.iter().map(|name| row.text(name)).collect())
            .collect();

        let mut widths: Vec<usize> = headers.iter().map(String::len).collect();
        for row in &cells {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.len());
            }
        }

        write_line(&mut self.writer, &headers, &widths)?;
        for row in &cells {
            write_line(&mut self.writer, row, &widths)?;
        }
        Ok(())
    }

    fn write_json(&mut self) -> Result<(), RenderError> {
        // A single logical object renders bare, not as a one-item list.
        if let [item] = self.payload.as_slice() {
            serde_json::to_writer_pretty(&mut self.writer, item)?;
        } else {
            serde_json::to_writer_pretty(&mut self.writer, &self.payload)?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_yaml(&mut self) -> Result<(), RenderError> {
        if let [item] = self.payload.as_slice() {
            serde_yaml::to_writer(&mut self.writer, item)?;
        } else {
            serde_yaml::to_writer(&mut self.writer, &self.payload)?;
        }
        Ok(())
    }
}

/// Write one table line: left-aligned cells, two-space gutters, no
/// trailing padding on the last column.
fn write_line<W: Write>(writer: &mut W, cells: &[String], widths: &[usize]) -> Result<(), RenderError> {
    let last = cells.len().saturating_sub(1);
    for (i, (cell, &width)) in cells.iter().zip(widths).enumerate() {
        if i == last {
            write!(writer, "{cell}")?;
        } else {
            write!(writer, "{cell:<width$}  ")?;
        }
    }
    writeln!(writer)?;
    Ok(())
}
