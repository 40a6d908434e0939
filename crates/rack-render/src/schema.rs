//! Declarative row templates for tabular output.
//!
//! A [`Schema`] is the field-descriptor list a command binds at
//! formatter construction: one [`FieldSpec`] per column, in declaration
//! order, carrying an optional header override and a visibility flag.

use crate::error::RenderError;
use crate::row::Row;

/// Descriptor for one field of a row template.
#[derive(Debug, Clone)]
pub struct FieldSpec {
    name: &'static str,
    label: Option<&'static str>,
    hidden: bool,
}

impl FieldSpec {
    /// The field's declared name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Whether the field is suppressed from tabular output.
    #[must_use]
    pub const fn is_hidden(&self) -> bool {
        self.hidden
    }

    /// Column header for the field: the override label if present,
    /// otherwise the declared name, upper-cased either way.
    #[must_use]
    pub fn header(&self) -> String {
        self.label.unwrap_or(self.name).to_uppercase()
    }
}

/// Row template bound to a formatter for header synthesis and row
/// validation.
#[derive(Debug, Clone, Default)]
pub struct Schema {
    fields: Vec<FieldSpec>,
}

impl Schema {
    /// Start building a schema.
    #[must_use]
    pub fn builder() -> SchemaBuilder {
        SchemaBuilder { fields: Vec::new() }
    }

    /// Visible fields in declaration order.
    pub fn visible(&self) -> impl Iterator<Item = &FieldSpec> {
        self.fields.iter().filter(|field| !field.hidden)
    }

    /// Synthesize one header label per visible field.
    ///
    /// Labels are not required to be unique: an override that collides
    /// with another field's computed header is permitted.
    #[must_use]
    pub fn headers(&self) -> Vec<String> {
        self.visible().map(FieldSpec::header).collect()
    }

    /// Validate a projected row against the template.
    ///
    /// Every visible field must be present in the row, and the row may
    /// not carry fields the template does not declare. Hidden fields
    /// are optional.
    pub fn check(&self, row: &Row) -> Result<(), RenderError> {
        for field in self.visible() {
            if row.get(field.name).is_none() {
                return Err(RenderError::Projection(format!(
                    "row is missing field '{}'",
                    field.name
                )));
            }
        }
        for name in row.names() {
            if !self.fields.iter().any(|field| field.name == name) {
                return Err(RenderError::Projection(format!(
                    "row has undeclared field '{name}'"
                )));
            }
        }
        Ok(())
    }

    /// Number of declared fields, hidden ones included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the schema declares no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Builder collecting field descriptors in declaration order.
#[derive(Debug, Default)]
pub struct SchemaBuilder {
    fields: Vec<FieldSpec>,
}

impl SchemaBuilder {
    /// Declare a visible field whose header derives from its name.
    #[must_use]
    pub fn field(mut self, name: &'static str) -> Self {
        self.fields.push(FieldSpec { name, label: None, hidden: false });
        self
    }

    /// Declare a visible field with an override header label.
    #[must_use]
    pub fn labeled(mut self, name: &'static str, label: &'static str) -> Self {
        self.fields.push(FieldSpec { name, label: Some(label), hidden: false });
        self
    }

    /// Declare a field suppressed from headers and per-row rendering.
    #[must_use]
    pub fn hidden(mut self, name: &'static str) -> Self {
        self.fields.push(FieldSpec { name, label: None, hidden: true });
        self
    }

    /// Finish the schema.
    #[must_use]
    pub fn build(self) -> Schema {
        Schema { fields: self.fields }
    }
}
