//! Render mode selection.

use std::fmt;

use clap::ValueEnum;

/// Output encodings a command may render to.
///
/// Table is the human-readable default; JSON and YAML are the
/// structured encodings for scripting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RenderMode {
    /// Column-aligned, human-readable table.
    Table,
    /// Pretty-printed JSON.
    Json,
    /// YAML document.
    Yaml,
}

impl fmt::Display for RenderMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Table => write!(f, "table"),
            Self::Json => write!(f, "json"),
            Self::Yaml => write!(f, "yaml"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_lowercase() {
        assert_eq!(RenderMode::Table.to_string(), "table");
        assert_eq!(RenderMode::Json.to_string(), "json");
        assert_eq!(RenderMode::Yaml.to_string(), "yaml");
    }
}
