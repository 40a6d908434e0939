//! Error types for the rack-render crate.

use thiserror::Error;

use crate::mode::RenderMode;

/// Errors that can occur while rendering, sorting, or filtering.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The caller requested a render mode this command does not configure.
    #[error("output format '{0}' is not supported by this command")]
    UnsupportedFormat(RenderMode),

    /// The formatter was built without any configured output.
    #[error("no output format configured for this command")]
    NoFormatConfigured,

    /// A domain object did not match the shape the row projector expects.
    #[error("projection error: {0}")]
    Projection(String),

    /// The structured-mode encoder failed on the accumulated data.
    #[error("encoding error: {0}")]
    Encoding(String),

    /// A filter expression was not of the form `field=value`.
    #[error("invalid filter '{0}': expected field=value")]
    Predicate(String),

    /// `sort` was called before any requested key resolved.
    #[error("no sort keys resolved: order_by must name at least one registered key")]
    EmptySortChain,

    /// IO error from the output sink.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for RenderError {
    fn from(err: serde_json::Error) -> Self {
        Self::Encoding(err.to_string())
    }
}

impl From<serde_yaml::Error> for RenderError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Encoding(err.to_string())
    }
}
