//! CLI error types.

use thiserror::Error;

use rack_render::RenderError;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Device service connection failed.
    #[error("connection error: {0}")]
    Connection(String),

    /// Invalid configuration.
    #[error("configuration error: {0}")]
    Config(String),

    /// Invalid argument.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Device not found.
    #[error("device not found: {0}")]
    DeviceNotFound(String),

    /// Rendering, sorting, or filtering failed.
    #[error(transparent)]
    Render(#[from] RenderError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
