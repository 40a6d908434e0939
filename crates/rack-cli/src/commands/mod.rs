//! CLI command implementations.
//!
//! Each submodule implements a specific CLI command:
//! - [`scan`] - List every device in the hierarchy
//! - [`read`] - Read current device values
//! - [`info`] - Full record for one device
//! - [`status`] - Service health

pub mod info;
pub mod read;
pub mod scan;
pub mod status;

pub use info::InfoCommand;
pub use read::ReadCommand;
pub use scan::ScanCommand;
pub use status::StatusCommand;

use crate::cli::TargetArgs;
use crate::error::CliError;

/// Reject empty rack/board/device identifiers before hitting the service.
pub(crate) fn check_target(args: &TargetArgs) -> Result<(), CliError> {
    for (name, value) in [
        ("rack", &args.rack),
        ("board", &args.board),
        ("device", &args.device),
    ] {
        if value.is_empty() {
            return Err(CliError::InvalidArgument(format!("{name} ID cannot be empty")));
        }
    }
    Ok(())
}
