//! # rack-cli
//!
//! Command-line client for the rack device-management service.
//!
//! Provides commands for:
//! - Scanning the rack/board/device hierarchy
//! - Reading current device values
//! - Inspecting one device's full record
//! - Checking service health
//!
//! # Architecture
//!
//! Commands obtain scheme structs through the [`service::DeviceService`]
//! seam and hand them to the `rack-render` engine, which owns mode
//! negotiation, header synthesis, sorting, and filtering:
//!
//! ```text
//! ┌──────────┐ scheme structs ┌──────────┐  table / json / yaml
//! │ rackctl  │───────────────►│ renderer │────────────────────► stdout
//! └──────────┘                └──────────┘
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod cli;
pub mod client;
pub mod commands;
pub mod error;
pub mod service;

pub use cli::{Cli, Commands, ScanArgs, TargetArgs};
pub use client::ServiceClient;
pub use error::CliError;
pub use service::DeviceService;
