//! # rack-proto
//!
//! Typed response objects ("scheme structs") returned by the rackctl
//! device-management service, already decoded from the wire format.
//!
//! The service organizes hardware as racks containing boards containing
//! devices. Commands obtain these structs from the service layer and
//! hand them to the `rack-render` engine for ordering, filtering, and
//! output.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod device;
pub mod read;
pub mod scan;
pub mod status;

pub use device::{DeviceInfo, Location};
pub use read::{ReadData, ReadResponse, Unit};
pub use scan::{Board, Device, Rack, ScanEntry, ScanResults};
pub use status::ServiceStatus;
