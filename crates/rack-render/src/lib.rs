//! # rack-render
//!
//! Output rendering and ordering engine shared by every rackctl command.
//!
//! Each command invocation builds one [`Formatter`], feeds it domain
//! objects from the device-management service, and renders exactly once
//! in the negotiated mode:
//!
//! ```text
//! ┌─────────┐ scheme structs ┌───────────┐    table / json / yaml
//! │ command │───────────────►│ Formatter │──────────────────────► sink
//! └─────────┘                └───────────┘
//! ```
//!
//! Ordering-sensitive commands first pass their items through a
//! [`KeyRegistry`] sort chain and [`Predicate`] filters; both produce
//! stable, deterministic results even over map-derived collections.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod filter;
pub mod formatter;
pub mod mode;
pub mod row;
pub mod schema;
pub mod sort;

pub use error::RenderError;
pub use filter::{Predicate, Queryable};
pub use formatter::{Formatter, Projector};
pub use mode::RenderMode;
pub use row::Row;
pub use schema::{FieldSpec, Schema, SchemaBuilder};
pub use sort::{KeyRegistry, SortChain};
