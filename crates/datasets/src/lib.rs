//! # SimCharts Datasets
//!
//! The file-load boundary of the system: reads the JSON documents written by
//! the simulator and hands them to the rest of the workspace as flat `Record`s.
//!
//! ## Architectural Principles
//!
//! - **Adapter:** all filesystem and JSON-shape knowledge lives here. Callers
//!   only see `Record`s or a `DatasetError`.
//! - **Fail fast:** an unreadable file, invalid JSON or a non-flat record aborts
//!   the load. Nothing is skipped or repaired.
//!
//! ## Public API
//!
//! - `DatasetKind`: the document kinds and the array field each one is wrapped in.
//! - `load_records` / `parse_records`: load a document from disk or from a string.
//! - `DatasetError`: the specific error types that can be returned from this crate.

pub mod error;
pub mod kind;
pub mod loader;

pub use error::DatasetError;
pub use kind::DatasetKind;
pub use loader::{load_records, parse_records};
