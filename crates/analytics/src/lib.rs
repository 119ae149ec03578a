//! # SimCharts Analytics
//!
//! Pure transformations that turn loaded simulation records into plottable series.
//!
//! ## Architectural Principles
//!
//! - **Layer 1 Logic:** No file, configuration or rendering knowledge. It depends
//!   only on `core-types` (Layer 0).
//! - **Stateless:** every function is a one-shot transformation over in-memory
//!   records. Extraction failures are returned to the caller, never recovered.
//!
//! ## Public API
//!
//! - `CurrencyNormalizer`: converts quantities to the reference currency (EUR).
//! - `group_by` / `group_records_by_field`: partitions records into keyed series.
//! - `project` / `project_many` / `indexed`: index-aligned field extraction.
//! - `Bounds`: axis ranges for a set of series.

pub mod bounds;
pub mod error;
pub mod grouper;
pub mod normalizer;
pub mod projector;

pub use bounds::Bounds;
pub use error::AnalyticsError;
pub use grouper::{group_by, group_records_by_field};
pub use normalizer::CurrencyNormalizer;
pub use projector::{field, indexed, project, project_field, project_many};
