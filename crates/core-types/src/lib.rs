//! # SimCharts Core Types
//!
//! Layer 0 of the workspace: the vocabulary shared by every other crate.
//! No crate here knows about files, configuration or rendering.

pub mod enums;
pub mod error;
pub mod rates;
pub mod record;
pub mod series;

// Re-export the core types to provide a clean public API.
pub use enums::CurrencyCode;
pub use error::CoreError;
pub use rates::ExchangeRateTable;
pub use record::Record;
pub use series::{Series, SeriesSet};
