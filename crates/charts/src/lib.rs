//! # SimCharts Charts
//!
//! The plotting adapter. It knows how to lay out panels and draw line series
//! with `plotters`; it knows nothing about where the series came from.

pub mod error;
pub mod layout;
pub mod render;
pub mod summary;

pub use error::ChartError;
pub use layout::{ChartSpec, LinePanel, Pane};
pub use render::render;
pub use summary::{SeriesSummary, summarize};
