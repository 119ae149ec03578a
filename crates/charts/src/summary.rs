use crate::layout::ChartSpec;
use analytics::Bounds;
use serde::Serialize;

/// One row of the post-render report: what was drawn in each panel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesSummary {
    pub panel: String,
    pub label: String,
    pub points: usize,
    pub y_bounds: Option<Bounds>,
}

/// Summarizes every series of the chart in drawing order.
pub fn summarize(spec: &ChartSpec) -> Vec<SeriesSummary> {
    spec.root
        .panels()
        .into_iter()
        .flat_map(|panel| {
            panel.series.iter().map(move |series| SeriesSummary {
                panel: panel.caption.clone(),
                label: series.label().unwrap_or("-").to_string(),
                points: series.len(),
                y_bounds: Bounds::of(series.ys().iter().copied()),
            })
        })
        .collect()
}
