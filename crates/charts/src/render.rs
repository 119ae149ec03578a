use crate::error::ChartError;
use crate::layout::{ChartSpec, LinePanel, Pane};
use analytics::Bounds;
use configuration::{OutputFormat, OutputSettings};
use plotters::coord::Shift;
use plotters::prelude::*;
use std::fmt::Display;
use std::fs;
use std::ops::Range;
use std::path::Path;

const FONT: &str = "sans-serif";

/// Draws `spec` into an image at `path`, encoded as configured in `output`.
pub fn render(spec: &ChartSpec, output: &OutputSettings, path: &Path) -> Result<(), ChartError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let size = (output.width, output.height);
    match output.format {
        OutputFormat::Svg => draw(SVGBackend::new(path, size).into_drawing_area(), spec)?,
        OutputFormat::Png => draw(BitMapBackend::new(path, size).into_drawing_area(), spec)?,
    }

    tracing::info!(path = %path.display(), "Chart written.");
    Ok(())
}

fn draw<DB: DrawingBackend>(root: DrawingArea<DB, Shift>, spec: &ChartSpec) -> Result<(), ChartError> {
    root.fill(&WHITE).map_err(drawing)?;

    let area = match &spec.title {
        Some(title) => root.titled(title, (FONT, 30)).map_err(drawing)?,
        None => root.clone(),
    };
    draw_pane(&area, &spec.root)?;

    root.present().map_err(drawing)?;
    Ok(())
}

fn draw_pane<DB: DrawingBackend>(area: &DrawingArea<DB, Shift>, pane: &Pane) -> Result<(), ChartError> {
    match pane {
        Pane::Panel(panel) => draw_panel(area, panel),
        Pane::Grid { rows, cols, panes } => {
            let cells = area.split_evenly((*rows, *cols));
            if panes.len() > cells.len() {
                return Err(ChartError::LayoutTooSmall {
                    cells: cells.len(),
                    panes: panes.len(),
                });
            }
            for (cell, pane) in cells.iter().zip(panes) {
                draw_pane(cell, pane)?;
            }
            Ok(())
        }
    }
}

fn draw_panel<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    panel: &LinePanel,
) -> Result<(), ChartError> {
    let (x_range, y_range) = axis_ranges(panel);

    let mut chart = ChartBuilder::on(area)
        .caption(&panel.caption, (FONT, 20))
        .margin(15)
        .x_label_area_size(40)
        .y_label_area_size(70)
        .build_cartesian_2d(x_range, y_range)
        .map_err(drawing)?;

    chart
        .configure_mesh()
        .bold_line_style(BLACK.mix(0.25)) // big grid lines
        .light_line_style(TRANSPARENT) // little grid lines
        .x_desc(panel.x_desc.as_str())
        .y_desc(panel.y_desc.as_str())
        .draw()
        .map_err(drawing)?;

    for (color_idx, series) in panel.series.iter().enumerate() {
        let style = Palette99::pick(color_idx).mix(0.9).stroke_width(2);
        let anno = chart
            .draw_series(LineSeries::new(series.points().map(|(x, y)| (*x, *y)), style))
            .map_err(drawing)?;

        if let Some(label) = series.label() {
            anno.label(label)
                .legend(move |(x, y)| Rectangle::new([(x, y - 5), (x + 10, y + 5)], style.filled()));
        }
    }

    if panel.has_labels() {
        chart
            .configure_series_labels()
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()
            .map_err(drawing)?;
    }

    tracing::debug!(caption = %panel.caption, lines = panel.series.len(), "Panel drawn.");
    Ok(())
}

/// Ranges covering every point of the panel. Empty panels get a unit frame.
fn axis_ranges(panel: &LinePanel) -> (Range<f64>, Range<f64>) {
    let xs = Bounds::of(panel.series.iter().flat_map(|s| s.xs().iter().copied()));
    let ys = Bounds::of(panel.series.iter().flat_map(|s| s.ys().iter().copied()));

    match (xs, ys) {
        (Some(x), Some(y)) => {
            let x = if x.span() > 0.0 { x } else { x.padded() };
            let y = y.padded();
            (x.min..x.max, y.min..y.max)
        }
        _ => (0.0..1.0, 0.0..1.0),
    }
}

fn drawing<E: Display>(err: E) -> ChartError {
    ChartError::Drawing(err.to_string())
}
