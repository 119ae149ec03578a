use core_types::Series;

/// One cartesian chart: a caption, axis descriptions and any number of lines.
#[derive(Debug, Clone, Default)]
pub struct LinePanel {
    pub caption: String,
    pub x_desc: String,
    pub y_desc: String,
    pub series: Vec<Series<f64, f64>>,
}

impl LinePanel {
    pub fn new(caption: impl Into<String>, x_desc: impl Into<String>, y_desc: impl Into<String>) -> Self {
        Self {
            caption: caption.into(),
            x_desc: x_desc.into(),
            y_desc: y_desc.into(),
            series: Vec::new(),
        }
    }

    pub fn with_series(mut self, series: Series<f64, f64>) -> Self {
        self.series.push(series);
        self
    }

    pub fn has_labels(&self) -> bool {
        self.series.iter().any(|s| s.label().is_some())
    }
}

/// A region of the image: either a single panel or an even grid of sub-regions,
/// filled row by row.
#[derive(Debug, Clone)]
pub enum Pane {
    Panel(LinePanel),
    Grid {
        rows: usize,
        cols: usize,
        panes: Vec<Pane>,
    },
}

impl Pane {
    /// Panels stacked in a single column.
    pub fn column(panes: Vec<Pane>) -> Self {
        Pane::Grid {
            rows: panes.len().max(1),
            cols: 1,
            panes,
        }
    }

    /// Every panel in drawing order.
    pub fn panels(&self) -> Vec<&LinePanel> {
        match self {
            Pane::Panel(panel) => vec![panel],
            Pane::Grid { panes, .. } => panes.iter().flat_map(Pane::panels).collect(),
        }
    }
}

impl From<LinePanel> for Pane {
    fn from(panel: LinePanel) -> Self {
        Pane::Panel(panel)
    }
}

/// Everything needed to draw one image.
#[derive(Debug, Clone)]
pub struct ChartSpec {
    pub title: Option<String>,
    pub root: Pane,
}

impl ChartSpec {
    pub fn new(root: impl Into<Pane>) -> Self {
        Self {
            title: None,
            root: root.into(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}
