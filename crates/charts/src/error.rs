use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChartError {
    #[error("Cannot prepare output location: {0}")]
    Io(#[from] std::io::Error),

    #[error("Layout has {cells} cells but {panes} panes were given")]
    LayoutTooSmall { cells: usize, panes: usize },

    #[error("Drawing failed: {0}")]
    Drawing(String),
}
