use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("Cannot read file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot parse document to valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Document has no '{0}' array")]
    MissingArray(&'static str),

    #[error("Document root is not a JSON array")]
    NotAnArray,

    #[error("Element {0} is not a JSON object")]
    NotAnObject(usize),

    #[error("Element {index} has a nested value in field '{field}'")]
    NestedValue { index: usize, field: String },
}
