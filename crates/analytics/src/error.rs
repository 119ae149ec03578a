use core_types::CoreError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnalyticsError {
    #[error("Failed to extract a value from record {index}: {source}")]
    Extraction {
        index: usize,
        #[source]
        source: CoreError,
    },

    #[error(transparent)]
    Core(#[from] CoreError),
}

impl AnalyticsError {
    /// Tags a record-level failure with the position of the record.
    pub fn extraction(index: usize, source: CoreError) -> Self {
        AnalyticsError::Extraction { index, source }
    }
}
