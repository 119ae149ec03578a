use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    #[error("Record is missing required field '{0}'")]
    MissingField(String),

    #[error("Field '{field}' has unexpected type: expected {expected}")]
    FieldType { field: String, expected: &'static str },

    #[error("Unknown currency code: {0}")]
    UnknownCurrency(String),

    #[error("Invalid exchange rate for {0}: {1}")]
    InvalidRate(String, String),
}
