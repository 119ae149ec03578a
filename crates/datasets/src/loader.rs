use crate::error::DatasetError;
use crate::kind::DatasetKind;
use core_types::Record;
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Reads and parses the document at `path`.
pub fn load_records(path: &Path, kind: DatasetKind) -> Result<Vec<Record>, DatasetError> {
    let text = fs::read_to_string(path).map_err(|source| DatasetError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let records = parse_records(&text, kind)?;
    tracing::info!(%kind, path = %path.display(), "gathered {} points", records.len());

    Ok(records)
}

/// Parses a document held in memory.
///
/// The records may be wrapped in an object under the kind's array field
/// (`{"market": [...]}`) or given as a bare top-level array. Every element must
/// be a flat object whose values are scalars.
pub fn parse_records(text: &str, kind: DatasetKind) -> Result<Vec<Record>, DatasetError> {
    let document: Value = serde_json::from_str(text)?;

    let elements = match (document, kind.array_field()) {
        (Value::Array(elements), _) => elements,
        (Value::Object(mut root), Some(field)) => match root.remove(field) {
            Some(Value::Array(elements)) => elements,
            _ => return Err(DatasetError::MissingArray(field)),
        },
        (_, Some(field)) => return Err(DatasetError::MissingArray(field)),
        (_, None) => return Err(DatasetError::NotAnArray),
    };

    elements
        .into_iter()
        .enumerate()
        .map(|(index, element)| into_record(index, element))
        .collect()
}

fn into_record(index: usize, element: Value) -> Result<Record, DatasetError> {
    let Value::Object(fields) = element else {
        return Err(DatasetError::NotAnObject(index));
    };

    if let Some((field, _)) = fields
        .iter()
        .find(|(_, value)| value.is_array() || value.is_object())
    {
        return Err(DatasetError::NestedValue {
            index,
            field: field.clone(),
        });
    }

    Ok(Record::from(fields))
}
