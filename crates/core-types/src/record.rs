use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One flat observation loaded from a simulation document: a transaction,
/// a market or trader snapshot, a wallet snapshot or a simulation summary.
///
/// Fields vary by record kind, so the record keeps the raw JSON map and
/// exposes typed accessors that fail when a field is absent or has the wrong shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    fields: Map<String, Value>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    pub fn get(&self, field: &str) -> Result<&Value, CoreError> {
        self.fields
            .get(field)
            .ok_or_else(|| CoreError::MissingField(field.to_string()))
    }

    /// Reads a numeric field. Booleans (such as `is_buy`) read as 0 or 1.
    pub fn number(&self, field: &str) -> Result<f64, CoreError> {
        match self.get(field)? {
            Value::Number(n) => n.as_f64().ok_or_else(|| type_error(field, "a finite number")),
            Value::Bool(b) => Ok(if *b { 1.0 } else { 0.0 }),
            _ => Err(type_error(field, "a number")),
        }
    }

    pub fn text(&self, field: &str) -> Result<&str, CoreError> {
        match self.get(field)? {
            Value::String(s) => Ok(s),
            _ => Err(type_error(field, "a string")),
        }
    }

    /// The string form of a scalar field, used as a grouping key.
    ///
    /// Numbers are keyed by their value, not their spelling: `0`, `0.0` and
    /// `-0.0` all give `"0"`, and `1e-5` gives `"0.00001"`.
    pub fn key(&self, field: &str) -> Result<String, CoreError> {
        match self.get(field)? {
            Value::String(s) => Ok(s.clone()),
            Value::Number(n) => n
                .as_f64()
                .map(canonical_number)
                .ok_or_else(|| type_error(field, "a finite number")),
            Value::Bool(b) => Ok(b.to_string()),
            _ => Err(type_error(field, "a scalar value")),
        }
    }

}

impl From<Map<String, Value>> for Record {
    fn from(fields: Map<String, Value>) -> Self {
        Self { fields }
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

/// One spelling per numeric value. Adding `0.0` folds `-0.0` into `0.0`.
fn canonical_number(value: f64) -> String {
    (value + 0.0).to_string()
}

fn type_error(field: &str, expected: &'static str) -> CoreError {
    CoreError::FieldType {
        field: field.to_string(),
        expected,
    }
}
