//! A single row returned by Data Designer.

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::domain::RenderError;

/// Field name to value mapping for one generated record.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct GeneratedRecord {
    fields: Map<String, Value>,
}

impl GeneratedRecord {
    /// Build a record whose every value is text.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let fields =
            pairs.into_iter().map(|(k, v)| (k.into(), Value::String(v.into()))).collect();
        Self { fields }
    }

    /// Text value of `name`. Absent and null fields are missing; other types are rejected.
    pub fn field(&self, name: &str) -> Result<&str, RenderError> {
        match self.fields.get(name) {
            None | Some(Value::Null) => Err(RenderError::MissingField(name.to_string())),
            Some(Value::String(text)) => Ok(text),
            Some(other) => {
                Err(RenderError::NonTextField { field: name.to_string(), kind: kind_of(other) })
            }
        }
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
