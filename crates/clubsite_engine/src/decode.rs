//! Firestore REST documents to plain JSON.
//!
//! The REST API wraps every value in a one-key object naming its type
//! (`{"stringValue": "x"}`, `{"integerValue": "3"}`, ...). Unwrapping happens
//! here so the normalizer only ever sees ordinary JSON.

use serde::Deserialize;
use serde_json::{Map, Number, Value};

use clubsite_core::RawRecord;

#[derive(Debug, Deserialize)]
pub(crate) struct WireDocument {
    pub name: String,
    #[serde(default)]
    pub fields: Map<String, Value>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WireListResponse {
    #[serde(default)]
    pub documents: Vec<WireDocument>,
    #[serde(default, rename = "nextPageToken")]
    pub next_page_token: Option<String>,
}

impl WireDocument {
    pub fn into_record(self) -> RawRecord {
        let id = document_id(&self.name).to_string();
        RawRecord::new(id, decode_fields(&self.fields))
    }
}

/// Last segment of a full resource name.
pub fn document_id(name: &str) -> &str {
    name.rsplit('/').next().unwrap_or(name)
}

pub fn decode_fields(fields: &Map<String, Value>) -> Map<String, Value> {
    fields
        .iter()
        .map(|(key, value)| (key.clone(), decode_value(value)))
        .collect()
}

/// Unwraps one typed value. Unrecognized shapes decode to null.
pub fn decode_value(value: &Value) -> Value {
    let Some(typed) = value.as_object() else {
        return Value::Null;
    };
    let Some((kind, inner)) = typed.iter().next() else {
        return Value::Null;
    };
    match kind.as_str() {
        "stringValue" | "timestampValue" | "referenceValue" | "bytesValue" => inner.clone(),
        "booleanValue" => inner.as_bool().map(Value::Bool).unwrap_or(Value::Null),
        "integerValue" => integer(inner),
        "doubleValue" => inner
            .as_f64()
            .and_then(Number::from_f64)
            .map(Value::Number)
            .unwrap_or(Value::Null),
        "arrayValue" => Value::Array(
            inner
                .get("values")
                .and_then(Value::as_array)
                .map(|values| values.iter().map(decode_value).collect())
                .unwrap_or_default(),
        ),
        "mapValue" => Value::Object(
            inner
                .get("fields")
                .and_then(Value::as_object)
                .map(decode_fields)
                .unwrap_or_default(),
        ),
        "geoPointValue" => inner.clone(),
        _ => Value::Null,
    }
}

// Integers travel as decimal strings to survive 64-bit precision.
fn integer(inner: &Value) -> Value {
    match inner {
        Value::String(text) => text
            .parse::<i64>()
            .map(|n| Value::Number(n.into()))
            .unwrap_or(Value::Null),
        Value::Number(n) => Value::Number(n.clone()),
        _ => Value::Null,
    }
}
