// Shared validation primitives for loosely-typed caller input.
//
// Purpose
// - Turn serde_json::Value arguments and entries into typed values, or a tagged error.
//
// Responsibilities
// - Argument checks: sequence shape, integer ids and numeric times, reported as InvalidArgument.
// - Field checks on one entry of a sequence, reported as MalformedRecord with the entry index.
// - Only an absent key is missing. A JSON null is present and has the wrong type.

use serde_json::{Map, Value};

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum RecordDefect {
    #[error("value is not an object")]
    NotAnObject,

    #[error("{field} is not found")]
    MissingField { field: &'static str },

    #[error("{field} has an invalid type")]
    InvalidType { field: &'static str },

    #[error("action is not found, or action is not \"start\" or \"stop\"")]
    InvalidAction,
}

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{0}")]
    InvalidArgument(String),

    #[error("{defect} in record {index}")]
    MalformedRecord { index: usize, defect: RecordDefect },
}

impl ValidationError {
    pub fn malformed(index: usize, defect: RecordDefect) -> Self {
        ValidationError::MalformedRecord { index, defect }
    }
}

pub fn require_sequence<'a>(value: &'a Value, name: &str) -> Result<&'a [Value], ValidationError> {
    value
        .as_array()
        .map(Vec::as_slice)
        .ok_or_else(|| ValidationError::InvalidArgument(format!("{name} argument is not array")))
}

pub fn require_integer(value: &Value, name: &str) -> Result<i64, ValidationError> {
    value
        .as_i64()
        .ok_or_else(|| ValidationError::InvalidArgument(format!("{name} argument is not number")))
}

pub fn require_number(value: &Value, name: &str) -> Result<f64, ValidationError> {
    value
        .as_f64()
        .ok_or_else(|| ValidationError::InvalidArgument(format!("{name} argument is not number")))
}

pub fn as_object(index: usize, entry: &Value) -> Result<&Map<String, Value>, ValidationError> {
    entry
        .as_object()
        .ok_or_else(|| ValidationError::malformed(index, RecordDefect::NotAnObject))
}

pub fn present<'a>(fields: &'a Map<String, Value>, field: &str) -> Option<&'a Value> {
    fields.get(field)
}

pub fn integer_field(
    fields: &Map<String, Value>,
    field: &'static str,
    index: usize,
) -> Result<i64, ValidationError> {
    match present(fields, field) {
        None => Err(missing(index, field)),
        Some(value) => value.as_i64().ok_or_else(|| invalid_type(index, field)),
    }
}

pub fn number_field(
    fields: &Map<String, Value>,
    field: &'static str,
    index: usize,
) -> Result<f64, ValidationError> {
    match present(fields, field) {
        None => Err(missing(index, field)),
        Some(value) => value.as_f64().ok_or_else(|| invalid_type(index, field)),
    }
}

pub fn string_field(
    fields: &Map<String, Value>,
    field: &'static str,
    index: usize,
) -> Result<String, ValidationError> {
    match present(fields, field) {
        None => Err(missing(index, field)),
        Some(Value::String(value)) => Ok(value.clone()),
        Some(_) => Err(invalid_type(index, field)),
    }
}

pub fn integer_list_field(
    fields: &Map<String, Value>,
    field: &'static str,
    index: usize,
) -> Result<Vec<i64>, ValidationError> {
    let items = match present(fields, field) {
        None => return Err(missing(index, field)),
        Some(value) => value.as_array().ok_or_else(|| invalid_type(index, field))?,
    };
    items
        .iter()
        .map(|item| item.as_i64().ok_or_else(|| invalid_type(index, field)))
        .collect()
}

fn missing(index: usize, field: &'static str) -> ValidationError {
    ValidationError::malformed(index, RecordDefect::MissingField { field })
}

fn invalid_type(index: usize, field: &'static str) -> ValidationError {
    ValidationError::malformed(index, RecordDefect::InvalidType { field })
}
