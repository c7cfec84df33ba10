//! Conversion of untrusted JSON input into typed messages
//!
//! Shape problems are mapped onto the error taxonomy: anything that is not
//! a `{"records": [...]}` object is an input type error, while bad records
//! inside a well-shaped message are validation errors.

use crate::constants::messages;
use crate::error::CodecError;
use crate::types::{Record, StatusMessage};
use serde_json::Value;

/// Convert a JSON value into a validated status message
pub fn message_from_value(value: &Value) -> Result<StatusMessage, CodecError> {
    let object = value.as_object().ok_or_else(|| {
        CodecError::InputType(format!(
            "Can only serialize StatusMessage objects, got {}",
            kind_of(value)
        ))
    })?;

    let records = match object.get("records") {
        Some(Value::Array(items)) => items,
        Some(Value::Null) | None => return Ok(StatusMessage::default()),
        Some(_) => return Err(CodecError::InputType(messages::INVALID_RECORDS.into())),
    };

    records
        .iter()
        .map(record_from_value)
        .collect::<Result<Vec<_>, _>>()
        .map(StatusMessage::new)
}

/// Parse JSON text into a validated status message
pub fn message_from_str(input: &str) -> Result<StatusMessage, CodecError> {
    let value: Value = serde_json::from_str(input)
        .map_err(|e| CodecError::InputType(format!("Input is not valid JSON: {}", e)))?;
    message_from_value(&value)
}

/// Convert a JSON value into a validated record
pub fn record_from_value(value: &Value) -> Result<Record, CodecError> {
    let object = value
        .as_object()
        .ok_or_else(|| CodecError::Validation(messages::INVALID_RECORD.into()))?;

    let k = match object.get("k") {
        Some(Value::String(k)) if !k.is_empty() => k.clone(),
        _ => return Err(CodecError::Validation(messages::INVALID_KEY.into())),
    };

    // An absent or null value means an empty status
    let v = match object.get("v") {
        Some(Value::String(v)) => v.clone(),
        Some(Value::Null) | None => String::new(),
        Some(_) => return Err(CodecError::Validation(messages::INVALID_VALUE.into())),
    };

    Ok(Record { k, v })
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl StatusMessage {
    /// Convert a JSON value into a validated status message
    pub fn from_json_value(value: &Value) -> Result<Self, CodecError> {
        message_from_value(value)
    }
}

impl TryFrom<&Value> for StatusMessage {
    type Error = CodecError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        message_from_value(value)
    }
}
