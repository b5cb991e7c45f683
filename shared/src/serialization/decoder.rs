use serde_json::Value;

use crate::{
    props::{prop_map::Props, prop_value::PropValue},
    serialization::error::SerializationError,
};

/// Rebuilds a property map from its wire representation.
///
/// Callback presence flags come back as plain `true`; the handlers themselves
/// never left the bridge.
pub fn decode_props(value: &Value) -> Result<Props, SerializationError> {
    let Value::Object(object) = value else {
        return Err(SerializationError::NotAnObject {
            found: value_kind(value),
        });
    };

    Ok(object
        .iter()
        .map(|(key, value)| (key.clone(), decode_value(value)))
        .collect())
}

/// Parses the text form produced by `encode_props_string`.
pub fn decode_props_str(encoded: &str) -> Result<Props, SerializationError> {
    let value: Value = serde_json::from_str(encoded).map_err(|err| SerializationError::Decode {
        message: err.to_string(),
    })?;
    decode_props(&value)
}

fn decode_value(value: &Value) -> PropValue {
    match value {
        Value::Null => PropValue::Null,
        Value::Bool(flag) => PropValue::Bool(*flag),
        Value::Number(number) => number
            .as_f64()
            .map(PropValue::Number)
            .unwrap_or(PropValue::Null),
        Value::String(text) => PropValue::Str(text.clone()),
        Value::Array(items) => PropValue::list(items.iter().map(decode_value).collect()),
        Value::Object(entries) => PropValue::map(
            entries
                .iter()
                .map(|(key, value)| (key.clone(), decode_value(value))),
        ),
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
