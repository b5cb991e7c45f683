use serde_json::{Map, Number, Value};

use crate::{
    props::{
        prop_map::{Props, CHILDREN_KEY, CONTENT_KEY},
        prop_value::PropValue,
    },
    serialization::error::SerializationError,
};

/// Converts a property map into its wire representation.
///
/// `children` is never sent as-is: a plain string is re-emitted under
/// `content`, anything else is dropped. Callbacks become `true` wherever they
/// appear, nested ones included. An empty map encodes to `{}`.
pub fn encode_props(props: &Props) -> Value {
    let mut object = Map::new();
    for (key, value) in props {
        if key == CHILDREN_KEY {
            continue;
        }
        object.insert(key.clone(), encode_value(value));
    }

    if let Some(text) = props.text_content() {
        object.insert(CONTENT_KEY.to_string(), Value::String(text.to_string()));
    }

    Value::Object(object)
}

/// Canonical text form of [`encode_props`], as carried by `props_encoded`.
pub fn encode_props_string(props: &Props) -> Result<String, SerializationError> {
    serde_json::to_string(&encode_props(props)).map_err(|err| SerializationError::Encode {
        message: err.to_string(),
    })
}

fn encode_value(value: &PropValue) -> Value {
    match value {
        PropValue::Null => Value::Null,
        PropValue::Bool(flag) => Value::Bool(*flag),
        PropValue::Number(number) => encode_number(*number),
        PropValue::Str(text) => Value::String(text.clone()),
        PropValue::List(items) => Value::Array(items.iter().map(encode_value).collect()),
        PropValue::Map(entries) => Value::Object(
            entries
                .iter()
                .map(|(key, value)| (key.clone(), encode_value(value)))
                .collect(),
        ),
        PropValue::Callback(_) => Value::Bool(true),
    }
}

// Integral values go out as JSON integers; non-finite ones have no JSON form.
fn encode_number(number: f64) -> Value {
    if number.fract() == 0.0 && number >= i64::MIN as f64 && number < i64::MAX as f64 {
        return Value::from(number as i64);
    }
    Number::from_f64(number)
        .map(Value::Number)
        .unwrap_or(Value::Null)
}
