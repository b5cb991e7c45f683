use std::{collections::BTreeMap, rc::Rc};

use crate::props::callback::Callback;

/// A single property value as handed to the bridge by the diff engine.
///
/// Structured values (`List`, `Map`) are shared handles: cloning a `PropValue`
/// keeps the same identity, while building a new map with equal content does
/// not. [`PropValue::shallow_eq`] relies on that distinction.
#[derive(Clone, Debug)]
pub enum PropValue {
    Null,
    Bool(bool),
    Number(f64),
    Str(String),
    List(Rc<Vec<PropValue>>),
    Map(Rc<BTreeMap<String, PropValue>>),
    Callback(Callback),
}

impl PropValue {
    pub fn list(items: Vec<PropValue>) -> Self {
        PropValue::List(Rc::new(items))
    }

    pub fn map<K: Into<String>>(entries: impl IntoIterator<Item = (K, PropValue)>) -> Self {
        PropValue::Map(Rc::new(
            entries.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        ))
    }

    pub fn callback(handler: impl Fn(Option<&serde_json::Value>) + 'static) -> Self {
        PropValue::Callback(Callback::new(handler))
    }

    pub fn is_callback(&self) -> bool {
        matches!(self, PropValue::Callback(_))
    }

    pub fn as_callback(&self) -> Option<&Callback> {
        match self {
            PropValue::Callback(callback) => Some(callback),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            PropValue::Str(value) => Some(value),
            _ => None,
        }
    }

    /// Per-key comparison used by the prop-diff rule.
    ///
    /// Primitives compare by value. Lists, maps and callbacks compare by
    /// identity, so a replaced-but-equal style object counts as changed.
    pub fn shallow_eq(&self, other: &PropValue) -> bool {
        match (self, other) {
            (PropValue::Null, PropValue::Null) => true,
            (PropValue::Bool(a), PropValue::Bool(b)) => a == b,
            (PropValue::Number(a), PropValue::Number(b)) => a == b,
            (PropValue::Str(a), PropValue::Str(b)) => a == b,
            (PropValue::List(a), PropValue::List(b)) => Rc::ptr_eq(a, b),
            (PropValue::Map(a), PropValue::Map(b)) => Rc::ptr_eq(a, b),
            (PropValue::Callback(a), PropValue::Callback(b)) => a.ptr_eq(b),
            _ => false,
        }
    }
}

impl From<bool> for PropValue {
    fn from(value: bool) -> Self {
        PropValue::Bool(value)
    }
}

impl From<f64> for PropValue {
    fn from(value: f64) -> Self {
        PropValue::Number(value)
    }
}

impl From<i32> for PropValue {
    fn from(value: i32) -> Self {
        PropValue::Number(value as f64)
    }
}

impl From<&str> for PropValue {
    fn from(value: &str) -> Self {
        PropValue::Str(value.to_string())
    }
}

impl From<String> for PropValue {
    fn from(value: String) -> Self {
        PropValue::Str(value)
    }
}

impl From<Callback> for PropValue {
    fn from(value: Callback) -> Self {
        PropValue::Callback(value)
    }
}
