use std::collections::{btree_map, BTreeMap};

use crate::props::prop_value::PropValue;

/// Reserved key carrying a node's children; a plain string here is the
/// text-content shorthand.
pub const CHILDREN_KEY: &str = "children";

/// Key the text-content shorthand is re-emitted under on the wire.
pub const CONTENT_KEY: &str = "content";

/// Ordered, string-keyed property map of a node.
#[derive(Clone, Debug, Default)]
pub struct Props {
    inner: BTreeMap<String, PropValue>,
}

impl Props {
    pub fn new() -> Self {
        Self {
            inner: BTreeMap::new(),
        }
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<PropValue>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<PropValue>) -> Option<PropValue> {
        self.inner.insert(key.into(), value.into())
    }

    pub fn remove(&mut self, key: &str) -> Option<PropValue> {
        self.inner.remove(key)
    }

    pub fn get(&self, key: &str) -> Option<&PropValue> {
        self.inner.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.inner.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, PropValue> {
        self.inner.iter()
    }

    /// The text-content shorthand, if `children` holds a plain string.
    pub fn text_content(&self) -> Option<&str> {
        self.get(CHILDREN_KEY).and_then(PropValue::as_str)
    }

    /// Decides whether moving from `self` to `next` requires an update call.
    ///
    /// True when any key of `next` differs shallowly from `self`, or any key
    /// of `self` is missing from `next`. `children` is ignored on both sides.
    pub fn differs_from(&self, next: &Props) -> bool {
        let changed = next.iter().any(|(key, value)| {
            key != CHILDREN_KEY
                && !self
                    .get(key)
                    .is_some_and(|previous| previous.shallow_eq(value))
        });
        if changed {
            return true;
        }

        self.inner
            .keys()
            .any(|key| key != CHILDREN_KEY && !next.contains_key(key))
    }
}

impl<K: Into<String>, V: Into<PropValue>> FromIterator<(K, V)> for Props {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            inner: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Props {
    type Item = (&'a String, &'a PropValue);
    type IntoIter = btree_map::Iter<'a, String, PropValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.iter()
    }
}
