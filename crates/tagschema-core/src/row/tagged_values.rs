use super::Value;
use crate::schema::Tag;

use std::collections::BTreeMap;

/// A map from column tag to stored value.
///
/// This is the bare content of a row, without a schema. Partial rows are
/// legal while a row is being assembled; [`Row::new`](super::Row::new)
/// checks the map against a schema.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaggedValues {
    values: BTreeMap<Tag, Value>,
}

impl TaggedValues {
    pub fn new() -> TaggedValues {
        TaggedValues::default()
    }

    /// Sets the value for `tag`, returning the previous one.
    pub fn insert(&mut self, tag: impl Into<Tag>, value: impl Into<Value>) -> Option<Value> {
        self.values.insert(tag.into(), value.into())
    }

    pub fn get(&self, tag: Tag) -> Option<&Value> {
        self.values.get(&tag)
    }

    pub fn contains(&self, tag: Tag) -> bool {
        self.values.contains_key(&tag)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates the values in ascending tag order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (Tag, &Value)> + '_ {
        self.values.iter().map(|(tag, value)| (*tag, value))
    }

    pub fn tags(&self) -> impl ExactSizeIterator<Item = Tag> + '_ {
        self.values.keys().copied()
    }
}

impl<T: Into<Tag>, V: Into<Value>> FromIterator<(T, V)> for TaggedValues {
    fn from_iter<I: IntoIterator<Item = (T, V)>>(iter: I) -> Self {
        TaggedValues {
            values: iter
                .into_iter()
                .map(|(tag, value)| (tag.into(), value.into()))
                .collect(),
        }
    }
}

impl IntoIterator for TaggedValues {
    type Item = (Tag, Value);
    type IntoIter = std::collections::btree_map::IntoIter<Tag, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}
