use super::{Column, Result, Tag};
use crate::Error;

use indexmap::IndexMap;
use std::collections::HashMap;

/// An ordered set of columns, indexed by tag and by name.
///
/// The order is the declared order of the columns and is the positional order
/// used by external, ordinal row representations. No two columns share a tag
/// and no two columns share a name (compared case-sensitively).
#[derive(Debug, Clone, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<Column>", into = "Vec<Column>")
)]
pub struct Columns {
    /// Columns in declared order, keyed by tag.
    columns: IndexMap<Tag, Column>,

    /// Maps column names to their position in `columns`.
    names: HashMap<String, usize>,
}

impl Columns {
    /// Builds a collection from columns in declared order.
    pub fn new(columns: impl IntoIterator<Item = Column>) -> Result<Columns> {
        let columns = columns.into_iter();
        let mut ret = Columns {
            columns: IndexMap::with_capacity(columns.size_hint().0),
            names: HashMap::with_capacity(columns.size_hint().0),
        };

        for column in columns {
            if let Some(existing) = ret.columns.get(&column.tag) {
                return Err(Error::duplicate_tag(
                    column.tag,
                    &existing.name,
                    &column.name,
                ));
            }

            if let Some(&index) = ret.names.get(&column.name) {
                return Err(Error::duplicate_name(
                    &column.name,
                    ret.columns[index].tag,
                    column.tag,
                ));
            }

            ret.names.insert(column.name.clone(), ret.columns.len());
            ret.columns.insert(column.tag, column);
        }

        Ok(ret)
    }

    pub fn empty() -> Columns {
        Columns::default()
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Iterates the columns in declared order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &Column> + DoubleEndedIterator + '_ {
        self.columns.values()
    }

    /// Iterates the tags in declared order.
    pub fn tags(&self) -> impl ExactSizeIterator<Item = Tag> + '_ {
        self.columns.keys().copied()
    }

    pub fn by_tag(&self, tag: Tag) -> Option<&Column> {
        self.columns.get(&tag)
    }

    pub fn by_name(&self, name: &str) -> Option<&Column> {
        self.names.get(name).map(|&index| &self.columns[index])
    }

    /// Returns the declared position of the column with `tag`.
    pub fn position(&self, tag: Tag) -> Option<usize> {
        self.columns.get_index_of(&tag)
    }

    pub fn contains_tag(&self, tag: Tag) -> bool {
        self.columns.contains_key(&tag)
    }

    pub fn max_tag(&self) -> Option<Tag> {
        self.columns.keys().max().copied()
    }

    /// Returns the columns satisfying `f`, in declared order. A subset of a
    /// valid collection is always valid.
    pub(crate) fn filter(&self, mut f: impl FnMut(&Column) -> bool) -> Columns {
        let mut ret = Columns::empty();
        for column in self.iter().filter(|column| f(column)) {
            ret.names.insert(column.name.clone(), ret.columns.len());
            ret.columns.insert(column.tag, column.clone());
        }
        ret
    }

    /// Applies `f` to every column, keeping tags and names.
    pub(crate) fn map(&self, f: impl Fn(&Column) -> Column) -> Columns {
        let mut ret = self.clone();
        for column in ret.columns.values_mut() {
            let mapped = f(column);
            debug_assert_eq!(mapped.tag, column.tag);
            debug_assert_eq!(mapped.name, column.name);
            *column = mapped;
        }
        ret
    }
}

impl PartialEq for Columns {
    fn eq(&self, other: &Self) -> bool {
        // `IndexMap` equality ignores order; declared order is significant here.
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<'a> IntoIterator for &'a Columns {
    type Item = &'a Column;
    type IntoIter = indexmap::map::Values<'a, Tag, Column>;

    fn into_iter(self) -> Self::IntoIter {
        self.columns.values()
    }
}

impl TryFrom<Vec<Column>> for Columns {
    type Error = Error;

    fn try_from(value: Vec<Column>) -> Result<Self> {
        Columns::new(value)
    }
}

impl From<Columns> for Vec<Column> {
    fn from(value: Columns) -> Self {
        value.columns.into_values().collect()
    }
}
