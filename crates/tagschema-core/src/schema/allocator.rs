use super::{Result, Schema, Tag, RESERVED_TAG_MIN};
use crate::Error;

use std::collections::BTreeSet;
use tracing::debug;

/// Every tag a table has ever used.
///
/// This is the tags of every committed schema of the table plus the tags
/// retired by dropped columns. All of them stay reserved forever so an
/// identity is never reused for unrelated historical data.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagHistory {
    tags: BTreeSet<Tag>,
}

/// Allocates tags for columns added to a table.
///
/// Allocation is a pure function of the history and the requested names: the
/// same input always produces the same tags. Making the read of the history
/// and the reservation of new tags atomic with respect to other schema
/// changes on the same table is the job of the storage layer.
#[derive(Debug, Clone)]
pub struct TagAllocator {
    /// Exclusive upper bound on allocated tags.
    ceiling: u64,
}

impl TagHistory {
    pub fn new() -> TagHistory {
        TagHistory::default()
    }

    pub fn from_schemas<'a>(schemas: impl IntoIterator<Item = &'a Schema>) -> TagHistory {
        let mut history = TagHistory::new();
        for schema in schemas {
            history.add_schema(schema);
        }
        history
    }

    /// Records every tag of `schema`.
    pub fn add_schema(&mut self, schema: &Schema) {
        self.tags.extend(schema.columns().tags());
    }

    /// Records a tag. Returns `false` if it was already reserved.
    pub fn insert(&mut self, tag: Tag) -> bool {
        self.tags.insert(tag)
    }

    pub fn contains(&self, tag: Tag) -> bool {
        self.tags.contains(&tag)
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Iterates the reserved tags in ascending order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = Tag> + '_ {
        self.tags.iter().copied()
    }

    /// Largest reserved tag strictly below `ceiling`.
    fn max_below(&self, ceiling: u64) -> Option<Tag> {
        self.tags.range(..Tag(ceiling)).next_back().copied()
    }
}

impl Extend<Tag> for TagHistory {
    fn extend<T: IntoIterator<Item = Tag>>(&mut self, iter: T) {
        self.tags.extend(iter);
    }
}

impl FromIterator<Tag> for TagHistory {
    fn from_iter<T: IntoIterator<Item = Tag>>(iter: T) -> Self {
        TagHistory {
            tags: iter.into_iter().collect(),
        }
    }
}

impl Default for TagAllocator {
    fn default() -> Self {
        TagAllocator {
            ceiling: RESERVED_TAG_MIN,
        }
    }
}

impl TagAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the exclusive upper bound on allocated tags. Defaults to
    /// [`RESERVED_TAG_MIN`].
    pub fn ceiling(&mut self, ceiling: u64) -> &mut Self {
        self.ceiling = ceiling;
        self
    }

    /// Allocates one tag per name in `names`, in order.
    ///
    /// Tags increase monotonically from the largest tag in `history` below
    /// the ceiling, so none of them collide with a tag the table ever used.
    /// Fails if the ceiling is reached before every name has a tag.
    pub fn allocate<S: AsRef<str>>(
        &self,
        table: &str,
        history: &TagHistory,
        names: &[S],
    ) -> Result<Vec<Tag>> {
        let start = match history.max_below(self.ceiling) {
            Some(Tag(max)) => max.checked_add(1),
            None => Some(0),
        };

        let available = start
            .filter(|start| *start < self.ceiling)
            .map(|start| self.ceiling - start)
            .unwrap_or(0);

        if (available as u128) < names.len() as u128 {
            return Err(Error::tag_space_exhausted(table, names.len()));
        }

        let tags: Vec<_> = names
            .iter()
            .zip(start.unwrap_or(0)..)
            .map(|(_, tag)| Tag(tag))
            .collect();

        debug_assert!(tags.iter().all(|tag| !history.contains(*tag)));

        debug!(
            table,
            count = tags.len(),
            first = ?tags.first(),
            last = ?tags.last(),
            "allocated column tags"
        );

        Ok(tags)
    }
}
