use std::fmt;

/// Tags at or above this value are reserved for system tables and are never
/// handed out for user columns.
pub const RESERVED_TAG_MIN: u64 = 1 << 50;

/// Permanent identity of a column.
///
/// A tag is assigned once, when the column is introduced, and stays with the
/// column through renames and reorders. Tags are unique within a table's
/// entire history: a tag retired by a dropped column is never reused.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Tag(pub u64);

impl From<u64> for Tag {
    fn from(value: u64) -> Self {
        Tag(value)
    }
}

impl From<Tag> for u64 {
    fn from(value: Tag) -> Self {
        value.0
    }
}

impl fmt::Debug for Tag {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "Tag({})", self.0)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, fmt)
    }
}
