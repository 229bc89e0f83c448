use super::Type;
use crate::{schema::Tag, Result};

/// A column as described to, or by, the SQL engine.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Column {
    pub name: String,

    pub ty: Type,

    pub nullable: bool,

    pub primary_key: bool,

    /// Default value expression
    pub default: Option<String>,

    pub auto_increment: bool,

    pub comment: String,

    /// Name of the table the column belongs to. Empty for computed columns.
    pub source: String,

    /// Auxiliary annotation, `tag:<uint64>` when the column's tag is known.
    pub extra: Option<String>,
}

impl Column {
    /// Creates a nullable, non-key column with no annotation.
    pub fn new(name: impl Into<String>, ty: Type) -> Self {
        Self {
            name: name.into(),
            ty,
            nullable: true,
            primary_key: false,
            default: None,
            auto_increment: false,
            comment: String::new(),
            source: String::new(),
            extra: None,
        }
    }

    /// Returns the tag carried by the column's annotation.
    ///
    /// `None` if the column has no annotation. Fails if the annotation is
    /// present but malformed.
    pub fn tag(&self) -> Result<Option<Tag>> {
        match self.extra.as_deref() {
            None | Some("") => Ok(None),
            Some(extra) => Tag::from_annotation(extra).map(Some),
        }
    }
}
