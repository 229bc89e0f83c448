use super::{Kind, Tag, TypeInfo};

/// A column definition.
///
/// Columns are immutable values. Altering a column produces a new `Column`
/// carrying the same tag.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Column {
    /// Permanent identity of the column within its table's history.
    pub tag: Tag,

    /// The name of the column. Unique within a schema, may change across
    /// schema versions while the tag stays fixed.
    pub name: String,

    /// The column type.
    pub ty: TypeInfo,

    /// True if the column is part of the table's primary key
    pub primary_key: bool,

    /// Default value expression, as written by the user.
    pub default: Option<String>,

    /// True if the column is an integer that should be auto-incremented
    /// with each insertion of a new row.
    pub auto_increment: bool,

    pub comment: String,

    pub constraints: Vec<Constraint>,
}

/// A constraint on the values a column accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Constraint {
    /// The column does not accept `NULL`.
    NotNull,
}

impl Column {
    /// Creates a nullable column with no default.
    pub fn new(name: impl Into<String>, tag: impl Into<Tag>, ty: TypeInfo, primary_key: bool) -> Self {
        Self {
            tag: tag.into(),
            name: name.into(),
            ty,
            primary_key,
            default: None,
            auto_increment: false,
            comment: String::new(),
            constraints: vec![],
        }
    }

    pub fn not_null(mut self) -> Self {
        if self.is_nullable() {
            self.constraints.push(Constraint::NotNull);
        }
        self
    }

    pub fn with_default(mut self, expr: impl Into<String>) -> Self {
        self.default = Some(expr.into());
        self
    }

    pub fn with_auto_increment(mut self) -> Self {
        self.auto_increment = true;
        self
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = comment.into();
        self
    }

    /// Returns a copy of the column under a new name. The tag is unchanged.
    pub fn renamed(&self, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..self.clone()
        }
    }

    pub fn is_nullable(&self) -> bool {
        !self.constraints.contains(&Constraint::NotNull)
    }

    pub const fn kind(&self) -> Kind {
        self.ty.kind()
    }
}

impl From<&Column> for Tag {
    fn from(value: &Column) -> Self {
        value.tag
    }
}
