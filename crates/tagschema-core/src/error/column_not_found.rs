use super::Error;

/// Error when a column lookup by name or tag finds nothing.
#[derive(Debug)]
pub(super) struct ColumnNotFound {
    column: Box<str>,
}

impl std::error::Error for ColumnNotFound {}

impl core::fmt::Display for ColumnNotFound {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "column not found: {}", self.column)
    }
}

impl Error {
    /// Creates a column not found error. `column` is either a name or a
    /// rendered tag.
    pub fn column_not_found(column: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::ColumnNotFound(ColumnNotFound {
            column: column.into().into(),
        }))
    }

    /// Returns `true` if this error is a column not found error.
    pub fn is_column_not_found(&self) -> bool {
        self.any(|kind| matches!(kind, super::ErrorKind::ColumnNotFound(_)))
    }
}
