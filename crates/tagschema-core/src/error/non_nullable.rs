use super::Error;

/// Error when a non-nullable column receives no value.
#[derive(Debug)]
pub(super) struct NonNullable {
    column: Box<str>,
}

impl std::error::Error for NonNullable {}

impl core::fmt::Display for NonNullable {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "column <{}> received null but is non-nullable",
            self.column
        )
    }
}

impl Error {
    /// Creates a non-nullable violation error naming `column`.
    pub fn non_nullable(column: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::NonNullable(NonNullable {
            column: column.into().into(),
        }))
    }

    /// Returns `true` if this error is a non-nullable violation.
    pub fn is_non_nullable(&self) -> bool {
        self.any(|kind| matches!(kind, super::ErrorKind::NonNullable(_)))
    }

    /// Returns the column named by a non-nullable violation.
    pub fn non_nullable_column(&self) -> Option<&str> {
        self.chain().find_map(|err| match err.kind() {
            super::ErrorKind::NonNullable(err) => Some(&*err.column),
            super::ErrorKind::Context(wrapped) => wrapped.non_nullable_column(),
            _ => None,
        })
    }
}
