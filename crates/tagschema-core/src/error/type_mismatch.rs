use super::Error;
use crate::schema::Kind;

/// Error when a value or column is paired with a column of an incompatible
/// type.
#[derive(Debug)]
pub(super) struct TypeMismatch {
    column: Box<str>,
    expected: Kind,
    actual: Kind,
}

impl std::error::Error for TypeMismatch {}

impl core::fmt::Display for TypeMismatch {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "type mismatch for column <{}>: expected {:?}, found {:?}",
            self.column, self.expected, self.actual
        )
    }
}

impl Error {
    /// Creates a type mismatch error.
    pub fn type_mismatch(column: impl Into<String>, expected: Kind, actual: Kind) -> Error {
        Error::from(super::ErrorKind::TypeMismatch(TypeMismatch {
            column: column.into().into(),
            expected,
            actual,
        }))
    }

    /// Returns `true` if this error is a type mismatch error.
    pub fn is_type_mismatch(&self) -> bool {
        self.any(|kind| matches!(kind, super::ErrorKind::TypeMismatch(_)))
    }
}
