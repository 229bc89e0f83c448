use super::Error;

/// Error when a tag mapping cannot be built.
///
/// This occurs when:
/// - An explicit mapping references a tag absent from the source or
///   destination schema
/// - An explicit mapping maps one tag twice
/// - A complete name-based mapping leaves a destination column without a
///   source
/// - A tag annotation on an external column cannot be parsed
#[derive(Debug)]
pub(super) struct UnmappableColumn {
    message: Box<str>,
}

impl std::error::Error for UnmappableColumn {}

impl core::fmt::Display for UnmappableColumn {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "unmappable column: {}", self.message)
    }
}

impl Error {
    /// Creates an unmappable column error.
    pub fn unmappable_column(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::UnmappableColumn(UnmappableColumn {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is an unmappable column error, or a
    /// column lookup failure.
    pub fn is_unmappable_column(&self) -> bool {
        self.any(|kind| {
            matches!(
                kind,
                super::ErrorKind::UnmappableColumn(_) | super::ErrorKind::ColumnNotFound(_)
            )
        })
    }
}
