use super::Error;

/// Error when the allocator cannot produce the requested number of fresh
/// tags below its ceiling.
#[derive(Debug)]
pub(super) struct TagSpaceExhausted {
    table: Box<str>,
    requested: usize,
}

impl std::error::Error for TagSpaceExhausted {}

impl core::fmt::Display for TagSpaceExhausted {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "tag space exhausted: cannot allocate {} tags for table <{}>",
            self.requested, self.table
        )
    }
}

impl Error {
    /// Creates a tag space exhausted error.
    pub fn tag_space_exhausted(table: impl Into<String>, requested: usize) -> Error {
        Error::from(super::ErrorKind::TagSpaceExhausted(TagSpaceExhausted {
            table: table.into().into(),
            requested,
        }))
    }

    /// Returns `true` if this error is a tag space exhausted error.
    pub fn is_tag_space_exhausted(&self) -> bool {
        self.any(|kind| matches!(kind, super::ErrorKind::TagSpaceExhausted(_)))
    }
}
