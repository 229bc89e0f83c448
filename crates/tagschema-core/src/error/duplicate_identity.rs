use super::Error;
use crate::schema::Tag;

/// Error when a column collection contains two columns with the same
/// identity.
///
/// This occurs when:
/// - Two columns share a tag
/// - Two columns share a name
#[derive(Debug)]
pub(super) enum DuplicateIdentity {
    Tag {
        tag: Tag,
        first: Box<str>,
        second: Box<str>,
    },
    Name {
        name: Box<str>,
        first: Tag,
        second: Tag,
    },
}

impl std::error::Error for DuplicateIdentity {}

impl core::fmt::Display for DuplicateIdentity {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match self {
            DuplicateIdentity::Tag { tag, first, second } => {
                write!(f, "duplicate tag {tag}: columns <{first}> and <{second}>")
            }
            DuplicateIdentity::Name {
                name,
                first,
                second,
            } => write!(
                f,
                "duplicate column name <{name}>: tags {first} and {second}"
            ),
        }
    }
}

impl Error {
    /// Creates a duplicate identity error for two columns sharing `tag`.
    pub fn duplicate_tag(tag: Tag, first: &str, second: &str) -> Error {
        Error::from(super::ErrorKind::DuplicateIdentity(DuplicateIdentity::Tag {
            tag,
            first: first.into(),
            second: second.into(),
        }))
    }

    /// Creates a duplicate identity error for two columns sharing `name`.
    pub fn duplicate_name(name: &str, first: Tag, second: Tag) -> Error {
        Error::from(super::ErrorKind::DuplicateIdentity(
            DuplicateIdentity::Name {
                name: name.into(),
                first,
                second,
            },
        ))
    }

    /// Returns `true` if this error is a duplicate tag or name error.
    pub fn is_duplicate_identity(&self) -> bool {
        self.any(|kind| matches!(kind, super::ErrorKind::DuplicateIdentity(_)))
    }

    /// Returns `true` if this error is a duplicate tag error.
    pub fn is_duplicate_tag(&self) -> bool {
        self.any(|kind| {
            matches!(
                kind,
                super::ErrorKind::DuplicateIdentity(DuplicateIdentity::Tag { .. })
            )
        })
    }

    /// Returns `true` if this error is a duplicate name error.
    pub fn is_duplicate_name(&self) -> bool {
        self.any(|kind| {
            matches!(
                kind,
                super::ErrorKind::DuplicateIdentity(DuplicateIdentity::Name { .. })
            )
        })
    }
}
