use crate::{schema::Tag, Error, Result};

/// Prefix of the auxiliary column annotation carrying a tag, `tag:<uint64>`.
///
/// The annotation is a wire convention: anything exporting tagged columns to
/// the SQL engine writes it, and importing a malformed annotation fails
/// instead of dropping the tag.
pub const TAG_ANNOTATION_PREFIX: &str = "tag:";

impl Tag {
    /// Renders the tag as a column annotation.
    pub fn to_annotation(self) -> String {
        format!("{TAG_ANNOTATION_PREFIX}{}", self.0)
    }

    /// Parses a column annotation produced by [`Tag::to_annotation`].
    pub fn from_annotation(src: &str) -> Result<Tag> {
        let Some(digits) = src.strip_prefix(TAG_ANNOTATION_PREFIX) else {
            return Err(malformed(src));
        };

        // `u64::from_str` accepts a leading `+`; the wire format does not
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(malformed(src));
        }

        digits.parse().map(Tag).map_err(|_| malformed(src))
    }
}

fn malformed(src: &str) -> Error {
    Error::unmappable_column(format!("malformed tag annotation {src:?}"))
}
