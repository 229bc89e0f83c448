use super::Error;

/// Error when an external type has no internal type descriptor.
#[derive(Debug)]
pub(super) struct UnsupportedType {
    message: Box<str>,
}

impl std::error::Error for UnsupportedType {}

impl core::fmt::Display for UnsupportedType {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "unsupported type: {}", self.message)
    }
}

impl Error {
    /// Creates an unsupported type error.
    pub fn unsupported_type(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::UnsupportedType(UnsupportedType {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is an unsupported type error.
    pub fn is_unsupported_type(&self) -> bool {
        self.any(|kind| matches!(kind, super::ErrorKind::UnsupportedType(_)))
    }
}
