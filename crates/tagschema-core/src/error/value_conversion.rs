use super::Error;

/// Error when a stored value cannot be rendered as an external scalar, or an
/// external scalar cannot be parsed into a column's type.
#[derive(Debug)]
pub(super) struct ValueConversion {
    column: Option<Box<str>>,
    message: Box<str>,
}

impl std::error::Error for ValueConversion {}

impl core::fmt::Display for ValueConversion {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str("cannot convert value")?;
        if let Some(ref column) = self.column {
            write!(f, " for column <{}>", column)?;
        }
        write!(f, ": {}", self.message)
    }
}

impl Error {
    /// Creates a value conversion error.
    pub fn value_conversion(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::ValueConversion(ValueConversion {
            column: None,
            message: message.into().into(),
        }))
    }

    /// Attaches the column name to a value conversion error. Other errors are
    /// returned unchanged.
    pub fn with_column(self, column: &str) -> Error {
        match self.kind() {
            super::ErrorKind::ValueConversion(err) if err.column.is_none() => {
                Error::from(super::ErrorKind::ValueConversion(ValueConversion {
                    column: Some(column.into()),
                    message: err.message.clone(),
                }))
            }
            _ => self,
        }
    }

    /// Returns `true` if this error is a value conversion error.
    pub fn is_value_conversion(&self) -> bool {
        self.any(|kind| matches!(kind, super::ErrorKind::ValueConversion(_)))
    }
}
