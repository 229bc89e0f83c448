use super::Error;

/// Error when an output stream is closed or abandoned before its closing
/// token is written. The partial output is not a valid document.
#[derive(Debug)]
pub(super) struct IncompleteWrite {
    rows_written: usize,
}

impl std::error::Error for IncompleteWrite {}

impl core::fmt::Display for IncompleteWrite {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "incomplete write: output closed after {} rows without its closing token",
            self.rows_written
        )
    }
}

impl Error {
    /// Creates an incomplete write error.
    pub fn incomplete_write(rows_written: usize) -> Error {
        Error::from(super::ErrorKind::IncompleteWrite(IncompleteWrite {
            rows_written,
        }))
    }

    /// Returns `true` if this error is an incomplete write error.
    pub fn is_incomplete_write(&self) -> bool {
        self.any(|kind| matches!(kind, super::ErrorKind::IncompleteWrite(_)))
    }
}
