mod adhoc;
mod column_not_found;
mod duplicate_identity;
mod incomplete_write;
mod invalid_schema;
mod non_nullable;
mod tag_space_exhausted;
mod type_mismatch;
mod unmappable_column;
mod unsupported_type;
mod value_conversion;

use adhoc::AdhocError;
use column_not_found::ColumnNotFound;
use duplicate_identity::DuplicateIdentity;
use incomplete_write::IncompleteWrite;
use invalid_schema::InvalidSchema;
use non_nullable::NonNullable;
use std::sync::Arc;
use tag_space_exhausted::TagSpaceExhausted;
use type_mismatch::TypeMismatch;
use unmappable_column::UnmappableColumn;
use unsupported_type::UnsupportedType;
use value_conversion::ValueConversion;

/// Returns early with an ad hoc [`Error`] built from a format string.
///
/// Reserved for internal consistency checks. Conditions a caller is expected
/// to handle get a dedicated error kind instead.
#[macro_export]
macro_rules! bail {
    ($($arg:tt)*) => {
        return Err($crate::Error::from_args(format_args!($($arg)*)))
    };
}

/// Builds an ad hoc [`Error`] from a format string.
#[macro_export]
macro_rules! err {
    ($($arg:tt)*) => {
        $crate::Error::from_args(format_args!($($arg)*))
    };
}

/// An error raised by the tagged schema layer.
///
/// None of these errors are retried internally. They all describe a contract
/// violation by the caller (bad schema, bad mapping, bad value) or an output
/// stream that could not be completed.
#[derive(Clone)]
pub struct Error {
    inner: Option<Arc<ErrorInner>>,
}

#[derive(Debug)]
struct ErrorInner {
    kind: ErrorKind,
    cause: Option<Error>,
}

impl Error {
    /// Adds context to this error.
    ///
    /// Context is displayed in reverse order: the most recently added context is shown first,
    /// followed by earlier context, ending with the root cause. A consequent that is shared or
    /// already carries a cause is wrapped whole.
    #[inline(always)]
    pub fn context(self, consequent: impl IntoError) -> Error {
        self.context_impl(consequent.into_error())
    }

    #[inline(never)]
    #[cold]
    fn context_impl(self, consequent: Error) -> Error {
        let mut err = consequent;
        if err.inner.is_none() {
            err = Error::from(ErrorKind::Unknown);
        }

        if let Some(inner) = err
            .inner
            .as_mut()
            .and_then(Arc::get_mut)
            .filter(|inner| inner.cause.is_none())
        {
            inner.cause = Some(self);
            return err;
        }

        Error {
            inner: Some(Arc::new(ErrorInner {
                kind: ErrorKind::Context(err),
                cause: Some(self),
            })),
        }
    }

    /// Returns the innermost error of the context chain.
    pub fn root(&self) -> &Error {
        self.chain().last().unwrap_or(self)
    }

    fn chain(&self) -> impl Iterator<Item = &Error> {
        let mut err = self;
        core::iter::once(err).chain(core::iter::from_fn(move || {
            err = err.inner.as_ref().and_then(|inner| inner.cause.as_ref())?;
            Some(err)
        }))
    }

    fn kind(&self) -> &ErrorKind {
        self.inner
            .as_ref()
            .map(|inner| &inner.kind)
            .unwrap_or(&ErrorKind::Unknown)
    }

    /// Returns `true` if this error, or any error in its context chain,
    /// satisfies `f`.
    fn any(&self, f: impl Fn(&ErrorKind) -> bool) -> bool {
        self.any_dyn(&f)
    }

    fn any_dyn(&self, f: &dyn Fn(&ErrorKind) -> bool) -> bool {
        self.chain().any(|err| match err.kind() {
            ErrorKind::Context(wrapped) => wrapped.any_dyn(f),
            kind => f(kind),
        })
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self.kind() {
            ErrorKind::Anyhow(err) => Some(err.as_ref()),
            _ => None,
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let mut it = self.chain().peekable();
        while let Some(err) = it.next() {
            core::fmt::Display::fmt(err.kind(), f)?;
            if it.peek().is_some() {
                f.write_str(": ")?;
            }
        }
        Ok(())
    }
}

impl core::fmt::Debug for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        if !f.alternate() {
            core::fmt::Display::fmt(self, f)
        } else {
            let Some(ref inner) = self.inner else {
                return f.debug_struct("Error").field("kind", &"None").finish();
            };
            f.debug_struct("Error")
                .field("kind", &inner.kind)
                .field("cause", &inner.cause)
                .finish()
        }
    }
}

#[derive(Debug)]
enum ErrorKind {
    Anyhow(anyhow::Error),
    Adhoc(AdhocError),
    /// A whole error used as context for another
    Context(Error),
    ColumnNotFound(ColumnNotFound),
    DuplicateIdentity(DuplicateIdentity),
    IncompleteWrite(IncompleteWrite),
    InvalidSchema(InvalidSchema),
    NonNullable(NonNullable),
    TagSpaceExhausted(TagSpaceExhausted),
    TypeMismatch(TypeMismatch),
    UnmappableColumn(UnmappableColumn),
    UnsupportedType(UnsupportedType),
    ValueConversion(ValueConversion),
    Unknown,
}

impl core::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use self::ErrorKind::*;

        match self {
            Anyhow(err) => core::fmt::Display::fmt(err, f),
            Adhoc(err) => core::fmt::Display::fmt(err, f),
            Context(err) => core::fmt::Display::fmt(err, f),
            ColumnNotFound(err) => core::fmt::Display::fmt(err, f),
            DuplicateIdentity(err) => core::fmt::Display::fmt(err, f),
            IncompleteWrite(err) => core::fmt::Display::fmt(err, f),
            InvalidSchema(err) => core::fmt::Display::fmt(err, f),
            NonNullable(err) => core::fmt::Display::fmt(err, f),
            TagSpaceExhausted(err) => core::fmt::Display::fmt(err, f),
            TypeMismatch(err) => core::fmt::Display::fmt(err, f),
            UnmappableColumn(err) => core::fmt::Display::fmt(err, f),
            UnsupportedType(err) => core::fmt::Display::fmt(err, f),
            ValueConversion(err) => core::fmt::Display::fmt(err, f),
            Unknown => f.write_str("unknown tagschema error"),
        }
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        Error {
            inner: Some(Arc::new(ErrorInner { kind, cause: None })),
        }
    }
}

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Error {
        Error::from(ErrorKind::Anyhow(err))
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Error {
        Error::from(anyhow::Error::from(err))
    }
}

impl From<uuid::Error> for Error {
    fn from(err: uuid::Error) -> Error {
        Error::from(anyhow::Error::from(err))
    }
}

/// Trait for types that can be converted into an Error.
pub trait IntoError {
    /// Converts this type into an Error.
    fn into_error(self) -> Error;
}

impl IntoError for Error {
    #[inline(always)]
    fn into_error(self) -> Error {
        self
    }
}
