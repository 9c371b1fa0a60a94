//! Contains the Error and Result type used throughout the decoder.

use std::fmt;

use crate::Tag;

/// Convenience type for Result.
pub type Result<T> = std::result::Result<T, Error>;

/// An error produced while decoding NBT data or constructing tags.
///
/// The [`kind`][Error::kind] separates failures of the byte source from
/// violations of the format itself, so callers can decide to retry transport
/// failures but must never retry format failures.
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    msg: String,
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

/// The broad category an [`Error`] falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The byte source could not supply the bytes requested: the source was
    /// exhausted, the underlying transport errored, or decompression failed.
    Input,

    /// The bytes were all available, but violate the format's own rules.
    /// Retrying will fail again; the data itself is corrupt.
    Malformed,

    /// A value's native representation does not match, even after coercion,
    /// the tag kind it was declared with.
    InvalidValue,
}

impl Error {
    /// Get the kind of error.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn is_input(&self) -> bool {
        self.kind == ErrorKind::Input
    }

    pub fn is_malformed(&self) -> bool {
        self.kind == ErrorKind::Malformed
    }

    pub fn is_invalid_value(&self) -> bool {
        self.kind == ErrorKind::InvalidValue
    }

    pub(crate) fn input(msg: impl Into<String>) -> Error {
        Error {
            kind: ErrorKind::Input,
            msg: msg.into(),
            source: None,
        }
    }

    pub(crate) fn malformed(msg: impl Into<String>) -> Error {
        Error {
            kind: ErrorKind::Malformed,
            msg: msg.into(),
            source: None,
        }
    }

    pub(crate) fn invalid_value(expected: Tag, found: Tag) -> Error {
        Error {
            kind: ErrorKind::InvalidValue,
            msg: format!("a {found} value is not allowed where {expected} is required"),
            source: None,
        }
    }

    pub(crate) fn invalid_tag(id: u8) -> Error {
        Error::malformed(format!("unknown NBT identifier: {id}"))
    }

    /// Wrap an input failure with what the decoder was attempting when it
    /// occurred. Format and value errors already say what is wrong with the
    /// data and pass through untouched, so a deeply nested input failure
    /// carries a breadcrumb trail while a malformed length does not repeat
    /// itself at every level.
    pub(crate) fn context(self, action: impl fmt::Display) -> Error {
        match self.kind {
            ErrorKind::Input => Error {
                kind: ErrorKind::Input,
                msg: format!("input ended unexpectedly while {action}"),
                source: Some(Box::new(self)),
            },
            _ => self,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.msg)
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error {
            kind: ErrorKind::Input,
            msg: format!("io error: {e}"),
            source: Some(Box::new(e)),
        }
    }
}
