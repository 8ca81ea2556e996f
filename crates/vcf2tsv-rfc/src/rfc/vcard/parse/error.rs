//! vCard parse error types.

use std::fmt;

use thiserror::Error;

/// Result type for vCard parsing operations.
pub type ParseResult<T> = Result<T, ParseError>;

/// A malformed document, located by the physical line it was found on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("line {line}: {kind}: {message}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    /// 1-based; for folded lines, the line the logical line starts on.
    pub line: usize,
    pub message: String,
}

impl ParseError {
    #[must_use]
    pub fn new(kind: ParseErrorKind, line: usize, message: impl Into<String>) -> Self {
        Self {
            kind,
            line,
            message: message.into(),
        }
    }

    /// Creates an unexpected token error.
    #[must_use]
    pub fn unexpected(line: usize, expected: &str, found: &str) -> Self {
        Self::new(
            ParseErrorKind::UnexpectedToken,
            line,
            format!("expected {expected}, found {found}"),
        )
    }

    /// Creates a missing property error.
    #[must_use]
    pub fn missing_property(line: usize, name: &str) -> Self {
        Self::new(
            ParseErrorKind::MissingProperty,
            line,
            format!("missing required property: {name}"),
        )
    }

    /// Creates an unsupported version error.
    #[must_use]
    pub fn unsupported_version(line: usize, version: &str) -> Self {
        Self::new(
            ParseErrorKind::UnsupportedVersion,
            line,
            format!("unsupported vCard version: {}", version.trim()),
        )
    }
}

/// What went wrong.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// Input ended inside an open card.
    UnexpectedEof,
    /// A structural line out of place, e.g. a nested `BEGIN:VCARD`.
    UnexpectedToken,
    MissingProperty,
    /// A property allowed once per card (VERSION) repeated.
    DuplicateProperty,
    /// No `:` separator, or a name outside `[A-Za-z0-9-]`.
    InvalidPropertyName,
    InvalidParameter,
    /// VERSION other than 2.1 or 3.0.
    UnsupportedVersion,
}

impl ParseErrorKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::UnexpectedEof => "unexpected end of input",
            Self::UnexpectedToken => "unexpected token",
            Self::MissingProperty => "missing property",
            Self::DuplicateProperty => "duplicate property",
            Self::InvalidPropertyName => "invalid property name",
            Self::InvalidParameter => "invalid parameter",
            Self::UnsupportedVersion => "unsupported version",
        }
    }
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
