use thiserror::Error;

use crate::rfc::vcard::ParseError;

/// vCard parsing errors surfaced to callers
#[derive(Error, Debug)]
pub enum RfcError {
    #[error("Format error: {0}")]
    Format(#[from] ParseError),
}

impl RfcError {
    /// Returns the underlying parse error.
    #[must_use]
    pub fn parse_error(&self) -> &ParseError {
        match self {
            Self::Format(err) => err,
        }
    }
}
