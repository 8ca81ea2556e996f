//! vCard value types.

use super::structured::StructuredName;

/// A decoded vCard property value.
///
/// Only the structured name gets its own shape; every other property the
/// converter reads is plain text.
#[derive(Debug, Clone, PartialEq)]
pub enum VCardValue {
    /// Text value, already unescaped and transfer-decoded.
    Text(String),
    /// Structured name (N property).
    StructuredName(StructuredName),
}

impl VCardValue {
    /// Returns the structured name, if this is one.
    #[must_use]
    pub fn as_structured_name(&self) -> Option<&StructuredName> {
        match self {
            Self::StructuredName(n) => Some(n),
            Self::Text(_) => None,
        }
    }
}
