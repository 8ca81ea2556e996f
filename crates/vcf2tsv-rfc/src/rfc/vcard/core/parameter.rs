//! vCard parameter types.

/// A vCard parameter.
///
/// Parameters can have multiple values (e.g., `TYPE=home,work`). vCard 2.1
/// also allows a bare label with no `=` at all (e.g., `TEL;CELL:...`); such a
/// singleton parameter is stored with an empty value list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VCardParameter {
    /// Parameter name (normalized to uppercase).
    pub name: String,
    /// Parameter values.
    pub values: Vec<String>,
}

impl VCardParameter {
    /// Creates a new parameter with a single value.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into().to_ascii_uppercase(),
            values: vec![value.into()],
        }
    }

    /// Creates a parameter with multiple values.
    #[must_use]
    pub fn multi(name: impl Into<String>, values: Vec<String>) -> Self {
        Self {
            name: name.into().to_ascii_uppercase(),
            values,
        }
    }

    /// Creates a valueless parameter (vCard 2.1 `TEL;CELL:`).
    #[must_use]
    pub fn singleton(label: impl Into<String>) -> Self {
        Self {
            name: label.into().to_ascii_uppercase(),
            values: Vec::new(),
        }
    }

    /// Returns whether this is a valueless parameter.
    #[must_use]
    pub fn is_singleton(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns the first value, if any.
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        self.values.first().map(String::as_str)
    }

    /// Returns whether the parameter has the specified value (case-insensitive).
    #[must_use]
    pub fn has_value(&self, value: &str) -> bool {
        self.values.iter().any(|v| v.eq_ignore_ascii_case(value))
    }

    /// Creates a TYPE parameter.
    #[must_use]
    pub fn type_param(value: impl Into<String>) -> Self {
        Self::new("TYPE", value)
    }
}
