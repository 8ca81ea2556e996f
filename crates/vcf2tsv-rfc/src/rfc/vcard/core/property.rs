//! vCard property types.

use super::parameter::VCardParameter;
use super::value::VCardValue;

/// A vCard property.
///
/// Contains the decoded value along with the raw value as it appeared in
/// the content line.
#[derive(Debug, Clone, PartialEq)]
pub struct VCardProperty {
    /// Optional property group (e.g., "item1" in "item1.TEL").
    pub group: Option<String>,
    /// Property name (normalized to uppercase).
    pub name: String,
    /// Parameters in order of appearance.
    pub params: Vec<VCardParameter>,
    /// Decoded value.
    pub value: VCardValue,
    /// Raw value string, before any transfer decoding or unescaping.
    pub raw_value: String,
}

impl VCardProperty {
    /// Creates a property with a text value.
    #[must_use]
    pub fn text(name: impl Into<String>, value: impl Into<String>) -> Self {
        let value_str = value.into();
        Self {
            group: None,
            name: name.into().to_ascii_uppercase(),
            params: Vec::new(),
            value: VCardValue::Text(value_str.clone()),
            raw_value: value_str,
        }
    }

    /// Returns the first parameter with the given name.
    #[must_use]
    pub fn get_param(&self, name: &str) -> Option<&VCardParameter> {
        self.params
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(name))
    }

    /// Returns the value of a parameter.
    #[must_use]
    pub fn get_param_value(&self, name: &str) -> Option<&str> {
        self.get_param(name)?.value()
    }

    /// Returns every value of every TYPE parameter, in order of appearance.
    ///
    /// `TEL;TYPE=CELL;TYPE=PREF` and `TEL;TYPE=CELL,PREF` yield the same list.
    pub fn type_values(&self) -> impl Iterator<Item = &str> {
        self.params
            .iter()
            .filter(|p| p.name == "TYPE")
            .flat_map(|p| p.values.iter().map(String::as_str))
    }

    /// Returns the labels of all valueless parameters.
    pub fn singleton_labels(&self) -> impl Iterator<Item = &str> {
        self.params
            .iter()
            .filter(|p| p.is_singleton())
            .map(|p| p.name.as_str())
    }

    /// Returns whether this property has the specified TYPE value.
    #[must_use]
    pub fn has_type(&self, type_value: &str) -> bool {
        self.type_values()
            .any(|v| v.eq_ignore_ascii_case(type_value))
    }

    /// Returns whether this property carries the given valueless parameter.
    #[must_use]
    pub fn has_singleton(&self, label: &str) -> bool {
        self.singleton_labels()
            .any(|l| l.eq_ignore_ascii_case(label))
    }

    /// Returns whether the value is quoted-printable encoded.
    ///
    /// Accepts both `ENCODING=QUOTED-PRINTABLE` and the bare 2.1 form.
    #[must_use]
    pub fn is_quoted_printable(&self) -> bool {
        is_quoted_printable(&self.params)
    }

    /// Returns the value as text if it is a text value.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match &self.value {
            VCardValue::Text(s) => Some(s),
            VCardValue::StructuredName(_) => None,
        }
    }

    /// Adds a parameter to this property.
    pub fn add_param(&mut self, param: VCardParameter) {
        self.params.push(param);
    }
}

pub(crate) fn is_quoted_printable(params: &[VCardParameter]) -> bool {
    params.iter().any(|p| {
        (p.name == "ENCODING" && p.has_value("QUOTED-PRINTABLE"))
            || (p.is_singleton() && p.name == "QUOTED-PRINTABLE")
    })
}

/// Property names the converter reads.
pub mod names {
    pub const FN: &str = "FN";
    pub const N: &str = "N";
    pub const TEL: &str = "TEL";
    pub const EMAIL: &str = "EMAIL";
    pub const NOTE: &str = "NOTE";
    pub const VERSION: &str = "VERSION";
}
