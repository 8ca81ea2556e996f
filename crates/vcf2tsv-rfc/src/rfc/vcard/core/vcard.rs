//! vCard wrapper type.

use std::fmt;

use super::category::TelCategory;
use super::property::{VCardProperty, names};
use super::structured::StructuredName;

/// vCard version.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VCardVersion {
    /// vCard 2.1 (versit).
    V21,
    /// vCard 3.0 (RFC 2426).
    V30,
}

impl VCardVersion {
    /// Parses from version string.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "2.1" => Some(Self::V21),
            "3.0" => Some(Self::V30),
            _ => None,
        }
    }

    /// Returns the version string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::V21 => "2.1",
            Self::V30 => "3.0",
        }
    }

    /// Returns the category labels attached to a TEL property.
    ///
    /// 2.1 writes them as valueless parameters (`TEL;CELL;PREF:`), 3.0 as
    /// values of the TYPE parameter (`TEL;TYPE=CELL,PREF:`). Only the form
    /// belonging to the version is consulted.
    #[must_use]
    pub fn tel_labels(self, prop: &VCardProperty) -> Vec<&str> {
        match self {
            Self::V21 => prop.singleton_labels().collect(),
            Self::V30 => prop.type_values().collect(),
        }
    }

    /// Whether text values use backslash escapes.
    #[must_use]
    pub const fn escapes_text(self) -> bool {
        matches!(self, Self::V30)
    }
}

impl fmt::Display for VCardVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A telephone number together with the category labels it was written with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Telephone<'a> {
    /// The number as written (untrimmed).
    pub value: &'a str,
    /// Labels as they appear on the property, recognized or not.
    pub labels: Vec<&'a str>,
}

impl Telephone<'_> {
    /// Returns the highest-priority recognized category, if any.
    #[must_use]
    pub fn category(&self) -> Option<TelCategory> {
        TelCategory::first_of(self.labels.iter().copied())
    }
}

/// A complete vCard.
#[derive(Debug, Clone, PartialEq)]
pub struct VCard {
    /// vCard version.
    pub version: VCardVersion,
    /// All properties in order of appearance, excluding VERSION.
    pub properties: Vec<VCardProperty>,
}

impl VCard {
    /// Creates an empty vCard with the specified version.
    #[must_use]
    pub fn with_version(version: VCardVersion) -> Self {
        Self {
            version,
            properties: Vec::new(),
        }
    }

    /// Adds a property to the vCard.
    pub fn add_property(&mut self, prop: VCardProperty) {
        self.properties.push(prop);
    }

    /// Returns all properties with the given name.
    #[must_use]
    pub fn get_properties(&self, name: &str) -> Vec<&VCardProperty> {
        self.properties
            .iter()
            .filter(|p| p.name.eq_ignore_ascii_case(name))
            .collect()
    }

    /// Returns the first property with the given name.
    #[must_use]
    pub fn get_property(&self, name: &str) -> Option<&VCardProperty> {
        self.properties
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(name))
    }

    /// Returns the FN (formatted name) value.
    #[must_use]
    pub fn formatted_name(&self) -> Option<&str> {
        self.get_property(names::FN)?.as_text()
    }

    /// Returns the N (structured name) value.
    #[must_use]
    pub fn name(&self) -> Option<&StructuredName> {
        self.get_property(names::N)?.value.as_structured_name()
    }

    /// Returns the first EMAIL value.
    #[must_use]
    pub fn email(&self) -> Option<&str> {
        self.get_property(names::EMAIL)?.as_text()
    }

    /// Returns the NOTE value.
    #[must_use]
    pub fn note(&self) -> Option<&str> {
        self.get_property(names::NOTE)?.as_text()
    }

    /// Returns all TEL properties with their category labels, in file order.
    #[must_use]
    pub fn telephones(&self) -> Vec<Telephone<'_>> {
        self.get_properties(names::TEL)
            .into_iter()
            .filter_map(|p| {
                Some(Telephone {
                    value: p.as_text()?,
                    labels: self.version.tel_labels(p),
                })
            })
            .collect()
    }
}
