//! Structured vCard types.

/// Structured name (N property).
///
/// The five components are `family;given;additional;prefixes;suffixes`,
/// each of which may hold several comma-separated values. All components
/// are optional.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StructuredName {
    /// Family names (surnames).
    pub family: Vec<String>,
    /// Given names (first names).
    pub given: Vec<String>,
    /// Additional names (middle names).
    pub additional: Vec<String>,
    /// Honorific prefixes (e.g., "Mr.", "Dr.").
    pub prefixes: Vec<String>,
    /// Honorific suffixes (e.g., "Jr.", "M.D.").
    pub suffixes: Vec<String>,
}

impl StructuredName {
    /// Creates a structured name with family and given names.
    #[must_use]
    pub fn simple(family: impl Into<String>, given: impl Into<String>) -> Self {
        Self {
            family: vec![family.into()],
            given: vec![given.into()],
            ..Self::default()
        }
    }

    /// Returns whether the name is empty (all components are empty).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.components().iter().all(|c| c.is_empty())
    }

    /// Components in reading order: prefixes, given, additional, family, suffixes.
    fn components(&self) -> [&Vec<String>; 5] {
        [
            &self.prefixes,
            &self.given,
            &self.additional,
            &self.family,
            &self.suffixes,
        ]
    }

    /// Formats the name on one line in reading order.
    ///
    /// Multi-valued components are space-joined, empty components leave no
    /// gap, and runs of whitespace collapse to a single space.
    ///
    /// `N:Public;John;Quinlan;Mr.;Esq.` renders as `Mr. John Quinlan Public Esq.`.
    #[must_use]
    pub fn display_name(&self) -> String {
        let joined = self
            .components()
            .iter()
            .map(|c| c.join(" "))
            .collect::<Vec<_>>()
            .join(" ");

        joined.split_whitespace().collect::<Vec<_>>().join(" ")
    }
}
