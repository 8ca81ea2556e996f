//! Telephone categories.

use std::fmt;

/// A recognized telephone category.
///
/// [`TelCategory::PRIORITY`] fixes the order in which categories are
/// considered when a number carries several labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TelCategory {
    Cell,
    Home,
    Work,
    Main,
    Pref,
    Pager,
    Fax,
    Other,
    Voice,
}

impl TelCategory {
    /// Every category, highest priority first.
    pub const PRIORITY: [Self; 9] = [
        Self::Cell,
        Self::Home,
        Self::Work,
        Self::Main,
        Self::Pref,
        Self::Pager,
        Self::Fax,
        Self::Other,
        Self::Voice,
    ];

    /// Returns the canonical label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Cell => "CELL",
            Self::Home => "HOME",
            Self::Work => "WORK",
            Self::Main => "MAIN",
            Self::Pref => "PREF",
            Self::Pager => "PAGER",
            Self::Fax => "FAX",
            Self::Other => "OTHER",
            Self::Voice => "VOICE",
        }
    }

    /// Position in [`TelCategory::PRIORITY`]; 0 is the highest priority.
    #[must_use]
    pub const fn rank(self) -> usize {
        self as usize
    }

    /// Parses a label case-insensitively.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        Self::PRIORITY
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(label.trim()))
    }

    /// Returns the highest-priority category among `labels`.
    ///
    /// Unrecognized labels are ignored; `None` means nothing was recognized.
    #[must_use]
    pub fn first_of<'a, I>(labels: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let found: Vec<Self> = labels.into_iter().filter_map(Self::from_label).collect();
        Self::PRIORITY.into_iter().find(|c| found.contains(c))
    }
}

impl fmt::Display for TelCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
