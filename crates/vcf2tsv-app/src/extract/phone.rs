//! Telephone category resolution.

use vcf2tsv_rfc::rfc::vcard::{TelCategory, Telephone};

/// One slot per recognized category, filled by the first matching number.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PhoneSlots {
    slots: [Option<String>; TelCategory::PRIORITY.len()],
}

impl PhoneSlots {
    /// ## Summary
    /// Assigns each number, in file order, to its highest-priority category.
    ///
    /// A number only fills a slot that is still empty, so earlier numbers win
    /// over later ones of the same category, and a number with several
    /// labels lands in exactly one slot. Numbers with no recognized label are
    /// handed to `on_unrecognized` and otherwise skipped.
    pub fn resolve<'a, F>(telephones: &[Telephone<'a>], mut on_unrecognized: F) -> Self
    where
        F: FnMut(&Telephone<'a>),
    {
        let mut resolved = Self::default();

        for telephone in telephones {
            let Some(category) = telephone.category() else {
                on_unrecognized(telephone);
                continue;
            };

            let slot = &mut resolved.slots[category.rank()];
            if slot.is_none() {
                *slot = Some(telephone.value.trim().to_string());
            }
        }

        resolved
    }

    /// Returns the number stored for `category`.
    #[must_use]
    pub fn get(&self, category: TelCategory) -> Option<&str> {
        self.slots[category.rank()].as_deref()
    }

    /// Removes and returns the number stored for `category`.
    pub fn take(&mut self, category: TelCategory) -> Option<String> {
        self.slots[category.rank()].take()
    }
}
