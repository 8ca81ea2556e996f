//! Mapping of parsed vCards onto the fixed output columns.

mod diagnostic;
mod phone;

use std::path::Path;

use vcf2tsv_rfc::rfc::vcard::{TelCategory, VCard};

pub use diagnostic::{Diagnostic, DiagnosticSink, MemorySink, Severity, TracingSink};
pub use phone::PhoneSlots;

use crate::row::OutputRow;

/// Builds [`OutputRow`]s from vCards, reporting recoverable findings to a sink.
#[derive(Debug)]
pub struct FieldExtractor<S> {
    sink: S,
}

impl<S: DiagnosticSink> FieldExtractor<S> {
    #[must_use]
    pub fn new(sink: S) -> Self {
        Self { sink }
    }

    #[must_use]
    pub fn into_sink(self) -> S {
        self.sink
    }

    /// ## Summary
    /// Extracts one row from `card`. `path` names the source file in
    /// diagnostics.
    ///
    /// - Full name: FN as written
    /// - Name: N in reading order, whitespace collapsed
    /// - Cell/Work/Home phone: see [`PhoneSlots::resolve`]
    /// - Email: first EMAIL, trimmed
    /// - Note: NOTE as decoded
    pub fn extract(&mut self, card: &VCard, path: &Path) -> OutputRow {
        let name = card.name().map(|n| n.display_name());
        if name.is_none() {
            self.sink.report(Diagnostic::MissingName {
                path: path.to_path_buf(),
            });
        }

        let telephones = card.telephones();
        let mut phones = PhoneSlots::resolve(&telephones, |telephone| {
            self.sink.report(Diagnostic::UnrecognizedPhoneCategory {
                path: path.to_path_buf(),
                number: telephone.value.trim().to_string(),
                labels: telephone.labels.iter().map(ToString::to_string).collect(),
            });
        });

        let cell_phone = phones.take(TelCategory::Cell);
        let work_phone = phones.take(TelCategory::Work);
        let home_phone = phones.take(TelCategory::Home);

        if cell_phone.is_none() && work_phone.is_none() && home_phone.is_none() {
            self.sink.report(Diagnostic::NoPhoneNumbers {
                path: path.to_path_buf(),
                name: name.clone(),
            });
        }

        OutputRow {
            name,
            full_name: card.formatted_name().map(ToString::to_string),
            cell_phone,
            work_phone,
            home_phone,
            email: card.email().map(|email| email.trim().to_string()),
            note: card.note().map(ToString::to_string),
        }
    }
}
