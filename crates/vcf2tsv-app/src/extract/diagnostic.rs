//! Recoverable findings raised while extracting rows.

use std::fmt;
use std::path::{Path, PathBuf};

/// How loudly a diagnostic is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Something looks wrong with the input, but the row is still written.
    Warning,
    /// Expected and common; only of interest when debugging.
    Debug,
}

/// A recoverable finding about one vCard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// The card has no N property.
    MissingName { path: PathBuf },
    /// A TEL entry carries no recognized category and was skipped.
    UnrecognizedPhoneCategory {
        path: PathBuf,
        number: String,
        labels: Vec<String>,
    },
    /// None of the cell, work or home columns could be filled.
    NoPhoneNumbers { path: PathBuf, name: Option<String> },
}

impl Diagnostic {
    #[must_use]
    pub fn severity(&self) -> Severity {
        match self {
            Self::MissingName { .. } | Self::UnrecognizedPhoneCategory { .. } => Severity::Warning,
            Self::NoPhoneNumbers { .. } => Severity::Debug,
        }
    }

    /// The file the card came from.
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::MissingName { path }
            | Self::UnrecognizedPhoneCategory { path, .. }
            | Self::NoPhoneNumbers { path, .. } => path,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingName { path } => write!(f, "no name for file `{}`", path.display()),
            Self::UnrecognizedPhoneCategory {
                path,
                number,
                labels,
            } => write!(
                f,
                "unrecognized phone number category [{}] for `{number}` in `{}`",
                labels.join(", "),
                path.display()
            ),
            Self::NoPhoneNumbers { path, name } => write!(
                f,
                "no telephone numbers for file `{}` with name `{}`",
                path.display(),
                name.as_deref().unwrap_or_default()
            ),
        }
    }
}

/// Receives diagnostics from the extractor.
pub trait DiagnosticSink {
    fn report(&mut self, diagnostic: Diagnostic);
}

/// Forwards diagnostics to `tracing` at their severity.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn report(&mut self, diagnostic: Diagnostic) {
        let path = diagnostic.path().display();
        match diagnostic.severity() {
            Severity::Warning => tracing::warn!(path = %path, "{diagnostic}"),
            Severity::Debug => tracing::debug!(path = %path, "{diagnostic}"),
        }
    }
}

/// Keeps diagnostics in memory.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    pub diagnostics: Vec<Diagnostic>,
}

impl MemorySink {
    /// Diagnostics reported at [`Severity::Warning`].
    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| d.severity() == Severity::Warning)
    }
}

impl DiagnosticSink for MemorySink {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for &mut S {
    fn report(&mut self, diagnostic: Diagnostic) {
        (**self).report(diagnostic);
    }
}
