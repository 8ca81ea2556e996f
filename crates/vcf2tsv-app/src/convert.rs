//! The conversion pipeline: scan, parse, extract, write.

use std::fs;
use std::path::Path;

use vcf2tsv_rfc::error::RfcError;
use vcf2tsv_rfc::rfc::vcard;

use crate::error::{AppError, AppResult};
use crate::extract::{DiagnosticSink, FieldExtractor};
use crate::row::OutputRow;
use crate::scan::{ScanOutcome, scan_directory};
use crate::writer::TsvWriter;

/// Counts reported after a successful run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConversionSummary {
    pub files: usize,
    pub rows: usize,
}

/// Drives one conversion run from an input directory to a TSV file.
#[derive(Debug)]
pub struct Converter<S> {
    extractor: FieldExtractor<S>,
}

impl<S: DiagnosticSink> Converter<S> {
    #[must_use]
    pub fn new(sink: S) -> Self {
        Self {
            extractor: FieldExtractor::new(sink),
        }
    }

    #[must_use]
    pub fn into_sink(self) -> S {
        self.extractor.into_sink()
    }

    /// ## Summary
    /// Converts every `.vcf` file in `read_dir`, in path order, into rows of
    /// `output`.
    ///
    /// The output is only opened once at least one input file is found. Each
    /// file is parsed completely before any of its rows are written. On a
    /// failure the rows of earlier files are flushed and left in place.
    ///
    /// ## Errors
    /// - [`AppError::NoInput`] if `read_dir` holds no `.vcf` file
    /// - [`AppError::Format`] for the first file that fails to parse
    /// - [`AppError::Io`] if a file cannot be read or the output written
    #[tracing::instrument(skip_all, fields(read_dir = %read_dir.display(), output = %output.display()))]
    pub fn run(&mut self, read_dir: &Path, output: &Path) -> AppResult<ConversionSummary> {
        let files = match scan_directory(read_dir)? {
            ScanOutcome::Files(files) => files,
            ScanOutcome::NoMatches => {
                return Err(AppError::NoInput {
                    dir: read_dir.to_path_buf(),
                });
            }
        };

        let mut writer = TsvWriter::create(output)?;
        let mut summary = ConversionSummary::default();

        let result: AppResult<()> = files.iter().try_for_each(|path| {
            let rows = self.convert_file(path)?;
            for row in &rows {
                writer.write_row(row)?;
            }
            summary.files += 1;
            summary.rows += rows.len();
            Ok(())
        });

        let flushed = writer.flush();
        result?;
        flushed?;

        tracing::info!(
            files = summary.files,
            rows = summary.rows,
            "Conversion finished"
        );

        Ok(summary)
    }

    /// ## Summary
    /// Reads and parses one file, returning a row per card in file order.
    ///
    /// ## Errors
    /// Returns [`AppError::Io`] if the file cannot be read as UTF-8 text and
    /// [`AppError::Format`] if it is not a well-formed vCard document.
    pub fn convert_file(&mut self, path: &Path) -> AppResult<Vec<OutputRow>> {
        tracing::debug!(path = %path.display(), "Processing file");

        let input = fs::read_to_string(path).map_err(AppError::io(path))?;
        let cards = vcard::parse(&input).map_err(|source| AppError::Format {
            path: path.to_path_buf(),
            source: RfcError::from(source),
        })?;

        if cards.is_empty() {
            tracing::debug!(path = %path.display(), "File holds no cards");
        }

        Ok(cards
            .iter()
            .map(|card| self.extractor.extract(card, path))
            .collect())
    }
}
