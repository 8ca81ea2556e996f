//! Tab-separated output.

use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::error::{AppError, AppResult};
use crate::row::{COLUMNS, OutputRow};

/// Writes [`OutputRow`]s as tab-separated records terminated by CRLF.
///
/// Cells holding a tab, a line break or a double quote are quoted, with
/// embedded quotes doubled. The header is written on construction.
pub struct TsvWriter<W: Write> {
    inner: csv::Writer<W>,
    path: PathBuf,
}

impl TsvWriter<File> {
    /// ## Summary
    /// Creates (or truncates) the file at `path` and writes the header.
    ///
    /// ## Errors
    /// Returns [`AppError::Io`] if the file cannot be created or written.
    pub fn create(path: &Path) -> AppResult<Self> {
        let file = File::create(path).map_err(AppError::io(path))?;
        Self::new(file, path)
    }
}

impl<W: Write> TsvWriter<W> {
    /// Wraps `writer`; `path` is only used in error messages.
    ///
    /// ## Errors
    /// Returns [`AppError::Io`] if the header cannot be written.
    pub fn new(writer: W, path: impl Into<PathBuf>) -> AppResult<Self> {
        let inner = csv::WriterBuilder::new()
            .delimiter(b'\t')
            .terminator(csv::Terminator::CRLF)
            .quote_style(csv::QuoteStyle::Necessary)
            .from_writer(writer);

        let mut tsv = Self {
            inner,
            path: path.into(),
        };
        tsv.write_record(COLUMNS)?;
        Ok(tsv)
    }

    /// ## Errors
    /// Returns [`AppError::Io`] if the record cannot be written.
    pub fn write_row(&mut self, row: &OutputRow) -> AppResult<()> {
        self.write_record(row.fields())
    }

    /// ## Errors
    /// Returns [`AppError::Io`] if buffered output cannot be flushed.
    pub fn flush(&mut self) -> AppResult<()> {
        self.inner.flush().map_err(AppError::io(&self.path))
    }

    /// Flushes and returns the underlying writer.
    ///
    /// ## Errors
    /// Returns [`AppError::Io`] if buffered output cannot be flushed.
    pub fn into_inner(self) -> AppResult<W> {
        let path = self.path;
        self.inner.into_inner().map_err(|err| {
            let source = err.error();
            AppError::io(path)(io::Error::new(source.kind(), source.to_string()))
        })
    }

    fn write_record(&mut self, record: [&str; 7]) -> AppResult<()> {
        self.inner
            .write_record(record)
            .map_err(|err| AppError::io(&self.path)(io::Error::from(err)))
    }
}
