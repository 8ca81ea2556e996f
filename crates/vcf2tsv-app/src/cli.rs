//! Command-line arguments and their pre-flight validation.

use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};

use clap::Parser;

use crate::error::{AppError, AppResult};

/// Convert a bunch of vCard (.vcf) files to a single TSV file.
#[derive(Debug, Clone, Parser)]
#[command(name = "convert", version, about)]
pub struct Args {
    /// Directory holding the `.vcf` files
    pub read_dir: PathBuf,

    /// TSV file to write
    pub tsv_file: PathBuf,

    /// Log progress (info level)
    #[arg(short, long)]
    pub verbose: bool,

    /// Log everything (debug level); wins over --verbose
    #[arg(short, long)]
    pub debug: bool,
}

impl Args {
    /// Log level requested by the flags, if any.
    #[must_use]
    pub fn log_level(&self) -> Option<&'static str> {
        self.debug
            .then_some("debug")
            .or(self.verbose.then_some("info"))
    }

    /// ## Summary
    /// Checks both paths before any input is parsed.
    ///
    /// A missing output file is created empty; an existing one is opened for
    /// writing without being truncated.
    ///
    /// ## Errors
    /// Returns [`AppError::Configuration`] if `read_dir` is not a readable
    /// directory or `tsv_file` cannot be opened for writing.
    pub fn validate(&self) -> AppResult<()> {
        readable_directory(&self.read_dir)?;
        writable_file(&self.tsv_file)?;
        Ok(())
    }
}

fn readable_directory(path: &Path) -> AppResult<()> {
    if !path.is_dir() {
        return Err(AppError::Configuration(format!(
            "not an existing directory: {}",
            path.display()
        )));
    }

    fs::read_dir(path).map_err(|err| {
        AppError::Configuration(format!(
            "not a readable directory: {}: {err}",
            path.display()
        ))
    })?;

    Ok(())
}

fn writable_file(path: &Path) -> AppResult<()> {
    let opened = if path.exists() {
        OpenOptions::new().write(true).open(path)
    } else {
        File::create(path)
    };

    opened.map(drop).map_err(|err| {
        AppError::Configuration(format!("not a writable file: {}: {err}", path.display()))
    })
}
