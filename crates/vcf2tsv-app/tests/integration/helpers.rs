//! Shared fixtures for the integration tests.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;
use vcf2tsv_app::convert::{ConversionSummary, Converter};
use vcf2tsv_app::error::AppResult;
use vcf2tsv_app::extract::MemorySink;

pub const HEADER: &str = "Name\tFull name\tCell phone\tWork phone\tHome phone\tEmail\tNote\r\n";

/// A temporary input directory plus an output path beside it.
pub struct Workspace {
    _root: TempDir,
    pub input: PathBuf,
    pub output: PathBuf,
}

impl Workspace {
    pub fn new() -> Self {
        let root = tempfile::tempdir().unwrap();
        let input = root.path().join("cards");
        fs::create_dir(&input).unwrap();
        let output = root.path().join("contacts.tsv");

        Self {
            _root: root,
            input,
            output,
        }
    }

    pub fn add(&self, name: &str, content: &str) -> &Self {
        fs::write(self.input.join(name), content).unwrap();
        self
    }

    pub fn run(&self) -> (AppResult<ConversionSummary>, MemorySink) {
        let mut converter = Converter::new(MemorySink::default());
        let result = converter.run(&self.input, &self.output);
        (result, converter.into_sink())
    }

    pub fn output_text(&self) -> String {
        read(&self.output)
    }

    /// Data rows of the output, header excluded, split into cells.
    pub fn rows(&self) -> Vec<Vec<String>> {
        let text = self.output_text();
        let body = text.strip_prefix(HEADER).unwrap();
        body.split_terminator("\r\n")
            .map(|line| line.split('\t').map(String::from).collect())
            .collect()
    }
}

pub fn read(path: &Path) -> String {
    fs::read_to_string(path).unwrap()
}

/// A minimal 3.0 card with a name and a cell number.
pub fn card_30(family: &str, given: &str, cell: &str) -> String {
    format!(
        "BEGIN:VCARD\r\n\
         VERSION:3.0\r\n\
         N:{family};{given};;;\r\n\
         FN:{given} {family}\r\n\
         TEL;TYPE=CELL:{cell}\r\n\
         END:VCARD\r\n"
    )
}
