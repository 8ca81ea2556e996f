//! Input directory scanning.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{AppError, AppResult};

/// Extension of the files picked up from the input directory.
pub const VCARD_EXTENSION: &str = "vcf";

/// Result of scanning the input directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanOutcome {
    /// Matching files, sorted by path.
    Files(Vec<PathBuf>),
    /// The directory holds no matching file.
    NoMatches,
}

/// ## Summary
/// Lists the `.vcf` files directly inside `dir`, sorted lexicographically.
///
/// Subdirectories are not descended into, and hidden files (leading `.`)
/// are skipped the way a shell `*.vcf` glob skips them.
///
/// ## Errors
/// Returns [`AppError::Configuration`] if `dir` is not a directory or cannot
/// be listed.
#[tracing::instrument(skip_all, fields(dir = %dir.display()))]
pub fn scan_directory(dir: &Path) -> AppResult<ScanOutcome> {
    if !dir.is_dir() {
        return Err(AppError::Configuration(format!(
            "not an existing directory: {}",
            dir.display()
        )));
    }

    let unreadable = |err: std::io::Error| {
        AppError::Configuration(format!("not a readable directory: {}: {err}", dir.display()))
    };

    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(unreadable)? {
        let path = entry.map_err(unreadable)?.path();
        if is_vcard_file(&path) {
            files.push(path);
        }
    }

    files.sort();

    tracing::debug!(count = files.len(), "Scanned input directory");

    if files.is_empty() {
        Ok(ScanOutcome::NoMatches)
    } else {
        Ok(ScanOutcome::Files(files))
    }
}

fn is_vcard_file(path: &Path) -> bool {
    let visible = path
        .file_name()
        .is_some_and(|name| name.as_encoded_bytes().first() != Some(&b'.'));

    visible
        && path.extension().is_some_and(|ext| ext == VCARD_EXTENSION)
        && path.is_file()
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    fn touch(dir: &Path, name: &str) {
        fs::write(dir.join(name), "").unwrap();
    }

    #[test_log::test]
    fn lists_vcf_files_sorted() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "b.vcf");
        touch(dir.path(), "a.vcf");
        touch(dir.path(), "C.vcf");
        touch(dir.path(), "notes.txt");
        touch(dir.path(), "upper.VCF");
        touch(dir.path(), ".hidden.vcf");
        fs::create_dir(dir.path().join("nested.vcf")).unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        touch(&dir.path().join("sub"), "deep.vcf");

        let outcome = scan_directory(dir.path()).unwrap();

        let ScanOutcome::Files(files) = outcome else {
            panic!("expected files, got {outcome:?}");
        };
        let names: Vec<&str> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap())
            .collect();
        assert_eq!(names, vec!["C.vcf", "a.vcf", "b.vcf"]);
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_names_are_listed() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let dir = tempfile::tempdir().unwrap();
        let name = OsStr::from_bytes(b"caf\xe9.vcf");
        fs::write(dir.path().join(name), "").unwrap();

        let outcome = scan_directory(dir.path()).unwrap();

        assert_eq!(outcome, ScanOutcome::Files(vec![dir.path().join(name)]));
    }

    #[test]
    fn empty_directory_has_no_matches() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "readme.md");

        assert_eq!(scan_directory(dir.path()).unwrap(), ScanOutcome::NoMatches);
    }

    #[test]
    fn missing_directory_is_configuration_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = scan_directory(&dir.path().join("absent")).unwrap_err();

        assert!(matches!(err, AppError::Configuration(msg) if msg.contains("not an existing directory")));
    }

    #[test]
    fn file_is_not_a_directory() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "a.vcf");

        let err = scan_directory(&dir.path().join("a.vcf")).unwrap_err();
        assert!(matches!(err, AppError::Configuration(_)));
    }
}
