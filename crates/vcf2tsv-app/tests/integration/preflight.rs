//! Argument validation ahead of a run.

use std::ffi::OsStr;
use std::fs;

use clap::Parser;
use vcf2tsv_app::cli::Args;
use vcf2tsv_app::error::AppError;

use super::helpers::*;

fn args(ws: &Workspace) -> Args {
    Args::try_parse_from([
        OsStr::new("convert"),
        ws.input.as_os_str(),
        ws.output.as_os_str(),
    ])
    .unwrap()
}

#[test]
fn valid_paths_pass_and_touch_output() {
    let ws = Workspace::new();

    args(&ws).validate().unwrap();

    assert_eq!(read(&ws.output), "");
}

#[test]
fn input_that_is_a_file_is_rejected_before_parsing() {
    let ws = Workspace::new();
    fs::remove_dir(&ws.input).unwrap();
    fs::write(&ws.input, "not a directory").unwrap();

    let err = args(&ws).validate().unwrap_err();

    assert!(matches!(err, AppError::Configuration(_)));
    assert_eq!(err.exit_code(), 2);
    assert!(!ws.output.exists());
}

#[test]
fn validated_then_empty_leaves_empty_output() {
    let ws = Workspace::new();
    let args = args(&ws);

    args.validate().unwrap();
    let (result, _) = ws.run();

    assert!(matches!(result, Err(AppError::NoInput { .. })));
    assert_eq!(read(&ws.output), "");
}
