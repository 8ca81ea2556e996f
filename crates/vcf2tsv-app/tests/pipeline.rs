//! End-to-end tests for the vCard to TSV pipeline.
//!
//! These drive the library against temporary input directories and output
//! files.

mod integration;
