//! Integration test modules.
//!
//! - `convert`: full runs over directories of `.vcf` files
//! - `preflight`: argument validation before any parsing

mod helpers;

mod convert;
mod preflight;
