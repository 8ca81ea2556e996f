//! vCard 2.1 / 3.0 implementation.
//!
//! This module provides types and parsing for the two vCard versions found
//! in typical address-book exports: vCard 2.1 (the versit specification) and
//! vCard 3.0 (RFC 2426).
//!
//! ## Usage
//!
//! ```rust
//! use vcf2tsv_rfc::rfc::vcard::parse;
//!
//! let input = "\
//! BEGIN:VCARD\r\n\
//! VERSION:3.0\r\n\
//! FN:John Doe\r\n\
//! TEL;TYPE=CELL:+1-555-555-5555\r\n\
//! END:VCARD\r\n";
//!
//! let cards = parse(input).unwrap();
//! assert_eq!(cards[0].formatted_name(), Some("John Doe"));
//! ```
//!
//! ## Version differences
//!
//! The two versions disagree on how a telephone category is written:
//!
//! - 2.1 uses bare parameters: `TEL;CELL;PREF:+1-555-555-5555`
//! - 3.0 uses the `TYPE` parameter: `TEL;TYPE=CELL,PREF:+1-555-555-5555`
//!
//! [`VCard::telephones`] hides the difference and yields the labels of each
//! number in either encoding.
//!
//! ## Submodules
//!
//! - [`core`] - Core types (`VCard`, `VCardProperty`, `TelCategory`, etc.)
//! - [`parse`] - Parsing functions and error types

pub mod core;
pub mod parse;


pub use core::{
    StructuredName, TelCategory, Telephone, VCard, VCardParameter, VCardProperty, VCardValue,
    VCardVersion,
};
pub use parse::{ParseError, ParseErrorKind, ParseResult, parse, parse_single};
