//! vCard parsing.
//!
//! ## Usage
//!
//! ```rust
//! use vcf2tsv_rfc::rfc::vcard::parse;
//!
//! let input = "\
//! BEGIN:VCARD\r\n\
//! VERSION:2.1\r\n\
//! N:Doe;John;;;\r\n\
//! TEL;CELL:+1-555-555-5555\r\n\
//! END:VCARD\r\n";
//!
//! let cards = parse::parse(input).unwrap();
//! assert_eq!(cards[0].name().unwrap().display_name(), "John Doe");
//! ```
//!
//! ## Features
//!
//! - Supports vCard 2.1 and 3.0; any other VERSION is an error
//! - Handles line folding/unfolding
//! - Parses 2.1 valueless parameters (`TEL;CELL;PREF:`)
//! - Decodes 2.1 quoted-printable values, including soft line breaks
//! - Parses property groups (item1.TEL)
//! - Parses the structured N value

mod error;
mod lexer;
mod parser;
mod values;


pub use error::{ParseError, ParseErrorKind, ParseResult};
pub use lexer::{ContentLine, Line, parse_content_line, unfold};
pub use parser::{parse, parse_single};
pub use values::{
    decode_quoted_printable, parse_structured_name, split_component, split_structured,
    unescape_text,
};
