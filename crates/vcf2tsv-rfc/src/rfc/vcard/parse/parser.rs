//! vCard document parser.

use super::error::{ParseError, ParseErrorKind, ParseResult};
use super::lexer::{ContentLine, Line, parse_content_line, unfold};
use super::values::{decode_quoted_printable, parse_structured_name, unescape_text};
use crate::rfc::vcard::core::{
    VCard, VCardProperty, VCardValue, VCardVersion, is_quoted_printable, names,
};

const BEGIN_VCARD: &str = "BEGIN:VCARD";
const END_VCARD: &str = "END:VCARD";

/// Parses a vCard document into one or more vCards.
///
/// ## Summary
/// Parses the input string as a vCard document and returns all vCards found,
/// in document order. Each card is validated on its own: one card can never
/// absorb the lines of its neighbour.
///
/// ## Errors
/// Returns a parse error if a card is not closed, a card is opened inside
/// another, content appears outside a card, a card has no (or more than one)
/// VERSION, the VERSION is neither 2.1 nor 3.0, or a content line is malformed.
#[tracing::instrument(skip(input), fields(input_len = input.len()))]
pub fn parse(input: &str) -> ParseResult<Vec<VCard>> {
    tracing::debug!("Parsing vCard document");

    let lines = unfold(input);

    tracing::trace!(count = lines.len(), "Unfolded lines");

    let mut parser = Parser::new(lines);
    let result = parser.parse_document()?;

    tracing::debug!(count = result.len(), "Parsed vCards");

    Ok(result)
}

/// Parses a single vCard from input.
///
/// ## Summary
/// Convenience function for parsing a document with exactly one vCard.
///
/// ## Errors
/// Returns an error if the document contains no vCards or is malformed.
#[tracing::instrument(skip(input), fields(input_len = input.len()))]
pub fn parse_single(input: &str) -> ParseResult<VCard> {
    tracing::debug!("Parsing single vCard");

    let cards = parse(input)?;
    cards.into_iter().next().ok_or_else(|| {
        tracing::warn!("No vCard found in document");
        ParseError::new(
            ParseErrorKind::UnexpectedEof,
            1,
            "no vCard found in document",
        )
    })
}

struct Parser {
    lines: Vec<Line>,
    pos: usize,
}

impl Parser {
    fn new(lines: Vec<Line>) -> Self {
        Self { lines, pos: 0 }
    }

    /// Takes ownership of the next logical line.
    fn next_line(&mut self) -> Option<Line> {
        let line = self.lines.get_mut(self.pos).map(std::mem::take)?;
        self.pos += 1;
        Some(line)
    }

    fn parse_document(&mut self) -> ParseResult<Vec<VCard>> {
        let mut cards = Vec::new();

        while let Some(line) = self.next_line() {
            let text = line.text.trim();

            if text.is_empty() {
                continue;
            }

            if text.eq_ignore_ascii_case(BEGIN_VCARD) {
                let card = self.parse_vcard(line.number)?;
                cards.push(card);
            } else {
                return Err(ParseError::unexpected(line.number, BEGIN_VCARD, text));
            }
        }

        Ok(cards)
    }

    fn parse_vcard(&mut self, start_line: usize) -> ParseResult<VCard> {
        let mut version: Option<VCardVersion> = None;
        let mut content_lines = Vec::new();

        while let Some(line) = self.next_line() {
            let text = line.text.trim();

            if text.is_empty() {
                continue;
            }

            if text.eq_ignore_ascii_case(END_VCARD) {
                let version = version
                    .ok_or_else(|| ParseError::missing_property(start_line, names::VERSION))?;

                let properties = content_lines
                    .into_iter()
                    .map(|content_line| convert_to_property(content_line, version))
                    .collect::<Vec<_>>();

                tracing::trace!(
                    line = start_line,
                    version = %version,
                    properties = properties.len(),
                    "Parsed vCard"
                );

                return Ok(VCard {
                    version,
                    properties,
                });
            }

            if text.eq_ignore_ascii_case(BEGIN_VCARD) {
                return Err(ParseError::unexpected(line.number, END_VCARD, text));
            }

            let mut content_line = parse_content_line(&line.text, line.number)?;

            if is_quoted_printable(&content_line.params) {
                self.take_soft_breaks(&mut content_line.value);
            }

            if content_line.name == names::VERSION {
                if version.is_some() {
                    return Err(ParseError::new(
                        ParseErrorKind::DuplicateProperty,
                        line.number,
                        "VERSION given more than once",
                    ));
                }
                version = Some(VCardVersion::parse(&content_line.value).ok_or_else(|| {
                    ParseError::unsupported_version(line.number, &content_line.value)
                })?);
            } else {
                content_lines.push(content_line);
            }
        }

        Err(ParseError::new(
            ParseErrorKind::UnexpectedEof,
            start_line,
            "vCard not closed with END:VCARD",
        ))
    }

    /// Appends the lines a quoted-printable value continues onto.
    ///
    /// A value ending in `=` is soft-broken; the break is kept so the decoder
    /// can drop it. `END:VCARD` is never joined, so a dangling `=` before it
    /// stays on the value and the card still closes.
    fn take_soft_breaks(&mut self, value: &mut String) {
        while value.ends_with('=') {
            let closes_card = self
                .lines
                .get(self.pos)
                .is_some_and(|next| next.text.trim().eq_ignore_ascii_case(END_VCARD));
            if closes_card {
                break;
            }
            let Some(next) = self.next_line() else {
                break;
            };
            value.push_str("\r\n");
            value.push_str(&next.text);
        }
    }
}

/// Decodes a content line into a property, using the card's version.
fn convert_to_property(line: ContentLine, version: VCardVersion) -> VCardProperty {
    let decoded = if is_quoted_printable(&line.params) {
        decode_quoted_printable(&line.value)
    } else {
        line.value.clone()
    };

    let value = match line.name.as_str() {
        names::N => VCardValue::StructuredName(parse_structured_name(&decoded)),
        _ if version.escapes_text() => VCardValue::Text(unescape_text(&decoded)),
        _ => VCardValue::Text(decoded),
    };

    VCardProperty {
        group: line.group,
        name: line.name,
        params: line.params,
        value,
        raw_value: line.value,
    }
}
