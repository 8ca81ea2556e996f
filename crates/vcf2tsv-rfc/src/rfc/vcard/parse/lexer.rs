//! vCard lexer for line unfolding and content line parsing.
//!
//! Folding follows RFC 2425 §5.8.1: a line break followed by a single space
//! or tab is removed together with that whitespace character.

use super::error::{ParseError, ParseErrorKind, ParseResult};
use crate::rfc::vcard::core::VCardParameter;

/// A logical (unfolded) line and the physical line it started on.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Line {
    /// 1-based physical line number of the first folded segment.
    pub number: usize,
    /// Unfolded text without the line terminator.
    pub text: String,
}

/// Unfolds a vCard document into logical lines.
///
/// Accepts CRLF as well as bare LF line endings. Blank lines are kept so the
/// parser can report accurate positions; it skips them itself.
#[must_use]
pub fn unfold(input: &str) -> Vec<Line> {
    let mut lines: Vec<Line> = Vec::new();

    for (index, raw) in input.split('\n').enumerate() {
        let physical = raw.strip_suffix('\r').unwrap_or(raw);

        if let Some(continuation) = physical.strip_prefix([' ', '\t']) {
            if let Some(prev) = lines.last_mut() {
                prev.text.push_str(continuation);
                continue;
            }
        }

        lines.push(Line {
            number: index + 1,
            text: physical.to_string(),
        });
    }

    // `split` yields a trailing empty segment after the final newline.
    if lines.last().is_some_and(|l| l.text.is_empty()) {
        lines.pop();
    }

    lines
}

/// A parsed content line before value interpretation.
#[derive(Debug, Clone)]
pub struct ContentLine {
    /// Property group (e.g., "item1" in "item1.TEL").
    pub group: Option<String>,
    /// Property name (uppercase).
    pub name: String,
    /// Parameters.
    pub params: Vec<VCardParameter>,
    /// Raw value string.
    pub value: String,
}

/// Parses a single content line into its components.
///
/// Format: `[group.]name[;param[=value[,value]*]]*:value`
///
/// ## Errors
/// Returns an error if the line is missing the colon separator, has an
/// invalid property name, or an empty parameter name.
pub fn parse_content_line(line: &str, line_num: usize) -> ParseResult<ContentLine> {
    let colon_pos = find_value_separator(line).ok_or_else(|| {
        ParseError::new(
            ParseErrorKind::InvalidPropertyName,
            line_num,
            "missing colon separator",
        )
    })?;

    let (name_params, value) = line.split_at(colon_pos);
    let value = &value[1..];

    let (group, name_params) = parse_group(name_params);

    let (name, params_str) = match name_params.split_once(';') {
        Some((name, params)) => (name, Some(params)),
        None => (name_params, None),
    };

    if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
        return Err(ParseError::new(
            ParseErrorKind::InvalidPropertyName,
            line_num,
            format!("invalid property name: {name}"),
        ));
    }

    let params = match params_str {
        Some(params_str) => parse_parameters(params_str, line_num)?,
        None => Vec::new(),
    };

    Ok(ContentLine {
        group: group.map(String::from),
        name: name.to_ascii_uppercase(),
        params,
        value: value.to_string(),
    })
}

/// Finds the colon that separates name/params from value.
///
/// Quoted parameter values may contain colons.
fn find_value_separator(line: &str) -> Option<usize> {
    let mut in_quotes = false;

    for (i, c) in line.char_indices() {
        match c {
            '"' => in_quotes = !in_quotes,
            ':' if !in_quotes => return Some(i),
            _ => {}
        }
    }

    None
}

/// Parses optional group prefix.
fn parse_group(s: &str) -> (Option<&str>, &str) {
    let head = s.split(';').next().unwrap_or(s);
    if let Some((potential_group, _)) = head.split_once('.') {
        if !potential_group.is_empty()
            && potential_group
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-')
        {
            return (Some(potential_group), &s[potential_group.len() + 1..]);
        }
    }
    (None, s)
}

/// Parses parameter string into parameters.
fn parse_parameters(s: &str, line_num: usize) -> ParseResult<Vec<VCardParameter>> {
    let mut params = Vec::new();
    let mut remaining = s;

    while !remaining.is_empty() {
        let (param, rest) = parse_single_parameter(remaining, line_num)?;
        params.push(param);
        remaining = rest;
    }

    Ok(params)
}

/// Parses a single parameter and returns the remaining string.
///
/// A parameter without `=` is a 2.1 singleton such as `CELL` or
/// `QUOTED-PRINTABLE`.
fn parse_single_parameter(s: &str, line_num: usize) -> ParseResult<(VCardParameter, &str)> {
    let name_end = s.find(['=', ';']).unwrap_or(s.len());
    let name = s[..name_end].trim();

    if name.is_empty() {
        return Err(ParseError::new(
            ParseErrorKind::InvalidParameter,
            line_num,
            "empty parameter name",
        ));
    }

    let rest = &s[name_end..];
    if let Some(after_eq) = rest.strip_prefix('=') {
        let (values, remaining) = parse_param_values(after_eq);
        Ok((VCardParameter::multi(name, values), remaining))
    } else {
        let remaining = rest.strip_prefix(';').unwrap_or(rest);
        Ok((VCardParameter::singleton(name), remaining))
    }
}

/// Parses parameter values (comma-separated, possibly quoted).
///
/// Always yields at least one value, so `TYPE=` is never confused with a
/// singleton.
fn parse_param_values(s: &str) -> (Vec<String>, &str) {
    let mut values = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for (i, c) in s.char_indices() {
        match c {
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => values.push(std::mem::take(&mut current)),
            ';' if !in_quotes => {
                values.push(current);
                return (values, &s[i + 1..]);
            }
            _ => current.push(c),
        }
    }

    values.push(current);
    (values, "")
}
