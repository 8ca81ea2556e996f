//! vCard value decoders.

use crate::rfc::vcard::core::StructuredName;

/// Unescapes a vCard 3.0 text value.
///
/// vCard escapes: \n, \N (newline), \, (comma), \; (semicolon), \\ (backslash)
#[must_use]
pub fn unescape_text(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '\\' {
            match chars.peek() {
                Some('n' | 'N') => {
                    chars.next();
                    result.push('\n');
                }
                Some(',' | ';' | '\\') => {
                    if let Some(escaped) = chars.next() {
                        result.push(escaped);
                    }
                }
                _ => result.push(c),
            }
        } else {
            result.push(c);
        }
    }

    result
}

/// Splits a structured value on unescaped semicolons.
#[must_use]
pub fn split_structured(s: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut start = 0;
    let mut prev_backslash = false;

    for (i, c) in s.char_indices() {
        if c == '\\' && !prev_backslash {
            prev_backslash = true;
            continue;
        }

        if c == ';' && !prev_backslash {
            parts.push(&s[start..i]);
            start = i + 1;
        }

        prev_backslash = false;
    }

    parts.push(&s[start..]);
    parts
}

/// Splits a component value on unescaped commas, unescaping each piece.
#[must_use]
pub fn split_component(s: &str) -> Vec<String> {
    if s.is_empty() {
        return Vec::new();
    }

    let mut parts = Vec::new();
    let mut current = String::new();
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '\\' {
            match chars.peek() {
                Some(',' | ';' | '\\') => {
                    if let Some(escaped) = chars.next() {
                        current.push(escaped);
                    }
                }
                Some('n' | 'N') => {
                    chars.next();
                    current.push('\n');
                }
                _ => current.push(c),
            }
        } else if c == ',' {
            parts.push(std::mem::take(&mut current));
        } else {
            current.push(c);
        }
    }

    parts.push(current);
    parts
}

/// Parses a structured name (N property).
///
/// N has 5 components: `family;given;additional;prefixes;suffixes`. Missing
/// trailing components are treated as empty, extra ones are ignored.
#[must_use]
pub fn parse_structured_name(value: &str) -> StructuredName {
    let parts = split_structured(value);
    let component = |i: usize| parts.get(i).map(|s| split_component(s)).unwrap_or_default();

    StructuredName {
        family: component(0),
        given: component(1),
        additional: component(2),
        prefixes: component(3),
        suffixes: component(4),
    }
}

/// Decodes a quoted-printable value (vCard 2.1 `ENCODING=QUOTED-PRINTABLE`).
///
/// `=XX` hex escapes become bytes, `=` followed by a line break is a soft
/// break and is dropped. Malformed escapes are kept literally. The decoded
/// bytes are read as UTF-8, replacing invalid sequences.
#[must_use]
pub fn decode_quoted_printable(s: &str) -> String {
    let bytes = s.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;

    while i < bytes.len() {
        let b = bytes[i];
        if b != b'=' {
            out.push(b);
            i += 1;
            continue;
        }

        match (bytes.get(i + 1), bytes.get(i + 2)) {
            (Some(b'\r'), Some(b'\n')) => i += 3,
            (Some(b'\n'), _) => i += 2,
            (None, _) => i += 1,
            (Some(&hi), Some(&lo)) => {
                if let (Some(hi), Some(lo)) = (hex_value(hi), hex_value(lo)) {
                    out.push((hi << 4) | lo);
                    i += 3;
                } else {
                    out.push(b);
                    i += 1;
                }
            }
            (Some(_), None) => {
                out.push(b);
                i += 1;
            }
        }
    }

    String::from_utf8_lossy(&out).into_owned()
}

fn hex_value(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unescape_text_sequences() {
        assert_eq!(unescape_text(r"a\,b\;c\\d\ne"), "a,b;c\\d\ne");
        assert_eq!(unescape_text(r"trailing\"), "trailing\\");
        assert_eq!(unescape_text(r"keep\x"), "keep\\x");
    }

    #[test]
    fn split_structured_basic() {
        let parts = split_structured("a;b;c");
        assert_eq!(parts, vec!["a", "b", "c"]);
    }

    #[test]
    fn split_structured_escaped() {
        let parts = split_structured(r"a\;b;c");
        assert_eq!(parts, vec![r"a\;b", "c"]);
    }

    #[test]
    fn split_structured_escaped_backslash_before_separator() {
        let parts = split_structured(r"a\\;b");
        assert_eq!(parts, vec![r"a\\", "b"]);
    }

    #[test]
    fn split_component_commas() {
        let parts = split_component(r"a,b\,c");
        assert_eq!(parts, vec!["a", "b,c"]);
        assert!(split_component("").is_empty());
    }

    #[test]
    fn parse_structured_name_full() {
        let name = parse_structured_name("Public;John;Quinlan;Mr.;Esq.");
        assert_eq!(name.family, vec!["Public"]);
        assert_eq!(name.given, vec!["John"]);
        assert_eq!(name.additional, vec!["Quinlan"]);
        assert_eq!(name.prefixes, vec!["Mr."]);
        assert_eq!(name.suffixes, vec!["Esq."]);
    }

    #[test]
    fn parse_structured_name_short() {
        let name = parse_structured_name("Doe;Jane");
        assert_eq!(name.family, vec!["Doe"]);
        assert_eq!(name.given, vec!["Jane"]);
        assert!(name.additional.is_empty());
        assert!(name.suffixes.is_empty());
    }

    #[test]
    fn quoted_printable_hex_escapes() {
        assert_eq!(decode_quoted_printable("caf=C3=A9"), "café");
        assert_eq!(decode_quoted_printable("a=3Db"), "a=b");
        assert_eq!(decode_quoted_printable("lower=c3=a9"), "loweré");
    }

    #[test]
    fn quoted_printable_soft_breaks() {
        assert_eq!(decode_quoted_printable("first=\r\nsecond"), "firstsecond");
        assert_eq!(decode_quoted_printable("first=\nsecond"), "firstsecond");
        assert_eq!(decode_quoted_printable("dangling="), "dangling");
    }

    #[test]
    fn quoted_printable_hard_line_break() {
        assert_eq!(decode_quoted_printable("line1=0D=0Aline2"), "line1\r\nline2");
    }

    #[test]
    fn quoted_printable_malformed_escape_is_literal() {
        assert_eq!(decode_quoted_printable("50=ZZ"), "50=ZZ");
        assert_eq!(decode_quoted_printable("x=A"), "x=A");
    }
}
