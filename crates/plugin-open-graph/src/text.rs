//! Description text formatting.
//!
//! Descriptions are escaped for use inside a double-quoted HTML attribute
//! and cut to a configured number of characters. Character references that
//! are already present (`&amp;`, `&#39;`, `&#x2F;`) pass through untouched,
//! so formatting an already formatted, short string is a no-op.

/// Marker appended to a truncated description.
pub const ELLIPSIS: &str = "...";

/// Longest entity name accepted as a character reference.
const MAX_ENTITY_NAME: usize = 32;

/// Escapes and truncates free text for `og:description`.
#[derive(Debug, Clone, Copy)]
pub struct DescriptionFormatter {
    max_length: usize,
}

impl DescriptionFormatter {
    /// Creates a formatter that cuts output at `max_length` characters.
    pub fn new(max_length: usize) -> Self {
        Self { max_length }
    }

    /// Maximum number of characters before the ellipsis.
    pub fn max_length(&self) -> usize {
        self.max_length
    }

    /// Formats `raw` into a bounded, escaped description.
    pub fn format(&self, raw: &str) -> String {
        format_description(raw, self.max_length)
    }
}

/// Escapes `raw` and truncates it to `max_length` characters plus [`ELLIPSIS`].
pub fn format_description(raw: &str, max_length: usize) -> String {
    let escaped = escape_preserving_references(raw);
    if escaped.chars().count() <= max_length {
        return escaped;
    }

    let mut out = truncate_at_unit(&escaped, max_length).to_string();
    out.push_str(ELLIPSIS);
    out
}

/// Escapes `& < > " '`, keeping existing character references intact.
pub fn escape_preserving_references(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut rest = raw;

    while let Some(pos) = rest.find('&') {
        let (plain, tail) = rest.split_at(pos);
        out.push_str(&html_escape::encode_quoted_attribute(plain));
        match reference_len(tail) {
            Some(len) => {
                out.push_str(&tail[..len]);
                rest = &tail[len..];
            }
            None => {
                out.push_str("&amp;");
                rest = &tail[1..];
            }
        }
    }

    out.push_str(&html_escape::encode_quoted_attribute(rest));
    out
}

/// Longest prefix of `escaped` holding at most `max_chars` characters
/// without cutting through a character reference.
fn truncate_at_unit(escaped: &str, max_chars: usize) -> &str {
    let mut count = 0;
    let mut idx = 0;

    while idx < escaped.len() {
        let tail = &escaped[idx..];
        let (bytes, chars) = match reference_len(tail) {
            // References are pure ASCII.
            Some(len) => (len, len),
            None => match tail.chars().next() {
                Some(c) => (c.len_utf8(), 1),
                None => break,
            },
        };
        if count + chars > max_chars {
            break;
        }
        count += chars;
        idx += bytes;
    }

    &escaped[..idx]
}

/// Character reference syntax.
#[derive(Clone, Copy)]
enum Reference {
    Decimal,
    Hex,
    Named,
}

impl Reference {
    fn accepts(self, b: u8) -> bool {
        match self {
            Self::Decimal => b.is_ascii_digit(),
            Self::Hex => b.is_ascii_hexdigit(),
            Self::Named => b.is_ascii_alphanumeric(),
        }
    }

    fn max_body(self) -> usize {
        match self {
            Self::Decimal => 7,
            Self::Hex => 6,
            Self::Named => MAX_ENTITY_NAME,
        }
    }
}

/// Byte length of the character reference at the start of `s`, if any.
fn reference_len(s: &str) -> Option<usize> {
    let bytes = s.as_bytes();
    if bytes.first() != Some(&b'&') {
        return None;
    }

    let (kind, body_start) = match bytes.get(1) {
        Some(b'#') => match bytes.get(2) {
            Some(b'x') | Some(b'X') => (Reference::Hex, 3),
            _ => (Reference::Decimal, 2),
        },
        Some(b) if b.is_ascii_alphabetic() => (Reference::Named, 1),
        _ => return None,
    };

    let body = bytes[body_start..]
        .iter()
        .take(kind.max_body() + 1)
        .take_while(|b| kind.accepts(**b))
        .count();
    if body == 0 || body > kind.max_body() {
        return None;
    }

    match bytes.get(body_start + body) {
        Some(b';') => Some(body_start + body + 1),
        _ => None,
    }
}
