//! Tag Attribute Extraction
//!
//! Turns the literal text of one opening or self-closing tag into its
//! attribute mapping. Lenient: malformed attribute text yields whatever
//! could be read before or around it, never an error.
//!
//! Follows what an HTML parser reports for a lone tag string:
//! - names are ASCII-lowercased
//! - the first occurrence of a repeated name wins
//! - valueless (boolean) attributes map to ""
//! - values may be double-quoted, single-quoted or unquoted
//! - character references in values are decoded
//! - closing tags carry no attributes

use super::entities::decode_text;
use super::scanner::{is_name_byte, is_whitespace};

/// Attribute mapping of one tag, in source order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
    entries: Vec<(String, String)>,
}

impl Attributes {
    /// Create an empty mapping
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Insert unless the name is already present
    ///
    /// Returns false if an earlier value was kept.
    pub fn insert(&mut self, name: String, value: String) -> bool {
        if self.contains(&name) {
            return false;
        }
        self.entries.push((name, value));
        true
    }

    /// Get attribute value by name
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|(n, _)| n == name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over (name, value) pairs in source order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.entries.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }
}

impl<N: Into<String>, V: Into<String>> FromIterator<(N, V)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        let mut attrs = Attributes::new();
        for (name, value) in iter {
            attrs.insert(name.into(), value.into());
        }
        attrs
    }
}

/// Collaborator that maps one tag's text to its attributes
///
/// The header builder calls this once per tag token. Implementations must be
/// total: malformed input yields a best-effort partial mapping.
pub trait AttributeExtractor {
    fn extract(&self, tag_text: &str) -> Attributes;
}

/// The built-in attribute tokenizer
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultAttributeExtractor;

impl AttributeExtractor for DefaultAttributeExtractor {
    fn extract(&self, tag_text: &str) -> Attributes {
        extract_attributes(tag_text)
    }
}

impl<F> AttributeExtractor for F
where
    F: Fn(&str) -> Attributes,
{
    fn extract(&self, tag_text: &str) -> Attributes {
        self(tag_text)
    }
}

/// Extract attributes from the literal text of a tag, e.g. `<div class='a' data-x>`
pub fn extract_attributes(tag_text: &str) -> Attributes {
    let input = tag_text.as_bytes();
    let mut attrs = Attributes::new();

    if input.first() != Some(&b'<') || input.get(1) == Some(&b'/') {
        return attrs;
    }

    // Skip '<' and the element name
    let mut pos = 1;
    while pos < input.len() && is_name_byte(input[pos]) {
        pos += 1;
    }

    while pos < input.len() {
        // Skip whitespace and stray slashes (`<br / >`, trailing `/>`)
        while pos < input.len() && (is_whitespace(input[pos]) || input[pos] == b'/') {
            pos += 1;
        }

        if pos >= input.len() || input[pos] == b'>' {
            break;
        }

        // Parse attribute name
        let name_start = pos;
        while pos < input.len() && is_attr_name_byte(input[pos]) {
            pos += 1;
        }

        if pos == name_start {
            // Stray '=' with no name before it
            pos += 1;
            continue;
        }

        let name = tag_text[name_start..pos].to_ascii_lowercase();

        // Skip whitespace around '='
        let after_name = pos;
        while pos < input.len() && is_whitespace(input[pos]) {
            pos += 1;
        }

        if pos >= input.len() || input[pos] != b'=' {
            // Attribute without value (HTML boolean attribute)
            attrs.insert(name, String::new());
            pos = after_name;
            continue;
        }

        pos += 1; // Skip '='

        while pos < input.len() && is_whitespace(input[pos]) {
            pos += 1;
        }

        if pos >= input.len() || input[pos] == b'>' {
            attrs.insert(name, String::new());
            break;
        }

        let quote = input[pos];
        let value = if quote == b'"' || quote == b'\'' {
            pos += 1; // Skip opening quote
            let value_start = pos;
            while pos < input.len() && input[pos] != quote {
                pos += 1;
            }
            let raw = &tag_text[value_start..pos];
            if pos < input.len() {
                pos += 1; // Skip closing quote
            }
            raw
        } else {
            // Unquoted value runs to whitespace or '>'; '/' is part of it
            let value_start = pos;
            while pos < input.len() && !is_whitespace(input[pos]) && input[pos] != b'>' {
                pos += 1;
            }
            &tag_text[value_start..pos]
        };

        attrs.insert(name, decode_text(value).into_owned());
    }

    attrs
}

/// Any byte except whitespace, '/', '>' and '='
#[inline]
fn is_attr_name_byte(b: u8) -> bool {
    !is_whitespace(b) && !matches!(b, b'/' | b'>' | b'=')
}
