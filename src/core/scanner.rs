//! SIMD-accelerated markup scanning using memchr
//!
//! Uses memchr crate for fast byte searching with SIMD acceleration:
//! - SSE2 (default x86_64)
//! - AVX2 (runtime detection)
//! - NEON (aarch64)

use memchr::memchr;

/// Scanner for tag delimiter detection
///
/// A scanner is created per tokenize call and never reused, so no scan
/// position leaks from one input to the next.
pub struct Scanner<'a> {
    input: &'a [u8],
    pos: usize,
}

impl<'a> Scanner<'a> {
    /// Create a new scanner for the given input
    #[inline]
    pub fn new(input: &'a [u8]) -> Self {
        Scanner { input, pos: 0 }
    }

    /// Set the current position
    #[inline]
    pub fn set_position(&mut self, pos: usize) {
        self.pos = pos;
    }

    /// Byte at an absolute position
    #[inline]
    pub fn byte_at(&self, pos: usize) -> Option<u8> {
        self.input.get(pos).copied()
    }

    /// Find next '<' (tag start) using SIMD
    #[inline]
    pub fn find_tag_start(&self) -> Option<usize> {
        memchr(b'<', self.input.get(self.pos..)?).map(|i| self.pos + i)
    }

    /// Find the first '>' at or after `from`
    ///
    /// Quotes are not special: a '>' inside an attribute value ends the tag.
    #[inline]
    pub fn find_tag_end_from(&self, from: usize) -> Option<usize> {
        memchr(b'>', self.input.get(from..)?).map(|i| from + i)
    }

    /// End (exclusive) of the run of name bytes starting at `from`
    #[inline]
    pub fn name_end_from(&self, from: usize) -> usize {
        let mut pos = from;
        while pos < self.input.len() && is_name_byte(self.input[pos]) {
            pos += 1;
        }
        pos
    }

    /// End (exclusive) of the run of [`is_space_char`] characters starting
    /// at `from`
    #[inline]
    pub fn whitespace_end_from(&self, from: usize) -> usize {
        let mut pos = from;
        while pos < self.input.len() {
            if is_whitespace(self.input[pos]) {
                pos += 1;
                continue;
            }
            match self.char_at(pos) {
                Some(c) if is_space_char(c) => pos += c.len_utf8(),
                _ => break,
            }
        }
        pos
    }

    /// Decode the character starting at `pos`
    ///
    /// None past the end or when `pos` is not on a character boundary.
    fn char_at(&self, pos: usize) -> Option<char> {
        let rest = self.input.get(pos..)?;
        let window = &rest[..rest.len().min(4)];
        let valid = match std::str::from_utf8(window) {
            Ok(text) => text,
            Err(err) => std::str::from_utf8(&window[..err.valid_up_to()]).ok()?,
        };
        valid.chars().next()
    }
}

/// Word characters plus ':' for namespace-qualified names
#[inline]
pub fn is_name_byte(b: u8) -> bool {
    matches!(b, b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'_' | b':')
}

/// Check if byte is ASCII whitespace
#[inline]
pub fn is_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r' | b'\x0B' | b'\x0C')
}

/// Whitespace for blank text runs and closing tags
///
/// ASCII whitespace, the Unicode space separators, line and paragraph
/// separators, NBSP and the byte order mark. Unlike [`char::is_whitespace`],
/// U+0085 is not included and U+FEFF is.
#[inline]
pub fn is_space_char(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\u{0B}'
            | '\u{0C}'
            | '\r'
            | ' '
            | '\u{A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_tag_start() {
        let mut scanner = Scanner::new(b"hello <div>");
        assert_eq!(scanner.find_tag_start(), Some(6));
        scanner.set_position(7);
        assert_eq!(scanner.find_tag_start(), None);
    }

    #[test]
    fn test_find_tag_end_from() {
        let scanner = Scanner::new(b"<a href='>'>");
        assert_eq!(scanner.find_tag_end_from(0), Some(9));
        assert_eq!(scanner.find_tag_end_from(10), Some(11));
        assert_eq!(scanner.find_tag_end_from(12), None);
    }

    #[test]
    fn test_name_run() {
        let scanner = Scanner::new(b"<svg:rect x=1>");
        assert_eq!(scanner.name_end_from(1), 9);
        assert_eq!(scanner.name_end_from(0), 0);
    }

    #[test]
    fn test_whitespace_run() {
        let scanner = Scanner::new(b"</p \t\n>");
        assert_eq!(scanner.whitespace_end_from(3), 6);
    }

    #[test]
    fn test_unicode_whitespace_run() {
        let input = "</p\u{a0}\u{3000}\u{feff}>".as_bytes();
        let scanner = Scanner::new(input);
        assert_eq!(scanner.whitespace_end_from(3), input.len() - 1);

        let scanner = Scanner::new("</p\u{85}>".as_bytes());
        assert_eq!(scanner.whitespace_end_from(3), 3);
    }

    #[test]
    fn test_space_char_class() {
        for c in ['\t', '\u{0B}', ' ', '\u{A0}', '\u{2007}', '\u{2028}', '\u{FEFF}'] {
            assert!(is_space_char(c), "{c:?}");
        }
        for c in ['x', '\u{85}', '\u{200B}', '\u{180E}'] {
            assert!(!is_space_char(c), "{c:?}");
        }
    }

    #[test]
    fn test_end_of_input() {
        let mut scanner = Scanner::new(b"ab");
        scanner.set_position(2);
        assert_eq!(scanner.find_tag_start(), None);
        assert_eq!(scanner.byte_at(1), Some(b'b'));
        assert_eq!(scanner.byte_at(2), None);
    }
}
