//! Span - inclusive byte range into the original input
//!
//! Headers never own their text; they carry a span and slice the source
//! held by the owning list.

/// An inclusive `[start, end]` byte range of the source.
///
/// Spans produced by the tokenizer and builder are never empty and always
/// start and end on char boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    /// Byte offset of the first byte
    pub start: usize,
    /// Byte offset of the last byte (inclusive)
    pub end: usize,
}

impl Span {
    /// Create a new span from inclusive bounds
    #[inline]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Create a span from a half-open `[start, end)` range
    #[inline]
    pub const fn from_exclusive(start: usize, end: usize) -> Self {
        Self { start, end: end - 1 }
    }

    /// Number of bytes covered (`end - start + 1`)
    #[inline]
    pub const fn len(&self) -> usize {
        self.end - self.start + 1
    }

    /// Exclusive end offset
    #[inline]
    pub const fn end_exclusive(&self) -> usize {
        self.end + 1
    }

    /// Check if `offset` lies within the span
    #[inline]
    pub const fn contains(&self, offset: usize) -> bool {
        offset >= self.start && offset <= self.end
    }

    /// Extract the covered text from input
    ///
    /// Returns an empty string if the span does not fit the input.
    #[inline]
    pub fn slice<'a>(&self, input: &'a str) -> &'a str {
        input.get(self.start..self.end_exclusive()).unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_basic() {
        let span = Span::new(5, 14);
        assert_eq!(span.start, 5);
        assert_eq!(span.end, 14);
        assert_eq!(span.len(), 10);
        assert_eq!(span.end_exclusive(), 15);
    }

    #[test]
    fn test_span_from_exclusive() {
        assert_eq!(Span::from_exclusive(3, 7), Span::new(3, 6));
    }

    #[test]
    fn test_span_slice() {
        let input = "hello world";
        assert_eq!(Span::new(6, 10).slice(input), "world");
        assert_eq!(Span::new(0, 0).slice(input), "h");
        assert_eq!(Span::new(6, 20).slice(input), "");
    }

    #[test]
    fn test_span_contains() {
        let span = Span::new(2, 4);
        assert!(!span.contains(1));
        assert!(span.contains(2));
        assert!(span.contains(4));
        assert!(!span.contains(5));
    }
}
