//! Header records
//!
//! One header per tag occurrence or text run. Every reference to another
//! header (`previous`, `next`, `matched`, `parent`) is a sequence number into
//! the owning list, so the cyclic structure needs no shared ownership.

use super::span::Span;
use crate::core::attributes::Attributes;
use crate::core::scanner::is_space_char;
use crate::core::tokenizer::TagKind;

/// Name reported by synthesized text runs
pub const TEXT_NODE_NAME: &str = "TextNode";

/// A tag occurrence or text run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    /// Source bytes covered, inclusive
    pub span: Span,
    /// Tag name span; None for text runs
    pub name: Option<Span>,
    /// Text runs are `SelfClose`
    pub kind: TagKind,
    pub attributes: Attributes,
    /// Position in the list, dense from 0
    pub sequence: usize,
    pub previous: Option<usize>,
    pub next: Option<usize>,
    /// Self for `SelfClose`; the counterpart for a matched `Open`/`Close`
    pub matched: Option<usize>,
    /// Nearest enclosing open tag; None at document root
    pub parent: Option<usize>,
}

impl Header {
    /// Create an unlinked tag header
    pub fn tag(span: Span, name: Span, kind: TagKind, attributes: Attributes) -> Self {
        Self {
            span,
            name: Some(name),
            kind,
            attributes,
            sequence: 0,
            previous: None,
            next: None,
            matched: None,
            parent: None,
        }
    }

    /// Create an unlinked text run header
    pub fn text_run(span: Span) -> Self {
        Self {
            span,
            name: None,
            kind: TagKind::SelfClose,
            attributes: Attributes::new(),
            sequence: 0,
            previous: None,
            next: None,
            matched: None,
            parent: None,
        }
    }

    #[inline]
    pub fn start(&self) -> usize {
        self.span.start
    }

    /// Inclusive end offset
    #[inline]
    pub fn end(&self) -> usize {
        self.span.end
    }

    #[inline]
    pub fn length(&self) -> usize {
        self.span.len()
    }

    /// Check if this header is a synthesized text run
    #[inline]
    pub fn is_text_node(&self) -> bool {
        self.name.is_none()
    }

    #[inline]
    pub fn is_open(&self) -> bool {
        self.kind == TagKind::Open
    }

    #[inline]
    pub fn is_close(&self) -> bool {
        self.kind == TagKind::Close
    }

    #[inline]
    pub fn is_self_close(&self) -> bool {
        self.kind == TagKind::SelfClose
    }

    /// The text this header covers
    #[inline]
    pub fn text<'a>(&self, input: &'a str) -> &'a str {
        self.span.slice(input)
    }

    /// Tag name, or [`TEXT_NODE_NAME`] for text runs
    #[inline]
    pub fn name<'a>(&self, input: &'a str) -> &'a str {
        match self.name {
            Some(name) => name.slice(input),
            None => TEXT_NODE_NAME,
        }
    }

    /// A text run made only of [`is_space_char`] characters
    #[inline]
    pub fn is_empty_text_node(&self, input: &str) -> bool {
        self.is_text_node() && self.text(input).chars().all(is_space_char)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_header() {
        let input = "<div id=a>";
        let header = Header::tag(
            Span::new(0, 9),
            Span::new(1, 3),
            TagKind::Open,
            Attributes::new(),
        );
        assert_eq!(header.name(input), "div");
        assert_eq!(header.text(input), input);
        assert_eq!(header.length(), 10);
        assert!(header.is_open());
        assert!(!header.is_text_node());
        assert!(!header.is_empty_text_node(input));
        assert_eq!(header.matched, None);
    }

    #[test]
    fn test_text_run_header() {
        let input = "<a> \n\t</a>";
        let header = Header::text_run(Span::new(3, 5));
        assert_eq!(header.name(input), TEXT_NODE_NAME);
        assert!(header.is_self_close());
        assert!(header.is_text_node());
        assert!(header.is_empty_text_node(input));
        assert!(header.attributes.is_empty());
    }

    #[test]
    fn test_non_blank_text_run() {
        let input = " x ";
        assert!(!Header::text_run(Span::new(0, 2)).is_empty_text_node(input));
    }

    #[test]
    fn test_blank_text_run_character_class() {
        // U+FEFF is 3 bytes, U+00A0 and U+0085 are 2
        let input = "\u{feff}\u{a0}";
        assert!(Header::text_run(Span::new(0, 4)).is_empty_text_node(input));
        let input = " \u{85}";
        assert!(!Header::text_run(Span::new(0, 2)).is_empty_text_node(input));
    }
}
