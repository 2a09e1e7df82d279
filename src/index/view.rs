//! Header navigation
//!
//! [`HeaderRef`] is a borrowed view of one header inside its list. All
//! navigation is read-only. A missing `matched` link (orphan closer or
//! unclosed opener) makes range-based operations answer `None`, `false` or
//! an empty result instead of panicking.

use std::fmt;

use super::header::Header;
use super::list::HeaderList;
use super::span::Span;
use crate::core::attributes::Attributes;
use crate::core::tokenizer::TagKind;

/// A header together with the list it belongs to
#[derive(Clone, Copy)]
pub struct HeaderRef<'a> {
    list: &'a HeaderList,
    sequence: usize,
}

impl<'a> HeaderRef<'a> {
    /// Create a view; `sequence` must be in bounds
    #[inline]
    pub(crate) fn new(list: &'a HeaderList, sequence: usize) -> Self {
        Self { list, sequence }
    }

    #[inline]
    fn at(&self, sequence: Option<usize>) -> Option<HeaderRef<'a>> {
        sequence.map(|seq| HeaderRef::new(self.list, seq))
    }

    /// The list this header belongs to
    #[inline]
    pub fn list(&self) -> &'a HeaderList {
        self.list
    }

    /// The underlying record
    #[inline]
    pub fn header(&self) -> &'a Header {
        self.list.record(self.sequence)
    }

    #[inline]
    pub fn sequence(&self) -> usize {
        self.sequence
    }

    /// Exact source text covered by this header
    #[inline]
    pub fn text(&self) -> &'a str {
        self.header().text(self.list.source())
    }

    /// Tag name, or `"TextNode"` for text runs
    #[inline]
    pub fn name(&self) -> &'a str {
        self.header().name(self.list.source())
    }

    #[inline]
    pub fn kind(&self) -> TagKind {
        self.header().kind
    }

    #[inline]
    pub fn attributes(&self) -> &'a Attributes {
        &self.header().attributes
    }

    #[inline]
    pub fn span(&self) -> Span {
        self.header().span
    }

    #[inline]
    pub fn start(&self) -> usize {
        self.header().start()
    }

    /// Inclusive end offset
    #[inline]
    pub fn end(&self) -> usize {
        self.header().end()
    }

    #[inline]
    pub fn length(&self) -> usize {
        self.header().length()
    }

    #[inline]
    pub fn is_text_node(&self) -> bool {
        self.header().is_text_node()
    }

    #[inline]
    pub fn previous(&self) -> Option<HeaderRef<'a>> {
        self.at(self.header().previous)
    }

    #[inline]
    pub fn next(&self) -> Option<HeaderRef<'a>> {
        self.at(self.header().next)
    }

    /// Self for self-closing headers and text runs, the counterpart for a
    /// matched pair, None for unpaired tags
    #[inline]
    pub fn matched(&self) -> Option<HeaderRef<'a>> {
        self.at(self.header().matched)
    }

    /// Nearest enclosing open tag; a closing tag reports its opener's parent
    #[inline]
    pub fn parent(&self) -> Option<HeaderRef<'a>> {
        self.at(self.header().parent)
    }

    /// A text run with no non-whitespace character
    #[inline]
    pub fn is_empty_text_node(&self) -> bool {
        self.header().is_empty_text_node(self.list.source())
    }

    /// Whether `offset` lies in the element body: after the opening tag's
    /// last byte, up to and including the closing tag's first byte
    ///
    /// Always false for self-closing tags, text runs and unpaired tags.
    pub fn is_inside_body(&self, offset: usize) -> bool {
        let header = self.header();
        if header.is_self_close() {
            return false;
        }
        let Some(other) = self.matched() else {
            return false;
        };
        let (open, close) = if header.is_open() {
            (*self, other)
        } else {
            (other, *self)
        };
        Span::new(open.end() + 1, close.start()).contains(offset)
    }

    /// Source range of the whole element
    ///
    /// For an opening tag this runs to the end of its closing tag; for every
    /// other header it is the header's own span. None for an unclosed opener.
    pub fn whole_range(&self) -> Option<Span> {
        match self.kind() {
            TagKind::Open => {
                let close = self.matched()?;
                Some(Span::new(self.start(), close.end()))
            }
            TagKind::Close | TagKind::SelfClose => Some(self.span()),
        }
    }

    /// Text of the whole element, opening tag through closing tag
    ///
    /// Works from either end of a matched pair. Self-closing tags and text
    /// runs yield their own text. None for unpaired tags.
    pub fn whole_text(&self) -> Option<&'a str> {
        let other = self.matched()?;
        let (first, last) = if other.sequence < self.sequence {
            (other, *self)
        } else {
            (*self, other)
        };
        // Headers tile the source, so the concatenation is one slice.
        Some(Span::new(first.start(), last.end()).slice(self.list.source()))
    }

    /// Whether `other` follows this header with only blank text runs between
    ///
    /// A header is adjacent before itself. False when `other` is absent,
    /// precedes this header, or belongs to another list.
    pub fn is_adjacent_before(&self, other: Option<HeaderRef<'_>>) -> bool {
        let Some(other) = other else {
            return false;
        };
        if !std::ptr::eq(self.list, other.list) || self.sequence > other.sequence {
            return false;
        }
        ((self.sequence + 1)..other.sequence)
            .all(|seq| self.list.record(seq).is_empty_text_node(self.list.source()))
    }

    /// Sequence numbers of this header's children, see [`child_indices`]
    pub fn children(&self) -> Vec<usize> {
        child_indices(self.list, Some(self.sequence))
    }

    /// Ordinal path from the document root to this header
    ///
    /// One segment per level, root first. Each segment counts the preceding
    /// siblings at that level, ignoring blank text runs; a sibling element
    /// counts once however large its subtree. An orphan closer counts as a
    /// sibling, so on malformed input a segment can exceed the position in
    /// [`child_indices`].
    pub fn xpath(&self) -> Vec<usize> {
        let mut path = Vec::new();
        let mut current = Some(*self);

        while let Some(node) = current {
            let parent = node.parent();
            let first = parent.map_or(0, |p| p.sequence + 1);
            path.push(count_siblings(self.list, first, node.sequence));
            current = parent;
        }

        path.reverse();
        path
    }

    /// Find a header by sequence number by walking the previous/next chain
    ///
    /// O(distance); [`HeaderList::get`] is the direct lookup.
    pub fn traverse(&self, target: usize) -> Option<HeaderRef<'a>> {
        let forward = target > self.sequence;
        let mut current = Some(*self);

        while let Some(header) = current {
            if header.sequence == target {
                return Some(header);
            }
            current = if forward {
                header.next()
            } else {
                header.previous()
            };
        }

        None
    }
}

impl PartialEq for HeaderRef<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.list, other.list) && self.sequence == other.sequence
    }
}

impl Eq for HeaderRef<'_> {}

impl fmt::Debug for HeaderRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HeaderRef")
            .field("sequence", &self.sequence)
            .field("kind", &self.kind())
            .field("name", &self.name())
            .field("span", &self.span())
            .finish()
    }
}

/// Count the siblings in `[from, to)` the way `xpath` does
fn count_siblings(list: &HeaderList, from: usize, to: usize) -> usize {
    let source = list.source();
    let mut count = 0;
    let mut seq = from;

    while seq < to {
        let header = list.record(seq);
        if header.is_empty_text_node(source) {
            seq += 1;
            continue;
        }

        // Orphan closers count like any other sibling
        count += 1;
        if header.is_open() {
            match header.matched {
                Some(close) => seq = close,
                // An unclosed sibling swallows the rest of the level
                None => break,
            }
        }
        seq += 1;
    }

    count
}

/// Sequence numbers of the direct children of `target`
///
/// With `None` or an out-of-range target, lists the root-level children.
/// Blank text runs are skipped, a child element is listed once and its
/// subtree is not descended into, and orphan closers are skipped. An
/// unpaired target has no children. An unclosed child element is listed and
/// ends the scan, since everything after it is inside it.
pub fn child_indices(list: &HeaderList, target: Option<usize>) -> Vec<usize> {
    let (start, end) = match target.and_then(|seq| list.get(seq)) {
        None => (0, list.len()),
        Some(header) => match header.matched() {
            Some(other) => (header.sequence + 1, other.sequence),
            None => return Vec::new(),
        },
    };

    let source = list.source();
    let mut children = Vec::new();
    let mut seq = start;

    while seq < end {
        let header = list.record(seq);
        if header.is_empty_text_node(source) {
            seq += 1;
            continue;
        }

        match header.kind {
            TagKind::SelfClose => children.push(seq),
            TagKind::Open => {
                children.push(seq);
                match header.matched {
                    Some(close) => seq = close,
                    None => break,
                }
            }
            // Orphan closer in malformed input
            TagKind::Close => {}
        }
        seq += 1;
    }

    children
}

/// The blank text run after an element, when the element is surrounded only
/// by blank text runs or the ends of the list
///
/// The element ends at `header`, or at its closing tag if `header` opens a
/// pair. Returns the header after that end when both the header before
/// `header` and the header after the end are absent or blank; None otherwise
/// (including when nothing follows, and for an unclosed opener).
pub fn has_extra_empty_node<'a>(header: HeaderRef<'a>) -> Option<HeaderRef<'a>> {
    let end = if header.kind() == TagKind::Open {
        header.matched()?
    } else {
        header
    };

    let before_blank = header.previous().map_or(true, |h| h.is_empty_text_node());
    let after = end.next();
    let after_blank = after.map_or(true, |h| h.is_empty_text_node());

    if before_blank && after_blank {
        after
    } else {
        None
    }
}
