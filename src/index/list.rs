//! Header List - the arena of headers for one input
//!
//! Owns the source string and every header built from it. Headers refer to
//! each other by sequence number, which is also their position here, so
//! lookup by sequence is a plain index.

use super::error::StructureError;
use super::header::Header;
use super::view::HeaderRef;

/// Ordered headers for one input string plus the structural error record
///
/// Built once by [`HeaderBuilder`](super::builder::HeaderBuilder) and never
/// mutated afterwards.
#[derive(Debug, Clone, Default)]
pub struct HeaderList {
    source: String,
    headers: Vec<Header>,
    errors: Vec<StructureError>,
}

impl HeaderList {
    pub(crate) fn from_parts(
        source: String,
        headers: Vec<Header>,
        errors: Vec<StructureError>,
    ) -> Self {
        Self {
            source,
            headers,
            errors,
        }
    }

    /// The input this list was built from
    #[inline]
    pub fn source(&self) -> &str {
        &self.source
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.headers.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.headers.is_empty()
    }

    /// Raw header records in sequence order
    #[inline]
    pub fn headers(&self) -> &[Header] {
        &self.headers
    }

    /// Get a header by sequence number
    #[inline]
    pub fn get(&self, sequence: usize) -> Option<HeaderRef<'_>> {
        if sequence < self.headers.len() {
            Some(HeaderRef::new(self, sequence))
        } else {
            None
        }
    }

    /// Header record by sequence number
    #[inline]
    pub(crate) fn record(&self, sequence: usize) -> &Header {
        &self.headers[sequence]
    }

    #[inline]
    pub fn first(&self) -> Option<HeaderRef<'_>> {
        self.get(0)
    }

    #[inline]
    pub fn last(&self) -> Option<HeaderRef<'_>> {
        self.len().checked_sub(1).and_then(|seq| self.get(seq))
    }

    /// Iterate over all headers in sequence order
    pub fn iter(&self) -> impl Iterator<Item = HeaderRef<'_>> + '_ {
        (0..self.headers.len()).map(move |seq| HeaderRef::new(self, seq))
    }

    /// True when an orphan closer or an unclosed opener was found
    #[inline]
    pub fn has_structural_error(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Every structural error, orphan closers first in document order,
    /// then unclosed openers in document order
    #[inline]
    pub fn structure_errors(&self) -> &[StructureError] {
        &self.errors
    }

    /// Opt-in strictness: the first structural error, if any
    pub fn check_structure(&self) -> Result<(), StructureError> {
        match self.errors.first() {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }

    /// Sequence numbers of the root-level children
    pub fn root_children(&self) -> Vec<usize> {
        super::view::child_indices(self, None)
    }

    /// Find all tag headers with the given name (ASCII case-insensitive)
    pub fn find_by_name<'a>(&'a self, name: &'a str) -> impl Iterator<Item = HeaderRef<'a>> + 'a {
        self.iter()
            .filter(move |h| !h.is_text_node() && h.name().eq_ignore_ascii_case(name))
    }
}

impl<'a> IntoIterator for &'a HeaderList {
    type Item = HeaderRef<'a>;
    type IntoIter = Box<dyn Iterator<Item = HeaderRef<'a>> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}

#[cfg(test)]
mod tests {
    use crate::index::builder::build_headers;
    use crate::TagKind;

    #[test]
    fn test_list_basic() {
        let list = build_headers("<root><child id=\"value\">hello world</child></root>");

        assert_eq!(list.len(), 5);
        assert!(!list.is_empty());
        assert!(!list.has_structural_error());
        assert!(list.check_structure().is_ok());
        assert_eq!(list.first().map(|h| h.name()), Some("root"));
        assert_eq!(list.last().map(|h| h.kind()), Some(TagKind::Close));
        assert_eq!(list.get(2).map(|h| h.text()), Some("hello world"));
        assert!(list.get(5).is_none());
    }

    #[test]
    fn test_empty_list() {
        let list = build_headers("");
        assert!(list.is_empty());
        assert!(list.first().is_none());
        assert!(list.last().is_none());
        assert!(list.root_children().is_empty());
    }

    #[test]
    fn test_find_by_name() {
        let list = build_headers("<ul><li>a</li><LI>b</LI></ul>");
        let found: Vec<_> = list.find_by_name("li").map(|h| h.sequence()).collect();
        assert_eq!(found, vec![1, 3, 4, 6]);
    }

    #[test]
    fn test_check_structure_reports_first_error() {
        let list = build_headers("</a><b>");
        let err = list.check_structure().unwrap_err();
        assert_eq!(err.sequence(), 0);
        assert_eq!(list.structure_errors().len(), 2);
    }

    #[test]
    fn test_into_iterator() {
        let list = build_headers("<p>x</p>");
        let names: Vec<_> = (&list).into_iter().map(|h| h.name()).collect();
        assert_eq!(names, vec!["p", "TextNode", "p"]);
    }
}
