//! Tag Tokenizer
//!
//! Finds the three tag shapes in one left-to-right pass:
//!
//! ```text
//! self-closing   <name ... />
//! opening        <name ...>      (the byte before '>' is not '/')
//! closing        </name  >     (any whitespace, NBSP and BOM included)
//! ```
//!
//! Names are ASCII word characters and ':'; shape matching ignores case and
//! the source case of the name is preserved. Anything that does not form a
//! complete tag produces no token and is later absorbed into a text run.
//! Tokenizing never fails.

use super::scanner::Scanner;
use crate::index::span::Span;

/// Shape of a recognised tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TagKind {
    /// `<name ...>`
    Open,
    /// `</name>`
    Close,
    /// `<name .../>`; synthesized text runs use this kind too
    SelfClose,
}

/// One tag occurrence in the source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagToken {
    /// The whole tag, `<` through `>`
    pub span: Span,
    /// The tag name inside the tag
    pub name: Span,
    pub kind: TagKind,
}

impl TagToken {
    /// The literal matched text
    #[inline]
    pub fn text<'a>(&self, input: &'a str) -> &'a str {
        self.span.slice(input)
    }

    /// The tag name as written in the source
    #[inline]
    pub fn name<'a>(&self, input: &'a str) -> &'a str {
        self.name.slice(input)
    }
}

/// Tokenize the whole input into tag tokens, in source order
///
/// Every call starts from a fresh scanner; no state is carried between calls.
pub fn tokenize(input: &str) -> Vec<TagToken> {
    let mut scanner = Scanner::new(input.as_bytes());
    let mut tokens = Vec::new();

    while let Some(lt) = scanner.find_tag_start() {
        match match_tag_at(&scanner, lt) {
            Some(token) => {
                log::trace!(
                    target: "tagheader::tokenizer",
                    "{:?} tag at {}..={}",
                    token.kind,
                    token.span.start,
                    token.span.end
                );
                scanner.set_position(token.span.end_exclusive());
                tokens.push(token);
            }
            None => scanner.set_position(lt + 1),
        }
    }

    tokens
}

/// Try the three shapes at a '<'
///
/// Self-closing is decided before opening so `<br/>` is never read as an
/// opener. Closing tags start with `</`, which neither of the others accepts.
fn match_tag_at(scanner: &Scanner<'_>, lt: usize) -> Option<TagToken> {
    if scanner.byte_at(lt + 1) == Some(b'/') {
        return match_close_at(scanner, lt);
    }

    let name_start = lt + 1;
    let name_end = scanner.name_end_from(name_start);
    if name_end == name_start {
        return None;
    }

    // The tag runs to the first '>' regardless of quoting.
    let gt = scanner.find_tag_end_from(name_end)?;
    let kind = if scanner.byte_at(gt - 1) == Some(b'/') {
        TagKind::SelfClose
    } else {
        TagKind::Open
    };

    Some(TagToken {
        span: Span::new(lt, gt),
        name: Span::from_exclusive(name_start, name_end),
        kind,
    })
}

fn match_close_at(scanner: &Scanner<'_>, lt: usize) -> Option<TagToken> {
    let name_start = lt + 2;
    let name_end = scanner.name_end_from(name_start);
    if name_end == name_start {
        return None;
    }

    let gt = scanner.whitespace_end_from(name_end);
    if scanner.byte_at(gt) != Some(b'>') {
        return None;
    }

    Some(TagToken {
        span: Span::new(lt, gt),
        name: Span::from_exclusive(name_start, name_end),
        kind: TagKind::Close,
    })
}
