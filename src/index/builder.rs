//! Header Builder
//!
//! Builds a HeaderList from the tag token stream in a single pass.
//!
//! An explicit stack of open tags resolves matching and parents, so nesting
//! depth is unbounded and matching is linear. Gaps between tags become text
//! run headers. Unpairable tags are recorded as structural errors and the
//! build carries on.

use super::error::StructureError;
use super::header::Header;
use super::list::HeaderList;
use super::span::Span;
use crate::core::attributes::{AttributeExtractor, Attributes, DefaultAttributeExtractor};
use crate::core::tokenizer::{tokenize, TagKind, TagToken};

/// Builds header lists, delegating attribute parsing to an [`AttributeExtractor`]
#[derive(Debug, Clone, Default)]
pub struct HeaderBuilder<E = DefaultAttributeExtractor> {
    extractor: E,
}

impl HeaderBuilder {
    /// Create a builder using the built-in attribute tokenizer
    pub fn new() -> Self {
        Self {
            extractor: DefaultAttributeExtractor,
        }
    }
}

impl<E: AttributeExtractor> HeaderBuilder<E> {
    /// Create a builder with a custom attribute extractor
    pub fn with_extractor(extractor: E) -> Self {
        Self { extractor }
    }

    /// Build the header list for `input`
    pub fn build(&self, input: &str) -> HeaderList {
        let tokens = tokenize(input);
        let mut state = BuildState::new(input, tokens.len());

        for token in tokens {
            let attributes = match token.kind {
                TagKind::Close => Attributes::new(),
                TagKind::Open | TagKind::SelfClose => self.extractor.extract(token.text(input)),
            };
            state.tag(token, attributes);
        }

        state.finish()
    }
}

/// Mutable state of one build pass
struct BuildState<'a> {
    input: &'a str,
    headers: Vec<Header>,
    /// Sequence numbers of currently open tags
    stack: Vec<usize>,
    errors: Vec<StructureError>,
    /// Exclusive end of the source covered so far
    processed: usize,
}

impl<'a> BuildState<'a> {
    fn new(input: &'a str, token_count: usize) -> Self {
        Self {
            input,
            // Roughly one text run per tag
            headers: Vec::with_capacity(token_count * 2 + 1),
            stack: Vec::with_capacity(32),
            errors: Vec::new(),
            processed: 0,
        }
    }

    /// Get the current parent (top of the open-tag stack)
    #[inline]
    fn current_parent(&self) -> Option<usize> {
        self.stack.last().copied()
    }

    /// Append a header, linking it after the previous one
    fn emit(&mut self, mut header: Header, parent: Option<usize>) -> usize {
        let sequence = self.headers.len();
        header.sequence = sequence;
        header.previous = sequence.checked_sub(1);
        header.parent = parent;
        if let Some(prev) = header.previous {
            self.headers[prev].next = Some(sequence);
        }
        self.processed = header.span.end_exclusive();
        self.headers.push(header);
        sequence
    }

    /// Emit a text run covering `[self.processed, end)` if non-empty
    fn text_run_until(&mut self, end: usize, parent: Option<usize>) {
        if end > self.processed {
            let span = Span::from_exclusive(self.processed, end);
            let seq = self.emit(Header::text_run(span), parent);
            self.headers[seq].matched = Some(seq);
        }
    }

    /// Handle one tag token
    fn tag(&mut self, token: TagToken, attributes: Attributes) {
        let parent = self.current_parent();
        self.text_run_until(token.span.start, parent);

        let header = Header::tag(token.span, token.name, token.kind, attributes);
        let seq = self.emit(header, parent);

        match token.kind {
            TagKind::SelfClose => {
                self.headers[seq].matched = Some(seq);
            }
            TagKind::Open => {
                self.stack.push(seq);
            }
            TagKind::Close => match self.stack.pop() {
                Some(open) => {
                    let opener = &mut self.headers[open];
                    opener.matched = Some(seq);
                    let shared_parent = opener.parent;

                    let close = &mut self.headers[seq];
                    close.matched = Some(open);
                    close.parent = shared_parent;
                }
                None => {
                    let err = StructureError::OrphanCloser {
                        name: token.name(self.input).to_string(),
                        offset: token.span.start,
                        sequence: seq,
                    };
                    log::debug!(target: "tagheader::builder", "{err}");
                    self.errors.push(err);
                }
            },
        }
    }

    /// Emit the trailing text run and record unclosed tags
    fn finish(mut self) -> HeaderList {
        // Trailing text always sits at the root, even with tags left open.
        self.text_run_until(self.input.len(), None);

        for &open in &self.stack {
            let header = &self.headers[open];
            let err = StructureError::UnclosedOpener {
                name: header.name(self.input).to_string(),
                offset: header.start(),
                sequence: open,
            };
            log::debug!(target: "tagheader::builder", "{err}");
            self.errors.push(err);
        }

        log::debug!(
            target: "tagheader::builder",
            "built {} headers from {} bytes (structural errors: {})",
            self.headers.len(),
            self.input.len(),
            self.errors.len()
        );

        self.headers.shrink_to_fit();
        HeaderList::from_parts(self.input.to_string(), self.headers, self.errors)
    }
}

/// Build a HeaderList with the built-in attribute tokenizer
pub fn build_headers(input: &str) -> HeaderList {
    HeaderBuilder::new().build(input)
}
