//! tagheader - Lenient tag/text header lists over HTML-like strings
//!
//! Turns a markup string into an ordered list of headers without building a
//! DOM. Each header is one tag occurrence or one run of text between tags,
//! linked to its neighbours, its matching tag and its enclosing tag.
//!
//! Layers:
//! - `core`: memchr scanner, tag tokenizer, attribute extraction
//! - `index`: header builder, header list, navigation queries
//! - `cache`: skip rebuilding for a repeated input
//!
//! ```
//! use tagheader::build_headers;
//!
//! let list = build_headers("<div><span>x</span><span>y</span></div>");
//! let second = list.get(4).unwrap();
//! assert_eq!(second.name(), "span");
//! assert_eq!(second.xpath(), vec![0, 1]);
//! assert_eq!(second.whole_text(), Some("<span>y</span>"));
//! ```

mod cache;
mod core;
mod index;

pub use crate::cache::{HeaderCache, SharedHeaderCache};
pub use crate::core::attributes::{
    extract_attributes, AttributeExtractor, Attributes, DefaultAttributeExtractor,
};
pub use crate::core::tokenizer::{tokenize, TagKind, TagToken};
pub use crate::index::{
    build_headers, child_indices, has_extra_empty_node, Header, HeaderBuilder, HeaderList,
    HeaderRef, Span, StructureError, TEXT_NODE_NAME,
};
