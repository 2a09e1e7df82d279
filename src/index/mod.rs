//! Header Index Module
//!
//! A flat, ordered list of headers (one per tag occurrence or text run)
//! stored as offsets into the original input:
//!
//! - **Arena links**: `previous`, `next`, `matched` and `parent` are sequence
//!   numbers into the list, so open/close cycles need no shared ownership.
//! - **Zero-copy text**: header text and names are spans into the source the
//!   list owns.
//! - **Lenient**: unpairable tags are recorded as structural errors and every
//!   other query stays usable.
//!
//! ## Architecture
//!
//! ```text
//! HeaderList
//! ├── source: String
//! ├── headers: Vec<Header>          # sequence == position
//! └── errors: Vec<StructureError>
//! ```

pub mod builder;
pub mod error;
pub mod header;
pub mod list;
pub mod span;
pub mod view;

// Re-export what's needed externally
pub use builder::{build_headers, HeaderBuilder};
pub use error::StructureError;
pub use header::{Header, TEXT_NODE_NAME};
pub use list::HeaderList;
pub use span::Span;
pub use view::{child_indices, has_extra_empty_node, HeaderRef};
