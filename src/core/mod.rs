//! Core markup scanning primitives
//!
//! This module contains the building blocks the header builder consumes:
//! - Scanner: SIMD-accelerated delimiter detection using memchr
//! - Tokenizer: one-pass recognition of opening, closing and self-closing tags
//! - Attributes: attribute extraction from a tag's text
//! - Entities: character reference decoding with Cow (zero-copy when possible)

pub mod attributes;
pub mod entities;
pub mod scanner;
pub mod tokenizer;
