//! Built-list cache
//!
//! Building is skipped when the exact same input string was built before and
//! is still cached. The default capacity is one entry: the most recent input
//! and its list, replaced by the next distinct input.
//!
//! [`HeaderCache`] is owned by its caller and needs `&mut self`.
//! [`SharedHeaderCache`] wraps one in a Mutex for callers that share a slot
//! across threads.

use std::num::NonZeroUsize;
use std::sync::{Arc, Mutex, PoisonError};

use lru::LruCache;

use crate::core::attributes::{AttributeExtractor, DefaultAttributeExtractor};
use crate::index::builder::HeaderBuilder;
use crate::index::list::HeaderList;

/// Cache of built header lists keyed by exact input string
pub struct HeaderCache<E = DefaultAttributeExtractor> {
    builder: HeaderBuilder<E>,
    entries: LruCache<String, Arc<HeaderList>>,
}

impl HeaderCache {
    /// Single-slot cache using the built-in attribute tokenizer
    pub fn new() -> Self {
        Self::with_capacity(NonZeroUsize::MIN)
    }

    /// Cache keeping up to `capacity` lists, least recently used evicted first
    pub fn with_capacity(capacity: NonZeroUsize) -> Self {
        Self::with_builder(HeaderBuilder::new(), capacity)
    }
}

impl Default for HeaderCache {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: AttributeExtractor> HeaderCache<E> {
    /// Cache building with the given builder
    pub fn with_builder(builder: HeaderBuilder<E>, capacity: NonZeroUsize) -> Self {
        Self {
            builder,
            entries: LruCache::new(capacity),
        }
    }

    /// Return the cached list for `html`, building it on a miss
    pub fn build(&mut self, html: &str) -> Arc<HeaderList> {
        if let Some(list) = self.entries.get(html) {
            log::trace!(target: "tagheader::cache", "hit ({} bytes)", html.len());
            return Arc::clone(list);
        }

        log::trace!(target: "tagheader::cache", "miss ({} bytes)", html.len());
        let list = Arc::new(self.builder.build(html));
        self.entries.put(html.to_string(), Arc::clone(&list));
        list
    }

    /// Check if `html` is cached, without touching recency
    pub fn contains(&self, html: &str) -> bool {
        self.entries.contains(html)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> NonZeroUsize {
        self.entries.cap()
    }

    /// Drop every cached list
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

/// A [`HeaderCache`] behind a Mutex
pub struct SharedHeaderCache<E = DefaultAttributeExtractor> {
    inner: Mutex<HeaderCache<E>>,
}

impl SharedHeaderCache {
    /// Single-slot shared cache using the built-in attribute tokenizer
    pub fn new() -> Self {
        Self::from_cache(HeaderCache::new())
    }
}

impl Default for SharedHeaderCache {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: AttributeExtractor> SharedHeaderCache<E> {
    pub fn from_cache(cache: HeaderCache<E>) -> Self {
        Self {
            inner: Mutex::new(cache),
        }
    }

    /// Return the cached list for `html`, building it on a miss
    ///
    /// The build runs while the lock is held. A poisoned lock is recovered:
    /// entries are only ever inserted whole.
    pub fn build(&self, html: &str) -> Arc<HeaderList> {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .build(html)
    }

    pub fn contains(&self, html: &str) -> bool {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .contains(html)
    }
}
