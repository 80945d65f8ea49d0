//! Book text caching with LRU eviction

use crate::books::ALL_BOOKS;
use crate::corpus::Chapters;
use anyhow::Result;
use lru::LruCache;
use std::num::NonZeroUsize;
use std::sync::{Arc, Mutex, PoisonError};

/// Default cache capacity: every book in both Hebrew and English.
pub const DEFAULT_CACHE_CAPACITY: usize = 2 * ALL_BOOKS.len();

pub struct BookCache {
    cache: Mutex<LruCache<String, Arc<Chapters>>>,
}

impl BookCache {
    pub fn new(capacity: usize) -> Self {
        let cache = LruCache::new(NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN));
        Self { cache: Mutex::new(cache) }
    }

    /// Return the cached text for `key`, loading it on a miss.
    /// The lock is not held while loading.
    pub fn get_or_load<F>(&self, key: &str, load: F) -> Result<Arc<Chapters>>
    where
        F: FnOnce() -> Result<Chapters>,
    {
        {
            let mut cache = self.cache.lock().unwrap_or_else(PoisonError::into_inner);
            if let Some(chapters) = cache.get(key) {
                tracing::trace!(key, "book cache hit");
                return Ok(Arc::clone(chapters));
            }
        }

        let chapters = Arc::new(load()?);
        {
            let mut cache = self.cache.lock().unwrap_or_else(PoisonError::into_inner);
            cache.put(key.to_string(), Arc::clone(&chapters));
        }
        Ok(chapters)
    }

    pub fn len(&self) -> usize {
        self.cache.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
