use std::{
    collections::HashMap,
    hash::{DefaultHasher, Hash, Hasher},
    sync::{LazyLock, RwLock}
};

use crate::document::Document;

/// Global document cache
static DOCUMENT_CACHE: LazyLock<RwLock<DocumentCache>> =
    LazyLock::new(|| RwLock::new(DocumentCache::new(64)));

/// LRU-like cache for parsed documents
pub struct DocumentCache {
    cache:    HashMap<u64, Document>,
    max_size: usize
}

impl DocumentCache {
    pub fn new(max_size: usize) -> Self {
        Self {
            cache: HashMap::with_capacity(max_size),
            max_size
        }
    }

    fn hash_key(text: &str) -> u64 {
        let mut hasher = DefaultHasher::new();
        text.hash(&mut hasher);
        hasher.finish()
    }

    pub fn get(&self, text: &str) -> Option<Document> {
        let key = Self::hash_key(text);
        self.cache.get(&key).cloned()
    }

    pub fn insert(&mut self, text: &str, doc: Document) {
        // Simple eviction: clear half when full
        if self.cache.len() >= self.max_size {
            let keys: Vec<_> = self.cache.keys().take(self.max_size / 2).copied().collect();
            for key in keys {
                self.cache.remove(&key);
            }
        }

        let key = Self::hash_key(text);
        self.cache.insert(key, doc);
    }
}

/// Get cached document or None
pub fn get_cached(text: &str) -> Option<Document> {
    DOCUMENT_CACHE.read().ok()?.get(text)
}

/// Cache a parsed document
pub fn cache_document(text: &str, doc: Document) {
    if let Ok(mut cache) = DOCUMENT_CACHE.write() {
        cache.insert(text, doc);
    }
}
