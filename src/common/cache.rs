use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::domain::entities::locale::Locale;

/// Identity of a resolved translation: locale, key and canonical params
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub locale: Locale,
    pub key: String,
    pub params: String,
}

impl CacheKey {
    pub fn new(locale: Locale, key: &str, params: String) -> Self {
        Self {
            locale,
            key: key.to_string(),
            params,
        }
    }
}

/// Bounded cache of resolved translations.
///
/// Entries never expire on their own; the owner clears the whole cache when
/// the active locale changes.
pub struct TranslationCache {
    entries: Mutex<HashMap<CacheKey, String>>,
    max_entries: usize,
}

impl TranslationCache {
    pub fn new(max_entries: usize) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            max_entries,
        }
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<CacheKey, String>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn get(&self, key: &CacheKey) -> Option<String> {
        let value = self.lock().get(key).cloned();
        if value.is_some() {
            tracing::debug!("Cache hit for key: {:?}", key);
        }
        value
    }

    pub fn insert(&self, key: CacheKey, value: String) {
        if self.max_entries == 0 {
            return;
        }
        let mut entries = self.lock();

        // At capacity, evict an arbitrary entry
        if entries.len() >= self.max_entries && !entries.contains_key(&key) {
            if let Some(evicted) = entries.keys().next().cloned() {
                entries.remove(&evicted);
            }
        }

        tracing::debug!("Cache miss for key: {:?}, value cached", key);
        entries.insert(key, value);
    }

    /// Removes every entry
    pub fn invalidate_all(&self) {
        self.lock().clear();
        tracing::debug!("Translation cache fully invalidated");
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
