use std::collections::{BTreeMap, HashMap};

use crate::domain::entities::locale::Locale;
use crate::domain::entities::translation::TranslationTable;

/// Baseline keys a locale does not define
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationGap {
    pub locale: Locale,
    pub missing_keys: Vec<String>,
}

/// Size of a locale's table and how far it is from the baseline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TranslationStats {
    pub total: usize,
    pub missing: usize,
}

/// Translation tables of every loaded locale
#[derive(Debug, Clone, Default)]
pub struct TranslationStore {
    tables: HashMap<Locale, TranslationTable>,
}

impl TranslationStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_table(mut self, locale: Locale, table: TranslationTable) -> Self {
        self.insert(locale, table);
        self
    }

    /// Adds or replaces the table of a locale
    pub fn insert(&mut self, locale: Locale, table: TranslationTable) {
        self.tables.insert(locale, table);
    }

    pub fn table(&self, locale: Locale) -> Option<&TranslationTable> {
        self.tables.get(&locale)
    }

    /// Template at `key` in one locale; no fallback
    pub fn resolve(&self, key: &str, locale: Locale) -> Option<&str> {
        self.tables.get(&locale)?.resolve(key)
    }

    /// Loaded locales in declaration order
    pub fn locales(&self) -> Vec<Locale> {
        let mut locales: Vec<Locale> = self.tables.keys().copied().collect();
        locales.sort();
        locales
    }

    /// Dotted paths defined for a locale; empty when it is not loaded
    pub fn keys(&self, locale: Locale) -> Vec<String> {
        self.tables.get(&locale).map(TranslationTable::keys).unwrap_or_default()
    }

    fn missing_keys(&self, locale: Locale, baseline: &[String]) -> Vec<String> {
        match self.tables.get(&locale) {
            Some(table) => baseline.iter().filter(|key| !table.contains(key)).cloned().collect(),
            None => baseline.to_vec(),
        }
    }

    /// Gaps of every non-baseline locale that lacks at least one baseline key
    pub fn validate(&self) -> Vec<TranslationGap> {
        let baseline = self.keys(Locale::DEFAULT);
        self.locales()
            .into_iter()
            .filter(|locale| !locale.is_default())
            .map(|locale| TranslationGap {
                locale,
                missing_keys: self.missing_keys(locale, &baseline),
            })
            .filter(|gap| !gap.missing_keys.is_empty())
            .collect()
    }

    /// Per-locale key count and number of baseline keys missing
    pub fn stats(&self) -> BTreeMap<Locale, TranslationStats> {
        let baseline = self.keys(Locale::DEFAULT);
        self.locales()
            .into_iter()
            .map(|locale| {
                let missing = if locale.is_default() {
                    0
                } else {
                    self.missing_keys(locale, &baseline).len()
                };
                let total = self.tables.get(&locale).map(TranslationTable::len).unwrap_or(0);
                (locale, TranslationStats { total, missing })
            })
            .collect()
    }
}
