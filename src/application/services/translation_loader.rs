use std::sync::Arc;

use crate::application::ports::i18n_ports::TranslationSourcePort;
use crate::domain::entities::locale::Locale;
use crate::domain::entities::translation::TranslationTable;
use crate::domain::services::i18n_service::{I18nError, I18nResult};
use crate::domain::services::translation_store::TranslationStore;

/// Builds the translation store from a source at startup
pub struct TranslationLoader {
    source: Arc<dyn TranslationSourcePort>,
}

impl TranslationLoader {
    pub fn new(source: Arc<dyn TranslationSourcePort>) -> Self {
        Self { source }
    }

    /// Load translations for all available locales
    pub async fn load_all_translations(&self) -> Vec<(Locale, I18nResult<TranslationTable>)> {
        let locales = self.source.available_locales().await;
        let mut results = Vec::new();

        for locale in locales {
            let result = self.source.load_translations(locale).await;
            results.push((locale, result));
        }

        results
    }

    /// Loads every available locale into a store. The baseline table is
    /// required; any other locale that fails to load is skipped with a
    /// warning and falls back to the baseline at lookup time.
    pub async fn load_store(&self) -> I18nResult<TranslationStore> {
        let mut store = TranslationStore::new();

        for (locale, result) in self.load_all_translations().await {
            match result {
                Ok(table) => store.insert(locale, table),
                Err(e) if locale.is_default() => return Err(e),
                Err(e) => tracing::warn!("Skipping translations for {}: {}", locale, e),
            }
        }

        if store.table(Locale::DEFAULT).is_none() {
            return Err(I18nError::LoadError(format!(
                "baseline locale {} is not available",
                Locale::DEFAULT
            )));
        }

        tracing::info!("Translation store ready with locales {:?}", store.locales());
        Ok(store)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::services::bundled_translation_source::BundledTranslationSource;
    use crate::infrastructure::services::file_system_translation_source::FileSystemTranslationSource;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_bundled_store_has_every_locale() {
        let loader = TranslationLoader::new(Arc::new(BundledTranslationSource::new()));
        let store = loader.load_store().await.unwrap();
        assert_eq!(store.locales(), Locale::ALL.to_vec());
    }

    #[tokio::test]
    async fn test_broken_secondary_locale_is_skipped() {
        let temp_dir = tempdir().unwrap();
        std::fs::write(temp_dir.path().join("en.json"), r#"{"a": "A"}"#).unwrap();
        std::fs::write(temp_dir.path().join("es.json"), "{").unwrap();

        let loader = TranslationLoader::new(Arc::new(FileSystemTranslationSource::new(temp_dir.path().to_path_buf())));
        let store = loader.load_store().await.unwrap();
        assert_eq!(store.locales(), vec![Locale::English]);
    }

    #[tokio::test]
    async fn test_missing_baseline_fails() {
        let temp_dir = tempdir().unwrap();
        std::fs::write(temp_dir.path().join("es.json"), r#"{"a": "A"}"#).unwrap();

        let loader = TranslationLoader::new(Arc::new(FileSystemTranslationSource::new(temp_dir.path().to_path_buf())));
        assert!(matches!(loader.load_store().await, Err(I18nError::LoadError(_))));
    }
}
