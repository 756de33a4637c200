use std::path::PathBuf;

use async_trait::async_trait;
use serde_json::Value;
use tokio::fs;

use crate::application::ports::i18n_ports::TranslationSourcePort;
use crate::domain::entities::locale::Locale;
use crate::domain::entities::translation::TranslationTable;
use crate::domain::services::i18n_service::{I18nError, I18nResult};

/// Parses one locale's JSON document into a table
pub fn parse_table(locale: Locale, content: &str) -> I18nResult<TranslationTable> {
    let value: Value = serde_json::from_str(content).map_err(|e| I18nError::ParseError {
        locale: locale.as_str().to_string(),
        message: e.to_string(),
    })?;

    TranslationTable::from_json(&value).ok_or_else(|| I18nError::ParseError {
        locale: locale.as_str().to_string(),
        message: "top-level value must be an object".to_string(),
    })
}

/// Reads `<code>.json` translation files from a directory
pub struct FileSystemTranslationSource {
    /// Base directory containing translation files
    translations_dir: PathBuf,
}

impl FileSystemTranslationSource {
    pub fn new(translations_dir: PathBuf) -> Self {
        Self { translations_dir }
    }

    /// Get translation file path for a locale
    fn get_locale_file_path(&self, locale: Locale) -> PathBuf {
        self.translations_dir.join(format!("{}.json", locale.as_str()))
    }
}

#[async_trait]
impl TranslationSourcePort for FileSystemTranslationSource {
    async fn load_translations(&self, locale: Locale) -> I18nResult<TranslationTable> {
        let file_path = self.get_locale_file_path(locale);
        tracing::info!("Loading translations for locale {} from {:?}", locale, file_path);

        if !fs::try_exists(&file_path).await.unwrap_or(false) {
            return Err(I18nError::UnsupportedLocale(locale.as_str().to_string()));
        }

        let content = fs::read_to_string(&file_path)
            .await
            .map_err(|e| I18nError::LoadError(format!("Failed to read translation file {:?}: {}", file_path, e)))?;

        let table = parse_table(locale, &content)?;
        tracing::info!("Translations loaded for locale {} ({} keys)", locale, table.len());
        Ok(table)
    }

    async fn available_locales(&self) -> Vec<Locale> {
        let mut available = Vec::new();
        for locale in Locale::ALL {
            if fs::try_exists(self.get_locale_file_path(locale)).await.unwrap_or(false) {
                available.push(locale);
            }
        }
        available
    }
}
