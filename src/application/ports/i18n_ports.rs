use async_trait::async_trait;

use crate::common::errors::DomainError;
use crate::domain::entities::locale::{Locale, TextDirection};
use crate::domain::entities::translation::TranslationTable;
use crate::domain::services::i18n_service::I18nResult;

/// Secondary port supplying translation tables
#[async_trait]
pub trait TranslationSourcePort: Send + Sync + 'static {
    /// Loads the table of one locale
    async fn load_translations(&self, locale: Locale) -> I18nResult<TranslationTable>;

    /// Locales this source can provide
    async fn available_locales(&self) -> Vec<Locale>;
}

/// Secondary port for the key-value slot holding persisted preferences
#[cfg_attr(test, mockall::automock)]
pub trait KeyValueStorePort: Send + Sync + 'static {
    /// Reads a slot; `None` when nothing was ever written
    fn get(&self, key: &str) -> Result<Option<String>, DomainError>;

    /// Writes a slot
    fn set(&self, key: &str, value: &str) -> Result<(), DomainError>;
}

/// Secondary port for the root rendering context of the UI shell
#[cfg_attr(test, mockall::automock)]
pub trait DocumentAttributesPort: Send + Sync + 'static {
    /// Sets the document language and text direction
    fn apply(&self, lang: &str, dir: TextDirection);
}
