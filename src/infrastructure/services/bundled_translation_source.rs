use async_trait::async_trait;

use crate::application::ports::i18n_ports::TranslationSourcePort;
use crate::domain::entities::locale::Locale;
use crate::domain::entities::translation::TranslationTable;
use crate::domain::services::i18n_service::I18nResult;
use crate::domain::services::translation_store::TranslationStore;
use crate::infrastructure::services::file_system_translation_source::parse_table;

const EN: &str = include_str!("../../../static/locales/en.json");
const ES: &str = include_str!("../../../static/locales/es.json");
const AR: &str = include_str!("../../../static/locales/ar.json");
const HE: &str = include_str!("../../../static/locales/he.json");

/// Translation tables compiled into the binary
#[derive(Debug, Default, Clone, Copy)]
pub struct BundledTranslationSource;

impl BundledTranslationSource {
    pub fn new() -> Self {
        Self
    }

    fn document(locale: Locale) -> &'static str {
        match locale {
            Locale::English => EN,
            Locale::Spanish => ES,
            Locale::Arabic => AR,
            Locale::Hebrew => HE,
        }
    }

    pub fn table(locale: Locale) -> I18nResult<TranslationTable> {
        parse_table(locale, Self::document(locale))
    }

    /// Store with every bundled table. A bundled table that fails to parse is
    /// logged and left out.
    pub fn store() -> TranslationStore {
        let mut store = TranslationStore::new();
        for locale in Locale::ALL {
            match Self::table(locale) {
                Ok(table) => store.insert(locale, table),
                Err(e) => tracing::error!("Bundled translations for {} are unusable: {}", locale, e),
            }
        }
        store
    }
}

#[async_trait]
impl TranslationSourcePort for BundledTranslationSource {
    async fn load_translations(&self, locale: Locale) -> I18nResult<TranslationTable> {
        Self::table(locale)
    }

    async fn available_locales(&self) -> Vec<Locale> {
        Locale::ALL.to_vec()
    }
}
