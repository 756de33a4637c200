pub mod common;
pub mod domain;
pub mod application;
pub mod infrastructure;
pub mod interfaces;

// Common re-exports
pub use application::services::i18n_service::{I18nService, ObserverHandle};
pub use application::services::translation_loader::TranslationLoader;
pub use domain::entities::locale::{Locale, TextDirection};
pub use domain::entities::params::{ParamValue, TranslationParams};
pub use domain::services::i18n_service::{I18nError, Translator};
pub use infrastructure::services::bundled_translation_source::BundledTranslationSource;
pub use infrastructure::services::file_system_translation_source::FileSystemTranslationSource;
