pub mod i18n_service;
pub mod translation_loader;


pub use i18n_service::I18nService;
pub use translation_loader::TranslationLoader;
