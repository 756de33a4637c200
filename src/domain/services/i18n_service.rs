use thiserror::Error;

use crate::domain::entities::locale::Locale;
use crate::domain::entities::params::TranslationParams;

/// Error types for i18n service operations
#[derive(Debug, Error)]
pub enum I18nError {
    #[error("Unsupported locale: {0}")]
    UnsupportedLocale(String),

    #[error("Error loading translations: {0}")]
    LoadError(String),

    #[error("Error parsing translations for {locale}: {message}")]
    ParseError { locale: String, message: String },
}

/// Result type for i18n service operations
pub type I18nResult<T> = Result<T, I18nError>;

/// Reasons a formatting primitive rejects its input. These never reach the
/// callers of the engine: the formatter logs them and degrades.
#[derive(Debug, Error)]
pub enum FormatError {
    #[error("Unsupported locale tag: {0}")]
    UnsupportedLocale(String),

    #[error("Invalid format options: {0}")]
    InvalidOptions(String),

    #[error("Invalid currency code: {0}")]
    InvalidCurrency(String),
}

pub type FormatResult<T> = Result<T, FormatError>;

/// Interface for translating keys (primary port).
///
/// Implementations are total: a key that cannot be resolved comes back as
/// itself.
pub trait Translator: Send + Sync + 'static {
    /// Current active locale
    fn locale(&self) -> Locale;

    /// Translates a key in the current locale
    fn translate(&self, key: &str, params: Option<&TranslationParams>) -> String;

    /// Translates a key in an explicit locale, leaving the current one alone
    fn translate_in(&self, locale: Locale, key: &str, params: Option<&TranslationParams>) -> String;
}
