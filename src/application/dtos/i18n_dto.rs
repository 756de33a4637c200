use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::entities::locale::Locale;
use crate::domain::services::translation_store::{TranslationGap, TranslationStats};

/// DTO for locale information
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct LocaleDto {
    /// Locale code (e.g., "en", "es")
    pub code: String,

    /// Locale name in its own language (e.g., "English", "Español")
    pub name: String,

    /// Text direction, "ltr" or "rtl"
    pub direction: String,
}

impl From<Locale> for LocaleDto {
    fn from(locale: Locale) -> Self {
        Self {
            code: locale.as_str().to_string(),
            name: locale.native_name().to_string(),
            direction: locale.direction().as_str().to_string(),
        }
    }
}

/// Body of a locale change request
#[derive(Debug, Deserialize)]
pub struct SetLocaleRequestDto {
    pub locale: String,
}

/// DTO for translation response
#[derive(Debug, Serialize, Deserialize)]
pub struct TranslationResponseDto {
    /// The translation key
    pub key: String,

    /// The locale code used for translation
    pub locale: String,

    /// The translated text
    pub text: String,
}

/// DTO for translation error
#[derive(Debug, Serialize, Deserialize)]
pub struct TranslationErrorDto {
    /// The translation key, when the request carried one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,

    /// The locale code the request asked for
    pub locale: String,

    /// The error message
    pub error: String,
}

/// Every key defined by one locale
#[derive(Debug, Serialize, Deserialize)]
pub struct KeysResponseDto {
    pub locale: String,
    pub keys: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TranslationGapDto {
    pub locale: String,
    pub missing_keys: Vec<String>,
}

impl From<TranslationGap> for TranslationGapDto {
    fn from(gap: TranslationGap) -> Self {
        Self {
            locale: gap.locale.as_str().to_string(),
            missing_keys: gap.missing_keys,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct TranslationStatsDto {
    pub total: usize,
    pub missing: usize,
}

impl From<TranslationStats> for TranslationStatsDto {
    fn from(stats: TranslationStats) -> Self {
        Self {
            total: stats.total,
            missing: stats.missing,
        }
    }
}

/// Stats keyed by locale code
pub fn stats_by_code(stats: BTreeMap<Locale, TranslationStats>) -> BTreeMap<String, TranslationStatsDto> {
    stats
        .into_iter()
        .map(|(locale, stats)| (locale.as_str().to_string(), stats.into()))
        .collect()
}

/// Kind of value rendered by the format endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormatKind {
    Number,
    Currency,
    Distance,
}

impl FormatKind {
    pub fn parse(kind: &str) -> Option<Self> {
        match kind {
            "number" => Some(FormatKind::Number),
            "currency" => Some(FormatKind::Currency),
            "distance" => Some(FormatKind::Distance),
            _ => None,
        }
    }
}

/// Query of the format endpoint. `value` stays textual so that a bad number
/// is reported as such instead of a generic query rejection.
#[derive(Debug, Deserialize)]
pub struct FormatQueryDto {
    pub kind: String,
    pub value: String,
    pub currency: Option<String>,
    pub locale: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct FormatResponseDto {
    pub kind: FormatKind,
    pub locale: String,
    pub text: String,
}
