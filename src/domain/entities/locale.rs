use std::fmt;

use serde::{Deserialize, Serialize};

/// Primary subtags written right-to-left. Broader than the supported set so
/// `is_rtl` answers correctly for tags the engine cannot translate into.
const RTL_LANGUAGES: &[&str] = &["ar", "he", "fa", "ur"];

/// Supported locales
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Locale {
    #[serde(rename = "en")]
    English,
    #[serde(rename = "es")]
    Spanish,
    #[serde(rename = "ar")]
    Arabic,
    #[serde(rename = "he")]
    Hebrew,
}

/// Writing direction of a locale, as rendered in the `dir` attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextDirection {
    Ltr,
    Rtl,
}

impl TextDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            TextDirection::Ltr => "ltr",
            TextDirection::Rtl => "rtl",
        }
    }
}

impl fmt::Display for TextDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Locale {
    /// Baseline locale: its table is the completeness reference
    pub const DEFAULT: Locale = Locale::English;

    /// Every supported locale, baseline first
    pub const ALL: [Locale; 4] = [Locale::English, Locale::Spanish, Locale::Arabic, Locale::Hebrew];

    /// Convert locale to code string
    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::English => "en",
            Locale::Spanish => "es",
            Locale::Arabic => "ar",
            Locale::Hebrew => "he",
        }
    }

    /// Locale name in its own language
    pub fn native_name(&self) -> &'static str {
        match self {
            Locale::English => "English",
            Locale::Spanish => "Español",
            Locale::Arabic => "العربية",
            Locale::Hebrew => "עברית",
        }
    }

    pub fn direction(&self) -> TextDirection {
        text_direction(self.as_str())
    }

    pub fn is_default(&self) -> bool {
        *self == Locale::DEFAULT
    }

    /// Create from a locale code (`"es"`)
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_ascii_lowercase().as_str() {
            "en" => Some(Locale::English),
            "es" => Some(Locale::Spanish),
            "ar" => Some(Locale::Arabic),
            "he" => Some(Locale::Hebrew),
            _ => None,
        }
    }

    /// Create from a full language tag, consulting only the primary subtag
    /// (`"es-MX"`, `"es_MX.UTF-8"` and `"ES"` all give Spanish)
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::from_code(primary_subtag(tag))
    }

    /// Resolve an environment hint to a supported locale, defaulting to the
    /// baseline when the hint is absent or unsupported
    pub fn from_hint(hint: Option<&str>) -> Self {
        hint.and_then(Self::from_tag).unwrap_or(Locale::DEFAULT)
    }
}

impl Default for Locale {
    fn default() -> Self {
        Locale::DEFAULT
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Language part of a tag: everything before the first `-`, `_`, `.` or `@`
pub fn primary_subtag(tag: &str) -> &str {
    let tag = tag.trim();
    let end = tag.find(['-', '_', '.', '@']).unwrap_or(tag.len());
    &tag[..end]
}

/// True iff the tag's language is written right-to-left. Unrecognized tags
/// are left-to-right.
pub fn is_rtl(tag: &str) -> bool {
    let language = primary_subtag(tag).to_ascii_lowercase();
    RTL_LANGUAGES.contains(&language.as_str())
}

pub fn text_direction(tag: &str) -> TextDirection {
    if is_rtl(tag) {
        TextDirection::Rtl
    } else {
        TextDirection::Ltr
    }
}
