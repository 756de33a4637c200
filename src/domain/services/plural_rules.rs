//! CLDR cardinal plural categories.
//!
//! English and Spanish only populate `one`/`other` in the shipped tables,
//! while Arabic distinguishes all six categories. Callers receive the category
//! and derive the key suffix from it, so a table with more buckets works
//! without code changes.

use std::collections::HashMap;

use icu_locale_core::{locale, Locale as IcuLocale};
use icu_plurals::{PluralOperands, PluralRuleType, PluralRules};

pub use icu_plurals::PluralCategory;

use crate::domain::entities::locale::Locale;

/// Suffix used in translation keys (`items_one`)
pub fn suffix(category: PluralCategory) -> &'static str {
    match category {
        PluralCategory::Zero => "zero",
        PluralCategory::One => "one",
        PluralCategory::Two => "two",
        PluralCategory::Few => "few",
        PluralCategory::Many => "many",
        PluralCategory::Other => "other",
    }
}

fn icu_locale(locale: Locale) -> IcuLocale {
    match locale {
        Locale::English => locale!("en"),
        Locale::Spanish => locale!("es"),
        Locale::Arabic => locale!("ar"),
        Locale::Hebrew => locale!("he"),
    }
}

/// Cardinal plural rules of every supported locale, loaded once
pub struct PluralRuleSet {
    rules: HashMap<Locale, PluralRules>,
}

impl PluralRuleSet {
    /// Loads the rules from the compiled CLDR data. A locale whose rules
    /// cannot be loaded is logged and answers `Other` for every count.
    pub fn new() -> Self {
        let mut rules = HashMap::new();
        for locale in Locale::ALL {
            match PluralRules::try_new(icu_locale(locale).into(), PluralRuleType::Cardinal.into()) {
                Ok(locale_rules) => {
                    rules.insert(locale, locale_rules);
                }
                Err(e) => tracing::error!("Plural rules for {} are unavailable: {}", locale, e),
            }
        }
        Self { rules }
    }

    /// Plural category of `count` under the cardinal rules of `locale`.
    /// Non-finite counts are `Other`.
    pub fn category(&self, locale: Locale, count: f64) -> PluralCategory {
        if !count.is_finite() {
            return PluralCategory::Other;
        }
        let Some(rules) = self.rules.get(&locale) else {
            return PluralCategory::Other;
        };

        // Shortest round-trip rendering keeps visible fraction digits (1.5 → v = 1)
        match count.abs().to_string().parse::<PluralOperands>() {
            Ok(operands) => rules.category_for(operands),
            Err(_) => {
                tracing::debug!("Count {} is outside the plural operand range", count);
                PluralCategory::Other
            }
        }
    }
}

impl Default for PluralRuleSet {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_one_other() {
        let rules = PluralRuleSet::new();
        assert_eq!(rules.category(Locale::English, 1.0), PluralCategory::One);
        assert_eq!(rules.category(Locale::English, -1.0), PluralCategory::One);
        assert_eq!(rules.category(Locale::English, 0.0), PluralCategory::Other);
        assert_eq!(rules.category(Locale::English, 5.0), PluralCategory::Other);
        assert_eq!(rules.category(Locale::English, 1.5), PluralCategory::Other);
    }

    #[test]
    fn test_spanish_many_for_millions() {
        let rules = PluralRuleSet::new();
        assert_eq!(rules.category(Locale::Spanish, 1.0), PluralCategory::One);
        assert_eq!(rules.category(Locale::Spanish, 3.0), PluralCategory::Other);
        assert_eq!(rules.category(Locale::Spanish, 1_000_000.0), PluralCategory::Many);
        assert_eq!(rules.category(Locale::Spanish, 0.0), PluralCategory::Other);
    }

    #[test]
    fn test_hebrew_dual() {
        let rules = PluralRuleSet::new();
        assert_eq!(rules.category(Locale::Hebrew, 1.0), PluralCategory::One);
        assert_eq!(rules.category(Locale::Hebrew, 2.0), PluralCategory::Two);
        assert_eq!(rules.category(Locale::Hebrew, 20.0), PluralCategory::Other);
    }

    #[test]
    fn test_arabic_six_categories() {
        let rules = PluralRuleSet::new();
        assert_eq!(rules.category(Locale::Arabic, 0.0), PluralCategory::Zero);
        assert_eq!(rules.category(Locale::Arabic, 1.0), PluralCategory::One);
        assert_eq!(rules.category(Locale::Arabic, 2.0), PluralCategory::Two);
        assert_eq!(rules.category(Locale::Arabic, 3.0), PluralCategory::Few);
        assert_eq!(rules.category(Locale::Arabic, 103.0), PluralCategory::Few);
        assert_eq!(rules.category(Locale::Arabic, 11.0), PluralCategory::Many);
        assert_eq!(rules.category(Locale::Arabic, 100.0), PluralCategory::Other);
    }

    #[test]
    fn test_non_finite_is_other() {
        let rules = PluralRuleSet::new();
        assert_eq!(rules.category(Locale::English, f64::NAN), PluralCategory::Other);
        assert_eq!(rules.category(Locale::Arabic, f64::INFINITY), PluralCategory::Other);
        assert_eq!(rules.category(Locale::Hebrew, f64::NEG_INFINITY), PluralCategory::Other);
    }

    #[test]
    fn test_suffixes() {
        assert_eq!(suffix(PluralCategory::Few), "few");
        assert_eq!(suffix(PluralCategory::Other), "other");
    }
}
