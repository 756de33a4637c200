//! Tag-driven formatting surface.
//!
//! Every function here takes a locale tag as supplied by a caller. A tag the
//! engine does not support, or options a primitive rejects, is a formatting
//! failure: it is logged as a warning and a locale-naive representation is
//! returned instead. Nothing in this module returns an error.

use chrono::{DateTime, NaiveDateTime, Utc};

use crate::domain::entities::locale::Locale;
use crate::domain::services::date_format::{self, DateFormatOptions, TimeFormatOptions};
use crate::domain::services::i18n_service::{FormatError, FormatResult};
use crate::domain::services::number_format::{self, NumberFormatOptions};
use crate::domain::services::plural_rules::PluralRuleSet;
use crate::domain::services::relative_time;

pub const DEFAULT_CURRENCY: &str = "USD";

fn resolve(tag: &str) -> FormatResult<Locale> {
    Locale::from_tag(tag).ok_or_else(|| FormatError::UnsupportedLocale(tag.to_string()))
}

fn degrade(operation: &str, tag: &str, error: &FormatError, fallback: String) -> String {
    tracing::warn!("{} failed for locale {}: {}; using {:?}", operation, tag, error, fallback);
    fallback
}

pub fn format_date(date: &NaiveDateTime, tag: &str, options: &DateFormatOptions) -> String {
    match resolve(tag) {
        Ok(locale) => date_format::format_date(date, locale, options),
        Err(e) => degrade("Date formatting", tag, &e, date.to_string()),
    }
}

pub fn format_time(date: &NaiveDateTime, tag: &str, options: &TimeFormatOptions) -> String {
    match resolve(tag) {
        Ok(locale) => date_format::format_time(date, locale, options),
        Err(e) => degrade("Time formatting", tag, &e, date.time().to_string()),
    }
}

pub fn format_number(value: f64, tag: &str, options: &NumberFormatOptions) -> String {
    match resolve(tag).and_then(|locale| number_format::format_number(value, locale, options)) {
        Ok(text) => text,
        Err(e) => degrade("Number formatting", tag, &e, value.to_string()),
    }
}

pub fn format_currency(amount: f64, currency: &str, tag: &str) -> String {
    match resolve(tag).and_then(|locale| number_format::format_currency(amount, currency, locale)) {
        Ok(text) => text,
        Err(e) => degrade("Currency formatting", tag, &e, amount.to_string()),
    }
}

pub fn format_distance(meters: f64, tag: &str) -> String {
    match resolve(tag) {
        Ok(locale) => number_format::format_distance(meters, locale),
        Err(e) => degrade("Distance formatting", tag, &e, format!("{} m", meters)),
    }
}

/// Relative phrasing of `date` seen from `now`; an unusable tag falls back to
/// the absolute date in the baseline locale
pub fn format_relative_time(date: &DateTime<Utc>, now: &DateTime<Utc>, tag: &str, plurals: &PluralRuleSet) -> String {
    match resolve(tag) {
        Ok(locale) => relative_time::format_relative_time(date, now, locale, plurals),
        Err(e) => {
            let absolute = date_format::format_date(&date.naive_utc(), Locale::DEFAULT, &DateFormatOptions::default());
            degrade("Relative time formatting", tag, &e, absolute)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone};

    fn sample() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 3, 4).unwrap().and_hms_opt(9, 30, 0).unwrap()
    }

    #[test]
    fn test_region_tags_are_accepted() {
        assert_eq!(format_date(&sample(), "es-MX", &DateFormatOptions::default()), "4 de marzo de 2026");
        assert_eq!(format_distance(500.0, "es_ES"), "500 m");
    }

    #[test]
    fn test_unsupported_tags_degrade() {
        assert_eq!(format_date(&sample(), "xx", &DateFormatOptions::default()), "2026-03-04 09:30:00");
        assert_eq!(format_time(&sample(), "xx", &TimeFormatOptions::default()), "09:30:00");
        assert_eq!(format_number(1234.5, "xx", &NumberFormatOptions::default()), "1234.5");
        assert_eq!(format_distance(12.0, "xx"), "12 m");
    }

    #[test]
    fn test_invalid_inputs_degrade() {
        assert_eq!(format_currency(9.5, "not-a-code", "en"), "9.5");
        let inverted = NumberFormatOptions {
            minimum_fraction_digits: 3,
            maximum_fraction_digits: 1,
            use_grouping: true,
        };
        assert_eq!(format_number(2.25, "en", &inverted), "2.25");
    }

    #[test]
    fn test_relative_time_falls_back_to_absolute_date() {
        let now = Utc.with_ymd_and_hms(2026, 3, 5, 9, 30, 0).unwrap();
        let then = Utc.with_ymd_and_hms(2026, 3, 4, 9, 30, 0).unwrap();
        let plurals = PluralRuleSet::new();
        assert_eq!(format_relative_time(&then, &now, "en", &plurals), "1 day ago");
        assert_eq!(format_relative_time(&then, &now, "zz", &plurals), "March 4, 2026");
    }
}
