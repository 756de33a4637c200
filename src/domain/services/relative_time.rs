use chrono::{DateTime, Utc};

use crate::domain::entities::locale::Locale;
use crate::domain::services::number_format::NumberSymbols;
use crate::domain::services::plural_rules::{PluralCategory, PluralRuleSet};

const SECONDS_PER_MINUTE: i64 = 60;
const SECONDS_PER_HOUR: i64 = 3_600;
const SECONDS_PER_DAY: i64 = 86_400;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelativeUnit {
    Second,
    Minute,
    Hour,
    Day,
}

impl RelativeUnit {
    /// Largest unit whose threshold the elapsed span reaches
    fn for_span(seconds: i64) -> Self {
        if seconds < SECONDS_PER_MINUTE {
            RelativeUnit::Second
        } else if seconds < SECONDS_PER_HOUR {
            RelativeUnit::Minute
        } else if seconds < SECONDS_PER_DAY {
            RelativeUnit::Hour
        } else {
            RelativeUnit::Day
        }
    }

    fn seconds(&self) -> i64 {
        match self {
            RelativeUnit::Second => 1,
            RelativeUnit::Minute => SECONDS_PER_MINUTE,
            RelativeUnit::Hour => SECONDS_PER_HOUR,
            RelativeUnit::Day => SECONDS_PER_DAY,
        }
    }
}

/// Singular and plural word for a unit; Arabic picks the plural only for `few`
fn unit_word(locale: Locale, unit: RelativeUnit, category: PluralCategory) -> &'static str {
    let singular = match locale {
        Locale::Arabic => category != PluralCategory::Few,
        _ => category == PluralCategory::One,
    };

    let (one, other) = match (locale, unit) {
        (Locale::English, RelativeUnit::Second) => ("second", "seconds"),
        (Locale::English, RelativeUnit::Minute) => ("minute", "minutes"),
        (Locale::English, RelativeUnit::Hour) => ("hour", "hours"),
        (Locale::English, RelativeUnit::Day) => ("day", "days"),
        (Locale::Spanish, RelativeUnit::Second) => ("segundo", "segundos"),
        (Locale::Spanish, RelativeUnit::Minute) => ("minuto", "minutos"),
        (Locale::Spanish, RelativeUnit::Hour) => ("hora", "horas"),
        (Locale::Spanish, RelativeUnit::Day) => ("día", "días"),
        (Locale::Hebrew, RelativeUnit::Second) => ("שנייה", "שניות"),
        (Locale::Hebrew, RelativeUnit::Minute) => ("דקה", "דקות"),
        (Locale::Hebrew, RelativeUnit::Hour) => ("שעה", "שעות"),
        (Locale::Hebrew, RelativeUnit::Day) => ("יום", "ימים"),
        (Locale::Arabic, RelativeUnit::Second) => ("ثانية", "ثوانٍ"),
        (Locale::Arabic, RelativeUnit::Minute) => ("دقيقة", "دقائق"),
        (Locale::Arabic, RelativeUnit::Hour) => ("ساعة", "ساعات"),
        (Locale::Arabic, RelativeUnit::Day) => ("يوم", "أيام"),
    };

    if singular {
        one
    } else {
        other
    }
}

fn phrase(plurals: &PluralRuleSet, locale: Locale, value: i64, unit: RelativeUnit, past: bool) -> String {
    let word = unit_word(locale, unit, plurals.category(locale, value as f64));
    let quantity = format!("{} {}", value, word);

    let text = match (locale, past) {
        (Locale::English, true) => format!("{} ago", quantity),
        (Locale::English, false) => format!("in {}", quantity),
        (Locale::Spanish, true) => format!("hace {}", quantity),
        (Locale::Spanish, false) => format!("dentro de {}", quantity),
        (Locale::Hebrew, true) => format!("לפני {}", quantity),
        (Locale::Hebrew, false) => format!("בעוד {}", quantity),
        (Locale::Arabic, true) => format!("قبل {}", quantity),
        (Locale::Arabic, false) => format!("خلال {}", quantity),
    };

    NumberSymbols::for_locale(locale).localize_digits(&text)
}

/// Phrases `date` relative to `now`, bucketed into seconds, minutes, hours or
/// days. The value in the chosen unit is rounded down.
pub fn format_relative_time(
    date: &DateTime<Utc>,
    now: &DateTime<Utc>,
    locale: Locale,
    plurals: &PluralRuleSet,
) -> String {
    let diff = date.signed_duration_since(*now).num_seconds();
    let span = diff.saturating_abs();
    let unit = RelativeUnit::for_span(span);
    phrase(plurals, locale, span / unit.seconds(), unit, diff < 0)
}
