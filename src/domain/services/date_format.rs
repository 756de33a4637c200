use chrono::{Datelike, NaiveDateTime, Timelike};

use crate::domain::entities::locale::Locale;
use crate::domain::services::number_format::NumberSymbols;

const EN_MONTHS: [&str; 12] = [
    "January", "February", "March", "April", "May", "June",
    "July", "August", "September", "October", "November", "December",
];
const EN_MONTHS_SHORT: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];
const ES_MONTHS: [&str; 12] = [
    "enero", "febrero", "marzo", "abril", "mayo", "junio",
    "julio", "agosto", "septiembre", "octubre", "noviembre", "diciembre",
];
const ES_MONTHS_SHORT: [&str; 12] = [
    "ene", "feb", "mar", "abr", "may", "jun", "jul", "ago", "sept", "oct", "nov", "dic",
];
const HE_MONTHS: [&str; 12] = [
    "ינואר", "פברואר", "מרץ", "אפריל", "מאי", "יוני",
    "יולי", "אוגוסט", "ספטמבר", "אוקטובר", "נובמבר", "דצמבר",
];
const HE_MONTHS_SHORT: [&str; 12] = [
    "ינו׳", "פבר׳", "מרץ", "אפר׳", "מאי", "יוני", "יולי", "אוג׳", "ספט׳", "אוק׳", "נוב׳", "דצמ׳",
];
const AR_MONTHS: [&str; 12] = [
    "يناير", "فبراير", "مارس", "أبريل", "مايو", "يونيو",
    "يوليو", "أغسطس", "سبتمبر", "أكتوبر", "نوفمبر", "ديسمبر",
];

// Monday first, matching `Weekday::num_days_from_monday`
const EN_WEEKDAYS: [&str; 7] = ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday", "Sunday"];
const ES_WEEKDAYS: [&str; 7] = ["lunes", "martes", "miércoles", "jueves", "viernes", "sábado", "domingo"];
const HE_WEEKDAYS: [&str; 7] = [
    "יום שני", "יום שלישי", "יום רביעי", "יום חמישי", "יום שישי", "יום שבת", "יום ראשון",
];
const AR_WEEKDAYS: [&str; 7] = ["الاثنين", "الثلاثاء", "الأربعاء", "الخميس", "الجمعة", "السبت", "الأحد"];

/// How the month is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MonthStyle {
    #[default]
    Long,
    Short,
    Numeric,
}

/// Options accepted by `format_date`. The default is year, long month, day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DateFormatOptions {
    pub month: MonthStyle,
    pub weekday: bool,
}

/// Options accepted by `format_time`. The default is hour and minute on the
/// locale's usual clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TimeFormatOptions {
    pub hour12: Option<bool>,
    pub seconds: bool,
}

fn month_name(locale: Locale, month0: usize, style: MonthStyle) -> &'static str {
    match (locale, style) {
        (Locale::English, MonthStyle::Short) => EN_MONTHS_SHORT[month0],
        (Locale::English, _) => EN_MONTHS[month0],
        (Locale::Spanish, MonthStyle::Short) => ES_MONTHS_SHORT[month0],
        (Locale::Spanish, _) => ES_MONTHS[month0],
        (Locale::Hebrew, MonthStyle::Short) => HE_MONTHS_SHORT[month0],
        (Locale::Hebrew, _) => HE_MONTHS[month0],
        (Locale::Arabic, _) => AR_MONTHS[month0],
    }
}

fn weekday_name(locale: Locale, day0: usize) -> &'static str {
    match locale {
        Locale::English => EN_WEEKDAYS[day0],
        Locale::Spanish => ES_WEEKDAYS[day0],
        Locale::Hebrew => HE_WEEKDAYS[day0],
        Locale::Arabic => AR_WEEKDAYS[day0],
    }
}

/// Locale-aware calendar date
pub fn format_date(date: &NaiveDateTime, locale: Locale, options: &DateFormatOptions) -> String {
    let day = date.day();
    let month = date.month();
    let year = date.year();
    let month0 = date.month0() as usize;

    let body = match (options.month, locale) {
        (MonthStyle::Numeric, Locale::English) => format!("{}/{}/{}", month, day, year),
        (MonthStyle::Numeric, Locale::Hebrew) => format!("{}.{}.{}", day, month, year),
        (MonthStyle::Numeric, _) => format!("{}/{}/{}", day, month, year),
        (style, Locale::English) => format!("{} {}, {}", month_name(locale, month0, style), day, year),
        (MonthStyle::Long, Locale::Spanish) => {
            format!("{} de {} de {}", day, month_name(locale, month0, MonthStyle::Long), year)
        }
        (style, Locale::Spanish) => format!("{} {} {}", day, month_name(locale, month0, style), year),
        (style, Locale::Hebrew) => format!("{} ב{} {}", day, month_name(locale, month0, style), year),
        (style, Locale::Arabic) => format!("{} {} {}", day, month_name(locale, month0, style), year),
    };

    let body = if options.weekday {
        let weekday = weekday_name(locale, date.weekday().num_days_from_monday() as usize);
        let separator = if locale == Locale::Arabic { "، " } else { ", " };
        format!("{}{}{}", weekday, separator, body)
    } else {
        body
    };

    NumberSymbols::for_locale(locale).localize_digits(&body)
}

/// Locale-aware wall-clock time
pub fn format_time(date: &NaiveDateTime, locale: Locale, options: &TimeFormatOptions) -> String {
    let uses_12_hour = options
        .hour12
        .unwrap_or(matches!(locale, Locale::English | Locale::Arabic));

    let minute = date.minute();
    let seconds = if options.seconds {
        format!(":{:02}", date.second())
    } else {
        String::new()
    };

    let text = if uses_12_hour {
        let (is_pm, hour) = date.hour12();
        let marker = match (locale, is_pm) {
            (Locale::Arabic, true) => "م",
            (Locale::Arabic, false) => "ص",
            (_, true) => "PM",
            (_, false) => "AM",
        };
        format!("{}:{:02}{} {}", hour, minute, seconds, marker)
    } else {
        format!("{:02}:{:02}{}", date.hour(), minute, seconds)
    };

    NumberSymbols::for_locale(locale).localize_digits(&text)
}
