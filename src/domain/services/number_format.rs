use crate::domain::entities::locale::Locale;
use crate::domain::services::i18n_service::{FormatError, FormatResult};

const NBSP: char = '\u{a0}';
const ARABIC_INDIC_DIGITS: [char; 10] = ['٠', '١', '٢', '٣', '٤', '٥', '٦', '٧', '٨', '٩'];
const MAX_FRACTION_DIGITS: usize = 20;

const FEET_PER_METER: f64 = 3.28084;
const FEET_PER_MILE: f64 = 5280.0;
const METERS_PER_MILE: f64 = 1609.344;
const METERS_PER_KILOMETER: f64 = 1000.0;

/// Separators and digits a locale uses for numbers
#[derive(Debug, Clone, Copy)]
pub(crate) struct NumberSymbols {
    pub group: char,
    pub decimal: char,
    pub digits: Option<[char; 10]>,
    /// Grouping starts once the integer part has `3 + min_grouping` digits
    pub min_grouping: usize,
}

impl NumberSymbols {
    pub fn for_locale(locale: Locale) -> Self {
        match locale {
            Locale::English | Locale::Hebrew => Self {
                group: ',',
                decimal: '.',
                digits: None,
                min_grouping: 1,
            },
            Locale::Spanish => Self {
                group: '.',
                decimal: ',',
                digits: None,
                min_grouping: 2,
            },
            Locale::Arabic => Self {
                group: '٬',
                decimal: '٫',
                digits: Some(ARABIC_INDIC_DIGITS),
                min_grouping: 1,
            },
        }
    }

    /// Rewrites ASCII digits into the locale's native digits
    pub fn localize_digits(&self, text: &str) -> String {
        match self.digits {
            None => text.to_string(),
            Some(digits) => text
                .chars()
                .map(|c| match c.to_digit(10) {
                    Some(d) => digits[d as usize],
                    None => c,
                })
                .collect(),
        }
    }
}

/// Options accepted by `format_number`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberFormatOptions {
    pub minimum_fraction_digits: usize,
    pub maximum_fraction_digits: usize,
    pub use_grouping: bool,
}

impl Default for NumberFormatOptions {
    fn default() -> Self {
        Self {
            minimum_fraction_digits: 0,
            maximum_fraction_digits: 3,
            use_grouping: true,
        }
    }
}

impl NumberFormatOptions {
    pub fn fixed(fraction_digits: usize) -> Self {
        Self {
            minimum_fraction_digits: fraction_digits,
            maximum_fraction_digits: fraction_digits,
            use_grouping: true,
        }
    }

    fn validate(&self) -> FormatResult<()> {
        if self.maximum_fraction_digits > MAX_FRACTION_DIGITS {
            return Err(FormatError::InvalidOptions(format!(
                "maximum fraction digits {} exceeds {}",
                self.maximum_fraction_digits, MAX_FRACTION_DIGITS
            )));
        }
        if self.minimum_fraction_digits > self.maximum_fraction_digits {
            return Err(FormatError::InvalidOptions(format!(
                "minimum fraction digits {} exceeds maximum {}",
                self.minimum_fraction_digits, self.maximum_fraction_digits
            )));
        }
        Ok(())
    }
}

fn group_integer(digits: &str, symbols: &NumberSymbols) -> String {
    if digits.len() < 3 + symbols.min_grouping {
        return digits.to_string();
    }
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, c) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(symbols.group);
        }
        grouped.push(c);
    }
    grouped
}

/// Renders the magnitude of a finite number with locale separators, ASCII digits
fn render_decimal(value: f64, options: &NumberFormatOptions, symbols: &NumberSymbols) -> String {
    let rendered = format!("{:.*}", options.maximum_fraction_digits, value.abs());
    let (integer, fraction) = rendered.split_once('.').unwrap_or((rendered.as_str(), ""));

    let keep = fraction
        .trim_end_matches('0')
        .len()
        .max(options.minimum_fraction_digits);
    let fraction = &fraction[..keep];

    let integer = if options.use_grouping {
        group_integer(integer, symbols)
    } else {
        integer.to_string()
    };

    let is_zero = integer.chars().all(|c| c == '0' || c == symbols.group)
        && fraction.chars().all(|c| c == '0');
    let sign = if value < 0.0 && !is_zero { "-" } else { "" };

    if fraction.is_empty() {
        format!("{}{}", sign, integer)
    } else {
        format!("{}{}{}{}", sign, integer, symbols.decimal, fraction)
    }
}

/// Locale-aware number formatting
pub fn format_number(value: f64, locale: Locale, options: &NumberFormatOptions) -> FormatResult<String> {
    options.validate()?;
    let symbols = NumberSymbols::for_locale(locale);

    if value.is_nan() {
        return Ok("NaN".to_string());
    }
    if value.is_infinite() {
        return Ok(if value < 0.0 { "-∞" } else { "∞" }.to_string());
    }

    Ok(symbols.localize_digits(&render_decimal(value, options, &symbols)))
}

fn currency_fraction_digits(code: &str) -> usize {
    match code {
        "JPY" | "KRW" | "CLP" | "VND" => 0,
        _ => 2,
    }
}

fn currency_symbol(locale: Locale, code: &str) -> String {
    let symbol = match (locale, code) {
        (_, "EUR") => Some("€"),
        (_, "ILS") => Some("₪"),
        (Locale::English, "USD") | (Locale::Hebrew, "USD") => Some("$"),
        (_, "USD") => Some("US$"),
        (Locale::English, "GBP") | (Locale::Hebrew, "GBP") => Some("£"),
        (Locale::English, "JPY") | (Locale::Hebrew, "JPY") => Some("¥"),
        (Locale::English, "MXN") => Some("MX$"),
        (Locale::English, "CAD") => Some("CA$"),
        _ => None,
    };
    symbol.map(str::to_string).unwrap_or_else(|| code.to_string())
}

/// Formats an amount in the given ISO 4217 currency. The code must be three
/// ASCII letters; case is ignored.
pub fn format_currency(amount: f64, currency: &str, locale: Locale) -> FormatResult<String> {
    if currency.len() != 3 || !currency.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(FormatError::InvalidCurrency(currency.to_string()));
    }
    let code = currency.to_ascii_uppercase();
    let symbol = currency_symbol(locale, &code);
    let number = format_number(amount, locale, &NumberFormatOptions::fixed(currency_fraction_digits(&code)))?;

    let (sign, magnitude) = match number.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", number.as_str()),
    };

    let formatted = match locale {
        Locale::English if symbol.chars().all(|c| c.is_ascii_uppercase()) => {
            format!("{}{}{}{}", sign, symbol, NBSP, magnitude)
        }
        Locale::English => format!("{}{}{}", sign, symbol, magnitude),
        Locale::Spanish | Locale::Hebrew | Locale::Arabic => {
            format!("{}{}{}{}", sign, magnitude, NBSP, symbol)
        }
    };
    Ok(formatted)
}

/// Distance in the unit system tied to the locale: imperial for English,
/// metric for everything else
pub fn format_distance(meters: f64, locale: Locale) -> String {
    match locale {
        Locale::English => {
            let feet = meters * FEET_PER_METER;
            if feet < FEET_PER_MILE {
                format!("{} ft", feet.round())
            } else {
                format!("{:.1} mi", meters / METERS_PER_MILE)
            }
        }
        _ => {
            if meters < METERS_PER_KILOMETER {
                format!("{} m", meters.round())
            } else {
                format!("{:.1} km", meters / METERS_PER_KILOMETER)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn number(value: f64, locale: Locale) -> String {
        format_number(value, locale, &NumberFormatOptions::default()).unwrap()
    }

    #[test]
    fn test_english_grouping_and_rounding() {
        assert_eq!(number(1234567.891, Locale::English), "1,234,567.891");
        assert_eq!(number(1234.5678, Locale::English), "1,234.568");
        assert_eq!(number(999.0, Locale::English), "999");
        assert_eq!(number(-42.5, Locale::English), "-42.5");
        assert_eq!(number(-0.0001, Locale::English), "0");
    }

    #[test]
    fn test_spanish_minimum_grouping() {
        assert_eq!(number(1234.5, Locale::Spanish), "1234,5");
        assert_eq!(number(12345.5, Locale::Spanish), "12.345,5");
        assert_eq!(number(1234567.0, Locale::Spanish), "1.234.567");
    }

    #[test]
    fn test_arabic_native_digits() {
        assert_eq!(number(1234.5, Locale::Arabic), "١٬٢٣٤٫٥");
    }

    #[test]
    fn test_fraction_digit_bounds() {
        let options = NumberFormatOptions::fixed(2);
        assert_eq!(format_number(3.0, Locale::English, &options).unwrap(), "3.00");
        assert_eq!(format_number(3.14159, Locale::English, &options).unwrap(), "3.14");

        let no_grouping = NumberFormatOptions { use_grouping: false, ..Default::default() };
        assert_eq!(format_number(12345.0, Locale::English, &no_grouping).unwrap(), "12345");
    }

    #[test]
    fn test_invalid_options_fail() {
        let inverted = NumberFormatOptions {
            minimum_fraction_digits: 4,
            maximum_fraction_digits: 2,
            use_grouping: true,
        };
        assert!(matches!(
            format_number(1.0, Locale::English, &inverted),
            Err(FormatError::InvalidOptions(_))
        ));
        let too_many = NumberFormatOptions::fixed(21);
        assert!(format_number(1.0, Locale::English, &too_many).is_err());
    }

    #[test]
    fn test_non_finite_numbers() {
        assert_eq!(number(f64::NAN, Locale::English), "NaN");
        assert_eq!(number(f64::NEG_INFINITY, Locale::Spanish), "-∞");
    }

    #[test]
    fn test_currency_per_locale() {
        assert_eq!(format_currency(1234.5, "USD", Locale::English).unwrap(), "$1,234.50");
        assert_eq!(format_currency(-5.0, "usd", Locale::English).unwrap(), "-$5.00");
        assert_eq!(format_currency(1234.5, "USD", Locale::Spanish).unwrap(), "1234,50\u{a0}US$");
        assert_eq!(format_currency(20.0, "EUR", Locale::Spanish).unwrap(), "20,00\u{a0}€");
        assert_eq!(format_currency(1500.0, "JPY", Locale::English).unwrap(), "¥1,500");
        assert_eq!(format_currency(10.0, "CHF", Locale::English).unwrap(), "CHF\u{a0}10.00");
    }

    #[test]
    fn test_invalid_currency_code() {
        assert!(matches!(
            format_currency(1.0, "dollars", Locale::English),
            Err(FormatError::InvalidCurrency(_))
        ));
        assert!(format_currency(1.0, "U$D", Locale::English).is_err());
    }

    #[test]
    fn test_distance_unit_systems() {
        assert_eq!(format_distance(1000.0, Locale::English), "3281 ft");
        assert_eq!(format_distance(2000.0, Locale::English), "1.2 mi");
        assert_eq!(format_distance(1000.0, Locale::Spanish), "1.0 km");
        assert_eq!(format_distance(500.0, Locale::Spanish), "500 m");
        assert_eq!(format_distance(999.6, Locale::Hebrew), "1000 m");
    }
}
