use serde::{Deserialize, Serialize};

/// Locale preset used by label formatters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum LabelLocale {
    #[default]
    EnUs,
    EsEs,
}

impl LabelLocale {
    fn decimal_separator(self) -> char {
        match self {
            Self::EnUs => '.',
            Self::EsEs => ',',
        }
    }

    fn group_separator(self) -> char {
        match self {
            Self::EnUs => ',',
            Self::EsEs => '.',
        }
    }

    /// Smallest integer-part length that gets grouping separators.
    fn min_grouped_digits(self) -> usize {
        match self {
            Self::EnUs => 4,
            Self::EsEs => 5,
        }
    }
}

const MAX_FRACTION_DIGITS: usize = 3;

/// Formats category names and values for accessible labels.
pub trait LabelFormatter {
    fn format_name(&self, name: &str) -> String;
    fn format_value(&self, value: f64) -> String;
}

/// Default formatter: names as given, locale-aware numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LocaleLabelFormatter {
    pub locale: LabelLocale,
}

impl LocaleLabelFormatter {
    #[must_use]
    pub fn new(locale: LabelLocale) -> Self {
        Self { locale }
    }
}

impl LabelFormatter for LocaleLabelFormatter {
    fn format_name(&self, name: &str) -> String {
        format_label(name)
    }

    fn format_value(&self, value: f64) -> String {
        format_localized_number(value, self.locale)
    }
}

/// Display form of a category name. Names are already text, so they pass
/// through unchanged.
#[must_use]
pub fn format_label(name: &str) -> String {
    name.to_owned()
}

/// Locale-aware number text with at most three fraction digits.
///
/// Trailing fraction zeros are dropped and the integer part is grouped in
/// thousands. Negative values keep their sign even when they round to zero
/// (`-0`). Non-finite values render as `NaN` or `∞`.
#[must_use]
pub fn format_localized_number(value: f64, locale: LabelLocale) -> String {
    if value.is_nan() {
        return "NaN".to_owned();
    }
    if value.is_infinite() {
        return if value > 0.0 { "∞" } else { "-∞" }.to_owned();
    }

    let text = format!("{:.prec$}", value.abs(), prec = MAX_FRACTION_DIGITS);
    let (integer, fraction) = text.split_once('.').unwrap_or((text.as_str(), ""));
    let fraction = fraction.trim_end_matches('0');

    let mut out = String::with_capacity(text.len() + integer.len() / 3 + 1);
    if value.is_sign_negative() {
        out.push('-');
    }
    out.push_str(&group_integer_digits(integer, locale));
    if !fraction.is_empty() {
        out.push(locale.decimal_separator());
        out.push_str(fraction);
    }
    out
}

fn group_integer_digits(integer: &str, locale: LabelLocale) -> String {
    if integer.len() < locale.min_grouped_digits() {
        return integer.to_owned();
    }

    let separator = locale.group_separator();
    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (idx, ch) in integer.chars().enumerate() {
        if idx > 0 && (integer.len() - idx) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn es_locale_leaves_four_digit_integers_ungrouped() {
        assert_eq!(group_integer_digits("1000", LabelLocale::EsEs), "1000");
        assert_eq!(group_integer_digits("10000", LabelLocale::EsEs), "10.000");
        assert_eq!(group_integer_digits("1000", LabelLocale::EnUs), "1,000");
    }
}
