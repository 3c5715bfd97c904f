//! Metric values carried by a snapshot, and the lenient numeric policy used
//! when rendering them.

use serde::{Deserialize, Serialize};
use serde_json::Number;

/// A single metric value as pushed by the automation tool.
///
/// Numbers, free text and lists of text are the expected shapes. Anything
/// else (booleans, nested objects, mixed lists) is kept verbatim in
/// [`MetricValue::Other`] so that it survives a store/load cycle.
///
/// Numbers keep their JSON representation: `7` is written back as `7` and
/// integers beyond `f64` precision are not rounded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetricValue {
    Number(Number),
    Text(String),
    List(Vec<String>),
    Other(serde_json::Value),
}

impl MetricValue {
    /// Integer metric value.
    #[must_use]
    pub fn integer(value: i64) -> Self {
        Self::Number(Number::from(value))
    }

    /// Floating-point metric value. Non-finite input has no JSON form and
    /// is stored as `0`.
    #[must_use]
    pub fn float(value: f64) -> Self {
        Self::Number(Number::from_f64(value).unwrap_or_else(|| Number::from(0)))
    }

    /// Numeric reading of the value under [`parse_lenient`] rules.
    ///
    /// Text is parsed leniently, everything that is neither a number nor
    /// text reads as `0`.
    #[must_use]
    pub fn as_number(&self) -> f64 {
        match self {
            Self::Number(value) => value
                .as_f64()
                .filter(|value| value.is_finite())
                .unwrap_or(0.0),
            Self::Text(text) => parse_lenient(text),
            _ => 0.0,
        }
    }

    /// Textual reading of the value, shown verbatim in labels.
    #[must_use]
    pub fn as_text(&self) -> String {
        match self {
            Self::Number(value) => match value.as_f64() {
                Some(float) if value.is_f64() => format_number(float),
                _ => value.to_string(),
            },
            Self::Text(text) => text.clone(),
            Self::List(items) => items.join(", "),
            Self::Other(value) => value.to_string(),
        }
    }

    /// List reading of the value. A single text value is a one-item list.
    #[must_use]
    pub fn as_list(&self) -> Vec<String> {
        match self {
            Self::List(items) => items.clone(),
            Self::Text(text) if !text.trim().is_empty() => vec![text.clone()],
            _ => Vec::new(),
        }
    }
}

/// Parse the leading decimal number of `raw`, defaulting to `0`.
///
/// Leading whitespace is skipped and anything after the numeric prefix is
/// ignored, so `"12.5%"` reads as `12.5` and `"n/a"` as `0`. Non-finite
/// results also read as `0`.
#[must_use]
pub fn parse_lenient(raw: &str) -> f64 {
    let trimmed = raw.trim_start();
    let bytes = trimmed.as_bytes();

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }
    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut has_digits = end > int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        // "12." keeps the integer part only
        if frac_end > frac_start {
            has_digits = true;
            end = frac_end;
        }
    }

    if !has_digits {
        return 0.0;
    }
    trimmed[..end]
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .unwrap_or(0.0)
}

/// Format a number without a trailing `.0` for integral values.
#[must_use]
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return "0".to_string();
    }
    if value.fract().abs() < f64::EPSILON && value.abs() < 1e15 {
        format!("{value:.0}")
    } else {
        let mut text = format!("{value:.2}");
        while text.ends_with('0') {
            text.pop();
        }
        if text.ends_with('.') {
            text.pop();
        }
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_percentage_text() {
        assert!((parse_lenient("12.5%") - 12.5).abs() < f64::EPSILON);
    }

    #[test]
    fn should_default_to_zero_when_not_numeric() {
        assert!(parse_lenient("n/a").abs() < f64::EPSILON);
        assert!(parse_lenient("").abs() < f64::EPSILON);
        assert!(parse_lenient("-").abs() < f64::EPSILON);
        assert!(parse_lenient(".").abs() < f64::EPSILON);
    }

    #[test]
    fn should_parse_signed_and_padded_values() {
        assert!((parse_lenient("  42 ") - 42.0).abs() < f64::EPSILON);
        assert!((parse_lenient("-3.5") + 3.5).abs() < f64::EPSILON);
        assert!((parse_lenient(".5") - 0.5).abs() < f64::EPSILON);
        assert!((parse_lenient("12.") - 12.0).abs() < f64::EPSILON);
    }

    #[test]
    fn should_stop_at_first_non_numeric_character() {
        assert!((parse_lenient("1,234") - 1.0).abs() < f64::EPSILON);
        assert!((parse_lenient("7 days") - 7.0).abs() < f64::EPSILON);
    }

    #[test]
    fn should_deserialize_expected_shapes() {
        let number: MetricValue = serde_json::from_str("12.5").unwrap();
        assert_eq!(number, MetricValue::float(12.5));

        let text: MetricValue = serde_json::from_str("\"12.5%\"").unwrap();
        assert_eq!(text, MetricValue::Text("12.5%".to_string()));

        let list: MetricValue = serde_json::from_str(r#"["a", "b"]"#).unwrap();
        assert_eq!(
            list,
            MetricValue::List(vec!["a".to_string(), "b".to_string()])
        );
    }

    #[test]
    fn should_keep_unexpected_shapes_as_other() {
        let value: MetricValue = serde_json::from_str(r#"{"nested": true}"#).unwrap();
        assert!(matches!(value, MetricValue::Other(_)));
        assert!(value.as_number().abs() < f64::EPSILON);
    }

    #[test]
    fn should_read_text_number_leniently() {
        let value = MetricValue::Text("33.3%".to_string());
        assert!((value.as_number() - 33.3).abs() < 1e-9);
        assert_eq!(value.as_text(), "33.3%");
    }

    #[test]
    fn should_format_integral_numbers_without_fraction() {
        assert_eq!(format_number(9.0), "9");
        assert_eq!(format_number(12.5), "12.5");
        assert_eq!(format_number(55.555), "55.56");
        assert_eq!(format_number(f64::NAN), "0");
    }

    #[test]
    fn should_treat_single_text_as_one_item_list() {
        let value = MetricValue::Text("Follow up faster".to_string());
        assert_eq!(value.as_list(), vec!["Follow up faster".to_string()]);
        assert!(MetricValue::integer(1).as_list().is_empty());
    }

    #[test]
    fn should_keep_integers_exact_across_serialization() {
        let value: MetricValue = serde_json::from_str("9007199254740993").unwrap();
        assert_eq!(serde_json::to_string(&value).unwrap(), "9007199254740993");
        assert_eq!(value.as_text(), "9007199254740993");

        let small: MetricValue = serde_json::from_str("7").unwrap();
        assert_eq!(small, MetricValue::integer(7));
        assert_eq!(serde_json::to_string(&small).unwrap(), "7");
        assert!((small.as_number() - 7.0).abs() < f64::EPSILON);
    }

    #[test]
    fn should_format_fractional_numbers_for_display() {
        assert_eq!(MetricValue::float(12.5).as_text(), "12.5");
        assert_eq!(MetricValue::float(f64::NAN), MetricValue::integer(0));
    }
}
