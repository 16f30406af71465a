use std::fmt::{Debug, Display, Formatter};

/// Format the number with the specified precision and comma-separated thousands.
#[must_use]
pub fn group_thousands(value: f64, precision: usize) -> String {
    let formatted = format!("{:.*}", precision, value.abs());
    let (integer, fraction) = formatted.split_once('.').unwrap_or((formatted.as_str(), ""));

    let mut grouped = String::with_capacity(formatted.len() + integer.len() / 3 + 1);
    if value.is_sign_negative() && formatted.bytes().any(|byte| matches!(byte, b'1'..=b'9')) {
        grouped.push('-');
    }
    for (i, digit) in integer.chars().enumerate() {
        if i != 0 && (integer.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    if !fraction.is_empty() {
        grouped.push('.');
        grouped.push_str(fraction);
    }
    grouped
}

/// Format the number with at most the specified decimals, without trailing zeros.
///
/// Formatting breaks ties to even, quantities are expected to be rounded with `round_to` first.
#[must_use]
pub fn format_compact(value: f64, decimals: usize) -> String {
    let formatted = format!("{value:.decimals$}");
    let trimmed = if formatted.contains('.') {
        formatted.trim_end_matches('0').trim_end_matches('.')
    } else {
        formatted.as_str()
    };
    match trimmed {
        "-0" => "0".to_owned(),
        trimmed => trimmed.to_owned(),
    }
}

pub struct FormattedPercentage(pub f64);

impl Debug for FormattedPercentage {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

impl Display for FormattedPercentage {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1}%", self.0 * 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0.0, 0), "0");
        assert_eq!(group_thousands(999.0, 0), "999");
        assert_eq!(group_thousands(52_500.0, 0), "52,500");
        assert_eq!(group_thousands(1_234_567.891, 2), "1,234,567.89");
        assert_eq!(group_thousands(-1500.0, 0), "-1,500");
        assert_eq!(group_thousands(-0.001, 1), "0.0");
    }

    #[test]
    fn test_format_compact() {
        assert_eq!(format_compact(30.0, 1), "30");
        assert_eq!(format_compact(8.7, 1), "8.7");
        assert_eq!(format_compact(12.345_678, 1), "12.3");
        assert_eq!(format_compact(0.333_333, 2), "0.33");
        assert_eq!(format_compact(1150.4, 0), "1150");
        assert_eq!(format_compact(-0.01, 1), "0");
    }

    #[test]
    fn test_formatted_percentage() {
        assert_eq!(FormattedPercentage(0.125).to_string(), "12.5%");
    }
}
