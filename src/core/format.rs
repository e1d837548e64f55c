//! Display formatting for dashboard values.
//!
//! Every function here is total: missing, non-finite or sentinel inputs
//! produce [`UNAVAILABLE`] instead of an error.

use rust_decimal::{Decimal, RoundingStrategy};
use serde_json::Value;

/// Marker shown wherever a value is missing.
pub const UNAVAILABLE: &str = "N/A";

const BYTE_UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];
const LOCALE_FRACTION_DIGITS: u32 = 3;

/// A value handed to the formatters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Metric {
    Value(f64),
    Unavailable,
}

impl Metric {
    /// The numeric value when present and finite.
    #[must_use]
    pub fn finite(self) -> Option<f64> {
        match self {
            Self::Value(value) if value.is_finite() => Some(value),
            _ => None,
        }
    }
}

impl From<f64> for Metric {
    fn from(value: f64) -> Self {
        Self::Value(value)
    }
}

impl From<i64> for Metric {
    fn from(value: i64) -> Self {
        Self::Value(value as f64)
    }
}

impl From<u64> for Metric {
    fn from(value: u64) -> Self {
        Self::Value(value as f64)
    }
}

impl From<Option<f64>> for Metric {
    fn from(value: Option<f64>) -> Self {
        value.map_or(Self::Unavailable, Self::Value)
    }
}

impl From<&str> for Metric {
    fn from(value: &str) -> Self {
        let trimmed = value.trim();
        if trimmed == UNAVAILABLE {
            return Self::Unavailable;
        }
        trimmed.parse::<f64>().map_or(Self::Unavailable, Self::Value)
    }
}

impl From<&Value> for Metric {
    fn from(value: &Value) -> Self {
        match value {
            Value::Number(number) => number.as_f64().into(),
            Value::String(text) => text.as_str().into(),
            _ => Self::Unavailable,
        }
    }
}

/// Locale-grouped decimal string, e.g. `1234567.8912` -> `1,234,567.891`.
#[must_use]
pub fn format_number(value: impl Into<Metric>) -> String {
    let Some(value) = value.into().finite() else {
        return UNAVAILABLE.to_owned();
    };

    let plain = match Decimal::from_f64_retain(value) {
        Some(decimal) => decimal
            .round_dp_with_strategy(LOCALE_FRACTION_DIGITS, RoundingStrategy::MidpointAwayFromZero)
            .normalize()
            .to_string(),
        None => format!("{value:.0}"),
    };

    let (negative, unsigned) = match plain.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, plain.as_str()),
    };
    let (integer, fraction) = unsigned.split_once('.').unwrap_or((unsigned, ""));

    let mut out = String::with_capacity(plain.len() + integer.len() / 3 + 1);
    if negative && unsigned.bytes().any(|b| b.is_ascii_digit() && b != b'0') {
        out.push('-');
    }
    out.push_str(&group_thousands(integer));
    if !fraction.is_empty() {
        out.push('.');
        out.push_str(fraction);
    }
    out
}

/// Byte count scaled to the largest unit that keeps the value below 1024.
#[must_use]
pub fn format_bytes(bytes: impl Into<Metric>) -> String {
    let Some(mut value) = bytes.into().finite() else {
        return UNAVAILABLE.to_owned();
    };

    let mut unit = 0;
    while value >= 1024.0 && unit < BYTE_UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    format!("{} {}", to_fixed(value, 1), BYTE_UNITS[unit])
}

/// One-decimal percentage, e.g. `75` -> `75.0%`.
#[must_use]
pub fn format_percent(value: impl Into<Metric>) -> String {
    match value.into().finite() {
        Some(value) => format!("{}%", to_fixed(value, 1)),
        None => UNAVAILABLE.to_owned(),
    }
}

/// Fixed-point rendering with half-away-from-zero rounding of the exact
/// binary value.
#[must_use]
pub fn to_fixed(value: f64, digits: u32) -> String {
    let precision = digits as usize;
    match Decimal::from_f64_retain(value) {
        Some(decimal) => format!(
            "{:.precision$}",
            decimal.round_dp_with_strategy(digits, RoundingStrategy::MidpointAwayFromZero)
        ),
        None => format!("{value:.precision$}"),
    }
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (len - index) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
