//! Expense cost values
//!
//! Costs reach us either as user-typed text or as JSON numbers, depending on
//! where the expense list came from. Both shapes are accepted and normalized
//! to a single `f64` through a total coercion: anything without a numeric
//! value counts as zero.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Cost of an expense as it was entered or stored
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Cost {
    /// Numeric cost
    Number(f64),
    /// Free-text cost, parsed on demand
    Text(String),
    /// Explicit `null` in stored data
    Missing,
}

impl Cost {
    /// Numeric value of this cost; unparsable, empty and non-finite costs are 0
    pub fn amount(&self) -> f64 {
        match self {
            Cost::Number(value) if value.is_finite() => *value,
            Cost::Number(_) => 0.0,
            Cost::Text(text) => parse_number(text),
            Cost::Missing => 0.0,
        }
    }

    /// Whether the cost carries a numeric value at all
    pub fn is_numeric(&self) -> bool {
        match self {
            Cost::Number(value) => value.is_finite(),
            Cost::Text(text) => {
                let text = text.trim_start();
                let len = leading_literal_len(text);
                len > 0 && text[..len].parse::<f64>().map_or(false, f64::is_finite)
            }
            Cost::Missing => false,
        }
    }
}

/// Deserialize a number, numeric text or `null` into an amount
///
/// Used with `#[serde(deserialize_with)]` on fields that hold a bare amount.
pub fn deserialize_amount<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Cost::deserialize(deserializer).map(|cost| cost.amount())
}

impl Default for Cost {
    fn default() -> Self {
        Cost::Text(String::new())
    }
}

impl fmt::Display for Cost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cost::Number(value) => write!(f, "{}", value),
            Cost::Text(text) => write!(f, "{}", text),
            Cost::Missing => Ok(()),
        }
    }
}

impl From<f64> for Cost {
    fn from(value: f64) -> Self {
        Cost::Number(value)
    }
}

impl From<&str> for Cost {
    fn from(text: &str) -> Self {
        Cost::Text(text.to_string())
    }
}

impl From<String> for Cost {
    fn from(text: String) -> Self {
        Cost::Text(text)
    }
}

/// Parse the leading decimal literal of `text`, returning 0 when there is none
///
/// Leading whitespace is skipped and anything after the literal is ignored,
/// so `"12.5 per month"` is 12.5 and `"abc"` is 0.
pub fn parse_number(text: &str) -> f64 {
    let text = text.trim_start();
    let len = leading_literal_len(text);
    if len == 0 {
        return 0.0;
    }
    text[..len]
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .unwrap_or(0.0)
}

/// Byte length of the longest `[sign] digits [. digits] [e [sign] digits]` prefix
fn leading_literal_len(text: &str) -> usize {
    let bytes = text.as_bytes();
    let digits_from = |mut i: usize| {
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        i
    };

    let mut end = match bytes.first() {
        Some(b'+') | Some(b'-') => 1,
        _ => 0,
    };
    let int_end = digits_from(end);
    let mut digit_count = int_end - end;
    end = int_end;

    if bytes.get(end) == Some(&b'.') {
        let frac_end = digits_from(end + 1);
        digit_count += frac_end - (end + 1);
        if digit_count > 0 {
            end = frac_end;
        }
    }

    if digit_count == 0 {
        return 0;
    }

    if matches!(bytes.get(end), Some(b'e') | Some(b'E')) {
        let mut exp_start = end + 1;
        if matches!(bytes.get(exp_start), Some(b'+') | Some(b'-')) {
            exp_start += 1;
        }
        let exp_end = digits_from(exp_start);
        if exp_end > exp_start {
            end = exp_end;
        }
    }

    end
}
