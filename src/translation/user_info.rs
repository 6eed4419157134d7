//! `userInfo` → `extraInfo` stringification.
//!
//! The native service only carries string values, so every value goes
//! through the same text conversion the bridge runtime applies to arbitrary
//! values.

use serde_json::{Map, Number, Value};
use std::collections::BTreeMap;

/// Stringify every value of a `userInfo` mapping.
pub fn convert_user_info(user_info: &Map<String, Value>) -> BTreeMap<String, String> {
    user_info
        .iter()
        .map(|(key, value)| (key.clone(), stringify_value(value)))
        .collect()
}

/// Text form of a single JSON value.
pub fn stringify_value(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => stringify_number(n),
        Value::String(s) => s.clone(),
        // Array elements join with ',' and null elements render empty.
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                other => stringify_value(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

fn stringify_number(n: &Number) -> String {
    if let Some(i) = n.as_i64() {
        return i.to_string();
    }
    if let Some(u) = n.as_u64() {
        return u.to_string();
    }
    match n.as_f64() {
        Some(f) => stringify_float(f),
        None => n.to_string(),
    }
}

/// Shortest round-trip digits, laid out the way the bridge runtime prints
/// numbers: plain decimal for decimal exponents in `-7..21`, `d.ddde±n`
/// outside that range.
fn stringify_float(f: f64) -> String {
    if f == 0.0 {
        return "0".to_string();
    }
    if !f.is_finite() {
        return f.to_string();
    }

    let sign = if f < 0.0 { "-" } else { "" };
    // `{:e}` yields shortest round-trip digits, e.g. "1.5e300" or "1e-7".
    let scientific = format!("{:e}", f.abs());
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return f.to_string();
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return f.to_string();
    };

    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    let k = digits.len() as i32;
    // Position of the decimal point relative to the first digit.
    let n = exponent + 1;

    let body = if k <= n && n <= 21 {
        format!("{}{}", digits, "0".repeat((n - k) as usize))
    } else if 0 < n && n <= 21 {
        let (int_part, frac_part) = digits.split_at(n as usize);
        format!("{}.{}", int_part, frac_part)
    } else if -6 < n && n <= 0 {
        format!("0.{}{}", "0".repeat((-n) as usize), digits)
    } else {
        let exp_sign = if exponent < 0 { '-' } else { '+' };
        let (lead, rest) = digits.split_at(1);
        if rest.is_empty() {
            format!("{}e{}{}", lead, exp_sign, exponent.abs())
        } else {
            format!("{}.{}e{}{}", lead, rest, exp_sign, exponent.abs())
        }
    };

    format!("{}{}", sign, body)
}
