//! Raw value parsing and observation collection.
//!
//! Attribute values arrive as heterogeneous JSON: plain numbers, numeric
//! strings with locale decimal separators, nulls for missing records. This
//! module normalizes them into a sorted collection of finite observations,
//! silently dropping whatever cannot be read as a number.

use serde_json::Value;

use crate::logging::log_observation_stats;

/// Parse a decimal string, tolerating a comma as the decimal separator.
///
/// The first comma is rewritten to a period, then the longest leading
/// float is parsed, so trailing junk does not discard the value: `"3,14"`
/// reads as `3.14` and `"12abc"` as `12.0`. Only finite results are
/// accepted.
pub fn parse_decimal(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    let normalized = trimmed.replacen(',', ".", 1);
    let prefix = float_prefix(&normalized)?;
    match prefix.parse::<f64>() {
        Ok(v) if v.is_finite() => Some(v),
        _ => None,
    }
}

/// Longest leading run of `s` that forms a decimal float literal: an
/// optional sign, digits with an optional fraction, and an exponent only
/// when at least one digit follows it. `None` when no digits lead.
fn float_prefix(s: &str) -> Option<&str> {
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(&(b'+' | b'-'))) {
        end += 1;
    }

    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if matches!(bytes.get(end), Some(&b'.')) {
        frac_digits = count_digits(&bytes[end + 1..]);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }

    if int_digits == 0 && frac_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(&(b'e' | b'E'))) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(&(b'+' | b'-'))) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    Some(&s[..end])
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

/// Extract a finite numeric observation from a raw JSON attribute value.
///
/// Numbers pass through, strings go through [`parse_decimal`], everything
/// else (null, booleans, arrays, objects) counts as missing data.
pub fn parse_value(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64().filter(|v| v.is_finite()),
        Value::String(s) => parse_decimal(s),
        _ => None,
    }
}

/// An ascending-sorted collection of finite observations.
///
/// Every constructor filters and sorts, so the ordering invariant holds for
/// the lifetime of the value and the accessors below may rely on it.
#[derive(Debug, Clone, PartialEq)]
pub struct Observations(Vec<f64>);

impl Observations {
    /// Parse raw JSON attribute values, dropping whatever is not numeric.
    pub fn from_raw(raw: &[Value]) -> Self {
        let mut values: Vec<f64> = raw.iter().filter_map(parse_value).collect();
        values.sort_unstable_by(f64::total_cmp);
        let observations = Self(values);
        log_observation_stats(
            raw.len(),
            observations.len(),
            raw.len() - observations.len(),
            observations.min(),
            observations.max(),
        );
        observations
    }

    /// Build from values that are already numeric, still filtering
    /// non-finite entries and sorting.
    pub fn from_numbers(raw: &[f64]) -> Self {
        let mut values: Vec<f64> = raw.iter().copied().filter(|v| v.is_finite()).collect();
        values.sort_unstable_by(f64::total_cmp);
        Self(values)
    }

    /// The observations in ascending order.
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    /// Number of valid observations.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when no value survived parsing.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Smallest observation, if any.
    pub fn min(&self) -> Option<f64> {
        self.0.first().copied()
    }

    /// Largest observation, if any.
    pub fn max(&self) -> Option<f64> {
        self.0.last().copied()
    }

    /// True when every observation equals every other.
    pub fn is_constant(&self) -> bool {
        match (self.0.first(), self.0.last()) {
            (Some(first), Some(last)) => first == last,
            _ => false,
        }
    }
}
