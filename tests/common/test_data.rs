//! Test data generation utilities.
//!
//! This module provides raw attribute arrays and numeric datasets with
//! known shapes, so tests can assert against hand-checked expectations.

use serde_json::{json, Value};

/// Raw attribute values the way a rendering collaborator hands them over:
/// plain numbers, localized numeric strings, and records that must be
/// filtered out.
///
/// The valid entries are 3.0, 8.5, -1.5, 12.0 and 4.25 (five observations);
/// the other four entries are junk.
pub fn mixed_raw_values() -> Vec<Value> {
    vec![
        json!(3),
        json!("8,5"),
        json!(null),
        json!(-1.5),
        json!("not a number"),
        json!("12"),
        json!(true),
        json!("4,25"),
        json!([1, 2, 3]),
    ]
}

/// A dataset with two tight clusters and one outlier, where natural breaks
/// and equal intervals disagree sharply.
pub fn clustered_values() -> Vec<f64> {
    vec![
        1.0, 1.1, 1.2, 1.3, 10.0, 10.1, 10.2, 10.3, 10.4, 50.0, 50.5, 120.0,
    ]
}

/// Deterministic pseudo-random values in `[0, 1000)`.
///
/// A fixed-seed linear congruential generator keeps runs reproducible
/// without pulling in a random number crate.
pub fn generate_values(n: usize, seed: u64) -> Vec<f64> {
    let mut state = seed.wrapping_mul(6364136223846793005).wrapping_add(1);
    (0..n)
        .map(|_| {
            state = state
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            (state >> 11) as f64 / (1u64 << 53) as f64 * 1000.0
        })
        .collect()
}

/// The same pseudo-random values wrapped as raw JSON numbers.
pub fn generate_raw_values(n: usize, seed: u64) -> Vec<Value> {
    generate_values(n, seed).into_iter().map(|v| json!(v)).collect()
}
