//! Quantile classification.
//!
//! Places class boundaries so each class holds roughly the same number of
//! observations. Boundaries at fractional ranks are linearly interpolated
//! between the two flanking order statistics, so the first and last
//! boundaries are exactly the data extremes while interior ones may fall
//! between observed values.

use super::Classifier;
use crate::error::Result;

/// Quantile classifier
pub struct Quantile;

impl Classifier for Quantile {
    fn breaks(&self, values: &[f64], classes: usize) -> Result<Vec<f64>> {
        super::validate_class_count(classes)?;

        if values.is_empty() {
            return Ok(Vec::new());
        }

        let n = values.len();
        let mut breaks = Vec::with_capacity(classes + 1);
        for i in 0..=classes {
            let pos = i as f64 * (n - 1) as f64 / classes as f64;
            let base = pos.floor() as usize;
            let rest = pos - base as f64;
            let boundary = match values.get(base + 1) {
                Some(&next) => values[base] + rest * (next - values[base]),
                None => values[base],
            };
            breaks.push(boundary);
        }
        Ok(breaks)
    }

    fn name(&self) -> &str {
        "quantile"
    }
}
