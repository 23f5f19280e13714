//! Jenks natural breaks classification.
//!
//! Finds the contiguous partition of the sorted observations that minimizes
//! the total within-class sum of squared deviations, via the classic
//! dynamic program over class count and prefix length. O(n^2 * k) time and
//! O(n * k) space; this is the computational bottleneck of the crate.

use ndarray::Array2;

use super::Classifier;
use crate::error::{JenksError, Result};

/// Jenks natural-breaks classifier
pub struct Jenks;

impl Classifier for Jenks {
    fn breaks(&self, values: &[f64], classes: usize) -> Result<Vec<f64>> {
        super::validate_class_count(classes)?;

        let n = values.len();
        if n < classes {
            return Err(JenksError::InsufficientObservations {
                required: classes,
                actual: n,
            });
        }

        let lower = build_split_table(values, classes);
        Ok(backtrack(values, &lower, classes))
    }

    fn name(&self) -> &str {
        "jenks"
    }
}

/// Fill the DP tables and return the split table.
///
/// Both tables are `(n + 1) x (classes + 1)` with row and column 0 as
/// padding, so an index pair `[l, j]` reads as "the first l observations in
/// j classes" with 1-based counts. `variance[[l, j]]` holds the minimal
/// total within-class variance of that subproblem; `lower[[l, j]]` holds
/// the 1-indexed start of the last class in the optimum.
fn build_split_table(values: &[f64], classes: usize) -> Array2<usize> {
    let n = values.len();
    let mut lower = Array2::<usize>::zeros((n + 1, classes + 1));
    let mut variance = Array2::<f64>::zeros((n + 1, classes + 1));

    for j in 1..=classes {
        lower[[1, j]] = 1;
        variance[[1, j]] = 0.0;
        for l in 2..=n {
            variance[[l, j]] = f64::INFINITY;
        }
    }

    for l in 2..=n {
        // Extend the trailing run of the first l observations backward one
        // element at a time, keeping running sums so each candidate run's
        // variance costs O(1).
        let mut sum = 0.0;
        let mut sum_squares = 0.0;
        let mut w = 0.0;
        let mut run_variance = 0.0;

        for m in 1..=l {
            let start = l - m + 1; // 1-indexed start of the trailing run
            let val = values[start - 1];

            w += 1.0;
            sum += val;
            sum_squares += val * val;
            run_variance = sum_squares - (sum * sum) / w;

            if start == 1 {
                continue;
            }
            // A split at `start` leaves start - 1 observations for the
            // remaining classes. Splits that cannot fill them are skipped;
            // on ties the >= overwrite keeps the smallest feasible start.
            for j in 2..=classes.min(start) {
                let candidate = run_variance + variance[[start - 1, j - 1]];
                if variance[[l, j]] >= candidate {
                    lower[[l, j]] = start;
                    variance[[l, j]] = candidate;
                }
            }
        }

        lower[[l, 1]] = 1;
        variance[[l, 1]] = run_variance;
    }

    lower
}

/// Walk the split table from the full problem down to one class, emitting
/// the observation just below each class start as the boundary. The data
/// extremes cap the ends.
fn backtrack(values: &[f64], lower: &Array2<usize>, classes: usize) -> Vec<f64> {
    let n = values.len();
    let mut breaks = vec![0.0; classes + 1];
    breaks[0] = values[0];
    breaks[classes] = values[n - 1];

    let mut end = n;
    for j in (2..=classes).rev() {
        let start = lower[[end, j]];
        breaks[j - 1] = values[start - 2];
        end = start - 1;
    }
    breaks
}
