//! Equal-interval classification.
//!
//! Splits the observed range into classes of identical width. Only the
//! extremes of the data matter; the distribution in between is ignored.

use super::Classifier;
use crate::error::Result;

/// Equal-interval classifier
pub struct EqualInterval;

impl Classifier for EqualInterval {
    fn breaks(&self, values: &[f64], classes: usize) -> Result<Vec<f64>> {
        super::validate_class_count(classes)?;

        let (min, max) = match (values.first(), values.last()) {
            (Some(&min), Some(&max)) => (min, max),
            _ => return Ok(Vec::new()),
        };

        let step = (max - min) / classes as f64;
        Ok((0..=classes).map(|i| min + step * i as f64).collect())
    }

    fn name(&self) -> &str {
        "equal"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equal_interval_breaks() {
        let values = [1.0, 3.0, 4.0, 7.0, 9.0];
        let breaks = EqualInterval.breaks(&values, 4).unwrap();
        assert_eq!(breaks, vec![1.0, 3.0, 5.0, 7.0, 9.0]);
    }

    #[test]
    fn test_equal_interval_ends_match_extremes() {
        let values = [-7.5, -2.0, 0.0, 1.0, 12.5];
        let breaks = EqualInterval.breaks(&values, 5).unwrap();

        assert_eq!(breaks.len(), 6);
        assert!((breaks[0] - -7.5).abs() < 1e-12);
        assert!((breaks[5] - 12.5).abs() < 1e-12);
        assert!(breaks.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_equal_interval_uniform_width() {
        let values = [0.0, 1.0, 2.0, 50.0, 100.0];
        let breaks = EqualInterval.breaks(&values, 5).unwrap();

        for w in breaks.windows(2) {
            assert!((w[1] - w[0] - 20.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_equal_interval_empty_input() {
        let breaks = EqualInterval.breaks(&[], 5).unwrap();
        assert!(breaks.is_empty());
    }

    #[test]
    fn test_equal_interval_rejects_small_class_count() {
        assert!(EqualInterval.breaks(&[1.0, 2.0], 1).is_err());
        assert!(EqualInterval.breaks(&[1.0, 2.0], 0).is_err());
    }
}
