//! Break computation methods.
//!
//! Each classification method turns a sorted set of observations into
//! `classes + 1` ascending class boundaries. The shared entry point is
//! [`compute_breaks`], which handles the inputs every method treats alike
//! before dispatching to the method itself.

pub mod equal_interval;
pub mod natural_breaks;
pub mod quantile;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{JenksError, Result};
use crate::observations::Observations;

/// Trait for break computation strategies
pub trait Classifier: Send + Sync {
    /// Compute `classes + 1` ascending boundaries over ascending `values`.
    ///
    /// `classes` must be at least 2; implementations reject smaller counts
    /// with an `InvalidParameter` error. Callers are expected to have
    /// handled empty and constant inputs already; [`compute_breaks`] does
    /// exactly that.
    fn breaks(&self, values: &[f64], classes: usize) -> Result<Vec<f64>>;

    /// Get the name of this classification method
    fn name(&self) -> &str;
}

/// Classification method selector
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Method {
    /// Equally wide intervals between the data minimum and maximum
    #[default]
    #[serde(rename = "equal")]
    EqualInterval,
    /// Equal observation counts per class, linearly interpolated
    Quantile,
    /// Variance-minimizing natural breaks
    Jenks,
}

impl Method {
    /// Parse a method tag. Accepts the canonical tags plus common aliases.
    pub fn parse_method(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "equal" | "equal-interval" | "equal_interval" => Ok(Method::EqualInterval),
            "quantile" | "quantiles" => Ok(Method::Quantile),
            "jenks" | "natural-breaks" | "natural_breaks" => Ok(Method::Jenks),
            _ => Err(JenksError::InvalidParameter {
                param: "method".to_string(),
                message: format!(
                    "Unknown classification method: {} (expected one of: equal, quantile, jenks)",
                    s
                ),
            }),
        }
    }

    /// The canonical tag for this method
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::EqualInterval => "equal",
            Method::Quantile => "quantile",
            Method::Jenks => "jenks",
        }
    }
}

impl FromStr for Method {
    type Err = JenksError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Method::parse_method(s)
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Get the classifier implementing a method
pub fn get_classifier(method: Method) -> Box<dyn Classifier> {
    match method {
        Method::EqualInterval => Box::new(equal_interval::EqualInterval),
        Method::Quantile => Box::new(quantile::Quantile),
        Method::Jenks => Box::new(natural_breaks::Jenks),
    }
}

/// Reject class counts no method can split into.
fn validate_class_count(classes: usize) -> Result<()> {
    if classes < 2 {
        return Err(JenksError::InvalidParameter {
            param: "classes".to_string(),
            message: format!("Class count must be at least 2, got {}", classes),
        });
    }
    Ok(())
}

/// Compute class boundaries for `values` using `method`.
///
/// Returns `classes + 1` ascending boundaries whose first and last entries
/// are the data minimum and maximum. Two inputs short-circuit before any
/// method runs:
///
/// - no observations: an empty vector, there is nothing to classify
/// - all observations equal to some `v`: the synthetic unit ramp
///   `v, v + 1, ..., v + classes`, kept for compatibility with legend
///   rendering downstream rather than for statistical merit
///
/// `classes` must be at least 2.
pub fn compute_breaks(values: &Observations, classes: usize, method: Method) -> Result<Vec<f64>> {
    validate_class_count(classes)?;

    if values.is_empty() {
        return Ok(Vec::new());
    }

    if values.is_constant() {
        let v = values.min().unwrap_or_default();
        return Ok((0..=classes).map(|i| v + i as f64).collect());
    }

    let classifier = get_classifier(method);
    debug!(
        method = classifier.name(),
        classes = classes,
        n = values.len(),
        "Computing breaks"
    );
    classifier.breaks(values.as_slice(), classes)
}
