//! Value classification against computed breaks.
//!
//! Once breaks exist, classification is a pure lookup: scan the class
//! intervals lowest first and return the first one holding the value. The
//! scan never fails; unmatchable values fall back to the no-data sentinel
//! or the last palette color so every map feature gets painted something.

use serde::{Deserialize, Serialize};

use crate::error::{JenksError, Result};
use crate::logging::log_timed_operation;
use crate::methods::{compute_breaks, Method};
use crate::observations::Observations;
use crate::palette::{Palette, NO_DATA_COLOR};

/// Class index for a value, scanning intervals lowest first.
///
/// Intervals are closed on both ends, so a value sitting on a shared
/// boundary lands in the lower class. Returns `None` for non-finite values
/// and for values no interval holds.
pub fn class_index(value: f64, breaks: &[f64], classes: usize) -> Option<usize> {
    if !value.is_finite() {
        return None;
    }
    for i in 0..classes {
        match (breaks.get(i), breaks.get(i + 1)) {
            (Some(&lo), Some(&hi)) if value >= lo && value <= hi => return Some(i),
            _ => {}
        }
    }
    None
}

/// Color for a value given breaks and a palette.
///
/// Non-finite values get [`NO_DATA_COLOR`]. A finite value no interval
/// holds (above the last break, or the breaks are malformed) falls back to
/// the last palette color; an empty palette falls back to the sentinel.
pub fn color_for<'a>(value: f64, breaks: &[f64], palette: &'a Palette) -> &'a str {
    if !value.is_finite() {
        return NO_DATA_COLOR;
    }
    if let Some(i) = class_index(value, breaks, palette.len()) {
        if let Some(color) = palette.color(i) {
            return color;
        }
    }
    palette
        .color(palette.len().saturating_sub(1))
        .unwrap_or(NO_DATA_COLOR)
}

/// Format a break value for legend display: at most one fraction digit,
/// comma as the decimal separator, no digit grouping.
pub fn format_break(value: f64) -> String {
    let rounded = (value * 10.0).round() / 10.0;
    if rounded == rounded.trunc() {
        format!("{}", rounded.trunc() as i64)
    } else {
        format!("{:.1}", rounded).replace('.', ",")
    }
}

/// One legend row: a class color and the value range it covers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegendEntry {
    /// Class color as a hex string
    pub color: String,
    /// Lower bound of the class interval (inclusive)
    pub lower: f64,
    /// Upper bound of the class interval (inclusive)
    pub upper: f64,
}

impl LegendEntry {
    /// Closed-interval membership, the same rule the classifier applies.
    pub fn contains(&self, value: f64) -> bool {
        value.is_finite() && value >= self.lower && value <= self.upper
    }

    /// Display label for this entry, the formatted upper bound.
    pub fn label(&self) -> String {
        format_break(self.upper)
    }
}

/// The result of classifying one attribute: the method and class count it
/// was computed with, the break boundaries, and the palette the classes
/// draw their colors from.
///
/// A `Classification` is immutable. When the attribute, method, class count
/// or palette changes, compute a fresh one; nothing is cached in between.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    method: Method,
    classes: usize,
    breaks: Vec<f64>,
    palette: Palette,
}

impl Classification {
    /// Break `values` into `classes` classes using `method`, colored with
    /// `palette`.
    ///
    /// The palette must hold exactly one color per class. With no valid
    /// observations the breaks come back empty and every lookup falls back
    /// to the no-data and last-color rules.
    pub fn compute(
        values: &Observations,
        classes: usize,
        method: Method,
        palette: Palette,
    ) -> Result<Self> {
        let breaks =
            log_timed_operation("compute_breaks", || compute_breaks(values, classes, method))?;

        if !breaks.is_empty() && palette.len() != classes {
            return Err(JenksError::Palette {
                message: format!(
                    "Palette {} has {} colors but {} classes were requested",
                    palette.name(),
                    palette.len(),
                    classes
                ),
            });
        }

        Ok(Self {
            method,
            classes,
            breaks,
            palette,
        })
    }

    /// The method the breaks were computed with.
    pub fn method(&self) -> Method {
        self.method
    }

    /// The requested class count.
    pub fn classes(&self) -> usize {
        self.classes
    }

    /// The break boundaries, `classes + 1` of them (or none for empty
    /// input).
    pub fn breaks(&self) -> &[f64] {
        &self.breaks
    }

    /// The palette colors are drawn from.
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// True when there was nothing to classify.
    pub fn is_empty(&self) -> bool {
        self.breaks.is_empty()
    }

    /// Class index for a value; `None` when the value is unclassifiable.
    pub fn class_index(&self, value: f64) -> Option<usize> {
        class_index(value, &self.breaks, self.classes)
    }

    /// Color for a value.
    pub fn color_for(&self, value: f64) -> &str {
        color_for(value, &self.breaks, &self.palette)
    }

    /// Legend entries, one per class, lowest first. Empty when there was
    /// nothing to classify.
    pub fn legend(&self) -> Vec<LegendEntry> {
        (0..self.classes)
            .filter_map(|i| {
                match (
                    self.breaks.get(i),
                    self.breaks.get(i + 1),
                    self.palette.color(i),
                ) {
                    (Some(&lower), Some(&upper), Some(color)) => Some(LegendEntry {
                        color: color.to_string(),
                        lower,
                        upper,
                    }),
                    _ => None,
                }
            })
            .collect()
    }
}
