//! Palette type and gradient resampling.

use colorgrad::CustomGradient;
use serde::{Deserialize, Serialize};

use crate::error::{JenksError, Result};

/// Color returned for values that cannot be classified (missing or
/// non-finite). Deliberately absent from every built-in ramp.
pub const NO_DATA_COLOR: &str = "#333";

/// An ordered list of class colors, lightest to darkest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    name: String,
    colors: Vec<String>,
}

impl Palette {
    /// Create a palette from explicit colors. At least two are required so
    /// the palette can span a gradient.
    pub fn new(name: impl Into<String>, colors: Vec<String>) -> Result<Self> {
        if colors.len() < 2 {
            return Err(JenksError::Palette {
                message: format!("A palette needs at least 2 colors, got {}", colors.len()),
            });
        }
        Ok(Self {
            name: name.into(),
            colors,
        })
    }

    /// The palette's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// All colors in class order.
    pub fn colors(&self) -> &[String] {
        &self.colors
    }

    /// Number of colors, which equals the number of classes served.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Color for a class index, if that class exists.
    pub fn color(&self, index: usize) -> Option<&str> {
        self.colors.get(index).map(String::as_str)
    }

    /// Resample the palette to exactly `classes` colors.
    ///
    /// The current colors anchor a gradient which is sampled at `classes`
    /// evenly spaced points. When `classes` already equals the color count
    /// the palette is returned unchanged, so the built-in ramps keep their
    /// exact hex values at the default class count.
    pub fn resampled(&self, classes: usize) -> Result<Self> {
        if classes < 2 {
            return Err(JenksError::Palette {
                message: format!("Cannot resample to {} colors, need at least 2", classes),
            });
        }
        if classes == self.colors.len() {
            return Ok(self.clone());
        }

        let anchors: Vec<&str> = self.colors.iter().map(String::as_str).collect();
        let gradient = CustomGradient::new()
            .html_colors(&anchors)
            .build()
            .map_err(|e| JenksError::Palette {
                message: format!("Invalid colors in palette {}: {}", self.name, e),
            })?;

        let colors = gradient
            .colors(classes)
            .iter()
            .map(|c| c.to_hex_string())
            .collect();
        Ok(Self {
            name: self.name.clone(),
            colors,
        })
    }
}
