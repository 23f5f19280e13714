//! Built-in color ramps.
//!
//! Six sequential 5-step ramps, lightest to darkest, matched to the class
//! colors choropleth users expect. [`get_palette`] resolves them by name;
//! combine with [`Palette::resampled`] for class counts other than 5.

use super::ramp::Palette;
use crate::error::{JenksError, Result};

/// Names of all built-in palettes
pub const PALETTE_NAMES: [&str; 6] = ["blue", "red", "green", "azure", "purple", "fire"];

const BLUE: [&str; 5] = ["#00f2ff", "#00bfff", "#007fff", "#0040ff", "#0000cc"];
const RED: [&str; 5] = ["#ffcccc", "#ff6666", "#ff0000", "#cc0000", "#800000"];
const GREEN: [&str; 5] = ["#ccffcc", "#66ff66", "#00cc00", "#009900", "#006600"];
const AZURE: [&str; 5] = ["#ffffff", "#cdd3ec", "#7f8dc6", "#555fa3", "#2a3180"];
const PURPLE: [&str; 5] = ["#f2ccff", "#d280ff", "#a800ff", "#7000cc", "#3a0066"];
const FIRE: [&str; 5] = ["#fff5cc", "#ffb84d", "#ff8c1a", "#e65c00", "#993d00"];

/// Get a built-in palette by name (case-insensitive)
pub fn get_palette(name: &str) -> Result<Palette> {
    let anchors = match name.to_lowercase().as_str() {
        "blue" => &BLUE,
        "red" => &RED,
        "green" => &GREEN,
        "azure" => &AZURE,
        "purple" => &PURPLE,
        "fire" => &FIRE,
        _ => {
            return Err(JenksError::InvalidParameter {
                param: "palette".to_string(),
                message: format!(
                    "Unknown palette: {} (available: {})",
                    name,
                    PALETTE_NAMES.join(", ")
                ),
            })
        }
    };

    Palette::new(
        name.to_lowercase(),
        anchors.iter().map(|c| c.to_string()).collect(),
    )
}
