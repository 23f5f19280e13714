//! Color palettes for choropleth classes.
//!
//! A palette is an ordered list of hex colors, one per class. Six ramps
//! ship built in; any ramp can be resampled to match the requested class
//! count.

pub mod builtin;
pub mod ramp;

pub use builtin::{get_palette, PALETTE_NAMES};
pub use ramp::{Palette, NO_DATA_COLOR};
