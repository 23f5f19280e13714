//! # jenks
//!
//! A choropleth classification engine.
//!
//! This library turns raw attribute values into class boundaries ("breaks")
//! and colors for choropleth-style thematic maps: parse and clean the raw
//! values, break them into a fixed number of ordered classes, then look up
//! the class and color of any value.
//!
//! ## Key Features
//!
//! - **Tolerant value parsing**: Numbers, localized numeric strings and
//!   missing data all normalize into a clean observation set
//! - **Three classification methods**: Equal intervals, quantiles and Jenks
//!   natural breaks
//! - **Built-in color ramps**: Six palettes, resampled to any class count
//! - **Total classification**: Every value maps to exactly one color, with
//!   an explicit no-data fallback
//!
//! ## Architecture
//!
//! - **Observations**: Parses heterogeneous raw values into sorted, finite
//!   observations
//! - **Methods**: Computes ascending break boundaries per classification
//!   method
//! - **Classification**: Maps values to class indices, colors and legend
//!   entries

pub mod classification;
pub mod config;
pub mod error;
pub mod logging;
pub mod methods;
pub mod observations;
pub mod palette;

pub use classification::{class_index, color_for, format_break, Classification, LegendEntry};
pub use config::{ClassificationConfig, Config};
pub use error::{JenksError, Result};
pub use logging::{
    generate_operation_id, init_tracing, log_error, log_observation_stats, log_timed_operation,
};
pub use methods::{compute_breaks, get_classifier, Classifier, Method};
pub use observations::{parse_decimal, parse_value, Observations};
pub use palette::{get_palette, Palette, NO_DATA_COLOR, PALETTE_NAMES};
