//! Common test utilities for jenks.
//!
//! This module provides shared utilities for testing the classification
//! engine.

// Re-export all common test utilities
pub mod assertions;
pub mod test_data;
