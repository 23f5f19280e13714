//! Logging utilities for jenks.
//!
//! This module provides structured logging so classification runs are
//! searchable and analyzable when the library is embedded in a larger
//! pipeline.

use std::time::Instant;
use tracing::{debug, error, info};

use uuid::Uuid;

/// Initialize the tracing subscriber with the given log level
pub fn init_tracing(log_level: &str) {
    let filter = match std::env::var("RUST_LOG") {
        Ok(val) => val,
        Err(_) => log_level.to_string(),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true)
        .init();
}

/// Log an operation with timing and result in a single statement
pub fn log_timed_operation<F, R>(operation: &str, f: F) -> R
where
    F: FnOnce() -> R,
{
    let start = Instant::now();
    let operation_id = Uuid::new_v4();

    debug!(
        operation = operation,
        operation_id = %operation_id,
        "Starting operation"
    );

    let result = f();

    let duration = start.elapsed();

    info!(
        operation = operation,
        operation_id = %operation_id,
        duration_ms = duration.as_secs_f64() * 1000.0,
        "Operation completed"
    );

    result
}

/// Log detailed information about a parsed observation set
pub fn log_observation_stats(
    total: usize,
    parsed: usize,
    dropped: usize,
    min: Option<f64>,
    max: Option<f64>,
) {
    info!(
        operation = "parse_observations",
        total = total,
        parsed = parsed,
        dropped = dropped,
        min = min.unwrap_or(f64::NAN),
        max = max.unwrap_or(f64::NAN),
        "Observations parsed"
    );
}

/// Log an error with context
pub fn log_error(error: &crate::error::JenksError, context: &str) {
    error!(
        error = %error,
        context = context,
        error_type = std::any::type_name_of_val(error),
        "Error occurred"
    );
}

/// Generate a unique operation ID for correlating log records
pub fn generate_operation_id() -> String {
    Uuid::new_v4().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_generate_operation_id() {
        let id1 = generate_operation_id();
        let id2 = generate_operation_id();

        assert!(!id1.is_empty());
        assert_ne!(id1, id2); // IDs should be unique
    }

    #[test]
    fn test_log_timed_operation() {
        // This is more of a functional test to ensure it doesn't panic
        let result = log_timed_operation("test_operation", || {
            // Simulate some work
            std::thread::sleep(Duration::from_millis(1));
            42
        });

        assert_eq!(result, 42);
    }

    #[test]
    fn test_log_helpers_do_not_panic() {
        log_observation_stats(10, 8, 2, Some(1.0), Some(9.5));
        log_observation_stats(0, 0, 0, None, None);

        let err = crate::error::JenksError::Config {
            message: "test".to_string(),
        };
        log_error(&err, "unit test");
    }
}
