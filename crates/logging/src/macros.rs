//! # Logging Macros
//!
//! Convenience macros for structured logging.
//! These macros provide additional metadata and structured fields.

/// Log a record-store operation with its source and result size.
#[macro_export]
macro_rules! log_store_operation {
    ($operation:expr, $source:expr, $count:expr) => {
        tracing::debug!(
            target: "store",
            operation = %$operation,
            source = %$source,
            count = %$count,
            "Store operation"
        )
    };
}

/// Log an authentication or access-control event.
#[macro_export]
macro_rules! log_access_event {
    ($event:expr, $email:expr, $granted:expr) => {
        tracing::info!(
            target: "access",
            event = %$event,
            email = %$email,
            granted = $granted,
            "Access event"
        )
    };
}

/// Measure and log the duration of a block of code.
#[macro_export]
macro_rules! measure_duration {
    ($target:expr, $context:expr, $block:block) => {{
        let start = std::time::Instant::now();
        let result = $block;
        let duration = start.elapsed();
        tracing::debug!(
            target: $target,
            context = %$context,
            duration_ms = duration.as_secs_f64() * 1000.0,
            "Operation completed"
        );
        result
    }};
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_measure_duration_returns_block_value() {
        let value = measure_duration!("test", "addition", {
            2 + 2
        });
        assert_eq!(value, 4);
    }

    #[test]
    fn test_access_event_macro_expands() {
        log_access_event!("login", "ana@example.com", true);
    }

    #[test]
    fn test_store_operation_macro_expands() {
        log_store_operation!("load", "cache", 3usize);
    }
}
