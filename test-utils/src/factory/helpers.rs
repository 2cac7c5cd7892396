//! Shared helper utilities for factory methods.

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// Provides monotonically increasing values for use in generating unique
/// test identifiers across all factories.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Parses a fixed ISO-8601 local date-time for use as a factory default.
///
/// # Panics
/// Panics if `value` is not a valid `YYYY-MM-DDTHH:MM:SS` string; only ever
/// called with literals.
pub fn date_time(value: &str) -> chrono::NaiveDateTime {
    chrono::NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S")
        .expect("factory date-time literal must be valid")
}
