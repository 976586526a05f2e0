//! Shared helper utilities for factory methods.

use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for generating unique snowflakes in tests.
static COUNTER: AtomicU64 = AtomicU64::new(1_000_000);

/// Gets the next unique snowflake for test data.
///
/// Values start well above the small literal IDs tests use directly, so the two
/// never collide.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}
