//! Tracing and logging (shared setup).
//!
//! The purchase rulebook itself never logs; structured logging lives in the
//! service and API layers, configured here once per process.

/// Initialize process-wide observability (tracing/logging).
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init();
}

/// Tracing configuration (filters, layers).
pub mod tracing;
