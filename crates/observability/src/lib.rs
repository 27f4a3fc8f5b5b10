//! Tracing/logging setup shared by tests and any future binary.

/// Initialize process-wide observability (tracing/logging).
///
/// Safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init();
}

/// Tracing configuration (filter, fmt layer).
pub mod tracing;
