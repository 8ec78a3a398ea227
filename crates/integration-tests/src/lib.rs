//! Integration tests for Microtek.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p microtek-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `cart_flow` - Full aggregator flows: composing, committing, and
//!   mutating builds with the cached total checked against recomputation
//! - `snapshot_recovery` - Hydration across sessions, corrupt-snapshot
//!   fallback, and the persisted JSON layout

/// Initialize tracing for test output.
///
/// Safe to call from every test; only the first call installs the
/// subscriber.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_test_writer()
        .try_init();
}
