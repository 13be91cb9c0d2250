//! Test logging.
//!
//! Reads the filter from `TEST_LOG`, then `RUST_LOG`, defaulting to `warn`
//! so test output stays quiet:
//!
//! ```bash
//! TEST_LOG=rust_citadels=debug cargo test --test match_flow_tests -- --nocapture
//! ```

use std::sync::Once;

use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Install the test subscriber. Safe to call from every test.
pub fn init() {
    INIT.call_once(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .unwrap_or_else(|_| "warn".to_string());

        let _ = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::new(filter))
            .with_test_writer()
            .try_init();
    });
}
