//! Test Module
//!
//! Cross-component test suite for the OmniStudio router brain.
//!
//! ## Test Categories
//! - `router_tests`: end-to-end classification scenarios, scoring
//!   properties, model-hint extraction, and routing policy


/// Install a test subscriber so classifier debug events show up when the
/// suite runs with `RUST_LOG` set. Safe to call from any test; repeated
/// calls are no-ops.
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
