//! # Observability & Tracing
//!
//! One-call setup for structured logging across an actor system.
//!
//! The subscriber uses the compact format and hides module targets — actor
//! log lines already carry an `entity_type` field, which reads better than
//! the crate path. Log levels come from `RUST_LOG`:
//!
//! ```bash
//! RUST_LOG=info cargo run      # workflow-level lines
//! RUST_LOG=debug cargo run     # full request payloads
//! ```
//!
//! Call [`setup_tracing`] once, from the binary entry point. Calling it twice
//! panics (the global subscriber can only be installed once), so libraries
//! and tests should never call it.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
