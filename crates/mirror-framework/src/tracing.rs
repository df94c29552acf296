//! # Observability & Tracing
//!
//! The [`setup_tracing`] function initializes structured logging with the `tracing` crate.
//!
//! ## Configuration
//!
//! The subscriber uses a compact format that hides the crate/module prefix
//! (`with_target(false)`); mirror events carry an `entity_type` field instead.
//! Log levels come from the `RUST_LOG` environment variable.
//!
//! ## What Gets Traced
//!
//! - **Actor lifecycle**: startup and shutdown with the final mirror size
//! - **Mirror transitions**: Replace, Update, Remove, Select (ids and sizes as fields)
//! - **Reads**: Snapshot, Filtered, Get at `debug`
//! - **Failures**: unknown ids and rejected updates at `warn`
//!
//! ## Usage Examples
//!
//! ```bash
//! # Compact logs
//! RUST_LOG=info cargo run -p order-admin -- admin@example.com secret
//!
//! # Show filters, payloads and read traffic
//! RUST_LOG=debug cargo run -p order-admin -- admin@example.com secret dispatch
//!
//! # Only the remote store client
//! RUST_LOG=order_admin::store=debug cargo run -p order-admin -- admin@example.com secret
//! ```
//!
//! With `RUST_LOG=info` a load followed by a status change reads:
//!
//! ```text
//! INFO Actor started entity_type="Order"
//! INFO Replaced entity_type="Order" received=2 size=2
//! INFO load{operator=ops@example.com}: Orders loaded size=2
//! INFO Updated entity_type="Order" id=ord-1
//! INFO change_status{id=ord-1 status=success}: Status updated
//! ```

/// Initializes the tracing subscriber for the whole process.
///
/// Call once, at the start of `main`.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // Don't show module paths - we use entity_type instead
        .compact()
        .init();
}
