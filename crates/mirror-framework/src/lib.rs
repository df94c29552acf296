//! # Mirror Framework
//!
//! This crate provides the building blocks for keeping a **local mirror** of documents owned by
//! a remote system, on top of the **Actor Model**. One actor owns the mirror; every change to
//! it is a message; every reader gets a fresh copy.
//!
//! ## Why an actor for a local cache?
//!
//! The mirror is written from several places at once: a refresh that replaces everything,
//! and acknowledgements of remote writes that may complete in any order. Routing all of them
//! through one task means:
//!
//! - each transition (replace, update one entry, remove one entry) is applied atomically
//! - readers never observe a half-applied refresh
//! - no `Mutex` around the mirror, and handles are cheap to clone across tasks
//!
//! **Further Reading**:
//! - [Actors in Rust](https://ryhl.io/blog/actors-with-tokio/) - Practical guide to implementing actors with Tokio
//!
//! ## Architecture Overview
//!
//! 1. **Entity Layer** ([`MirrorEntity`]) - identity, filter membership, in-place updates
//! 2. **Runtime Layer** ([`MirrorActor`]) - message processing and the ordered mirror
//! 3. **Interface Layer** ([`MirrorClient`], [`MirrorAccess`]) - type-safe communication
//!
//! ## Write Discipline
//!
//! The actor never performs remote I/O. The owner of the remote connection writes first and
//! forwards the change only after the remote side acknowledged it:
//!
//! ```rust,ignore
//! store.set_status(&id, &status).await?;               // remote first
//! mirror.update(id, OrderUpdate::Status(status)).await?; // then the mirror
//! ```
//!
//! A failed remote write therefore never reaches the mirror, and a failed local `apply` is
//! discarded by the actor (it works on a copy).
//!
//! ## Testing
//!
//! [`mock::MockMirror`] answers a real [`MirrorClient`] from a queue of expectations, so code
//! built around a client can be tested without a running actor. See the [`mock`] module.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod tracing;

// Re-export core types for convenience
pub use actor::MirrorActor;
pub use client::MirrorClient;
pub use client_trait::MirrorAccess;
pub use entity::MirrorEntity;
pub use error::FrameworkError;
pub use message::{MirrorRequest, Response, Selection};
