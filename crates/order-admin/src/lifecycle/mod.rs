//! # System Lifecycle
//!
//! Starting and stopping the order mirror.
//!
//! [`AdminSystem::start`] spawns the mirror actor and wires it, together with the store and the
//! operator-facing capabilities, into an [`OrderBoard`](crate::board::OrderBoard).
//! [`AdminSystem::shutdown`] drops the board, which closes the actor's channel, then awaits the
//! actor task.
//!
//! Clones of the board handed out before shutdown keep the channel open, so drop them first:
//!
//! ```rust,ignore
//! let system = AdminSystem::start(session, store, notifier, confirmation);
//! system.board.load().await?;
//! system.shutdown().await?;
//! ```

pub mod admin_system;

pub use admin_system::*;
