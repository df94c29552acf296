//! # Order Admin
//!
//! Back-office view-model for a food-ordering storefront. Orders live in a hosted document
//! store; this crate keeps a local mirror of them, lets an operator filter, inspect, re-status
//! and delete them, and keeps the mirror consistent with the store.
//!
//! ## Components
//!
//! - **[model]**: order documents as stored remotely ([`Order`](model::Order),
//!   [`OrderStatus`](model::OrderStatus), [`LineItem`](model::LineItem)).
//! - **[board]**: [`OrderBoard`](board::OrderBoard), the dashboard operations. Backed by a
//!   [`MirrorActor`](mirror_framework::MirrorActor).
//! - **[store]**: the [`OrderStore`](store::OrderStore) seam, the HTTP
//!   [`SanityStore`](store::SanityStore) and the [`MockStore`](store::MockStore) test double.
//! - **[auth]**: [`Session`](auth::Session), obtained only by signing in.
//! - **[notify]**: non-blocking notices and delete confirmation.
//! - **[config]**: `config.toml` settings and environment-only secrets.
//! - **[lifecycle]**: [`AdminSystem`](lifecycle::AdminSystem), start and shutdown.
//!
//! ## Write discipline
//!
//! Every change goes to the store first. The mirror is updated only after the store
//! acknowledges, so the mirror never shows a change the store did not accept.

pub mod auth;
pub mod board;
pub mod config;
pub mod lifecycle;
pub mod model;
pub mod notify;
pub mod store;
