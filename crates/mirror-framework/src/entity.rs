//! # MirrorEntity Trait
//!
//! The `MirrorEntity` trait defines the contract that every mirrored document type must
//! implement to be held by the generic `MirrorActor`. It specifies associated types for IDs,
//! in-place updates, the filter used to derive views, and errors.
//!
//! # Architecture Note
//! The actor never talks to the remote system that owns the documents. Callers perform the
//! remote write first and only then tell the actor to apply the acknowledged change, so the
//! trait only describes *local* behaviour:
//!
//! - [`MirrorEntity::id`] - identity used for lookups, updates and removals
//! - [`MirrorEntity::matches`] - membership test for the derived (filtered) view
//! - [`MirrorEntity::apply`] - in-place mutation with an acknowledged update
//!
//! We use "Associated Types" (type Id, type Update, etc.) to enforce type safety.
//! An `Order` mirror only accepts `OrderUpdate` payloads, and you can't accidentally send it
//! an update meant for a different document type.

use std::fmt::{Debug, Display};

/// Trait that any mirrored document must implement to be managed by `MirrorActor`.
///
/// # Ordering
/// Entities are kept in the order they were supplied to [`Replace`](crate::MirrorRequest::Replace).
/// `apply` must never change [`MirrorEntity::id`]; the actor relies on it for lookups.
pub trait MirrorEntity: Clone + Send + Sync + 'static {
    /// The unique identifier for this entity (e.g., the remote document id).
    type Id: Eq + Clone + Send + Sync + Display + Debug;

    /// An acknowledged change to apply to one entity.
    type Update: Send + Sync + Debug;

    /// Selector for the derived view. `Default` must select everything.
    type Filter: Default + Clone + Send + Sync + Debug;

    /// The error type for this entity.
    /// Must implement std::error::Error for proper error propagation.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Identity of this entity within the mirror.
    fn id(&self) -> &Self::Id;

    /// Whether this entity belongs in the view selected by `filter`.
    fn matches(&self, filter: &Self::Filter) -> bool;

    /// Apply an acknowledged update in place.
    fn apply(&mut self, update: Self::Update) -> Result<(), Self::Error>;
}
