//! # Remote Order Store
//!
//! The hosted document store that owns the orders. The board talks to it through the
//! [`OrderStore`] trait so tests can substitute [`MockStore`].

pub mod error;
pub mod mock;
pub mod sanity;

pub use error::StoreError;
pub use mock::{MockStore, StoreCall};
pub use sanity::SanityStore;

use crate::model::{Order, OrderId, OrderStatus};
use async_trait::async_trait;

/// Remote operations the admin panel performs. Each call is one round trip; none retry.
#[async_trait]
pub trait OrderStore: Send + Sync {
    /// Every order document, items dereferenced.
    async fn fetch_orders(&self) -> Result<Vec<Order>, StoreError>;

    /// Sets `status` on one document and touches nothing else.
    async fn set_status(&self, id: &OrderId, status: &OrderStatus) -> Result<(), StoreError>;

    async fn delete_order(&self, id: &OrderId) -> Result<(), StoreError>;
}
