//! # Order Board
//!
//! The view-model behind the admin dashboard. It owns nothing itself: orders live in a
//! [`MirrorActor`], and every write goes to the remote [`OrderStore`] first. The mirror is
//! changed only after the store acknowledges, in a single actor message, so a failed or
//! slow remote call never leaves the mirror half-updated.

pub mod entity;
pub mod error;
pub mod view;

pub use error::BoardError;
pub use view::{ItemLine, OrderDetail, OrderRow};

use crate::auth::Session;
use crate::model::{Order, OrderId, OrderStatus, OrderUpdate, StatusFilter};
use crate::notify::{Confirmation, Notice, Notifier};
use crate::store::OrderStore;
use async_trait::async_trait;
use mirror_framework::{FrameworkError, MirrorAccess, MirrorActor, MirrorClient, Selection};
use std::sync::Arc;
use tracing::{debug, error, info, instrument, warn};

pub const DELETE_PROMPT: &str = "Are you sure you want to delete this order?";
pub const STATUS_FAILED: &str = "Something went wrong while updating the status.";
pub const DELETE_SUCCEEDED: &str = "Order deleted successfully!";
pub const DELETE_FAILED: &str = "Something went wrong while deleting.";

/// Creates the order mirror actor and its client.
pub fn new_mirror() -> (MirrorActor<Order>, MirrorClient<Order>) {
    MirrorActor::new(32)
}

/// Result of [`OrderBoard::delete_order`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The operator declined; nothing was sent.
    Declined,
    Deleted,
}

/// Handle for dashboard operations. Cheap to clone; all clones share one mirror.
#[derive(Clone)]
pub struct OrderBoard {
    mirror: MirrorClient<Order>,
    store: Arc<dyn OrderStore>,
    notifier: Arc<dyn Notifier>,
    confirmation: Arc<dyn Confirmation>,
    session: Session,
}

impl OrderBoard {
    pub fn new(
        session: Session,
        mirror: MirrorClient<Order>,
        store: Arc<dyn OrderStore>,
        notifier: Arc<dyn Notifier>,
        confirmation: Arc<dyn Confirmation>,
    ) -> Self {
        Self {
            mirror,
            store,
            notifier,
            confirmation,
            session,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Fetches every order and replaces the mirror with the result.
    ///
    /// On failure the previous mirror is kept. Returns the number of orders now mirrored.
    #[instrument(skip(self), fields(operator = %self.session.operator()))]
    pub async fn load(&self) -> Result<usize, BoardError> {
        let orders = match self.store.fetch_orders().await {
            Ok(orders) => orders,
            Err(e) => {
                error!(error = %e, "Failed to load orders");
                return Err(e.into());
            }
        };
        let size = self.mirror.replace(orders).await.map_err(Self::map_error)?;
        info!(size, "Orders loaded");
        Ok(size)
    }

    /// Selects which orders [`filtered_orders`](Self::filtered_orders) returns.
    /// `"All"` disables filtering.
    #[instrument(skip(self, filter))]
    pub async fn set_filter(&self, filter: impl Into<StatusFilter>) -> Result<(), BoardError> {
        let filter = filter.into();
        debug!(?filter, "Setting filter");
        self.mirror.set_filter(filter).await.map_err(Self::map_error)
    }

    /// Mirrored orders admitted by the current filter, in mirror order.
    pub async fn filtered_orders(&self) -> Result<Vec<Order>, BoardError> {
        self.mirror.filtered().await.map_err(Self::map_error)
    }

    pub async fn rows(&self) -> Result<Vec<OrderRow>, BoardError> {
        Ok(self
            .filtered_orders()
            .await?
            .iter()
            .map(OrderRow::from)
            .collect())
    }

    /// Sets the status remotely, then on the mirrored order.
    #[instrument(skip(self, id, status), fields(id = %id, status = %status))]
    pub async fn change_status(&self, id: &OrderId, status: OrderStatus) -> Result<(), BoardError> {
        if let Err(e) = self.store.set_status(id, &status).await {
            error!(error = %e, "Status update failed");
            self.notifier.notify(Notice::error(STATUS_FAILED));
            return Err(e.into());
        }

        match self
            .mirror
            .update(id.clone(), OrderUpdate::Status(status.clone()))
            .await
        {
            Ok(_) => info!("Status updated"),
            Err(FrameworkError::NotFound(_)) => {
                warn!("Acknowledged order is no longer mirrored");
            }
            Err(e) => return Err(Self::map_error(e)),
        }
        self.notifier
            .notify(Notice::success(format!("Status updated to {status}")));
        Ok(())
    }

    /// Asks for confirmation, deletes remotely, then drops the order from the mirror.
    #[instrument(skip(self, id), fields(id = %id))]
    pub async fn delete_order(&self, id: &OrderId) -> Result<DeleteOutcome, BoardError> {
        if !self.confirmation.confirm(DELETE_PROMPT).await {
            debug!("Delete declined");
            return Ok(DeleteOutcome::Declined);
        }

        if let Err(e) = self.store.delete_order(id).await {
            error!(error = %e, "Delete failed");
            self.notifier.notify(Notice::error(DELETE_FAILED));
            return Err(e.into());
        }

        match self.mirror.remove(id.clone()).await {
            Ok(()) => info!("Order deleted"),
            Err(FrameworkError::NotFound(_)) => {
                warn!("Acknowledged order is no longer mirrored");
            }
            Err(e) => return Err(Self::map_error(e)),
        }
        self.notifier.notify(Notice::success(DELETE_SUCCEEDED));
        Ok(DeleteOutcome::Deleted)
    }

    /// Opens the detail view for `id`. An id that is not mirrored is accepted and shows nothing.
    #[instrument(skip(self, id), fields(id = %id))]
    pub async fn select_for_detail(&self, id: &OrderId) -> Result<(), BoardError> {
        self.mirror.select(id.clone()).await.map_err(Self::map_error)
    }

    pub async fn clear_selection(&self) -> Result<(), BoardError> {
        self.mirror.clear_selection().await.map_err(Self::map_error)
    }

    /// Detail of the selected order, if one is selected and still mirrored.
    pub async fn detail(&self) -> Result<Option<OrderDetail>, BoardError> {
        let selection = self.mirror.selected().await.map_err(Self::map_error)?;
        Ok(selection.entity().map(OrderDetail::from))
    }

    pub async fn detail_visible(&self) -> Result<bool, BoardError> {
        let selection: Selection<Order> =
            self.mirror.selected().await.map_err(Self::map_error)?;
        Ok(selection.is_active())
    }

    /// Every mirrored order, ignoring the filter.
    pub async fn orders(&self) -> Result<Vec<Order>, BoardError> {
        self.snapshot().await
    }
}

#[async_trait]
impl MirrorAccess<Order> for OrderBoard {
    type Error = BoardError;

    fn inner(&self) -> &MirrorClient<Order> {
        &self.mirror
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        BoardError::ActorCommunicationError(e.to_string())
    }
}
