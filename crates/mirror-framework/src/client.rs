//! # Generic Client
//!
//! This module defines the generic client for communicating with a mirror actor.

use crate::entity::MirrorEntity;
use crate::error::FrameworkError;
use crate::message::{MirrorRequest, Selection};
use tokio::sync::{mpsc, oneshot};

/// ## MirrorClient
///
/// The `MirrorClient<T>` provides a type‑safe, async API for interacting with a
/// `MirrorActor<T>`. It forwards requests over a Tokio mpsc channel and returns results via
/// oneshot channels.
///
/// * **Cloneable** – holds only a sender, so cloning is inexpensive.
/// * **Async API** – all methods resolve to `Result<…, FrameworkError>`.
#[derive(Clone)]
pub struct MirrorClient<T: MirrorEntity> {
    sender: mpsc::Sender<MirrorRequest<T>>,
}

impl<T: MirrorEntity> MirrorClient<T> {
    pub fn new(sender: mpsc::Sender<MirrorRequest<T>>) -> Self {
        Self { sender }
    }

    async fn request<R>(
        &self,
        build: impl FnOnce(oneshot::Sender<Result<R, FrameworkError>>) -> MirrorRequest<T>,
    ) -> Result<R, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    /// Replaces the whole mirror. Returns the number of entries kept.
    pub async fn replace(&self, items: Vec<T>) -> Result<usize, FrameworkError> {
        self.request(|respond_to| MirrorRequest::Replace { items, respond_to })
            .await
    }

    pub async fn snapshot(&self) -> Result<Vec<T>, FrameworkError> {
        self.request(|respond_to| MirrorRequest::Snapshot { respond_to })
            .await
    }

    /// Entries matching the current filter, in mirror order.
    pub async fn filtered(&self) -> Result<Vec<T>, FrameworkError> {
        self.request(|respond_to| MirrorRequest::Filtered { respond_to })
            .await
    }

    pub async fn set_filter(&self, filter: T::Filter) -> Result<(), FrameworkError> {
        self.request(|respond_to| MirrorRequest::SetFilter { filter, respond_to })
            .await
    }

    pub async fn get(&self, id: T::Id) -> Result<Option<T>, FrameworkError> {
        self.request(|respond_to| MirrorRequest::Get { id, respond_to })
            .await
    }

    pub async fn update(&self, id: T::Id, update: T::Update) -> Result<T, FrameworkError> {
        self.request(|respond_to| MirrorRequest::Update {
            id,
            update,
            respond_to,
        })
        .await
    }

    pub async fn remove(&self, id: T::Id) -> Result<(), FrameworkError> {
        self.request(|respond_to| MirrorRequest::Remove { id, respond_to })
            .await
    }

    pub async fn select(&self, id: T::Id) -> Result<(), FrameworkError> {
        self.request(|respond_to| MirrorRequest::Select { id, respond_to })
            .await
    }

    pub async fn clear_selection(&self) -> Result<(), FrameworkError> {
        self.request(|respond_to| MirrorRequest::ClearSelection { respond_to })
            .await
    }

    pub async fn selected(&self) -> Result<Selection<T>, FrameworkError> {
        self.request(|respond_to| MirrorRequest::Selected { respond_to })
            .await
    }
}
