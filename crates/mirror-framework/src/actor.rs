//! # Generic Mirror Actor
//!
//! This module defines the `MirrorActor`, the component that owns a local copy of remote
//! documents. It implements the "Server" side of the Actor Model, processing messages
//! sequentially and ensuring exclusive access to the mirror.

use crate::client::MirrorClient;
use crate::entity::MirrorEntity;
use crate::error::FrameworkError;
use crate::message::{MirrorRequest, Selection};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that owns an ordered mirror of entities.
///
/// # Architecture Note
/// This struct is the "Server" half of the actor. It owns the state (`entries`, `filter`,
/// `selected`) and the receiver end of the channel.
///
/// **Concurrency Model**:
/// Each message is one state transition, processed to completion before the next one is
/// received. Callers may have several remote writes in flight at once; their
/// acknowledgements arrive here as independent `Update`/`Remove` messages and are applied
/// in arrival order. No `Mutex` is needed around the mirror.
///
/// # Usage Pattern
///
/// ```rust
/// use mirror_framework::{MirrorActor, MirrorEntity};
///
/// #[derive(Clone, Debug, PartialEq)]
/// struct Note { id: String, pinned: bool }
///
/// #[derive(Debug)] struct Pin(bool);
/// #[derive(Debug, thiserror::Error)] #[error("note error")] struct NoteError;
///
/// impl MirrorEntity for Note {
///     type Id = String;
///     type Update = Pin;
///     type Filter = Option<bool>;
///     type Error = NoteError;
///
///     fn id(&self) -> &String { &self.id }
///     fn matches(&self, filter: &Option<bool>) -> bool {
///         filter.map_or(true, |pinned| self.pinned == pinned)
///     }
///     fn apply(&mut self, update: Pin) -> Result<(), NoteError> {
///         self.pinned = update.0;
///         Ok(())
///     }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, client) = MirrorActor::<Note>::new(10);
///     tokio::spawn(actor.run());
///
///     client.replace(vec![Note { id: "a".into(), pinned: false }]).await.unwrap();
///     client.update("a".into(), Pin(true)).await.unwrap();
///     client.set_filter(Some(true)).await.unwrap();
///     assert_eq!(client.filtered().await.unwrap().len(), 1);
/// }
/// ```
///
/// ## Operations
///
/// * **Replace**: drops the previous mirror and stores the new items in order. A repeated id
///   keeps its first occurrence.
/// * **Update**: applies the update to a *clone* of the entry and swaps it in only when
///   `apply` succeeds, so a failed update leaves the mirror untouched. Position is kept.
/// * **Remove**: deletes the entry, keeping the relative order of the others.
/// * **Filtered**: returns a fresh vector of the entries matching the current filter.
pub struct MirrorActor<T: MirrorEntity> {
    receiver: mpsc::Receiver<MirrorRequest<T>>,
    entries: Vec<T>,
    filter: T::Filter,
    selected: Option<T::Id>,
}

impl<T: MirrorEntity> MirrorActor<T> {
    /// Creates a new `MirrorActor` and its associated `MirrorClient`.
    ///
    /// # Arguments
    ///
    /// * `buffer_size` - The capacity of the MPSC channel. If the channel is full,
    ///   calls to the client will wait until there is space.
    pub fn new(buffer_size: usize) -> (Self, MirrorClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            entries: Vec::new(),
            filter: T::Filter::default(),
            selected: None,
        };
        let client = MirrorClient::new(sender);
        (actor, client)
    }

    fn position(&self, id: &T::Id) -> Option<usize> {
        self.entries.iter().position(|item| item.id() == id)
    }

    fn filtered(&self) -> Vec<T> {
        self.entries
            .iter()
            .filter(|item| item.matches(&self.filter))
            .cloned()
            .collect()
    }

    fn selection(&self) -> Selection<T> {
        match &self.selected {
            None => Selection::None,
            Some(id) => match self.position(id) {
                Some(index) => Selection::Found(self.entries[index].clone()),
                None => Selection::Missing(id.clone()),
            },
        }
    }

    /// Runs the actor's event loop, processing messages until the channel closes.
    pub async fn run(mut self) {
        // Extract just the type name (e.g., "Order" instead of "order_admin::model::order::Order")
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                MirrorRequest::Replace { items, respond_to } => {
                    let received = items.len();
                    let mut entries: Vec<T> = Vec::with_capacity(received);
                    for item in items {
                        if entries.iter().any(|kept| kept.id() == item.id()) {
                            warn!(entity_type, id = %item.id(), "Duplicate id dropped");
                            continue;
                        }
                        entries.push(item);
                    }
                    self.entries = entries;
                    info!(entity_type, received, size = self.entries.len(), "Replaced");
                    let _ = respond_to.send(Ok(self.entries.len()));
                }
                MirrorRequest::Snapshot { respond_to } => {
                    debug!(entity_type, size = self.entries.len(), "Snapshot");
                    let _ = respond_to.send(Ok(self.entries.clone()));
                }
                MirrorRequest::Filtered { respond_to } => {
                    let view = self.filtered();
                    debug!(entity_type, filter = ?self.filter, matched = view.len(), "Filtered");
                    let _ = respond_to.send(Ok(view));
                }
                MirrorRequest::SetFilter { filter, respond_to } => {
                    debug!(entity_type, ?filter, "SetFilter");
                    self.filter = filter;
                    let _ = respond_to.send(Ok(()));
                }
                MirrorRequest::Get { id, respond_to } => {
                    let item = self.position(&id).map(|index| self.entries[index].clone());
                    let found = item.is_some();
                    debug!(entity_type, %id, found, "Get");
                    let _ = respond_to.send(Ok(item));
                }
                MirrorRequest::Update {
                    id,
                    update,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?update, "Update");
                    if let Some(index) = self.position(&id) {
                        let mut item = self.entries[index].clone();
                        if let Err(e) = item.apply(update) {
                            warn!(entity_type, %id, error = %e, "Update failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                            continue;
                        }
                        self.entries[index] = item.clone();
                        info!(entity_type, %id, "Updated");
                        let _ = respond_to.send(Ok(item));
                    } else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                    }
                }
                MirrorRequest::Remove { id, respond_to } => {
                    debug!(entity_type, %id, "Remove");
                    if let Some(index) = self.position(&id) {
                        self.entries.remove(index);
                        info!(entity_type, %id, size = self.entries.len(), "Removed");
                        let _ = respond_to.send(Ok(()));
                    } else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                    }
                }
                MirrorRequest::Select { id, respond_to } => {
                    let found = self.position(&id).is_some();
                    debug!(entity_type, %id, found, "Select");
                    self.selected = Some(id);
                    let _ = respond_to.send(Ok(()));
                }
                MirrorRequest::ClearSelection { respond_to } => {
                    debug!(entity_type, "ClearSelection");
                    self.selected = None;
                    let _ = respond_to.send(Ok(()));
                }
                MirrorRequest::Selected { respond_to } => {
                    let _ = respond_to.send(Ok(self.selection()));
                }
            }
        }

        info!(entity_type, size = self.entries.len(), "Shutdown");
    }
}
