//! # Generic Messages
//!
//! This module defines the generic message types used for communication between
//! the `MirrorClient` and `MirrorActor`.

use crate::entity::MirrorEntity;
use crate::error::FrameworkError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Internal message type sent to the actor to request operations.
///
/// Every variant is one atomic state transition of the mirror. The actor handles messages
/// one at a time, so a `Replace` can never interleave with an `Update` halfway through.
///
/// - **Replace**: wholesale refresh from a successful remote fetch.
/// - **Snapshot / Filtered / Get**: reads. `Filtered` applies the current filter.
/// - **SetFilter**: changes the filter used by `Filtered`.
/// - **Update / Remove**: apply an acknowledged remote write.
/// - **Select / ClearSelection / Selected**: single-entity selection (detail view).
#[derive(Debug)]
pub enum MirrorRequest<T: MirrorEntity> {
    Replace {
        items: Vec<T>,
        respond_to: Response<usize>,
    },
    Snapshot {
        respond_to: Response<Vec<T>>,
    },
    Filtered {
        respond_to: Response<Vec<T>>,
    },
    SetFilter {
        filter: T::Filter,
        respond_to: Response<()>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    Update {
        id: T::Id,
        update: T::Update,
        respond_to: Response<T>,
    },
    Remove {
        id: T::Id,
        respond_to: Response<()>,
    },
    Select {
        id: T::Id,
        respond_to: Response<()>,
    },
    ClearSelection {
        respond_to: Response<()>,
    },
    Selected {
        respond_to: Response<Selection<T>>,
    },
}

/// Current selection state as seen by a reader.
#[derive(Debug, Clone, PartialEq)]
pub enum Selection<T: MirrorEntity> {
    /// Nothing selected; the detail view is hidden.
    None,
    /// An id is selected but no entity in the mirror has it.
    Missing(T::Id),
    /// An id is selected and resolves to this entity.
    Found(T),
}

impl<T: MirrorEntity> Selection<T> {
    /// Whether a selection is active, regardless of whether it resolved.
    pub fn is_active(&self) -> bool {
        !matches!(self, Selection::None)
    }

    pub fn entity(&self) -> Option<&T> {
        match self {
            Selection::Found(item) => Some(item),
            _ => None,
        }
    }
}
