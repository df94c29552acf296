//! Error types for the order board.

use crate::store::StoreError;
use thiserror::Error;

/// Errors returned by [`OrderBoard`](crate::board::OrderBoard) operations.
#[derive(Debug, Error)]
pub enum BoardError {
    /// The remote store rejected or failed the call. The mirror was not changed.
    #[error("Remote store error: {0}")]
    Store(#[from] StoreError),

    /// An error occurred while communicating with the mirror actor.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for BoardError {
    fn from(msg: String) -> Self {
        BoardError::ActorCommunicationError(msg)
    }
}
