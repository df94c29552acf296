use thiserror::Error;

/// Failures talking to the remote order store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Store responded with status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("Failed to decode store response: {0}")]
    Decode(#[from] serde_json::Error),
}
