//! # Mock Framework & Testing Guide
//!
//! The `MockMirror<T>` type hands out a real `MirrorClient<T>` whose requests are answered from
//! a queue of expectations instead of a live `MirrorActor`. It lets you inject failures that
//! are hard to provoke with a real actor (a closed channel, an id that vanished between a
//! remote acknowledgement and the local apply).
//!
//! ## When to use Mocks vs Real Actors
//!
//! | Feature | MockMirror | Real Actor |
//! |---------|------------|------------|
//! | **State** | No real state (expectations) | Real ordered mirror |
//! | **Use Case** | Testing logic *around* the client | Testing the mirror itself or a full flow |
//! | **Error Injection** | Easy (`return_err`) | Hard (requires specific state) |
//!
//! ## Testing Failure Scenarios
//!
//! ```rust
//! use mirror_framework::mock::MockMirror;
//! use mirror_framework::{FrameworkError, MirrorEntity};
//!
//! #[derive(Clone, Debug)] struct Parcel { id: u32 }
//! #[derive(Debug)] struct ParcelUpdate;
//! #[derive(Debug, thiserror::Error)] #[error("Err")] struct ParcelError;
//!
//! impl MirrorEntity for Parcel {
//!     type Id = u32; type Update = ParcelUpdate; type Filter = (); type Error = ParcelError;
//!     fn id(&self) -> &u32 { &self.id }
//!     fn matches(&self, _: &()) -> bool { true }
//!     fn apply(&mut self, _: ParcelUpdate) -> Result<(), ParcelError> { Ok(()) }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockMirror::<Parcel>::new();
//!     let client = mock.client();
//!
//!     // Simulate a mirror that went away
//!     mock.expect_remove(7).return_err(FrameworkError::ActorClosed);
//!
//!     let result = client.remove(7).await;
//!     assert!(matches!(result, Err(FrameworkError::ActorClosed)));
//!     mock.verify();
//! }
//! ```
//!
//! ## Mocking Utilities
//!
//! Use [`create_mock_client`] to get a client and a receiver, or use the fluent [`MockMirror`] API.

use crate::client::MirrorClient;
use crate::entity::MirrorEntity;
use crate::error::FrameworkError;
use crate::message::MirrorRequest;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::{mpsc, oneshot};

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// Represents an expected request to the mock mirror.
enum Expectation<T: MirrorEntity> {
    Replace {
        response: Result<usize, FrameworkError>,
    },
    Filtered {
        response: Result<Vec<T>, FrameworkError>,
    },
    Update {
        id: T::Id,
        response: Result<T, FrameworkError>,
    },
    Remove {
        id: T::Id,
        response: Result<(), FrameworkError>,
    },
}

type Expectations<T> = Arc<Mutex<VecDeque<Expectation<T>>>>;

/// A mock mirror with expectation tracking for fluent testing.
///
/// Expectations are consumed in order. A request that does not match the next expectation
/// panics inside the mock task, which the caller observes as `FrameworkError::ActorDropped`
/// and [`MockMirror::verify`] reports as unmet.
pub struct MockMirror<T: MirrorEntity> {
    client: MirrorClient<T>,
    expectations: Expectations<T>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: MirrorEntity> Default for MockMirror<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: MirrorEntity> MockMirror<T> {
    /// Creates a new mock mirror with no expectations.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<MirrorRequest<T>>(100);
        let expectations: Expectations<T> = Arc::new(Mutex::new(VecDeque::new()));
        let expectations_clone = expectations.clone();

        // Spawn background task to handle requests
        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = expectations_clone
                    .lock()
                    .expect("expectation lock poisoned")
                    .pop_front();

                match (request, expectation) {
                    (MirrorRequest::Replace { respond_to, .. }, Some(Expectation::Replace { response })) => {
                        let _ = respond_to.send(response);
                    }
                    (MirrorRequest::Filtered { respond_to }, Some(Expectation::Filtered { response })) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        MirrorRequest::Update { id, respond_to, .. },
                        Some(Expectation::Update { id: expected, response }),
                    ) => {
                        assert_eq!(id, expected, "update for unexpected id");
                        let _ = respond_to.send(response);
                    }
                    (
                        MirrorRequest::Remove { id, respond_to },
                        Some(Expectation::Remove { id: expected, response }),
                    ) => {
                        assert_eq!(id, expected, "remove for unexpected id");
                        let _ = respond_to.send(response);
                    }
                    _ => {
                        panic!("Unexpected request or expectation mismatch");
                    }
                }
            }
        });

        Self {
            client: MirrorClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> MirrorClient<T> {
        self.client.clone()
    }

    /// Expects a `replace` operation.
    pub fn expect_replace(&mut self) -> ExpectationBuilder<T, usize> {
        ExpectationBuilder::new(self.expectations.clone(), |response| {
            Expectation::Replace { response }
        })
    }

    /// Expects a `filtered` read.
    pub fn expect_filtered(&mut self) -> ExpectationBuilder<T, Vec<T>> {
        ExpectationBuilder::new(self.expectations.clone(), |response| {
            Expectation::Filtered { response }
        })
    }

    /// Expects an `update` for `id`.
    pub fn expect_update(&mut self, id: T::Id) -> ExpectationBuilder<T, T> {
        ExpectationBuilder::new(self.expectations.clone(), move |response| {
            Expectation::Update { id, response }
        })
    }

    /// Expects a `remove` for `id`.
    pub fn expect_remove(&mut self, id: T::Id) -> ExpectationBuilder<T, ()> {
        ExpectationBuilder::new(self.expectations.clone(), move |response| {
            Expectation::Remove { id, response }
        })
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let exps = self.expectations.lock().expect("expectation lock poisoned");
        if !exps.is_empty() {
            panic!("Not all expectations were met. {} remaining", exps.len());
        }
    }
}

/// Builder that records what the mock answers for one expected request.
pub struct ExpectationBuilder<T: MirrorEntity, R> {
    expectations: Expectations<T>,
    build: Box<dyn FnOnce(Result<R, FrameworkError>) -> Expectation<T> + Send>,
}

impl<T: MirrorEntity, R> ExpectationBuilder<T, R> {
    fn new(
        expectations: Expectations<T>,
        build: impl FnOnce(Result<R, FrameworkError>) -> Expectation<T> + Send + 'static,
    ) -> Self {
        Self {
            expectations,
            build: Box::new(build),
        }
    }

    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, value: R) {
        self.push(Ok(value));
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: FrameworkError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<R, FrameworkError>) {
        let expectation = (self.build)(response);
        self.expectations
            .lock()
            .expect("expectation lock poisoned")
            .push_back(expectation);
    }
}

// =============================================================================
// CHANNEL HELPERS
// =============================================================================

/// Creates a mock client and a receiver for asserting requests.
///
/// # Testing Strategy
/// Instead of spinning up a `MirrorActor`, the client sends messages to a channel we control
/// (`receiver`). We inspect what arrives and answer through the enclosed responder, which
/// lets a test pause the "actor" between request and reply.
///
/// **Note**: Consider using [`MockMirror`] for a more fluent API.
pub fn create_mock_client<T: MirrorEntity>(
    buffer_size: usize,
) -> (MirrorClient<T>, mpsc::Receiver<MirrorRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (MirrorClient::new(sender), receiver)
}

/// Helper to verify that the next message is a Replace request
pub async fn expect_replace<T: MirrorEntity>(
    receiver: &mut mpsc::Receiver<MirrorRequest<T>>,
) -> Option<(Vec<T>, oneshot::Sender<Result<usize, FrameworkError>>)> {
    match receiver.recv().await {
        Some(MirrorRequest::Replace { items, respond_to }) => Some((items, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is an Update request
pub async fn expect_update<T: MirrorEntity>(
    receiver: &mut mpsc::Receiver<MirrorRequest<T>>,
) -> Option<(T::Id, T::Update, oneshot::Sender<Result<T, FrameworkError>>)> {
    match receiver.recv().await {
        Some(MirrorRequest::Update {
            id,
            update,
            respond_to,
        }) => Some((id, update, respond_to)),
        _ => None,
    }
}
