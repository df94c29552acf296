//! # MockStore
//!
//! An [`OrderStore`] answered from expectations instead of the network.
//!
//! Unlike the mirror mock, expectations are matched by operation and id rather than strictly
//! in queue order, so tests can run several remote calls concurrently. An expectation can be
//! gated on a [`Notify`] to hold its answer back until the test releases it, which is how
//! out-of-order acknowledgements are staged.
//!
//! ```rust
//! use order_admin::model::{OrderId, OrderStatus};
//! use order_admin::store::{MockStore, OrderStore, StoreCall};
//!
//! #[tokio::main]
//! async fn main() {
//!     let store = MockStore::new();
//!     store.expect_set_status("ord-1").return_ok(());
//!
//!     let id = OrderId::from("ord-1");
//!     store.set_status(&id, &OrderStatus::Success).await.unwrap();
//!
//!     assert_eq!(store.calls(), vec![StoreCall::SetStatus(id, OrderStatus::Success)]);
//!     store.verify();
//! }
//! ```

use crate::model::{Order, OrderId, OrderStatus};
use crate::store::{OrderStore, StoreError};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;

/// A remote call the mock received, in arrival order.
#[derive(Debug, Clone, PartialEq)]
pub enum StoreCall {
    Fetch,
    SetStatus(OrderId, OrderStatus),
    Delete(OrderId),
}

enum Kind {
    Fetch(Result<Vec<Order>, StoreError>),
    SetStatus(OrderId, Result<(), StoreError>),
    Delete(OrderId, Result<(), StoreError>),
}

struct Expectation {
    kind: Kind,
    gate: Option<Arc<Notify>>,
}

type Expectations = Arc<Mutex<Vec<Expectation>>>;

#[derive(Default)]
pub struct MockStore {
    expectations: Expectations,
    calls: Arc<Mutex<Vec<StoreCall>>>,
}

impl MockStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn expect_fetch(&self) -> StoreExpectation<Vec<Order>> {
        StoreExpectation::new(self.expectations.clone(), Box::new(Kind::Fetch))
    }

    pub fn expect_set_status(&self, id: impl Into<OrderId>) -> StoreExpectation<()> {
        let id = id.into();
        StoreExpectation::new(
            self.expectations.clone(),
            Box::new(move |response| Kind::SetStatus(id, response)),
        )
    }

    pub fn expect_delete(&self, id: impl Into<OrderId>) -> StoreExpectation<()> {
        let id = id.into();
        StoreExpectation::new(
            self.expectations.clone(),
            Box::new(move |response| Kind::Delete(id, response)),
        )
    }

    /// Every call received so far.
    pub fn calls(&self) -> Vec<StoreCall> {
        self.calls.lock().expect("call log poisoned").clone()
    }

    /// Panics if any expectation was never consumed.
    pub fn verify(&self) {
        let exps = self.expectations.lock().expect("expectation lock poisoned");
        if !exps.is_empty() {
            panic!("Not all store expectations were met. {} remaining", exps.len());
        }
    }

    fn record(&self, call: StoreCall) {
        self.calls.lock().expect("call log poisoned").push(call);
    }

    /// Removes the first expectation matching `call`.
    fn take(&self, call: &StoreCall) -> Expectation {
        let mut exps = self.expectations.lock().expect("expectation lock poisoned");
        let position = exps.iter().position(|exp| match (&exp.kind, call) {
            (Kind::Fetch(_), StoreCall::Fetch) => true,
            (Kind::SetStatus(expected, _), StoreCall::SetStatus(id, _)) => expected == id,
            (Kind::Delete(expected, _), StoreCall::Delete(id)) => expected == id,
            _ => false,
        });
        match position {
            Some(index) => exps.remove(index),
            None => panic!("Unexpected store call: {call:?}"),
        }
    }

    async fn answer(&self, call: StoreCall) -> Kind {
        self.record(call.clone());
        let expectation = self.take(&call);
        if let Some(gate) = expectation.gate {
            gate.notified().await;
        }
        expectation.kind
    }
}

#[async_trait]
impl OrderStore for MockStore {
    async fn fetch_orders(&self) -> Result<Vec<Order>, StoreError> {
        match self.answer(StoreCall::Fetch).await {
            Kind::Fetch(response) => response,
            _ => unreachable!("matched by kind"),
        }
    }

    async fn set_status(&self, id: &OrderId, status: &OrderStatus) -> Result<(), StoreError> {
        match self
            .answer(StoreCall::SetStatus(id.clone(), status.clone()))
            .await
        {
            Kind::SetStatus(_, response) => response,
            _ => unreachable!("matched by kind"),
        }
    }

    async fn delete_order(&self, id: &OrderId) -> Result<(), StoreError> {
        match self.answer(StoreCall::Delete(id.clone())).await {
            Kind::Delete(_, response) => response,
            _ => unreachable!("matched by kind"),
        }
    }
}

/// Builder that records what the mock answers for one expected call.
pub struct StoreExpectation<R> {
    expectations: Expectations,
    build: Box<dyn FnOnce(Result<R, StoreError>) -> Kind + Send>,
    gate: Option<Arc<Notify>>,
}

impl<R> StoreExpectation<R> {
    fn new(
        expectations: Expectations,
        build: Box<dyn FnOnce(Result<R, StoreError>) -> Kind + Send>,
    ) -> Self {
        Self {
            expectations,
            build,
            gate: None,
        }
    }

    /// Holds the answer until `gate` is notified.
    pub fn gated(mut self, gate: Arc<Notify>) -> Self {
        self.gate = Some(gate);
        self
    }

    pub fn return_ok(self, value: R) {
        self.push(Ok(value));
    }

    pub fn return_err(self, error: StoreError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<R, StoreError>) {
        let expectation = Expectation {
            kind: (self.build)(response),
            gate: self.gate,
        };
        self.expectations
            .lock()
            .expect("expectation lock poisoned")
            .push(expectation);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_matches_by_id_not_queue_order() {
        let store = MockStore::new();
        store.expect_delete("a").return_ok(());
        store.expect_delete("b").return_err(StoreError::Status {
            status: 500,
            body: "boom".into(),
        });

        assert!(store.delete_order(&OrderId::from("b")).await.is_err());
        assert!(store.delete_order(&OrderId::from("a")).await.is_ok());
        assert_eq!(
            store.calls(),
            vec![
                StoreCall::Delete(OrderId::from("b")),
                StoreCall::Delete(OrderId::from("a"))
            ]
        );
        store.verify();
    }

    #[tokio::test]
    async fn test_gated_answer_waits_for_release() {
        let store = Arc::new(MockStore::new());
        let gate = Arc::new(Notify::new());
        store.expect_fetch().gated(gate.clone()).return_ok(Vec::new());

        let pending = tokio::spawn({
            let store = store.clone();
            async move { store.fetch_orders().await }
        });
        tokio::task::yield_now().await;
        assert!(!pending.is_finished());

        gate.notify_one();
        assert!(pending.await.unwrap().unwrap().is_empty());
        store.verify();
    }

    #[tokio::test]
    #[should_panic(expected = "Not all store expectations were met")]
    async fn test_verify_reports_unmet() {
        let store = MockStore::new();
        store.expect_fetch().return_ok(Vec::new());
        store.verify();
    }
}
