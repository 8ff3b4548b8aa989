//! # Scripted gateway for tests
//!
//! `MockGateway` answers each call from a FIFO queue of expectations and records every
//! call it receives. It is cheap to clone; clones share the queue, so a test keeps one
//! handle for `verify()` and hands another to the dashboard.
//!
//! ```rust,ignore
//! let gateway = MockGateway::new();
//! gateway.expect_create().return_err("Server unavailable");
//! gateway.expect_delete().echo();
//!
//! let system = DashboardSystem::start(&config, products, Arc::new(gateway.clone()));
//! // ...
//! gateway.verify();
//! ```
//!
//! A call that does not match the next expectation is rejected with an
//! `"Unexpected ..."` message, and `verify()` then fails.

use super::{GatewayError, PersistenceGateway, ProductUpdated};
use crate::model::{Product, ProductDraft, ProductId};
use async_trait::async_trait;
use chrono::Utc;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// A call received by the mock, with its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GatewayCall {
    Create(ProductDraft),
    Update(ProductId, ProductDraft),
    Delete(ProductId),
    DeleteMany(Vec<ProductId>),
}

enum Reply<T> {
    /// Succeed with a value derived from the call's arguments.
    Echo,
    Value(T),
    Reject(String),
}

enum Expectation {
    Create(Reply<Product>),
    Update(Reply<ProductUpdated>),
    Delete(Reply<ProductId>),
    DeleteMany(Reply<Vec<ProductId>>),
}

#[derive(Default)]
struct Script {
    expectations: VecDeque<Expectation>,
    calls: Vec<GatewayCall>,
    unexpected: Vec<String>,
}

#[derive(Clone, Default)]
pub struct MockGateway {
    script: Arc<Mutex<Script>>,
}

impl MockGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn expect_create(&self) -> GatewayExpectation<Product> {
        GatewayExpectation::new(self.script.clone(), Expectation::Create)
    }

    pub fn expect_update(&self) -> GatewayExpectation<ProductUpdated> {
        GatewayExpectation::new(self.script.clone(), Expectation::Update)
    }

    pub fn expect_delete(&self) -> GatewayExpectation<ProductId> {
        GatewayExpectation::new(self.script.clone(), Expectation::Delete)
    }

    pub fn expect_delete_many(&self) -> GatewayExpectation<Vec<ProductId>> {
        GatewayExpectation::new(self.script.clone(), Expectation::DeleteMany)
    }

    /// Every call received so far, in order.
    pub fn calls(&self) -> Vec<GatewayCall> {
        self.lock().calls.clone()
    }

    /// Panics if expectations remain or a call arrived that was not expected.
    pub fn verify(&self) {
        let script = self.lock();
        assert!(
            script.unexpected.is_empty(),
            "Unexpected gateway calls: {:?}",
            script.unexpected
        );
        assert!(
            script.expectations.is_empty(),
            "{} gateway expectation(s) were not met",
            script.expectations.len()
        );
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Script> {
        self.script.lock().expect("mock gateway poisoned")
    }

    /// Records `call` and pops the next expectation.
    fn next(&self, call: GatewayCall) -> Option<Expectation> {
        let mut script = self.lock();
        script.calls.push(call);
        script.expectations.pop_front()
    }

    fn unexpected(&self, operation: &str) -> GatewayError {
        let message = format!("Unexpected {operation} call");
        self.lock().unexpected.push(message.clone());
        GatewayError::Rejected(message)
    }
}

/// Fluent builder for one expected call.
pub struct GatewayExpectation<T> {
    script: Arc<Mutex<Script>>,
    make: fn(Reply<T>) -> Expectation,
}

impl<T> GatewayExpectation<T> {
    fn new(script: Arc<Mutex<Script>>, make: fn(Reply<T>) -> Expectation) -> Self {
        Self { script, make }
    }

    /// Succeeds with the value a real backend would produce for the call.
    pub fn echo(self) {
        self.push(Reply::Echo);
    }

    pub fn return_ok(self, value: T) {
        self.push(Reply::Value(value));
    }

    pub fn return_err(self, message: impl Into<String>) {
        self.push(Reply::Reject(message.into()));
    }

    fn push(self, reply: Reply<T>) {
        self.script
            .lock()
            .expect("mock gateway poisoned")
            .expectations
            .push_back((self.make)(reply));
    }
}

fn resolve<T>(reply: Reply<T>, echo: impl FnOnce() -> T) -> Result<T, GatewayError> {
    match reply {
        Reply::Echo => Ok(echo()),
        Reply::Value(value) => Ok(value),
        Reply::Reject(message) => Err(GatewayError::Rejected(message)),
    }
}

#[async_trait]
impl PersistenceGateway for MockGateway {
    async fn create(&self, draft: ProductDraft) -> Result<Product, GatewayError> {
        match self.next(GatewayCall::Create(draft.clone())) {
            Some(Expectation::Create(reply)) => {
                resolve(reply, || Product::from_draft(ProductId::generate(), draft, Utc::now()))
            }
            _ => Err(self.unexpected("create")),
        }
    }

    async fn update(
        &self,
        id: ProductId,
        draft: ProductDraft,
    ) -> Result<ProductUpdated, GatewayError> {
        match self.next(GatewayCall::Update(id.clone(), draft.clone())) {
            Some(Expectation::Update(reply)) => resolve(reply, || ProductUpdated { id, draft }),
            _ => Err(self.unexpected("update")),
        }
    }

    async fn delete(&self, id: ProductId) -> Result<ProductId, GatewayError> {
        match self.next(GatewayCall::Delete(id.clone())) {
            Some(Expectation::Delete(reply)) => resolve(reply, || id),
            _ => Err(self.unexpected("delete")),
        }
    }

    async fn delete_many(&self, ids: Vec<ProductId>) -> Result<Vec<ProductId>, GatewayError> {
        match self.next(GatewayCall::DeleteMany(ids.clone())) {
            Some(Expectation::DeleteMany(reply)) => resolve(reply, || ids),
            _ => Err(self.unexpected("delete_many")),
        }
    }
}
