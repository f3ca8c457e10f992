//! In-memory adapters for the checkout ports.
//!
//! Back the domain services in tests and demos without a database or a
//! delivery pipeline. Both adapters are safe to share behind an `Arc`.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::checkout::Checkout;
use crate::domain::ports::{
    CheckoutEvent, CheckoutEventSink, CheckoutRepository, CheckoutRepositoryError,
    EventDispatchError,
};

/// [`CheckoutRepository`] backed by a mutex-guarded map.
#[derive(Debug, Default)]
pub struct InMemoryCheckoutRepository {
    checkouts: Mutex<HashMap<Uuid, Checkout>>,
}

impl InMemoryCheckoutRepository {
    /// Create an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the repository with a checkout.
    ///
    /// # Errors
    /// [`CheckoutRepositoryError::Connection`] when the store lock is
    /// poisoned.
    pub fn insert(&self, checkout: Checkout) -> Result<(), CheckoutRepositoryError> {
        let mut checkouts = self
            .checkouts
            .lock()
            .map_err(|_| CheckoutRepositoryError::connection("checkout store lock poisoned"))?;
        checkouts.insert(checkout.token, checkout);
        Ok(())
    }
}

#[async_trait]
impl CheckoutRepository for InMemoryCheckoutRepository {
    async fn find_by_token(
        &self,
        token: &Uuid,
    ) -> Result<Option<Checkout>, CheckoutRepositoryError> {
        let checkouts = self
            .checkouts
            .lock()
            .map_err(|_| CheckoutRepositoryError::connection("checkout store lock poisoned"))?;
        Ok(checkouts.get(token).cloned())
    }

    async fn save(&self, checkout: &Checkout) -> Result<(), CheckoutRepositoryError> {
        self.insert(checkout.clone())
    }
}

/// [`CheckoutEventSink`] that records every dispatched event.
#[derive(Debug, Default)]
pub struct RecordingEventSink {
    events: Mutex<Vec<CheckoutEvent>>,
}

impl RecordingEventSink {
    /// Create an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the events dispatched so far.
    #[must_use]
    pub fn recorded(&self) -> Vec<CheckoutEvent> {
        self.events
            .lock()
            .map(|events| events.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl CheckoutEventSink for RecordingEventSink {
    async fn dispatch(&self, event: CheckoutEvent) -> Result<(), EventDispatchError> {
        let mut events = self
            .events
            .lock()
            .map_err(|_| EventDispatchError::new("event log lock poisoned"))?;
        events.push(event);
        Ok(())
    }
}

/// [`CheckoutEventSink`] that rejects every event, for failure-path tests.
#[derive(Debug, Default)]
pub struct FailingEventSink;

#[async_trait]
impl CheckoutEventSink for FailingEventSink {
    async fn dispatch(&self, _event: CheckoutEvent) -> Result<(), EventDispatchError> {
        Err(EventDispatchError::new("dispatcher unavailable"))
    }
}
