//! Domain ports for checkout persistence and event dispatch.
//!
//! Ports describe how the domain expects to interact with driven adapters.
//! Each trait exposes strongly typed errors so adapters map their failures
//! into predictable variants instead of returning `anyhow::Result`.

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use super::checkout::Checkout;

/// Errors surfaced by the checkout persistence adapter.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckoutRepositoryError {
    /// Storage connectivity or transaction failures.
    #[error("checkout repository connection failed: {message}")]
    Connection {
        /// Adapter-supplied description.
        message: String,
    },
    /// Write failures that bubble up from the adapter.
    #[error("checkout repository write failed: {message}")]
    Write {
        /// Adapter-supplied description.
        message: String,
    },
}

impl CheckoutRepositoryError {
    /// Helper for connection related adapter errors.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Helper for write failures.
    pub fn write(message: impl Into<String>) -> Self {
        Self::Write {
            message: message.into(),
        }
    }
}

/// Checkout storage port.
#[async_trait]
pub trait CheckoutRepository: Send + Sync {
    /// Fetch a checkout by token. `Ok(None)` means the token is unknown.
    async fn find_by_token(
        &self,
        token: &Uuid,
    ) -> Result<Option<Checkout>, CheckoutRepositoryError>;

    /// Persist the checkout, replacing any stored state for its token.
    async fn save(&self, checkout: &Checkout) -> Result<(), CheckoutRepositoryError>;
}

/// Domain events emitted after a checkout mutation commits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckoutEvent {
    /// The billing address was replaced.
    BillingAddressUpdated {
        /// Token of the affected checkout.
        token: Uuid,
    },
}

/// Error surfaced when an event could not be handed to the dispatcher.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("checkout event dispatch failed: {message}")]
pub struct EventDispatchError {
    /// Adapter-supplied description.
    pub message: String,
}

impl EventDispatchError {
    /// Helper for dispatch failures.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Outbound event port; the adapter behind it owns delivery and retries.
#[async_trait]
pub trait CheckoutEventSink: Send + Sync {
    /// Hand an event to the dispatcher.
    async fn dispatch(&self, event: CheckoutEvent) -> Result<(), EventDispatchError>;
}
