//! Billing-address update service.
//!
//! Implements the caller side of the validation engine's contract: run the
//! engine (or skip it when the caller is authorised to), attach the address
//! to the checkout, apply the save-address default policy, persist, and
//! announce the change. Permission checks happen before a
//! [`BillingAddressUpdate`] is constructed; `skip_validation` records an
//! already-authorised decision.

use std::sync::Arc;

use address_validation::{
    AddressInput, AddressValidationEngine, CountryRuleProvider, ValidationError, ValidationRules,
};
use thiserror::Error;
use uuid::Uuid;

use super::address::Address;
use super::checkout::{Checkout, DEFAULT_SAVE_ADDRESS};
use super::ports::{
    CheckoutEvent, CheckoutEventSink, CheckoutRepository, CheckoutRepositoryError,
    EventDispatchError,
};

/// Command describing one billing-address update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BillingAddressUpdate {
    /// Token of the checkout to update.
    pub checkout_token: Uuid,
    /// The submitted address payload.
    pub address: AddressInput,
    /// Per-request validation toggles; defaults enforce everything.
    pub validation_rules: ValidationRules,
    /// Save-address preference; `None` resets the flag to its default.
    pub save_address: Option<bool>,
    /// Bypass validation entirely. The caller vouches that this request
    /// carries the required permission.
    pub skip_validation: bool,
}

impl BillingAddressUpdate {
    /// Command with default rules, no explicit save preference, and
    /// validation enabled.
    #[must_use]
    pub fn new(checkout_token: Uuid, address: AddressInput) -> Self {
        Self {
            checkout_token,
            address,
            validation_rules: ValidationRules::default(),
            save_address: None,
            skip_validation: false,
        }
    }

    /// Override the validation rule toggles.
    #[must_use]
    pub const fn with_rules(mut self, rules: ValidationRules) -> Self {
        self.validation_rules = rules;
        self
    }

    /// Set an explicit save-address preference.
    #[must_use]
    pub const fn with_save_address(mut self, save: bool) -> Self {
        self.save_address = Some(save);
        self
    }

    /// Bypass validation for this request.
    #[must_use]
    pub const fn with_skip_validation(mut self) -> Self {
        self.skip_validation = true;
        self
    }
}

/// Failures of a billing-address update.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BillingAddressUpdateError {
    /// No checkout exists for the token.
    #[error("checkout {token} not found")]
    NotFound {
        /// The unknown token.
        token: Uuid,
    },
    /// The address failed validation; the checkout is unchanged.
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// The repository rejected the read or write.
    #[error(transparent)]
    Repository(#[from] CheckoutRepositoryError),
    /// The checkout was saved but the change event could not be dispatched.
    #[error("billing address saved, but: {0}")]
    EventDispatch(#[from] EventDispatchError),
}

/// Applies billing-address updates to checkouts.
///
/// Generic over the rule provider, the repository, and the event sink so
/// tests can run fully in memory.
#[derive(Clone)]
pub struct BillingAddressUpdateService<P, R, E> {
    engine: AddressValidationEngine<P>,
    repository: Arc<R>,
    events: Arc<E>,
}

impl<P, R, E> BillingAddressUpdateService<P, R, E> {
    /// Create a service over the given engine and adapters.
    pub const fn new(
        engine: AddressValidationEngine<P>,
        repository: Arc<R>,
        events: Arc<E>,
    ) -> Self {
        Self {
            engine,
            repository,
            events,
        }
    }
}

impl<P, R, E> BillingAddressUpdateService<P, R, E>
where
    P: CountryRuleProvider,
    R: CheckoutRepository,
    E: CheckoutEventSink,
{
    /// Validate the submitted address and attach it to the checkout.
    ///
    /// On success the checkout carries the new billing address, its
    /// `save_billing_address` flag is the request's preference (or the
    /// default `true` when unspecified), `last_change` has moved, and one
    /// [`CheckoutEvent::BillingAddressUpdated`] has been dispatched. The
    /// shipping save preference is never touched.
    ///
    /// # Errors
    /// [`BillingAddressUpdateError::NotFound`] for an unknown token;
    /// [`BillingAddressUpdateError::Validation`] carrying the engine's field
    /// errors (the checkout is left unchanged); repository and dispatch
    /// failures otherwise. A dispatch failure is reported after the save has
    /// already committed.
    pub async fn update_billing_address(
        &self,
        request: &BillingAddressUpdate,
    ) -> Result<Checkout, BillingAddressUpdateError> {
        let mut checkout = self
            .repository
            .find_by_token(&request.checkout_token)
            .await?
            .ok_or(BillingAddressUpdateError::NotFound {
                token: request.checkout_token,
            })?;

        let address = if request.skip_validation {
            tracing::debug!(token = %request.checkout_token, "capturing billing address with validation skipped");
            Address::unvalidated(&request.address)
        } else {
            let fields = self
                .engine
                .validate(&request.address, &request.validation_rules)?;
            Address::from(fields)
        };

        let save_address = request.save_address.unwrap_or(DEFAULT_SAVE_ADDRESS);
        checkout.set_billing_address(address, save_address);
        self.repository.save(&checkout).await?;
        self.events
            .dispatch(CheckoutEvent::BillingAddressUpdated {
                token: checkout.token,
            })
            .await?;
        tracing::info!(
            token = %checkout.token,
            save_address,
            "billing address updated"
        );
        Ok(checkout)
    }
}
