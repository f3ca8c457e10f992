//! Checkout domain: aggregates, ports, and services.
//!
//! Types here are transport agnostic. Inbound adapters construct
//! [`BillingAddressUpdate`] commands from request payloads (applying their
//! own permission checks before setting `skip_validation`); driven adapters
//! implement the ports in [`ports`].

pub mod address;
pub mod billing_address;
pub mod checkout;
pub mod ports;

pub use self::address::Address;
pub use self::billing_address::{
    BillingAddressUpdate, BillingAddressUpdateError, BillingAddressUpdateService,
};
pub use self::checkout::{Checkout, DEFAULT_SAVE_ADDRESS};
pub use self::ports::{
    CheckoutEvent, CheckoutEventSink, CheckoutRepository, CheckoutRepositoryError,
    EventDispatchError,
};
