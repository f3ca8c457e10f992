//! Checkout domain services over the address validation engine.
//!
//! The centrepiece is [`BillingAddressUpdateService`]: it validates a
//! submitted billing address through [`address_validation`], attaches the
//! result to the [`Checkout`] aggregate, applies the save-address default
//! policy (an unspecified preference resets to saving), bumps the
//! checkout's last-change marker, persists through the repository port, and
//! emits a change event through the event port. GraphQL wiring, database
//! adapters, webhook delivery, and permission enforcement all live behind
//! those ports, outside this crate.

pub mod domain;
pub mod outbound;

pub use self::domain::{
    Address, BillingAddressUpdate, BillingAddressUpdateError, BillingAddressUpdateService,
    Checkout, CheckoutEvent, CheckoutEventSink, CheckoutRepository,
};
