//! The checkout aggregate.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::address::Address;

/// Default for the save-address flags when a request leaves them unset.
pub const DEFAULT_SAVE_ADDRESS: bool = true;

/// An in-progress, not-yet-finalised order.
///
/// Captures the billing and shipping addresses together with the customer's
/// save-address preferences. Every address update resets the corresponding
/// save flag: an unspecified preference means "save it", not "keep the
/// previous choice". `last_change` moves on every mutation so downstream
/// caches can invalidate stale checkout views.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Checkout {
    /// Unique checkout token.
    pub token: Uuid,
    /// Billing address, if one has been set.
    pub billing_address: Option<Address>,
    /// Shipping address, if one has been set.
    pub shipping_address: Option<Address>,
    /// Whether the billing address should be saved to the customer's
    /// address book when the checkout completes.
    pub save_billing_address: bool,
    /// Whether the shipping address should be saved on completion.
    pub save_shipping_address: bool,
    /// Timestamp of the last mutation.
    pub last_change: DateTime<Utc>,
}

impl Checkout {
    /// Create an empty checkout with default save-address preferences.
    #[must_use]
    pub fn new(token: Uuid) -> Self {
        Self {
            token,
            billing_address: None,
            shipping_address: None,
            save_billing_address: DEFAULT_SAVE_ADDRESS,
            save_shipping_address: DEFAULT_SAVE_ADDRESS,
            last_change: Utc::now(),
        }
    }

    /// Replace the billing address and reset its save preference.
    ///
    /// The shipping save preference is deliberately left untouched; the two
    /// flags belong to independent requests.
    pub fn set_billing_address(&mut self, address: Address, save_address: bool) {
        self.billing_address = Some(address);
        self.save_billing_address = save_address;
        self.touch();
    }

    /// Record that the checkout changed.
    pub fn touch(&mut self) {
        self.last_change = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    //! Covers aggregate defaults and the save-flag reset semantics.

    use super::*;

    #[test]
    fn new_checkout_defaults_to_saving_addresses() {
        let checkout = Checkout::new(Uuid::new_v4());
        assert!(checkout.billing_address.is_none());
        assert!(checkout.shipping_address.is_none());
        assert!(checkout.save_billing_address);
        assert!(checkout.save_shipping_address);
    }

    #[test]
    fn setting_billing_address_touches_and_resets_only_its_flag() {
        let mut checkout = Checkout::new(Uuid::new_v4());
        checkout.save_billing_address = false;
        checkout.save_shipping_address = false;
        let before = checkout.last_change - chrono::Duration::seconds(1);
        checkout.last_change = before;

        checkout.set_billing_address(Address::default(), DEFAULT_SAVE_ADDRESS);

        assert!(checkout.billing_address.is_some());
        assert!(checkout.save_billing_address);
        assert!(!checkout.save_shipping_address);
        assert!(checkout.last_change > before);
    }
}
