//! Stored address values.

use address_validation::{AddressFields, AddressInput};
use serde::{Deserialize, Serialize};

/// An address as attached to a checkout.
///
/// Carries the accepted fields plus a marker recording whether validation
/// was bypassed when the address was captured. The marker lets later stages
/// (fulfilment, tax calculation) treat such addresses with caution.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    /// The accepted address fields.
    pub fields: AddressFields,
    /// `true` when the caller bypassed validation entirely.
    pub validation_skipped: bool,
}

impl Address {
    /// Capture a raw payload verbatim, marking validation as skipped.
    ///
    /// Only the country code is normalised (trimmed and upper-cased) so the
    /// stored value still identifies a country; everything else is stored
    /// exactly as submitted, malformed or not.
    #[must_use]
    pub fn unvalidated(input: &AddressInput) -> Self {
        Self {
            fields: AddressFields {
                country: input.country.trim().to_uppercase(),
                city: input.city.clone(),
                country_area: input.country_area.clone(),
                postal_code: input.postal_code.clone(),
                street_address1: input.street_address1.clone(),
                street_address2: input.street_address2.clone(),
            },
            validation_skipped: true,
        }
    }
}

impl From<AddressFields> for Address {
    fn from(fields: AddressFields) -> Self {
        Self {
            fields,
            validation_skipped: false,
        }
    }
}
