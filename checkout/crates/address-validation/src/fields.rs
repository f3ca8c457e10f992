//! Address field identifiers and payloads.
//!
//! [`AddressInput`] is the ephemeral DTO handed to the validation engine;
//! [`AddressFields`] is the validated (and possibly normalised) output.
//! Both serialise with camelCase field names so they can sit directly behind
//! an API boundary.

use serde::{Deserialize, Serialize};

/// Identifier for a single address field.
///
/// The declared variant order is the ascending lexical order of the
/// camelCase wire names. Error reporting relies on this: sorting errors by
/// field yields the order adapters expect (`postalCode` before
/// `streetAddress1`).
///
/// # Examples
/// ```
/// use address_validation::AddressField;
///
/// assert_eq!(AddressField::PostalCode.as_str(), "postalCode");
/// assert!(AddressField::PostalCode < AddressField::StreetAddress1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AddressField {
    /// City or town name.
    City,
    /// ISO 3166-1 alpha-2 country code.
    Country,
    /// Administrative area: state, province, or voivodeship.
    CountryArea,
    /// Postal or ZIP code.
    PostalCode,
    /// First street address line.
    StreetAddress1,
    /// Second street address line.
    StreetAddress2,
}

impl AddressField {
    /// Wire name of the field, as reported in field errors.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::City => "city",
            Self::Country => "country",
            Self::CountryArea => "countryArea",
            Self::PostalCode => "postalCode",
            Self::StreetAddress1 => "streetAddress1",
            Self::StreetAddress2 => "streetAddress2",
        }
    }
}

impl std::fmt::Display for AddressField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw address payload submitted for validation.
///
/// Only `country` is unconditionally meaningful; every other field defaults
/// to the empty string, and an empty string is equivalent to an absent
/// field. The engine decides which fields must be present from the
/// country's rule set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressInput {
    /// ISO 3166-1 alpha-2 country code; matched case-insensitively.
    pub country: String,
    /// City or town name.
    #[serde(default)]
    pub city: String,
    /// Administrative area: state, province, or voivodeship.
    #[serde(default)]
    pub country_area: String,
    /// Postal or ZIP code.
    #[serde(default)]
    pub postal_code: String,
    /// First street address line.
    #[serde(default)]
    pub street_address1: String,
    /// Second street address line.
    #[serde(default)]
    pub street_address2: String,
}

impl AddressInput {
    /// Borrow the raw value of `field`.
    #[must_use]
    pub fn value(&self, field: AddressField) -> &str {
        match field {
            AddressField::City => self.city.as_str(),
            AddressField::Country => self.country.as_str(),
            AddressField::CountryArea => self.country_area.as_str(),
            AddressField::PostalCode => self.postal_code.as_str(),
            AddressField::StreetAddress1 => self.street_address1.as_str(),
            AddressField::StreetAddress2 => self.street_address2.as_str(),
        }
    }

    /// Return `true` when `field` is empty once trimmed of whitespace.
    #[must_use]
    pub fn is_blank(&self, field: AddressField) -> bool {
        self.value(field).trim().is_empty()
    }
}

/// Validated address fields returned on success.
///
/// When normalisation is enabled the fields are trimmed and the postal code
/// is upper-cased where the country convention calls for it; otherwise they
/// are carried over verbatim. The country code is always stored upper-cased.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressFields {
    /// Upper-cased ISO 3166-1 alpha-2 country code.
    pub country: String,
    /// City or town name.
    pub city: String,
    /// Administrative area: state, province, or voivodeship.
    pub country_area: String,
    /// Postal or ZIP code.
    pub postal_code: String,
    /// First street address line.
    pub street_address1: String,
    /// Second street address line.
    pub street_address2: String,
}

impl AddressFields {
    /// Rebuild an [`AddressInput`] from these fields.
    ///
    /// Useful when a stored address must pass through validation again,
    /// e.g. after the country rule set changed.
    #[must_use]
    pub fn to_input(&self) -> AddressInput {
        AddressInput {
            country: self.country.clone(),
            city: self.city.clone(),
            country_area: self.country_area.clone(),
            postal_code: self.postal_code.clone(),
            street_address1: self.street_address1.clone(),
            street_address2: self.street_address2.clone(),
        }
    }
}
