//! The address validation engine.
//!
//! Validation is a pure function of the input, the rule toggles, and the
//! injected country rule set: no I/O, no shared mutable state. Violations
//! are returned as data so callers can batch-report every error in one
//! response instead of failing on the first.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::country::{CountryRuleProvider, CountryRules};
use crate::fields::{AddressField, AddressFields, AddressInput};
use crate::rules::ValidationRules;

/// Message reported for a missing required field.
pub const REQUIRED_MESSAGE: &str = "This field is required.";

/// Category of a field-scoped validation error.
///
/// The declared order (required before invalid) is the reporting order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// A field the country requires was empty.
    Required,
    /// A present field failed the country's format rule.
    Invalid,
}

impl ErrorCode {
    /// Stable wire representation of the code.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Required => "REQUIRED",
            Self::Invalid => "INVALID",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single field-scoped validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldError {
    /// The offending field.
    pub field: AddressField,
    /// Failure category.
    pub code: ErrorCode,
    /// Human-readable message suitable for re-prompting the user.
    pub message: String,
}

impl FieldError {
    /// A required-field violation with the standard message.
    #[must_use]
    pub fn required(field: AddressField) -> Self {
        Self {
            field,
            code: ErrorCode::Required,
            message: REQUIRED_MESSAGE.to_owned(),
        }
    }

    /// A format violation carrying the rule's message.
    #[must_use]
    pub fn invalid(field: AddressField, message: impl Into<String>) -> Self {
        Self {
            field,
            code: ErrorCode::Invalid,
            message: message.into(),
        }
    }
}

/// Why an address failed validation.
///
/// Field-scoped violations are recoverable by re-prompting the user; an
/// unrecognised country is a distinct, non-field-scoped failure rather than
/// an error on the `country` field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The country code does not resolve to any rule set.
    #[error("unrecognised country code: {code:?}")]
    UnknownCountry {
        /// The raw code as submitted.
        code: String,
    },
    /// One or more fields failed required or format checks.
    #[error("address validation failed with {} field error(s)", errors.len())]
    Fields {
        /// Violations in reporting order: required before invalid, each
        /// category ordered by field.
        errors: Vec<FieldError>,
    },
}

impl ValidationError {
    /// Helper for the unknown-country case.
    #[must_use]
    pub fn unknown_country(code: impl Into<String>) -> Self {
        Self::UnknownCountry { code: code.into() }
    }

    /// Borrow the field errors, if this is the field-scoped branch.
    #[must_use]
    pub fn field_errors(&self) -> Option<&[FieldError]> {
        match self {
            Self::UnknownCountry { .. } => None,
            Self::Fields { errors } => Some(errors.as_slice()),
        }
    }
}

/// Validates and normalises address payloads against injected country rules.
///
/// The engine is stateless beyond its provider and may be shared freely
/// across callers.
///
/// # Examples
/// ```
/// use address_validation::{
///     AddressInput, AddressValidationEngine, StaticCountryRules, ValidationRules,
/// };
///
/// let engine = AddressValidationEngine::new(StaticCountryRules::builtin());
/// let input = AddressInput {
///     country: "PL".to_owned(),
///     city: "Wroclaw".to_owned(),
///     street_address1: "Teczowa 7".to_owned(),
///     postal_code: "53-601".to_owned(),
///     ..AddressInput::default()
/// };
/// let fields = engine.validate(&input, &ValidationRules::default())?;
/// assert_eq!(fields.country, "PL");
/// assert_eq!(fields.postal_code, "53-601");
/// # Ok::<(), address_validation::ValidationError>(())
/// ```
#[derive(Debug, Clone)]
pub struct AddressValidationEngine<P> {
    provider: P,
}

impl<P> AddressValidationEngine<P> {
    /// Create an engine over the given rule provider.
    pub const fn new(provider: P) -> Self {
        Self { provider }
    }
}

impl<P: CountryRuleProvider> AddressValidationEngine<P> {
    /// Validate `input` under `rules`.
    ///
    /// Presence and format checks run independently of each other; when
    /// either accumulates errors, no normalisation is attempted and every
    /// violation is reported at once. On success the fields are returned
    /// normalised, or verbatim when normalisation is disabled.
    ///
    /// # Errors
    /// [`ValidationError::UnknownCountry`] when the country code resolves to
    /// no rule set; [`ValidationError::Fields`] carrying every required and
    /// format violation otherwise.
    pub fn validate(
        &self,
        input: &AddressInput,
        rules: &ValidationRules,
    ) -> Result<AddressFields, ValidationError> {
        let code = input.country.trim().to_uppercase();
        let Some(country_rules) = self.provider.rules_for(&code) else {
            return Err(ValidationError::unknown_country(input.country.clone()));
        };

        let mut errors = Vec::new();
        if rules.check_required_fields {
            for &field in country_rules.required() {
                if input.is_blank(field) {
                    errors.push(FieldError::required(field));
                }
            }
        }
        if rules.check_fields_format {
            for (field, format) in country_rules.formats() {
                let value = input.value(*field).trim();
                if !value.is_empty() && !format.matches(value) {
                    errors.push(FieldError::invalid(*field, format.message()));
                }
            }
        }
        if !errors.is_empty() {
            errors.sort_by_key(|error| (error.code, error.field));
            return Err(ValidationError::Fields { errors });
        }

        if rules.enable_fields_normalization {
            Ok(normalised(input, code, country_rules))
        } else {
            Ok(verbatim(input, code))
        }
    }
}

fn normalised(input: &AddressInput, country: String, rules: &CountryRules) -> AddressFields {
    let trimmed_postal = input.postal_code.trim();
    let postal_code = if rules.uppercase_postal_code() {
        trimmed_postal.to_uppercase()
    } else {
        trimmed_postal.to_owned()
    };
    AddressFields {
        country,
        city: input.city.trim().to_owned(),
        country_area: input.country_area.trim().to_owned(),
        postal_code,
        street_address1: input.street_address1.trim().to_owned(),
        street_address2: input.street_address2.trim().to_owned(),
    }
}

fn verbatim(input: &AddressInput, country: String) -> AddressFields {
    AddressFields {
        country,
        city: input.city.clone(),
        country_area: input.country_area.clone(),
        postal_code: input.postal_code.clone(),
        street_address1: input.street_address1.clone(),
        street_address2: input.street_address2.clone(),
    }
}
