//! Country-aware address validation and normalisation.
//!
//! Given a raw address payload, a set of per-request rule toggles, and an
//! injected table of country rules, [`AddressValidationEngine::validate`]
//! resolves the country's required-field set, checks presence, checks
//! formats (postal-code patterns), optionally normalises casing and
//! whitespace, and returns either the accepted fields or every violation at
//! once as ordered [`FieldError`] records.
//!
//! The engine performs no I/O and holds no mutable state; it is safe to
//! share across any number of callers. Rule data is a read-only dependency
//! behind [`CountryRuleProvider`], so tests can run against fixture tables
//! and deployments can plug in their own dataset.
//!
//! # Examples
//! ```
//! use address_validation::{
//!     AddressInput, AddressValidationEngine, ErrorCode, StaticCountryRules, ValidationRules,
//! };
//!
//! let engine = AddressValidationEngine::new(StaticCountryRules::builtin());
//! let input = AddressInput {
//!     country: "US".to_owned(),
//!     postal_code: "XX-123".to_owned(),
//!     ..AddressInput::default()
//! };
//! let rules = ValidationRules {
//!     check_required_fields: false,
//!     ..ValidationRules::default()
//! };
//! let err = engine.validate(&input, &rules).unwrap_err();
//! let errors = err.field_errors().expect("field-scoped failure");
//! assert_eq!(errors.len(), 1);
//! assert_eq!(errors[0].code, ErrorCode::Invalid);
//! ```

pub mod country;
pub mod engine;
pub mod fields;
pub mod rules;

pub use self::country::{
    CountryRuleProvider, CountryRules, FormatRule, InvalidPatternError, StaticCountryRules,
};
pub use self::engine::{
    AddressValidationEngine, ErrorCode, FieldError, REQUIRED_MESSAGE, ValidationError,
};
pub use self::fields::{AddressField, AddressFields, AddressInput};
pub use self::rules::ValidationRules;
