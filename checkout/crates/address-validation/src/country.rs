//! Country-specific address rules and the provider port.
//!
//! The engine treats rule data as an injected read-only dependency so tests
//! can swap in fixture rule sets. [`StaticCountryRules`] ships a built-in
//! table for common countries; production deployments that source rules from
//! an i18n dataset implement [`CountryRuleProvider`] over that data instead.

use std::collections::HashMap;

use regex::Regex;
use thiserror::Error;

use crate::fields::AddressField;

/// Error returned when a format rule pattern fails to compile.
#[derive(Debug, Error)]
#[error("invalid format pattern: {0}")]
pub struct InvalidPatternError(#[from] regex::Error);

/// A format constraint on a single address field.
///
/// Patterns are anchored to the full value and matched case-insensitively;
/// validation runs before normalisation, so `k1a 0b1` must match the same
/// rule as `K1A 0B1`.
#[derive(Debug, Clone)]
pub struct FormatRule {
    pattern: Regex,
    message: String,
}

impl FormatRule {
    /// Compile a format rule from an unanchored pattern fragment.
    ///
    /// # Errors
    /// Returns [`InvalidPatternError`] when `pattern` is not a valid regular
    /// expression.
    pub fn new(pattern: &str, message: impl Into<String>) -> Result<Self, InvalidPatternError> {
        let anchored = Regex::new(&format!("(?i)^(?:{pattern})$"))?;
        Ok(Self {
            pattern: anchored,
            message: message.into(),
        })
    }

    /// Return `true` when `value` satisfies the rule.
    #[must_use]
    pub fn matches(&self, value: &str) -> bool {
        self.pattern.is_match(value)
    }

    /// Message reported when the rule is violated.
    #[must_use]
    pub fn message(&self) -> &str {
        self.message.as_str()
    }
}

/// Reference data describing how one country's addresses are validated.
#[derive(Debug, Clone, Default)]
pub struct CountryRules {
    required: Vec<AddressField>,
    formats: Vec<(AddressField, FormatRule)>,
    uppercase_postal_code: bool,
}

impl CountryRules {
    /// Create a rule set with the given required-field set.
    ///
    /// Fields are expected in reporting order (ascending [`AddressField`]
    /// order); the engine sorts errors regardless, so a provider supplying
    /// an unordered set still reports deterministically.
    #[must_use]
    pub fn new(required: impl Into<Vec<AddressField>>) -> Self {
        Self {
            required: required.into(),
            formats: Vec::new(),
            uppercase_postal_code: false,
        }
    }

    /// Attach a format rule for `field`.
    #[must_use]
    pub fn with_format(mut self, field: AddressField, rule: FormatRule) -> Self {
        self.formats.push((field, rule));
        self
    }

    /// Upper-case the postal code during normalisation.
    #[must_use]
    pub const fn with_uppercase_postal_code(mut self) -> Self {
        self.uppercase_postal_code = true;
        self
    }

    /// Fields that must be non-empty for this country.
    #[must_use]
    pub fn required(&self) -> &[AddressField] {
        self.required.as_slice()
    }

    /// Per-field format rules declared for this country.
    #[must_use]
    pub fn formats(&self) -> &[(AddressField, FormatRule)] {
        self.formats.as_slice()
    }

    /// Whether normalisation upper-cases the postal code.
    #[must_use]
    pub const fn uppercase_postal_code(&self) -> bool {
        self.uppercase_postal_code
    }
}

/// Read-only lookup of country rule sets.
///
/// Implementations must be immutable for the duration of a validation call;
/// the engine holds no state of its own and is safe to share across callers
/// when the provider is.
pub trait CountryRuleProvider {
    /// Resolve the rule set for an ISO 3166-1 alpha-2 code.
    ///
    /// `country` is matched case-insensitively. `None` means the country is
    /// not recognised and validation fails as a whole.
    fn rules_for(&self, country: &str) -> Option<&CountryRules>;
}

/// In-memory [`CountryRuleProvider`] backed by a hash map.
///
/// [`StaticCountryRules::builtin`] provides a table for common countries;
/// [`StaticCountryRules::insert`] supports fixture rule sets in tests.
///
/// # Examples
/// ```
/// use address_validation::{CountryRuleProvider, StaticCountryRules};
///
/// let provider = StaticCountryRules::builtin();
/// assert!(provider.rules_for("pl").is_some());
/// assert!(provider.rules_for("ZZ").is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct StaticCountryRules {
    rules: HashMap<String, CountryRules>,
}

/// Violation message for postal-code format rules.
const POSTAL_CODE_MESSAGE: &str = "Invalid postal code for this country.";

/// Built-in table: country code, required fields, postal pattern, and
/// whether the postal code is upper-cased during normalisation.
///
/// Required-field sets and postal patterns follow the common i18n address
/// datasets; the `streetAddress2` line is never required anywhere.
const BUILTIN: &[(&str, &[AddressField], &str, bool)] = &[
    (
        "AU",
        &[
            AddressField::City,
            AddressField::CountryArea,
            AddressField::PostalCode,
            AddressField::StreetAddress1,
        ],
        r"\d{4}",
        false,
    ),
    (
        "CA",
        &[
            AddressField::City,
            AddressField::CountryArea,
            AddressField::PostalCode,
            AddressField::StreetAddress1,
        ],
        r"[ABCEGHJ-NPRSTVXY]\d[ABCEGHJ-NPRSTV-Z] ?\d[ABCEGHJ-NPRSTV-Z]\d",
        true,
    ),
    (
        "CH",
        &[
            AddressField::City,
            AddressField::PostalCode,
            AddressField::StreetAddress1,
        ],
        r"\d{4}",
        false,
    ),
    (
        "DE",
        &[
            AddressField::City,
            AddressField::PostalCode,
            AddressField::StreetAddress1,
        ],
        r"\d{5}",
        false,
    ),
    (
        "FR",
        &[
            AddressField::City,
            AddressField::PostalCode,
            AddressField::StreetAddress1,
        ],
        r"\d{2} ?\d{3}",
        false,
    ),
    (
        "GB",
        &[
            AddressField::City,
            AddressField::PostalCode,
            AddressField::StreetAddress1,
        ],
        r"[A-Z]{1,2}\d[A-Z\d]? ?\d[A-Z]{2}",
        true,
    ),
    (
        "JP",
        &[
            AddressField::City,
            AddressField::PostalCode,
            AddressField::StreetAddress1,
        ],
        r"\d{3}-?\d{4}",
        false,
    ),
    (
        "NL",
        &[
            AddressField::City,
            AddressField::PostalCode,
            AddressField::StreetAddress1,
        ],
        r"\d{4} ?[A-Z]{2}",
        true,
    ),
    (
        "PL",
        &[
            AddressField::City,
            AddressField::PostalCode,
            AddressField::StreetAddress1,
        ],
        r"\d{2}-\d{3}",
        false,
    ),
    (
        "US",
        &[
            AddressField::City,
            AddressField::CountryArea,
            AddressField::PostalCode,
            AddressField::StreetAddress1,
        ],
        r"\d{5}(?:[- ]\d{4})?",
        false,
    ),
];

impl StaticCountryRules {
    /// Create an empty provider.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Provider covering the built-in country table.
    #[must_use]
    #[expect(
        clippy::expect_used,
        reason = "built-in patterns are constants exercised by the table tests"
    )]
    pub fn builtin() -> Self {
        let mut provider = Self::new();
        for &(code, required, postal_pattern, uppercase) in BUILTIN {
            let postal = FormatRule::new(postal_pattern, POSTAL_CODE_MESSAGE)
                .expect("built-in postal pattern compiles");
            let mut rules =
                CountryRules::new(required).with_format(AddressField::PostalCode, postal);
            if uppercase {
                rules = rules.with_uppercase_postal_code();
            }
            provider.insert(code, rules);
        }
        provider
    }

    /// Register or replace the rule set for `country`.
    pub fn insert(&mut self, country: impl Into<String>, rules: CountryRules) {
        self.rules.insert(country.into().to_uppercase(), rules);
    }
}

impl CountryRuleProvider for StaticCountryRules {
    fn rules_for(&self, country: &str) -> Option<&CountryRules> {
        self.rules.get(&country.trim().to_uppercase())
    }
}

#[cfg(test)]
mod tests {
    //! Covers the built-in table and format rule matching.

    use rstest::rstest;

    use super::*;

    #[test]
    fn builtin_table_compiles_and_resolves() {
        let provider = StaticCountryRules::builtin();
        for &(code, required, _, _) in BUILTIN {
            let rules = provider.rules_for(code).expect("built-in country resolves");
            assert_eq!(rules.required(), required);
            assert_eq!(rules.formats().len(), 1);
        }
    }

    #[rstest]
    #[case::lowercase("pl")]
    #[case::mixed("Pl")]
    #[case::padded(" PL ")]
    fn lookup_is_case_and_whitespace_insensitive(#[case] code: &str) {
        let provider = StaticCountryRules::builtin();
        assert!(provider.rules_for(code).is_some());
    }

    #[rstest]
    #[case::pl_valid("PL", "53-601", true)]
    #[case::pl_invalid("PL", "XYZ", false)]
    #[case::us_valid("US", "20500", true)]
    #[case::us_zip4("US", "20500-0001", true)]
    #[case::us_invalid("US", "XX-123", false)]
    #[case::gb_lowercase("GB", "sw1a 1aa", true)]
    #[case::ca_valid("CA", "K1A 0B1", true)]
    #[case::nl_valid("NL", "1012 AB", true)]
    #[case::jp_valid("JP", "100-0001", true)]
    fn postal_patterns_match_expected_values(
        #[case] country: &str,
        #[case] postal_code: &str,
        #[case] expected: bool,
    ) {
        let provider = StaticCountryRules::builtin();
        let rules = provider.rules_for(country).expect("country resolves");
        let (field, rule) = rules.formats().first().expect("postal rule present");
        assert_eq!(*field, AddressField::PostalCode);
        assert_eq!(rule.matches(postal_code), expected);
    }

    #[test]
    fn patterns_are_anchored_to_the_full_value() {
        let rule = FormatRule::new(r"\d{2}-\d{3}", "bad").expect("pattern compiles");
        assert!(!rule.matches("53-6011"));
        assert!(!rule.matches("x53-601"));
    }

    #[test]
    fn invalid_pattern_is_rejected() {
        assert!(FormatRule::new(r"(", "bad").is_err());
    }

    #[test]
    fn fixture_rule_sets_can_be_inserted() {
        let mut provider = StaticCountryRules::new();
        provider.insert("zz", CountryRules::new([AddressField::City]));
        let rules = provider.rules_for("ZZ").expect("fixture resolves");
        assert_eq!(rules.required(), [AddressField::City].as_slice());
        assert!(!rules.uppercase_postal_code());
    }
}
