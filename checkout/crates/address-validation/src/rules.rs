//! Per-request validation rule toggles.

use serde::{Deserialize, Serialize};

/// Toggles controlling which validation categories are enforced.
///
/// Each flag defaults to `true`; callers that deserialise a partial payload
/// (e.g. `{"checkRequiredFields": false}`) get the defaults for the rest.
/// The flags are independent: disabling the required-field check does not
/// disable format checks, and vice versa. Disabling both degrades the engine
/// to capture-as-given.
///
/// # Examples
/// ```
/// use address_validation::ValidationRules;
///
/// let rules = ValidationRules::default();
/// assert!(rules.check_required_fields);
/// assert!(rules.check_fields_format);
/// assert!(rules.enable_fields_normalization);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct ValidationRules {
    /// Enforce the per-country required-field set.
    #[serde(default = "default_enabled")]
    pub check_required_fields: bool,
    /// Enforce per-country format rules, e.g. postal-code patterns.
    #[serde(default = "default_enabled")]
    pub check_fields_format: bool,
    /// Trim and re-case fields before acceptance.
    #[serde(default = "default_enabled")]
    pub enable_fields_normalization: bool,
}

impl Default for ValidationRules {
    fn default() -> Self {
        Self {
            check_required_fields: true,
            check_fields_format: true,
            enable_fields_normalization: true,
        }
    }
}

const fn default_enabled() -> bool {
    true
}

impl ValidationRules {
    /// Rules with every check disabled: the engine accepts any payload for a
    /// recognised country and stores it as given.
    #[must_use]
    pub const fn permissive() -> Self {
        Self {
            check_required_fields: false,
            check_fields_format: false,
            enable_fields_normalization: false,
        }
    }
}

#[cfg(test)]
mod tests {
    //! Covers serde defaults for partial rule payloads.

    use rstest::rstest;
    use serde_json::json;

    use super::*;

    #[test]
    fn defaults_enable_every_check() {
        assert_eq!(
            ValidationRules::default(),
            ValidationRules {
                check_required_fields: true,
                check_fields_format: true,
                enable_fields_normalization: true,
            }
        );
    }

    #[rstest]
    #[case::skip_required(json!({ "checkRequiredFields": false }), (false, true, true))]
    #[case::skip_format(json!({ "checkFieldsFormat": false }), (true, false, true))]
    #[case::skip_normalisation(json!({ "enableFieldsNormalization": false }), (true, true, false))]
    #[case::empty(json!({}), (true, true, true))]
    fn partial_payloads_fall_back_to_defaults(
        #[case] payload: serde_json::Value,
        #[case] expected: (bool, bool, bool),
    ) {
        let rules: ValidationRules =
            serde_json::from_value(payload).expect("partial payload deserialises");
        assert_eq!(rules.check_required_fields, expected.0);
        assert_eq!(rules.check_fields_format, expected.1);
        assert_eq!(rules.enable_fields_normalization, expected.2);
    }

    #[test]
    fn unknown_rule_names_are_rejected() {
        let result: Result<ValidationRules, _> =
            serde_json::from_value(json!({ "checkEverything": true }));
        assert!(result.is_err());
    }

    #[test]
    fn permissive_disables_every_flag() {
        let rules = ValidationRules::permissive();
        assert!(!rules.check_required_fields);
        assert!(!rules.check_fields_format);
        assert!(!rules.enable_fields_normalization);
    }
}
