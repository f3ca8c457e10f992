//! End-to-end validation scenarios against the built-in country table.

use address_validation::{
    AddressField, AddressInput, AddressValidationEngine, ErrorCode, FieldError, REQUIRED_MESSAGE,
    StaticCountryRules, ValidationError, ValidationRules,
};
use rstest::{fixture, rstest};
use serde_json::json;

#[fixture]
fn engine() -> AddressValidationEngine<StaticCountryRules> {
    AddressValidationEngine::new(StaticCountryRules::builtin())
}

fn address(payload: serde_json::Value) -> AddressInput {
    serde_json::from_value(payload).expect("address payload deserialises")
}

fn rules(payload: serde_json::Value) -> ValidationRules {
    serde_json::from_value(payload).expect("rules payload deserialises")
}

#[rstest]
fn complete_us_address_passes_with_default_rules(
    engine: AddressValidationEngine<StaticCountryRules>,
) {
    let input = address(json!({
        "country": "US",
        "city": "Washington",
        "countryArea": "District of Columbia",
        "streetAddress1": "1600 Pennsylvania Avenue NW",
        "postalCode": "20500",
    }));
    let fields = engine
        .validate(&input, &ValidationRules::default())
        .expect("complete address validates");
    assert_eq!(fields.country, "US");
    assert_eq!(fields.postal_code, "20500");
    assert_eq!(fields.street_address1, "1600 Pennsylvania Avenue NW");
}

#[rstest]
fn missing_required_fields_are_reported_in_field_order(
    engine: AddressValidationEngine<StaticCountryRules>,
) {
    let input = address(json!({
        "country": "PL",
        "city": "Wroclaw",
        "streetAddress1": "",
        "postalCode": "",
    }));
    let err = engine
        .validate(&input, &ValidationRules::default())
        .expect_err("two required fields are empty");
    assert_eq!(
        err.field_errors().expect("field-scoped failure"),
        [
            FieldError::required(AddressField::PostalCode),
            FieldError::required(AddressField::StreetAddress1),
        ]
        .as_slice()
    );
}

#[rstest]
fn required_message_matches_contract(engine: AddressValidationEngine<StaticCountryRules>) {
    let input = address(json!({ "country": "DE" }));
    let err = engine
        .validate(&input, &ValidationRules::default())
        .expect_err("empty address fails");
    let errors = err.field_errors().expect("field-scoped failure");
    assert!(errors.iter().all(|error| error.message == REQUIRED_MESSAGE));
}

// Skipping the required-field check accepts partial addresses for any
// recognised country.
#[rstest]
#[case::pl_bare(json!({ "country": "PL" }))]
#[case::pl_postal_only(json!({ "country": "PL", "postalCode": "53-601" }))]
#[case::us_bare(json!({ "country": "US" }))]
#[case::us_city_only(json!({ "country": "US", "city": "New York" }))]
fn skip_required_accepts_partial_addresses(
    engine: AddressValidationEngine<StaticCountryRules>,
    #[case] payload: serde_json::Value,
) {
    let result = engine.validate(
        &address(payload),
        &rules(json!({ "checkRequiredFields": false })),
    );
    assert!(result.is_ok());
}

#[rstest]
fn skip_required_preserves_country_and_postal_code(
    engine: AddressValidationEngine<StaticCountryRules>,
) {
    let input = address(json!({ "country": "PL", "postalCode": "53-601" }));
    let fields = engine
        .validate(&input, &rules(json!({ "checkRequiredFields": false })))
        .expect("partial PL address validates");
    assert_eq!(fields.country, "PL");
    assert_eq!(fields.postal_code, "53-601");
}

#[rstest]
fn skip_required_still_enforces_formats(engine: AddressValidationEngine<StaticCountryRules>) {
    let input = address(json!({ "country": "US", "postalCode": "XX-123" }));
    let err = engine
        .validate(&input, &rules(json!({ "checkRequiredFields": false })))
        .expect_err("malformed postal code still fails");
    let errors = err.field_errors().expect("field-scoped failure");
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field, AddressField::PostalCode);
    assert_eq!(errors[0].code, ErrorCode::Invalid);
}

// Skipping the format check accepts malformed values while required fields
// stay enforced.
#[rstest]
#[case::pl(json!({
    "country": "PL",
    "city": "Wroclaw",
    "postalCode": "XYZ",
    "streetAddress1": "Teczowa 7",
}))]
#[case::us(json!({
    "country": "US",
    "city": "New York",
    "countryArea": "ABC",
    "streetAddress1": "New street",
    "postalCode": "53-601",
}))]
fn skip_format_accepts_malformed_values(
    engine: AddressValidationEngine<StaticCountryRules>,
    #[case] payload: serde_json::Value,
) {
    let result = engine.validate(
        &address(payload),
        &rules(json!({ "checkFieldsFormat": false })),
    );
    assert!(result.is_ok());
}

#[rstest]
#[case::pl(json!({ "country": "PL", "city": "Wroclaw", "postalCode": "XYZ" }))]
#[case::us(json!({
    "country": "US",
    "city": "New York",
    "countryArea": "XYZ",
    "postalCode": "XYZ",
}))]
fn skip_format_still_reports_missing_street(
    engine: AddressValidationEngine<StaticCountryRules>,
    #[case] payload: serde_json::Value,
) {
    let err = engine
        .validate(
            &address(payload),
            &rules(json!({ "checkFieldsFormat": false })),
        )
        .expect_err("street is still required");
    assert_eq!(
        err.field_errors().expect("field-scoped failure"),
        [FieldError::required(AddressField::StreetAddress1)].as_slice()
    );
}

#[rstest]
fn skip_format_preserves_malformed_postal_code(
    engine: AddressValidationEngine<StaticCountryRules>,
) {
    let input = address(json!({
        "country": "PL",
        "city": "Wroclaw",
        "streetAddress1": "Teczowa 7",
        "postalCode": "XX-601",
    }));
    let fields = engine
        .validate(&input, &rules(json!({ "checkFieldsFormat": false })))
        .expect("malformed postal code accepted");
    assert_eq!(fields.postal_code, "XX-601");
    assert_eq!(fields.city, "Wroclaw");
}

// With both checks disabled the engine degrades to capture-as-given.
#[rstest]
#[case::pl(json!({ "country": "PL", "postalCode": "XYZ" }))]
#[case::us(json!({ "country": "US", "countryArea": "DC", "postalCode": "XYZ" }))]
fn skip_both_accepts_anything_for_known_countries(
    engine: AddressValidationEngine<StaticCountryRules>,
    #[case] payload: serde_json::Value,
) {
    let result = engine.validate(
        &address(payload),
        &rules(json!({ "checkRequiredFields": false, "checkFieldsFormat": false })),
    );
    assert!(result.is_ok());
}

#[rstest]
fn skip_both_preserves_fields_as_given(engine: AddressValidationEngine<StaticCountryRules>) {
    let input = address(json!({ "country": "PL", "city": "Wroclaw", "postalCode": "XX-601" }));
    let fields = engine
        .validate(
            &input,
            &rules(json!({ "checkRequiredFields": false, "checkFieldsFormat": false })),
        )
        .expect("nothing left to enforce");
    assert_eq!(fields.country, "PL");
    assert_eq!(fields.city, "Wroclaw");
    assert_eq!(fields.postal_code, "XX-601");
    assert_eq!(fields.street_address1, "");
}

#[rstest]
fn disabled_normalisation_keeps_fields_verbatim(
    engine: AddressValidationEngine<StaticCountryRules>,
) {
    let input = address(json!({
        "country": "US",
        "city": "Washington",
        "countryArea": "District of Columbia",
        "streetAddress1": "1600 Pennsylvania Avenue NW",
        "postalCode": "20500",
    }));
    let fields = engine
        .validate(&input, &rules(json!({ "enableFieldsNormalization": false })))
        .expect("valid address");
    assert_eq!(fields.city, input.city);
    assert_eq!(fields.country_area, input.country_area);
    assert_eq!(fields.postal_code, input.postal_code);
    assert_eq!(fields.street_address1, input.street_address1);
}

#[rstest]
fn normalisation_uppercases_postal_codes_where_conventional(
    engine: AddressValidationEngine<StaticCountryRules>,
) {
    let input = address(json!({
        "country": "GB",
        "city": "London",
        "streetAddress1": "10 Downing Street",
        "postalCode": " sw1a 2aa ",
    }));
    let fields = engine
        .validate(&input, &ValidationRules::default())
        .expect("valid GB address");
    assert_eq!(fields.postal_code, "SW1A 2AA");
}

#[rstest]
fn validating_normalised_output_is_idempotent(
    engine: AddressValidationEngine<StaticCountryRules>,
) {
    let input = address(json!({
        "country": "gb",
        "city": " London ",
        "streetAddress1": "10 Downing Street",
        "postalCode": "sw1a 2aa",
    }));
    let once = engine
        .validate(&input, &ValidationRules::default())
        .expect("valid GB address");
    let twice = engine
        .validate(&once.to_input(), &ValidationRules::default())
        .expect("normalised output revalidates");
    assert_eq!(once, twice);
}

#[rstest]
fn unknown_country_is_reported_distinctly(engine: AddressValidationEngine<StaticCountryRules>) {
    let input = address(json!({ "country": "ZZ", "postalCode": "12345" }));
    let err = engine
        .validate(&input, &ValidationRules::permissive())
        .expect_err("unknown country fails even with checks disabled");
    assert_eq!(err, ValidationError::unknown_country("ZZ"));
}
