//! Canned payloads for negative-path tests.
//!
//! These are intentionally malformed, so they are plain JSON values rather
//! than the typed wire models.

use serde_json::{Value, json};

use crate::fakes;

/// A contact payload with the mandatory name fields blanked out.
///
/// The API answers 400 with `"_message": "Contact validation failed"`.
#[must_use]
pub fn contact_missing_names() -> Value {
    json!({
        "firstName": "",
        "lastName": "",
        "birthdate": fakes::birthdate(),
        "email": fakes::email(),
        "phone": fakes::phone_number(),
        "street1": fakes::street_name(),
        "street2": fakes::street_name(),
        "city": fakes::city(),
        "stateProvince": fakes::state(),
        "postalCode": fakes::postal_code(),
        "country": fakes::country(),
    })
}

/// A contact payload whose phone number is not a number.
///
/// The API answers 400 with a phone-specific validation message.
#[must_use]
pub fn contact_non_numeric_phone() -> Value {
    json!({
        "firstName": fakes::first_name(),
        "lastName": fakes::last_name(),
        "birthdate": fakes::birthdate(),
        "email": fakes::email(),
        "phone": "No phone",
        "street1": fakes::street_name(),
        "street2": fakes::street_name(),
        "city": fakes::city(),
        "stateProvince": fakes::state(),
        "postalCode": fakes::postal_code(),
        "country": fakes::country(),
    })
}

/// A user payload with caller-chosen email and password.
///
/// Empty email or password makes the API answer 400 with
/// `"_message": "User validation failed"`.
#[must_use]
pub fn user_payload_with(email: &str, password: &str) -> Value {
    json!({
        "firstName": fakes::first_name(),
        "lastName": fakes::last_name(),
        "email": email,
        "password": password,
    })
}
