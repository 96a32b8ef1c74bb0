//! Shared proptest generators for the harness suites.

use proptest::prelude::*;
use proptest::sample::subsequence;

/// Field names of a full contact payload, in wire (camelCase) form.
pub const CONTACT_FIELD_NAMES: [&str; 11] = [
    "firstName",
    "lastName",
    "birthdate",
    "email",
    "phone",
    "street1",
    "street2",
    "city",
    "stateProvince",
    "postalCode",
    "country",
];

/// Generate well-formed email addresses.
pub fn email_strategy() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9._-]{2,20}@[a-z]{3,10}\\.[a-z]{2,4}"
}

/// Generate phone numbers the API accepts (digits only, no leading zero).
pub fn phone_strategy() -> impl Strategy<Value = String> {
    "[1-9][0-9]{9}"
}

/// Generate the HTTP status codes the API surfaces.
pub fn http_status_code_strategy() -> impl Strategy<Value = u16> {
    prop_oneof![
        Just(200u16),
        Just(201u16),
        Just(400u16),
        Just(401u16),
        Just(404u16),
    ]
}

/// Generate a strict subset of contact field names (1 to 10 of the 11).
///
/// Useful for exercising partial-update selection: any subset produced here
/// must dispatch as a partial write, never a full replace.
pub fn partial_contact_fields_strategy() -> impl Strategy<Value = Vec<&'static str>> {
    subsequence(CONTACT_FIELD_NAMES.to_vec(), 1..CONTACT_FIELD_NAMES.len())
}
