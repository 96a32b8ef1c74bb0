//! Wire models for the contact-management API.
//!
//! Field names follow the remote service: camelCase on the wire, MongoDB
//! style `_id` identifiers. Responses may carry extra bookkeeping fields
//! (`__v`, `owner`); those are ignored on deserialization.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use test_utils::fakes;

/// A user record as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Server-assigned identifier
    #[serde(rename = "_id")]
    pub id: String,
    /// First name
    pub first_name: String,
    /// Last name
    pub last_name: String,
    /// Email address
    pub email: String,
}

/// Response of `POST users` and `POST users/login`: the user plus a fresh
/// bearer token.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    /// The authenticated user
    pub user: User,
    /// Opaque session token
    pub token: String,
}

/// Payload for creating or updating a user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserPayload {
    /// First name
    pub first_name: String,
    /// Last name
    pub last_name: String,
    /// Email address, unique across users
    pub email: String,
    /// Plain-text password
    pub password: String,
}

impl UserPayload {
    /// Generate a randomized payload.
    #[must_use]
    pub fn generate() -> Self {
        Self {
            first_name: fakes::first_name(),
            last_name: fakes::last_name(),
            email: fakes::email(),
            password: fakes::password(),
        }
    }
}

/// A contact record as returned by the API.
///
/// Only the name fields are mandatory on the remote side; everything else
/// may be absent from a record that was created with a partial payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    /// Server-assigned identifier
    #[serde(rename = "_id")]
    pub id: String,
    /// First name
    pub first_name: String,
    /// Last name
    pub last_name: String,
    /// Birthdate, `YYYY-MM-DD`
    #[serde(default)]
    pub birthdate: Option<String>,
    /// Email address
    #[serde(default)]
    pub email: Option<String>,
    /// Phone number, digits only
    #[serde(default)]
    pub phone: Option<String>,
    /// Street address, first line
    #[serde(default)]
    pub street1: Option<String>,
    /// Street address, second line
    #[serde(default)]
    pub street2: Option<String>,
    /// City
    #[serde(default)]
    pub city: Option<String>,
    /// State or province
    #[serde(default)]
    pub state_province: Option<String>,
    /// Postal code, at most 10 characters
    #[serde(default)]
    pub postal_code: Option<String>,
    /// Country, at most 40 characters
    #[serde(default)]
    pub country: Option<String>,
}

/// Full 11-field payload for creating or replacing a contact.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ContactPayload {
    /// First name
    pub first_name: String,
    /// Last name
    pub last_name: String,
    /// Birthdate, `YYYY-MM-DD`
    pub birthdate: String,
    /// Email address
    pub email: String,
    /// Phone number, digits only
    pub phone: String,
    /// Street address, first line
    pub street1: String,
    /// Street address, second line
    pub street2: String,
    /// City
    pub city: String,
    /// State or province
    pub state_province: String,
    /// Postal code
    pub postal_code: String,
    /// Country
    pub country: String,
}

impl ContactPayload {
    /// Generate a randomized full payload.
    #[must_use]
    pub fn generate() -> Self {
        Self {
            first_name: fakes::first_name(),
            last_name: fakes::last_name(),
            birthdate: fakes::birthdate(),
            email: fakes::email(),
            phone: fakes::phone_number(),
            street1: fakes::street_name(),
            street2: fakes::street_name(),
            city: fakes::city(),
            state_province: fakes::state(),
            postal_code: fakes::postal_code(),
            country: fakes::country(),
        }
    }

    /// The payload as a JSON object map, as submitted on the wire.
    ///
    /// # Errors
    ///
    /// Returns a serialization error if the payload cannot be represented as
    /// a JSON object (it always can; the signature keeps `?` usable).
    pub fn as_map(&self) -> Result<Map<String, Value>, serde_json::Error> {
        match serde_json::to_value(self)? {
            Value::Object(map) => Ok(map),
            _ => Ok(Map::new()),
        }
    }
}

/// Validation-failure body returned with status 400.
///
/// The service is inconsistent about which field carries the summary:
/// user/contact creation failures use `_message`, update failures use
/// `message`.
#[derive(Debug, Clone, Deserialize)]
pub struct ValidationErrorBody {
    /// Summary message on creation failures
    #[serde(rename = "_message", default)]
    pub summary: Option<String>,
    /// Detailed message on update failures
    #[serde(default)]
    pub message: Option<String>,
}
