//! Contacts convenience helper.
//!
//! Create/read/update/delete over the `contacts` endpoints. Updates pick
//! the verb from the submitted field count: a full payload replaces the
//! record via PUT, anything smaller goes through PATCH.

use std::cmp::Ordering;

use reqwest::Method;
use serde_json::{Map, Value};
use tracing::info;

use crate::client::{ApiClient, RequestParams};
use crate::error::{ApiError, ApiResult};
use crate::models::{Contact, ContactPayload};

/// Number of fields in a full contact payload.
pub const FULL_CONTACT_FIELDS: usize = 11;

/// Pick the update verb for a payload of `field_count` fields: a full
/// payload replaces via PUT, a smaller one amends via PATCH, a larger one
/// is not a valid update.
fn select_update_verb(field_count: usize) -> Option<Method> {
    match field_count.cmp(&FULL_CONTACT_FIELDS) {
        Ordering::Equal => Some(Method::PUT),
        Ordering::Less => Some(Method::PATCH),
        Ordering::Greater => None,
    }
}

/// Contacts helper bound to an [`ApiClient`].
pub struct ContactsApi<'a> {
    client: &'a ApiClient,
}

impl<'a> ContactsApi<'a> {
    pub(crate) const fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Create a new contact with randomized fields.
    ///
    /// Returns the created record together with the payload that was
    /// submitted.
    ///
    /// # Errors
    ///
    /// Fails when the service does not answer 201 with a JSON body.
    pub async fn create_contact(&self) -> ApiResult<(Contact, ContactPayload)> {
        let payload = ContactPayload::generate();
        info!(
            first_name = %payload.first_name,
            last_name = %payload.last_name,
            "create new contact"
        );

        let params = RequestParams::new("contacts")
            .with_payload(serde_json::to_value(&payload)?)
            .expect_status(201);
        let body = self
            .client
            .post(params)
            .await?
            .ok_or_else(|| ApiError::empty_body(self.client.config().endpoint_url("contacts")))?;

        Ok((serde_json::from_value(body)?, payload))
    }

    /// Fetch the full contact list.
    ///
    /// # Errors
    ///
    /// Fails when the service does not answer 200 with a JSON body.
    pub async fn get_contacts(&self) -> ApiResult<Vec<Contact>> {
        info!("get contacts");

        let body = self
            .client
            .get(RequestParams::new("contacts"))
            .await?
            .ok_or_else(|| ApiError::empty_body(self.client.config().endpoint_url("contacts")))?;

        Ok(serde_json::from_value(body)?)
    }

    /// Fetch one contact by id.
    ///
    /// # Errors
    ///
    /// Fails when the service does not answer 200 with a JSON body.
    pub async fn get_contact(&self, contact_id: &str) -> ApiResult<Contact> {
        let endpoint = format!("contacts/{contact_id}");
        let body = self
            .get_contact_expecting(contact_id, 200)
            .await?
            .ok_or_else(|| ApiError::empty_body(self.client.config().endpoint_url(&endpoint)))?;

        Ok(serde_json::from_value(body)?)
    }

    /// Fetch one contact by id, expecting the given status. Returns the raw
    /// body, `None` on an empty one -- a deleted contact answers 404 with no
    /// body.
    ///
    /// # Errors
    ///
    /// Fails when the call cannot be performed or the status does not match.
    pub async fn get_contact_expecting(
        &self,
        contact_id: &str,
        expected_status: u16,
    ) -> ApiResult<Option<Value>> {
        info!(contact_id, "get contact by id");

        let params =
            RequestParams::new(format!("contacts/{contact_id}")).expect_status(expected_status);
        self.client.get(params).await
    }

    /// Update a contact, expecting success, and parse the updated record.
    ///
    /// # Errors
    ///
    /// Fails on dispatch errors or when the response carries no record.
    pub async fn update(&self, contact_id: &str, fields: &Map<String, Value>) -> ApiResult<Contact> {
        let endpoint = format!("contacts/{contact_id}");
        let body = self
            .update_expecting(contact_id, fields, 200)
            .await?
            .ok_or_else(|| ApiError::empty_body(self.client.config().endpoint_url(&endpoint)))?;

        Ok(serde_json::from_value(body)?)
    }

    /// Update a contact, selecting the verb from the submitted field count:
    /// a full payload ([`FULL_CONTACT_FIELDS`] fields) replaces the record
    /// via PUT, fewer fields go through PATCH, more are rejected.
    ///
    /// # Errors
    ///
    /// Fails on dispatch errors, a status mismatch, or a payload with more
    /// than [`FULL_CONTACT_FIELDS`] fields.
    pub async fn update_expecting(
        &self,
        contact_id: &str,
        fields: &Map<String, Value>,
        expected_status: u16,
    ) -> ApiResult<Option<Value>> {
        let params = RequestParams::new(format!("contacts/{contact_id}"))
            .with_payload(Value::Object(fields.clone()))
            .expect_status(expected_status);

        match select_update_verb(fields.len()) {
            Some(Method::PUT) => {
                info!(contact_id, "update contact with PUT");
                self.client.put(params).await
            }
            Some(_) => {
                info!(contact_id, field_count = fields.len(), "update contact with PATCH");
                self.client.patch(params).await
            }
            None => Err(ApiError::invalid_input(format!(
                "update payload has {} fields, more than the full {FULL_CONTACT_FIELDS}",
                fields.len()
            ))),
        }
    }

    /// Delete a contact by id.
    ///
    /// # Errors
    ///
    /// Fails when the service does not answer 200.
    pub async fn delete_contact(&self, contact_id: &str) -> ApiResult<()> {
        info!(contact_id, "delete contact");

        self.client
            .delete(RequestParams::new(format!("contacts/{contact_id}")))
            .await
    }
}
