//! Users convenience helper.
//!
//! Composes randomized payload generation with the dispatcher so tests can
//! create, inspect, update and delete the account they run as. Creation and
//! update return the payload that was submitted alongside the parsed
//! response, for round-trip assertions.

use serde_json::Value;
use tracing::info;

use crate::client::{ApiClient, ExtraHeaders, RequestParams};
use crate::error::{ApiError, ApiResult};
use crate::models::{LoginResponse, User, UserPayload};

/// Users helper bound to an [`ApiClient`].
pub struct UsersApi<'a> {
    client: &'a ApiClient,
}

impl<'a> UsersApi<'a> {
    pub(crate) const fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Create a new user with randomized fields.
    ///
    /// Returns the creation response (user plus fresh token) together with
    /// the payload that was submitted.
    ///
    /// # Errors
    ///
    /// Fails when the service does not answer 201 with a JSON body.
    pub async fn create_user(&self) -> ApiResult<(LoginResponse, UserPayload)> {
        let payload = UserPayload::generate();
        info!(
            first_name = %payload.first_name,
            last_name = %payload.last_name,
            email = %payload.email,
            "create new user"
        );

        let params = RequestParams::new("users")
            .with_payload(serde_json::to_value(&payload)?)
            .expect_status(201);
        let body = self
            .client
            .post(params)
            .await?
            .ok_or_else(|| ApiError::empty_body(self.client.config().endpoint_url("users")))?;

        Ok((serde_json::from_value(body)?, payload))
    }

    /// Fetch the profile of the calling user (`GET users/me`).
    ///
    /// # Errors
    ///
    /// Fails when the service does not answer 200 with a JSON body.
    pub async fn get_user(&self, auth_extra: Option<ExtraHeaders>) -> ApiResult<User> {
        info!("get user");

        let mut params = RequestParams::new("users/me");
        if let Some(headers) = auth_extra {
            params = params.with_auth_extra(headers);
        }
        let body = self
            .client
            .get(params)
            .await?
            .ok_or_else(|| ApiError::empty_body(self.client.config().endpoint_url("users/me")))?;

        Ok(serde_json::from_value(body)?)
    }

    /// Update the calling user with randomized fields (`PATCH users/me`).
    ///
    /// Returns the updated user together with the payload that was
    /// submitted.
    ///
    /// # Errors
    ///
    /// Fails when the service does not answer 200 with a JSON body.
    pub async fn update_user(
        &self,
        auth_extra: Option<ExtraHeaders>,
    ) -> ApiResult<(User, UserPayload)> {
        let payload = UserPayload::generate();
        info!(
            first_name = %payload.first_name,
            last_name = %payload.last_name,
            email = %payload.email,
            "update user"
        );

        let mut params =
            RequestParams::new("users/me").with_payload(serde_json::to_value(&payload)?);
        if let Some(headers) = auth_extra {
            params = params.with_auth_extra(headers);
        }
        let body = self
            .client
            .patch(params)
            .await?
            .ok_or_else(|| ApiError::empty_body(self.client.config().endpoint_url("users/me")))?;

        Ok((serde_json::from_value(body)?, payload))
    }

    /// Update the calling user with an explicit payload, expecting the given
    /// status. Returns the raw body for error-shape assertions.
    ///
    /// # Errors
    ///
    /// Fails when the call cannot be performed or the status does not match.
    pub async fn update_user_expecting(
        &self,
        payload: Value,
        auth_extra: Option<ExtraHeaders>,
        expected_status: u16,
    ) -> ApiResult<Option<Value>> {
        let mut params = RequestParams::new("users/me")
            .with_payload(payload)
            .expect_status(expected_status);
        if let Some(headers) = auth_extra {
            params = params.with_auth_extra(headers);
        }
        self.client.patch(params).await
    }

    /// Delete the calling user (`DELETE users/me`).
    ///
    /// # Errors
    ///
    /// Fails when the service does not answer 200.
    pub async fn delete_user(&self, auth_extra: Option<ExtraHeaders>) -> ApiResult<()> {
        info!("delete user");

        let mut params = RequestParams::new("users/me");
        if let Some(headers) = auth_extra {
            params = params.with_auth_extra(headers);
        }
        self.client.delete(params).await
    }
}
