//! Generic request dispatch with expected-status assertion.
//!
//! Every call goes through [`ApiClient::dispatch`]: build the URL, merge
//! headers (bearer auth from the session unless the caller supplied its
//! own), perform the call, check the status code against the expectation
//! and parse the JSON body when one is present.

use std::collections::HashMap;

use reqwest::{Client, Method, header};
use serde_json::Value;
use tracing::{debug, info};

use harness_common::{HarnessError, HttpConfig, build_http_client};

use crate::auth::AuthSession;
use crate::config::ApiConfig;
use crate::contacts::ContactsApi;
use crate::error::ApiResult;
use crate::users::UsersApi;

/// Extra headers attached to a single request, replacing the session's auth
/// headers.
pub type ExtraHeaders = HashMap<String, String>;

/// Parameters of a single API call.
#[derive(Debug, Clone)]
pub struct RequestParams {
    /// Endpoint path relative to the base URL, e.g. `contacts/{id}`
    pub endpoint: String,
    /// JSON payload for write verbs
    pub payload: Option<Value>,
    /// Auth headers overriding the client session for this call
    pub auth_extra: Option<ExtraHeaders>,
    /// Status code the test expects (default 200)
    pub expected_status: u16,
}

impl RequestParams {
    /// Parameters for the given endpoint, expecting status 200.
    #[must_use]
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            payload: None,
            auth_extra: None,
            expected_status: 200,
        }
    }

    /// Attach a JSON payload.
    #[must_use]
    pub fn with_payload(mut self, payload: Value) -> Self {
        self.payload = Some(payload);
        self
    }

    /// Override the auth headers for this call.
    #[must_use]
    pub fn with_auth_extra(mut self, headers: ExtraHeaders) -> Self {
        self.auth_extra = Some(headers);
        self
    }

    /// Override the auth headers with a bearer token for this call.
    #[must_use]
    pub fn with_bearer(self, token: &str) -> Self {
        self.with_auth_extra(crate::auth::bearer_header(token))
    }

    /// Set the expected status code.
    #[must_use]
    pub const fn expect_status(mut self, status: u16) -> Self {
        self.expected_status = status;
        self
    }
}

/// Client for the contact-management JSON API.
pub struct ApiClient {
    config: ApiConfig,
    http: Client,
    session: AuthSession,
}

impl ApiClient {
    /// Create a client for the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error when the underlying HTTP client cannot be built.
    pub fn new(config: ApiConfig) -> ApiResult<Self> {
        let http = build_http_client(&HttpConfig::default())?;
        let session = AuthSession::new(config.clone(), http.clone());
        Ok(Self {
            config,
            http,
            session,
        })
    }

    /// Create a client configured from the environment.
    ///
    /// # Errors
    ///
    /// Returns an error when the environment selection is invalid or the
    /// HTTP client cannot be built.
    pub fn from_env() -> ApiResult<Self> {
        Self::new(ApiConfig::from_env()?)
    }

    /// The client configuration.
    #[must_use]
    pub const fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// The auth session backing this client.
    #[must_use]
    pub const fn session(&self) -> &AuthSession {
        &self.session
    }

    /// Users helper bound to this client.
    #[must_use]
    pub const fn users(&self) -> UsersApi<'_> {
        UsersApi::new(self)
    }

    /// Contacts helper bound to this client.
    #[must_use]
    pub const fn contacts(&self) -> ContactsApi<'_> {
        ContactsApi::new(self)
    }

    /// Perform a GET request.
    ///
    /// # Errors
    ///
    /// Fails when the call cannot be performed or the status code does not
    /// match the expectation.
    pub async fn get(&self, params: RequestParams) -> ApiResult<Option<Value>> {
        self.dispatch(Method::GET, params).await
    }

    /// Perform a POST request.
    ///
    /// # Errors
    ///
    /// Fails when the call cannot be performed or the status code does not
    /// match the expectation.
    pub async fn post(&self, params: RequestParams) -> ApiResult<Option<Value>> {
        self.dispatch(Method::POST, params).await
    }

    /// Perform a PUT request.
    ///
    /// # Errors
    ///
    /// Fails when the call cannot be performed or the status code does not
    /// match the expectation.
    pub async fn put(&self, params: RequestParams) -> ApiResult<Option<Value>> {
        self.dispatch(Method::PUT, params).await
    }

    /// Perform a PATCH request.
    ///
    /// # Errors
    ///
    /// Fails when the call cannot be performed or the status code does not
    /// match the expectation.
    pub async fn patch(&self, params: RequestParams) -> ApiResult<Option<Value>> {
        self.dispatch(Method::PATCH, params).await
    }

    /// Perform a DELETE request. Only the status code is checked.
    ///
    /// # Errors
    ///
    /// Fails when the call cannot be performed or the status code does not
    /// match the expectation.
    pub async fn delete(&self, params: RequestParams) -> ApiResult<()> {
        self.dispatch(Method::DELETE, params).await?;
        Ok(())
    }

    async fn dispatch(&self, method: Method, params: RequestParams) -> ApiResult<Option<Value>> {
        let url = self.config.endpoint_url(&params.endpoint);
        debug!(%method, %url, "dispatching request");

        let mut headers = match params.auth_extra {
            Some(extra) => extra,
            None => self.session.auth_headers().await?,
        };
        headers.insert("Content-Type".to_string(), "application/json".to_string());

        let timeout = if method == Method::GET {
            self.config.read_timeout
        } else {
            self.config.write_timeout
        };

        let is_write = matches!(method, Method::POST | Method::PUT | Method::PATCH);
        let mut request = self.http.request(method, &url).timeout(timeout);
        for (name, value) in &headers {
            request = request.header(name.as_str(), value.as_str());
        }
        let had_payload = params.payload.is_some();
        if let Some(body) = &params.payload {
            request = request.json(body);
        }

        let response = request.send().await?;
        let actual = response.status().as_u16();
        if actual != params.expected_status {
            return Err(
                HarnessError::status_mismatch(url, params.expected_status, actual).into(),
            );
        }
        info!(status = actual, %url, "status check passed");

        let declared_empty = response
            .headers()
            .get(header::CONTENT_LENGTH)
            .and_then(|v| v.to_str().ok())
            == Some("0");
        if declared_empty {
            debug!(%url, "response has empty body (Content-Length: 0)");
            return Ok(None);
        }

        // A write without a payload gets no body read-back either.
        if is_write && !had_payload {
            return Ok(None);
        }

        let body: Value = response.json().await?;
        debug!(%url, %body, "parsed response body");
        Ok(Some(body))
    }
}
