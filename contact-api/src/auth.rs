//! Bearer-token auth session.
//!
//! Login exchanges credentials for an opaque token; the token is attached
//! as an `Authorization: Bearer` header to subsequent calls and invalidated
//! by logout. [`AuthSession::auth_headers`] logs in lazily, and
//! [`with_session`] scopes a block of calls so logout always runs.

use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;

use reqwest::{Client, header};
use secrecy::ExposeSecret;
use serde_json::json;
use tokio::sync::RwLock;
use tracing::{info, warn};

use harness_common::HarnessError;

use crate::client::{ApiClient, ExtraHeaders};
use crate::config::{ApiConfig, EMAIL_VAR, PASSWORD_VAR};
use crate::error::{ApiError, ApiResult};
use crate::models::LoginResponse;

/// Build the auth header map for a bearer token.
#[must_use]
pub fn bearer_header(token: &str) -> ExtraHeaders {
    HashMap::from([("Authorization".to_string(), format!("Bearer {token}"))])
}

/// Authenticated session against the API.
///
/// Cheap to share: the held token lives behind an `Arc`.
#[derive(Clone)]
pub struct AuthSession {
    config: ApiConfig,
    http: Client,
    token: Arc<RwLock<Option<String>>>,
}

impl AuthSession {
    /// Create a session for the given configuration and HTTP client.
    #[must_use]
    pub fn new(config: ApiConfig, http: Client) -> Self {
        Self {
            config,
            http,
            token: Arc::new(RwLock::new(None)),
        }
    }

    /// The currently held token, if any.
    pub async fn token(&self) -> Option<String> {
        self.token.read().await.clone()
    }

    /// Log in with the configured credentials.
    ///
    /// # Errors
    ///
    /// Fails when credentials are not configured, the call cannot be
    /// performed, or the service answers anything but 200.
    pub async fn login(&self) -> ApiResult<String> {
        let email = self
            .config
            .email
            .clone()
            .ok_or_else(|| ApiError::MissingCredentials(EMAIL_VAR.to_string()))?;
        let password = self
            .config
            .password
            .clone()
            .ok_or_else(|| ApiError::MissingCredentials(PASSWORD_VAR.to_string()))?;
        self.login_as(&email, password.expose_secret()).await
    }

    /// Log in with explicit credentials, replacing any held token.
    ///
    /// # Errors
    ///
    /// Fails when the call cannot be performed or the service answers
    /// anything but 200.
    pub async fn login_as(&self, email: &str, password: &str) -> ApiResult<String> {
        info!("performing login");

        let url = self.config.endpoint_url("users/login");
        let response = self
            .http
            .post(&url)
            .timeout(self.config.write_timeout)
            .json(&json!({"email": email, "password": password}))
            .send()
            .await?;

        let status = response.status().as_u16();
        if status != 200 {
            return Err(ApiError::LoginFailed(status));
        }

        let body: LoginResponse = response.json().await?;
        *self.token.write().await = Some(body.token.clone());

        info!("login successful");
        Ok(body.token)
    }

    /// Log out, invalidating the held token.
    ///
    /// A session without a token is a no-op (the service would answer 401).
    ///
    /// # Errors
    ///
    /// Fails when the call cannot be performed or the service answers
    /// anything but 200.
    pub async fn logout(&self) -> ApiResult<()> {
        let Some(token) = self.token.read().await.clone() else {
            warn!("no token held, skipping logout");
            return Ok(());
        };

        info!("performing logout");

        let url = self.config.endpoint_url("users/logout");
        let response = self
            .http
            .post(&url)
            .timeout(self.config.write_timeout)
            .header(header::AUTHORIZATION, format!("Bearer {token}"))
            .send()
            .await?;

        let status = response.status().as_u16();
        if status != 200 {
            return Err(ApiError::LogoutFailed(status));
        }

        *self.token.write().await = None;
        info!("logout successful");
        Ok(())
    }

    /// Auth headers for a request, logging in first when no token is held.
    ///
    /// # Errors
    ///
    /// Fails when the lazy login fails.
    pub async fn auth_headers(&self) -> ApiResult<ExtraHeaders> {
        if self.token.read().await.is_none() {
            self.login().await?;
        }

        let token = self
            .token
            .read()
            .await
            .clone()
            .ok_or_else(|| ApiError::from(HarnessError::auth_failed("no token available")))?;
        Ok(bearer_header(&token))
    }
}

/// Run a block of calls with freshly acquired auth headers, guaranteeing
/// logout afterwards regardless of the block's outcome.
///
/// When the block succeeded but logout fails, the logout error is returned;
/// when the block already failed, its error wins and the logout failure is
/// only logged.
///
/// # Errors
///
/// Fails when header acquisition fails, the block fails, or (for an
/// otherwise successful block) logout fails.
pub async fn with_session<T, F, Fut>(client: &ApiClient, f: F) -> ApiResult<T>
where
    F: FnOnce(ExtraHeaders) -> Fut,
    Fut: Future<Output = ApiResult<T>>,
{
    let headers = client.session().auth_headers().await?;
    let result = f(headers).await;

    match client.session().logout().await {
        Ok(()) => result,
        Err(logout_err) => match result {
            Ok(_) => Err(logout_err),
            Err(err) => {
                warn!(error = %logout_err, "logout failed after an already failed call");
                Err(err)
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bearer_header_shape() {
        let headers = bearer_header("abc123");
        assert_eq!(headers.len(), 1);
        assert_eq!(headers.get("Authorization").unwrap(), "Bearer abc123");
    }

    #[tokio::test]
    async fn test_new_session_holds_no_token() {
        let config = ApiConfig::new("http://localhost:1");
        let session = AuthSession::new(config, Client::new());
        assert!(session.token().await.is_none());
    }

    #[tokio::test]
    async fn test_login_without_credentials_is_config_error() {
        let config = ApiConfig::new("http://localhost:1");
        let session = AuthSession::new(config, Client::new());
        let err = session.login().await.unwrap_err();
        assert!(matches!(err, ApiError::MissingCredentials(_)));
    }

    #[tokio::test]
    async fn test_logout_without_token_is_noop() {
        let config = ApiConfig::new("http://localhost:1");
        let session = AuthSession::new(config, Client::new());
        assert!(session.logout().await.is_ok());
    }
}
