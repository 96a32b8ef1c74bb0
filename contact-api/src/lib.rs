//! API-surface client for the contact-management application.
//!
//! Provides the request dispatcher with expected-status assertion, the
//! bearer-token auth session, typed wire models and the users/contacts
//! convenience helpers the API suites are written against.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod auth;
pub mod client;
pub mod config;
pub mod contacts;
pub mod error;
pub mod models;
pub mod users;

pub use auth::{AuthSession, bearer_header, with_session};
pub use client::{ApiClient, ExtraHeaders, RequestParams};
pub use config::ApiConfig;
pub use contacts::{ContactsApi, FULL_CONTACT_FIELDS};
pub use error::{ApiError, ApiResult};
pub use models::{Contact, ContactPayload, LoginResponse, User, UserPayload, ValidationErrorBody};
pub use users::UsersApi;
