//! UI-surface page objects for the contact-management application.
//!
//! Wraps a headless-Chrome handle (chromiumoxide over the DevTools
//! protocol) with per-page locator tables and page objects: navigation,
//! page-shape assertions, form interaction and rendered-text read-back.
//!
//! Layout:
//! - [`browser`]: browser process lifecycle
//! - [`wait`]: fixed-timeout polling for readiness
//! - [`locators`]: route and CSS selector tables per page
//! - [`pages`]: one object per application page

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod browser;
pub mod error;
pub mod locators;
pub mod pages;
pub mod wait;

pub use browser::{TestBrowser, TestBrowserConfig};
pub use error::{UiError, UiResult};
pub use locators::ContactField;
pub use pages::{
    AddNewContactPage, ContactDetailsPage, ContactForm, ContactListPage, EditContactPage,
    LoginPage, PageHandle, RegisterPage,
};
pub use wait::{DEFAULT_POLL_INTERVAL, DEFAULT_TIMEOUT, WaitConfig};
