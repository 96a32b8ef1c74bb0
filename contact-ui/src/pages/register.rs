//! The register page.

use tracing::info;

use crate::error::{UiError, UiResult};
use crate::locators::register;
use crate::pages::base::PageHandle;

/// Page object for the register page.
pub struct RegisterPage {
    handle: PageHandle,
    base_url: String,
}

impl RegisterPage {
    /// Bind the page object to a tab and deployment base URL.
    #[must_use]
    pub fn new(handle: PageHandle, base_url: impl Into<String>) -> Self {
        Self {
            handle,
            base_url: base_url.into(),
        }
    }

    /// The page's full URL.
    #[must_use]
    pub fn url(&self) -> String {
        format!("{}{}", self.base_url, register::ROUTE)
    }

    /// Navigate to the page.
    ///
    /// # Errors
    ///
    /// Fails when navigation fails.
    pub async fn open(&self) -> UiResult<()> {
        self.handle.open(&self.url()).await
    }

    /// Assert the browser shows the register page: URL and the registration
    /// form.
    ///
    /// # Errors
    ///
    /// Fails when any part of the page shape is missing.
    pub async fn assert_register_page(&self) -> UiResult<()> {
        info!("check register page shape");
        self.handle.assert_url(&self.url()).await?;
        self.handle.require_element(register::FORM).await
    }

    /// Fill the registration form and submit it.
    ///
    /// # Errors
    ///
    /// Fails when a form element is missing or cannot be driven.
    pub async fn register_new_user(
        &self,
        first_name: &str,
        last_name: &str,
        email: &str,
        password: &str,
    ) -> UiResult<()> {
        info!(first_name, last_name, "starting register new user");
        self.handle.fill(register::FIRST_NAME, first_name).await?;
        self.handle.fill(register::LAST_NAME, last_name).await?;
        self.handle.fill(register::EMAIL, email).await?;
        self.handle.fill(register::PASSWORD, password).await?;
        self.handle.click(register::SUBMIT).await
    }

    /// Assert the validation error notification is shown.
    ///
    /// # Errors
    ///
    /// Fails when no notification appears or it carries another message.
    pub async fn assert_validation_error(&self) -> UiResult<()> {
        info!("check validation error notification");
        let text = self.handle.visible_text(register::ERROR_NOTIFICATION).await?;
        if text.starts_with("User validation failed") {
            Ok(())
        } else {
            Err(UiError::MissingText(format!(
                "{} did not carry a validation failure, got: {text}",
                register::ERROR_NOTIFICATION
            )))
        }
    }

    /// Leave the page via the cancel button.
    ///
    /// # Errors
    ///
    /// Fails when the button is missing or cannot be clicked.
    pub async fn cancel(&self) -> UiResult<()> {
        info!("cancel from register page");
        self.handle.click(register::CANCEL).await
    }

    /// The underlying tab handle.
    #[must_use]
    pub const fn handle(&self) -> &PageHandle {
        &self.handle
    }
}
