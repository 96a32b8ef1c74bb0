//! The login page.

use tracing::info;

use crate::error::UiResult;
use crate::locators::login;
use crate::pages::base::PageHandle;

/// Page object for the login page.
pub struct LoginPage {
    handle: PageHandle,
    base_url: String,
}

impl LoginPage {
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
        format!("{}{}", self.base_url, login::ROUTE)
    }

    /// Navigate to the page.
    ///
    /// # Errors
    ///
    /// Fails when navigation fails.
    pub async fn open(&self) -> UiResult<()> {
        self.handle.open(&self.url()).await
    }

    /// Assert the browser shows the login page: URL, login form and the
    /// sign-up button.
    ///
    /// # Errors
    ///
    /// Fails when any part of the page shape is missing.
    pub async fn assert_login_page(&self) -> UiResult<()> {
        info!("check login page shape");
        self.handle.assert_url(&self.url()).await?;
        self.handle.require_element(login::FORM).await?;
        self.handle.require_element(login::SIGN_UP_BUTTON).await?;
        Ok(())
    }

    /// Fill the credentials and submit the login form.
    ///
    /// # Errors
    ///
    /// Fails when a form element is missing or cannot be driven.
    pub async fn login(&self, email: &str, password: &str) -> UiResult<()> {
        info!("starting login");
        self.handle.fill(login::EMAIL, email).await?;
        self.handle.fill(login::PASSWORD, password).await?;
        self.handle.click(login::SUBMIT).await
    }

    /// Follow the sign-up button to the register page.
    ///
    /// # Errors
    ///
    /// Fails when the button is missing or cannot be clicked.
    pub async fn go_to_register_page(&self) -> UiResult<()> {
        info!("go to register page");
        self.handle.click(login::SIGN_UP_BUTTON).await
    }

    /// The underlying tab handle.
    #[must_use]
    pub const fn handle(&self) -> &PageHandle {
        &self.handle
    }
}
