//! The edit-contact page.

use tracing::info;

use crate::error::UiResult;
use crate::locators::{ContactField, edit_contact};
use crate::pages::base::PageHandle;

/// Page object for the edit-contact page.
pub struct EditContactPage {
    handle: PageHandle,
    base_url: String,
}

impl EditContactPage {
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
        format!("{}{}", self.base_url, edit_contact::ROUTE)
    }

    /// Assert the browser shows the edit-contact page: URL and the edit
    /// form.
    ///
    /// # Errors
    ///
    /// Fails when any part of the page shape is missing.
    pub async fn assert_edit_contact_page(&self) -> UiResult<()> {
        info!("check edit contact page shape");
        self.handle.assert_url(&self.url()).await?;
        self.handle.require_element(edit_contact::FORM).await
    }

    /// Log out via the page's logout button.
    ///
    /// # Errors
    ///
    /// Fails when the button is missing or cannot be clicked.
    pub async fn logout(&self) -> UiResult<()> {
        info!("logout from edit contact page");
        self.handle.click(edit_contact::LOGOUT).await
    }

    /// Return to the details page via the cancel button.
    ///
    /// # Errors
    ///
    /// Fails when the button is missing or cannot be clicked.
    pub async fn return_to_contact_details(&self) -> UiResult<()> {
        info!("return to contact details from edit contact page");
        self.handle.click(edit_contact::CANCEL).await
    }

    /// Replace one field's value and submit the form.
    ///
    /// The field is blanked first and the read-back awaited, since the form
    /// pre-fills asynchronously and typing into a half-filled field would
    /// concatenate.
    ///
    /// # Errors
    ///
    /// Fails when the field is missing, never clears, or cannot be driven.
    pub async fn edit_contact(&self, field: ContactField, data: &str) -> UiResult<()> {
        info!(selector = field.selector(), data, "edit contact field");

        let selector = field.selector();
        self.handle.wait_for_element(selector).await?;
        self.handle.clear(selector).await?;
        self.handle.wait_for_input_cleared(selector).await?;
        self.handle.fill(selector, data).await?;

        self.handle.click(edit_contact::SUBMIT).await
    }

    /// The underlying tab handle.
    #[must_use]
    pub const fn handle(&self) -> &PageHandle {
        &self.handle
    }
}
