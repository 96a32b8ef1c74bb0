//! The contact details page.

use std::time::Duration;

use tracing::info;

use crate::error::UiResult;
use crate::locators::{ContactField, contact_details};
use crate::pages::base::PageHandle;
use crate::wait::{WaitConfig, poll_until};

/// Page object for the contact details page.
pub struct ContactDetailsPage {
    handle: PageHandle,
    base_url: String,
}

impl ContactDetailsPage {
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
        format!("{}{}", self.base_url, contact_details::ROUTE)
    }

    /// Assert the browser shows the contact details page: URL and the
    /// details form.
    ///
    /// # Errors
    ///
    /// Fails when any part of the page shape is missing.
    pub async fn assert_contact_details_page(&self) -> UiResult<()> {
        info!("check contact details page shape");
        self.handle.assert_url(&self.url()).await?;
        self.handle.require_element(contact_details::FORM).await
    }

    /// Log out via the page's logout button.
    ///
    /// # Errors
    ///
    /// Fails when the button is missing or cannot be clicked.
    pub async fn logout(&self) -> UiResult<()> {
        info!("logout");
        self.handle.click(contact_details::LOGOUT).await
    }

    /// Return to the contact list.
    ///
    /// # Errors
    ///
    /// Fails when the button is missing or cannot be clicked.
    pub async fn return_to_contact_list(&self) -> UiResult<()> {
        info!("return to contact list");
        self.handle.click(contact_details::RETURN).await
    }

    /// Delete the shown contact, accepting the confirm dialog.
    ///
    /// # Errors
    ///
    /// Fails when the button is missing or cannot be clicked.
    pub async fn delete_contact(&self) -> UiResult<()> {
        info!("deleting contact");
        self.handle.accept_next_dialog().await?;
        self.handle.click(contact_details::DELETE).await
    }

    /// Follow the edit button to the edit-contact page.
    ///
    /// # Errors
    ///
    /// Fails when the button is missing or cannot be clicked.
    pub async fn go_to_edit_contact_page(&self) -> UiResult<()> {
        info!("go to edit contact page");
        self.handle.click(contact_details::EDIT).await
    }

    /// Read a field's rendered value.
    ///
    /// The page fills its fields asynchronously after load, so the read
    /// polls briefly for a non-empty value and then takes whatever is
    /// rendered; a field can legitimately stay empty.
    ///
    /// # Errors
    ///
    /// Fails when the field element never appears.
    pub async fn field(&self, field: ContactField) -> UiResult<String> {
        info!(selector = field.selector(), "get info from field");

        let selector = field.selector();
        self.handle.wait_for_element(selector).await?;

        let settle = WaitConfig::default()
            .with_timeout(Duration::from_secs(3))
            .with_poll_interval(Duration::from_millis(200));
        let _ = poll_until(&settle, selector, || async move {
            self.handle
                .visible_text(selector)
                .await
                .is_ok_and(|text| !text.is_empty())
        })
        .await;

        self.handle.visible_text(selector).await
    }

    /// The underlying tab handle.
    #[must_use]
    pub const fn handle(&self) -> &PageHandle {
        &self.handle
    }
}
