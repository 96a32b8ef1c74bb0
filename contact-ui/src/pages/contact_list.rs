//! The contact list page.

use tracing::info;

use crate::error::{UiError, UiResult};
use crate::locators::contact_list;
use crate::pages::base::PageHandle;

/// Page object for the contact list page.
pub struct ContactListPage {
    handle: PageHandle,
    base_url: String,
}

impl ContactListPage {
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
        format!("{}{}", self.base_url, contact_list::ROUTE)
    }

    /// Navigate to the page.
    ///
    /// # Errors
    ///
    /// Fails when navigation fails.
    pub async fn open(&self) -> UiResult<()> {
        self.handle.open(&self.url()).await
    }

    /// Assert the browser shows the contact list page: URL, the add-contact
    /// button and the contact table.
    ///
    /// # Errors
    ///
    /// Fails when any part of the page shape is missing.
    pub async fn assert_contact_list_page(&self) -> UiResult<()> {
        info!("check contact list page shape");
        self.handle.assert_url(&self.url()).await?;
        self.handle
            .require_element(contact_list::ADD_CONTACT_BUTTON)
            .await?;
        self.handle.require_element(contact_list::TABLE).await
    }

    /// Log out via the page's logout button.
    ///
    /// # Errors
    ///
    /// Fails when the button is missing or cannot be clicked.
    pub async fn logout(&self) -> UiResult<()> {
        info!("logout");
        self.handle.click(contact_list::LOGOUT).await
    }

    /// Follow the add-contact button.
    ///
    /// # Errors
    ///
    /// Fails when the button is missing or cannot be clicked.
    pub async fn go_to_add_new_contact(&self) -> UiResult<()> {
        info!("go to add new contact page");
        self.handle.click(contact_list::ADD_CONTACT_BUTTON).await
    }

    /// Full names of every listed contact, in table order.
    ///
    /// # Errors
    ///
    /// Fails when a row's text cannot be read.
    pub async fn full_names(&self) -> UiResult<Vec<String>> {
        self.handle.find_all_text(contact_list::ROW_FULL_NAMES).await
    }

    /// Assert a contact with the given name is listed.
    ///
    /// # Errors
    ///
    /// Fails when the name is absent from the table.
    pub async fn assert_contact_listed(&self, first_name: &str, last_name: &str) -> UiResult<()> {
        info!(first_name, last_name, "find contact by full name");
        let full_name = format!("{first_name} {last_name}");
        if self.full_names().await?.contains(&full_name) {
            Ok(())
        } else {
            Err(UiError::MissingText(format!(
                "{full_name} not in the contact list"
            )))
        }
    }

    /// Assert no contact with the given name is listed.
    ///
    /// # Errors
    ///
    /// Fails when the name is still present in the table.
    pub async fn assert_contact_not_listed(
        &self,
        first_name: &str,
        last_name: &str,
    ) -> UiResult<()> {
        let full_name = format!("{first_name} {last_name}");
        if self.full_names().await?.contains(&full_name) {
            Err(UiError::MissingText(format!(
                "{full_name} still in the contact list"
            )))
        } else {
            Ok(())
        }
    }

    /// Open the details page of the contact with the given name by clicking
    /// its row.
    ///
    /// # Errors
    ///
    /// Fails when no row carries the name.
    pub async fn open_contact_details(&self, first_name: &str, last_name: &str) -> UiResult<()> {
        info!(first_name, last_name, "go to contact details by full name");
        let full_name = format!("{first_name} {last_name}");

        let elements = self
            .handle
            .inner()
            .find_elements(contact_list::ROW_FULL_NAMES)
            .await
            .unwrap_or_default();
        for element in &elements {
            if element.inner_text().await?.unwrap_or_default() == full_name {
                element.click().await?;
                return Ok(());
            }
        }
        Err(UiError::MissingText(format!(
            "{full_name} not in the contact list"
        )))
    }

    /// Full name of the first listed contact, if any.
    ///
    /// # Errors
    ///
    /// Fails when the row's text cannot be read.
    pub async fn first_contact_name(&self) -> UiResult<Option<String>> {
        if self.handle.is_element_present(contact_list::FIRST_ROW).await {
            let name = self.handle.visible_text(contact_list::FIRST_ROW).await?;
            Ok(Some(name))
        } else {
            info!("no contacts");
            Ok(None)
        }
    }

    /// Open the details page of the first listed contact. Reports whether a
    /// contact was there to open.
    ///
    /// # Errors
    ///
    /// Fails when the row cannot be clicked.
    pub async fn open_first_contact(&self) -> UiResult<bool> {
        if self.handle.is_element_present(contact_list::FIRST_ROW).await {
            self.handle.click(contact_list::FIRST_ROW).await?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// The underlying tab handle.
    #[must_use]
    pub const fn handle(&self) -> &PageHandle {
        &self.handle
    }
}
