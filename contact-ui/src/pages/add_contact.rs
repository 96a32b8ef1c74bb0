//! The add-contact page.

use tracing::info;

use crate::error::UiResult;
use crate::locators::{ContactField, add_contact};
use crate::pages::base::PageHandle;

/// Values for the add-contact form.
///
/// The form exposes ten inputs; the second street line only exists on the
/// edit page.
#[derive(Debug, Clone)]
pub struct ContactForm {
    /// First name
    pub first_name: String,
    /// Last name
    pub last_name: String,
    /// Birthdate, `YYYY-MM-DD`
    pub birthdate: String,
    /// Email address
    pub email: String,
    /// Phone number
    pub phone: String,
    /// Street address
    pub street1: String,
    /// City
    pub city: String,
    /// State or province
    pub state_province: String,
    /// Postal code
    pub postal_code: String,
    /// Country
    pub country: String,
}

/// Page object for the add-contact page.
pub struct AddNewContactPage {
    handle: PageHandle,
    base_url: String,
}

impl AddNewContactPage {
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
        format!("{}{}", self.base_url, add_contact::ROUTE)
    }

    /// Navigate to the page.
    ///
    /// # Errors
    ///
    /// Fails when navigation fails.
    pub async fn open(&self) -> UiResult<()> {
        self.handle.open(&self.url()).await
    }

    /// Assert the browser shows the add-contact page: URL and the form.
    ///
    /// # Errors
    ///
    /// Fails when any part of the page shape is missing.
    pub async fn assert_add_new_contact_page(&self) -> UiResult<()> {
        info!("check add new contact page shape");
        self.handle.assert_url(&self.url()).await?;
        self.handle.require_element(add_contact::FORM).await
    }

    /// Fill the form with the given values and submit it.
    ///
    /// # Errors
    ///
    /// Fails when a form element is missing or cannot be driven.
    pub async fn add_new_contact(&self, form: &ContactForm) -> UiResult<()> {
        info!(
            first_name = %form.first_name,
            last_name = %form.last_name,
            "add new contact"
        );

        let fields = [
            (ContactField::FirstName, form.first_name.as_str()),
            (ContactField::LastName, form.last_name.as_str()),
            (ContactField::Birthdate, form.birthdate.as_str()),
            (ContactField::Email, form.email.as_str()),
            (ContactField::Phone, form.phone.as_str()),
            (ContactField::Street1, form.street1.as_str()),
            (ContactField::City, form.city.as_str()),
            (ContactField::StateProvince, form.state_province.as_str()),
            (ContactField::PostalCode, form.postal_code.as_str()),
            (ContactField::Country, form.country.as_str()),
        ];
        for (field, value) in fields {
            self.handle.fill(field.selector(), value).await?;
        }

        self.handle.click(add_contact::SUBMIT).await
    }

    /// Leave the page via the cancel button, waiting for it to be ready.
    ///
    /// # Errors
    ///
    /// Fails when the button never appears or cannot be clicked.
    pub async fn cancel(&self) -> UiResult<()> {
        info!("cancel from add new contact page");
        self.handle.wait_for_element(add_contact::CANCEL).await?;
        self.handle.click(add_contact::CANCEL).await
    }

    /// Log out via the page's logout button.
    ///
    /// # Errors
    ///
    /// Fails when the button is missing or cannot be clicked.
    pub async fn logout(&self) -> UiResult<()> {
        info!("logout");
        self.handle.click(add_contact::LOGOUT).await
    }

    /// The underlying tab handle.
    #[must_use]
    pub const fn handle(&self) -> &PageHandle {
        &self.handle
    }
}
