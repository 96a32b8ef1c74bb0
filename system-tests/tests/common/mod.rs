//! Shared setup for the live suites.
//!
//! Every test owns its own client, session and (for UI suites) browser;
//! nothing here is shared across tests.

#![allow(dead_code)]

use contact_api::{ApiClient, Contact, ContactPayload};
use contact_ui::{ContactForm, ContactListPage, LoginPage, PageHandle, TestBrowser, TestBrowserConfig};
use harness_common::{TracingConfig, init_tracing};
use test_utils::fakes;

/// Initialize tracing for a test. Safe to call repeatedly.
pub fn init() {
    init_tracing(&TracingConfig::default().with_service_name("system-tests"));
}

/// Base URL of the deployment under test.
pub fn base_url() -> String {
    harness_common::base_url_from_env().expect("CONTACT_ENV must name a configured deployment")
}

/// API client configured from the environment.
pub fn api_client() -> ApiClient {
    init();
    ApiClient::from_env().expect("failed to build the API client from the environment")
}

/// Account credentials for UI login.
pub fn credentials() -> (String, String) {
    let email = std::env::var(contact_api::config::EMAIL_VAR)
        .expect("CONTACT_EMAIL must be set for live suites");
    let password = std::env::var(contact_api::config::PASSWORD_VAR)
        .expect("CONTACT_PASSWORD must be set for live suites");
    (email, password)
}

/// Launch a headless browser for one test.
pub async fn launch_browser() -> TestBrowser {
    init();
    TestBrowser::launch(&TestBrowserConfig::default())
        .await
        .expect("failed to launch the browser")
}

/// Sign in through the login page and wait for the contact list.
///
/// Returns the tab handle, parked on the contact list page.
pub async fn sign_in(browser: &TestBrowser, base_url: &str) -> PageHandle {
    let (email, password) = credentials();
    let handle = browser.new_page().await.expect("failed to open a page");

    let login_page = LoginPage::new(handle.clone(), base_url);
    login_page.open().await.expect("failed to open the login page");
    login_page
        .login(&email, &password)
        .await
        .expect("failed to drive the login form");

    handle
        .wait_for_url(&format!("{base_url}contactList"))
        .await
        .expect("login did not land on the contact list");
    handle
}

/// Randomized values for the add-contact form.
pub fn fake_contact_form() -> ContactForm {
    ContactForm {
        first_name: fakes::first_name(),
        last_name: fakes::last_name(),
        birthdate: fakes::birthdate(),
        email: fakes::email(),
        phone: fakes::phone_number(),
        street1: fakes::street_name(),
        city: fakes::city(),
        state_province: fakes::state(),
        postal_code: fakes::postal_code(),
        country: fakes::country(),
    }
}

/// Sign in, create a contact through the UI and open its details page.
///
/// Returns the tab handle, parked on the details page, plus the submitted
/// form values.
pub async fn create_contact_via_ui(browser: &TestBrowser, base_url: &str) -> (PageHandle, ContactForm) {
    let handle = sign_in(browser, base_url).await;

    let add_page = contact_ui::AddNewContactPage::new(handle.clone(), base_url);
    add_page.open().await.expect("failed to open the add-contact page");

    let form = fake_contact_form();
    add_page
        .add_new_contact(&form)
        .await
        .expect("failed to submit the add-contact form");
    handle
        .wait_for_url(&format!("{base_url}contactList"))
        .await
        .expect("contact creation did not land on the contact list");

    let list_page = ContactListPage::new(handle.clone(), base_url);
    list_page
        .open_contact_details(&form.first_name, &form.last_name)
        .await
        .expect("created contact not found in the list");
    handle
        .wait_for_url(&format!("{base_url}contactDetails"))
        .await
        .expect("row click did not land on the details page");

    (handle, form)
}

/// Tracks contacts created over the API and deletes the survivors at the
/// end of a test.
pub struct ContactGuard<'a> {
    client: &'a ApiClient,
    ids: Vec<String>,
}

impl<'a> ContactGuard<'a> {
    /// Guard bound to a client.
    pub fn new(client: &'a ApiClient) -> Self {
        Self {
            client,
            ids: Vec::new(),
        }
    }

    /// Create a contact and remember it for cleanup.
    pub async fn create(&mut self) -> (Contact, ContactPayload) {
        let (contact, payload) = self
            .client
            .contacts()
            .create_contact()
            .await
            .expect("failed to create a contact");
        self.ids.push(contact.id.clone());
        (contact, payload)
    }

    /// Delete every tracked contact that still exists.
    pub async fn cleanup(self) {
        for id in &self.ids {
            let still_there = self
                .client
                .contacts()
                .get_contact_expecting(id, 200)
                .await
                .ok()
                .flatten()
                .is_some();
            if still_there {
                if let Err(err) = self.client.contacts().delete_contact(id).await {
                    tracing::warn!(contact_id = %id, error = %err, "cleanup delete failed");
                }
            }
        }
    }
}
