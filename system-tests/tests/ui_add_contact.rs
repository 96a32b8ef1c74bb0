//! Live UI tests for the add-contact page.

mod common;

use contact_ui::{AddNewContactPage, ContactDetailsPage, ContactListPage};

#[tokio::test]
#[ignore = "requires a live deployment, credentials and a local Chrome"]
async fn user_should_be_in_add_new_contact_page() {
    let base_url = common::base_url();
    let browser = common::launch_browser().await;

    common::sign_in(&browser, &base_url).await;
    let handle = browser.new_page().await.unwrap();
    let page = AddNewContactPage::new(handle, &base_url);
    page.open().await.unwrap();
    page.assert_add_new_contact_page().await.unwrap();

    browser.close().await.unwrap();
}

#[tokio::test]
#[ignore = "requires a live deployment, credentials and a local Chrome"]
async fn logout_from_add_new_contact_page() {
    let base_url = common::base_url();
    let browser = common::launch_browser().await;

    let handle = common::sign_in(&browser, &base_url).await;
    let page = AddNewContactPage::new(handle.clone(), &base_url);
    page.open().await.unwrap();
    page.logout().await.unwrap();

    handle.wait_for_url(&base_url).await.unwrap();

    browser.close().await.unwrap();
}

#[tokio::test]
#[ignore = "requires a live deployment, credentials and a local Chrome"]
async fn cancel_returns_to_the_contact_list() {
    let base_url = common::base_url();
    let browser = common::launch_browser().await;

    let handle = common::sign_in(&browser, &base_url).await;
    let page = AddNewContactPage::new(handle.clone(), &base_url);
    page.open().await.unwrap();
    page.cancel().await.unwrap();

    let list_page = ContactListPage::new(handle.clone(), &base_url);
    handle.wait_for_url(&list_page.url()).await.unwrap();
    list_page.assert_contact_list_page().await.unwrap();

    browser.close().await.unwrap();
}

#[tokio::test]
#[ignore = "requires a live deployment, credentials and a local Chrome"]
async fn add_new_contact_shows_up_in_the_list() {
    let base_url = common::base_url();
    let browser = common::launch_browser().await;

    let handle = common::sign_in(&browser, &base_url).await;
    let page = AddNewContactPage::new(handle.clone(), &base_url);
    page.open().await.unwrap();

    let form = common::fake_contact_form();
    page.add_new_contact(&form).await.unwrap();

    let list_page = ContactListPage::new(handle.clone(), &base_url);
    handle.wait_for_url(&list_page.url()).await.unwrap();
    list_page
        .assert_contact_listed(&form.first_name, &form.last_name)
        .await
        .unwrap();

    // Cleanup through the details page.
    list_page
        .open_contact_details(&form.first_name, &form.last_name)
        .await
        .unwrap();
    let details_page = ContactDetailsPage::new(handle.clone(), &base_url);
    handle.wait_for_url(&details_page.url()).await.unwrap();
    details_page.delete_contact().await.unwrap();

    browser.close().await.unwrap();
}
