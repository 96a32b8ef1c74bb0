//! Live UI tests for the register page.

mod common;

use contact_ui::{LoginPage, RegisterPage};
use test_utils::fakes;

#[tokio::test]
#[ignore = "requires a live deployment and a local Chrome"]
async fn user_should_be_in_register_page() {
    let base_url = common::base_url();
    let browser = common::launch_browser().await;

    let handle = browser.new_page().await.unwrap();
    let page = RegisterPage::new(handle, &base_url);
    page.open().await.unwrap();
    page.assert_register_page().await.unwrap();

    browser.close().await.unwrap();
}

#[tokio::test]
#[ignore = "requires a live deployment and a local Chrome"]
async fn register_new_user_lands_on_the_contact_list() {
    let base_url = common::base_url();
    let browser = common::launch_browser().await;

    let handle = browser.new_page().await.unwrap();
    let page = RegisterPage::new(handle.clone(), &base_url);
    page.open().await.unwrap();

    page.register_new_user(
        &fakes::first_name(),
        &fakes::last_name(),
        &fakes::email(),
        &fakes::password(),
    )
    .await
    .unwrap();

    handle
        .wait_for_url(&format!("{base_url}contactList"))
        .await
        .unwrap();

    browser.close().await.unwrap();
}

#[tokio::test]
#[ignore = "requires a live deployment and a local Chrome"]
async fn register_with_short_password_shows_a_validation_error() {
    let base_url = common::base_url();
    let browser = common::launch_browser().await;

    let handle = browser.new_page().await.unwrap();
    let page = RegisterPage::new(handle, &base_url);
    page.open().await.unwrap();

    let password = fakes::password();
    let short_password = &password[..4];
    page.register_new_user(
        &fakes::first_name(),
        &fakes::last_name(),
        &fakes::email(),
        short_password,
    )
    .await
    .unwrap();

    page.assert_validation_error().await.unwrap();

    browser.close().await.unwrap();
}

#[tokio::test]
#[ignore = "requires a live deployment and a local Chrome"]
async fn cancel_returns_to_the_login_page() {
    let base_url = common::base_url();
    let browser = common::launch_browser().await;

    let handle = browser.new_page().await.unwrap();
    let page = RegisterPage::new(handle.clone(), &base_url);
    page.open().await.unwrap();
    page.cancel().await.unwrap();

    let login_page = LoginPage::new(handle.clone(), &base_url);
    handle.wait_for_url(&login_page.url()).await.unwrap();
    login_page.assert_login_page().await.unwrap();

    browser.close().await.unwrap();
}
