//! Live UI tests for the login page.
//!
//! Run with `cargo test -p system-tests -- --ignored`; needs a deployed
//! instance, credentials and a local Chrome.

mod common;

use contact_ui::{LoginPage, RegisterPage};

#[tokio::test]
#[ignore = "requires a live deployment and a local Chrome"]
async fn user_should_be_in_login_page() {
    let base_url = common::base_url();
    let browser = common::launch_browser().await;

    let handle = browser.new_page().await.unwrap();
    let page = LoginPage::new(handle, &base_url);
    page.open().await.unwrap();
    page.assert_login_page().await.unwrap();

    browser.close().await.unwrap();
}

#[tokio::test]
#[ignore = "requires a live deployment, credentials and a local Chrome"]
async fn login_lands_on_the_contact_list() {
    let base_url = common::base_url();
    let browser = common::launch_browser().await;

    let handle = common::sign_in(&browser, &base_url).await;
    assert_eq!(
        handle.current_url().await.unwrap(),
        format!("{base_url}contactList"),
        "wrong URL after login"
    );

    browser.close().await.unwrap();
}

#[tokio::test]
#[ignore = "requires a live deployment and a local Chrome"]
async fn user_can_go_to_register_page() {
    let base_url = common::base_url();
    let browser = common::launch_browser().await;

    let handle = browser.new_page().await.unwrap();
    let login_page = LoginPage::new(handle.clone(), &base_url);
    login_page.open().await.unwrap();
    login_page.go_to_register_page().await.unwrap();

    let register_page = RegisterPage::new(handle.clone(), &base_url);
    handle.wait_for_url(&register_page.url()).await.unwrap();
    register_page.assert_register_page().await.unwrap();

    browser.close().await.unwrap();
}
