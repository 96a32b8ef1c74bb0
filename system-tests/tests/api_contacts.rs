//! Live API tests for contact management.

mod common;

use common::ContactGuard;
use contact_api::{RequestParams, ValidationErrorBody};
use serde_json::json;
use test_utils::{fakes, fixtures};

#[tokio::test]
#[ignore = "requires a live deployment and CONTACT_EMAIL/CONTACT_PASSWORD"]
async fn add_contact_reflects_the_submitted_payload() {
    let client = common::api_client();
    let mut guard = ContactGuard::new(&client);

    let (contact, payload) = guard.create().await;
    assert_eq!(
        contact.last_name, payload.last_name,
        "last name from response and from payload differ"
    );

    guard.cleanup().await;
}

#[tokio::test]
#[ignore = "requires a live deployment and CONTACT_EMAIL/CONTACT_PASSWORD"]
async fn add_contact_without_mandatory_data_is_rejected() {
    let client = common::api_client();

    let body = client
        .post(
            RequestParams::new("contacts")
                .with_payload(fixtures::contact_missing_names())
                .expect_status(400),
        )
        .await
        .unwrap()
        .expect("validation failure should carry a body");
    let error: ValidationErrorBody = serde_json::from_value(body).unwrap();
    assert_eq!(error.summary.as_deref(), Some("Contact validation failed"));
}

#[tokio::test]
#[ignore = "requires a live deployment and CONTACT_EMAIL/CONTACT_PASSWORD"]
async fn add_contact_with_wrong_phone_number_is_rejected() {
    let client = common::api_client();

    let body = client
        .post(
            RequestParams::new("contacts")
                .with_payload(fixtures::contact_non_numeric_phone())
                .expect_status(400),
        )
        .await
        .unwrap()
        .expect("validation failure should carry a body");
    let error: ValidationErrorBody = serde_json::from_value(body).unwrap();
    assert_eq!(
        error.message.as_deref(),
        Some("Contact validation failed: phone: Phone number is invalid")
    );
}

#[tokio::test]
#[ignore = "requires a live deployment and CONTACT_EMAIL/CONTACT_PASSWORD"]
async fn get_contacts_lists_a_created_contact() {
    let client = common::api_client();
    let mut guard = ContactGuard::new(&client);

    let (contact, _) = guard.create().await;
    let contacts = client.contacts().get_contacts().await.unwrap();
    assert!(!contacts.is_empty(), "contacts list is empty");
    assert!(
        contacts.iter().any(|c| c.id == contact.id),
        "created contact is not listed"
    );

    guard.cleanup().await;
}

#[tokio::test]
#[ignore = "requires a live deployment and CONTACT_EMAIL/CONTACT_PASSWORD"]
async fn created_contact_round_trips_by_id() {
    let client = common::api_client();
    let mut guard = ContactGuard::new(&client);

    let (created, payload) = guard.create().await;
    let fetched = client.contacts().get_contact(&created.id).await.unwrap();

    assert_eq!(fetched.id, created.id);
    assert_eq!(fetched.first_name, payload.first_name);
    assert_eq!(fetched.last_name, payload.last_name);
    assert_eq!(fetched.birthdate.as_deref(), Some(payload.birthdate.as_str()));
    assert_eq!(fetched.email.as_deref(), Some(payload.email.as_str()));
    assert_eq!(fetched.phone.as_deref(), Some(payload.phone.as_str()));
    assert_eq!(fetched.street1.as_deref(), Some(payload.street1.as_str()));
    assert_eq!(fetched.street2.as_deref(), Some(payload.street2.as_str()));
    assert_eq!(fetched.city.as_deref(), Some(payload.city.as_str()));
    assert_eq!(
        fetched.state_province.as_deref(),
        Some(payload.state_province.as_str())
    );
    assert_eq!(
        fetched.postal_code.as_deref(),
        Some(payload.postal_code.as_str())
    );
    assert_eq!(fetched.country.as_deref(), Some(payload.country.as_str()));

    guard.cleanup().await;
}

#[tokio::test]
#[ignore = "requires a live deployment and CONTACT_EMAIL/CONTACT_PASSWORD"]
async fn deleted_contact_answers_404_with_empty_body() {
    let client = common::api_client();
    let mut guard = ContactGuard::new(&client);

    let (contact, _) = guard.create().await;
    client.contacts().delete_contact(&contact.id).await.unwrap();

    let body = client
        .contacts()
        .get_contact_expecting(&contact.id, 404)
        .await
        .unwrap();
    assert!(body.is_none(), "response is not empty");

    guard.cleanup().await;
}

#[tokio::test]
#[ignore = "requires a live deployment and CONTACT_EMAIL/CONTACT_PASSWORD"]
async fn full_update_replaces_the_record() {
    let client = common::api_client();
    let mut guard = ContactGuard::new(&client);

    let (contact, payload) = guard.create().await;

    let mut fields = payload.as_map().unwrap();
    let new_phone = fakes::phone_number();
    let new_street2 = fakes::street_name();
    let new_postal_code = fakes::postal_code();
    fields.insert("phone".to_string(), json!(new_phone));
    fields.insert("street2".to_string(), json!(new_street2));
    fields.insert("postalCode".to_string(), json!(new_postal_code));

    let updated = client.contacts().update(&contact.id, &fields).await.unwrap();
    assert_eq!(updated.id, contact.id);
    assert_eq!(updated.phone.as_deref(), Some(new_phone.as_str()));
    assert_eq!(updated.street2.as_deref(), Some(new_street2.as_str()));
    assert_eq!(updated.postal_code.as_deref(), Some(new_postal_code.as_str()));

    guard.cleanup().await;
}

#[tokio::test]
#[ignore = "requires a live deployment and CONTACT_EMAIL/CONTACT_PASSWORD"]
async fn full_update_of_a_deleted_contact_answers_404() {
    let client = common::api_client();
    let mut guard = ContactGuard::new(&client);

    let (contact, payload) = guard.create().await;
    client.contacts().delete_contact(&contact.id).await.unwrap();

    let fields = payload.as_map().unwrap();
    let body = client
        .contacts()
        .update_expecting(&contact.id, &fields, 404)
        .await
        .unwrap();
    assert!(body.is_none(), "response is not empty");

    guard.cleanup().await;
}

#[tokio::test]
#[ignore = "requires a live deployment and CONTACT_EMAIL/CONTACT_PASSWORD"]
async fn full_update_with_wrong_data_is_rejected() {
    let client = common::api_client();
    let mut guard = ContactGuard::new(&client);

    let (contact, payload) = guard.create().await;

    let mut fields = payload.as_map().unwrap();
    fields.insert("phone".to_string(), json!("No Phone number"));
    fields.insert("postalCode".to_string(), json!("No postal code"));

    let body = client
        .contacts()
        .update_expecting(&contact.id, &fields, 400)
        .await
        .unwrap()
        .expect("validation failure should carry a body");
    let error: ValidationErrorBody = serde_json::from_value(body).unwrap();
    let message = error.message.unwrap_or_default();
    assert!(
        message.starts_with("Validation failed"),
        "unexpected message: {message}"
    );
    assert!(message.contains("Phone number is invalid"));
    assert!(message.contains("postalCode"));

    guard.cleanup().await;
}

#[tokio::test]
#[ignore = "requires a live deployment and CONTACT_EMAIL/CONTACT_PASSWORD"]
async fn partial_update_of_last_name() {
    let client = common::api_client();
    let mut guard = ContactGuard::new(&client);

    let (contact, _) = guard.create().await;
    let new_last_name = fakes::last_name();
    let fields = json!({"lastName": new_last_name})
        .as_object()
        .unwrap()
        .clone();

    let updated = client.contacts().update(&contact.id, &fields).await.unwrap();
    assert_eq!(updated.id, contact.id);
    assert_eq!(updated.last_name, new_last_name);

    guard.cleanup().await;
}

#[tokio::test]
#[ignore = "requires a live deployment and CONTACT_EMAIL/CONTACT_PASSWORD"]
async fn partial_update_of_email() {
    let client = common::api_client();
    let mut guard = ContactGuard::new(&client);

    let (contact, _) = guard.create().await;
    let new_email = fakes::email().to_lowercase();
    let fields = json!({"email": new_email}).as_object().unwrap().clone();

    let updated = client.contacts().update(&contact.id, &fields).await.unwrap();
    assert_eq!(updated.id, contact.id);
    assert_eq!(updated.email.as_deref(), Some(new_email.as_str()));

    guard.cleanup().await;
}

#[tokio::test]
#[ignore = "requires a live deployment and CONTACT_EMAIL/CONTACT_PASSWORD"]
async fn partial_update_of_first_name_and_postal_code_together() {
    let client = common::api_client();
    let mut guard = ContactGuard::new(&client);

    let (contact, _) = guard.create().await;
    let new_first_name = fakes::first_name();
    let new_postal_code = fakes::postal_code();
    let fields = json!({
        "firstName": new_first_name,
        "postalCode": new_postal_code,
    })
    .as_object()
    .unwrap()
    .clone();

    let updated = client.contacts().update(&contact.id, &fields).await.unwrap();
    assert_eq!(updated.id, contact.id);
    assert_eq!(updated.first_name, new_first_name);
    assert_eq!(updated.postal_code.as_deref(), Some(new_postal_code.as_str()));

    guard.cleanup().await;
}

#[tokio::test]
#[ignore = "requires a live deployment and CONTACT_EMAIL/CONTACT_PASSWORD"]
async fn partial_update_with_wrong_phone_is_rejected() {
    let client = common::api_client();
    let mut guard = ContactGuard::new(&client);

    let (contact, _) = guard.create().await;

    for phone in [json!("No Phone"), json!(12_345_678_901_234_567_890_u64)] {
        let fields = json!({"phone": phone}).as_object().unwrap().clone();
        let body = client
            .contacts()
            .update_expecting(&contact.id, &fields, 400)
            .await
            .unwrap()
            .expect("validation failure should carry a body");
        let error: ValidationErrorBody = serde_json::from_value(body).unwrap();
        assert_eq!(error.summary.as_deref(), Some("Contact validation failed"));
    }

    guard.cleanup().await;
}
