mod common;

use axum::{Router, http::StatusCode, routing::post};
use axum_test::TestServer;
use common::{FakeContactList, TestState};
use opensourceprojects::api::handlers::subscribe_handler;
use opensourceprojects::state::AppState;
use serde_json::json;
use std::sync::Arc;

fn make_server(state: AppState) -> TestServer {
    let app = Router::new()
        .route("/api/subscribe", post(subscribe_handler))
        .with_state(state);
    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_subscribe_success() {
    let contacts = Arc::new(FakeContactList::accepting());
    let state = TestState {
        contacts: Some(contacts.clone()),
        ..Default::default()
    }
    .build();

    let response = make_server(state)
        .post("/api/subscribe")
        .json(&json!({ "email": "reader@example.com" }))
        .await;

    response.assert_status_ok();
    response.assert_json(&json!({ "message": "Subscription successful!" }));

    let contacts = contacts.contacts.lock().unwrap();
    assert_eq!(contacts.len(), 1);
    assert_eq!(contacts[0].email, "reader@example.com");
    assert_eq!(contacts[0].list_ids, vec![2]);
    assert!(contacts[0].update_enabled);
}

#[tokio::test]
async fn test_subscribe_invalid_email() {
    let contacts = Arc::new(FakeContactList::accepting());
    let state = TestState {
        contacts: Some(contacts.clone()),
        ..Default::default()
    }
    .build();
    let server = make_server(state);

    for body in [
        json!({ "email": "not-an-email" }),
        json!({ "email": "" }),
        json!({}),
    ] {
        let response = server.post("/api/subscribe").json(&body).await;

        response.assert_status_bad_request();
        response.assert_json(&json!({ "error": "Invalid email address" }));
    }

    assert!(contacts.contacts.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_subscribe_without_api_key() {
    let state = TestState {
        contacts: None,
        ..Default::default()
    }
    .build();

    let response = make_server(state)
        .post("/api/subscribe")
        .json(&json!({ "email": "reader@example.com" }))
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    response.assert_json(&json!({ "error": "Server configuration error" }));
}

#[tokio::test]
async fn test_invalid_email_reported_before_missing_key() {
    let state = TestState {
        contacts: None,
        ..Default::default()
    }
    .build();

    let response = make_server(state)
        .post("/api/subscribe")
        .json(&json!({ "email": "nope" }))
        .await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_subscribe_forwards_provider_status() {
    let state = TestState {
        contacts: Some(Arc::new(FakeContactList::rejecting(
            400,
            Some("Contact already exist"),
        ))),
        ..Default::default()
    }
    .build();

    let response = make_server(state)
        .post("/api/subscribe")
        .json(&json!({ "email": "reader@example.com" }))
        .await;

    response.assert_status_bad_request();
    response.assert_json(&json!({ "error": "Contact already exist" }));
}

#[tokio::test]
async fn test_subscribe_provider_without_message() {
    let state = TestState {
        contacts: Some(Arc::new(FakeContactList::rejecting(401, None))),
        ..Default::default()
    }
    .build();

    let response = make_server(state)
        .post("/api/subscribe")
        .json(&json!({ "email": "reader@example.com" }))
        .await;

    response.assert_status_unauthorized();
    response.assert_json(&json!({ "error": "Subscription failed" }));
}

#[tokio::test]
async fn test_subscribe_malformed_body() {
    let server = make_server(common::create_test_state());

    let response = server
        .post("/api/subscribe")
        .content_type("application/json")
        .text("{not json")
        .await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_subscribe_trims_padded_email() {
    let contacts = Arc::new(FakeContactList::accepting());
    let state = TestState {
        contacts: Some(contacts.clone()),
        ..Default::default()
    }
    .build();

    let response = make_server(state)
        .post("/api/subscribe")
        .json(&json!({ "email": "  a@b.com " }))
        .await;

    response.assert_status_ok();
    response.assert_json(&json!({ "message": "Subscription successful!" }));

    let contacts = contacts.contacts.lock().unwrap();
    assert_eq!(contacts.len(), 1);
    assert_eq!(contacts[0].email, "a@b.com");
}
