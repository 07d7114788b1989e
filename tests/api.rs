//! End-to-end tests against the router with the in-memory store: exercise
//! the full request path (routing, extraction, envelope) the way a client
//! would see it.

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

use crm_registry::{build_router, InMemoryDocumentStore, RecordService};

fn app() -> Router {
    let store = Arc::new(InMemoryDocumentStore::new());
    let service = Arc::new(RecordService::new(store));
    build_router(service)
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = match body {
        Some(body) => Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    };
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = serde_json::from_slice(&bytes).unwrap();
    (status, value)
}

#[tokio::test]
async fn account_crud_round_trip() {
    let app = app();

    let (status, body) = send(
        &app,
        Method::POST,
        "/accounts",
        Some(json!({"name": "Ada", "colorCode": "#336699"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["status"], 201);
    assert_eq!(body["message"], "Account created");
    assert_eq!(body["data"]["name"], "Ada");
    assert_eq!(body["data"]["colorCode"], "#336699");
    let id = body["data"]["id"].as_str().unwrap().to_string();
    assert_eq!(id.len(), 24);
    assert_ne!(id, "000000000000000000000000");

    let (status, body) = send(&app, Method::GET, &format!("/accounts/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "success");
    assert_eq!(body["data"]["id"], id.as_str());

    let (status, body) = send(&app, Method::GET, "/accounts", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().unwrap().len(), 1);

    let (status, body) = send(
        &app,
        Method::PUT,
        &format!("/accounts/{id}"),
        Some(json!({"name": "Grace"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Account updated");
    assert_eq!(body["data"]["name"], "Grace");
    // omitted patch field keeps its stored value
    assert_eq!(body["data"]["colorCode"], "#336699");

    let (status, body) = send(&app, Method::DELETE, &format!("/accounts/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Account deleted");
    assert_eq!(body["data"], json!({}));

    let (status, body) = send(&app, Method::GET, &format!("/accounts/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["status"], 404);
    assert_eq!(body["message"], "Account not found");
}

#[tokio::test]
async fn malformed_path_id_is_rejected() {
    let app = app();

    for uri in [
        "/accounts/not-hex",
        "/organizations/123",
        "/contacts/zzzzzzzzzzzzzzzzzzzzzzzz",
        "/reaction-icons/0123456789abcdef0123456789abcdef",
    ] {
        let (status, body) = send(&app, Method::GET, uri, None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
        assert_eq!(body["message"], "Invalid ID format", "{uri}");
        assert_eq!(body["data"], json!({}));
    }
}

#[tokio::test]
async fn organization_requires_existing_owner() {
    let app = app();

    let (status, body) = send(
        &app,
        Method::POST,
        "/organizations",
        Some(json!({"name": "Acme"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "owner_id is required");

    let (status, body) = send(
        &app,
        Method::POST,
        "/organizations",
        Some(json!({"name": "Acme", "owner_id": "0123456789abcdef01234567"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["message"],
        "owner_id does not reference an existing account"
    );

    // nothing was persisted by the rejected writes
    let (_, body) = send(&app, Method::GET, "/organizations", None).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn organization_create_update_cycle() {
    let app = app();

    let (_, body) = send(
        &app,
        Method::POST,
        "/accounts",
        Some(json!({"name": "Owner"})),
    )
    .await;
    let owner_id = body["data"]["id"].as_str().unwrap().to_string();

    let (status, body) = send(
        &app,
        Method::POST,
        "/organizations",
        Some(json!({"name": "Acme", "owner_id": owner_id, "status": 3})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "Organization created");
    let org_id = body["data"]["id"].as_str().unwrap().to_string();
    let created_date = body["data"]["created_date"].clone();
    // unsupplied optional refs were defaulted to fresh placeholder ids
    assert_ne!(body["data"]["icon_id"], "000000000000000000000000");
    assert_ne!(body["data"]["primary_contact_id"], "000000000000000000000000");

    let (status, body) = send(
        &app,
        Method::PUT,
        &format!("/organizations/{org_id}"),
        Some(json!({"name": "Acme Ltd", "owner_id": owner_id, "status": 7})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Organization updated");
    assert_eq!(body["data"]["name"], "Acme Ltd");
    assert_eq!(body["data"]["status"], 7);
    // id and created timestamp survive the replace
    assert_eq!(body["data"]["id"], org_id.as_str());
    assert_eq!(body["data"]["created_date"], created_date);
    // on update, unsupplied optional refs become the zero sentinel
    assert_eq!(body["data"]["icon_id"], "000000000000000000000000");

    let (status, body) = send(
        &app,
        Method::PUT,
        &format!("/organizations/{org_id}"),
        Some(json!({"name": "Acme", "owner_id": owner_id, "status": 12})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "status must be between 0 and 9");
}

#[tokio::test]
async fn update_of_missing_organization_is_not_found() {
    let app = app();

    let (_, body) = send(
        &app,
        Method::POST,
        "/accounts",
        Some(json!({"name": "Owner"})),
    )
    .await;
    let owner_id = body["data"]["id"].as_str().unwrap().to_string();

    let (status, body) = send(
        &app,
        Method::PUT,
        "/organizations/0123456789abcdef01234567",
        Some(json!({"name": "Ghost", "owner_id": owner_id})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Organization not found");
}

#[tokio::test]
async fn contact_requires_both_references() {
    let app = app();

    let (_, body) = send(
        &app,
        Method::POST,
        "/accounts",
        Some(json!({"name": "Owner"})),
    )
    .await;
    let owner_id = body["data"]["id"].as_str().unwrap().to_string();

    let (status, body) = send(
        &app,
        Method::POST,
        "/contacts",
        Some(json!({"name": "Bob", "owner_id": owner_id})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "organization_id is required");

    let (_, body) = send(
        &app,
        Method::POST,
        "/organizations",
        Some(json!({"name": "Acme", "owner_id": owner_id})),
    )
    .await;
    let org_id = body["data"]["id"].as_str().unwrap().to_string();

    let (status, body) = send(
        &app,
        Method::POST,
        "/contacts",
        Some(json!({
            "name": "Bob",
            "email": "bob@acme.example",
            "owner_id": owner_id,
            "organization_id": org_id
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "Contact created");
    assert_eq!(body["data"]["email"], "bob@acme.example");
}

#[tokio::test]
async fn reaction_icons_get_sequential_indices() {
    let app = app();

    for (n, glyph) in ["thumbs-up", "heart", "rocket"].iter().enumerate() {
        let (status, body) = send(
            &app,
            Method::POST,
            "/reaction-icons",
            Some(json!({"glyph": glyph, "display_name": glyph})),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["data"]["icon_index"], (n as u64) + 1);
    }
}

#[tokio::test]
async fn malformed_body_is_a_bad_request() {
    let app = app();

    let request = Request::builder()
        .method(Method::POST)
        .uri("/accounts")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["status"], 400);
    assert_eq!(body["data"], json!({}));
}

#[tokio::test]
async fn client_supplied_id_is_ignored_on_create() {
    let app = app();

    let forged = "aaaaaaaaaaaaaaaaaaaaaaaa";
    let (status, body) = send(
        &app,
        Method::POST,
        "/accounts",
        Some(json!({"id": forged, "name": "Mallory"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_ne!(body["data"]["id"], forged);
}
