//! Contact endpoints.

use super::{envelope, parse_id, AppState};
use crate::domain::entities::Contact;
use crate::domain::errors::ValidationError;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::response::Response;
use axum::Json;
use serde_json::json;

fn body_or_reject(payload: Result<Json<Contact>, JsonRejection>) -> Result<Contact, Response> {
    match payload {
        Ok(Json(contact)) => Ok(contact),
        Err(rejection) => Err(envelope::failure(
            &ValidationError::MalformedPayload(rejection.body_text()).into(),
        )),
    }
}

pub async fn list(State(state): State<AppState>) -> Response {
    match state.service.list_contacts().await {
        Ok(contacts) => envelope::ok("success", contacts),
        Err(err) => envelope::failure(&err),
    }
}

pub async fn fetch(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let id = match parse_id(&id) {
        Ok(id) => id,
        Err(err) => return envelope::failure(&err),
    };
    match state.service.get_contact(id).await {
        Ok(contact) => envelope::ok("success", contact),
        Err(err) => envelope::failure(&err),
    }
}

pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<Contact>, JsonRejection>,
) -> Response {
    let payload = match body_or_reject(payload) {
        Ok(payload) => payload,
        Err(response) => return response,
    };
    match state.service.create_contact(payload).await {
        Ok(contact) => envelope::created("Contact created", contact),
        Err(err) => envelope::failure(&err),
    }
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<Contact>, JsonRejection>,
) -> Response {
    let id = match parse_id(&id) {
        Ok(id) => id,
        Err(err) => return envelope::failure(&err),
    };
    let payload = match body_or_reject(payload) {
        Ok(payload) => payload,
        Err(response) => return response,
    };
    match state.service.update_contact(id, payload).await {
        Ok(contact) => envelope::ok("Contact updated", contact),
        Err(err) => envelope::failure(&err),
    }
}

pub async fn remove(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let id = match parse_id(&id) {
        Ok(id) => id,
        Err(err) => return envelope::failure(&err),
    };
    match state.service.delete_contact(id).await {
        Ok(()) => envelope::ok("Contact deleted", json!({})),
        Err(err) => envelope::failure(&err),
    }
}
