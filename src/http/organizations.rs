//! Organization endpoints.

use super::{envelope, parse_id, AppState};
use crate::domain::entities::Organization;
use crate::domain::errors::ValidationError;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::response::Response;
use axum::Json;
use serde_json::json;

fn body_or_reject(payload: Result<Json<Organization>, JsonRejection>) -> Result<Organization, Response> {
    match payload {
        Ok(Json(org)) => Ok(org),
        Err(rejection) => Err(envelope::failure(
            &ValidationError::MalformedPayload(rejection.body_text()).into(),
        )),
    }
}

pub async fn list(State(state): State<AppState>) -> Response {
    match state.service.list_organizations().await {
        Ok(orgs) => envelope::ok("success", orgs),
        Err(err) => envelope::failure(&err),
    }
}

pub async fn fetch(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let id = match parse_id(&id) {
        Ok(id) => id,
        Err(err) => return envelope::failure(&err),
    };
    match state.service.get_organization(id).await {
        Ok(org) => envelope::ok("success", org),
        Err(err) => envelope::failure(&err),
    }
}

pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<Organization>, JsonRejection>,
) -> Response {
    let payload = match body_or_reject(payload) {
        Ok(payload) => payload,
        Err(response) => return response,
    };
    match state.service.create_organization(payload).await {
        Ok(org) => envelope::created("Organization created", org),
        Err(err) => envelope::failure(&err),
    }
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<Organization>, JsonRejection>,
) -> Response {
    let id = match parse_id(&id) {
        Ok(id) => id,
        Err(err) => return envelope::failure(&err),
    };
    let payload = match body_or_reject(payload) {
        Ok(payload) => payload,
        Err(response) => return response,
    };
    match state.service.update_organization(id, payload).await {
        Ok(org) => envelope::ok("Organization updated", org),
        Err(err) => envelope::failure(&err),
    }
}

pub async fn remove(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let id = match parse_id(&id) {
        Ok(id) => id,
        Err(err) => return envelope::failure(&err),
    };
    match state.service.delete_organization(id).await {
        Ok(()) => envelope::ok("Organization deleted", json!({})),
        Err(err) => envelope::failure(&err),
    }
}
