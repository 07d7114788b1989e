//! Account endpoints.

use super::{envelope, parse_id, AppState};
use crate::domain::entities::Account;
use crate::domain::errors::ValidationError;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::response::Response;
use axum::Json;
use serde_json::json;

fn body_or_reject(payload: Result<Json<Account>, JsonRejection>) -> Result<Account, Response> {
    match payload {
        Ok(Json(account)) => Ok(account),
        Err(rejection) => Err(envelope::failure(
            &ValidationError::MalformedPayload(rejection.body_text()).into(),
        )),
    }
}

pub async fn list(State(state): State<AppState>) -> Response {
    match state.service.list_accounts().await {
        Ok(accounts) => envelope::ok("success", accounts),
        Err(err) => envelope::failure(&err),
    }
}

pub async fn fetch(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let id = match parse_id(&id) {
        Ok(id) => id,
        Err(err) => return envelope::failure(&err),
    };
    match state.service.get_account(id).await {
        Ok(account) => envelope::ok("success", account),
        Err(err) => envelope::failure(&err),
    }
}

pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<Account>, JsonRejection>,
) -> Response {
    let payload = match body_or_reject(payload) {
        Ok(payload) => payload,
        Err(response) => return response,
    };
    match state.service.create_account(payload).await {
        Ok(account) => envelope::created("Account created", account),
        Err(err) => envelope::failure(&err),
    }
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<Account>, JsonRejection>,
) -> Response {
    let id = match parse_id(&id) {
        Ok(id) => id,
        Err(err) => return envelope::failure(&err),
    };
    let payload = match body_or_reject(payload) {
        Ok(payload) => payload,
        Err(response) => return response,
    };
    match state.service.update_account(id, payload).await {
        Ok(account) => envelope::ok("Account updated", account),
        Err(err) => envelope::failure(&err),
    }
}

pub async fn remove(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let id = match parse_id(&id) {
        Ok(id) => id,
        Err(err) => return envelope::failure(&err),
    };
    match state.service.delete_account(id).await {
        Ok(()) => envelope::ok("Account deleted", json!({})),
        Err(err) => envelope::failure(&err),
    }
}
