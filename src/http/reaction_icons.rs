//! Reaction-icon endpoints.

use super::{envelope, parse_id, AppState};
use crate::domain::entities::ReactionIcon;
use crate::domain::errors::ValidationError;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::response::Response;
use axum::Json;
use serde_json::json;

fn body_or_reject(payload: Result<Json<ReactionIcon>, JsonRejection>) -> Result<ReactionIcon, Response> {
    match payload {
        Ok(Json(icon)) => Ok(icon),
        Err(rejection) => Err(envelope::failure(
            &ValidationError::MalformedPayload(rejection.body_text()).into(),
        )),
    }
}

pub async fn list(State(state): State<AppState>) -> Response {
    match state.service.list_reaction_icons().await {
        Ok(icons) => envelope::ok("success", icons),
        Err(err) => envelope::failure(&err),
    }
}

pub async fn fetch(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let id = match parse_id(&id) {
        Ok(id) => id,
        Err(err) => return envelope::failure(&err),
    };
    match state.service.get_reaction_icon(id).await {
        Ok(icon) => envelope::ok("success", icon),
        Err(err) => envelope::failure(&err),
    }
}

pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<ReactionIcon>, JsonRejection>,
) -> Response {
    let payload = match body_or_reject(payload) {
        Ok(payload) => payload,
        Err(response) => return response,
    };
    match state.service.create_reaction_icon(payload).await {
        Ok(icon) => envelope::created("Reaction icon created", icon),
        Err(err) => envelope::failure(&err),
    }
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<ReactionIcon>, JsonRejection>,
) -> Response {
    let id = match parse_id(&id) {
        Ok(id) => id,
        Err(err) => return envelope::failure(&err),
    };
    let payload = match body_or_reject(payload) {
        Ok(payload) => payload,
        Err(response) => return response,
    };
    match state.service.update_reaction_icon(id, payload).await {
        Ok(icon) => envelope::ok("Reaction icon updated", icon),
        Err(err) => envelope::failure(&err),
    }
}

pub async fn remove(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let id = match parse_id(&id) {
        Ok(id) => id,
        Err(err) => return envelope::failure(&err),
    };
    match state.service.delete_reaction_icon(id).await {
        Ok(()) => envelope::ok("Reaction icon deleted", json!({})),
        Err(err) => envelope::failure(&err),
    }
}
