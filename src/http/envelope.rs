//! JSON response envelope shared by every endpoint:
//! `{ "status": <code>, "message": <string>, "data": <entity|array|{}> }`.

use crate::domain::errors::ServiceError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use serde_json::json;

#[derive(Debug, Serialize)]
pub struct Envelope {
    pub status: u16,
    pub message: String,
    pub data: serde_json::Value,
}

fn reply(status: StatusCode, message: impl Into<String>, data: serde_json::Value) -> Response {
    let body = Envelope {
        status: status.as_u16(),
        message: message.into(),
        data,
    };
    (status, Json(body)).into_response()
}

/// 200 with payload.
pub fn ok(message: &str, data: impl Serialize) -> Response {
    reply(
        StatusCode::OK,
        message,
        serde_json::to_value(data).unwrap_or_else(|_| json!({})),
    )
}

/// 201 with the stored record.
pub fn created(message: &str, data: impl Serialize) -> Response {
    reply(
        StatusCode::CREATED,
        message,
        serde_json::to_value(data).unwrap_or_else(|_| json!({})),
    )
}

/// Map a service failure to its status code. Validation errors carry the
/// human-readable reason; store failures surface the driver text verbatim.
pub fn failure(err: &ServiceError) -> Response {
    let status = match err {
        ServiceError::Validation(_) => StatusCode::BAD_REQUEST,
        ServiceError::NotFound(_) => StatusCode::NOT_FOUND,
        ServiceError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    reply(status, err.to_string(), json!({}))
}
