//! # HTTP Surface
//!
//! Routing and request handlers. One handler module per entity kind, a
//! shared envelope, and a router builder wired with tracing and CORS
//! layers. Handlers are thin: parse, call the service, wrap the outcome.

pub mod accounts;
pub mod contacts;
pub mod envelope;
pub mod organizations;
pub mod reaction_icons;

use crate::domain::errors::{ServiceError, ValidationError};
use crate::domain::ids::RecordId;
use crate::service::RecordService;
use axum::routing::get;
use axum::Router;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<RecordService>,
}

/// Parse a path identifier, rejecting anything that is not 24 hex chars.
pub(crate) fn parse_id(raw: &str) -> Result<RecordId, ServiceError> {
    RecordId::parse_str(raw)
        .map_err(ValidationError::from)
        .map_err(ServiceError::from)
}

/// Build the application router.
pub fn build_router(service: Arc<RecordService>) -> Router {
    let state = AppState { service };

    Router::new()
        .route("/accounts", get(accounts::list).post(accounts::create))
        .route(
            "/accounts/:id",
            get(accounts::fetch)
                .put(accounts::update)
                .delete(accounts::remove),
        )
        .route(
            "/organizations",
            get(organizations::list).post(organizations::create),
        )
        .route(
            "/organizations/:id",
            get(organizations::fetch)
                .put(organizations::update)
                .delete(organizations::remove),
        )
        .route("/contacts", get(contacts::list).post(contacts::create))
        .route(
            "/contacts/:id",
            get(contacts::fetch)
                .put(contacts::update)
                .delete(contacts::remove),
        )
        .route(
            "/reaction-icons",
            get(reaction_icons::list).post(reaction_icons::create),
        )
        .route(
            "/reaction-icons/:id",
            get(reaction_icons::fetch)
                .put(reaction_icons::update)
                .delete(reaction_icons::remove),
        )
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
