//! HTTP request handlers for the demo service.
//!
//! Handlers are async functions that receive axum extractors and return
//! `Result<impl IntoResponse, ApiError>`; every failure path builds a
//! [`boom::Boom`].

pub mod users;

use std::sync::Arc;

use crate::{config::ServerConfig, error::ApiError, storage::Storage};

/// Shared application state threaded through all handlers via [`axum::extract::State`].
#[derive(Clone)]
pub struct AppState {
    pub storage: Arc<dyn Storage>,
    pub config: ServerConfig,
}

/// Fallback for unmatched routes.
pub async fn not_found() -> ApiError {
    boom::not_found("route not found").into()
}
