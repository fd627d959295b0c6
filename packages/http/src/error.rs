//! Error type returned by handlers.
//!
//! Wraps a [`Boom`] and writes its JSON body with the matching HTTP status.
//! Server faults are logged together with their cause before the cause is
//! dropped; the client only ever sees the [`boom::Output`] body.

use std::error::Error as _;

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use boom::Boom;

use crate::storage::StorageError;

/// An error that a handler can return; converts directly to an HTTP response.
#[derive(Debug)]
pub struct ApiError(pub Boom);

impl ApiError {
    /// The HTTP status to send. Codes `http` cannot represent become 500.
    pub fn status(&self) -> StatusCode {
        StatusCode::from_u16(self.0.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let boom = self.0;
        if boom.is_server() {
            tracing::error!(
                status = boom.status_code(),
                cause = %cause_chain(&boom),
                "request failed with server error"
            );
        } else {
            tracing::debug!(
                status = boom.status_code(),
                detail = boom.message(),
                "request rejected"
            );
        }
        (status, Json(boom.into_output())).into_response()
    }
}

/// The error's text view followed by every nested `source()`, joined by `": "`.
fn cause_chain(boom: &Boom) -> String {
    let mut chain = boom.to_string();
    let mut next = boom.cause().and_then(|cause| cause.source());
    while let Some(err) = next {
        chain.push_str(": ");
        chain.push_str(&err.to_string());
        next = err.source();
    }
    chain
}

impl From<Boom> for ApiError {
    fn from(boom: Boom) -> Self {
        ApiError(boom)
    }
}

impl From<StorageError> for ApiError {
    fn from(e: StorageError) -> Self {
        let boom = match e {
            StorageError::NotFound => boom::not_found("not found"),
            StorageError::Conflict(msg) => Boom::new(409, msg, None, None),
            internal @ StorageError::Internal(_) => boom::bad_implementation(internal),
        };
        ApiError(boom)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError(boom::bad_request(rejection.body_text(), None))
    }
}
