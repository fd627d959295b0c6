//! HTTP-status-aware error values.
//!
//! `boom` builds structured errors that carry an HTTP status code, its
//! canonical reason phrase, a caller-facing message, an arbitrary JSON
//! `data` payload and, optionally, the internal error that caused them.
//! Every error has two views: [`Display`](std::fmt::Display) for logs and
//! [`serde::Serialize`] for the response body.
//!
//! # Crate layout
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`status`] | Reason-phrase registry via [`reason_phrase`] |
//! | [`error`] | [`Boom`], its constructors, and the [`Output`] body |
//! | [`data`] | The [`Data`] payload type and [`to_data`] |
//!
//! # Quick start
//!
//! ```rust
//! use serde_json::json;
//!
//! let err = boom::not_found("user not found");
//! assert_eq!(err.to_string(), "user not found");
//! assert_eq!(
//!     serde_json::to_value(&err).unwrap(),
//!     json!({"status_code": 404, "error": "Not Found", "message": "user not found", "data": {}}),
//! );
//!
//! // The cause is logged, never serialised.
//! let err = boom::bad_implementation("sql: no rows found in result set");
//! assert_eq!(err.to_string(), "sql: no rows found in result set");
//! assert_eq!(err.output().message, "An internal server error occurred");
//! ```

pub mod data;
pub mod error;
pub mod status;

pub use data::{to_data, Data, DataError};
pub use error::{
    bad_implementation, bad_request, forbidden, not_found, range_not_satisfiable,
    unauthorized, Boom, Cause, Output, BAD_IMPLEMENTATION_MESSAGE,
};
pub use status::{reason_phrase, UNKNOWN_REASON};
