//! Public surface for the `boom-http` crate.
//!
//! [`ApiError`] is the bridge between [`boom::Boom`] and axum: return it from
//! a handler and the client receives the error's JSON body with the matching
//! status code. The rest of the crate is a small user service that exercises
//! every constructor from a real request path.

pub mod config;
pub mod error;
pub mod handlers;
pub mod router;
pub mod storage;

pub use config::{ConfigError, ServerConfig};
pub use error::ApiError;
pub use router::build_router;
pub use storage::{memory::MemoryStorage, Storage};
