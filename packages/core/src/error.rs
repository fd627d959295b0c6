//! The [`Boom`] error value and its constructors.
//!
//! A [`Boom`] has two views. Its [`Display`](std::fmt::Display) form is meant
//! for logs and prefers the underlying cause. Its serialised form is the
//! client-facing [`Output`] body, which never contains the cause.

use std::error::Error as StdError;
use std::fmt;

use serde::{Deserialize, Serialize, Serializer};

use crate::data::Data;
use crate::status::reason_phrase;

/// An underlying error from a lower layer, kept for diagnostics only.
pub type Cause = Box<dyn StdError + Send + Sync + 'static>;

/// Message used by [`Boom::bad_implementation`].
pub const BAD_IMPLEMENTATION_MESSAGE: &str = "An internal server error occurred";

/// The JSON body presented to an HTTP client.
///
/// ```json
/// { "status_code": 404, "error": "Not Found", "message": "user not found", "data": {} }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Output {
    pub status_code: u16,

    /// Reason phrase for `status_code`, or `"Unknown"`.
    pub error: String,

    pub message: String,

    /// Always an object; `{}` when no data was attached.
    #[serde(default)]
    pub data: Data,
}

/// An HTTP-status-aware error.
///
/// Immutable once built: the fields are private and only readable through
/// accessors.
#[derive(Debug)]
pub struct Boom {
    output: Output,
    cause: Option<Cause>,
}

impl Boom {
    /// Build an error for any status code.
    ///
    /// The reason phrase is looked up in the status registry; codes missing
    /// from it get `"Unknown"`. A `None` data payload becomes an empty map.
    pub fn new(
        status_code: u16,
        message: impl Into<String>,
        data: Option<Data>,
        cause: Option<Cause>,
    ) -> Self {
        Self {
            output: Output {
                status_code,
                error: reason_phrase(status_code).to_owned(),
                message: message.into(),
                data: data.unwrap_or_default(),
            },
            cause,
        }
    }

    /// 500 Internal Server Error wrapping `cause`.
    ///
    /// The client sees a fixed message; the cause is only reachable through
    /// `Display` and [`source`](StdError::source).
    pub fn bad_implementation(cause: impl Into<Cause>) -> Self {
        Self::new(500, BAD_IMPLEMENTATION_MESSAGE, None, Some(cause.into()))
    }

    /// 400 Bad Request.
    pub fn bad_request(message: impl Into<String>, data: Option<Data>) -> Self {
        Self::new(400, message, data, None)
    }

    /// 401 Unauthorized.
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(401, message, None, None)
    }

    /// 403 Forbidden.
    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::new(403, message, None, None)
    }

    /// 404 Not Found.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(404, message, None, None)
    }

    /// 416 Requested Range Not Satisfiable.
    pub fn range_not_satisfiable(message: impl Into<String>, data: Option<Data>) -> Self {
        Self::new(416, message, data, None)
    }

    pub fn status_code(&self) -> u16 {
        self.output.status_code
    }

    pub fn reason(&self) -> &str {
        &self.output.error
    }

    pub fn message(&self) -> &str {
        &self.output.message
    }

    pub fn data(&self) -> &Data {
        &self.output.data
    }

    pub fn cause(&self) -> Option<&(dyn StdError + Send + Sync + 'static)> {
        self.cause.as_deref()
    }

    /// True for 5xx and above.
    pub fn is_server(&self) -> bool {
        self.output.status_code >= 500
    }

    /// The client-facing body.
    pub fn output(&self) -> &Output {
        &self.output
    }

    /// Consume the error, dropping the cause, and keep only the body.
    pub fn into_output(self) -> Output {
        self.output
    }
}

impl fmt::Display for Boom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.cause {
            Some(cause) => write!(f, "{cause}"),
            None if self.output.message.is_empty() => f.write_str(&self.output.error),
            None => f.write_str(&self.output.message),
        }
    }
}

impl StdError for Boom {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.cause
            .as_deref()
            .map(|c| c as &(dyn StdError + 'static))
    }
}

/// Serialises as the [`Output`] body only.
impl Serialize for Boom {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.output.serialize(serializer)
    }
}

impl From<Boom> for Output {
    fn from(boom: Boom) -> Self {
        boom.into_output()
    }
}

/// See [`Boom::bad_implementation`].
pub fn bad_implementation(cause: impl Into<Cause>) -> Boom {
    Boom::bad_implementation(cause)
}

/// See [`Boom::bad_request`].
pub fn bad_request(message: impl Into<String>, data: Option<Data>) -> Boom {
    Boom::bad_request(message, data)
}

/// See [`Boom::unauthorized`].
pub fn unauthorized(message: impl Into<String>) -> Boom {
    Boom::unauthorized(message)
}

/// See [`Boom::forbidden`].
pub fn forbidden(message: impl Into<String>) -> Boom {
    Boom::forbidden(message)
}

/// See [`Boom::not_found`].
pub fn not_found(message: impl Into<String>) -> Boom {
    Boom::not_found(message)
}

/// See [`Boom::range_not_satisfiable`].
pub fn range_not_satisfiable(message: impl Into<String>, data: Option<Data>) -> Boom {
    Boom::range_not_satisfiable(message, data)
}
