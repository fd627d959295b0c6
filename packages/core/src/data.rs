//! The auxiliary `data` payload attached to an error.

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

/// Arbitrary structured context carried in the `data` field of the JSON body.
pub type Data = serde_json::Map<String, Value>;

/// Errors returned by [`to_data`].
#[derive(Debug, Error)]
pub enum DataError {
    #[error("data payload could not be serialised: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("data payload must serialise to a JSON object, got {0}")]
    NotAnObject(&'static str),
}

/// Convert any serialisable value into a [`Data`] map.
///
/// Structs and maps become objects and are accepted. Anything else (arrays,
/// strings, numbers, `null`) is rejected, because the wire format requires
/// `data` to be an object.
pub fn to_data<T: Serialize + ?Sized>(value: &T) -> Result<Data, DataError> {
    match serde_json::to_value(value)? {
        Value::Object(map) => Ok(map),
        other => Err(DataError::NotAnObject(kind(&other))),
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
