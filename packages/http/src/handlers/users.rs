//! User handlers: create, list (with `Range`), fetch and delete.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{header, HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use boom::Boom;
use serde::{Deserialize, Serialize};

use crate::{
    error::ApiError,
    storage::{NewUser, StorageError},
};

use super::AppState;

/// Range unit accepted by `GET /v1/users`.
pub const RANGE_UNIT: &str = "users";

/// Body of `POST /v1/users`. Fields are optional so that missing keys are
/// reported as validation failures rather than JSON rejections.
#[derive(Debug, Deserialize)]
pub struct CreateUser {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

#[derive(Serialize)]
struct ValidationData<'a> {
    validation: Validation<'a>,
}

#[derive(Serialize)]
struct Validation<'a> {
    source: &'a str,
    keys: Vec<&'a str>,
}

#[derive(Serialize)]
struct RangeData {
    total: usize,
}

// ---------------------------------------------------------------------------
// POST /v1/users
// ---------------------------------------------------------------------------

/// `POST /v1/users`: register a user.
///
/// Returns 201 with the stored user, 400 with a `validation` data block
/// naming the offending keys, or 409 if the email is taken.
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<CreateUser>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(body) = payload?;

    let name = body.name.unwrap_or_default().trim().to_owned();
    let email = body.email.unwrap_or_default().trim().to_owned();

    let mut keys = Vec::new();
    if name.is_empty() {
        keys.push("name");
    }
    if !is_plausible_email(&email) {
        keys.push("email");
    }
    if !keys.is_empty() {
        let data = boom::to_data(&ValidationData {
            validation: Validation {
                source: "payload",
                keys,
            },
        })
        .map_err(boom::bad_implementation)?;
        return Err(boom::bad_request("invalid payload", Some(data)).into());
    }

    let user = state.storage.create_user(NewUser { name, email }).await?;
    tracing::info!(id = user.id, "user created");
    Ok((StatusCode::CREATED, Json(user)))
}

fn is_plausible_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => !local.is_empty() && domain.contains('.'),
        None => false,
    }
}

// ---------------------------------------------------------------------------
// GET /v1/users
// ---------------------------------------------------------------------------

/// `GET /v1/users`: list users.
///
/// Without a `Range` header returns every user with 200. With
/// `Range: users=<start>-<end>` (inclusive, zero-based; `end` may be omitted)
/// returns that slice with 206 and a `Content-Range` header. A range that
/// starts past the end of the collection, or ends before it starts, yields
/// 416 with the collection size under `data.total`.
pub async fn list(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Response, ApiError> {
    let users = state.storage.list_users().await?;

    let Some(raw) = headers.get(header::RANGE) else {
        return Ok(Json(users).into_response());
    };

    let (start, end) = raw
        .to_str()
        .ok()
        .and_then(parse_range)
        .ok_or_else(|| boom::bad_request("malformed Range header", None))?;

    let total = users.len();
    if start >= total || end.is_some_and(|e| e < start) {
        let data = boom::to_data(&RangeData { total }).map_err(boom::bad_implementation)?;
        return Err(boom::range_not_satisfiable(
            format!("requested range cannot be served from {total} users"),
            Some(data),
        )
        .into());
    }

    let last = end.map_or(total - 1, |e| e.min(total - 1));
    let content_range = format!("{RANGE_UNIT} {start}-{last}/{total}");
    let page = users[start..=last].to_vec();

    let mut resp = (StatusCode::PARTIAL_CONTENT, Json(page)).into_response();
    if let Ok(value) = HeaderValue::from_str(&content_range) {
        resp.headers_mut().insert(header::CONTENT_RANGE, value);
    }
    Ok(resp)
}

/// Parse `users=<start>-[<end>]`.
fn parse_range(raw: &str) -> Option<(usize, Option<usize>)> {
    let ranges = raw.trim().strip_prefix(RANGE_UNIT)?.strip_prefix('=')?;
    let (start, end) = ranges.split_once('-')?;
    let start = start.trim().parse().ok()?;
    let end = match end.trim() {
        "" => None,
        e => Some(e.parse().ok()?),
    };
    Some((start, end))
}

// ---------------------------------------------------------------------------
// GET /v1/users/{id}
// ---------------------------------------------------------------------------

/// `GET /v1/users/{id}`: fetch one user, or 404.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id = parse_id(&id)?;
    match state.storage.get_user(id).await {
        Ok(user) => Ok(Json(user)),
        Err(StorageError::NotFound) => Err(boom::not_found("user not found").into()),
        Err(e) => Err(e.into()),
    }
}

// ---------------------------------------------------------------------------
// DELETE /v1/users/{id}
// ---------------------------------------------------------------------------

/// `DELETE /v1/users/{id}`: remove a user.
///
/// Requires `Authorization: Bearer <token>` matching the configured admin
/// token: 401 if it is missing, 403 if it does not match.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Result<StatusCode, ApiError> {
    let token = bearer_token(&headers)
        .ok_or_else(|| boom::unauthorized("missing bearer token"))?;
    if !tokens_match(token, &state.config.admin_token) {
        return Err(boom::forbidden("token does not grant delete access").into());
    }

    let id = parse_id(&id)?;
    match state.storage.delete_user(id).await {
        Ok(()) => {
            tracing::info!(id, "user deleted");
            Ok(StatusCode::NO_CONTENT)
        }
        Err(StorageError::NotFound) => Err(boom::not_found("user not found").into()),
        Err(e) => Err(e.into()),
    }
}

/// Token from `Authorization: Bearer <token>`; the scheme is matched
/// case-insensitively.
fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }
    Some(token.trim()).filter(|t| !t.is_empty())
}

/// Compare in time that depends only on the lengths, not on where the
/// first differing byte is.
fn tokens_match(given: &str, expected: &str) -> bool {
    let (a, b) = (given.as_bytes(), expected.as_bytes());
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).fold(0u8, |diff, (x, y)| diff | (x ^ y)) == 0
}

fn parse_id(raw: &str) -> Result<u64, Boom> {
    raw.parse()
        .map_err(|_| boom::bad_request(format!("invalid user id {raw:?}"), None))
}
