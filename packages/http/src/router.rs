//! Assembles the axum [`Router`] from the handler modules.

use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::{
    config::ServerConfig,
    handlers::{self, users, AppState},
    storage::Storage,
};

/// Build the complete application router with shared state.
pub fn build_router(storage: Arc<dyn Storage>, config: ServerConfig) -> Router {
    let state = AppState { storage, config };

    Router::new()
        .route("/v1/users", get(users::list).post(users::create))
        .route("/v1/users/{id}", get(users::get_by_id).delete(users::delete))
        .fallback(handlers::not_found)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use axum::response::Response;
    use http_body_util::BodyExt;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::storage::{memory::MemoryStorage, NewUser, StorageError, User};

    const TOKEN: &str = "test-token";

    fn config() -> ServerConfig {
        ServerConfig {
            bind_addr: "127.0.0.1:0".parse().unwrap(),
            admin_token: TOKEN.into(),
        }
    }

    fn build_app() -> Router {
        build_router(Arc::new(MemoryStorage::new()), config())
    }

    async fn seeded_app(count: usize) -> Router {
        let storage = Arc::new(MemoryStorage::new());
        for i in 0..count {
            storage
                .create_user(NewUser {
                    name: format!("user{i}"),
                    email: format!("user{i}@example.com"),
                })
                .await
                .unwrap();
        }
        build_router(storage, config())
    }

    /// Storage whose every call fails, to drive the 500 path.
    struct BrokenStorage;

    #[async_trait]
    impl Storage for BrokenStorage {
        async fn create_user(&self, _: NewUser) -> Result<User, StorageError> {
            Err(StorageError::Internal("disk on fire".into()))
        }
        async fn get_user(&self, _: u64) -> Result<User, StorageError> {
            Err(StorageError::Internal("disk on fire".into()))
        }
        async fn list_users(&self) -> Result<Vec<User>, StorageError> {
            Err(StorageError::Internal("disk on fire".into()))
        }
        async fn delete_user(&self, _: u64) -> Result<(), StorageError> {
            Err(StorageError::Internal("disk on fire".into()))
        }
    }

    async fn body_json(resp: Response) -> Value {
        let bytes = resp.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn post_user(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/v1/users")
            .header("content-type", "application/json")
            .body(Body::from(body.to_owned()))
            .unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn create_user_returns_201() {
        let resp = build_app()
            .oneshot(post_user(r#"{"name":"Ada","email":"ada@example.com"}"#))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::CREATED);
        let body = body_json(resp).await;
        assert_eq!(body, json!({"id": 1, "name": "Ada", "email": "ada@example.com"}));
    }

    #[tokio::test]
    async fn invalid_payload_returns_validation_data() {
        let resp = build_app()
            .oneshot(post_user(r#"{"name":"Ada","email":"nope"}"#))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(resp).await,
            json!({
                "status_code": 400,
                "error": "Bad Request",
                "message": "invalid payload",
                "data": {"validation": {"source": "payload", "keys": ["email"]}}
            })
        );
    }

    #[tokio::test]
    async fn missing_fields_are_all_reported() {
        let resp = build_app().oneshot(post_user("{}")).await.unwrap();
        let body = body_json(resp).await;
        assert_eq!(body["data"]["validation"]["keys"], json!(["name", "email"]));
    }

    #[tokio::test]
    async fn malformed_json_is_a_bad_request() {
        let resp = build_app().oneshot(post_user("{not json")).await.unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body = body_json(resp).await;
        assert_eq!(body["error"], "Bad Request");
        assert_eq!(body["data"], json!({}));
    }

    #[tokio::test]
    async fn duplicate_email_is_a_conflict() {
        let app = build_app();
        let payload = r#"{"name":"Ada","email":"ada@example.com"}"#;
        app.clone().oneshot(post_user(payload)).await.unwrap();
        let resp = app.oneshot(post_user(payload)).await.unwrap();
        assert_eq!(resp.status(), StatusCode::CONFLICT);
        assert_eq!(body_json(resp).await["error"], "Conflict");
    }

    #[tokio::test]
    async fn unknown_user_returns_404() {
        let resp = build_app().oneshot(get("/v1/users/42")).await.unwrap();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            body_json(resp).await,
            json!({"status_code": 404, "error": "Not Found", "message": "user not found", "data": {}})
        );
    }

    #[tokio::test]
    async fn non_numeric_id_returns_400() {
        let resp = build_app().oneshot(get("/v1/users/abc")).await.unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn unmatched_route_returns_boom_404() {
        let resp = build_app().oneshot(get("/nowhere")).await.unwrap();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(resp).await["message"], "route not found");
    }

    #[tokio::test]
    async fn list_without_range_returns_all() {
        let resp = seeded_app(3).await.oneshot(get("/v1/users")).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(body_json(resp).await.as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn satisfiable_range_returns_206() {
        let req = Request::builder()
            .uri("/v1/users")
            .header(header::RANGE, "users=1-5")
            .body(Body::empty())
            .unwrap();
        let resp = seeded_app(3).await.oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::PARTIAL_CONTENT);
        assert_eq!(resp.headers()[header::CONTENT_RANGE], "users 1-2/3");
        let body = body_json(resp).await;
        assert_eq!(body[0]["id"], 2);
        assert_eq!(body.as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn unsatisfiable_range_returns_416() {
        let req = Request::builder()
            .uri("/v1/users")
            .header(header::RANGE, "users=10-20")
            .body(Body::empty())
            .unwrap();
        let resp = seeded_app(3).await.oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::RANGE_NOT_SATISFIABLE);
        let body = body_json(resp).await;
        assert_eq!(body["error"], "Requested Range Not Satisfiable");
        assert_eq!(body["data"], json!({"total": 3}));
    }

    #[tokio::test]
    async fn malformed_range_returns_400() {
        let req = Request::builder()
            .uri("/v1/users")
            .header(header::RANGE, "bytes=0-1")
            .body(Body::empty())
            .unwrap();
        let resp = build_app().oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(resp).await["message"], "malformed Range header");
    }

    fn delete(uri: &str, auth: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder().method("DELETE").uri(uri);
        if let Some(auth) = auth {
            builder = builder.header(header::AUTHORIZATION, auth);
        }
        builder.body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn delete_without_token_returns_401() {
        let resp = seeded_app(1).await.oneshot(delete("/v1/users/1", None)).await.unwrap();
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        let body = body_json(resp).await;
        assert_eq!(body["error"], "Unauthorized");
        assert_eq!(body["message"], "missing bearer token");
    }

    #[tokio::test]
    async fn delete_with_wrong_token_returns_403() {
        let resp = seeded_app(1)
            .await
            .oneshot(delete("/v1/users/1", Some("Bearer wrong")))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);
        assert_eq!(body_json(resp).await["error"], "Forbidden");
    }

    #[tokio::test]
    async fn delete_with_token_returns_204_then_404() {
        let app = seeded_app(1).await;
        let auth = format!("Bearer {TOKEN}");
        let resp = app
            .clone()
            .oneshot(delete("/v1/users/1", Some(&auth)))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);

        let resp = app.oneshot(delete("/v1/users/1", Some(&auth))).await.unwrap();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn delete_accepts_lowercase_scheme() {
        let auth = format!("bearer {TOKEN}");
        let resp = seeded_app(1)
            .await
            .oneshot(delete("/v1/users/1", Some(&auth)))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    }

    #[tokio::test]
    async fn storage_failure_returns_generic_500() {
        let app = build_router(Arc::new(BrokenStorage), config());
        let resp = app.oneshot(get("/v1/users/1")).await.unwrap();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(resp).await;
        assert_eq!(
            body,
            json!({
                "status_code": 500,
                "error": "Internal Server Error",
                "message": "An internal server error occurred",
                "data": {}
            })
        );
    }
}
