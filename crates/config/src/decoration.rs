//! Router decoration: exposing the loaded `Env` to axum handlers.
//!
//! Responsibilities:
//! - Attach an `Env` to every request through a request extension.
//! - Let handlers extract `Env` directly as a handler argument.
//!
//! Does NOT handle:
//! - Loading or validation (see `loader`).
//!
//! Invariants:
//! - Every request sees the same shared `Env`; handlers cannot mutate it.
//! - Extracting `Env` from a router that was never decorated is a server error.

use axum::extract::FromRequestParts;
use axum::http::StatusCode;
use axum::http::request::Parts;
use axum::response::{IntoResponse, Response};
use axum::{Extension, Router};

use crate::loader::Env;

/// Rejection returned when a handler asks for `Env` on an undecorated router.
#[derive(Debug, Clone, Copy, thiserror::Error)]
#[error("environment configuration is not attached to this router")]
pub struct EnvRejection;

impl IntoResponse for EnvRejection {
    fn into_response(self) -> Response {
        (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()).into_response()
    }
}

impl<S> FromRequestParts<S> for Env
where
    S: Send + Sync,
{
    type Rejection = EnvRejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts.extensions.get::<Env>().cloned().ok_or(EnvRejection)
    }
}

impl Env {
    /// Layer that attaches this environment to every request.
    pub fn layer(&self) -> Extension<Env> {
        Extension(self.clone())
    }
}

/// Decorate a router with a loaded environment.
pub trait EnvRouterExt {
    fn with_env(self, env: Env) -> Self;
}

impl<S> EnvRouterExt for Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    fn with_env(self, env: Env) -> Self {
        self.layer(env.layer())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::{EnvLoader, EnvOptions};
    use crate::policy::OnError;
    use crate::schema::{Field, Schema};
    use axum::Json;
    use axum::body::Body;
    use axum::http::Request;
    use axum::routing::get;
    use http_body_util::BodyExt;
    use std::collections::HashMap;
    use tower::ServiceExt;

    async fn body_string(resp: Response) -> String {
        let bytes = resp.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    fn loaded(pairs: &[(&str, &str)]) -> Env {
        let source: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        EnvLoader::load(
            &Schema::new().field("API_TOKEN", Field::string()),
            EnvOptions::new()
                .env_source(source)
                .on_error(OnError::Silent),
        )
    }

    #[tokio::test]
    async fn test_handler_reads_decorated_env() {
        let app = Router::new()
            .route(
                "/",
                get(|env: Env| async move { env.get_str("API_TOKEN").unwrap_or_default().to_string() }),
            )
            .with_env(loaded(&[("API_TOKEN", "hello!elysia")]));

        let resp = app
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(body_string(resp).await, "hello!elysia");
    }

    #[tokio::test]
    async fn test_env_serializes_as_config_object() {
        let app = Router::new()
            .route("/", get(|env: Env| async move { Json(env) }))
            .with_env(loaded(&[("API_TOKEN", "t"), ("IGNORED", "x")]));

        let resp = app
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_str(&body_string(resp).await).unwrap();
        assert_eq!(json, serde_json::json!({"API_TOKEN": "t"}));
    }

    #[tokio::test]
    async fn test_undecorated_router_rejects_with_500() {
        let app = Router::new().route("/", get(|_env: Env| async { "unreachable" }));

        let resp = app
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
