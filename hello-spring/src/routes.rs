use std::sync::Arc;

use axum::{extract::State, response::Json, routing::get, Router};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tower_http::trace::TraceLayer;
use tracing::debug;

use crate::greeting::GreetingService;

pub fn router(service: Arc<GreetingService>) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(service)
}

// GET /
async fn root(State(service): State<Arc<GreetingService>>) -> String {
    let greeting = service.say_hello();
    debug!(%greeting, "greeting served");
    greeting
}

#[derive(Debug, Serialize)]
struct Health {
    status: &'static str,
    uptime_seconds: u64,
    started_at: DateTime<Utc>,
    timestamp: DateTime<Utc>,
    version: &'static str,
}

// GET /health
async fn health(State(service): State<Arc<GreetingService>>) -> Json<Health> {
    Json(Health {
        status: "ok",
        uptime_seconds: service.uptime().as_secs(),
        started_at: service.started_at(),
        timestamp: Utc::now(),
        version: env!("CARGO_PKG_VERSION"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::greeting::FixedProfile;
    use axum::body::Body;
    use axum::http::{header, Method, Request, StatusCode};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    fn app(profile: FixedProfile) -> Router {
        router(Arc::new(
            GreetingService::start_now("null").with_profile_source(profile),
        ))
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    async fn body_text(response: axum::response::Response) -> String {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn root_returns_plain_text_greeting() {
        let response = app(FixedProfile::set("prod"))
            .oneshot(get_request("/"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response.headers()[header::CONTENT_TYPE].to_str().unwrap();
        assert!(content_type.starts_with("text/plain"), "{content_type}");

        let body = body_text(response).await;
        assert!(body.starts_with("Hello, Spring! (up "), "{body}");
        assert!(body.ends_with(", prod)"), "{body}");
    }

    #[tokio::test]
    async fn root_without_profile_shows_placeholder() {
        let response = app(FixedProfile::unset())
            .oneshot(get_request("/"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_text(response).await.ends_with(", null)"));
    }

    #[tokio::test]
    async fn health_reports_ok() {
        let response = app(FixedProfile::unset())
            .oneshot(get_request("/health"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
        assert_eq!(body["status"], "ok");
        assert!(body["uptime_seconds"].is_u64());
        assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
        for field in ["started_at", "timestamp"] {
            let value = body[field].as_str().unwrap();
            assert!(DateTime::parse_from_rfc3339(value).is_ok(), "{field}: {value}");
        }
    }

    #[tokio::test]
    async fn unknown_path_is_not_found() {
        let response = app(FixedProfile::unset())
            .oneshot(get_request("/greeting"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn post_to_root_is_rejected() {
        let request = Request::builder()
            .method(Method::POST)
            .uri("/")
            .body(Body::empty())
            .unwrap();
        let response = app(FixedProfile::unset()).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}
