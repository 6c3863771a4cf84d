//! Router Composition
//!
//! Mounts the auth and review routers, guards the review routes with the
//! admin session middleware and adds the notification feed and health check.

use std::sync::Arc;

use auth::middleware::{AuthMiddlewareState, require_admin_session};
use auth::{InMemorySessionRepository, SessionGate, auth_router};
use axum::extract::State;
use axum::middleware::from_fn_with_state;
use axum::routing::get;
use axum::{Json, Router};
use kernel::notify::{Notification, NotificationBuffer};
use review::{InMemorySubmissionRepository, SubmissionStore, review_router};
use serde::Serialize;

pub struct AppState {
    pub gate: Arc<SessionGate<InMemorySessionRepository>>,
    pub store: Arc<SubmissionStore<InMemorySubmissionRepository>>,
    pub notifications: NotificationBuffer,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

pub fn build_router(state: AppState) -> Router {
    let submissions = review_router(state.store).route_layer(from_fn_with_state(
        AuthMiddlewareState {
            gate: state.gate.clone(),
        },
        require_admin_session::<InMemorySessionRepository>,
    ));

    let notifications = Router::new()
        .route("/", get(drain_notifications))
        .with_state(state.notifications);

    Router::new()
        .nest("/api/auth", auth_router(state.gate))
        .nest("/api/submissions", submissions)
        .nest("/api/notifications", notifications)
        .route("/api/health", get(health))
}

/// GET /api/notifications
async fn drain_notifications(State(buffer): State<NotificationBuffer>) -> Json<Vec<Notification>> {
    Json(buffer.drain())
}

/// GET /api/health
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

#[cfg(test)]
mod tests {
    use super::*;
    use auth::AuthConfig;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode, header};
    use tower::ServiceExt;

    fn app() -> Router {
        let notifications = NotificationBuffer::default();
        let gate = SessionGate::new(
            InMemorySessionRepository::new(),
            AuthConfig::development(),
            Arc::new(notifications.clone()),
        );
        let store = SubmissionStore::new(
            InMemorySubmissionRepository::with_reference_seed().unwrap(),
            Arc::new(notifications.clone()),
        );
        build_router(AppState {
            gate: Arc::new(gate),
            store: Arc::new(store),
            notifications,
        })
    }

    async fn call(
        app: &Router,
        req: Request<Body>,
    ) -> (StatusCode, axum::http::HeaderMap, serde_json::Value) {
        let response = app.clone().oneshot(req).await.unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = if bytes.is_empty() {
            serde_json::Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, headers, body)
    }

    fn with_cookie(builder: axum::http::request::Builder, cookie: &str) -> axum::http::request::Builder {
        if cookie.is_empty() {
            builder
        } else {
            builder.header(header::COOKIE, cookie)
        }
    }

    fn get_req(uri: &str, cookie: &str) -> Request<Body> {
        with_cookie(Request::get(uri), cookie)
            .body(Body::empty())
            .unwrap()
    }

    fn post_req(uri: &str, cookie: &str, body: &str) -> Request<Body> {
        with_cookie(Request::post(uri), cookie)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn sign_in(app: &Router) -> String {
        let (status, headers, _) = call(
            app,
            post_req(
                "/api/auth/signin",
                "",
                r#"{"username":"admin","id":"admin123"}"#,
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        headers
            .get(header::SET_COOKIE)
            .unwrap()
            .to_str()
            .unwrap()
            .split(';')
            .next()
            .unwrap()
            .to_string()
    }

    #[tokio::test]
    async fn test_health() {
        let (status, _, body) = call(&app(), get_req("/api/health", "")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_submissions_require_session() {
        let app = app();
        for uri in [
            "/api/submissions",
            "/api/submissions/summary",
            "/api/submissions/1",
        ] {
            let (status, headers, _) = call(&app, get_req(uri, "")).await;
            assert_eq!(status, StatusCode::UNAUTHORIZED, "{uri}");
            assert_eq!(headers.get("X-Auth-Required").unwrap(), "true");
        }

        let (status, _, _) = call(&app, post_req("/api/submissions/1/approve", "", "")).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_review_flow() {
        let app = app();
        let cookie = sign_in(&app).await;

        let (status, _, body) = call(&app, post_req("/api/submissions/2/approve", &cookie, "")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "approved");

        let (_, _, summary) = call(&app, get_req("/api/submissions/summary", &cookie)).await;
        assert_eq!(summary["pending"], 2);
        assert_eq!(summary["approved"], 2);
        assert_eq!(summary["rejected"], 1);

        let (status, _, body) = call(
            &app,
            post_req(
                "/api/submissions/1/reject",
                &cookie,
                r#"{"reason":"Low quality image"}"#,
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["rejectionReason"], "Low quality image");

        let (_, _, notes) = call(&app, get_req("/api/notifications", "")).await;
        let titles: Vec<_> = notes
            .as_array()
            .unwrap()
            .iter()
            .map(|n| n["title"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(
            titles,
            vec![
                "Login Successful",
                "Submission Approved",
                "Submission Rejected"
            ]
        );

        let (_, _, notes) = call(&app, get_req("/api/notifications", "")).await;
        assert!(notes.as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_sign_out_revokes_access() {
        let app = app();
        let cookie = sign_in(&app).await;

        let (status, _, _) = call(&app, get_req("/api/submissions", &cookie)).await;
        assert_eq!(status, StatusCode::OK);

        let (status, _, _) = call(&app, post_req("/api/auth/signout", &cookie, "")).await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (status, _, _) = call(&app, get_req("/api/submissions", &cookie)).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_anonymous_sign_out_keeps_operator_signed_in() {
        let app = app();
        let cookie = sign_in(&app).await;

        let (status, _, _) = call(&app, post_req("/api/auth/signout", "", "")).await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (status, _, _) = call(&app, get_req("/api/submissions", &cookie)).await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_new_sign_in_invalidates_old_cookie() {
        let app = app();
        let first = sign_in(&app).await;
        let second = sign_in(&app).await;

        let (status, _, _) = call(&app, get_req("/api/submissions", &first)).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        let (status, _, _) = call(&app, get_req("/api/submissions", &second)).await;
        assert_eq!(status, StatusCode::OK);
    }
}
