//! Router gating tests: the session middleware, the access-denied state,
//! and level checks on admin routes. Runs against a mock connection; no
//! query reaches the database in these paths.

mod common;

use access::{AccessLevel, AccessPolicy, AuthUser};
use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use common::init_test_env;
use sea_orm::{DatabaseBackend, MockDatabase};
use server::{create_app_router, store::cache::RecordCache, AppState};
use tower::util::ServiceExt;

fn test_state() -> AppState {
    let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
    let cache_dir = std::env::temp_dir().join(format!("vigia-mw-{}", std::process::id()));
    AppState::new(db, AccessPolicy::default(), RecordCache::new(cache_dir))
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn health_is_public() {
    init_test_env();
    let state = test_state();
    let app = create_app_router(state);

    let response = app.oneshot(get("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn protected_route_without_session_renders_access_denied() {
    init_test_env();
    let state = test_state();
    let app = create_app_router(state);

    let response = app.oneshot(get("/api/v1/auth/me")).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn session_identity_unlocks_protected_routes() {
    init_test_env();
    let state = test_state();
    state.session.init(AuthUser::new(
        Some(1),
        "ana@example.com",
        "Supervisora",
        AccessLevel::Supervisor,
    ));

    let app = create_app_router(state);
    let response = app.oneshot(get("/api/v1/auth/me")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn logout_returns_routes_to_denied_state() {
    init_test_env();
    let state = test_state();
    state.session.init(AuthUser::new(
        Some(1),
        "ana@example.com",
        "Supervisora",
        AccessLevel::Supervisor,
    ));
    state.session.clear();

    let app = create_app_router(state);
    let response = app.oneshot(get("/api/v1/auth/me")).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn agente_is_denied_on_the_admin_panel() {
    init_test_env();
    let state = test_state();
    state.session.init(AuthUser::new(
        Some(2),
        "agente@example.com",
        "Agente de Endemias",
        AccessLevel::Agente,
    ));

    let app = create_app_router(state);
    let response = app.oneshot(get("/api/v1/admin/users")).await.unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn notifications_drain_over_http() {
    init_test_env();
    let state = test_state();
    state.session.init(AuthUser::new(
        Some(1),
        "ana@example.com",
        "Supervisora",
        AccessLevel::Supervisor,
    ));
    {
        use server::notify::{Notification, Notifier};
        state.notifications.notify(Notification::success("saved"));
    }

    let app = create_app_router(state.clone());
    let response = app.oneshot(get("/api/v1/notifications")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    // Drained: a second read observes an empty queue.
    assert!(state.notifications.is_empty());
}
