//! # API Router Configuration
//!
//! Configures API routes for the Vigia application.

use axum::{
    extract::{Extension, Path, State as AxumState},
    middleware,
    routing::{delete, get, post},
    Json,
    Router,
};
use error::Result;

use crate::AppState;

/// Creates the API router with all routes
///
/// # Arguments
///
/// * `state` - Application state containing DB pool and session handle
///
/// # Returns
///
/// Configured Axum router with all routes
pub fn create_router(state: AppState) -> Router {
    // Protected routes that require an established session
    let protected_routes = Router::new()
        .route("/api/v1/auth/logout", post(logout_handler))
        .route("/api/v1/auth/me", get(me_handler))
        .route("/api/v1/records", get(list_records_handler))
        .route("/api/v1/records", post(create_record_handler))
        .route("/api/v1/summaries/weekly", get(weekly_summaries_handler))
        .route("/api/v1/summaries/cycles", get(cycle_summaries_handler))
        .route("/api/v1/localities/:name", get(locality_handler))
        .route("/api/v1/notifications", get(notifications_handler))
        .route("/api/v1/admin/users", get(list_users_handler))
        .route("/api/v1/admin/users", post(create_user_handler))
        .route("/api/v1/admin/users/:id", delete(delete_user_handler))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            crate::middleware::auth::session_middleware,
        ));

    // Public routes that don't require authentication
    let public_routes = Router::new()
        .route("/api/v1/auth/login", post(login_handler))
        .route("/api/v1/auth/register", post(register_handler));

    public_routes.merge(protected_routes).with_state(state)
}

/// Wrapper handler for login endpoint that uses State extractor
async fn login_handler(
    AxumState(state): AxumState<AppState>,
    Json(req): Json<crate::dto::auth::LoginRequest>,
) -> Result<Json<crate::dto::auth::SessionResponse>> {
    crate::auth::handlers::login_handler(&state, req).await
}

/// Wrapper handler for registration endpoint that uses State extractor
async fn register_handler(
    AxumState(state): AxumState<AppState>,
    Json(req): Json<crate::dto::auth::RegisterRequest>,
) -> Result<Json<crate::dto::auth::SessionResponse>> {
    crate::auth::handlers::register_handler(&state, req).await
}

/// Wrapper handler for logout endpoint that uses State extractor
async fn logout_handler(
    AxumState(state): AxumState<AppState>,
) -> Result<Json<crate::dto::SuccessResponse>> {
    crate::auth::handlers::logout_handler(&state).await
}

/// Wrapper handler for the current-identity endpoint
async fn me_handler(
    AxumState(state): AxumState<AppState>,
) -> Result<Json<crate::dto::auth::SessionResponse>> {
    crate::auth::handlers::me_handler(&state).await
}

/// Wrapper handler for listing inspection records
async fn list_records_handler(
    AxumState(state): AxumState<AppState>,
) -> Result<Json<crate::dto::records::RecordListResponse>> {
    crate::reports::list_records_handler(&state).await
}

/// Wrapper handler for submitting an inspection record
async fn create_record_handler(
    AxumState(state): AxumState<AppState>,
    Json(req): Json<crate::dto::records::CreateRecordRequest>,
) -> Result<(http::StatusCode, Json<crate::dto::records::RecordResponse>)> {
    crate::reports::create_record_handler(&state, req).await
}

/// Wrapper handler for the weekly dashboard
async fn weekly_summaries_handler(
    AxumState(state): AxumState<AppState>,
) -> Result<Json<crate::dto::summaries::WeeklySummariesResponse>> {
    crate::reports::weekly_summaries_handler(&state).await
}

/// Wrapper handler for the cyclical dashboard
async fn cycle_summaries_handler(
    AxumState(state): AxumState<AppState>,
) -> Result<Json<crate::dto::summaries::CycleSummariesResponse>> {
    crate::reports::cycle_summaries_handler(&state).await
}

/// Wrapper handler for the locality drill-down
async fn locality_handler(
    AxumState(state): AxumState<AppState>,
    Path(name): Path<String>,
) -> Result<Json<crate::dto::summaries::SelectionResponse>> {
    crate::reports::locality_handler(&state, &name).await
}

/// Wrapper handler for draining pending notifications
async fn notifications_handler(
    AxumState(state): AxumState<AppState>,
) -> Result<Json<Vec<crate::notify::Notification>>> {
    crate::reports::notifications_handler(&state).await
}

/// Wrapper handler for listing users
async fn list_users_handler(
    AxumState(state): AxumState<AppState>,
    Extension(user): Extension<access::AuthUser>,
) -> Result<Json<crate::dto::users::UserListResponse>> {
    crate::admin::users::list_users_handler(&state, user).await
}

/// Wrapper handler for creating a user
async fn create_user_handler(
    AxumState(state): AxumState<AppState>,
    Extension(user): Extension<access::AuthUser>,
    Json(req): Json<crate::dto::users::CreateUserRequest>,
) -> Result<(http::StatusCode, Json<crate::dto::SuccessResponse>)> {
    crate::admin::users::create_user_handler(&state, user, req).await
}

/// Wrapper handler for removing a user
async fn delete_user_handler(
    AxumState(state): AxumState<AppState>,
    Extension(user): Extension<access::AuthUser>,
    Path(id): Path<i32>,
) -> Result<Json<crate::dto::SuccessResponse>> {
    crate::admin::users::delete_user_handler(&state, user, id).await
}

/// Creates the health check router
pub fn create_health_router() -> Router { Router::new().route("/health", axum::routing::get(|| async { "OK" })) }

/// Creates the main application router
///
/// # Arguments
///
/// * `state` - Application state containing DB pool and session handle
///
/// # Returns
///
/// Main router with health checks and API routes
pub fn create_app_router(state: AppState) -> Router {
    Router::new()
        .merge(create_health_router())
        .merge(create_router(state))
}
