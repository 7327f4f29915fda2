//! # Session Middleware
//!
//! Resolves the session identity for protected routes and renders the
//! dedicated access-denied state when no identity is established. Denied
//! access is never a silent no-op.

use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::AppState;

/// Session authentication middleware
///
/// This middleware:
/// 1. Reads the current identity from the session handle
/// 2. Adds it to request extensions for handlers
/// 3. Rejects requests without an established identity
pub async fn session_middleware(State(state): State<AppState>, mut request: Request, next: Next) -> Response {
    let Some(user) = state.session.current() else {
        return access_denied_response("Access denied: sign in required");
    };

    if !user.is_authenticated {
        return access_denied_response("Access denied: sign in required");
    }

    request.extensions_mut().insert(user);
    next.run(request).await
}

/// Render the dedicated access-denied state.
fn access_denied_response(message: &str) -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({
            "success": false,
            "code": "ACCESS_DENIED",
            "message": message
        })),
    )
        .into_response()
}
