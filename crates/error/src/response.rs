//! # Error Response Envelope
//!
//! Converts application errors into the standard JSON error envelope used by
//! every API endpoint.
//!
//! ## Response Format
//!
//! ```json
//! {
//!   "success": false,
//!   "code": "ACCESS_DENIED",
//!   "message": "Supervisor level is required"
//! }
//! ```

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::AppError;

/// JSON body of an error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Always false for errors.
    pub success: bool,
    /// Stable machine-readable error code.
    pub code:    String,
    /// Human-readable error message.
    pub message: String,
}

impl ErrorBody {
    /// Build the envelope for an application error.
    #[must_use]
    pub fn from_error(err: &AppError) -> Self {
        Self {
            success: false,
            code:    err.code().to_string(),
            message: err.message(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(error = %self, "Request failed");
        }
        (status, Json(ErrorBody::from_error(&self))).into_response()
    }
}
