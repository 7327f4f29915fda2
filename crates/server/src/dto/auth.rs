//! # Session Data Transfer Objects
//!
//! Request and response types for session endpoints.

use access::AuthUser;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request body for sign-in
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Validate)]
pub struct LoginRequest {
    /// User's email address
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
}

/// Request body for self-registration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Validate)]
pub struct RegisterRequest {
    /// Display name
    #[validate(length(min = 1, max = 255, message = "Name is required"))]
    pub name: String,

    /// Email address
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    /// Free-text job title
    #[validate(length(min = 1, max = 255, message = "Role is required"))]
    pub role: String,
}

/// Response carrying the session identity
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionResponse {
    /// Indicates operation success
    pub success: bool,
    /// The established identity
    pub user:    AuthUser,
}
