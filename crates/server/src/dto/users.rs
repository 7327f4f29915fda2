//! # User Data Transfer Objects
//!
//! Request and response types for user management endpoints.

use entity::AccessLevel;
use serde::{Deserialize, Serialize};

/// Request to create a new user (admin provisioning)
///
/// Field-level validation is intentionally not derived here: the form is
/// checked by the ordered short-circuit validator so exactly one message is
/// reported for the first violated rule.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateUserRequest {
    /// Display name
    pub name:         String,
    /// Email address (unique)
    pub email:        String,
    /// Free-text job title
    pub role:         String,
    /// Access level to assign (agente, supervisor, administrador)
    pub access_level: Option<String>,
    /// Identity-store key, when already provisioned in the identity service
    pub external_id:  Option<String>,
    /// Locality names the user may act upon
    #[serde(default)]
    pub localities:   Vec<String>,
}

impl CreateUserRequest {
    /// The requested access level, if present and recognized.
    ///
    /// An unrecognized value maps to the desconhecido fallback, which the
    /// form validator treats as present but the permission checks deny.
    #[must_use]
    pub fn parsed_access_level(&self) -> Option<AccessLevel> {
        self.access_level
            .as_deref()
            .map(access::parse_level)
    }
}

/// Response for one user row
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserResponse {
    /// Numeric profile id
    pub id:           i32,
    /// Display name
    pub name:         String,
    /// Email address
    pub email:        String,
    /// Free-text job title
    pub role:         String,
    /// Access level string form
    pub access_level: String,
    /// Whether the account is active
    pub active:       bool,
    /// Identity-store key
    pub external_id:  Option<String>,
    /// Assigned locality names
    pub localities:   Vec<String>,
}

/// Response for the user list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserListResponse {
    /// Whether the operation was successful
    pub success: bool,
    /// All users
    pub users:   Vec<UserResponse>,
}
