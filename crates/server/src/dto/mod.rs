//! # Data Transfer Objects
//!
//! Request and response types for the API endpoints.

pub mod auth;
pub mod records;
pub mod summaries;
pub mod users;

use serde::{Deserialize, Serialize};

/// Generic success response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuccessResponse {
    /// Indicates operation success
    pub success: bool,
    /// Human-readable message
    pub message: String,
}
