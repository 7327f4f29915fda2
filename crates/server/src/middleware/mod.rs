//! # HTTP Middleware
//!
//! Session authentication for protected routes.

pub mod auth;
