//! # Session Endpoints
//!
//! Login, self-registration, logout, and the current-identity lookup.
//! Credential verification itself belongs to the external identity service;
//! these endpoints resolve the profile, apply the access policy, and drive
//! the session handle's init/clear lifecycle.

pub mod handlers;
