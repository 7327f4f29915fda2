//! # Session Identity
//!
//! The signed-in identity for the current session, held in an explicitly
//! owned handle with init/clear lifecycle calls at the login and logout
//! boundaries. The handle is dependency-injected through application state;
//! there is no global singleton.

use std::sync::{Arc, RwLock};

use entity::AccessLevel;
use serde::{Deserialize, Serialize};

/// Identity established at login or registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthUser {
    /// Profile id, when the identity has a stored profile.
    pub id:               Option<i32>,
    /// Email address the identity signed in with.
    pub email:            String,
    /// Display username derived from the email local-part.
    pub username:         String,
    /// Free-text job title.
    pub role:             String,
    /// Resolved access level.
    pub access_level:     AccessLevel,
    /// Whether the identity is authenticated.
    pub is_authenticated: bool,
}

impl AuthUser {
    /// Build an authenticated identity.
    #[must_use]
    pub fn new(id: Option<i32>, email: &str, role: &str, access_level: AccessLevel) -> Self {
        Self {
            id,
            email: email.to_string(),
            username: email_local_part(email),
            role: role.to_string(),
            access_level,
            is_authenticated: true,
        }
    }

    /// Build an identity from a stored profile row.
    #[must_use]
    pub fn from_profile(profile: &entity::users::Model) -> Self {
        Self::new(
            Some(profile.id),
            &profile.email,
            &profile.role,
            profile.access_level,
        )
    }
}

/// Derive the display username from an email address.
#[must_use]
pub fn email_local_part(email: &str) -> String {
    email
        .split_once('@')
        .map(|(local, _)| local)
        .unwrap_or(email)
        .to_string()
}

/// Process-wide session handle with an explicit lifecycle.
///
/// Cloning shares the underlying slot; `init` is called at login and
/// registration, `clear` at logout. The identity is discarded with the
/// process, never persisted.
#[derive(Debug, Clone, Default)]
pub struct Session {
    inner: Arc<RwLock<Option<AuthUser>>>,
}

impl Session {
    /// Create an empty (signed-out) session handle.
    #[must_use]
    pub fn new() -> Self { Self::default() }

    /// Establish the session identity at login/registration.
    pub fn init(&self, user: AuthUser) {
        let mut slot = self.inner.write().expect("session lock poisoned");
        *slot = Some(user);
    }

    /// Clear the session identity at logout.
    pub fn clear(&self) {
        let mut slot = self.inner.write().expect("session lock poisoned");
        *slot = None;
    }

    /// Current identity, if signed in.
    #[must_use]
    pub fn current(&self) -> Option<AuthUser> {
        self.inner.read().expect("session lock poisoned").clone()
    }

    /// Whether an authenticated identity is established.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.inner
            .read()
            .expect("session lock poisoned")
            .as_ref()
            .map(|u| u.is_authenticated)
            .unwrap_or(false)
    }
}
