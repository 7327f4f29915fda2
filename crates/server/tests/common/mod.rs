//! # Common Test Utilities
//!
//! Shared test infrastructure: logging setup, a scripted identity store for
//! exercising the two-step delete, and user fixtures.

use std::sync::{Mutex, Once};

use entity::users::Model as UserProfile;
use error::{AppError, Result};
use server::store::identity::IdentityStore;

/// Initialize test logging (run once per test session)
static INIT: Once = Once::new();

/// Initialize test environment including structured logging
pub fn init_test_env() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_test_writer()
            .with_max_level(tracing::Level::DEBUG)
            .try_init();
    });
}

/// Scripted identity store recording every call in order.
#[derive(Default)]
pub struct FakeIdentityStore {
    /// Fail the association-row delete when set
    pub fail_links:   bool,
    /// Fail the profile delete when set
    pub fail_profile: bool,
    /// Operations performed, in order
    pub calls:        Mutex<Vec<String>>,
}

impl FakeIdentityStore {
    pub fn new() -> Self { Self::default() }

    pub fn failing_links() -> Self {
        Self {
            fail_links: true,
            ..Self::default()
        }
    }

    pub fn failing_profile() -> Self {
        Self {
            fail_profile: true,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<String> { self.calls.lock().unwrap().clone() }

    fn record(&self, call: String) { self.calls.lock().unwrap().push(call); }
}

impl IdentityStore for FakeIdentityStore {
    async fn delete_locality_links(&self, external_id: &str) -> Result<u64> {
        self.record(format!("delete_links:{}", external_id));
        if self.fail_links {
            return Err(AppError::database("association delete refused"));
        }
        Ok(2)
    }

    async fn delete_profile(&self, user_id: i32) -> Result<()> {
        self.record(format!("delete_profile:{}", user_id));
        if self.fail_profile {
            return Err(AppError::database("profile delete refused"));
        }
        Ok(())
    }

    async fn find_profile_by_email(&self, email: &str) -> Result<Option<UserProfile>> {
        self.record(format!("find_profile:{}", email));
        Ok(None)
    }

    async fn localities_for(&self, external_id: &str) -> Result<Vec<String>> {
        self.record(format!("localities_for:{}", external_id));
        Ok(Vec::new())
    }
}

/// Test fixture for user profiles
pub struct UserFixture {
    pub id:          i32,
    pub email:       String,
    pub external_id: Option<String>,
}

impl Default for UserFixture {
    fn default() -> Self {
        Self {
            id:          1,
            email:       "test@example.com".to_string(),
            external_id: Some("uid-123".to_string()),
        }
    }
}

impl UserFixture {
    /// Create a new fixture with default values
    #[must_use]
    pub fn new() -> Self { Self::default() }

    /// Set the profile id
    #[must_use]
    pub fn with_id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    /// Set the identity-store key
    #[must_use]
    pub fn with_external_id(mut self, external_id: Option<&str>) -> Self {
        self.external_id = external_id.map(str::to_string);
        self
    }
}
