//! # Vigia API Server
//!
//! Axum-based HTTP API for the Vigia vector-control dashboard.
//!
//! ## Modules
//!
//! - [`auth`]: Session login/logout endpoints
//! - [`admin`]: User management operations
//! - [`reports`]: Record intake, summaries and locality drill-down
//! - [`store`]: Record store adapter and identity store
//! - [`dto`]: Request/response data transfer objects
//! - [`middleware`]: Session authentication middleware
//! - [`router`]: API route configuration

pub mod admin;
pub mod auth;
pub mod dto;
pub mod inflight;
pub mod middleware;
pub mod notify;
pub mod reports;
pub mod router;
pub mod store;

use std::sync::Arc;

pub use router::create_app_router;

use crate::{inflight::InFlight, notify::NotificationQueue, store::cache::RecordCache};

/// Application state shared across request handlers
#[derive(Clone, Debug)]
pub struct AppState {
    /// Database connection pool
    pub db:            sea_orm::DbConn,
    /// Session identity handle (init at login, clear at logout)
    pub session:       access::Session,
    /// Configuration-injected access policy
    pub policy:        access::AccessPolicy,
    /// Pending user-facing notifications (toasts)
    pub notifications: Arc<NotificationQueue>,
    /// Duplicate-submission suppression
    pub inflight:      InFlight,
    /// Local record cache for degraded store mode
    pub cache:         RecordCache,
}

impl AppState {
    /// Assemble the application state around a database connection.
    #[must_use]
    pub fn new(db: sea_orm::DbConn, policy: access::AccessPolicy, cache: RecordCache) -> Self {
        Self {
            db,
            session: access::Session::new(),
            policy,
            notifications: Arc::new(NotificationQueue::new()),
            inflight: InFlight::default(),
            cache,
        }
    }

    /// Record store adapter over this state's connection and cache.
    #[must_use]
    pub fn records(&self) -> store::records::RecordStore {
        store::records::RecordStore::new(self.db.clone(), self.cache.clone())
    }

    /// Identity store adapter over this state's connection.
    #[must_use]
    pub fn identities(&self) -> store::identity::DbIdentityStore {
        store::identity::DbIdentityStore::new(self.db.clone())
    }
}
