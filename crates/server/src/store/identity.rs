//! # Identity Store
//!
//! Delete/query operations on the external identity store's two tables:
//! profile rows keyed by the numeric id and locality-access association rows
//! keyed by the opaque identity key. The trait seam exists so user
//! management can be exercised against a scripted store in tests.

use entity::{
    user_localities::{Column as LocalityColumn, Entity as UserLocalities},
    users::{Column as UserColumn, Entity as Users, Model as UserProfile},
};
use error::{AppError, Result};
use sea_orm::{ColumnTrait, DbConn, EntityTrait, QueryFilter, QueryOrder};

/// Delete/query operations user management depends on.
pub trait IdentityStore {
    /// Remove all locality-access association rows for an identity key.
    /// Returns the number of rows removed.
    fn delete_locality_links(&self, external_id: &str) -> impl std::future::Future<Output = Result<u64>> + Send;

    /// Delete a profile row. Missing rows are an error.
    fn delete_profile(&self, user_id: i32) -> impl std::future::Future<Output = Result<()>> + Send;

    /// Look up a profile by email.
    fn find_profile_by_email(&self, email: &str) -> impl std::future::Future<Output = Result<Option<UserProfile>>> + Send;

    /// Locality names assigned to an identity key.
    fn localities_for(&self, external_id: &str) -> impl std::future::Future<Output = Result<Vec<String>>> + Send;
}

/// Identity store over the Sea-ORM connection.
#[derive(Clone)]
pub struct DbIdentityStore {
    db: DbConn,
}

impl DbIdentityStore {
    /// Create a store over a connection.
    #[must_use]
    pub fn new(db: DbConn) -> Self {
        Self {
            db,
        }
    }
}

impl IdentityStore for DbIdentityStore {
    async fn delete_locality_links(&self, external_id: &str) -> Result<u64> {
        let result = UserLocalities::delete_many()
            .filter(LocalityColumn::ExternalId.eq(external_id))
            .exec(&self.db)
            .await?;
        Ok(result.rows_affected)
    }

    async fn delete_profile(&self, user_id: i32) -> Result<()> {
        let result = Users::delete_by_id(user_id).exec(&self.db).await?;
        if result.rows_affected == 0 {
            return Err(AppError::not_found(format!("User {} not found", user_id)));
        }
        Ok(())
    }

    async fn find_profile_by_email(&self, email: &str) -> Result<Option<UserProfile>> {
        let profile = Users::find()
            .filter(UserColumn::Email.eq(email))
            .one(&self.db)
            .await?;
        Ok(profile)
    }

    async fn localities_for(&self, external_id: &str) -> Result<Vec<String>> {
        let rows = UserLocalities::find()
            .filter(LocalityColumn::ExternalId.eq(external_id))
            .order_by_asc(LocalityColumn::Locality)
            .all(&self.db)
            .await?;
        Ok(rows.into_iter().map(|r| r.locality).collect())
    }
}
