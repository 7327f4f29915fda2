//! # Record Store Adapter
//!
//! Loads and saves inspection records against the remote database, with the
//! local cache as degraded fallback on the read path. A cache parse failure
//! is reported to the user and yields an empty sequence; it never propagates
//! upward.

use entity::inspection_records::{
    ActiveModel as InspectionActiveModel,
    Column as RecordColumn,
    Entity as InspectionRecords,
    Model as InspectionRecord,
};
use error::Result;
use sea_orm::{ActiveModelTrait, DbConn, EntityTrait, QueryOrder};
use tracing::{debug, warn};

use crate::{
    notify::{Notification, Notifier},
    store::cache::RecordCache,
};

/// Adapter over the remote record table and the local cache fallback.
#[derive(Clone)]
pub struct RecordStore {
    db:    DbConn,
    cache: RecordCache,
}

impl RecordStore {
    /// Create a store over a connection and cache.
    #[must_use]
    pub fn new(db: DbConn, cache: RecordCache) -> Self {
        Self {
            db,
            cache,
        }
    }

    /// Load all inspection records in insertion order.
    ///
    /// On a remote failure the local cache is read instead; a malformed
    /// cache payload is reported through the notifier and degrades to an
    /// empty sequence.
    pub async fn load(&self, notifier: &dyn Notifier) -> Vec<InspectionRecord> {
        match InspectionRecords::find()
            .order_by_asc(RecordColumn::Id)
            .all(&self.db)
            .await
        {
            Ok(records) => {
                logging::log_store_operation!("load", "database", records.len());
                // Keep the fallback payload fresh; a stale cache is better
                // than an empty one, so failures only log.
                if let Err(e) = self.cache.write(&records) {
                    debug!(error = %e, "Cache refresh failed");
                }
                records
            },
            Err(e) => {
                warn!(error = %e, "Record load failed, falling back to local cache");
                self.load_from_cache(notifier)
            },
        }
    }

    /// Read the degraded local cache directly.
    pub fn load_from_cache(&self, notifier: &dyn Notifier) -> Vec<InspectionRecord> {
        match self.cache.read() {
            Ok(records) => {
                logging::log_store_operation!("load", "cache", records.len());
                records
            },
            Err(e) => {
                warn!(error = %e, "Cached records could not be parsed");
                notifier.notify(Notification::error(
                    "Stored records could not be read; starting with an empty list",
                ));
                Vec::new()
            },
        }
    }

    /// Persist one new inspection record.
    ///
    /// Records are immutable once persisted; corrections create a new record
    /// through this same path. The cache is refreshed best-effort after a
    /// successful insert.
    pub async fn append(&self, record: InspectionActiveModel) -> Result<InspectionRecord> {
        let inserted = record.insert(&self.db).await?;
        debug!(id = %inserted.id, locality = %inserted.locality, "Inspection record saved");

        match InspectionRecords::find()
            .order_by_asc(RecordColumn::Id)
            .all(&self.db)
            .await
        {
            Ok(records) => {
                if let Err(e) = self.cache.write(&records) {
                    debug!(error = %e, "Cache refresh failed");
                }
            },
            Err(e) => debug!(error = %e, "Cache refresh skipped"),
        }

        Ok(inserted)
    }
}

#[cfg(test)]
mod tests {
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase};

    use super::*;
    use crate::notify::NotificationQueue;

    fn failing_db() -> DbConn {
        MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors(vec![DbErr::Custom("connection refused".to_string())])
            .into_connection()
    }

    fn temp_cache(name: &str) -> RecordCache {
        let dir = std::env::temp_dir().join(format!("vigia-store-{}-{}", name, std::process::id()));
        RecordCache::new(dir)
    }

    fn record(id: i64) -> InspectionRecord {
        InspectionRecord {
            id,
            municipality: "Recife".to_string(),
            locality: "Centro".to_string(),
            cycle: "1".to_string(),
            epidemiological_week: "9".to_string(),
            work_modality: "LI".to_string(),
            start_date: chrono::NaiveDate::from_ymd_opt(2024, 1, 8).unwrap(),
            end_date: chrono::NaiveDate::from_ymd_opt(2024, 1, 12).unwrap(),
            total_properties: 10,
            inspections: 9,
            deposits_eliminated: 2,
            deposits_treated: 1,
            supervisor: "Marcos".to_string(),
            created_at: chrono::DateTime::from_timestamp(1_700_000_000, 0).unwrap(),
        }
    }

    #[tokio::test]
    async fn test_load_falls_back_to_cache_on_db_failure() {
        let cache = temp_cache("fallback");
        cache.write(&[record(1), record(2)]).unwrap();

        let store = RecordStore::new(failing_db(), cache.clone());
        let notifier = NotificationQueue::new();

        let records = store.load(&notifier).await;
        assert_eq!(records.len(), 2);
        // Degraded read is not an error to report.
        assert!(notifier.is_empty());

        std::fs::remove_file(cache.path()).ok();
    }

    #[tokio::test]
    async fn test_malformed_cache_reports_once_and_degrades_to_empty() {
        let cache = temp_cache("parse-failure");
        std::fs::create_dir_all(cache.path().parent().unwrap()).unwrap();
        std::fs::write(cache.path(), "{not json").unwrap();

        let store = RecordStore::new(failing_db(), cache.clone());
        let notifier = NotificationQueue::new();

        let records = store.load(&notifier).await;
        assert!(records.is_empty());
        assert_eq!(notifier.len(), 1);

        std::fs::remove_file(cache.path()).ok();
    }

    #[tokio::test]
    async fn test_missing_cache_degrades_to_empty_without_toast() {
        let cache = temp_cache("missing");
        let store = RecordStore::new(failing_db(), cache);
        let notifier = NotificationQueue::new();

        let records = store.load(&notifier).await;
        assert!(records.is_empty());
        assert!(notifier.is_empty());
    }
}
