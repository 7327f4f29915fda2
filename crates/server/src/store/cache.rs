//! # Local Record Cache
//!
//! Degraded-mode storage for inspection records: a single JSON array under a
//! fixed cache key. There is no versioning field; schema changes are not
//! migrated, only overwritten.

use std::path::{Path, PathBuf};

use entity::inspection_records::Model as InspectionRecord;
use error::{AppError, Result};

/// Fixed cache key; the payload lives in `<dir>/<CACHE_KEY>.json`.
pub const CACHE_KEY: &str = "locality_records";

/// File-backed cache holding one serialized record array.
#[derive(Debug, Clone)]
pub struct RecordCache {
    path: PathBuf,
}

impl RecordCache {
    /// Create a cache rooted at the given directory.
    #[must_use]
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            path: dir.as_ref().join(format!("{}.json", CACHE_KEY)),
        }
    }

    /// Cache payload path.
    #[must_use]
    pub fn path(&self) -> &Path { &self.path }

    /// Read the cached record array.
    ///
    /// A missing payload is an empty sequence; a malformed payload is a
    /// cache error for the caller to report.
    pub fn read(&self) -> Result<Vec<InspectionRecord>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let payload = std::fs::read_to_string(&self.path)?;
        let records: Vec<InspectionRecord> = serde_json::from_str(&payload)?;
        Ok(records)
    }

    /// Overwrite the cached record array.
    pub fn write(&self, records: &[InspectionRecord]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let payload = serde_json::to_string(records)?;
        std::fs::write(&self.path, payload)?;
        Ok(())
    }
}
