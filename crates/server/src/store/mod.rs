//! # Store Adapters
//!
//! Adapters over the external database service and the degraded local cache.
//!
//! - [`records`]: inspection-record load/save with cache fallback
//! - [`cache`]: single-key serialized record cache
//! - [`identity`]: profile and locality-association delete/query operations

pub mod cache;
pub mod identity;
pub mod records;
