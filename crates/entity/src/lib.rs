//! Entity definitions for Vigia
//!
//! This crate contains Sea-ORM entity definitions for the database models.
//! The schema itself is owned by the external database service.

pub mod inspection_records;
pub use inspection_records::Entity as InspectionRecords;
pub mod users;
pub use users::{AccessLevel, Entity as Users};
pub mod user_localities;
pub use user_localities::Entity as UserLocalities;
