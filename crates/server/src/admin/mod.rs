//! # User Management Operations
//!
//! Admin-panel operations on users and their locality assignments.
//!
//! - [`forms`]: ordered short-circuit form validation with an error slot
//! - [`users`]: create/list/delete, including the two-step dependent delete

pub mod forms;
pub mod users;
