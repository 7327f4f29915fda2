//! # Access Level Semantics
//!
//! Rank and label semantics for the persisted [`AccessLevel`] enum, plus the
//! permission check used to gate management operations.
//!
//! Levels rank strictly: administrador > supervisor > agente. The
//! desconhecido fallback ranks zero and is denied everywhere.

use entity::AccessLevel;
use error::{AppError, Result};

/// Rank, label and permission semantics for an access level.
pub trait LevelRank {
    /// Numeric permission rank; higher outranks lower, zero is never granted.
    fn rank(&self) -> u8;
    /// Human-readable label.
    fn label(&self) -> &'static str;
    /// Whether this level satisfies an operation requiring `required`.
    fn permits(&self, required: AccessLevel) -> bool;
}

impl LevelRank for AccessLevel {
    fn rank(&self) -> u8 {
        match self {
            AccessLevel::Administrador => 3,
            AccessLevel::Supervisor => 2,
            AccessLevel::Agente => 1,
            AccessLevel::Desconhecido => 0,
        }
    }

    fn label(&self) -> &'static str {
        match self {
            AccessLevel::Administrador => "Administrador",
            AccessLevel::Supervisor => "Supervisor",
            AccessLevel::Agente => "Agente",
            AccessLevel::Desconhecido => "Desconhecido",
        }
    }

    fn permits(&self, required: AccessLevel) -> bool {
        // Rank zero is a level-less identity and is always denied, even if
        // a caller mistakenly requires Desconhecido.
        self.rank() > 0 && self.rank() >= required.rank()
    }
}

/// Parse a level from its string form, case-insensitively.
///
/// Unrecognized input yields the desconhecido fallback rather than an error;
/// the fallback is denied by every permission check.
#[must_use]
pub fn parse_level(s: &str) -> AccessLevel {
    match s.trim().to_lowercase().as_str() {
        "agente" => AccessLevel::Agente,
        "supervisor" => AccessLevel::Supervisor,
        "administrador" => AccessLevel::Administrador,
        _ => AccessLevel::Desconhecido,
    }
}

/// Check a level against a required level and return an error if denied.
///
/// This is the convenience form handlers use to gate management actions.
/// A denied check maps to the dedicated access-denied response rather than
/// a silent no-op.
pub fn require_level(level: AccessLevel, required: AccessLevel) -> Result<()> {
    if level.permits(required) {
        return Ok(());
    }
    if level.rank() == 0 {
        return Err(AppError::unauthorized("Authentication required"));
    }
    Err(AppError::forbidden(format!(
        "{} level is required",
        required.label()
    )))
}
