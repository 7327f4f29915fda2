//! # User Form Validation
//!
//! Ordered short-circuit validation for the admin user form. Exactly one
//! message is reported for the first violated rule; passing validation
//! clears any prior message.

use std::sync::LazyLock;

use entity::AccessLevel;
use regex::Regex;

/// `local@domain.tld`-shaped email pattern.
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

/// Input of the admin user form, as submitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserForm {
    pub name:         String,
    pub email:        String,
    pub role:         String,
    pub access_level: Option<AccessLevel>,
}

/// Settable error-message slot for form validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors {
    message: Option<String>,
}

impl FormErrors {
    /// Create an empty slot.
    #[must_use]
    pub fn new() -> Self { Self::default() }

    /// The current message, if a rule was violated.
    #[must_use]
    pub fn current(&self) -> Option<&str> { self.message.as_deref() }

    fn set(&mut self, message: &str) { self.message = Some(message.to_string()); }

    fn clear(&mut self) { self.message = None; }
}

/// Validate the user form, reporting at most one error.
///
/// Checks run in order (non-empty name, email, role, presence of access
/// level, then email syntax) and stop at the first failure. Returns true
/// and clears the slot only when every check passes.
pub fn validate_user_form(form: &UserForm, errors: &mut FormErrors) -> bool {
    if form.name.trim().is_empty() {
        errors.set("Name is required");
        return false;
    }
    if form.email.trim().is_empty() {
        errors.set("Email is required");
        return false;
    }
    if form.role.trim().is_empty() {
        errors.set("Role is required");
        return false;
    }
    if form.access_level.is_none() {
        errors.set("Access level is required");
        return false;
    }
    if !EMAIL_RE.is_match(form.email.trim()) {
        errors.set("Invalid email format");
        return false;
    }

    errors.clear();
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(name: &str, email: &str, role: &str, level: Option<AccessLevel>) -> UserForm {
        UserForm {
            name:         name.to_string(),
            email:        email.to_string(),
            role:         role.to_string(),
            access_level: level,
        }
    }

    #[test]
    fn test_empty_name_reports_name_message_only() {
        let mut errors = FormErrors::new();
        let ok = validate_user_form(
            &form("", "a@b.com", "role", Some(AccessLevel::Agente)),
            &mut errors,
        );

        assert!(!ok);
        assert_eq!(errors.current(), Some("Name is required"));
    }

    #[test]
    fn test_checks_short_circuit_in_order() {
        let mut errors = FormErrors::new();

        validate_user_form(&form("Ana", "", "", None), &mut errors);
        assert_eq!(errors.current(), Some("Email is required"));

        validate_user_form(&form("Ana", "a@b.com", "", None), &mut errors);
        assert_eq!(errors.current(), Some("Role is required"));

        validate_user_form(&form("Ana", "a@b.com", "Agente", None), &mut errors);
        assert_eq!(errors.current(), Some("Access level is required"));
    }

    #[test]
    fn test_email_format_checked_last() {
        let mut errors = FormErrors::new();
        let ok = validate_user_form(
            &form("Ana", "not-an-email", "Agente", Some(AccessLevel::Agente)),
            &mut errors,
        );

        assert!(!ok);
        assert_eq!(errors.current(), Some("Invalid email format"));
    }

    #[test]
    fn test_valid_form_clears_prior_error() {
        let mut errors = FormErrors::new();
        validate_user_form(&form("", "", "", None), &mut errors);
        assert!(errors.current().is_some());

        let ok = validate_user_form(
            &form("Ana", "ana@example.com", "Supervisora", Some(AccessLevel::Supervisor)),
            &mut errors,
        );
        assert!(ok);
        assert_eq!(errors.current(), None);
    }

    #[test]
    fn test_email_pattern_requires_tld() {
        let mut errors = FormErrors::new();
        assert!(!validate_user_form(
            &form("Ana", "ana@localhost", "Agente", Some(AccessLevel::Agente)),
            &mut errors,
        ));
        assert!(validate_user_form(
            &form("Ana", "ana@example.com.br", "Agente", Some(AccessLevel::Agente)),
            &mut errors,
        ));
    }
}
