//! # Access Policy
//!
//! Maps an identity's email address to an access level. The allow-rule is
//! configuration-injected: exact administrator addresses and administrator
//! domains come from the environment, never from hard-coded values.
//!
//! Self-registration is deliberately asymmetric: an unmatched email gets the
//! configured default clamped to at least supervisor, so self-service signup
//! can never create the lowest-privilege agente tier. Agente identities are
//! provisioned by an administrator through the user management operations.

use entity::AccessLevel;

use crate::levels::LevelRank;

/// Configuration-injected rule set for [`AccessPolicy::determine_access_level`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessPolicy {
    /// Exact email addresses granted administrador (lowercased).
    admin_emails:  Vec<String>,
    /// Email domains granted administrador (lowercased, no leading '@').
    admin_domains: Vec<String>,
    /// Level assigned when no rule matches, before the supervisor floor.
    default_level: AccessLevel,
}

impl Default for AccessPolicy {
    fn default() -> Self {
        Self {
            admin_emails:  Vec::new(),
            admin_domains: Vec::new(),
            default_level: AccessLevel::Supervisor,
        }
    }
}

impl AccessPolicy {
    /// Create a policy from explicit rule lists.
    #[must_use]
    pub fn new(admin_emails: Vec<String>, admin_domains: Vec<String>, default_level: AccessLevel) -> Self {
        Self {
            admin_emails: admin_emails.into_iter().map(|e| normalize(&e)).collect(),
            admin_domains: admin_domains.into_iter().map(|d| normalize(&d)).collect(),
            default_level,
        }
    }

    /// Create a policy from `VIGIA_ADMIN_EMAILS` / `VIGIA_ADMIN_DOMAINS`
    /// (comma-separated). Missing variables yield empty rule lists.
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(
            split_csv(std::env::var("VIGIA_ADMIN_EMAILS").ok()),
            split_csv(std::env::var("VIGIA_ADMIN_DOMAINS").ok()),
            AccessLevel::Supervisor,
        )
    }

    /// Determine the access level for a self-registering identity.
    ///
    /// Matching is case-insensitive. An administrator allow-list or domain
    /// match yields administrador; otherwise the configured default applies,
    /// clamped so the result is never below supervisor.
    #[must_use]
    pub fn determine_access_level(&self, email: &str) -> AccessLevel {
        let email = normalize(email);

        if self.admin_emails.iter().any(|e| *e == email) {
            tracing::debug!(email = %email, "Administrator allow-list match");
            return AccessLevel::Administrador;
        }

        if let Some(domain) = email.split_once('@').map(|(_, d)| d) {
            if self.admin_domains.iter().any(|d| *d == domain) {
                tracing::debug!(email = %email, domain = %domain, "Administrator domain match");
                return AccessLevel::Administrador;
            }
        }

        // Self-registration floor: never below supervisor.
        if self.default_level.rank() < AccessLevel::Supervisor.rank() {
            AccessLevel::Supervisor
        }
        else {
            self.default_level
        }
    }
}

fn normalize(s: &str) -> String { s.trim().to_lowercase() }

fn split_csv(value: Option<String>) -> Vec<String> {
    value
        .unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
