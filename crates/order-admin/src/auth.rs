//! Operator sign-in.
//!
//! A [`Session`] is the proof of a successful login. [`OrderBoard`](crate::board::OrderBoard)
//! takes one in its constructor, so nothing can reach the orders without signing in first.

use crate::config::{AdminCredentials, Secret};
use chrono::{DateTime, Utc};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("Invalid email or password")]
    InvalidCredentials,
}

/// Decides whether an email and password pair may open a session.
pub trait CredentialPolicy: Send + Sync {
    fn verify(&self, email: &str, password: &str) -> bool;
}

/// Accepts exactly the admin credentials supplied through configuration secrets.
#[derive(Debug, Clone)]
pub struct ConfiguredCredentials {
    email: String,
    password: Secret,
}

impl From<AdminCredentials> for ConfiguredCredentials {
    fn from(credentials: AdminCredentials) -> Self {
        Self {
            email: credentials.email,
            password: credentials.password,
        }
    }
}

impl CredentialPolicy for ConfiguredCredentials {
    fn verify(&self, email: &str, password: &str) -> bool {
        // Emails compare case-insensitively; passwords exactly.
        self.email.trim().eq_ignore_ascii_case(email.trim()) && self.password.expose() == password
    }
}

/// An authenticated operator.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    operator: String,
    started_at: DateTime<Utc>,
}

impl Session {
    /// Opens a session if `policy` accepts the credentials.
    pub fn login(
        policy: &dyn CredentialPolicy,
        email: &str,
        password: &str,
    ) -> Result<Self, AuthError> {
        if !policy.verify(email, password) {
            tracing::warn!("Rejected login attempt");
            return Err(AuthError::InvalidCredentials);
        }
        let session = Self {
            operator: email.trim().to_string(),
            started_at: Utc::now(),
        };
        tracing::info!(operator = %session.operator, "Operator signed in");
        Ok(session)
    }

    pub fn operator(&self) -> &str {
        &self.operator
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn policy() -> ConfiguredCredentials {
        ConfiguredCredentials::from(AdminCredentials {
            email: "ops@example.com".into(),
            password: Secret::new("correct horse"),
        })
    }

    #[test]
    fn test_login_with_configured_credentials() {
        let session = Session::login(&policy(), "Ops@Example.com ", "correct horse").unwrap();
        assert_eq!(session.operator(), "Ops@Example.com");
        assert!(session.started_at() <= Utc::now());
    }

    #[test]
    fn test_wrong_credentials_produce_no_session() {
        assert_eq!(
            Session::login(&policy(), "ops@example.com", "wrong"),
            Err(AuthError::InvalidCredentials)
        );
        assert_eq!(
            Session::login(&policy(), "someone@example.com", "correct horse"),
            Err(AuthError::InvalidCredentials)
        );
    }

    #[test]
    fn test_custom_policy() {
        struct DenyAll;
        impl CredentialPolicy for DenyAll {
            fn verify(&self, _: &str, _: &str) -> bool {
                false
            }
        }
        assert!(Session::login(&DenyAll, "a", "b").is_err());
    }
}
