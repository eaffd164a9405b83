//! Administrator access gate.
//!
//! # Responsibility
//! - Define the capability presentation code asks before opening admin views.
//! - Provide the single-credential demo gate as the default implementation.
//!
//! # Invariants
//! - `StaticCredentials` is a placeholder gate, not a security boundary.
//! - Decisions are values; authentication never errors.

use crate::config::AdminConfig;
use log::{info, warn};

/// Outcome of one authentication attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthDecision {
    Granted,
    Denied,
}

impl AuthDecision {
    pub fn is_granted(self) -> bool {
        self == Self::Granted
    }
}

/// Pluggable credential check for the administrator view.
pub trait Authenticator {
    fn authenticate(&self, username: &str, password: &str) -> AuthDecision;
}

/// Compares input against one configured username/password pair.
#[derive(Debug, Clone)]
pub struct StaticCredentials {
    username: String,
    password: String,
}

impl StaticCredentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    pub fn from_config(admin: &AdminConfig) -> Self {
        Self::new(admin.username.clone(), admin.password.clone())
    }
}

impl Authenticator for StaticCredentials {
    fn authenticate(&self, username: &str, password: &str) -> AuthDecision {
        if username == self.username && password == self.password {
            info!("event=admin_login module=auth status=ok");
            AuthDecision::Granted
        } else {
            warn!("event=admin_login module=auth status=denied");
            AuthDecision::Denied
        }
    }
}
