//! Core data layer for the membership records application.
//! This crate is the single source of truth for member invariants.

pub mod app;
pub mod auth;
pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod photo;
pub mod repo;
pub mod service;

pub use app::{AppContext, AppError};
pub use auth::{AuthDecision, Authenticator, StaticCredentials};
pub use config::{AdminConfig, AppConfig, ConfigError};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::member::{
    Member, MemberFields, MemberId, MemberListing, MemberStats, MemberSummary,
};
pub use model::validation::{validate_member, validation_messages, MemberFieldError};
pub use photo::{inspect_photo, PhotoError, PhotoFormat, PhotoInfo};
pub use repo::member_repo::{MemberRepository, RepoError, RepoResult, SqliteMemberRepository};
pub use service::member_service::{MemberService, SaveOutcome, SubmitOutcome};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
