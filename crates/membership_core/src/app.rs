//! Application context shared by every presentation component.
//!
//! # Responsibility
//! - Open the member store exactly once and own it for the process lifetime.
//! - Hand out services and the admin gate built from configuration.
//!
//! # Invariants
//! - One `AppContext` per process; components receive it instead of opening
//!   their own connection.
//! - Services borrow the context connection and never outlive it.

use crate::auth::StaticCredentials;
use crate::config::{AppConfig, ConfigError};
use crate::db::{open_db, open_db_in_memory, DbError};
use crate::logging::{init_logging, LoggingError};
use crate::repo::member_repo::{RepoError, SqliteMemberRepository};
use crate::service::member_service::MemberService;
use rusqlite::Connection;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Startup failure.
#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Logging(LoggingError),
    Db(DbError),
    Repo(RepoError),
}

impl Display for AppError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Config(err) => write!(f, "{err}"),
            Self::Logging(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for AppError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(err) => Some(err),
            Self::Logging(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::Repo(err) => Some(err),
        }
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<LoggingError> for AppError {
    fn from(value: LoggingError) -> Self {
        Self::Logging(value)
    }
}

impl From<DbError> for AppError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<RepoError> for AppError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// Process-wide application state.
pub struct AppContext {
    config: AppConfig,
    conn: Connection,
}

impl AppContext {
    /// Validates `config`, starts logging when a log directory is set, and
    /// opens the configured member store.
    pub fn open(config: AppConfig) -> Result<Self, AppError> {
        config.validate()?;
        if let Some(log_dir) = &config.log_dir {
            init_logging(&config.log_level, log_dir)?;
        }

        let conn = open_db(&config.db_path)?;
        let context = Self { config, conn };
        // Fail at startup rather than on the first form.
        context.repository()?;
        Ok(context)
    }

    /// Context over a private in-memory store with default configuration.
    pub fn open_in_memory() -> Result<Self, AppError> {
        let conn = open_db_in_memory()?;
        Ok(Self {
            config: AppConfig::default(),
            conn,
        })
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Member use-cases over the context connection.
    pub fn members(&self) -> Result<MemberService<SqliteMemberRepository<'_>>, AppError> {
        Ok(MemberService::new(self.repository()?))
    }

    /// Admin gate configured from `admin` settings.
    pub fn authenticator(&self) -> StaticCredentials {
        StaticCredentials::from_config(&self.config.admin)
    }

    fn repository(&self) -> Result<SqliteMemberRepository<'_>, RepoError> {
        SqliteMemberRepository::try_new(&self.conn)
    }
}
