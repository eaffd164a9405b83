//! Application configuration.
//!
//! # Responsibility
//! - Describe where the member store and logs live.
//! - Load an optional TOML file, falling back to defaults when it is absent.
//!
//! # Invariants
//! - Every field has a default, so a partial file is valid.
//! - Loaded configs are validated before use.

use crate::logging::default_log_level;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

/// Store file name used when no configuration overrides it.
pub const DEFAULT_DB_FILE_NAME: &str = "members.db";
/// Configuration file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE_NAME: &str = "membership.toml";

/// Top-level application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Member store file, created on first open.
    pub db_path: PathBuf,
    /// One of `trace|debug|info|warn|error`.
    pub log_level: String,
    /// Absolute directory for rolling logs. Logging stays off when unset.
    pub log_dir: Option<PathBuf>,
    pub admin: AdminConfig,
}

/// Credentials for the demo administrator gate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdminConfig {
    pub username: String,
    pub password: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from(DEFAULT_DB_FILE_NAME),
            log_level: default_log_level().to_string(),
            log_dir: None,
            admin: AdminConfig::default(),
        }
    }
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            username: "admin".to_string(),
            password: "admin1234".to_string(),
        }
    }
}

/// Configuration load/validation failure.
#[derive(Debug)]
pub enum ConfigError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    Invalid(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read config file `{}`: {source}", path.display())
            }
            Self::Parse { path, source } => {
                write!(f, "failed to parse config file `{}`: {source}", path.display())
            }
            Self::Invalid(message) => write!(f, "invalid configuration: {message}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse { source, .. } => Some(source),
            Self::Invalid(_) => None,
        }
    }
}

impl AppConfig {
    /// Loads and validates configuration from a TOML file.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: AppConfig = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Loads `path` when it exists, otherwise returns defaults.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if path.exists() {
            Self::load_from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Rejects values the application cannot start with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.db_path.as_os_str().is_empty() {
            return Err(ConfigError::Invalid("db_path cannot be empty".to_string()));
        }
        if self.admin.username.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "admin.username cannot be empty".to_string(),
            ));
        }
        if let Some(log_dir) = &self.log_dir {
            if !log_dir.is_absolute() {
                return Err(ConfigError::Invalid(format!(
                    "log_dir must be an absolute path, got `{}`",
                    log_dir.display()
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{AppConfig, ConfigError, DEFAULT_DB_FILE_NAME};
    use std::path::PathBuf;

    #[test]
    fn defaults_point_at_local_store() {
        let config = AppConfig::default();
        assert_eq!(config.db_path, PathBuf::from(DEFAULT_DB_FILE_NAME));
        assert_eq!(config.log_dir, None);
        assert_eq!(config.admin.username, "admin");
        config.validate().expect("defaults should validate");
    }

    #[test]
    fn partial_file_keeps_defaults_for_missing_keys() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("membership.toml");
        std::fs::write(&path, "db_path = \"/var/lib/members/church.db\"\n").expect("write config");

        let config = AppConfig::load_from_file(&path).expect("config should load");
        assert_eq!(config.db_path, PathBuf::from("/var/lib/members/church.db"));
        assert_eq!(config.admin, AppConfig::default().admin);
    }

    #[test]
    fn admin_section_overrides_demo_credentials() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("membership.toml");
        std::fs::write(&path, "[admin]\nusername = \"clerk\"\npassword = \"s3cret\"\n")
            .expect("write config");

        let config = AppConfig::load_from_file(&path).expect("config should load");
        assert_eq!(config.admin.username, "clerk");
        assert_eq!(config.admin.password, "s3cret");
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().expect("temp dir");
        let config = AppConfig::load_or_default(dir.path().join("absent.toml"))
            .expect("absent file should not fail");
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("membership.toml");
        std::fs::write(&path, "db_path = [").expect("write config");

        let err = AppConfig::load_from_file(&path).expect_err("malformed toml must fail");
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn relative_log_dir_is_rejected() {
        let config = AppConfig {
            log_dir: Some(PathBuf::from("logs")),
            ..AppConfig::default()
        };
        let err = config.validate().expect_err("relative log dir must fail");
        assert!(err.to_string().contains("absolute"));
    }
}
