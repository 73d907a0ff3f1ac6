//! # Application Configuration
//!
//! Settings that belong to the installation rather than to the directory
//! data: where the slot database lives, how new accounts are admitted, and
//! the log filter.
//!
//! ## Load Order (later overrides earlier)
//! 1. Default values
//! 2. Config file (`binaa.toml` in the platform config dir, or `--config`)
//! 3. Environment variables (`BINAA_DB_PATH`, `BINAA_REGISTRATION`, `BINAA_LOG`)
//!
//! ## Example File
//! ```toml
//! db_path = "/var/lib/binaa/binaa.db"
//! registration = "moderated"
//! log = "info,binaa=debug"
//! ```
//!
//! Directory data (app name, theme, contact info) is not configured here;
//! it lives in the `appSettings` slot and is edited from the dashboard.

use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Default log filter when neither the file nor the environment sets one.
pub const DEFAULT_LOG_FILTER: &str = "info,binaa=debug,sqlx=warn";

const CONFIG_FILE_NAME: &str = "binaa.toml";
const DB_FILE_NAME: &str = "binaa.db";

// =============================================================================
// Errors
// =============================================================================

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to write config file: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

// =============================================================================
// Registration Policy
// =============================================================================

/// Status given to accounts created through the sign-up form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegistrationPolicy {
    /// New members are approved and may sign in immediately.
    #[default]
    AutoApprove,

    /// New members wait as pending until an admin approves them.
    Moderated,
}

impl std::fmt::Display for RegistrationPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RegistrationPolicy::AutoApprove => write!(f, "auto_approve"),
            RegistrationPolicy::Moderated => write!(f, "moderated"),
        }
    }
}

impl FromStr for RegistrationPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "auto_approve" | "auto" | "open" => Ok(RegistrationPolicy::AutoApprove),
            "moderated" | "pending" => Ok(RegistrationPolicy::Moderated),
            other => Err(ConfigError::Invalid(format!(
                "Unknown registration policy: '{}'. Valid options: auto_approve, moderated",
                other
            ))),
        }
    }
}

// =============================================================================
// AppConfig
// =============================================================================

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// SQLite file holding the slots. `None` means the platform data dir.
    pub db_path: Option<PathBuf>,

    pub registration: RegistrationPolicy,

    /// `EnvFilter` directive; `RUST_LOG` still wins when set.
    pub log: Option<String>,
}

impl AppConfig {
    /// Loads configuration from file, environment, and defaults.
    pub fn load(config_path: Option<PathBuf>) -> ConfigResult<Self> {
        let mut config = Self::default();

        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if path.exists() {
                info!(?path, "Loading config from file");
                let contents = std::fs::read_to_string(&path)?;
                config = toml::from_str(&contents)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_env_overrides()?;
        config.validate()?;

        Ok(config)
    }

    /// Loads config or returns default if load fails.
    pub fn load_or_default(config_path: Option<PathBuf>) -> Self {
        Self::load(config_path).unwrap_or_else(|e| {
            warn!("Failed to load config: {}. Using defaults.", e);
            Self::default()
        })
    }

    /// Writes the configuration as TOML.
    pub fn save(&self, config_path: Option<PathBuf>) -> ConfigResult<()> {
        let path = config_path
            .or_else(Self::default_config_path)
            .ok_or_else(|| ConfigError::Invalid("No config path available".into()))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(&path, toml::to_string_pretty(self)?)?;
        info!(?path, "Config saved");
        Ok(())
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if let Some(path) = &self.db_path {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::Invalid("db_path must not be empty".into()));
            }
        }
        Ok(())
    }

    fn apply_env_overrides(&mut self) -> ConfigResult<()> {
        if let Ok(path) = std::env::var("BINAA_DB_PATH") {
            debug!(path = %path, "Overriding database path from environment");
            self.db_path = Some(PathBuf::from(path));
        }

        if let Ok(policy) = std::env::var("BINAA_REGISTRATION") {
            debug!(policy = %policy, "Overriding registration policy from environment");
            self.registration = policy.parse()?;
        }

        if let Ok(filter) = std::env::var("BINAA_LOG") {
            self.log = Some(filter);
        }

        Ok(())
    }

    /// Database path to open: the configured one, else the platform data dir.
    pub fn database_path(&self) -> ConfigResult<PathBuf> {
        if let Some(path) = &self.db_path {
            return Ok(path.clone());
        }
        directories::ProjectDirs::from("com", "binaa", "binaa")
            .map(|dirs| dirs.data_dir().join(DB_FILE_NAME))
            .ok_or_else(|| ConfigError::Invalid("No home directory for the database".into()))
    }

    pub fn log_filter(&self) -> &str {
        self.log.as_deref().unwrap_or(DEFAULT_LOG_FILTER)
    }

    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "binaa", "binaa")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registration_policy_parsing() {
        assert_eq!(
            "moderated".parse::<RegistrationPolicy>().unwrap(),
            RegistrationPolicy::Moderated
        );
        assert_eq!(
            "AUTO".parse::<RegistrationPolicy>().unwrap(),
            RegistrationPolicy::AutoApprove
        );
        assert!("invite_only".parse::<RegistrationPolicy>().is_err());
    }

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.registration, RegistrationPolicy::AutoApprove);
        assert_eq!(config.log_filter(), DEFAULT_LOG_FILTER);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_toml() {
        let config: AppConfig = toml::from_str(
            r#"
            db_path = "/tmp/binaa-test.db"
            registration = "moderated"
            "#,
        )
        .unwrap();

        assert_eq!(config.registration, RegistrationPolicy::Moderated);
        assert_eq!(config.database_path().unwrap(), PathBuf::from("/tmp/binaa-test.db"));
        assert!(config.log.is_none());
    }

    #[test]
    fn test_save_then_load_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("binaa.toml");
        let config = AppConfig {
            db_path: Some(dir.path().join("data.db")),
            registration: RegistrationPolicy::Moderated,
            log: Some("warn".to_string()),
        };

        config.save(Some(path.clone())).unwrap();
        let contents = std::fs::read_to_string(&path).unwrap();
        let loaded: AppConfig = toml::from_str(&contents).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_empty_db_path_is_invalid() {
        let config = AppConfig {
            db_path: Some(PathBuf::new()),
            ..AppConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
