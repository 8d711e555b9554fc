//! # Application Configuration
//!
//! Endpoint configuration loaded from environment variables and validated on
//! startup.
//!
//! | Variable          | Default                          |
//! |-------------------|----------------------------------|
//! | `DATABASE_URL`    | `sqlite:data/registrations.db`   |
//! | `ALLOWED_ORIGINS` | localhost / 127.0.0.1 on 3000 and 8080 |
//! | `BIND_ADDRESS`    | `127.0.0.1:8000`                 |
//! | `LOG_LEVEL`       | `info`                           |
//!
//! ## Global Config Access
//!
//! ```rust,no_run
//! use lib_core::config::{core_config, init_config};
//!
//! init_config().unwrap();
//! let db_url = &core_config().database_url;
//! ```

use std::sync::OnceLock;

use lib_utils::get_env_or;

pub const DEFAULT_DATABASE_URL: &str = "sqlite:data/registrations.db";
pub const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:8000";
pub const DEFAULT_ALLOWED_ORIGINS: &[&str] = &[
    "http://localhost:3000",
    "http://127.0.0.1:3000",
    "http://localhost:8080",
    "http://127.0.0.1:8080",
];

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// SQLite connection URL (`sqlite:` scheme)
    pub database_url: String,

    /// Origins allowed by the CORS layer
    pub allowed_origins: Vec<String>,

    /// Listen address for the HTTP server
    pub bind_address: String,

    /// Tracing filter level
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            allowed_origins: DEFAULT_ALLOWED_ORIGINS.iter().map(|o| o.to_string()).collect(),
            bind_address: DEFAULT_BIND_ADDRESS.to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, String> {
        let origins = std::env::var("ALLOWED_ORIGINS").ok();

        let mut config = Self {
            database_url: get_env_or("DATABASE_URL", DEFAULT_DATABASE_URL),
            bind_address: get_env_or("BIND_ADDRESS", DEFAULT_BIND_ADDRESS),
            log_level: get_env_or("LOG_LEVEL", "info").to_lowercase(),
            ..Default::default()
        };
        if let Some(origins) = origins {
            config.allowed_origins = parse_origins(&origins);
        }

        Ok(config)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), String> {
        if !self.database_url.starts_with("sqlite:") {
            return Err("DATABASE_URL must use the sqlite: scheme".to_string());
        }

        if self.allowed_origins.is_empty() {
            return Err("ALLOWED_ORIGINS must list at least one origin".to_string());
        }

        if let Some(bad) = self
            .allowed_origins
            .iter()
            .find(|o| !o.starts_with("http://") && !o.starts_with("https://"))
        {
            return Err(format!("Invalid origin in ALLOWED_ORIGINS: {bad}"));
        }

        if !LOG_LEVELS.contains(&self.log_level.as_str()) {
            return Err(format!(
                "LOG_LEVEL must be one of {}, got {}",
                LOG_LEVELS.join("|"),
                self.log_level
            ));
        }

        Ok(())
    }

    /// Filesystem path of the database file, if the URL points at one.
    pub fn database_path(&self) -> Option<&str> {
        let path = self.database_url.strip_prefix("sqlite:")?;
        let path = path.strip_prefix("//").unwrap_or(path);
        let path = path.split('?').next().unwrap_or(path);
        (!path.is_empty() && path != ":memory:").then_some(path)
    }
}

/// Split a comma-separated origin list, dropping blanks.
pub fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .map(|o| o.trim_end_matches('/').to_string())
        .collect()
}

/// Global configuration instance (initialized once at startup).
static CONFIG: OnceLock<Config> = OnceLock::new();

/// Initialize the global configuration.
///
/// # Errors
///
/// Returns an error if a variable is invalid, validation fails, or the
/// config has already been initialized.
pub fn init_config() -> Result<&'static Config, String> {
    let config = Config::from_env()?;
    config.validate()?;

    CONFIG
        .set(config)
        .map_err(|_| "Config has already been initialized".to_string())?;
    Ok(core_config())
}

/// Get a reference to the global configuration.
///
/// # Panics
///
/// Panics if [`init_config()`] has not been called yet.
pub fn core_config() -> &'static Config {
    CONFIG.get().expect("Config must be initialized with init_config() before use")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.allowed_origins.len(), 4);
        assert_eq!(config.bind_address, "127.0.0.1:8000");
    }

    #[test]
    fn test_parse_origins() {
        assert_eq!(
            parse_origins(" https://club.example.org/ , ,http://localhost:3000"),
            vec!["https://club.example.org", "http://localhost:3000"]
        );
        assert!(parse_origins(" , ").is_empty());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let no_origins = Config {
            allowed_origins: vec![],
            ..Default::default()
        };
        assert!(no_origins.validate().is_err());

        let bad_origin = Config {
            allowed_origins: vec!["club.example.org".to_string()],
            ..Default::default()
        };
        assert!(bad_origin.validate().unwrap_err().contains("club.example.org"));

        let postgres = Config {
            database_url: "postgres://localhost/club".to_string(),
            ..Default::default()
        };
        assert!(postgres.validate().is_err());

        let loud = Config {
            log_level: "verbose".to_string(),
            ..Default::default()
        };
        assert!(loud.validate().is_err());
    }

    #[test]
    fn test_database_path() {
        assert_eq!(Config::default().database_path(), Some("data/registrations.db"));

        let memory = Config {
            database_url: "sqlite::memory:".to_string(),
            ..Default::default()
        };
        assert_eq!(memory.database_path(), None);

        let with_opts = Config {
            database_url: "sqlite://var/club.db?mode=rwc".to_string(),
            ..Default::default()
        };
        assert_eq!(with_opts.database_path(), Some("var/club.db"));
    }
}
