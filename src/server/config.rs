//! Environment-driven server configuration.

use crate::server::error::config::ConfigError;

/// Datastore used when `DATABASE_URL` is not set.
pub static DEFAULT_DATABASE_URL: &str = "sqlite:///tmp/test.db?mode=rwc";
/// Port used when `PORT` is not set.
pub static DEFAULT_PORT: u16 = 3000;

/// Settings read once at start-up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Connection string of the datastore
    pub database_url: String,
    /// Port the HTTP server listens on
    pub port: u16,
}

impl Config {
    /// Reads `DATABASE_URL` and `PORT` from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_values(std::env::var("DATABASE_URL").ok(), std::env::var("PORT").ok())
    }

    /// Builds the configuration from raw variable values, applying defaults for absent ones.
    ///
    /// # Returns
    /// - `Ok(Config)` - Configuration with defaults applied
    /// - `Err(ConfigError::InvalidEnvValue)` - `PORT` is not a valid port number
    pub fn from_values(
        database_url: Option<String>,
        port: Option<String>,
    ) -> Result<Self, ConfigError> {
        let database_url = database_url
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());

        let port = match port {
            Some(port) => port
                .parse::<u16>()
                .map_err(|e| ConfigError::InvalidEnvValue {
                    var: "PORT".to_string(),
                    reason: e.to_string(),
                })?,
            None => DEFAULT_PORT,
        };

        Ok(Self { database_url, port })
    }
}
