use crate::params::{ConnectionParams, DEFAULT_PORT};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, warn};

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    /// IO error occurred while reading config file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing error occurred
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Main configuration structure for dbping
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Config {
    /// Connection target configuration
    pub connection: ConnectionConfig,
}

/// Connection target configuration
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ConnectionConfig {
    /// Database host
    pub host: String,
    /// Database port
    #[serde(default = "default_port")]
    pub port: u16,
    /// Database user
    pub user: String,
    /// Environment variable containing the password
    pub password_env: Option<String>,
    /// Default database name
    pub database: Option<String>,
}

const fn default_port() -> u16 {
    DEFAULT_PORT
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        let config: Self = toml::from_str(&contents)?;
        Ok(config)
    }
}

impl ConnectionConfig {
    /// Resolve into connection parameters
    ///
    /// The password is read from the environment variable named by
    /// `password_env`; the literal password never lives in the config file.
    #[must_use]
    pub fn to_params(&self) -> ConnectionParams {
        let password = self
            .password_env
            .as_ref()
            .map_or_else(String::new, |password_env| {
                debug!(
                    "Reading password from environment variable: {}",
                    password_env
                );
                env::var(password_env).unwrap_or_else(|_| {
                    warn!(
                        "Environment variable {} not found, using empty password",
                        password_env
                    );
                    String::new()
                })
            });

        ConnectionParams::new(
            self.host.clone(),
            self.port,
            self.user.clone(),
            password,
            self.database.clone(),
        )
    }
}
