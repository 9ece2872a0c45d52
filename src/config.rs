// file: src/config.rs
// description: application configuration management with toml support
// reference: https://docs.rs/config

use crate::error::{ClientError, Result};
use crate::models::SearchOptions;
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub connection: ConnectionConfig,
    #[serde(default)]
    pub search: SearchConfig,
}

#[derive(Clone, Deserialize, Serialize)]
pub struct ConnectionConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    /// Digest realm; MarkLogic uses "public" unless the app server says otherwise.
    #[serde(default = "default_realm")]
    pub realm: String,
    #[serde(default)]
    pub auth: AuthType,
    /// Content database override; the app server's default database when unset.
    #[serde(default)]
    pub database: Option<String>,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AuthType {
    #[default]
    Digest,
    Basic,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchConfig {
    #[serde(default = "default_start")]
    pub start: u64,
    #[serde(default = "default_page_length")]
    pub page_length: u64,
}

fn default_realm() -> String {
    "public".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_start() -> u64 {
    1
}

fn default_page_length() -> u64 {
    10
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            start: default_start(),
            page_length: default_page_length(),
        }
    }
}

impl SearchConfig {
    pub fn options(&self) -> SearchOptions {
        SearchOptions {
            start: self.start,
            page_length: self.page_length,
        }
    }
}

impl ConnectionConfig {
    pub fn base_url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

// Keep the password out of logs and panic messages.
impl fmt::Debug for ConnectionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectionConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("realm", &self.realm)
            .field("auth", &self.auth)
            .field("database", &self.database)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl Config {
    pub fn load(path: Option<&Path>) -> Result<Self> {
        dotenv().ok();

        let mut builder = config::Config::builder();

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path));
        } else {
            builder = builder.add_source(
                config::File::from(Path::new("config/default.toml")).required(false),
            );
        }

        builder = builder.add_source(
            config::Environment::with_prefix("ML_CONSOLE")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .map_err(|e| ClientError::Config(e.to_string()))?;

        let config: Config = settings
            .try_deserialize()
            .map_err(|e| ClientError::Config(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.connection.host.trim().is_empty() {
            return Err(ClientError::Config("host must not be empty".to_string()));
        }

        if self.connection.port == 0 {
            return Err(ClientError::Config(
                "port must be greater than 0".to_string(),
            ));
        }

        if self.connection.username.trim().is_empty() {
            return Err(ClientError::Config(
                "username must not be empty".to_string(),
            ));
        }

        if self.search.start == 0 {
            return Err(ClientError::Config(
                "search start is 1-based and must be greater than 0".to_string(),
            ));
        }

        if self.search.page_length == 0 {
            return Err(ClientError::Config(
                "search page_length must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}
