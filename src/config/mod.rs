pub mod database_config;
pub mod defaults;
pub mod security_config;

use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::Deserialize;
use thiserror::Error;

pub use database_config::DatabaseConfig;
pub use security_config::SecurityConfig;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid server configuration: {0}")]
    Server(String),
    #[error("invalid database configuration: {0}")]
    Database(String),
}

/// Unprefixed variables accepted alongside the `APP_`/`DATABASE_`/... families.
const RAW_ALIASES: &[(&str, &str)] = &[
    ("PORT", "app.port"),
    ("DB_HOST", "database.host"),
    ("DB_PORT", "database.port"),
    ("DB_USER", "database.user"),
    ("DB_PASSWORD", "database.password"),
    ("DB_NAME", "database.name"),
    ("PGHOST", "database.host"),
    ("PGPORT", "database.port"),
    ("PGUSER", "database.user"),
    ("PGPASSWORD", "database.password"),
    ("PGDATABASE", "database.name"),
];

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub app: ServerConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub security: SecurityConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "defaults::default_host")]
    pub host: String,
    #[serde(default = "defaults::default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: defaults::default_host(),
            port: defaults::default_port(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "defaults::default_logging_level")]
    pub level: String,
    #[serde(default = "defaults::default_logging_json_format")]
    pub json_format: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: defaults::default_logging_level(),
            json_format: defaults::default_logging_json_format(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, Box<figment::Error>> {
        let mut config: Self = Self::figment().extract().map_err(Box::new)?;
        config.database.url = defaults::normalize_optional_string(config.database.url);
        Ok(config)
    }

    fn figment() -> Figment {
        Figment::new()
            .merge(Toml::file("config/default.toml"))
            .merge(Env::prefixed("APP_").map(|key| format!("app.{key}").into()))
            .merge(Env::prefixed("DATABASE_").map(|key| format!("database.{key}").into()))
            .merge(Env::prefixed("LOGGING_").map(|key| format!("logging.{key}").into()))
            .merge(Env::prefixed("SECURITY_").map(|key| format!("security.{key}").into()))
            .merge(
                Env::raw()
                    .only(&RAW_ALIASES.iter().map(|(env, _)| *env).collect::<Vec<_>>())
                    .map(|key| {
                        RAW_ALIASES
                            .iter()
                            .find(|(env, _)| key == *env)
                            .map(|(_, path)| (*path).into())
                            .unwrap_or_else(|| key.into())
                    }),
            )
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.app.port == 0 {
            return Err(ConfigError::Server("port must be greater than zero".to_string()));
        }

        if self.database.url.is_none() && self.database.host.trim().is_empty() {
            return Err(ConfigError::Database(
                "host is required when no url is configured".to_string(),
            ));
        }

        if self.database.max_connections == 0 {
            return Err(ConfigError::Database(
                "max_connections must be greater than zero".to_string(),
            ));
        }

        if self.database.min_connections > self.database.max_connections {
            return Err(ConfigError::Database(
                "min_connections must not exceed max_connections".to_string(),
            ));
        }

        Ok(())
    }
}
