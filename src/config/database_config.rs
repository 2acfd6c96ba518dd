use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer};
use sqlx::postgres::PgConnectOptions;

use crate::config::defaults;

#[derive(Deserialize, Clone)]
pub struct DatabaseConfig {
    #[serde(
        default = "defaults::default_db_host",
        deserialize_with = "lenient_string"
    )]
    pub host: String,
    #[serde(default = "defaults::default_db_port")]
    pub port: u16,
    #[serde(
        default = "defaults::default_db_user",
        deserialize_with = "lenient_string"
    )]
    pub user: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub password: String,
    #[serde(
        default = "defaults::default_db_name",
        deserialize_with = "lenient_string"
    )]
    pub name: String,
    /// Full connection URL; takes precedence over the individual fields when set.
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default = "defaults::default_db_max_connections")]
    pub max_connections: u32,
    #[serde(default = "defaults::default_db_min_connections")]
    pub min_connections: u32,
    #[serde(default = "defaults::default_db_acquire_timeout_seconds")]
    pub acquire_timeout_seconds: u64,
}

impl DatabaseConfig {
    pub fn connect_options(&self) -> Result<PgConnectOptions, sqlx::Error> {
        if let Some(url) = self.url.as_deref() {
            return PgConnectOptions::from_str(url);
        }

        let options = PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .database(&self.name);

        if self.password.is_empty() {
            Ok(options)
        } else {
            Ok(options.password(&self.password))
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            host: defaults::default_db_host(),
            port: defaults::default_db_port(),
            user: defaults::default_db_user(),
            password: String::new(),
            name: defaults::default_db_name(),
            url: None,
            max_connections: defaults::default_db_max_connections(),
            min_connections: defaults::default_db_min_connections(),
            acquire_timeout_seconds: defaults::default_db_acquire_timeout_seconds(),
        }
    }
}

impl fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &"[REDACTED]")
            .field("name", &self.name)
            .field("url", &self.url.as_ref().map(|_| "[REDACTED]"))
            .field("max_connections", &self.max_connections)
            .field("min_connections", &self.min_connections)
            .field("acquire_timeout_seconds", &self.acquire_timeout_seconds)
            .finish()
    }
}

/// Environment values such as `DB_PASSWORD=12345` arrive as numbers; keep them as text.
fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Scalar {
        Text(String),
        Integer(i64),
        Float(f64),
        Flag(bool),
    }

    Ok(match Scalar::deserialize(deserializer)? {
        Scalar::Text(value) => value,
        Scalar::Integer(value) => value.to_string(),
        Scalar::Float(value) => value.to_string(),
        Scalar::Flag(value) => value.to_string(),
    })
}
