use once_cell::sync::Lazy;
use school_directory::config::AppConfig;
use std::env;
use std::sync::Mutex;

static SERIALIZE: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));

const MANAGED_VARS: &[&str] = &[
    "PORT",
    "APP_PORT",
    "DATABASE_URL",
    "DATABASE_HOST",
    "DB_HOST",
    "DB_PORT",
    "DB_USER",
    "DB_PASSWORD",
    "DB_NAME",
    "PGHOST",
    "PGPORT",
    "PGUSER",
    "PGPASSWORD",
    "PGDATABASE",
];

fn clear_managed_vars() {
    for var in MANAGED_VARS {
        env::remove_var(var);
    }
}

#[test]
fn test_config_defaults() {
    let _lock = SERIALIZE.lock().unwrap_or_else(|e| e.into_inner());
    clear_managed_vars();

    let config = AppConfig::from_env().expect("Failed to load config");

    assert_eq!(config.app.port, 3000);
    assert_eq!(config.database.host, "localhost");
    assert_eq!(config.database.port, 5432);
    assert_eq!(config.database.name, "schools");
    assert!(config.database.url.is_none());
    assert!(config.security.allows_any_origin());
    assert!(config.validate().is_ok());
}

#[test]
fn test_plain_aliases_populate_config() {
    let _lock = SERIALIZE.lock().unwrap_or_else(|e| e.into_inner());
    clear_managed_vars();
    env::set_var("PORT", "4100");
    env::set_var("DB_HOST", "db.internal");
    env::set_var("DB_PORT", "6543");
    env::set_var("DB_USER", "school_admin");
    env::set_var("DB_PASSWORD", "1234");
    env::set_var("DB_NAME", "directory");

    let result = AppConfig::from_env();
    clear_managed_vars();
    let config = result.expect("Failed to load config from env");

    assert_eq!(config.app.port, 4100);
    assert_eq!(config.database.host, "db.internal");
    assert_eq!(config.database.port, 6543);
    assert_eq!(config.database.user, "school_admin");
    assert_eq!(config.database.password, "1234");
    assert_eq!(config.database.name, "directory");

    let options = config.database.connect_options().expect("connect options");
    assert_eq!(options.get_host(), "db.internal");
    assert_eq!(options.get_port(), 6543);
    assert_eq!(options.get_database(), Some("directory"));
}

#[test]
fn test_libpq_aliases_populate_config() {
    let _lock = SERIALIZE.lock().unwrap_or_else(|e| e.into_inner());
    clear_managed_vars();
    env::set_var("PGHOST", "pg.internal");
    env::set_var("PGDATABASE", "district");

    let result = AppConfig::from_env();
    clear_managed_vars();
    let config = result.expect("Failed to load config from env");

    assert_eq!(config.database.host, "pg.internal");
    assert_eq!(config.database.name, "district");
}

#[test]
fn test_database_url_takes_precedence() {
    let _lock = SERIALIZE.lock().unwrap_or_else(|e| e.into_inner());
    clear_managed_vars();
    env::set_var("DATABASE_URL", "postgres://app@url-host:5999/from_url");
    env::set_var("DB_HOST", "ignored-host");

    let result = AppConfig::from_env();
    clear_managed_vars();
    let config = result.expect("Failed to load config from env");

    let options = config.database.connect_options().expect("connect options");
    assert_eq!(options.get_host(), "url-host");
    assert_eq!(options.get_port(), 5999);
    assert_eq!(options.get_database(), Some("from_url"));
}

#[test]
fn test_blank_database_url_is_ignored() {
    let _lock = SERIALIZE.lock().unwrap_or_else(|e| e.into_inner());
    clear_managed_vars();
    env::set_var("DATABASE_URL", "   ");

    let result = AppConfig::from_env();
    clear_managed_vars();
    let config = result.expect("Failed to load config from env");

    assert!(config.database.url.is_none());
}

#[test]
fn test_invalid_env_types_fail() {
    let _lock = SERIALIZE.lock().unwrap_or_else(|e| e.into_inner());
    clear_managed_vars();
    env::set_var("PORT", "not-a-number");
    let result = AppConfig::from_env();
    env::remove_var("PORT");
    assert!(result.is_err());
}

#[test]
fn test_debug_output_redacts_password() {
    let _lock = SERIALIZE.lock().unwrap_or_else(|e| e.into_inner());
    clear_managed_vars();
    env::set_var("DB_PASSWORD", "hunter2");

    let result = AppConfig::from_env();
    clear_managed_vars();
    let config = result.expect("Failed to load config from env");

    let rendered = format!("{:?}", config.database);
    assert!(!rendered.contains("hunter2"));
}
