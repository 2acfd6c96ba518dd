pub fn default_host() -> String {
    "0.0.0.0".to_string()
}

pub fn default_port() -> u16 {
    3000
}

pub fn default_db_host() -> String {
    "localhost".to_string()
}

pub fn default_db_port() -> u16 {
    5432
}

pub fn default_db_user() -> String {
    "postgres".to_string()
}

pub fn default_db_name() -> String {
    "schools".to_string()
}

pub fn default_db_max_connections() -> u32 {
    10
}

pub fn default_db_min_connections() -> u32 {
    1
}

pub fn default_db_acquire_timeout_seconds() -> u64 {
    10
}

pub fn default_logging_level() -> String {
    "info".to_string()
}

pub fn default_logging_json_format() -> bool {
    false
}

pub fn default_cors_allowed_origins() -> Vec<String> {
    vec!["*".to_string()]
}

pub fn normalize_optional_string(value: Option<String>) -> Option<String> {
    value.and_then(|v| {
        let trimmed = v.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}
