use crate::config::SecurityConfig;
use actix_cors::Cors;

pub fn cors_middleware(config: &SecurityConfig) -> Cors {
    let cors = Cors::default()
        .allow_any_header()
        .allowed_methods(vec!["GET", "POST", "OPTIONS"])
        .max_age(3600);

    if config.allows_any_origin() {
        return cors.allow_any_origin().send_wildcard();
    }

    let allowlist = config.cors_allowed_origins.clone();
    cors.allowed_origin_fn(move |origin, _| {
        origin
            .to_str()
            .ok()
            .map(|value| allowlist.iter().any(|allowed| allowed == value))
            .unwrap_or(false)
    })
}
