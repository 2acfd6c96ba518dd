use std::process::ExitCode;
use std::sync::Arc;

use actix_web::{web, App, HttpServer};
use school_directory::api::routes::{self, AppState};
use school_directory::application::SchoolService;
use school_directory::config::{AppConfig, LoggingConfig};
use school_directory::infrastructure::bootstrap::connect_store;
use school_directory::infrastructure::repositories::SchoolRepository;
use school_directory::middleware::{catch_panic, log_request};
use school_directory::security::cors_middleware;
use tracing::{error, info};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

fn init_tracing(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));
    let registry = tracing_subscriber::registry().with(filter);

    if logging.json_format {
        registry
            .with(fmt::layer().json().with_current_span(true).with_span_list(true))
            .init();
    } else {
        registry.with(fmt::layer()).init();
    }
}

#[actix_web::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("failed to load application configuration: {err}");
            return ExitCode::FAILURE;
        }
    };

    init_tracing(&config.logging);

    if let Err(err) = config.validate() {
        error!(error = %err, "invalid configuration");
        return ExitCode::FAILURE;
    }

    let school_repo = match connect_store(&config.database).await {
        Ok(store) => Arc::new(store),
        Err(err) => {
            error!(error = %err, database = ?config.database, "database initialization failed");
            return ExitCode::FAILURE;
        }
    };
    info!("database initialized");

    let state = AppState {
        school_service: Arc::new(SchoolService::new(school_repo.clone())),
    };

    let bind_host = config.app.host.clone();
    let bind_port = config.app.port;
    let security_config = config.security.clone();

    let server = HttpServer::new(move || {
        App::new()
            .wrap_fn(|req, srv| catch_panic(req, srv))
            .wrap_fn(|req, srv| log_request(req, srv))
            .wrap(cors_middleware(&security_config))
            .app_data(web::Data::new(state.clone()))
            .configure(routes::configure)
            .default_service(web::to(routes::not_found))
    })
    .bind((bind_host.as_str(), bind_port));

    let server = match server {
        Ok(server) => server,
        Err(err) => {
            error!(error = %err, host = %bind_host, port = bind_port, "failed to bind listener");
            school_repo.close().await;
            return ExitCode::FAILURE;
        }
    };

    info!(host = %bind_host, port = bind_port, "server is running");
    let served = server.run().await;

    school_repo.close().await;
    info!("database connection closed");

    match served {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "server terminated with an error");
            ExitCode::FAILURE
        }
    }
}
