use std::sync::Arc;

use actix_web::error::{JsonPayloadError, QueryPayloadError};
use actix_web::{web, HttpRequest, HttpResponse};

use crate::api::dtos::{StatusResponse, MISSING_COORDINATES_MESSAGE};
use crate::application::SchoolService;
use crate::error::{AppError, AppResult};

pub mod schools;

#[derive(Clone)]
pub struct AppState {
    pub school_service: Arc<SchoolService>,
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .app_data(web::QueryConfig::default().error_handler(query_error_handler))
        .service(web::scope("/api").configure(schools::configure))
        .configure(crate::api::openapi::configure)
        .route("/health", web::get().to(health))
        .route("/ready", web::get().to(ready));
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check passed", body = StatusResponse)
    ),
    tag = "health"
)]
async fn health() -> HttpResponse {
    HttpResponse::Ok().json(StatusResponse {
        status: "ok".to_string(),
    })
}

#[utoipa::path(
    get,
    path = "/ready",
    responses(
        (status = 200, description = "Readiness check passed", body = StatusResponse),
        (status = 503, description = "Store not reachable"),
    ),
    tag = "health"
)]
async fn ready(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    state.school_service.readiness().await?;
    Ok(HttpResponse::Ok().json(StatusResponse {
        status: "ready".to_string(),
    }))
}

/// Fallback for unmatched routes.
pub async fn not_found() -> AppResult<HttpResponse> {
    Err(AppError::NotFound("Not found".to_string()))
}

fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let message = match &err {
        JsonPayloadError::ContentType => "Content-Type must be application/json".to_string(),
        JsonPayloadError::Deserialize(inner) => format!("invalid request body: {inner}"),
        other => format!("invalid request body: {other}"),
    };
    AppError::validation_error(message).into()
}

fn query_error_handler(_err: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    AppError::BadRequest(MISSING_COORDINATES_MESSAGE.to_string()).into()
}
