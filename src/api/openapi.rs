use actix_web::{web, HttpResponse};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::api::routes::schools::list_schools,
        crate::api::routes::schools::create_school,
        crate::api::routes::health,
        crate::api::routes::ready,
    ),
    components(
        schemas(
            crate::api::dtos::school_dto::CreateSchoolRequest,
            crate::api::dtos::school_dto::SchoolResponse,
            crate::api::dtos::school_dto::RankedSchoolResponse,
            crate::api::dtos::common::ErrorResponse,
            crate::api::dtos::common::StatusResponse,
        )
    ),
    tags(
        (name = "schools", description = "School registration and proximity search"),
        (name = "health", description = "Health check endpoints"),
    ),
    info(
        title = "School Directory API",
        version = "0.1.0",
        description = "Stores schools and lists them by distance from a point"
    )
)]
pub struct ApiDoc;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/api-docs/openapi.json", web::get().to(openapi_json));
}

async fn openapi_json() -> HttpResponse {
    HttpResponse::Ok().json(ApiDoc::openapi())
}
