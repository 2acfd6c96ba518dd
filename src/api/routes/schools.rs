use actix_web::{web, HttpResponse};

use crate::api::dtos::{CreateSchoolRequest, SchoolListQuery};
use crate::api::routes::AppState;
use crate::error::AppResult;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/schools")
            .route("", web::get().to(list_schools))
            .route("", web::post().to(create_school)),
    );
}

#[utoipa::path(
    get,
    path = "/api/schools",
    params(SchoolListQuery),
    responses(
        (status = 200, description = "Schools ordered by distance from the query point", body = [crate::api::dtos::RankedSchoolResponse]),
        (status = 400, description = "Missing, non-numeric or out-of-range coordinates", body = crate::api::dtos::ErrorResponse),
        (status = 500, description = "Schools could not be read", body = crate::api::dtos::ErrorResponse),
    ),
    tag = "schools"
)]
async fn list_schools(
    state: web::Data<AppState>,
    query: web::Query<SchoolListQuery>,
) -> AppResult<HttpResponse> {
    let reference = query.reference_point()?;
    let result = state.school_service.list_by_distance(reference).await?;
    Ok(HttpResponse::Ok().json(result))
}

#[utoipa::path(
    post,
    path = "/api/schools",
    request_body = CreateSchoolRequest,
    responses(
        (status = 201, description = "School stored", body = crate::api::dtos::SchoolResponse),
        (status = 400, description = "Request body failed validation", body = crate::api::dtos::ErrorResponse),
        (status = 500, description = "School could not be stored", body = crate::api::dtos::ErrorResponse),
    ),
    tag = "schools"
)]
async fn create_school(
    state: web::Data<AppState>,
    payload: web::Json<CreateSchoolRequest>,
) -> AppResult<HttpResponse> {
    let result = state.school_service.create(payload.into_inner()).await?;
    Ok(HttpResponse::Created().json(result))
}
