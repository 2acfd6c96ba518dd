use std::sync::Arc;

use validator::Validate;

use crate::api::dtos::{CreateSchoolRequest, RankedSchoolResponse, SchoolResponse};
use crate::domain::{rank_by_distance, GeoPoint, NewSchool};
use crate::error::{AppError, AppResult};
use crate::infrastructure::repositories::SchoolRepository;

pub mod mapper;

pub const ADD_SCHOOL_FAILED: &str = "Failed to add school";
pub const FETCH_SCHOOLS_FAILED: &str = "Failed to fetch schools";

#[derive(Clone)]
pub struct SchoolService {
    school_repo: Arc<dyn SchoolRepository>,
}

impl SchoolService {
    pub fn new(school_repo: Arc<dyn SchoolRepository>) -> Self {
        Self { school_repo }
    }

    pub async fn create(&self, request: CreateSchoolRequest) -> AppResult<SchoolResponse> {
        request
            .validate()
            .map_err(|errors| AppError::from_validation(errors, CreateSchoolRequest::FIELD_ORDER))?;

        let new_school = NewSchool::from_degrees(
            request.name,
            request.address,
            request.latitude,
            request.longitude,
        )
        .ok_or_else(|| AppError::validation_error("latitude and longitude must be finite numbers"))?;

        let school = self
            .school_repo
            .create(&new_school)
            .await
            .map_err(|err| err.with_storage_context(ADD_SCHOOL_FAILED))?;

        Ok(mapper::map_school_to_response(school))
    }

    /// Every school, nearest to `reference` first.
    pub async fn list_by_distance(
        &self,
        reference: GeoPoint,
    ) -> AppResult<Vec<RankedSchoolResponse>> {
        let schools = self
            .school_repo
            .find_all()
            .await
            .map_err(|err| err.with_storage_context(FETCH_SCHOOLS_FAILED))?;

        Ok(rank_by_distance(reference, schools)
            .into_iter()
            .map(mapper::map_ranked_school_to_response)
            .collect())
    }

    pub async fn readiness(&self) -> AppResult<()> {
        self.school_repo.ping().await
    }
}
