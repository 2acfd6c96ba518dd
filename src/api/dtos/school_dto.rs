use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::domain::GeoPoint;
use crate::error::{AppError, AppResult};

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct CreateSchoolRequest {
    #[validate(length(min = 1, max = 100, message = "name must be between 1 and 100 characters"))]
    pub name: String,

    #[validate(length(
        min = 1,
        max = 200,
        message = "address must be between 1 and 200 characters"
    ))]
    pub address: String,

    #[validate(range(min = -90.0, max = 90.0, message = "latitude must be between -90 and 90"))]
    pub latitude: f64,

    #[validate(range(
        min = -180.0,
        max = 180.0,
        message = "longitude must be between -180 and 180"
    ))]
    pub longitude: f64,
}

impl CreateSchoolRequest {
    /// Order in which failing fields are reported.
    pub const FIELD_ORDER: &'static [&'static str] = &["name", "address", "latitude", "longitude"];
}

/// Raw query string of the listing endpoint; parsed by the handler so that
/// missing and non-numeric values share one error message.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SchoolListQuery {
    /// Reference latitude in degrees
    pub latitude: Option<String>,
    /// Reference longitude in degrees
    pub longitude: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct SchoolResponse {
    pub id: i64,
    pub name: String,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct RankedSchoolResponse {
    #[serde(flatten)]
    pub school: SchoolResponse,
    /// Great-circle distance in kilometers from the query point.
    pub distance: f64,
}

pub const MISSING_COORDINATES_MESSAGE: &str =
    "Valid latitude and longitude are required as query parameters";

impl SchoolListQuery {
    /// Parses and range-checks the reference point of a listing request.
    pub fn reference_point(&self) -> AppResult<GeoPoint> {
        let latitude = parse_coordinate(self.latitude.as_deref())?;
        let longitude = parse_coordinate(self.longitude.as_deref())?;

        if !(-90.0..=90.0).contains(&latitude) {
            return Err(AppError::validation_error(
                "latitude must be between -90 and 90",
            ));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(AppError::validation_error(
                "longitude must be between -180 and 180",
            ));
        }

        Ok(GeoPoint::new(latitude, longitude))
    }
}

fn parse_coordinate(raw: Option<&str>) -> AppResult<f64> {
    raw.map(str::trim)
        .filter(|value| !value.is_empty())
        .and_then(|value| value.parse::<f64>().ok())
        .filter(|value| value.is_finite())
        .ok_or_else(|| AppError::BadRequest(MISSING_COORDINATES_MESSAGE.to_string()))
}
