use crate::api::dtos::{RankedSchoolResponse, SchoolResponse};
use crate::domain::{Ranked, School};

pub fn map_school_to_response(school: School) -> SchoolResponse {
    SchoolResponse {
        id: school.id,
        latitude: school.latitude_degrees(),
        longitude: school.longitude_degrees(),
        name: school.name,
        address: school.address,
        created_at: school.created_at,
    }
}

pub fn map_ranked_school_to_response(ranked: Ranked<School>) -> RankedSchoolResponse {
    RankedSchoolResponse {
        school: map_school_to_response(ranked.item),
        distance: ranked.distance_km,
    }
}
