pub mod proximity;
pub mod school;

pub use proximity::{haversine_km, rank_by_distance, GeoPoint, Located, Ranked, EARTH_RADIUS_KM};
pub use school::{NewSchool, School};
