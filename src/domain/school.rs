use chrono::{DateTime, Utc};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::proximity::{GeoPoint, Located};

/// Fractional digits kept by the `NUMERIC(.., 8)` coordinate columns.
pub const COORDINATE_SCALE: u32 = 8;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct School {
    pub id: i64,
    pub name: String,
    pub address: String,
    pub latitude: Decimal,
    pub longitude: Decimal,
    pub created_at: DateTime<Utc>,
}

impl School {
    pub fn latitude_degrees(&self) -> f64 {
        self.latitude.to_f64().unwrap_or_default()
    }

    pub fn longitude_degrees(&self) -> f64 {
        self.longitude.to_f64().unwrap_or_default()
    }
}

impl Located for School {
    fn position(&self) -> GeoPoint {
        GeoPoint::new(self.latitude_degrees(), self.longitude_degrees())
    }
}

/// A validated school waiting for the store to assign `id` and `created_at`.
#[derive(Debug, Clone, PartialEq)]
pub struct NewSchool {
    pub name: String,
    pub address: String,
    pub latitude: Decimal,
    pub longitude: Decimal,
}

impl NewSchool {
    /// Returns `None` when a coordinate has no fixed-point representation (NaN or infinite).
    pub fn from_degrees(
        name: String,
        address: String,
        latitude: f64,
        longitude: f64,
    ) -> Option<Self> {
        Some(Self {
            name,
            address,
            latitude: to_fixed_point(latitude)?,
            longitude: to_fixed_point(longitude)?,
        })
    }
}

fn to_fixed_point(degrees: f64) -> Option<Decimal> {
    Decimal::from_f64_retain(degrees).map(|value| value.round_dp(COORDINATE_SCALE))
}
