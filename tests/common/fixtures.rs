#![allow(dead_code)]

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::Utc;
use rust_decimal::Decimal;
use school_directory::api::dtos::CreateSchoolRequest;
use school_directory::domain::{NewSchool, School};

static TEST_COUNTER: AtomicU64 = AtomicU64::new(0);

pub fn next_id() -> u64 {
    TEST_COUNTER.fetch_add(1, Ordering::SeqCst)
}

pub fn school_at(id: i64, name: &str, latitude: f64, longitude: f64) -> School {
    School {
        id,
        name: name.to_string(),
        address: format!("{id} Test Street"),
        latitude: Decimal::from_f64_retain(latitude).expect("finite latitude"),
        longitude: Decimal::from_f64_retain(longitude).expect("finite longitude"),
        created_at: Utc::now(),
    }
}

pub fn new_school(name: &str, latitude: f64, longitude: f64) -> NewSchool {
    NewSchool::from_degrees(
        name.to_string(),
        format!("{} Test Street", next_id()),
        latitude,
        longitude,
    )
    .expect("finite coordinates")
}

pub fn create_request(name: &str, latitude: f64, longitude: f64) -> CreateSchoolRequest {
    CreateSchoolRequest {
        name: name.to_string(),
        address: format!("{} Test Street", next_id()),
        latitude,
        longitude,
    }
}
