#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, AtomicI64, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;
use school_directory::domain::{NewSchool, School};
use school_directory::error::{AppError, AppResult};
use school_directory::infrastructure::repositories::SchoolRepository;

/// In-memory store; the `fail_*` switches make the next calls return raw database errors.
#[derive(Default)]
pub struct MockSchoolRepo {
    pub schools: Mutex<Vec<School>>,
    pub fail_writes: AtomicBool,
    pub fail_reads: AtomicBool,
    pub closed: AtomicBool,
    last_id: AtomicI64,
}

impl MockSchoolRepo {
    pub fn with_schools(schools: Vec<School>) -> Self {
        let last_id = schools.iter().map(|school| school.id).max().unwrap_or(0);
        Self {
            schools: Mutex::new(schools),
            last_id: AtomicI64::new(last_id),
            ..Default::default()
        }
    }

    pub fn failing() -> Self {
        let repo = Self::default();
        repo.fail_writes.store(true, Ordering::SeqCst);
        repo.fail_reads.store(true, Ordering::SeqCst);
        repo
    }

    pub fn stored(&self) -> Vec<School> {
        self.schools.lock().expect("schools mutex poisoned").clone()
    }
}

#[async_trait]
impl SchoolRepository for MockSchoolRepo {
    async fn initialize(&self) -> AppResult<()> {
        Ok(())
    }

    async fn create(&self, school: &NewSchool) -> AppResult<School> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(AppError::DatabaseError(sqlx::Error::PoolTimedOut));
        }

        let created = School {
            id: self.last_id.fetch_add(1, Ordering::SeqCst) + 1,
            name: school.name.clone(),
            address: school.address.clone(),
            latitude: school.latitude,
            longitude: school.longitude,
            created_at: Utc::now(),
        };
        self.schools
            .lock()
            .expect("schools mutex poisoned")
            .push(created.clone());
        Ok(created)
    }

    async fn find_all(&self) -> AppResult<Vec<School>> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(AppError::DatabaseError(sqlx::Error::PoolTimedOut));
        }
        Ok(self.stored())
    }

    async fn ping(&self) -> AppResult<()> {
        if self.closed.load(Ordering::SeqCst) || self.fail_reads.load(Ordering::SeqCst) {
            return Err(AppError::StorageUnavailable(sqlx::Error::PoolClosed));
        }
        Ok(())
    }

    async fn close(&self) {
        self.closed.store(true, Ordering::SeqCst);
    }
}
