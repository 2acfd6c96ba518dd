use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::{NewSchool, School};
use crate::error::{AppError, AppResult};
use crate::infrastructure::db::migrations::run_migrations;

use super::traits::SchoolRepository;

pub struct SchoolRepositoryImpl {
    pool: PgPool,
}

impl SchoolRepositoryImpl {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SchoolRepository for SchoolRepositoryImpl {
    async fn initialize(&self) -> AppResult<()> {
        run_migrations(&self.pool).await?;
        Ok(())
    }

    async fn create(&self, school: &NewSchool) -> AppResult<School> {
        let created = sqlx::query_as::<_, School>(
            r#"
            INSERT INTO schools (name, address, latitude, longitude)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, address, latitude, longitude, created_at
            "#,
        )
        .bind(&school.name)
        .bind(&school.address)
        .bind(school.latitude)
        .bind(school.longitude)
        .fetch_one(&self.pool)
        .await?;
        Ok(created)
    }

    async fn find_all(&self) -> AppResult<Vec<School>> {
        let schools = sqlx::query_as::<_, School>(
            "SELECT id, name, address, latitude, longitude, created_at FROM schools",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(schools)
    }

    async fn ping(&self) -> AppResult<()> {
        sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::StorageUnavailable)?;
        Ok(())
    }

    async fn close(&self) {
        self.pool.close().await;
    }
}
