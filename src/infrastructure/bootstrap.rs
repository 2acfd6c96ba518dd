use crate::config::DatabaseConfig;
use crate::error::{AppError, AppResult};
use crate::infrastructure::db::pool::create_pool;
use crate::infrastructure::repositories::{SchoolRepository, SchoolRepositoryImpl};

/// Connects the pool and brings the schema up to date. Any failure here is
/// `StorageUnavailable` and stops startup.
pub async fn connect_store(config: &DatabaseConfig) -> AppResult<SchoolRepositoryImpl> {
    let pool = create_pool(config)
        .await
        .map_err(AppError::StorageUnavailable)?;

    let store = SchoolRepositoryImpl::new(pool);
    if let Err(err) = store.initialize().await {
        store.close().await;
        return Err(err);
    }
    Ok(store)
}
