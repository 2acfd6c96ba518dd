use async_trait::async_trait;

use crate::domain::{NewSchool, School};
use crate::error::AppResult;

/// Append-only persistence for school records.
#[async_trait]
pub trait SchoolRepository: Send + Sync {
    /// Ensures the schema exists. Safe to call on every start.
    async fn initialize(&self) -> AppResult<()>;
    /// Stores `school` and returns it with its generated id and timestamp.
    async fn create(&self, school: &NewSchool) -> AppResult<School>;
    /// Every stored school, in no particular order.
    async fn find_all(&self) -> AppResult<Vec<School>>;
    async fn ping(&self) -> AppResult<()>;
    /// Releases pooled connections; later calls fail.
    async fn close(&self);
}
