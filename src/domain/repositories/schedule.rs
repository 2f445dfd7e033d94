use async_trait::async_trait;
use thiserror::Error;

use crate::domain::entities::schedule::ScheduledAnime;

#[derive(Debug, Error)]
pub enum ScheduleRepositoryError {
    #[error("database error: {0}")]
    DbError(#[from] sqlx::Error),
}

#[async_trait]
pub trait ScheduleRepository: Send + Sync {
    /// All broadcast slots joined to their anime, ordered by air time.
    async fn get_weekly_schedule(&self) -> Result<Vec<ScheduledAnime>, ScheduleRepositoryError>;
}
