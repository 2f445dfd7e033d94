use async_trait::async_trait;
use thiserror::Error;

use crate::domain::entities::chapter::{Chapter, ChapterImage};

#[derive(Debug, Error)]
pub enum ChapterRepositoryError {
    #[error("database error: {0}")]
    DbError(#[from] sqlx::Error),
}

#[async_trait]
pub trait ChapterRepository: Send + Sync {
    async fn get_chapter_by_id(&self, id: i64) -> Result<Option<Chapter>, ChapterRepositoryError>;

    async fn get_chapter_by_manga_id_number(
        &self,
        manga_id: i64,
        number: f64,
    ) -> Result<Option<Chapter>, ChapterRepositoryError>;

    async fn get_chapters_by_manga_id(
        &self,
        manga_id: i64,
        asc: bool,
    ) -> Result<Vec<Chapter>, ChapterRepositoryError>;

    async fn get_images_by_chapter_id(
        &self,
        chapter_id: i64,
    ) -> Result<Vec<ChapterImage>, ChapterRepositoryError>;
}
