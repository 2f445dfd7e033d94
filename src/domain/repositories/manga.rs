use async_trait::async_trait;
use thiserror::Error;

use crate::domain::entities::manga::{Author, Character, Genre, Manga, MangaSort};

#[derive(Debug, Error)]
pub enum MangaRepositoryError {
    #[error("database error: {0}")]
    DbError(#[from] sqlx::Error),
}

#[async_trait]
pub trait MangaRepository: Send + Sync {
    async fn get_manga_by_id(&self, id: i64) -> Result<Option<Manga>, MangaRepositoryError>;

    async fn get_popular_manga(&self, limit: i64) -> Result<Vec<Manga>, MangaRepositoryError>;

    async fn get_recently_updated_manga(
        &self,
        limit: i64,
    ) -> Result<Vec<Manga>, MangaRepositoryError>;

    async fn get_ongoing_manga(&self, limit: i64) -> Result<Vec<Manga>, MangaRepositoryError>;

    async fn get_completed_manga(&self, limit: i64) -> Result<Vec<Manga>, MangaRepositoryError>;

    async fn get_similar_manga(
        &self,
        manga_id: i64,
        limit: i64,
    ) -> Result<Vec<Manga>, MangaRepositoryError>;

    async fn browse_manga(
        &self,
        status: Option<&str>,
        query: Option<&str>,
        sort: MangaSort,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<Manga>, MangaRepositoryError>;

    async fn count_browse_manga(
        &self,
        status: Option<&str>,
        query: Option<&str>,
    ) -> Result<i64, MangaRepositoryError>;

    async fn get_genres_by_manga_id(
        &self,
        manga_id: i64,
    ) -> Result<Vec<Genre>, MangaRepositoryError>;

    async fn get_characters_by_manga_id(
        &self,
        manga_id: i64,
        limit: i64,
    ) -> Result<Vec<Character>, MangaRepositoryError>;

    async fn get_authors_by_manga_id(
        &self,
        manga_id: i64,
    ) -> Result<Vec<Author>, MangaRepositoryError>;

    async fn increment_manga_views(&self, id: i64) -> Result<(), MangaRepositoryError>;
}
