use async_trait::async_trait;
use thiserror::Error;

use crate::domain::entities::anime::Anime;

#[derive(Debug, Error)]
pub enum AnimeRepositoryError {
    #[error("database error: {0}")]
    DbError(#[from] sqlx::Error),
}

#[async_trait]
pub trait AnimeRepository: Send + Sync {
    async fn get_anime_by_id(&self, id: i64) -> Result<Option<Anime>, AnimeRepositoryError>;

    async fn get_popular_anime(&self, limit: i64) -> Result<Vec<Anime>, AnimeRepositoryError>;

    async fn get_top_rated_anime(&self, limit: i64) -> Result<Vec<Anime>, AnimeRepositoryError>;

    async fn get_airing_anime(&self, limit: i64) -> Result<Vec<Anime>, AnimeRepositoryError>;

    async fn get_recently_added_anime(
        &self,
        limit: i64,
    ) -> Result<Vec<Anime>, AnimeRepositoryError>;

    async fn get_similar_anime(
        &self,
        anime_id: i64,
        limit: i64,
    ) -> Result<Vec<Anime>, AnimeRepositoryError>;

    async fn search_anime(
        &self,
        query: &str,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<Anime>, AnimeRepositoryError>;

    async fn count_search_anime(&self, query: &str) -> Result<i64, AnimeRepositoryError>;

    async fn increment_anime_views(&self, id: i64) -> Result<(), AnimeRepositoryError>;
}
