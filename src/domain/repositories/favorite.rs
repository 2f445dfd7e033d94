use async_trait::async_trait;
use thiserror::Error;

use crate::domain::entities::{anime::Anime, manga::Manga};

#[derive(Debug, Error)]
pub enum FavoriteRepositoryError {
    #[error("database error: {0}")]
    DbError(#[from] sqlx::Error),
}

#[async_trait]
pub trait FavoriteRepository: Send + Sync {
    /// Insert the pair unless it already exists. Returns whether a row was
    /// actually inserted.
    async fn insert_anime_favorite(
        &self,
        user_id: i64,
        anime_id: i64,
    ) -> Result<bool, FavoriteRepositoryError>;

    async fn delete_anime_favorite(
        &self,
        user_id: i64,
        anime_id: i64,
    ) -> Result<u64, FavoriteRepositoryError>;

    /// Favorited anime joined to their catalog rows, newest favorite first.
    async fn get_anime_favorites(
        &self,
        user_id: i64,
    ) -> Result<Vec<Anime>, FavoriteRepositoryError>;

    async fn get_favorite_anime_ids(
        &self,
        user_id: i64,
    ) -> Result<Vec<i64>, FavoriteRepositoryError>;

    async fn insert_manga_favorite(
        &self,
        user_id: i64,
        manga_id: i64,
    ) -> Result<bool, FavoriteRepositoryError>;

    async fn delete_manga_favorite(
        &self,
        user_id: i64,
        manga_id: i64,
    ) -> Result<u64, FavoriteRepositoryError>;

    async fn get_manga_favorites(
        &self,
        user_id: i64,
    ) -> Result<Vec<Manga>, FavoriteRepositoryError>;

    async fn get_favorite_manga_ids(
        &self,
        user_id: i64,
    ) -> Result<Vec<i64>, FavoriteRepositoryError>;
}
