use thiserror::Error;

use crate::domain::{
    entities::{anime::Anime, favorite::FavoriteAction, manga::Manga},
    repositories::favorite::{FavoriteRepository, FavoriteRepositoryError},
};

#[derive(Debug, Error)]
pub enum FavoriteError {
    #[error("repository error: {0}")]
    RepositoryError(#[from] FavoriteRepositoryError),
}

#[derive(Clone)]
pub struct FavoriteService<R>
where
    R: FavoriteRepository,
{
    repo: R,
}

impl<R> FavoriteService<R>
where
    R: FavoriteRepository,
{
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Flip the favorite state of an anime for one user. The insert only
    /// succeeds when the pair is absent, so concurrent toggles of the same
    /// pair cannot both report `Added`.
    pub async fn toggle_anime_favorite(
        &self,
        user_id: i64,
        anime_id: i64,
    ) -> Result<FavoriteAction, FavoriteError> {
        if self.repo.insert_anime_favorite(user_id, anime_id).await? {
            return Ok(FavoriteAction::Added);
        }

        self.repo.delete_anime_favorite(user_id, anime_id).await?;
        Ok(FavoriteAction::Removed)
    }

    pub async fn toggle_manga_favorite(
        &self,
        user_id: i64,
        manga_id: i64,
    ) -> Result<FavoriteAction, FavoriteError> {
        if self.repo.insert_manga_favorite(user_id, manga_id).await? {
            return Ok(FavoriteAction::Added);
        }

        self.repo.delete_manga_favorite(user_id, manga_id).await?;
        Ok(FavoriteAction::Removed)
    }

    /// Favorited anime of a user, newest favorite first.
    pub async fn fetch_anime_favorites(&self, user_id: i64) -> Vec<Anime> {
        match self.repo.get_anime_favorites(user_id).await {
            Ok(list) => list,
            Err(e) => {
                error!("failed to fetch anime favorites of user {user_id}: {e}");
                vec![]
            }
        }
    }

    /// Favorited manga of a user, newest favorite first.
    pub async fn fetch_manga_favorites(&self, user_id: i64) -> Vec<Manga> {
        match self.repo.get_manga_favorites(user_id).await {
            Ok(list) => list,
            Err(e) => {
                error!("failed to fetch manga favorites of user {user_id}: {e}");
                vec![]
            }
        }
    }
}
