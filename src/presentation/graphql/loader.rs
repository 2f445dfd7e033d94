use std::{
    collections::{HashMap, HashSet},
    sync::Arc,
};

use async_graphql::dataloader::Loader;

use crate::{
    domain::repositories::favorite::FavoriteRepository,
    infrastructure::domain::repositories::favorite::FavoriteRepositoryImpl,
};

pub struct DatabaseLoader {
    favorite_repo: FavoriteRepositoryImpl,
}

impl DatabaseLoader {
    pub fn new(favorite_repo: FavoriteRepositoryImpl) -> Self {
        Self { favorite_repo }
    }
}

/// (user id, anime id) pair used to batch favorite checks.
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
pub struct UserAnimeFavoriteId(pub i64, pub i64);

impl Loader<UserAnimeFavoriteId> for DatabaseLoader {
    type Value = bool;
    type Error = Arc<anyhow::Error>;

    async fn load(
        &self,
        keys: &[UserAnimeFavoriteId],
    ) -> Result<HashMap<UserAnimeFavoriteId, Self::Value>, Self::Error> {
        let user_ids: HashSet<i64> = keys.iter().map(|key| key.0).collect();

        let mut favorites = HashSet::new();
        for user_id in user_ids {
            let ids = self
                .favorite_repo
                .get_favorite_anime_ids(user_id)
                .await
                .map_err(|e| Arc::new(anyhow::Error::from(e)))?;
            favorites.extend(ids.into_iter().map(|anime_id| (user_id, anime_id)));
        }

        Ok(keys
            .iter()
            .map(|key| (key.clone(), favorites.contains(&(key.0, key.1))))
            .collect())
    }
}

/// (user id, manga id) pair used to batch favorite checks.
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
pub struct UserMangaFavoriteId(pub i64, pub i64);

impl Loader<UserMangaFavoriteId> for DatabaseLoader {
    type Value = bool;
    type Error = Arc<anyhow::Error>;

    async fn load(
        &self,
        keys: &[UserMangaFavoriteId],
    ) -> Result<HashMap<UserMangaFavoriteId, Self::Value>, Self::Error> {
        let user_ids: HashSet<i64> = keys.iter().map(|key| key.0).collect();

        let mut favorites = HashSet::new();
        for user_id in user_ids {
            let ids = self
                .favorite_repo
                .get_favorite_manga_ids(user_id)
                .await
                .map_err(|e| Arc::new(anyhow::Error::from(e)))?;
            favorites.extend(ids.into_iter().map(|manga_id| (user_id, manga_id)));
        }

        Ok(keys
            .iter()
            .map(|key| (key.clone(), favorites.contains(&(key.0, key.1))))
            .collect())
    }
}
