use async_trait::async_trait;
use rayon::prelude::*;
use sqlx::{Row, SqlitePool};

use crate::{
    domain::{
        entities::{anime::Anime, manga::Manga},
        repositories::favorite::{FavoriteRepository, FavoriteRepositoryError},
    },
    infrastructure::database::Pool,
};

#[derive(Debug, Clone)]
pub struct FavoriteRepositoryImpl {
    pool: Pool,
}

impl FavoriteRepositoryImpl {
    pub fn new<P: Into<Pool>>(pool: P) -> Self {
        Self { pool: pool.into() }
    }
}

#[async_trait]
impl FavoriteRepository for FavoriteRepositoryImpl {
    async fn insert_anime_favorite(
        &self,
        user_id: i64,
        anime_id: i64,
    ) -> Result<bool, FavoriteRepositoryError> {
        let result = sqlx::query(
            r#"INSERT INTO user_anime_favorites (user_id, anime_id) VALUES (?, ?)
            ON CONFLICT (user_id, anime_id) DO NOTHING"#,
        )
        .bind(user_id)
        .bind(anime_id)
        .execute(&self.pool as &SqlitePool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_anime_favorite(
        &self,
        user_id: i64,
        anime_id: i64,
    ) -> Result<u64, FavoriteRepositoryError> {
        let result =
            sqlx::query(r#"DELETE FROM user_anime_favorites WHERE user_id = ? AND anime_id = ?"#)
                .bind(user_id)
                .bind(anime_id)
                .execute(&self.pool as &SqlitePool)
                .await?;

        Ok(result.rows_affected())
    }

    async fn get_anime_favorites(
        &self,
        user_id: i64,
    ) -> Result<Vec<Anime>, FavoriteRepositoryError> {
        let rows = sqlx::query(
            r#"SELECT anime.* FROM anime
            JOIN user_anime_favorites ON user_anime_favorites.anime_id = anime.id
            WHERE user_anime_favorites.user_id = ?
            ORDER BY user_anime_favorites.created_at DESC, user_anime_favorites.id DESC"#,
        )
        .bind(user_id)
        .fetch_all(&self.pool as &SqlitePool)
        .await?;

        Ok(rows
            .into_par_iter()
            .map(|row| Anime {
                id: row.get(0),
                title: row.get(1),
                description: row.get(2),
                image_url: row.get(3),
                kind: row.get(4),
                status: row.get(5),
                rating: row.get(6),
                episodes: row.get(7),
                views: row.get(8),
                release_date: row.get(9),
                last_update: row.get(10),
                created_at: row.get(11),
            })
            .collect())
    }

    async fn get_favorite_anime_ids(
        &self,
        user_id: i64,
    ) -> Result<Vec<i64>, FavoriteRepositoryError> {
        let rows =
            sqlx::query(r#"SELECT anime_id FROM user_anime_favorites WHERE user_id = ?"#)
                .bind(user_id)
                .fetch_all(&self.pool as &SqlitePool)
                .await?;

        Ok(rows.iter().map(|row| row.get(0)).collect())
    }

    async fn insert_manga_favorite(
        &self,
        user_id: i64,
        manga_id: i64,
    ) -> Result<bool, FavoriteRepositoryError> {
        let result = sqlx::query(
            r#"INSERT INTO user_manga_favorites (user_id, manga_id) VALUES (?, ?)
            ON CONFLICT (user_id, manga_id) DO NOTHING"#,
        )
        .bind(user_id)
        .bind(manga_id)
        .execute(&self.pool as &SqlitePool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_manga_favorite(
        &self,
        user_id: i64,
        manga_id: i64,
    ) -> Result<u64, FavoriteRepositoryError> {
        let result =
            sqlx::query(r#"DELETE FROM user_manga_favorites WHERE user_id = ? AND manga_id = ?"#)
                .bind(user_id)
                .bind(manga_id)
                .execute(&self.pool as &SqlitePool)
                .await?;

        Ok(result.rows_affected())
    }

    async fn get_manga_favorites(
        &self,
        user_id: i64,
    ) -> Result<Vec<Manga>, FavoriteRepositoryError> {
        let rows = sqlx::query(
            r#"SELECT manga.* FROM manga
            JOIN user_manga_favorites ON user_manga_favorites.manga_id = manga.id
            WHERE user_manga_favorites.user_id = ?
            ORDER BY user_manga_favorites.created_at DESC, user_manga_favorites.id DESC"#,
        )
        .bind(user_id)
        .fetch_all(&self.pool as &SqlitePool)
        .await?;

        Ok(rows
            .into_par_iter()
            .map(|row| Manga {
                id: row.get(0),
                title: row.get(1),
                description: row.get(2),
                image_url: row.get(3),
                kind: row.get(4),
                status: row.get(5),
                rating: row.get(6),
                views: row.get(7),
                release_date: row.get(8),
                last_update: row.get(9),
                created_at: row.get(10),
            })
            .collect())
    }

    async fn get_favorite_manga_ids(
        &self,
        user_id: i64,
    ) -> Result<Vec<i64>, FavoriteRepositoryError> {
        let rows =
            sqlx::query(r#"SELECT manga_id FROM user_manga_favorites WHERE user_id = ?"#)
                .bind(user_id)
                .fetch_all(&self.pool as &SqlitePool)
                .await?;

        Ok(rows.iter().map(|row| row.get(0)).collect())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::infrastructure::database::establish_test_connection;

    async fn seed_profile(pool: &Pool, username: &str) -> i64 {
        sqlx::query(r#"INSERT INTO profiles (username, email, password) VALUES (?, ?, ?)"#)
            .bind(username)
            .bind(format!("{username}@example.com"))
            .bind("hash")
            .execute(pool as &SqlitePool)
            .await
            .unwrap()
            .last_insert_rowid()
    }

    async fn seed_anime(pool: &Pool, title: &str) -> i64 {
        sqlx::query(r#"INSERT INTO anime (title) VALUES (?)"#)
            .bind(title)
            .execute(pool as &SqlitePool)
            .await
            .unwrap()
            .last_insert_rowid()
    }

    async fn seed_manga(pool: &Pool, title: &str) -> i64 {
        sqlx::query(r#"INSERT INTO manga (title) VALUES (?)"#)
            .bind(title)
            .execute(pool as &SqlitePool)
            .await
            .unwrap()
            .last_insert_rowid()
    }

    #[tokio::test]
    async fn test_insert_only_once() {
        let pool = establish_test_connection().await;
        let repo = FavoriteRepositoryImpl::new(pool.clone());

        let user_id = seed_profile(&pool, "yuki").await;
        let anime_id = seed_anime(&pool, "Cowboy Bebop").await;

        assert!(repo.insert_anime_favorite(user_id, anime_id).await.unwrap());
        assert!(!repo.insert_anime_favorite(user_id, anime_id).await.unwrap());

        assert_eq!(repo.delete_anime_favorite(user_id, anime_id).await.unwrap(), 1);
        assert_eq!(repo.delete_anime_favorite(user_id, anime_id).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_favorites_newest_first() {
        let pool = establish_test_connection().await;
        let repo = FavoriteRepositoryImpl::new(pool.clone());

        let user_id = seed_profile(&pool, "yuki").await;
        let bebop = seed_manga(&pool, "Cowboy Bebop").await;
        let berserk = seed_manga(&pool, "Berserk").await;
        let monster = seed_manga(&pool, "Monster").await;

        repo.insert_manga_favorite(user_id, bebop).await.unwrap();
        repo.insert_manga_favorite(user_id, berserk).await.unwrap();
        repo.insert_manga_favorite(user_id, monster).await.unwrap();

        let favorites = repo.get_manga_favorites(user_id).await.unwrap();
        let titles: Vec<_> = favorites.iter().map(|m| m.title.as_str()).collect();
        assert_eq!(titles, vec!["Monster", "Berserk", "Cowboy Bebop"]);
    }

    #[tokio::test]
    async fn test_favorites_are_per_user() {
        let pool = establish_test_connection().await;
        let repo = FavoriteRepositoryImpl::new(pool.clone());

        let yuki = seed_profile(&pool, "yuki").await;
        let haru = seed_profile(&pool, "haru").await;
        let anime_id = seed_anime(&pool, "Cowboy Bebop").await;

        repo.insert_anime_favorite(yuki, anime_id).await.unwrap();

        assert_eq!(repo.get_favorite_anime_ids(yuki).await.unwrap(), vec![anime_id]);
        assert!(repo.get_favorite_anime_ids(haru).await.unwrap().is_empty());
        assert!(repo.get_anime_favorites(haru).await.unwrap().is_empty());
    }
}
