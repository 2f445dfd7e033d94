use async_trait::async_trait;
use rayon::prelude::*;
use sqlx::{Row, SqlitePool};

use crate::{
    domain::{
        entities::anime::Anime,
        repositories::anime::{AnimeRepository, AnimeRepositoryError},
    },
    infrastructure::database::Pool,
};

#[derive(Debug, Clone)]
pub struct AnimeRepositoryImpl {
    pool: Pool,
}

impl AnimeRepositoryImpl {
    pub fn new<P: Into<Pool>>(pool: P) -> Self {
        Self { pool: pool.into() }
    }
}

#[async_trait]
impl AnimeRepository for AnimeRepositoryImpl {
    async fn get_anime_by_id(&self, id: i64) -> Result<Option<Anime>, AnimeRepositoryError> {
        let row = sqlx::query(r#"SELECT anime.* FROM anime WHERE anime.id = ?"#)
            .bind(id)
            .fetch_optional(&self.pool as &SqlitePool)
            .await?;

        Ok(row.map(|row| Anime {
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
        }))
    }

    async fn get_popular_anime(&self, limit: i64) -> Result<Vec<Anime>, AnimeRepositoryError> {
        let rows = sqlx::query(
            r#"SELECT anime.* FROM anime
            ORDER BY anime.views DESC
            LIMIT ?"#,
        )
        .bind(limit)
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

    async fn get_top_rated_anime(&self, limit: i64) -> Result<Vec<Anime>, AnimeRepositoryError> {
        let rows = sqlx::query(
            r#"SELECT anime.* FROM anime
            ORDER BY anime.rating DESC
            LIMIT ?"#,
        )
        .bind(limit)
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

    async fn get_airing_anime(&self, limit: i64) -> Result<Vec<Anime>, AnimeRepositoryError> {
        let rows = sqlx::query(
            r#"SELECT anime.* FROM anime
            WHERE anime.status = 'ongoing'
            ORDER BY anime.last_update DESC
            LIMIT ?"#,
        )
        .bind(limit)
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

    async fn get_recently_added_anime(
        &self,
        limit: i64,
    ) -> Result<Vec<Anime>, AnimeRepositoryError> {
        let rows = sqlx::query(
            r#"SELECT anime.* FROM anime
            ORDER BY anime.created_at DESC, anime.id DESC
            LIMIT ?"#,
        )
        .bind(limit)
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

    async fn get_similar_anime(
        &self,
        anime_id: i64,
        limit: i64,
    ) -> Result<Vec<Anime>, AnimeRepositoryError> {
        let rows = sqlx::query(
            r#"SELECT anime.* FROM anime
            WHERE anime.id <> ?
            ORDER BY anime.views DESC
            LIMIT ?"#,
        )
        .bind(anime_id)
        .bind(limit)
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

    async fn search_anime(
        &self,
        query: &str,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<Anime>, AnimeRepositoryError> {
        let rows = sqlx::query(
            r#"SELECT anime.* FROM anime
            WHERE anime.title LIKE ?
            ORDER BY anime.views DESC
            LIMIT ? OFFSET ?"#,
        )
        .bind(format!("%{query}%"))
        .bind(limit)
        .bind(offset)
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

    async fn count_search_anime(&self, query: &str) -> Result<i64, AnimeRepositoryError> {
        let row = sqlx::query(r#"SELECT COUNT(1) FROM anime WHERE anime.title LIKE ?"#)
            .bind(format!("%{query}%"))
            .fetch_one(&self.pool as &SqlitePool)
            .await?;

        Ok(row.get(0))
    }

    async fn increment_anime_views(&self, id: i64) -> Result<(), AnimeRepositoryError> {
        sqlx::query(r#"UPDATE anime SET views = views + 1 WHERE id = ?"#)
            .bind(id)
            .execute(&self.pool as &SqlitePool)
            .await?;

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::infrastructure::database::establish_test_connection;

    async fn seed_anime(pool: &Pool, title: &str, views: i64, rating: f64, status: &str) -> i64 {
        sqlx::query(r#"INSERT INTO anime (title, views, rating, status) VALUES (?, ?, ?, ?)"#)
            .bind(title)
            .bind(views)
            .bind(rating)
            .bind(status)
            .execute(pool as &SqlitePool)
            .await
            .unwrap()
            .last_insert_rowid()
    }

    #[tokio::test]
    async fn test_rails_ordering() {
        let pool = establish_test_connection().await;
        let repo = AnimeRepositoryImpl::new(pool.clone());

        seed_anime(&pool, "Beta", 10, 6.5, "ongoing").await;
        seed_anime(&pool, "Alpha", 30, 9.1, "completed").await;
        seed_anime(&pool, "Gamma", 20, 7.8, "ongoing").await;

        let popular = repo.get_popular_anime(2).await.unwrap();
        let titles: Vec<_> = popular.iter().map(|a| a.title.as_str()).collect();
        assert_eq!(titles, vec!["Alpha", "Gamma"]);

        let top_rated = repo.get_top_rated_anime(3).await.unwrap();
        assert_eq!(top_rated[0].title, "Alpha");

        let airing = repo.get_airing_anime(10).await.unwrap();
        assert_eq!(airing.len(), 2);
        assert!(airing.iter().all(|a| a.status.as_deref() == Some("ongoing")));
    }

    #[tokio::test]
    async fn test_search_matches_case_insensitive() {
        let pool = establish_test_connection().await;
        let repo = AnimeRepositoryImpl::new(pool.clone());

        seed_anime(&pool, "Fullmetal Alchemist", 30, 9.1, "completed").await;
        seed_anime(&pool, "Full Moon", 10, 7.2, "completed").await;
        seed_anime(&pool, "Naruto", 20, 8.0, "completed").await;

        let found = repo.search_anime("full", 0, 10).await.unwrap();
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].title, "Fullmetal Alchemist");

        assert_eq!(repo.count_search_anime("full").await.unwrap(), 2);

        let missing = repo.search_anime("zzz", 0, 10).await.unwrap();
        assert!(missing.is_empty());
        assert_eq!(repo.count_search_anime("zzz").await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_similar_excludes_self() {
        let pool = establish_test_connection().await;
        let repo = AnimeRepositoryImpl::new(pool.clone());

        let id = seed_anime(&pool, "Alpha", 30, 9.1, "ongoing").await;
        seed_anime(&pool, "Beta", 10, 6.5, "ongoing").await;

        let similar = repo.get_similar_anime(id, 10).await.unwrap();
        assert_eq!(similar.len(), 1);
        assert_eq!(similar[0].title, "Beta");
    }

    #[tokio::test]
    async fn test_increment_views() {
        let pool = establish_test_connection().await;
        let repo = AnimeRepositoryImpl::new(pool.clone());

        let id = seed_anime(&pool, "Alpha", 0, 9.1, "ongoing").await;

        repo.increment_anime_views(id).await.unwrap();
        repo.increment_anime_views(id).await.unwrap();

        let anime = repo.get_anime_by_id(id).await.unwrap().unwrap();
        assert_eq!(anime.views, 2);
    }

    #[tokio::test]
    async fn test_get_anime_by_id_missing() {
        let pool = establish_test_connection().await;
        let repo = AnimeRepositoryImpl::new(pool);

        assert!(repo.get_anime_by_id(404).await.unwrap().is_none());
    }
}
