use async_trait::async_trait;
use rayon::prelude::*;
use sqlx::{Row, SqlitePool};

use crate::{
    domain::{
        entities::manga::{Author, Character, Genre, Manga, MangaSort},
        repositories::manga::{MangaRepository, MangaRepositoryError},
    },
    infrastructure::database::Pool,
};

#[derive(Debug, Clone)]
pub struct MangaRepositoryImpl {
    pool: Pool,
}

impl MangaRepositoryImpl {
    pub fn new<P: Into<Pool>>(pool: P) -> Self {
        Self { pool: pool.into() }
    }
}

#[async_trait]
impl MangaRepository for MangaRepositoryImpl {
    async fn get_manga_by_id(&self, id: i64) -> Result<Option<Manga>, MangaRepositoryError> {
        let row = sqlx::query(r#"SELECT manga.* FROM manga WHERE manga.id = ?"#)
            .bind(id)
            .fetch_optional(&self.pool as &SqlitePool)
            .await?;

        Ok(row.map(|row| Manga {
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
        }))
    }

    async fn get_popular_manga(&self, limit: i64) -> Result<Vec<Manga>, MangaRepositoryError> {
        let rows = sqlx::query(
            r#"SELECT manga.* FROM manga
            ORDER BY manga.views DESC
            LIMIT ?"#,
        )
        .bind(limit)
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

    async fn get_recently_updated_manga(
        &self,
        limit: i64,
    ) -> Result<Vec<Manga>, MangaRepositoryError> {
        let rows = sqlx::query(
            r#"SELECT manga.* FROM manga
            ORDER BY manga.last_update DESC, manga.id DESC
            LIMIT ?"#,
        )
        .bind(limit)
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

    async fn get_ongoing_manga(&self, limit: i64) -> Result<Vec<Manga>, MangaRepositoryError> {
        let rows = sqlx::query(
            r#"SELECT manga.* FROM manga
            WHERE manga.status = 'ongoing'
            ORDER BY manga.last_update DESC, manga.id DESC
            LIMIT ?"#,
        )
        .bind(limit)
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

    async fn get_completed_manga(&self, limit: i64) -> Result<Vec<Manga>, MangaRepositoryError> {
        let rows = sqlx::query(
            r#"SELECT manga.* FROM manga
            WHERE manga.status = 'completed'
            ORDER BY manga.rating DESC, manga.id DESC
            LIMIT ?"#,
        )
        .bind(limit)
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

    async fn get_similar_manga(
        &self,
        manga_id: i64,
        limit: i64,
    ) -> Result<Vec<Manga>, MangaRepositoryError> {
        let rows = sqlx::query(
            r#"SELECT manga.* FROM manga
            WHERE manga.id <> ?
            ORDER BY manga.views DESC
            LIMIT ?"#,
        )
        .bind(manga_id)
        .bind(limit)
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

    async fn browse_manga(
        &self,
        status: Option<&str>,
        query: Option<&str>,
        sort: MangaSort,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<Manga>, MangaRepositoryError> {
        let mut conditions = vec![];
        if status.is_some() {
            conditions.push("manga.status = ?");
        }
        if query.is_some() {
            conditions.push("manga.title LIKE ?");
        }

        let mut sql = "SELECT manga.* FROM manga".to_string();
        if !conditions.is_empty() {
            sql = format!("{sql} WHERE {}", conditions.join(" AND "));
        }

        let order = match sort {
            MangaSort::Popular => "manga.views DESC",
            MangaSort::Newest => "manga.created_at DESC, manga.id DESC",
            MangaSort::Rating => "manga.rating DESC",
            MangaSort::Title => "manga.title ASC",
        };
        sql = format!("{sql} ORDER BY {order} LIMIT ? OFFSET ?");

        let mut q = sqlx::query(&sql);
        if let Some(status) = status {
            q = q.bind(status.to_string());
        }
        if let Some(query) = query {
            q = q.bind(format!("%{query}%"));
        }

        let rows = q
            .bind(limit)
            .bind(offset)
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

    async fn count_browse_manga(
        &self,
        status: Option<&str>,
        query: Option<&str>,
    ) -> Result<i64, MangaRepositoryError> {
        let mut conditions = vec![];
        if status.is_some() {
            conditions.push("manga.status = ?");
        }
        if query.is_some() {
            conditions.push("manga.title LIKE ?");
        }

        let mut sql = "SELECT COUNT(1) FROM manga".to_string();
        if !conditions.is_empty() {
            sql = format!("{sql} WHERE {}", conditions.join(" AND "));
        }

        let mut q = sqlx::query(&sql);
        if let Some(status) = status {
            q = q.bind(status.to_string());
        }
        if let Some(query) = query {
            q = q.bind(format!("%{query}%"));
        }

        let row = q.fetch_one(&self.pool as &SqlitePool).await?;

        Ok(row.get(0))
    }

    async fn get_genres_by_manga_id(
        &self,
        manga_id: i64,
    ) -> Result<Vec<Genre>, MangaRepositoryError> {
        let rows = sqlx::query(
            r#"SELECT genre.* FROM genre
            JOIN manga_genre ON manga_genre.genre_id = genre.id
            WHERE manga_genre.manga_id = ?
            ORDER BY genre.name ASC"#,
        )
        .bind(manga_id)
        .fetch_all(&self.pool as &SqlitePool)
        .await?;

        Ok(rows
            .into_par_iter()
            .map(|row| Genre {
                id: row.get(0),
                name: row.get(1),
            })
            .collect())
    }

    async fn get_characters_by_manga_id(
        &self,
        manga_id: i64,
        limit: i64,
    ) -> Result<Vec<Character>, MangaRepositoryError> {
        let rows = sqlx::query(
            r#"SELECT character.* FROM character
            JOIN manga_character ON manga_character.character_id = character.id
            WHERE manga_character.manga_id = ?
            ORDER BY character.id ASC
            LIMIT ?"#,
        )
        .bind(manga_id)
        .bind(limit)
        .fetch_all(&self.pool as &SqlitePool)
        .await?;

        Ok(rows
            .into_par_iter()
            .map(|row| Character {
                id: row.get(0),
                name: row.get(1),
                image_url: row.get(2),
                description: row.get(3),
            })
            .collect())
    }

    async fn get_authors_by_manga_id(
        &self,
        manga_id: i64,
    ) -> Result<Vec<Author>, MangaRepositoryError> {
        let rows = sqlx::query(
            r#"SELECT author.* FROM author
            JOIN manga_author ON manga_author.author_id = author.id
            WHERE manga_author.manga_id = ?
            ORDER BY author.name ASC"#,
        )
        .bind(manga_id)
        .fetch_all(&self.pool as &SqlitePool)
        .await?;

        Ok(rows
            .into_par_iter()
            .map(|row| Author {
                id: row.get(0),
                name: row.get(1),
                image_url: row.get(2),
            })
            .collect())
    }

    async fn increment_manga_views(&self, id: i64) -> Result<(), MangaRepositoryError> {
        sqlx::query(r#"UPDATE manga SET views = views + 1 WHERE id = ?"#)
            .bind(id)
            .execute(&self.pool as &SqlitePool)
            .await?;

        Ok(())
    }
}
