use async_trait::async_trait;
use sqlx::{Row, SqlitePool};
use tokio_stream::StreamExt;

use crate::{
    domain::{
        entities::chapter::{Chapter, ChapterImage},
        repositories::chapter::{ChapterRepository, ChapterRepositoryError},
    },
    infrastructure::database::Pool,
};

#[derive(Debug, Clone)]
pub struct ChapterRepositoryImpl {
    pool: Pool,
}

impl ChapterRepositoryImpl {
    pub fn new<P: Into<Pool>>(pool: P) -> Self {
        Self { pool: pool.into() }
    }
}

#[async_trait]
impl ChapterRepository for ChapterRepositoryImpl {
    async fn get_chapter_by_id(&self, id: i64) -> Result<Option<Chapter>, ChapterRepositoryError> {
        let row = sqlx::query(
            r#"SELECT chapter.*,
            (SELECT c.id FROM chapter c
                WHERE c.manga_id = chapter.manga_id AND c.number > chapter.number
                ORDER BY c.number ASC LIMIT 1) next,
            (SELECT c.id FROM chapter c
                WHERE c.manga_id = chapter.manga_id AND c.number < chapter.number
                ORDER BY c.number DESC LIMIT 1) prev
            FROM chapter WHERE chapter.id = ?"#,
        )
        .bind(id)
        .fetch_optional(&self.pool as &SqlitePool)
        .await?;

        Ok(row.map(|row| Chapter {
            id: row.get(0),
            manga_id: row.get(1),
            number: row.get(2),
            title: row.get(3),
            release_date: row.get(4),
            created_at: row.get(5),
            next: row.get(6),
            prev: row.get(7),
        }))
    }

    async fn get_chapter_by_manga_id_number(
        &self,
        manga_id: i64,
        number: f64,
    ) -> Result<Option<Chapter>, ChapterRepositoryError> {
        let row = sqlx::query(
            r#"SELECT chapter.*,
            (SELECT c.id FROM chapter c
                WHERE c.manga_id = chapter.manga_id AND c.number > chapter.number
                ORDER BY c.number ASC LIMIT 1) next,
            (SELECT c.id FROM chapter c
                WHERE c.manga_id = chapter.manga_id AND c.number < chapter.number
                ORDER BY c.number DESC LIMIT 1) prev
            FROM chapter WHERE chapter.manga_id = ? AND chapter.number = ?"#,
        )
        .bind(manga_id)
        .bind(number)
        .fetch_optional(&self.pool as &SqlitePool)
        .await?;

        Ok(row.map(|row| Chapter {
            id: row.get(0),
            manga_id: row.get(1),
            number: row.get(2),
            title: row.get(3),
            release_date: row.get(4),
            created_at: row.get(5),
            next: row.get(6),
            prev: row.get(7),
        }))
    }

    async fn get_chapters_by_manga_id(
        &self,
        manga_id: i64,
        asc: bool,
    ) -> Result<Vec<Chapter>, ChapterRepositoryError> {
        let order = if asc { "ASC" } else { "DESC" };
        let sql = format!(
            r#"SELECT chapter.*,
            (SELECT c.id FROM chapter c
                WHERE c.manga_id = chapter.manga_id AND c.number > chapter.number
                ORDER BY c.number ASC LIMIT 1) next,
            (SELECT c.id FROM chapter c
                WHERE c.manga_id = chapter.manga_id AND c.number < chapter.number
                ORDER BY c.number DESC LIMIT 1) prev
            FROM chapter WHERE chapter.manga_id = ?
            ORDER BY chapter.number {order}"#
        );

        let mut stream = sqlx::query(&sql)
            .bind(manga_id)
            .fetch(&self.pool as &SqlitePool);

        let mut chapters = vec![];
        while let Some(row) = stream.try_next().await? {
            chapters.push(Chapter {
                id: row.get(0),
                manga_id: row.get(1),
                number: row.get(2),
                title: row.get(3),
                release_date: row.get(4),
                created_at: row.get(5),
                next: row.get(6),
                prev: row.get(7),
            });
        }

        Ok(chapters)
    }

    async fn get_images_by_chapter_id(
        &self,
        chapter_id: i64,
    ) -> Result<Vec<ChapterImage>, ChapterRepositoryError> {
        let mut stream = sqlx::query(
            r#"SELECT chapter_image.* FROM chapter_image
            WHERE chapter_image.chapter_id = ?
            ORDER BY chapter_image.page_number ASC"#,
        )
        .bind(chapter_id)
        .fetch(&self.pool as &SqlitePool);

        let mut images = vec![];
        while let Some(row) = stream.try_next().await? {
            images.push(ChapterImage {
                id: row.get(0),
                chapter_id: row.get(1),
                image_url: row.get(2),
                page_number: row.get(3),
            });
        }

        Ok(images)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::infrastructure::database::establish_test_connection;

    async fn seed_manga(pool: &Pool, title: &str) -> i64 {
        sqlx::query(r#"INSERT INTO manga (title) VALUES (?)"#)
            .bind(title)
            .execute(pool as &SqlitePool)
            .await
            .unwrap()
            .last_insert_rowid()
    }

    async fn seed_chapter(pool: &Pool, manga_id: i64, number: f64) -> i64 {
        sqlx::query(r#"INSERT INTO chapter (manga_id, number) VALUES (?, ?)"#)
            .bind(manga_id)
            .bind(number)
            .execute(pool as &SqlitePool)
            .await
            .unwrap()
            .last_insert_rowid()
    }

    #[tokio::test]
    async fn test_prev_next_adjacency() {
        let pool = establish_test_connection().await;
        let repo = ChapterRepositoryImpl::new(pool.clone());

        let manga_id = seed_manga(&pool, "Berserk").await;
        let first = seed_chapter(&pool, manga_id, 1.0).await;
        let second = seed_chapter(&pool, manga_id, 2.0).await;
        let third = seed_chapter(&pool, manga_id, 3.0).await;

        let chapter = repo.get_chapter_by_id(second).await.unwrap().unwrap();
        assert_eq!(chapter.prev, Some(first));
        assert_eq!(chapter.next, Some(third));

        let chapter = repo.get_chapter_by_id(first).await.unwrap().unwrap();
        assert_eq!(chapter.prev, None);
        assert_eq!(chapter.next, Some(second));

        let chapter = repo.get_chapter_by_id(third).await.unwrap().unwrap();
        assert_eq!(chapter.prev, Some(second));
        assert_eq!(chapter.next, None);
    }

    #[tokio::test]
    async fn test_fractional_numbers_order_between() {
        let pool = establish_test_connection().await;
        let repo = ChapterRepositoryImpl::new(pool.clone());

        let manga_id = seed_manga(&pool, "Berserk").await;
        let first = seed_chapter(&pool, manga_id, 1.0).await;
        let half = seed_chapter(&pool, manga_id, 1.5).await;
        seed_chapter(&pool, manga_id, 2.0).await;

        let chapter = repo.get_chapter_by_id(first).await.unwrap().unwrap();
        assert_eq!(chapter.next, Some(half));

        let chapter = repo
            .get_chapter_by_manga_id_number(manga_id, 1.5)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(chapter.id, half);
        assert_eq!(chapter.prev, Some(first));
    }

    #[tokio::test]
    async fn test_chapters_ignore_other_manga() {
        let pool = establish_test_connection().await;
        let repo = ChapterRepositoryImpl::new(pool.clone());

        let berserk = seed_manga(&pool, "Berserk").await;
        let monster = seed_manga(&pool, "Monster").await;
        let only = seed_chapter(&pool, berserk, 1.0).await;
        seed_chapter(&pool, monster, 2.0).await;

        let chapter = repo.get_chapter_by_id(only).await.unwrap().unwrap();
        assert_eq!(chapter.prev, None);
        assert_eq!(chapter.next, None);

        let listed = repo.get_chapters_by_manga_id(berserk, true).await.unwrap();
        assert_eq!(listed.len(), 1);
    }

    #[tokio::test]
    async fn test_chapter_list_order() {
        let pool = establish_test_connection().await;
        let repo = ChapterRepositoryImpl::new(pool.clone());

        let manga_id = seed_manga(&pool, "Berserk").await;
        seed_chapter(&pool, manga_id, 2.0).await;
        seed_chapter(&pool, manga_id, 1.0).await;
        seed_chapter(&pool, manga_id, 3.0).await;

        let asc = repo.get_chapters_by_manga_id(manga_id, true).await.unwrap();
        let numbers: Vec<_> = asc.iter().map(|c| c.number).collect();
        assert_eq!(numbers, vec![1.0, 2.0, 3.0]);

        let desc = repo.get_chapters_by_manga_id(manga_id, false).await.unwrap();
        let numbers: Vec<_> = desc.iter().map(|c| c.number).collect();
        assert_eq!(numbers, vec![3.0, 2.0, 1.0]);
    }

    #[tokio::test]
    async fn test_images_in_reading_order() {
        let pool = establish_test_connection().await;
        let repo = ChapterRepositoryImpl::new(pool.clone());

        let manga_id = seed_manga(&pool, "Berserk").await;
        let chapter_id = seed_chapter(&pool, manga_id, 1.0).await;

        for page in [2_i64, 1, 3] {
            sqlx::query(
                r#"INSERT INTO chapter_image (chapter_id, image_url, page_number) VALUES (?, ?, ?)"#,
            )
            .bind(chapter_id)
            .bind(format!("https://img.example.com/{page}.jpg"))
            .bind(page)
            .execute(&pool as &SqlitePool)
            .await
            .unwrap();
        }

        let images = repo.get_images_by_chapter_id(chapter_id).await.unwrap();
        let pages: Vec<_> = images.iter().map(|i| i.page_number).collect();
        assert_eq!(pages, vec![1, 2, 3]);
        assert_eq!(images[0].image_url, "https://img.example.com/1.jpg");
    }
}
