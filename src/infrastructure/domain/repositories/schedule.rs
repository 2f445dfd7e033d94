use async_trait::async_trait;
use rayon::prelude::*;
use sqlx::{Row, SqlitePool};

use crate::{
    domain::{
        entities::{anime::Anime, schedule::ScheduledAnime},
        repositories::schedule::{ScheduleRepository, ScheduleRepositoryError},
    },
    infrastructure::database::Pool,
};

#[derive(Debug, Clone)]
pub struct ScheduleRepositoryImpl {
    pool: Pool,
}

impl ScheduleRepositoryImpl {
    pub fn new<P: Into<Pool>>(pool: P) -> Self {
        Self { pool: pool.into() }
    }
}

#[async_trait]
impl ScheduleRepository for ScheduleRepositoryImpl {
    async fn get_weekly_schedule(&self) -> Result<Vec<ScheduledAnime>, ScheduleRepositoryError> {
        let rows = sqlx::query(
            r#"SELECT anime.*, anime_schedules.day, anime_schedules.time
            FROM anime_schedules
            JOIN anime ON anime.id = anime_schedules.anime_id
            ORDER BY anime_schedules.time ASC, anime_schedules.id ASC"#,
        )
        .fetch_all(&self.pool as &SqlitePool)
        .await?;

        Ok(rows
            .into_par_iter()
            .map(|row| ScheduledAnime {
                anime: Anime {
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
                },
                day: row.get(12),
                time: row.get(13),
            })
            .collect())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::infrastructure::database::establish_test_connection;

    async fn seed_anime(pool: &Pool, title: &str) -> i64 {
        sqlx::query(r#"INSERT INTO anime (title) VALUES (?)"#)
            .bind(title)
            .execute(pool as &SqlitePool)
            .await
            .unwrap()
            .last_insert_rowid()
    }

    async fn seed_schedule(pool: &Pool, anime_id: i64, day: &str, time: Option<&str>) {
        sqlx::query(r#"INSERT INTO anime_schedules (anime_id, day, time) VALUES (?, ?, ?)"#)
            .bind(anime_id)
            .bind(day)
            .bind(time)
            .execute(pool as &SqlitePool)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_schedule_ordered_by_air_time() {
        let pool = establish_test_connection().await;
        let repo = ScheduleRepositoryImpl::new(pool.clone());

        let bebop = seed_anime(&pool, "Cowboy Bebop").await;
        let frieren = seed_anime(&pool, "Frieren").await;
        seed_schedule(&pool, bebop, "Monday", Some("23:00")).await;
        seed_schedule(&pool, frieren, "Monday", Some("09:30")).await;
        seed_schedule(&pool, frieren, "Friday", Some("21:00")).await;

        let schedule = repo.get_weekly_schedule().await.unwrap();
        assert_eq!(schedule.len(), 3);
        assert_eq!(schedule[0].anime.title, "Frieren");
        assert_eq!(schedule[0].time.as_deref(), Some("09:30"));
        assert_eq!(schedule[2].day, "Monday");
        assert_eq!(schedule[2].time.as_deref(), Some("23:00"));
    }
}
