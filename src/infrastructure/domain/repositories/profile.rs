use async_trait::async_trait;
use sqlx::{Row, SqlitePool};

use crate::{
    domain::{
        entities::profile::Profile,
        repositories::profile::{ProfileRepository, ProfileRepositoryError},
    },
    infrastructure::database::Pool,
};

#[derive(Debug, Clone)]
pub struct ProfileRepositoryImpl {
    pool: Pool,
}

impl ProfileRepositoryImpl {
    pub fn new<P: Into<Pool>>(pool: P) -> Self {
        Self { pool: pool.into() }
    }
}

#[async_trait]
impl ProfileRepository for ProfileRepositoryImpl {
    async fn insert_profile(&self, profile: Profile) -> Result<i64, ProfileRepositoryError> {
        let result =
            sqlx::query(r#"INSERT INTO profiles (username, email, password) VALUES (?, ?, ?)"#)
                .bind(&profile.username)
                .bind(&profile.email)
                .bind(&profile.password)
                .execute(&self.pool as &SqlitePool)
                .await?;

        Ok(result.last_insert_rowid())
    }

    async fn get_profile_by_id(&self, id: i64) -> Result<Profile, ProfileRepositoryError> {
        let row = sqlx::query(r#"SELECT profiles.* FROM profiles WHERE profiles.id = ?"#)
            .bind(id)
            .fetch_optional(&self.pool as &SqlitePool)
            .await?
            .ok_or(ProfileRepositoryError::NotFound)?;

        Ok(Profile {
            id: row.get(0),
            username: row.get(1),
            email: row.get(2),
            password: row.get(3),
            avatar_url: row.get(4),
            created_at: row.get(5),
            updated_at: row.get(6),
        })
    }

    async fn get_profile_by_email(
        &self,
        email: &str,
    ) -> Result<Option<Profile>, ProfileRepositoryError> {
        let row = sqlx::query(r#"SELECT profiles.* FROM profiles WHERE profiles.email = ?"#)
            .bind(email)
            .fetch_optional(&self.pool as &SqlitePool)
            .await?;

        Ok(row.map(|row| Profile {
            id: row.get(0),
            username: row.get(1),
            email: row.get(2),
            password: row.get(3),
            avatar_url: row.get(4),
            created_at: row.get(5),
            updated_at: row.get(6),
        }))
    }

    async fn get_profile_by_username(
        &self,
        username: &str,
    ) -> Result<Option<Profile>, ProfileRepositoryError> {
        let row = sqlx::query(r#"SELECT profiles.* FROM profiles WHERE profiles.username = ?"#)
            .bind(username)
            .fetch_optional(&self.pool as &SqlitePool)
            .await?;

        Ok(row.map(|row| Profile {
            id: row.get(0),
            username: row.get(1),
            email: row.get(2),
            password: row.get(3),
            avatar_url: row.get(4),
            created_at: row.get(5),
            updated_at: row.get(6),
        }))
    }

    async fn update_password(
        &self,
        id: i64,
        password: String,
    ) -> Result<u64, ProfileRepositoryError> {
        let result = sqlx::query(
            r#"UPDATE profiles
            SET password = ?, updated_at = CURRENT_TIMESTAMP
            WHERE id = ?"#,
        )
        .bind(&password)
        .bind(id)
        .execute(&self.pool as &SqlitePool)
        .await?;

        Ok(result.rows_affected())
    }

    async fn update_profile(
        &self,
        id: i64,
        username: &str,
        avatar_url: Option<&str>,
    ) -> Result<u64, ProfileRepositoryError> {
        let result = sqlx::query(
            r#"UPDATE profiles
            SET username = ?, avatar_url = ?, updated_at = CURRENT_TIMESTAMP
            WHERE id = ?"#,
        )
        .bind(username)
        .bind(avatar_url)
        .bind(id)
        .execute(&self.pool as &SqlitePool)
        .await?;

        Ok(result.rows_affected())
    }
}
