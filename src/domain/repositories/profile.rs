use async_trait::async_trait;
use thiserror::Error;

use crate::domain::entities::profile::Profile;

#[derive(Debug, Error)]
pub enum ProfileRepositoryError {
    #[error("query return nothing")]
    NotFound,
    #[error("database return error: {0}")]
    DbError(#[from] sqlx::Error),
    #[error("other error: {0}")]
    Other(#[from] anyhow::Error),
}

#[async_trait]
pub trait ProfileRepository: Send + Sync {
    async fn insert_profile(&self, profile: Profile) -> Result<i64, ProfileRepositoryError>;

    async fn get_profile_by_id(&self, id: i64) -> Result<Profile, ProfileRepositoryError>;

    async fn get_profile_by_email(
        &self,
        email: &str,
    ) -> Result<Option<Profile>, ProfileRepositoryError>;

    async fn get_profile_by_username(
        &self,
        username: &str,
    ) -> Result<Option<Profile>, ProfileRepositoryError>;

    async fn update_password(
        &self,
        id: i64,
        password: String,
    ) -> Result<u64, ProfileRepositoryError>;

    async fn update_profile(
        &self,
        id: i64,
        username: &str,
        avatar_url: Option<&str>,
    ) -> Result<u64, ProfileRepositoryError>;
}
