use rand::RngCore;
use thiserror::Error;

use crate::domain::{
    entities::profile::Profile,
    repositories::profile::{ProfileRepository, ProfileRepositoryError},
};

#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("profile not found")]
    ProfileNotFound,
    #[error("Invalid login credentials")]
    InvalidCredentials,
    #[error("wrong password")]
    WrongPassword,
    #[error("password length should be at least 8 characters")]
    InsufficientPasswordLength,
    #[error("Username must be at least 3 characters")]
    UsernameTooShort,
    #[error("Unable to validate email address: invalid format")]
    InvalidEmail,
    #[error("Username is already taken")]
    UsernameTaken,
    #[error("User already registered")]
    EmailTaken,
    #[error("error hash password: {0}")]
    Argon2Error(#[from] argon2::Error),
    #[error("repository error: {0}")]
    RepositoryError(#[from] ProfileRepositoryError),
}

#[derive(Clone)]
pub struct ProfileService<R>
where
    R: ProfileRepository,
{
    repo: R,
}

impl<R> ProfileService<R>
where
    R: ProfileRepository,
{
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Create an account. The password is stored as an argon2 hash, never
    /// in the clear.
    pub async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<i64, ProfileError> {
        let username = username.trim();
        let email = email.trim();

        if username.chars().count() < 3 {
            return Err(ProfileError::UsernameTooShort);
        }

        if !email.contains('@') {
            return Err(ProfileError::InvalidEmail);
        }

        if password.len() < 8 {
            return Err(ProfileError::InsufficientPasswordLength);
        }

        if self.repo.get_profile_by_username(username).await?.is_some() {
            return Err(ProfileError::UsernameTaken);
        }

        if self.repo.get_profile_by_email(email).await?.is_some() {
            return Err(ProfileError::EmailTaken);
        }

        let mut salt: [u8; 32] = [0; 32];
        rand::rng().fill_bytes(&mut salt);

        let hash = argon2::hash_encoded(password.as_bytes(), &salt, &argon2::Config::default())?;

        let profile = Profile {
            username: username.to_string(),
            email: email.to_string(),
            password: hash,
            ..Default::default()
        };

        let id = self.repo.insert_profile(profile).await?;

        Ok(id)
    }

    /// Check an email and password pair. Unknown addresses and wrong
    /// passwords come back as the same error so the response does not
    /// reveal which accounts exist.
    pub async fn login(&self, email: &str, password: &str) -> Result<Profile, ProfileError> {
        let profile = self
            .repo
            .get_profile_by_email(email.trim())
            .await?
            .ok_or(ProfileError::InvalidCredentials)?;

        if !argon2::verify_encoded(&profile.password, password.as_bytes())? {
            return Err(ProfileError::InvalidCredentials);
        }

        Ok(profile)
    }

    pub async fn fetch_profile(&self, id: i64) -> Result<Profile, ProfileError> {
        let profile = self.repo.get_profile_by_id(id).await.map_err(|e| match e {
            ProfileRepositoryError::NotFound => ProfileError::ProfileNotFound,
            e => ProfileError::RepositoryError(e),
        })?;

        Ok(profile)
    }

    pub async fn fetch_profile_by_email(&self, email: &str) -> Result<Profile, ProfileError> {
        let profile = self
            .repo
            .get_profile_by_email(email.trim())
            .await?
            .ok_or(ProfileError::ProfileNotFound)?;

        Ok(profile)
    }

    /// Change display data of an account. The username stays unique across
    /// all profiles.
    pub async fn update_profile(
        &self,
        id: i64,
        username: &str,
        avatar_url: Option<&str>,
    ) -> Result<u64, ProfileError> {
        let username = username.trim();

        if username.chars().count() < 3 {
            return Err(ProfileError::UsernameTooShort);
        }

        if let Some(other) = self.repo.get_profile_by_username(username).await? {
            if other.id != id {
                return Err(ProfileError::UsernameTaken);
            }
        }

        let affected = self.repo.update_profile(id, username, avatar_url).await?;
        if affected == 0 {
            return Err(ProfileError::ProfileNotFound);
        }

        Ok(affected)
    }

    /// Replace the password after checking the old one.
    pub async fn change_password(
        &self,
        id: i64,
        old_password: &str,
        new_password: &str,
    ) -> Result<u64, ProfileError> {
        let profile = self.fetch_profile(id).await?;

        if !argon2::verify_encoded(&profile.password, old_password.as_bytes())? {
            return Err(ProfileError::WrongPassword);
        }

        if new_password.len() < 8 {
            return Err(ProfileError::InsufficientPasswordLength);
        }

        let mut salt: [u8; 32] = [0; 32];
        rand::rng().fill_bytes(&mut salt);

        let hash =
            argon2::hash_encoded(new_password.as_bytes(), &salt, &argon2::Config::default())?;

        let affected = self.repo.update_password(profile.id, hash).await?;

        Ok(affected)
    }

    /// Replace the password of an account that proved ownership through a
    /// reset token. No old password involved.
    pub async fn reset_password(&self, id: i64, new_password: &str) -> Result<u64, ProfileError> {
        let profile = self.fetch_profile(id).await?;

        if new_password.len() < 8 {
            return Err(ProfileError::InsufficientPasswordLength);
        }

        let mut salt: [u8; 32] = [0; 32];
        rand::rng().fill_bytes(&mut salt);

        let hash =
            argon2::hash_encoded(new_password.as_bytes(), &salt, &argon2::Config::default())?;

        let affected = self.repo.update_password(profile.id, hash).await?;

        Ok(affected)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use async_trait::async_trait;
    use std::sync::{Arc, Mutex};

    #[derive(Default, Clone)]
    struct FakeProfileRepo {
        rows: Arc<Mutex<Vec<Profile>>>,
    }

    #[async_trait]
    impl ProfileRepository for FakeProfileRepo {
        async fn insert_profile(&self, profile: Profile) -> Result<i64, ProfileRepositoryError> {
            let mut rows = self.rows.lock().unwrap();
            let id = rows.len() as i64 + 1;
            let mut profile = profile;
            profile.id = id;
            rows.push(profile);
            Ok(id)
        }

        async fn get_profile_by_id(&self, id: i64) -> Result<Profile, ProfileRepositoryError> {
            self.rows
                .lock()
                .unwrap()
                .iter()
                .find(|p| p.id == id)
                .cloned()
                .ok_or(ProfileRepositoryError::NotFound)
        }

        async fn get_profile_by_email(
            &self,
            email: &str,
        ) -> Result<Option<Profile>, ProfileRepositoryError> {
            Ok(self
                .rows
                .lock()
                .unwrap()
                .iter()
                .find(|p| p.email == email)
                .cloned())
        }

        async fn get_profile_by_username(
            &self,
            username: &str,
        ) -> Result<Option<Profile>, ProfileRepositoryError> {
            Ok(self
                .rows
                .lock()
                .unwrap()
                .iter()
                .find(|p| p.username == username)
                .cloned())
        }

        async fn update_password(
            &self,
            id: i64,
            password: String,
        ) -> Result<u64, ProfileRepositoryError> {
            let mut rows = self.rows.lock().unwrap();
            match rows.iter_mut().find(|p| p.id == id) {
                Some(row) => {
                    row.password = password;
                    Ok(1)
                }
                None => Ok(0),
            }
        }

        async fn update_profile(
            &self,
            id: i64,
            username: &str,
            avatar_url: Option<&str>,
        ) -> Result<u64, ProfileRepositoryError> {
            let mut rows = self.rows.lock().unwrap();
            match rows.iter_mut().find(|p| p.id == id) {
                Some(row) => {
                    row.username = username.to_string();
                    row.avatar_url = avatar_url.map(str::to_string);
                    Ok(1)
                }
                None => Ok(0),
            }
        }
    }

    #[tokio::test]
    async fn test_register_and_login() {
        let service = ProfileService::new(FakeProfileRepo::default());

        let id = service
            .register("yuki", "yuki@example.com", "super secret")
            .await
            .unwrap();
        assert_eq!(id, 1);

        let profile = service.login("yuki@example.com", "super secret").await.unwrap();
        assert_eq!(profile.username, "yuki");
        assert_ne!(profile.password, "super secret");

        let err = service.login("yuki@example.com", "wrong secret").await.unwrap_err();
        assert!(matches!(err, ProfileError::InvalidCredentials));

        let err = service.login("nobody@example.com", "super secret").await.unwrap_err();
        assert!(matches!(err, ProfileError::InvalidCredentials));
    }

    #[tokio::test]
    async fn test_register_validation() {
        let service = ProfileService::new(FakeProfileRepo::default());

        let err = service
            .register("yu", "yu@example.com", "super secret")
            .await
            .unwrap_err();
        assert!(matches!(err, ProfileError::UsernameTooShort));

        let err = service
            .register("yuki", "not-an-email", "super secret")
            .await
            .unwrap_err();
        assert!(matches!(err, ProfileError::InvalidEmail));

        let err = service
            .register("yuki", "yuki@example.com", "short")
            .await
            .unwrap_err();
        assert!(matches!(err, ProfileError::InsufficientPasswordLength));

        service
            .register("yuki", "yuki@example.com", "super secret")
            .await
            .unwrap();

        let err = service
            .register("yuki", "other@example.com", "super secret")
            .await
            .unwrap_err();
        assert!(matches!(err, ProfileError::UsernameTaken));

        let err = service
            .register("other", "yuki@example.com", "super secret")
            .await
            .unwrap_err();
        assert!(matches!(err, ProfileError::EmailTaken));
    }

    #[tokio::test]
    async fn test_change_password() {
        let service = ProfileService::new(FakeProfileRepo::default());

        let id = service
            .register("yuki", "yuki@example.com", "super secret")
            .await
            .unwrap();

        let err = service
            .change_password(id, "wrong secret", "even more secret")
            .await
            .unwrap_err();
        assert!(matches!(err, ProfileError::WrongPassword));

        service
            .change_password(id, "super secret", "even more secret")
            .await
            .unwrap();

        service.login("yuki@example.com", "even more secret").await.unwrap();

        let err = service
            .login("yuki@example.com", "super secret")
            .await
            .unwrap_err();
        assert!(matches!(err, ProfileError::InvalidCredentials));
    }

    #[tokio::test]
    async fn test_update_profile_keeps_username_unique() {
        let service = ProfileService::new(FakeProfileRepo::default());

        service
            .register("yuki", "yuki@example.com", "super secret")
            .await
            .unwrap();
        let id = service
            .register("haru", "haru@example.com", "super secret")
            .await
            .unwrap();

        let err = service.update_profile(id, "yuki", None).await.unwrap_err();
        assert!(matches!(err, ProfileError::UsernameTaken));

        service
            .update_profile(id, "haru", Some("https://example.com/a.png"))
            .await
            .unwrap();

        let profile = service.fetch_profile(id).await.unwrap();
        assert_eq!(profile.avatar_url.as_deref(), Some("https://example.com/a.png"));
    }

    #[tokio::test]
    async fn test_reset_password_skips_old_password() {
        let service = ProfileService::new(FakeProfileRepo::default());

        let id = service
            .register("yuki", "yuki@example.com", "super secret")
            .await
            .unwrap();

        let err = service.reset_password(id, "short").await.unwrap_err();
        assert!(matches!(err, ProfileError::InsufficientPasswordLength));

        service.reset_password(id, "brand new secret").await.unwrap();

        service.login("yuki@example.com", "brand new secret").await.unwrap();
    }
}
