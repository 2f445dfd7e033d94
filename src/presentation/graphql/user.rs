use async_graphql::{Context, Object, Result};
use chrono::NaiveDateTime;
use jsonwebtoken::{EncodingKey, Header};

use crate::{
    domain::{entities, services::profile::ProfileService},
    infrastructure::{
        auth::{self, Claims},
        config::GLOBAL_CONFIG,
        domain::repositories::profile::ProfileRepositoryImpl,
    },
};

#[derive(Debug, Clone)]
pub struct Profile {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub avatar_url: Option<String>,
    pub created_at: NaiveDateTime,
}

impl From<entities::profile::Profile> for Profile {
    fn from(val: entities::profile::Profile) -> Self {
        Self {
            id: val.id,
            username: val.username,
            email: val.email,
            avatar_url: val.avatar_url,
            created_at: val.created_at,
        }
    }
}

#[Object]
impl Profile {
    async fn id(&self) -> i64 {
        self.id
    }

    async fn username(&self) -> String {
        self.username.clone()
    }

    async fn email(&self) -> String {
        self.email.clone()
    }

    async fn avatar_url(&self) -> Option<String> {
        self.avatar_url.clone()
    }

    async fn created_at(&self) -> NaiveDateTime {
        self.created_at
    }
}

#[derive(Default)]
pub struct UserRoot;

#[Object]
impl UserRoot {
    async fn login(
        &self,
        ctx: &Context<'_>,
        email: String,
        #[graphql(secret)] password: String,
    ) -> Result<String> {
        let svc = ctx.data::<ProfileService<ProfileRepositoryImpl>>()?;

        let profile = svc.login(&email, &password).await?;

        let secret = GLOBAL_CONFIG
            .get()
            .map(|cfg| cfg.secret.clone())
            .ok_or("no secret set")?;
        let claims = Claims {
            sub: profile.id,
            username: profile.username,
            exp: (chrono::Utc::now().timestamp() + 2678400) as usize,
        };
        let token = jsonwebtoken::encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .map_err(|e| format!("error encode token: {e}"))?;

        Ok(token)
    }

    async fn me(&self, ctx: &Context<'_>) -> Result<Profile> {
        let claims = ctx
            .data::<Claims>()
            .map_err(|_| "You must be logged in to view your profile")?;
        let svc = ctx.data::<ProfileService<ProfileRepositoryImpl>>()?;

        let profile = svc.fetch_profile(claims.sub).await?;

        Ok(profile.into())
    }
}

#[derive(Default)]
pub struct UserMutationRoot;

#[Object]
impl UserMutationRoot {
    async fn register(
        &self,
        ctx: &Context<'_>,
        username: String,
        email: String,
        #[graphql(secret)] password: String,
    ) -> Result<i64> {
        let svc = ctx.data::<ProfileService<ProfileRepositoryImpl>>()?;

        let id = svc.register(&username, &email, &password).await?;

        Ok(id)
    }

    async fn update_profile(
        &self,
        ctx: &Context<'_>,
        username: String,
        avatar_url: Option<String>,
    ) -> Result<Profile> {
        let claims = ctx
            .data::<Claims>()
            .map_err(|_| "You must be logged in to update your profile")?;
        let svc = ctx.data::<ProfileService<ProfileRepositoryImpl>>()?;

        svc.update_profile(claims.sub, &username, avatar_url.as_deref())
            .await?;

        Ok(svc.fetch_profile(claims.sub).await?.into())
    }

    async fn change_password(
        &self,
        ctx: &Context<'_>,
        #[graphql(secret)] old_password: String,
        #[graphql(secret)] new_password: String,
    ) -> Result<u64> {
        let claims = ctx
            .data::<Claims>()
            .map_err(|_| "You must be logged in to change your password")?;
        let svc = ctx.data::<ProfileService<ProfileRepositoryImpl>>()?;

        Ok(svc
            .change_password(claims.sub, &old_password, &new_password)
            .await?)
    }

    /// Always comes back true so the response does not reveal whether an
    /// address is registered. The reset link lands in the server log until a
    /// mailer is wired up.
    async fn request_password_reset(&self, ctx: &Context<'_>, email: String) -> Result<bool> {
        let svc = ctx.data::<ProfileService<ProfileRepositoryImpl>>()?;
        let config = GLOBAL_CONFIG.get().ok_or("no config set")?;

        match svc.fetch_profile_by_email(&email).await {
            Ok(profile) => match auth::create_reset_token(profile.id, &config.secret) {
                Ok(token) => {
                    info!(
                        "password reset link for {}: {}/reset-password?token={token}",
                        profile.username, config.base_url
                    );
                }
                Err(e) => {
                    error!("failed to create reset token: {e}");
                }
            },
            Err(_) => {
                info!("password reset requested for unknown address");
            }
        }

        Ok(true)
    }

    async fn reset_password(
        &self,
        ctx: &Context<'_>,
        token: String,
        #[graphql(secret)] new_password: String,
    ) -> Result<u64> {
        let svc = ctx.data::<ProfileService<ProfileRepositoryImpl>>()?;
        let config = GLOBAL_CONFIG.get().ok_or("no config set")?;

        let profile_id = auth::verify_reset_token(&token, &config.secret)
            .map_err(|_| "reset link is invalid or has expired")?;

        Ok(svc.reset_password(profile_id, &new_password).await?)
    }
}
