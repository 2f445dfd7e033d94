use async_graphql::{dataloader::DataLoader, Context, Object, Result};
use chrono::NaiveDateTime;

use crate::{
    domain::{entities, services::anime::AnimeService},
    infrastructure::{auth::Claims, domain::repositories::anime::AnimeRepositoryImpl},
    presentation::graphql::{
        common::Results,
        loader::{DatabaseLoader, UserAnimeFavoriteId},
    },
};

#[derive(Debug, Clone)]
pub struct Anime {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub kind: Option<String>,
    pub status: Option<String>,
    pub rating: Option<f64>,
    pub episodes: Option<i64>,
    pub views: i64,
    pub release_date: Option<NaiveDateTime>,
    pub last_update: NaiveDateTime,
}

impl From<entities::anime::Anime> for Anime {
    fn from(val: entities::anime::Anime) -> Self {
        Self {
            id: val.id,
            title: val.title,
            description: val.description,
            image_url: val.image_url,
            kind: val.kind,
            status: val.status,
            rating: val.rating,
            episodes: val.episodes,
            views: val.views,
            release_date: val.release_date,
            last_update: val.last_update,
        }
    }
}

#[Object]
impl Anime {
    async fn id(&self) -> i64 {
        self.id
    }

    async fn title(&self) -> String {
        self.title.clone()
    }

    async fn description(&self) -> Option<String> {
        self.description.clone()
    }

    async fn image_url(&self) -> Option<String> {
        self.image_url.clone()
    }

    #[graphql(name = "type")]
    async fn kind(&self) -> Option<String> {
        self.kind.clone()
    }

    async fn status(&self) -> Option<String> {
        self.status.clone()
    }

    async fn rating(&self) -> Option<f64> {
        self.rating
    }

    async fn episodes(&self) -> Option<i64> {
        self.episodes
    }

    async fn views(&self) -> i64 {
        self.views
    }

    async fn release_date(&self) -> Option<NaiveDateTime> {
        self.release_date
    }

    async fn last_update(&self) -> NaiveDateTime {
        self.last_update
    }

    async fn similar(
        &self,
        ctx: &Context<'_>,
        #[graphql(default = 10)] limit: i64,
    ) -> Result<Vec<Anime>> {
        let svc = ctx.data::<AnimeService<AnimeRepositoryImpl>>()?;

        Ok(svc
            .fetch_similar_anime(self.id, limit)
            .await
            .into_iter()
            .map(Into::into)
            .collect())
    }

    async fn is_favorite(&self, ctx: &Context<'_>) -> Result<bool> {
        let claims = ctx
            .data::<Claims>()
            .map_err(|_| "You must be logged in to see favorite state")?;
        let loader = ctx.data::<DataLoader<DatabaseLoader>>()?;

        Ok(loader
            .load_one(UserAnimeFavoriteId(claims.sub, self.id))
            .await?
            .unwrap_or(false))
    }
}

#[derive(Default)]
pub struct AnimeRoot;

#[Object]
impl AnimeRoot {
    async fn anime(&self, ctx: &Context<'_>, id: i64) -> Result<Anime> {
        let svc = ctx.data::<AnimeService<AnimeRepositoryImpl>>()?;

        svc.fetch_anime_detail(id)
            .await
            .map(Into::into)
            .ok_or_else(|| "anime not found".into())
    }

    async fn popular_anime(
        &self,
        ctx: &Context<'_>,
        #[graphql(default = 10)] limit: i64,
    ) -> Result<Vec<Anime>> {
        let svc = ctx.data::<AnimeService<AnimeRepositoryImpl>>()?;

        Ok(svc
            .fetch_popular_anime(limit)
            .await
            .into_iter()
            .map(Into::into)
            .collect())
    }

    async fn top_rated_anime(
        &self,
        ctx: &Context<'_>,
        #[graphql(default = 10)] limit: i64,
    ) -> Result<Vec<Anime>> {
        let svc = ctx.data::<AnimeService<AnimeRepositoryImpl>>()?;

        Ok(svc
            .fetch_top_rated_anime(limit)
            .await
            .into_iter()
            .map(Into::into)
            .collect())
    }

    async fn airing_anime(
        &self,
        ctx: &Context<'_>,
        #[graphql(default = 10)] limit: i64,
    ) -> Result<Vec<Anime>> {
        let svc = ctx.data::<AnimeService<AnimeRepositoryImpl>>()?;

        Ok(svc
            .fetch_airing_anime(limit)
            .await
            .into_iter()
            .map(Into::into)
            .collect())
    }

    async fn recently_added_anime(
        &self,
        ctx: &Context<'_>,
        #[graphql(default = 10)] limit: i64,
    ) -> Result<Vec<Anime>> {
        let svc = ctx.data::<AnimeService<AnimeRepositoryImpl>>()?;

        Ok(svc
            .fetch_recently_added_anime(limit)
            .await
            .into_iter()
            .map(Into::into)
            .collect())
    }

    async fn search_anime(
        &self,
        ctx: &Context<'_>,
        query: String,
        #[graphql(default = 1)] page: i64,
    ) -> Result<Results<Anime>> {
        let svc = ctx.data::<AnimeService<AnimeRepositoryImpl>>()?;

        Ok(Results::from_paged(svc.search_anime(&query, page).await))
    }
}
