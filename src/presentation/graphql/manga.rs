use async_graphql::{dataloader::DataLoader, Context, Object, Result, SimpleObject};
use chrono::NaiveDateTime;

use crate::{
    domain::{
        entities,
        entities::manga::MangaSort,
        services::{chapter::ChapterService, manga::MangaService},
    },
    infrastructure::{
        auth::Claims,
        domain::repositories::{
            chapter::ChapterRepositoryImpl, manga::MangaRepositoryImpl,
        },
    },
    presentation::graphql::{
        chapter::Chapter,
        common::Results,
        loader::{DatabaseLoader, UserMangaFavoriteId},
    },
};

#[derive(Debug, Clone, SimpleObject)]
pub struct Genre {
    pub id: i64,
    pub name: String,
}

impl From<entities::manga::Genre> for Genre {
    fn from(val: entities::manga::Genre) -> Self {
        Self {
            id: val.id,
            name: val.name,
        }
    }
}

#[derive(Debug, Clone, SimpleObject)]
pub struct Author {
    pub id: i64,
    pub name: String,
    pub image_url: Option<String>,
}

impl From<entities::manga::Author> for Author {
    fn from(val: entities::manga::Author) -> Self {
        Self {
            id: val.id,
            name: val.name,
            image_url: val.image_url,
        }
    }
}

#[derive(Debug, Clone, SimpleObject)]
pub struct Character {
    pub id: i64,
    pub name: String,
    pub image_url: Option<String>,
    pub description: Option<String>,
}

impl From<entities::manga::Character> for Character {
    fn from(val: entities::manga::Character) -> Self {
        Self {
            id: val.id,
            name: val.name,
            image_url: val.image_url,
            description: val.description,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Manga {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub kind: Option<String>,
    pub status: Option<String>,
    pub rating: Option<f64>,
    pub views: i64,
    pub release_date: Option<NaiveDateTime>,
    pub last_update: NaiveDateTime,
}

impl From<entities::manga::Manga> for Manga {
    fn from(val: entities::manga::Manga) -> Self {
        Self {
            id: val.id,
            title: val.title,
            description: val.description,
            image_url: val.image_url,
            kind: val.kind,
            status: val.status,
            rating: val.rating,
            views: val.views,
            release_date: val.release_date,
            last_update: val.last_update,
        }
    }
}

#[Object]
impl Manga {
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

    async fn views(&self) -> i64 {
        self.views
    }

    async fn release_date(&self) -> Option<NaiveDateTime> {
        self.release_date
    }

    async fn last_update(&self) -> NaiveDateTime {
        self.last_update
    }

    async fn genres(&self, ctx: &Context<'_>) -> Result<Vec<Genre>> {
        let svc = ctx.data::<MangaService<MangaRepositoryImpl>>()?;

        Ok(svc
            .fetch_genres(self.id)
            .await
            .into_iter()
            .map(Into::into)
            .collect())
    }

    async fn characters(
        &self,
        ctx: &Context<'_>,
        #[graphql(default = 6)] limit: i64,
    ) -> Result<Vec<Character>> {
        let svc = ctx.data::<MangaService<MangaRepositoryImpl>>()?;

        Ok(svc
            .fetch_characters(self.id, limit)
            .await
            .into_iter()
            .map(Into::into)
            .collect())
    }

    async fn authors(&self, ctx: &Context<'_>) -> Result<Vec<Author>> {
        let svc = ctx.data::<MangaService<MangaRepositoryImpl>>()?;

        Ok(svc
            .fetch_authors(self.id)
            .await
            .into_iter()
            .map(Into::into)
            .collect())
    }

    async fn chapters(
        &self,
        ctx: &Context<'_>,
        #[graphql(default = true)] asc: bool,
    ) -> Result<Vec<Chapter>> {
        let svc = ctx.data::<ChapterService<ChapterRepositoryImpl>>()?;

        Ok(svc
            .fetch_chapters_by_manga_id(self.id, asc)
            .await
            .into_iter()
            .map(Into::into)
            .collect())
    }

    async fn similar(
        &self,
        ctx: &Context<'_>,
        #[graphql(default = 10)] limit: i64,
    ) -> Result<Vec<Manga>> {
        let svc = ctx.data::<MangaService<MangaRepositoryImpl>>()?;

        Ok(svc
            .fetch_similar_manga(self.id, limit)
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
            .load_one(UserMangaFavoriteId(claims.sub, self.id))
            .await?
            .unwrap_or(false))
    }
}

#[derive(Default)]
pub struct MangaRoot;

#[Object]
impl MangaRoot {
    async fn manga(&self, ctx: &Context<'_>, id: i64) -> Result<Manga> {
        let svc = ctx.data::<MangaService<MangaRepositoryImpl>>()?;

        svc.fetch_manga_detail(id)
            .await
            .map(Into::into)
            .ok_or_else(|| "manga not found".into())
    }

    async fn popular_manga(
        &self,
        ctx: &Context<'_>,
        #[graphql(default = 10)] limit: i64,
    ) -> Result<Vec<Manga>> {
        let svc = ctx.data::<MangaService<MangaRepositoryImpl>>()?;

        Ok(svc
            .fetch_popular_manga(limit)
            .await
            .into_iter()
            .map(Into::into)
            .collect())
    }

    async fn recently_updated_manga(
        &self,
        ctx: &Context<'_>,
        #[graphql(default = 10)] limit: i64,
    ) -> Result<Vec<Manga>> {
        let svc = ctx.data::<MangaService<MangaRepositoryImpl>>()?;

        Ok(svc
            .fetch_recently_updated_manga(limit)
            .await
            .into_iter()
            .map(Into::into)
            .collect())
    }

    async fn ongoing_manga(
        &self,
        ctx: &Context<'_>,
        #[graphql(default = 10)] limit: i64,
    ) -> Result<Vec<Manga>> {
        let svc = ctx.data::<MangaService<MangaRepositoryImpl>>()?;

        Ok(svc
            .fetch_ongoing_manga(limit)
            .await
            .into_iter()
            .map(Into::into)
            .collect())
    }

    async fn completed_manga(
        &self,
        ctx: &Context<'_>,
        #[graphql(default = 10)] limit: i64,
    ) -> Result<Vec<Manga>> {
        let svc = ctx.data::<MangaService<MangaRepositoryImpl>>()?;

        Ok(svc
            .fetch_completed_manga(limit)
            .await
            .into_iter()
            .map(Into::into)
            .collect())
    }

    async fn browse_manga(
        &self,
        ctx: &Context<'_>,
        status: Option<String>,
        query: Option<String>,
        #[graphql(default)] sort: MangaSort,
        #[graphql(default = 1)] page: i64,
    ) -> Result<Results<Manga>> {
        let svc = ctx.data::<MangaService<MangaRepositoryImpl>>()?;

        Ok(Results::from_paged(
            svc.browse_manga(status, query, sort, page).await,
        ))
    }
}
