use async_graphql::{Context, Object, Result, SimpleObject};
use chrono::NaiveDateTime;

use crate::{
    domain::{
        entities,
        services::{chapter::ChapterService, manga::MangaService},
    },
    infrastructure::domain::repositories::{
        chapter::ChapterRepositoryImpl, manga::MangaRepositoryImpl,
    },
    presentation::graphql::manga::Manga,
};

#[derive(Debug, Clone, SimpleObject)]
pub struct Page {
    pub id: i64,
    pub url: String,
    pub page_number: i64,
}

impl From<entities::chapter::ChapterImage> for Page {
    fn from(val: entities::chapter::ChapterImage) -> Self {
        Self {
            id: val.id,
            url: val.image_url,
            page_number: val.page_number,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Chapter {
    pub id: i64,
    pub manga_id: i64,
    pub number: f64,
    pub title: Option<String>,
    pub release_date: Option<NaiveDateTime>,
    pub prev: Option<i64>,
    pub next: Option<i64>,
}

impl From<entities::chapter::Chapter> for Chapter {
    fn from(val: entities::chapter::Chapter) -> Self {
        Self {
            id: val.id,
            manga_id: val.manga_id,
            number: val.number,
            title: val.title,
            release_date: val.release_date,
            prev: val.prev,
            next: val.next,
        }
    }
}

#[Object]
impl Chapter {
    async fn id(&self) -> i64 {
        self.id
    }

    async fn manga_id(&self) -> i64 {
        self.manga_id
    }

    async fn number(&self) -> f64 {
        self.number
    }

    async fn title(&self) -> Option<String> {
        self.title.clone()
    }

    async fn release_date(&self) -> Option<NaiveDateTime> {
        self.release_date
    }

    /// Id of the previous chapter of the same manga, reading order.
    async fn prev(&self) -> Option<i64> {
        self.prev
    }

    /// Id of the next chapter of the same manga, reading order.
    async fn next(&self) -> Option<i64> {
        self.next
    }

    async fn manga(&self, ctx: &Context<'_>) -> Result<Manga> {
        let svc = ctx.data::<MangaService<MangaRepositoryImpl>>()?;

        svc.fetch_manga_by_id(self.manga_id)
            .await
            .map(Into::into)
            .ok_or_else(|| "manga not found".into())
    }

    async fn pages(&self, ctx: &Context<'_>) -> Result<Vec<Page>> {
        let svc = ctx.data::<ChapterService<ChapterRepositoryImpl>>()?;

        Ok(svc
            .fetch_chapter_images(self.id)
            .await
            .into_iter()
            .map(Into::into)
            .collect())
    }
}

#[derive(Default)]
pub struct ChapterRoot;

#[Object]
impl ChapterRoot {
    async fn chapter(&self, ctx: &Context<'_>, id: i64) -> Result<Chapter> {
        let svc = ctx.data::<ChapterService<ChapterRepositoryImpl>>()?;

        svc.fetch_chapter_by_id(id)
            .await
            .map(Into::into)
            .ok_or_else(|| "chapter not found".into())
    }
}
