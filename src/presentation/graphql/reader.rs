use async_graphql::{Context, Object, Result};

use crate::{
    domain::{
        entities,
        entities::reader::{ReaderState, ReadingMode},
        services::{chapter::ChapterService, manga::MangaService},
    },
    infrastructure::domain::repositories::{
        chapter::ChapterRepositoryImpl, manga::MangaRepositoryImpl,
    },
    presentation::graphql::{
        chapter::{Chapter, Page},
        manga::Manga,
    },
};

/// Everything the reader screen needs for one chapter visit.
pub struct Reader {
    manga: entities::manga::Manga,
    chapter: entities::chapter::Chapter,
    pages: Vec<entities::chapter::ChapterImage>,
    state: ReaderState,
}

#[Object]
impl Reader {
    async fn manga(&self) -> Manga {
        self.manga.clone().into()
    }

    async fn chapter(&self) -> Chapter {
        self.chapter.clone().into()
    }

    async fn pages(&self) -> Vec<Page> {
        self.pages.iter().cloned().map(Into::into).collect()
    }

    async fn mode(&self) -> ReadingMode {
        self.state.mode
    }

    /// Requested page clamped into the chapter, 1-based.
    async fn current_page(&self) -> i64 {
        self.state.page
    }

    async fn total_pages(&self) -> i64 {
        self.state.total_pages
    }

    /// Whether the previous control does anything at this position.
    async fn prev_enabled(&self) -> bool {
        self.state.prev_enabled()
    }

    /// Whether the next control does anything at this position.
    async fn next_enabled(&self) -> bool {
        self.state.next_enabled()
    }

    async fn prev_chapter(&self, ctx: &Context<'_>) -> Result<Option<Chapter>> {
        let Some(id) = self.chapter.prev else {
            return Ok(None);
        };
        let svc = ctx.data::<ChapterService<ChapterRepositoryImpl>>()?;

        Ok(svc.fetch_chapter_by_id(id).await.map(Into::into))
    }

    async fn next_chapter(&self, ctx: &Context<'_>) -> Result<Option<Chapter>> {
        let Some(id) = self.chapter.next else {
            return Ok(None);
        };
        let svc = ctx.data::<ChapterService<ChapterRepositoryImpl>>()?;

        Ok(svc.fetch_chapter_by_id(id).await.map(Into::into))
    }
}

#[derive(Default)]
pub struct ReaderRoot;

#[Object]
impl ReaderRoot {
    async fn reader(
        &self,
        ctx: &Context<'_>,
        manga_id: i64,
        #[graphql(name = "chapter")] number: f64,
        #[graphql(default = 1)] page: i64,
        #[graphql(default)] mode: ReadingMode,
    ) -> Result<Reader> {
        let manga_svc = ctx.data::<MangaService<MangaRepositoryImpl>>()?;
        let chapter_svc = ctx.data::<ChapterService<ChapterRepositoryImpl>>()?;

        let manga = manga_svc
            .fetch_manga_by_id(manga_id)
            .await
            .ok_or("manga not found")?;
        let chapter = chapter_svc
            .fetch_chapter_by_number(manga_id, number)
            .await
            .ok_or("chapter not found")?;
        let pages = chapter_svc.fetch_chapter_images(chapter.id).await;

        let state = ReaderState::open(
            mode,
            page,
            pages.len() as i64,
            chapter.prev.is_some(),
            chapter.next.is_some(),
        );

        Ok(Reader {
            manga,
            chapter,
            pages,
            state,
        })
    }
}
