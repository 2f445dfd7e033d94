use crate::domain::{
    entities::chapter::{Chapter, ChapterImage},
    repositories::chapter::ChapterRepository,
};

#[derive(Clone)]
pub struct ChapterService<R>
where
    R: ChapterRepository,
{
    repo: R,
}

impl<R> ChapterService<R>
where
    R: ChapterRepository,
{
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub async fn fetch_chapter_by_id(&self, id: i64) -> Option<Chapter> {
        match self.repo.get_chapter_by_id(id).await {
            Ok(chapter) => chapter,
            Err(e) => {
                error!("failed to fetch chapter {id}: {e}");
                None
            }
        }
    }

    pub async fn fetch_chapter_by_number(&self, manga_id: i64, number: f64) -> Option<Chapter> {
        match self
            .repo
            .get_chapter_by_manga_id_number(manga_id, number)
            .await
        {
            Ok(chapter) => chapter,
            Err(e) => {
                error!("failed to fetch chapter {number} of manga {manga_id}: {e}");
                None
            }
        }
    }

    /// All chapters of a manga, oldest first when `asc` is set.
    pub async fn fetch_chapters_by_manga_id(&self, manga_id: i64, asc: bool) -> Vec<Chapter> {
        match self.repo.get_chapters_by_manga_id(manga_id, asc).await {
            Ok(list) => list,
            Err(e) => {
                error!("failed to fetch chapters for manga {manga_id}: {e}");
                vec![]
            }
        }
    }

    /// Page images of a chapter in reading order.
    pub async fn fetch_chapter_images(&self, chapter_id: i64) -> Vec<ChapterImage> {
        match self.repo.get_images_by_chapter_id(chapter_id).await {
            Ok(list) => list,
            Err(e) => {
                error!("failed to fetch pages for chapter {chapter_id}: {e}");
                vec![]
            }
        }
    }
}
