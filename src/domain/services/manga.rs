use crate::domain::{
    entities::{
        manga::{normalize_status, Author, Character, Genre, Manga, MangaSort},
        paging::{page_offset, Paged, PAGE_SIZE},
    },
    repositories::manga::MangaRepository,
};

#[derive(Clone)]
pub struct MangaService<R>
where
    R: MangaRepository,
{
    repo: R,
}

impl<R> MangaService<R>
where
    R: MangaRepository,
{
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Fetch a single manga and count the visit as a view.
    pub async fn fetch_manga_detail(&self, id: i64) -> Option<Manga> {
        let manga = match self.repo.get_manga_by_id(id).await {
            Ok(manga) => manga?,
            Err(e) => {
                error!("failed to fetch manga {id}: {e}");
                return None;
            }
        };

        if let Err(e) = self.repo.increment_manga_views(id).await {
            error!("failed to count view for manga {id}: {e}");
        }

        Some(manga)
    }

    pub async fn fetch_manga_by_id(&self, id: i64) -> Option<Manga> {
        match self.repo.get_manga_by_id(id).await {
            Ok(manga) => manga,
            Err(e) => {
                error!("failed to fetch manga {id}: {e}");
                None
            }
        }
    }

    pub async fn fetch_popular_manga(&self, limit: i64) -> Vec<Manga> {
        match self.repo.get_popular_manga(limit).await {
            Ok(list) => list,
            Err(e) => {
                error!("failed to fetch popular manga: {e}");
                vec![]
            }
        }
    }

    pub async fn fetch_recently_updated_manga(&self, limit: i64) -> Vec<Manga> {
        match self.repo.get_recently_updated_manga(limit).await {
            Ok(list) => list,
            Err(e) => {
                error!("failed to fetch recently updated manga: {e}");
                vec![]
            }
        }
    }

    pub async fn fetch_ongoing_manga(&self, limit: i64) -> Vec<Manga> {
        match self.repo.get_ongoing_manga(limit).await {
            Ok(list) => list,
            Err(e) => {
                error!("failed to fetch ongoing manga: {e}");
                vec![]
            }
        }
    }

    pub async fn fetch_completed_manga(&self, limit: i64) -> Vec<Manga> {
        match self.repo.get_completed_manga(limit).await {
            Ok(list) => list,
            Err(e) => {
                error!("failed to fetch completed manga: {e}");
                vec![]
            }
        }
    }

    pub async fn fetch_similar_manga(&self, manga_id: i64, limit: i64) -> Vec<Manga> {
        match self.repo.get_similar_manga(manga_id, limit).await {
            Ok(list) => list,
            Err(e) => {
                error!("failed to fetch similar manga for {manga_id}: {e}");
                vec![]
            }
        }
    }

    /// Paginated browse across the whole manga catalogue. Unknown status
    /// filters pass through and simply match nothing.
    pub async fn browse_manga(
        &self,
        status: Option<String>,
        query: Option<String>,
        sort: MangaSort,
        page: i64,
    ) -> Paged<Manga> {
        let status = status
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(normalize_status);
        let query = query
            .as_deref()
            .map(str::trim)
            .filter(|q| !q.is_empty())
            .map(str::to_string);

        let (page, offset) = page_offset(page);
        let total_count = match self
            .repo
            .count_browse_manga(status.as_deref(), query.as_deref())
            .await
        {
            Ok(count) => count,
            Err(e) => {
                error!("failed to count browsed manga: {e}");
                return Paged::empty(page);
            }
        };

        let items = match self
            .repo
            .browse_manga(status.as_deref(), query.as_deref(), sort, offset, PAGE_SIZE)
            .await
        {
            Ok(list) => list,
            Err(e) => {
                error!("failed to browse manga: {e}");
                return Paged::empty(page);
            }
        };

        Paged::new(items, total_count, page)
    }

    pub async fn fetch_genres(&self, manga_id: i64) -> Vec<Genre> {
        match self.repo.get_genres_by_manga_id(manga_id).await {
            Ok(list) => list,
            Err(e) => {
                error!("failed to fetch genres for manga {manga_id}: {e}");
                vec![]
            }
        }
    }

    pub async fn fetch_characters(&self, manga_id: i64, limit: i64) -> Vec<Character> {
        match self.repo.get_characters_by_manga_id(manga_id, limit).await {
            Ok(list) => list,
            Err(e) => {
                error!("failed to fetch characters for manga {manga_id}: {e}");
                vec![]
            }
        }
    }

    pub async fn fetch_authors(&self, manga_id: i64) -> Vec<Author> {
        match self.repo.get_authors_by_manga_id(manga_id).await {
            Ok(list) => list,
            Err(e) => {
                error!("failed to fetch authors for manga {manga_id}: {e}");
                vec![]
            }
        }
    }
}
