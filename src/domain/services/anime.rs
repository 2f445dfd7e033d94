use crate::domain::{
    entities::{
        anime::Anime,
        paging::{page_offset, Paged, PAGE_SIZE},
    },
    repositories::anime::AnimeRepository,
};

#[derive(Clone)]
pub struct AnimeService<R>
where
    R: AnimeRepository,
{
    repo: R,
}

impl<R> AnimeService<R>
where
    R: AnimeRepository,
{
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Fetch a single anime and count the visit as a view.
    pub async fn fetch_anime_detail(&self, id: i64) -> Option<Anime> {
        let anime = match self.repo.get_anime_by_id(id).await {
            Ok(anime) => anime?,
            Err(e) => {
                error!("failed to fetch anime {id}: {e}");
                return None;
            }
        };

        if let Err(e) = self.repo.increment_anime_views(id).await {
            error!("failed to count view for anime {id}: {e}");
        }

        Some(anime)
    }

    pub async fn fetch_anime_by_id(&self, id: i64) -> Option<Anime> {
        match self.repo.get_anime_by_id(id).await {
            Ok(anime) => anime,
            Err(e) => {
                error!("failed to fetch anime {id}: {e}");
                None
            }
        }
    }

    pub async fn fetch_popular_anime(&self, limit: i64) -> Vec<Anime> {
        match self.repo.get_popular_anime(limit).await {
            Ok(list) => list,
            Err(e) => {
                error!("failed to fetch popular anime: {e}");
                vec![]
            }
        }
    }

    pub async fn fetch_top_rated_anime(&self, limit: i64) -> Vec<Anime> {
        match self.repo.get_top_rated_anime(limit).await {
            Ok(list) => list,
            Err(e) => {
                error!("failed to fetch top rated anime: {e}");
                vec![]
            }
        }
    }

    pub async fn fetch_airing_anime(&self, limit: i64) -> Vec<Anime> {
        match self.repo.get_airing_anime(limit).await {
            Ok(list) => list,
            Err(e) => {
                error!("failed to fetch airing anime: {e}");
                vec![]
            }
        }
    }

    pub async fn fetch_recently_added_anime(&self, limit: i64) -> Vec<Anime> {
        match self.repo.get_recently_added_anime(limit).await {
            Ok(list) => list,
            Err(e) => {
                error!("failed to fetch recently added anime: {e}");
                vec![]
            }
        }
    }

    pub async fn fetch_similar_anime(&self, anime_id: i64, limit: i64) -> Vec<Anime> {
        match self.repo.get_similar_anime(anime_id, limit).await {
            Ok(list) => list,
            Err(e) => {
                error!("failed to fetch similar anime for {anime_id}: {e}");
                vec![]
            }
        }
    }

    /// Paginated title search. A blank query matches everything.
    pub async fn search_anime(&self, query: &str, page: i64) -> Paged<Anime> {
        let query = query.trim();
        let (page, offset) = page_offset(page);
        let total_count = match self.repo.count_search_anime(query).await {
            Ok(count) => count,
            Err(e) => {
                error!("failed to count anime matching {query}: {e}");
                return Paged::empty(page);
            }
        };

        let items = match self.repo.search_anime(query, offset, PAGE_SIZE).await {
            Ok(list) => list,
            Err(e) => {
                error!("failed to search anime matching {query}: {e}");
                return Paged::empty(page);
            }
        };

        Paged::new(items, total_count, page)
    }
}
