use async_graphql::{OutputType, SimpleObject};

use crate::domain::entities::paging::Paged;

/// One page of catalogue results together with its paging info.
#[derive(SimpleObject)]
#[graphql(concrete(
    name = "AnimeResults",
    params(crate::presentation::graphql::anime::Anime)
))]
#[graphql(concrete(
    name = "MangaResults",
    params(crate::presentation::graphql::manga::Manga)
))]
pub struct Results<T: OutputType> {
    pub items: Vec<T>,
    pub total_count: i64,
    pub page: i64,
    pub total_pages: i64,
}

impl<T: OutputType> Results<T> {
    pub fn from_paged<E>(paged: Paged<E>) -> Self
    where
        T: From<E>,
    {
        Self {
            items: paged.items.into_iter().map(Into::into).collect(),
            total_count: paged.total_count,
            page: paged.page,
            total_pages: paged.total_pages,
        }
    }
}
