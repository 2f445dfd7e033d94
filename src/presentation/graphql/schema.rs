use std::any::Any;

use async_graphql::{dataloader::DataLoader, extensions, EmptySubscription, MergedObject, Schema};

use super::{
    anime::AnimeRoot,
    chapter::ChapterRoot,
    favorites::{FavoritesMutationRoot, FavoritesRoot},
    loader::DatabaseLoader,
    manga::MangaRoot,
    reader::ReaderRoot,
    schedule::ScheduleRoot,
    status::StatusRoot,
    user::{UserMutationRoot, UserRoot},
};

pub type AozoraSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

#[derive(MergedObject, Default)]
pub struct QueryRoot(
    AnimeRoot,
    MangaRoot,
    ChapterRoot,
    ReaderRoot,
    FavoritesRoot,
    ScheduleRoot,
    UserRoot,
    StatusRoot,
);

#[derive(MergedObject, Default)]
pub struct MutationRoot(UserMutationRoot, FavoritesMutationRoot);

pub struct SchemaBuilder {
    schema_builder: async_graphql::SchemaBuilder<QueryRoot, MutationRoot, EmptySubscription>,
}

impl Default for SchemaBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SchemaBuilder {
    pub fn new() -> Self {
        Self {
            schema_builder: Schema::build(
                QueryRoot::default(),
                MutationRoot::default(),
                EmptySubscription,
            )
            .extension(extensions::Logger),
        }
    }

    pub fn data<D>(self, data: D) -> Self
    where
        D: Any + Send + Sync,
    {
        Self {
            schema_builder: self.schema_builder.data(data),
        }
    }

    pub fn loader(self, loader: DatabaseLoader) -> Self {
        self.data(DataLoader::new(loader, tokio::spawn))
    }

    pub fn build(self) -> AozoraSchema {
        self.schema_builder.finish()
    }
}
