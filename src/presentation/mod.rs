pub mod graphql;
pub mod rest;
pub mod token;

use std::net::SocketAddr;

use anyhow::anyhow;
use axum::{
    routing::{get, post},
    Extension, Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
};

use crate::{
    domain::services::{
        anime::AnimeService, chapter::ChapterService, favorite::FavoriteService,
        manga::MangaService, profile::ProfileService, schedule::ScheduleService,
    },
    infrastructure::{
        config::Config,
        domain::repositories::{
            anime::AnimeRepositoryImpl, chapter::ChapterRepositoryImpl,
            favorite::FavoriteRepositoryImpl, manga::MangaRepositoryImpl,
            profile::ProfileRepositoryImpl, schedule::ScheduleRepositoryImpl,
        },
    },
    presentation::graphql::{loader::DatabaseLoader, schema::SchemaBuilder},
};

#[derive(Default)]
pub struct ServerBuilder {
    config: Option<Config>,
    anime_svc: Option<AnimeService<AnimeRepositoryImpl>>,
    manga_svc: Option<MangaService<MangaRepositoryImpl>>,
    chapter_svc: Option<ChapterService<ChapterRepositoryImpl>>,
    favorite_svc: Option<FavoriteService<FavoriteRepositoryImpl>>,
    profile_svc: Option<ProfileService<ProfileRepositoryImpl>>,
    schedule_svc: Option<ScheduleService<ScheduleRepositoryImpl>>,
    favorite_repo: Option<FavoriteRepositoryImpl>,
    enable_playground: bool,
}

impl ServerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(self, config: Config) -> Self {
        Self {
            config: Some(config),
            ..self
        }
    }

    pub fn with_anime_svc(self, anime_svc: AnimeService<AnimeRepositoryImpl>) -> Self {
        Self {
            anime_svc: Some(anime_svc),
            ..self
        }
    }

    pub fn with_manga_svc(self, manga_svc: MangaService<MangaRepositoryImpl>) -> Self {
        Self {
            manga_svc: Some(manga_svc),
            ..self
        }
    }

    pub fn with_chapter_svc(self, chapter_svc: ChapterService<ChapterRepositoryImpl>) -> Self {
        Self {
            chapter_svc: Some(chapter_svc),
            ..self
        }
    }

    pub fn with_favorite_svc(self, favorite_svc: FavoriteService<FavoriteRepositoryImpl>) -> Self {
        Self {
            favorite_svc: Some(favorite_svc),
            ..self
        }
    }

    pub fn with_profile_svc(self, profile_svc: ProfileService<ProfileRepositoryImpl>) -> Self {
        Self {
            profile_svc: Some(profile_svc),
            ..self
        }
    }

    pub fn with_schedule_svc(self, schedule_svc: ScheduleService<ScheduleRepositoryImpl>) -> Self {
        Self {
            schedule_svc: Some(schedule_svc),
            ..self
        }
    }

    pub fn with_favorite_repo(self, favorite_repo: FavoriteRepositoryImpl) -> Self {
        Self {
            favorite_repo: Some(favorite_repo),
            ..self
        }
    }

    pub fn enable_playground(self) -> Self {
        Self {
            enable_playground: true,
            ..self
        }
    }

    pub fn build(self) -> Result<Server, anyhow::Error> {
        let config = self.config.ok_or_else(|| anyhow!("no config set"))?;
        let anime_svc = self.anime_svc.ok_or_else(|| anyhow!("no anime service"))?;
        let manga_svc = self.manga_svc.ok_or_else(|| anyhow!("no manga service"))?;
        let chapter_svc = self
            .chapter_svc
            .ok_or_else(|| anyhow!("no chapter service"))?;
        let favorite_svc = self
            .favorite_svc
            .ok_or_else(|| anyhow!("no favorite service"))?;
        let profile_svc = self
            .profile_svc
            .ok_or_else(|| anyhow!("no profile service"))?;
        let schedule_svc = self
            .schedule_svc
            .ok_or_else(|| anyhow!("no schedule service"))?;
        let favorite_repo = self
            .favorite_repo
            .ok_or_else(|| anyhow!("no favorite repository"))?;

        Ok(Server::new(
            config,
            anime_svc,
            manga_svc,
            chapter_svc,
            favorite_svc,
            profile_svc,
            schedule_svc,
            favorite_repo,
            self.enable_playground,
        ))
    }
}

pub struct Server {
    router: Router,
}

impl Server {
    #[allow(clippy::too_many_arguments)]
    fn new(
        config: Config,
        anime_svc: AnimeService<AnimeRepositoryImpl>,
        manga_svc: MangaService<MangaRepositoryImpl>,
        chapter_svc: ChapterService<ChapterRepositoryImpl>,
        favorite_svc: FavoriteService<FavoriteRepositoryImpl>,
        profile_svc: ProfileService<ProfileRepositoryImpl>,
        schedule_svc: ScheduleService<ScheduleRepositoryImpl>,
        favorite_repo: FavoriteRepositoryImpl,
        enable_playground: bool,
    ) -> Self {
        let schema = SchemaBuilder::new()
            .data(anime_svc)
            .data(manga_svc)
            .data(chapter_svc)
            .data(favorite_svc)
            .data(profile_svc)
            .data(schedule_svc)
            .loader(DatabaseLoader::new(favorite_repo))
            .build();

        let mut router = Router::new().route("/health", get(rest::health::health_check));

        if enable_playground {
            router = router
                .route(
                    "/graphql",
                    get(graphql::graphql_playground).post(graphql::graphql_handler),
                )
                .route("/graphql/", post(graphql::graphql_handler));
        } else {
            router = router
                .route("/graphql", post(graphql::graphql_handler))
                .route("/graphql/", post(graphql::graphql_handler));
        }

        let router = router
            .layer(Extension(schema))
            .layer(Extension(config))
            .layer(
                CorsLayer::new()
                    .allow_origin(Any)
                    .allow_methods(Any)
                    .allow_headers(Any),
            )
            .layer(CompressionLayer::new());

        Self { router }
    }

    pub async fn serve<A: Into<SocketAddr>>(self, addr: A) -> Result<(), anyhow::Error> {
        axum_server::bind(addr.into())
            .serve(self.router.into_make_service())
            .await?;

        Ok(())
    }
}
