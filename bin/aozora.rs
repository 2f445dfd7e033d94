#[macro_use]
extern crate log;

use std::net::SocketAddr;

use clap::Parser;

use aozora::{
    domain::services::{
        anime::AnimeService, chapter::ChapterService, favorite::FavoriteService,
        manga::MangaService, profile::ProfileService, schedule::ScheduleService,
    },
    infrastructure::{
        config::{Config, GLOBAL_CONFIG},
        database,
        domain::repositories::{
            anime::AnimeRepositoryImpl, chapter::ChapterRepositoryImpl,
            favorite::FavoriteRepositoryImpl, manga::MangaRepositoryImpl,
            profile::ProfileRepositoryImpl, schedule::ScheduleRepositoryImpl,
        },
    },
    presentation::ServerBuilder,
};

#[derive(Parser)]
struct Opts {
    /// Path to config file
    #[clap(long)]
    config: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    let opts: Opts = Opts::parse();
    let config = GLOBAL_CONFIG
        .get_or_init(|| Config::open(opts.config).expect("failed to initialize config"));

    let mut logger = env_logger::Builder::new();
    logger.filter_level(log::LevelFilter::Info);
    if let Ok(rust_log) = std::env::var("RUST_LOG") {
        logger.parse_filters(&rust_log);
    } else if let Ok(aozora_log) = std::env::var("AOZORA_LOG") {
        logger.parse_filters(&format!("aozora={aozora_log}"));
    } else {
        logger.parse_filters(&format!("aozora={}", config.log_level));
    }
    logger.init();

    info!("aozora {}", env!("CARGO_PKG_VERSION"));

    let pool = database::establish_connection(&config.database_path, true).await?;

    let anime_repo = AnimeRepositoryImpl::new(pool.clone());
    let anime_svc = AnimeService::new(anime_repo);

    let manga_repo = MangaRepositoryImpl::new(pool.clone());
    let manga_svc = MangaService::new(manga_repo);

    let chapter_repo = ChapterRepositoryImpl::new(pool.clone());
    let chapter_svc = ChapterService::new(chapter_repo);

    let favorite_repo = FavoriteRepositoryImpl::new(pool.clone());
    let favorite_svc = FavoriteService::new(favorite_repo.clone());

    let profile_repo = ProfileRepositoryImpl::new(pool.clone());
    let profile_svc = ProfileService::new(profile_repo);

    let schedule_repo = ScheduleRepositoryImpl::new(pool.clone());
    let schedule_svc = ScheduleService::new(schedule_repo);

    let mut server_builder = ServerBuilder::new()
        .with_config(config.clone())
        .with_anime_svc(anime_svc)
        .with_manga_svc(manga_svc)
        .with_chapter_svc(chapter_svc)
        .with_favorite_svc(favorite_svc)
        .with_profile_svc(profile_svc)
        .with_schedule_svc(schedule_svc)
        .with_favorite_repo(favorite_repo);

    if config.enable_playground {
        info!("enabling graphql playground");
        server_builder = server_builder.enable_playground();
    }

    let server = server_builder.build()?;

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!("listening on http://{addr}");

    let server_fut = server.serve(addr);
    tokio::select! {
        _ = server_fut => {
            info!("server shutting down");
        }
        _ = tokio::signal::ctrl_c() => {
            info!("ctrl+c signal received");
        }
    }

    info!("closing database...");
    pool.close().await;

    Ok(())
}
