use async_graphql::{Context, Object, Result};

use crate::{
    domain::{entities::favorite::FavoriteAction, services::favorite::FavoriteService},
    infrastructure::{auth::Claims, domain::repositories::favorite::FavoriteRepositoryImpl},
    presentation::graphql::{anime::Anime, manga::Manga},
};

#[derive(Default)]
pub struct FavoritesRoot;

#[Object]
impl FavoritesRoot {
    async fn anime_favorites(&self, ctx: &Context<'_>) -> Result<Vec<Anime>> {
        let claims = ctx
            .data::<Claims>()
            .map_err(|_| "You must be logged in to view favorites")?;
        let svc = ctx.data::<FavoriteService<FavoriteRepositoryImpl>>()?;

        Ok(svc
            .fetch_anime_favorites(claims.sub)
            .await
            .into_iter()
            .map(Into::into)
            .collect())
    }

    async fn manga_favorites(&self, ctx: &Context<'_>) -> Result<Vec<Manga>> {
        let claims = ctx
            .data::<Claims>()
            .map_err(|_| "You must be logged in to view favorites")?;
        let svc = ctx.data::<FavoriteService<FavoriteRepositoryImpl>>()?;

        Ok(svc
            .fetch_manga_favorites(claims.sub)
            .await
            .into_iter()
            .map(Into::into)
            .collect())
    }
}

#[derive(Default)]
pub struct FavoritesMutationRoot;

#[Object]
impl FavoritesMutationRoot {
    async fn toggle_anime_favorite(
        &self,
        ctx: &Context<'_>,
        anime_id: i64,
    ) -> Result<FavoriteAction> {
        let claims = ctx
            .data::<Claims>()
            .map_err(|_| "You must be logged in to add favorites")?;
        let svc = ctx.data::<FavoriteService<FavoriteRepositoryImpl>>()?;

        Ok(svc.toggle_anime_favorite(claims.sub, anime_id).await?)
    }

    async fn toggle_manga_favorite(
        &self,
        ctx: &Context<'_>,
        manga_id: i64,
    ) -> Result<FavoriteAction> {
        let claims = ctx
            .data::<Claims>()
            .map_err(|_| "You must be logged in to add favorites")?;
        let svc = ctx.data::<FavoriteService<FavoriteRepositoryImpl>>()?;

        Ok(svc.toggle_manga_favorite(claims.sub, manga_id).await?)
    }
}

#[cfg(test)]
mod test {
    use async_graphql::Request;
    use serde_json::json;
    use sqlx::{Row, SqlitePool};

    use crate::{
        domain::services::{
            anime::AnimeService, chapter::ChapterService, favorite::FavoriteService,
            manga::MangaService, profile::ProfileService, schedule::ScheduleService,
        },
        infrastructure::{
            auth::Claims,
            database::{establish_test_connection, Pool},
            domain::repositories::{
                anime::AnimeRepositoryImpl, chapter::ChapterRepositoryImpl,
                favorite::FavoriteRepositoryImpl, manga::MangaRepositoryImpl,
                profile::ProfileRepositoryImpl, schedule::ScheduleRepositoryImpl,
            },
        },
        presentation::graphql::{
            loader::DatabaseLoader,
            schema::{AozoraSchema, SchemaBuilder},
        },
    };

    fn build_schema(pool: &Pool) -> AozoraSchema {
        SchemaBuilder::new()
            .data(AnimeService::new(AnimeRepositoryImpl::new(pool.clone())))
            .data(MangaService::new(MangaRepositoryImpl::new(pool.clone())))
            .data(ChapterService::new(ChapterRepositoryImpl::new(pool.clone())))
            .data(FavoriteService::new(FavoriteRepositoryImpl::new(pool.clone())))
            .data(ProfileService::new(ProfileRepositoryImpl::new(pool.clone())))
            .data(ScheduleService::new(ScheduleRepositoryImpl::new(pool.clone())))
            .loader(DatabaseLoader::new(FavoriteRepositoryImpl::new(pool.clone())))
            .build()
    }

    async fn seed_profile(pool: &Pool) -> i64 {
        sqlx::query(r#"INSERT INTO profiles (username, email, password) VALUES (?, ?, ?)"#)
            .bind("yuki")
            .bind("yuki@example.com")
            .bind("hash")
            .execute(pool as &SqlitePool)
            .await
            .unwrap()
            .last_insert_rowid()
    }

    fn claims(user_id: i64) -> Claims {
        Claims {
            sub: user_id,
            username: "yuki".to_string(),
            exp: (chrono::Utc::now().timestamp() + 3600) as usize,
        }
    }

    #[tokio::test]
    async fn test_toggle_requires_login() {
        let pool = establish_test_connection().await;
        sqlx::query(r#"INSERT INTO anime (title) VALUES ('Cowboy Bebop')"#)
            .execute(&pool as &SqlitePool)
            .await
            .unwrap();

        let schema = build_schema(&pool);
        let res = schema
            .execute("mutation { toggleAnimeFavorite(animeId: 1) }")
            .await;

        assert_eq!(res.errors.len(), 1);
        assert!(res.errors[0].message.contains("logged in"));

        let row = sqlx::query(r#"SELECT COUNT(1) FROM user_anime_favorites"#)
            .fetch_one(&pool as &SqlitePool)
            .await
            .unwrap();
        assert_eq!(row.get::<i64, _>(0), 0);
    }

    #[tokio::test]
    async fn test_toggle_round_trip() {
        let pool = establish_test_connection().await;
        let user_id = seed_profile(&pool).await;
        sqlx::query(r#"INSERT INTO manga (title) VALUES ('Berserk')"#)
            .execute(&pool as &SqlitePool)
            .await
            .unwrap();

        let schema = build_schema(&pool);

        let res = schema
            .execute(
                Request::new("mutation { toggleMangaFavorite(mangaId: 1) }")
                    .data(claims(user_id)),
            )
            .await;
        assert!(res.errors.is_empty(), "{:?}", res.errors);
        assert_eq!(
            res.data.into_json().unwrap(),
            json!({ "toggleMangaFavorite": "added" })
        );

        let res = schema
            .execute(
                Request::new("mutation { toggleMangaFavorite(mangaId: 1) }")
                    .data(claims(user_id)),
            )
            .await;
        assert_eq!(
            res.data.into_json().unwrap(),
            json!({ "toggleMangaFavorite": "removed" })
        );
    }

    #[tokio::test]
    async fn test_favorites_query_reflects_toggle() {
        let pool = establish_test_connection().await;
        let user_id = seed_profile(&pool).await;
        sqlx::query(r#"INSERT INTO manga (title) VALUES ('Berserk')"#)
            .execute(&pool as &SqlitePool)
            .await
            .unwrap();

        let schema = build_schema(&pool);

        schema
            .execute(
                Request::new("mutation { toggleMangaFavorite(mangaId: 1) }")
                    .data(claims(user_id)),
            )
            .await
            .into_result()
            .unwrap();

        let res = schema
            .execute(
                Request::new("{ mangaFavorites { title isFavorite } }").data(claims(user_id)),
            )
            .await;
        assert!(res.errors.is_empty(), "{:?}", res.errors);
        assert_eq!(
            res.data.into_json().unwrap(),
            json!({ "mangaFavorites": [{ "title": "Berserk", "isFavorite": true }] })
        );
    }
}
