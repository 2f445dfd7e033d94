pub mod anime;
pub mod chapter;
pub mod common;
pub mod favorites;
pub mod loader;
pub mod manga;
pub mod reader;
pub mod schedule;
pub mod schema;
pub mod status;
pub mod user;

use async_graphql::http::{playground_source, GraphQLPlaygroundConfig};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    response::{self, IntoResponse},
    Extension,
};
use jsonwebtoken::{DecodingKey, Validation};

use crate::{
    infrastructure::{auth::Claims, config::Config},
    presentation::token::Token,
};

use self::schema::AozoraSchema;

pub async fn graphql_handler(
    Extension(schema): Extension<AozoraSchema>,
    Extension(config): Extension<Config>,
    token: Token,
    req: GraphQLRequest,
) -> GraphQLResponse {
    let mut req = req.into_inner();

    if !token.0.is_empty() {
        if let Ok(data) = jsonwebtoken::decode::<Claims>(
            &token.0,
            &DecodingKey::from_secret(config.secret.as_bytes()),
            &Validation::default(),
        ) {
            req = req.data(data.claims);
        }
    }

    schema.execute(req).await.into()
}

pub async fn graphql_playground() -> impl IntoResponse {
    response::Html(playground_source(GraphQLPlaygroundConfig::new("/graphql")))
}
