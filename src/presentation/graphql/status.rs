use async_graphql::{Context, Object, Result, SimpleObject};

use crate::infrastructure::auth::Claims;

#[derive(Debug, SimpleObject)]
struct Status {
    version: String,
    loggedin: bool,
}

#[derive(Default)]
pub struct StatusRoot;

#[Object]
impl StatusRoot {
    async fn server_status(&self, ctx: &Context<'_>) -> Result<Status> {
        let loggedin = ctx.data_opt::<Claims>().is_some();
        let version = env!("CARGO_PKG_VERSION").to_string();

        Ok(Status { version, loggedin })
    }
}
