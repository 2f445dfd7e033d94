use axum::response::{self, IntoResponse};

pub async fn health_check() -> impl IntoResponse {
    response::Html("OK")
}
