//! Public post endpoints

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};

use super::Envelope;
use crate::db::PostRepo;
use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::models::Post;

/// GET /api/posts - published posts, newest first
async fn list_posts(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Envelope<Vec<Post>>>, ApiError> {
    let posts = PostRepo::new(&state.db)
        .list_published()
        .await
        .map_err(ApiError::list)?;
    Ok(Envelope::ok(posts))
}

/// GET /api/posts/{slug} - a single published post
async fn get_post(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
) -> Result<Json<Envelope<Post>>, ApiError> {
    PostRepo::new(&state.db)
        .get_by_slug(&slug)
        .await?
        .map(Envelope::ok)
        .ok_or(ApiError::NotFound {
            message: "Post not found",
        })
}

/// Public post routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/posts", get(list_posts))
        .route("/api/posts/{slug}", get(get_post))
}
