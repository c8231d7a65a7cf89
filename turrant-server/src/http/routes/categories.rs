//! Category endpoint

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};

use super::Envelope;
use crate::db::CategoryRepo;
use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::models::Category;

/// GET /api/categories - all categories by name
async fn list_categories(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Envelope<Vec<Category>>>, ApiError> {
    let categories = CategoryRepo::new(&state.db)
        .list()
        .await
        .map_err(ApiError::list)?;
    Ok(Envelope::ok(categories))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/api/categories", get(list_categories))
}
