//! JSON endpoints

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};

use crate::db::StarfishRepo;
use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::models::Starfish;

/// GET /api/starfish - every record as a JSON array
async fn list_starfish(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Starfish>>, ApiError> {
    let all = StarfishRepo::new(&state.pool).list().await?;
    Ok(Json(all))
}

/// API routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/api/starfish", get(list_starfish))
}
