//! Browser-facing pages
//!
//! Server-rendered HTML plus the form posts that mutate the table. Every
//! successful mutation answers 302 back to the listing so a refresh never
//! replays the post.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Form, Router,
};

use crate::db::StarfishRepo;
use crate::http::error::ApiError;
use crate::http::render;
use crate::http::server::AppState;
use crate::models::StarfishForm;

/// GET / - list every starfish
async fn index(State(state): State<Arc<AppState>>) -> Result<Html<String>, ApiError> {
    let all = StarfishRepo::new(&state.pool).list().await?;
    Ok(Html(render::index_page(&all)))
}

/// GET /create - blank form
async fn create_form() -> Html<String> {
    Html(render::create_page())
}

/// POST /create - insert a new record from form fields
async fn create_submit(
    State(state): State<Arc<AppState>>,
    Form(form): Form<StarfishForm>,
) -> Result<Response, ApiError> {
    // Coerce before touching the database; a bad field writes nothing.
    let fields = form.parse()?;
    StarfishRepo::new(&state.pool).insert(fields).await?;

    Ok(redirect_to_index())
}

/// GET /update/{id} - form prefilled with the stored record
async fn update_form(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Html<String>, ApiError> {
    let starfish = StarfishRepo::new(&state.pool).get(id).await?;
    Ok(Html(render::update_page(&starfish)))
}

/// POST /update/{id} - overwrite every field of an existing record
async fn update_submit(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Form(form): Form<StarfishForm>,
) -> Result<Response, ApiError> {
    let fields = form.parse()?;
    StarfishRepo::new(&state.pool).update(id, fields).await?;

    Ok(redirect_to_index())
}

/// POST /delete/{id} - remove a record
async fn delete_submit(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Response, ApiError> {
    StarfishRepo::new(&state.pool).delete(id).await?;
    Ok(redirect_to_index())
}

/// Browsers land back on the listing after any successful mutation.
fn redirect_to_index() -> Response {
    (StatusCode::FOUND, [(header::LOCATION, "/")]).into_response()
}

/// Page routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(index))
        .route("/create", get(create_form).post(create_submit))
        .route("/update/{id}", get(update_form).post(update_submit))
        .route("/delete/{id}", post(delete_submit))
}
