use axum::{extract::State, routing::post, Json, Router};
use cinebook_core::validation::validate_movie;
use cinebook_shared::{CreateMovieRequest, Movie};
use tracing::info;

use crate::error::AppError;
use crate::extract::ApiJson;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/movies", post(create_movie))
}

async fn create_movie(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<CreateMovieRequest>,
) -> Result<Json<Movie>, AppError> {
    let new_movie = validate_movie(req).map_err(AppError::bad_request)?;
    let movie = state
        .movies
        .create_movie(new_movie)
        .await
        .map_err(AppError::bad_request)?;

    info!("Movie created: {} ({})", movie.id, movie.title);
    Ok(Json(movie))
}
