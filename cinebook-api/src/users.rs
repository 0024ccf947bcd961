use axum::{extract::State, routing::post, Json, Router};
use cinebook_core::validation::validate_user;
use cinebook_shared::{CreateUserRequest, User};
use tracing::info;

use crate::error::AppError;
use crate::extract::ApiJson;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/users", post(create_user))
}

async fn create_user(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<CreateUserRequest>,
) -> Result<Json<User>, AppError> {
    let new_user = validate_user(req).map_err(AppError::bad_request)?;
    let user = state
        .users
        .create_user(new_user)
        .await
        .map_err(AppError::bad_request)?;

    info!("User created: {}", user.id);
    Ok(Json(user))
}
