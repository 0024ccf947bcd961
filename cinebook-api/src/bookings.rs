use axum::{extract::State, routing::post, Json, Router};
use cinebook_shared::{Booking, CreateBookingRequest};

use crate::error::AppError;
use crate::extract::ApiJson;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/bookings", post(create_booking))
}

async fn create_booking(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<CreateBookingRequest>,
) -> Result<Json<Booking>, AppError> {
    let booking = state
        .bookings
        .create_booking(req)
        .await
        .map_err(AppError::bad_request)?;

    Ok(Json(booking))
}
