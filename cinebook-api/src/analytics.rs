use axum::{extract::State, routing::get, Json, Router};
use cinebook_shared::{
    ActiveBooking, GenreSeatTotals, MovieBookingTotals, TopUser, UserBookingHistory,
};

use crate::error::AppError;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/analytics/movie-bookings", get(movie_bookings))
        .route("/analytics/user-bookings", get(user_bookings))
        .route("/analytics/top-users", get(top_users))
        .route("/analytics/genre-wise-bookings", get(genre_wise_bookings))
        .route("/analytics/active-bookings", get(active_bookings))
}

/// GET /analytics/movie-bookings
async fn movie_bookings(
    State(state): State<AppState>,
) -> Result<Json<Vec<MovieBookingTotals>>, AppError> {
    let rows = state
        .analytics
        .movie_booking_totals()
        .await
        .map_err(AppError::internal)?;
    Ok(Json(rows))
}

/// GET /analytics/user-bookings
async fn user_bookings(
    State(state): State<AppState>,
) -> Result<Json<Vec<UserBookingHistory>>, AppError> {
    let rows = state
        .analytics
        .user_booking_history()
        .await
        .map_err(AppError::internal)?;
    Ok(Json(rows))
}

/// GET /analytics/top-users
async fn top_users(State(state): State<AppState>) -> Result<Json<Vec<TopUser>>, AppError> {
    let rows = state.analytics.top_users().await.map_err(AppError::internal)?;
    Ok(Json(rows))
}

/// GET /analytics/genre-wise-bookings
async fn genre_wise_bookings(
    State(state): State<AppState>,
) -> Result<Json<Vec<GenreSeatTotals>>, AppError> {
    let rows = state
        .analytics
        .genre_seat_totals()
        .await
        .map_err(AppError::internal)?;
    Ok(Json(rows))
}

/// GET /analytics/active-bookings
async fn active_bookings(
    State(state): State<AppState>,
) -> Result<Json<Vec<ActiveBooking>>, AppError> {
    let rows = state
        .analytics
        .active_bookings()
        .await
        .map_err(AppError::internal)?;
    Ok(Json(rows))
}
