use axum::Router;
use tower_http::trace::TraceLayer;

pub mod analytics;
pub mod bookings;
pub mod error;
pub mod extract;
pub mod movies;
pub mod state;
pub mod users;

pub use state::AppState;

pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(movies::routes())
        .merge(users::routes())
        .merge(bookings::routes())
        .merge(analytics::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
