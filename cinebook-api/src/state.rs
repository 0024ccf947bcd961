use std::sync::Arc;

use cinebook_core::repository::{AnalyticsRepository, MovieRepository, UserRepository};
use cinebook_core::BookingService;
use cinebook_store::Repositories;

#[derive(Clone)]
pub struct AppState {
    pub movies: Arc<dyn MovieRepository>,
    pub users: Arc<dyn UserRepository>,
    pub bookings: Arc<BookingService>,
    pub analytics: Arc<dyn AnalyticsRepository>,
}

impl AppState {
    pub fn new(repos: Repositories) -> Self {
        let bookings = BookingService::new(
            repos.users.clone(),
            repos.movies.clone(),
            repos.bookings.clone(),
        );

        Self {
            movies: repos.movies,
            users: repos.users,
            bookings: Arc::new(bookings),
            analytics: repos.analytics,
        }
    }
}
