use std::sync::Arc;

use cinebook_shared::{Booking, CreateBookingRequest};
use tracing::{info, warn};

use crate::repository::{BookingRepository, MovieRepository, UserRepository};
use crate::validation::validate_booking;
use crate::{CoreError, CoreResult};

/// Creates bookings after checking that the referenced user and movie exist
pub struct BookingService {
    users: Arc<dyn UserRepository>,
    movies: Arc<dyn MovieRepository>,
    bookings: Arc<dyn BookingRepository>,
}

impl BookingService {
    pub fn new(
        users: Arc<dyn UserRepository>,
        movies: Arc<dyn MovieRepository>,
        bookings: Arc<dyn BookingRepository>,
    ) -> Self {
        Self { users, movies, bookings }
    }

    /// References are resolved before anything else is checked, so a missing
    /// or empty id is reported the same way as one that matches nothing. The
    /// lookups and the insert are separate store calls with no transaction
    /// around them.
    pub async fn create_booking(&self, req: CreateBookingRequest) -> CoreResult<Booking> {
        // 1. Resolve references
        let user = match non_empty(&req.user_id) {
            Some(id) => self.users.find_user_by_id(id).await?,
            None => None,
        };
        let movie = match non_empty(&req.movie_id) {
            Some(id) => self.movies.find_movie_by_id(id).await?,
            None => None,
        };

        if user.is_none() || movie.is_none() {
            warn!(
                user_id = ?req.user_id,
                movie_id = ?req.movie_id,
                "Booking rejected: unresolved reference"
            );
            return Err(CoreError::ReferenceNotFound);
        }

        // 2. Persist as supplied
        let new_booking = validate_booking(req)?;
        let booking = self.bookings.insert_booking(new_booking).await?;
        info!("Booking created: {}", booking.id);

        Ok(booking)
    }
}

fn non_empty(id: &Option<String>) -> Option<&str> {
    id.as_deref().filter(|id| !id.is_empty())
}
