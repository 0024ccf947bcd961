use async_trait::async_trait;
use cinebook_shared::{
    ActiveBooking, Booking, GenreSeatTotals, Movie, MovieBookingTotals, NewBooking, NewMovie,
    NewUser, TopUser, User, UserBookingHistory,
};

use crate::CoreResult;

/// Repository trait for the `movies` collection
#[async_trait]
pub trait MovieRepository: Send + Sync {
    async fn create_movie(&self, movie: NewMovie) -> CoreResult<Movie>;

    async fn find_movie_by_id(&self, id: &str) -> CoreResult<Option<Movie>>;
}

/// Repository trait for the `users` collection
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create_user(&self, user: NewUser) -> CoreResult<User>;

    async fn find_user_by_id(&self, id: &str) -> CoreResult<Option<User>>;
}

/// Repository trait for the `bookings` collection. Inserts are verbatim;
/// reference checks belong to [`crate::BookingService`].
#[async_trait]
pub trait BookingRepository: Send + Sync {
    async fn insert_booking(&self, booking: NewBooking) -> CoreResult<Booking>;

    async fn find_booking_by_id(&self, id: &str) -> CoreResult<Option<Booking>>;
}

/// Read-only reports over bookings joined with movies and users.
///
/// Joins are inner joins: bookings whose user or movie does not resolve are
/// left out of any report that needs the joined field.
#[async_trait]
pub trait AnalyticsRepository: Send + Sync {
    /// Booking count and seat sum per movie.
    async fn movie_booking_totals(&self) -> CoreResult<Vec<MovieBookingTotals>>;

    /// Every user's bookings, one row per user. Order within a row is unspecified.
    async fn user_booking_history(&self) -> CoreResult<Vec<UserBookingHistory>>;

    /// Users with strictly more than two bookings.
    async fn top_users(&self) -> CoreResult<Vec<TopUser>>;

    /// Seat sum per movie genre.
    async fn genre_seat_totals(&self) -> CoreResult<Vec<GenreSeatTotals>>;

    /// Bookings whose status is exactly `"Booked"`.
    async fn active_bookings(&self) -> CoreResult<Vec<ActiveBooking>>;
}
