pub mod models;

pub use models::booking::{Booking, CreateBookingRequest, NewBooking};
pub use models::movie::{CreateMovieRequest, Movie, NewMovie};
pub use models::report::{
    ActiveBooking, GenreSeatTotals, MovieBookingTotals, TopUser, UserBookingEntry, UserBookingHistory,
};
pub use models::seats::Seats;
pub use models::user::{CreateUserRequest, NewUser, User};
