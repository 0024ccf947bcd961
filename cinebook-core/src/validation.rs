use cinebook_shared::{
    CreateBookingRequest, CreateMovieRequest, CreateUserRequest, NewBooking, NewMovie, NewUser,
};

use crate::{CoreError, CoreResult};

fn required(entity: &str, field: &str, value: Option<String>) -> CoreResult<String> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(CoreError::Validation(format!(
            "{} validation failed: {}: Path `{}` is required.",
            entity, field, field
        ))),
    }
}

pub fn validate_movie(req: CreateMovieRequest) -> CoreResult<NewMovie> {
    Ok(NewMovie {
        title: required("Movie", "title", req.title)?,
        genre: required("Movie", "genre", req.genre)?,
        description: req.description,
        duration: req.duration,
        release_date: req.release_date,
    })
}

pub fn validate_user(req: CreateUserRequest) -> CoreResult<NewUser> {
    Ok(NewUser {
        name: required("User", "name", req.name)?,
        email: req.email,
        phone: req.phone,
    })
}

/// Only the two references are required. Seats, date and status pass through
/// as supplied, including zero, negative or fractional seat counts.
pub fn validate_booking(req: CreateBookingRequest) -> CoreResult<NewBooking> {
    Ok(NewBooking {
        user_id: required("Booking", "userId", req.user_id)?,
        movie_id: required("Booking", "movieId", req.movie_id)?,
        seats: req.seats,
        booking_date: req.booking_date,
        status: req.status,
    })
}
