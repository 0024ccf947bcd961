use serde::{Deserialize, Serialize};

use super::seats::{deserialize_seats, Seats};

/// Booking document. `user_id` and `movie_id` hold the `_id` of the referenced
/// user and movie; nothing in the store enforces that they keep resolving.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    #[serde(rename = "_id")]
    pub id: String,
    pub user_id: String,
    pub movie_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seats: Option<Seats>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub booking_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingRequest {
    pub user_id: Option<String>,
    pub movie_id: Option<String>,
    #[serde(default, deserialize_with = "deserialize_seats")]
    pub seats: Option<Seats>,
    pub booking_date: Option<String>,
    pub status: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewBooking {
    pub user_id: String,
    pub movie_id: String,
    pub seats: Option<Seats>,
    pub booking_date: Option<String>,
    pub status: Option<String>,
}

impl NewBooking {
    pub fn into_booking(self, id: String) -> Booking {
        Booking {
            id,
            user_id: self.user_id,
            movie_id: self.movie_id,
            seats: self.seats,
            booking_date: self.booking_date,
            status: self.status,
        }
    }
}
