//! Row types returned by the analytics reports.
//!
//! Grouped rows carry their group key under `_id`, the same shape the
//! aggregation pipelines emit, so store results deserialize directly.

use serde::{Deserialize, Serialize};

use super::seats::Seats;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieBookingTotals {
    #[serde(rename = "_id")]
    pub movie_id: String,
    pub movie_title: String,
    pub total_bookings: i64,
    pub total_seats: Seats,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserBookingHistory {
    #[serde(rename = "_id")]
    pub user_id: String,
    pub user_name: String,
    pub bookings: Vec<UserBookingEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserBookingEntry {
    pub movie_title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub booking_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seats: Option<Seats>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopUser {
    #[serde(rename = "_id")]
    pub user_id: String,
    pub user_name: String,
    pub booking_count: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenreSeatTotals {
    #[serde(rename = "_id")]
    pub genre: String,
    pub total_seats: Seats,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActiveBooking {
    #[serde(rename = "_id")]
    pub booking_id: String,
    pub user_name: String,
    pub movie_title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seats: Option<Seats>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub booking_date: Option<String>,
}
