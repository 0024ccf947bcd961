//! Aggregation pipelines for the analytics reports, all run against the
//! `bookings` collection.

use mongodb::bson::{doc, Document};

use crate::database::{MOVIES, USERS};

/// `$lookup` of `local_field` against `_id` in `from`, unwound so unmatched
/// documents drop out.
fn join(from: &str, local_field: &str, alias: &str) -> [Document; 2] {
    [
        doc! {
            "$lookup": {
                "from": from,
                "localField": local_field,
                "foreignField": "_id",
                "as": alias,
            }
        },
        doc! { "$unwind": format!("${}", alias) },
    ]
}

pub fn movie_booking_totals() -> Vec<Document> {
    let mut pipeline = vec![doc! {
        "$group": {
            "_id": "$movieId",
            "totalBookings": { "$sum": 1 },
            "totalSeats": { "$sum": "$seats" },
        }
    }];
    pipeline.extend(join(MOVIES, "_id", "movie"));
    pipeline.push(doc! {
        "$project": {
            "movieTitle": "$movie.title",
            "totalBookings": 1,
            "totalSeats": 1,
        }
    });
    pipeline
}

pub fn user_booking_history() -> Vec<Document> {
    let mut pipeline = Vec::new();
    pipeline.extend(join(USERS, "userId", "user"));
    pipeline.extend(join(MOVIES, "movieId", "movie"));
    pipeline.push(doc! {
        "$group": {
            "_id": "$userId",
            "userName": { "$first": "$user.name" },
            "bookings": {
                "$push": {
                    "movieTitle": "$movie.title",
                    "bookingDate": "$bookingDate",
                    "seats": "$seats",
                    "status": "$status",
                }
            },
        }
    });
    pipeline
}

pub fn top_users() -> Vec<Document> {
    let mut pipeline = vec![
        doc! {
            "$group": {
                "_id": "$userId",
                "bookingCount": { "$sum": 1 },
            }
        },
        doc! { "$match": { "bookingCount": { "$gt": 2 } } },
    ];
    pipeline.extend(join(USERS, "_id", "user"));
    pipeline.push(doc! {
        "$project": {
            "userName": "$user.name",
            "bookingCount": 1,
        }
    });
    pipeline
}

pub fn genre_seat_totals() -> Vec<Document> {
    let mut pipeline = Vec::new();
    pipeline.extend(join(MOVIES, "movieId", "movie"));
    pipeline.push(doc! {
        "$group": {
            "_id": "$movie.genre",
            "totalSeats": { "$sum": "$seats" },
        }
    });
    pipeline
}

pub fn active_bookings() -> Vec<Document> {
    // Exact, case-sensitive match
    let mut pipeline = vec![doc! { "$match": { "status": "Booked" } }];
    pipeline.extend(join(USERS, "userId", "user"));
    pipeline.extend(join(MOVIES, "movieId", "movie"));
    pipeline.push(doc! {
        "$project": {
            "userName": "$user.name",
            "movieTitle": "$movie.title",
            "seats": 1,
            "bookingDate": 1,
        }
    });
    pipeline
}
