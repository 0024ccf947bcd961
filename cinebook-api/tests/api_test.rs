use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use cinebook_api::{app, AppState};
use cinebook_core::repository::{BookingRepository, MovieRepository, UserRepository};
use cinebook_shared::Seats;
use cinebook_store::{MemoryStore, Repositories};
use serde_json::{json, Value};
use tower::ServiceExt;

fn test_app() -> (Arc<MemoryStore>, Router) {
    let store = Arc::new(MemoryStore::new());
    let router = app(AppState::new(Repositories::memory(store.clone())));
    (store, router)
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let body = match body {
        Some(v) => Body::from(v.to_string()),
        None => Body::empty(),
    };
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(body)
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

async fn create(app: &Router, uri: &str, body: Value) -> String {
    let (status, json) = send(app, "POST", uri, Some(body)).await;
    assert_eq!(status, StatusCode::OK, "create {} failed: {}", uri, json);
    json["_id"].as_str().unwrap().to_string()
}

async fn book(app: &Router, user_id: &str, movie_id: &str, seats: i64, status: &str) {
    create(
        app,
        "/bookings",
        json!({
            "userId": user_id,
            "movieId": movie_id,
            "seats": seats,
            "bookingDate": "2024-05-01",
            "status": status,
        }),
    )
    .await;
}

#[tokio::test]
async fn test_created_movie_and_user_are_retrievable() {
    let (store, app) = test_app();

    let (status, movie) = send(
        &app,
        "POST",
        "/movies",
        Some(json!({ "title": "Alien", "genre": "Sci-Fi", "duration": 117 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(movie["title"], "Alien");
    let movie_id = movie["_id"].as_str().unwrap();
    let found = store.find_movie_by_id(movie_id).await.unwrap().unwrap();
    assert_eq!(found.genre, "Sci-Fi");
    assert_eq!(found.duration, Some(117));

    let user_id = create(&app, "/users", json!({ "name": "Ann", "email": "ann@example.com" })).await;
    let user = store.find_user_by_id(&user_id).await.unwrap().unwrap();
    assert_eq!(user.name, "Ann");
}

#[tokio::test]
async fn test_invalid_create_bodies_are_400_with_error() {
    let (_, app) = test_app();

    let (status, body) = send(&app, "POST", "/movies", Some(json!({ "genre": "Drama" }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("title"));

    let (status, body) = send(&app, "POST", "/users", Some(json!({ "name": 42 }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());

    let (status, body) = send(&app, "POST", "/users", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_booking_with_unknown_references_is_rejected() {
    let (store, app) = test_app();
    let user_id = create(&app, "/users", json!({ "name": "Ann" })).await;

    let (status, body) = send(
        &app,
        "POST",
        "/bookings",
        Some(json!({ "userId": user_id, "movieId": "000000000000000000000000", "seats": 2 })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "User or Movie not found" }));
    assert_eq!(store.booking_count().await, 0);
}

#[tokio::test]
async fn test_booking_without_user_id_reports_missing_reference() {
    let (store, app) = test_app();
    let movie_id = create(&app, "/movies", json!({ "title": "Alien", "genre": "Sci-Fi" })).await;

    let (status, body) = send(
        &app,
        "POST",
        "/bookings",
        Some(json!({ "movieId": movie_id, "seats": 2 })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "User or Movie not found" }));
    assert_eq!(store.booking_count().await, 0);
}

#[tokio::test]
async fn test_booking_accepts_non_integer_seats() {
    let (store, app) = test_app();
    let user_id = create(&app, "/users", json!({ "name": "Ann" })).await;
    let movie_id = create(&app, "/movies", json!({ "title": "Alien", "genre": "Sci-Fi" })).await;

    let (status, body) = send(
        &app,
        "POST",
        "/bookings",
        Some(json!({ "userId": user_id, "movieId": movie_id, "seats": 2.5 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["seats"], 2.5);

    let (status, body) = send(
        &app,
        "POST",
        "/bookings",
        Some(json!({ "userId": user_id, "movieId": movie_id, "seats": "2" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let stored = store
        .find_booking_by_id(body["_id"].as_str().unwrap())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.seats, Some(Seats::Whole(2)));

    let (_, body) = send(&app, "GET", "/analytics/movie-bookings", None).await;
    assert_eq!(body[0]["totalBookings"], 2);
    assert_eq!(body[0]["totalSeats"], 4.5);
}

#[tokio::test]
async fn test_booking_persists_submitted_fields() {
    let (store, app) = test_app();
    let user_id = create(&app, "/users", json!({ "name": "Ann" })).await;
    let movie_id = create(&app, "/movies", json!({ "title": "Alien", "genre": "Sci-Fi" })).await;

    let (status, body) = send(
        &app,
        "POST",
        "/bookings",
        Some(json!({
            "userId": user_id,
            "movieId": movie_id,
            "seats": 4,
            "bookingDate": "2024-06-01",
            "status": "Booked",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let stored = store
        .find_booking_by_id(body["_id"].as_str().unwrap())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.user_id, user_id);
    assert_eq!(stored.movie_id, movie_id);
    assert_eq!(stored.seats, Some(Seats::Whole(4)));
    assert_eq!(stored.booking_date.as_deref(), Some("2024-06-01"));
    assert_eq!(stored.status.as_deref(), Some("Booked"));
}

#[tokio::test]
async fn test_movie_booking_totals() {
    let (_, app) = test_app();
    let user_id = create(&app, "/users", json!({ "name": "Ann" })).await;
    let a = create(&app, "/movies", json!({ "title": "Alien", "genre": "Sci-Fi" })).await;
    let b = create(&app, "/movies", json!({ "title": "Heat", "genre": "Crime" })).await;
    for _ in 0..3 {
        book(&app, &user_id, &a, 2, "Booked").await;
    }
    book(&app, &user_id, &b, 1, "Booked").await;

    let (status, body) = send(&app, "GET", "/analytics/movie-bookings", None).await;
    assert_eq!(status, StatusCode::OK);

    let rows = body.as_array().unwrap();
    assert_eq!(rows.len(), 2);
    let alien = rows.iter().find(|r| r["movieTitle"] == "Alien").unwrap();
    assert_eq!(alien["totalBookings"], 3);
    assert_eq!(alien["totalSeats"], 6);
    let heat = rows.iter().find(|r| r["movieTitle"] == "Heat").unwrap();
    assert_eq!(heat["totalBookings"], 1);
    assert_eq!(heat["totalSeats"], 1);
}

#[tokio::test]
async fn test_top_users_and_active_bookings() {
    let (_, app) = test_app();
    let ann = create(&app, "/users", json!({ "name": "Ann" })).await;
    let bob = create(&app, "/users", json!({ "name": "Bob" })).await;
    let movie = create(&app, "/movies", json!({ "title": "Alien", "genre": "Sci-Fi" })).await;

    book(&app, &ann, &movie, 1, "Booked").await;
    book(&app, &ann, &movie, 1, "booked").await;
    book(&app, &ann, &movie, 1, "Cancelled").await;
    book(&app, &bob, &movie, 2, "Booked").await;
    book(&app, &bob, &movie, 2, "Booked").await;

    let (status, body) = send(&app, "GET", "/analytics/top-users", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["userName"], "Ann");
    assert_eq!(body[0]["bookingCount"], 3);

    let (status, body) = send(&app, "GET", "/analytics/active-bookings", None).await;
    assert_eq!(status, StatusCode::OK);
    let rows = body.as_array().unwrap();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows.iter().filter(|r| r["userName"] == "Bob").count(), 2);
    assert!(rows.iter().all(|r| r["movieTitle"] == "Alien"));
}

#[tokio::test]
async fn test_genre_and_user_reports() {
    let (_, app) = test_app();
    let ann = create(&app, "/users", json!({ "name": "Ann" })).await;
    let alien = create(&app, "/movies", json!({ "title": "Alien", "genre": "Sci-Fi" })).await;
    let dune = create(&app, "/movies", json!({ "title": "Dune", "genre": "Sci-Fi" })).await;
    book(&app, &ann, &alien, 2, "Booked").await;
    book(&app, &ann, &dune, 3, "Booked").await;

    let (status, body) = send(&app, "GET", "/analytics/genre-wise-bookings", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([{ "_id": "Sci-Fi", "totalSeats": 5 }]));

    let (status, body) = send(&app, "GET", "/analytics/user-bookings", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["userName"], "Ann");
    assert_eq!(body[0]["bookings"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_reports_are_idempotent() {
    let (_, app) = test_app();
    let ann = create(&app, "/users", json!({ "name": "Ann" })).await;
    let movie = create(&app, "/movies", json!({ "title": "Alien", "genre": "Sci-Fi" })).await;
    book(&app, &ann, &movie, 2, "Booked").await;

    for uri in [
        "/analytics/movie-bookings",
        "/analytics/user-bookings",
        "/analytics/top-users",
        "/analytics/genre-wise-bookings",
        "/analytics/active-bookings",
    ] {
        let first = send(&app, "GET", uri, None).await;
        let second = send(&app, "GET", uri, None).await;
        assert_eq!(first.0, StatusCode::OK);
        assert_eq!(first, second, "{} changed between reads", uri);
    }
}
