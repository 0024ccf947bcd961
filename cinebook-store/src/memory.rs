//! In-process store with the same report semantics as the MongoDB pipelines.
//!
//! Used by tests and by `database.backend = "memory"` for local runs. Data
//! lives only as long as the process.

use std::collections::HashMap;

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use tokio::sync::RwLock;

use cinebook_core::repository::{
    AnalyticsRepository, BookingRepository, MovieRepository, UserRepository,
};
use cinebook_core::CoreResult;
use cinebook_shared::{
    ActiveBooking, Booking, GenreSeatTotals, Movie, MovieBookingTotals, NewBooking, NewMovie,
    NewUser, Seats, TopUser, User, UserBookingEntry, UserBookingHistory,
};

#[derive(Default)]
pub struct MemoryStore {
    movies: RwLock<Vec<Movie>>,
    users: RwLock<Vec<User>>,
    bookings: RwLock<Vec<Booking>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn booking_count(&self) -> usize {
        self.bookings.read().await.len()
    }
}

fn new_id() -> String {
    ObjectId::new().to_hex()
}

/// Groups in order of first appearance.
fn group_by<'a, K, F>(bookings: &'a [Booking], key: F) -> Vec<(K, Vec<&'a Booking>)>
where
    K: std::hash::Hash + Eq + Clone,
    F: Fn(&'a Booking) -> Option<K>,
{
    let mut index: HashMap<K, usize> = HashMap::new();
    let mut groups: Vec<(K, Vec<&Booking>)> = Vec::new();

    for booking in bookings {
        let Some(k) = key(booking) else { continue };
        match index.get(&k) {
            Some(&i) => groups[i].1.push(booking),
            None => {
                index.insert(k.clone(), groups.len());
                groups.push((k, vec![booking]));
            }
        }
    }
    groups
}

fn seat_sum(bookings: &[&Booking]) -> Seats {
    bookings.iter().filter_map(|b| b.seats).sum()
}

fn find<'a, T>(items: &'a [T], id: &str, id_of: impl Fn(&T) -> &str) -> Option<&'a T> {
    items.iter().find(|item| id_of(item) == id)
}

pub(crate) fn movie_booking_totals(bookings: &[Booking], movies: &[Movie]) -> Vec<MovieBookingTotals> {
    group_by(bookings, |b| Some(b.movie_id.clone()))
        .into_iter()
        .filter_map(|(movie_id, group)| {
            let movie = find(movies, &movie_id, |m| m.id.as_str())?;
            Some(MovieBookingTotals {
                movie_title: movie.title.clone(),
                total_bookings: group.len() as i64,
                total_seats: seat_sum(&group),
                movie_id,
            })
        })
        .collect()
}

pub(crate) fn user_booking_history(
    bookings: &[Booking],
    users: &[User],
    movies: &[Movie],
) -> Vec<UserBookingHistory> {
    // Join first so bookings with a dangling reference never open a group
    let joined: Vec<(&Booking, &User, &Movie)> = bookings
        .iter()
        .filter_map(|b| {
            let user = find(users, &b.user_id, |u| u.id.as_str())?;
            let movie = find(movies, &b.movie_id, |m| m.id.as_str())?;
            Some((b, user, movie))
        })
        .collect();

    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut rows: Vec<UserBookingHistory> = Vec::new();

    for (booking, user, movie) in joined {
        let entry = UserBookingEntry {
            movie_title: movie.title.clone(),
            booking_date: booking.booking_date.clone(),
            seats: booking.seats,
            status: booking.status.clone(),
        };
        match index.get(booking.user_id.as_str()) {
            Some(&i) => rows[i].bookings.push(entry),
            None => {
                index.insert(booking.user_id.as_str(), rows.len());
                rows.push(UserBookingHistory {
                    user_id: booking.user_id.clone(),
                    user_name: user.name.clone(),
                    bookings: vec![entry],
                });
            }
        }
    }
    rows
}

pub(crate) fn top_users(bookings: &[Booking], users: &[User]) -> Vec<TopUser> {
    group_by(bookings, |b| Some(b.user_id.clone()))
        .into_iter()
        .filter(|(_, group)| group.len() > 2)
        .filter_map(|(user_id, group)| {
            let user = find(users, &user_id, |u| u.id.as_str())?;
            Some(TopUser {
                user_name: user.name.clone(),
                booking_count: group.len() as i64,
                user_id,
            })
        })
        .collect()
}

pub(crate) fn genre_seat_totals(bookings: &[Booking], movies: &[Movie]) -> Vec<GenreSeatTotals> {
    group_by(bookings, |b| {
        find(movies, &b.movie_id, |m| m.id.as_str()).map(|m| m.genre.clone())
    })
    .into_iter()
    .map(|(genre, group)| GenreSeatTotals {
        total_seats: seat_sum(&group),
        genre,
    })
    .collect()
}

pub(crate) fn active_bookings(
    bookings: &[Booking],
    users: &[User],
    movies: &[Movie],
) -> Vec<ActiveBooking> {
    bookings
        .iter()
        .filter(|b| b.status.as_deref() == Some("Booked"))
        .filter_map(|b| {
            let user = find(users, &b.user_id, |u| u.id.as_str())?;
            let movie = find(movies, &b.movie_id, |m| m.id.as_str())?;
            Some(ActiveBooking {
                booking_id: b.id.clone(),
                user_name: user.name.clone(),
                movie_title: movie.title.clone(),
                seats: b.seats,
                booking_date: b.booking_date.clone(),
            })
        })
        .collect()
}

#[async_trait]
impl MovieRepository for MemoryStore {
    async fn create_movie(&self, movie: NewMovie) -> CoreResult<Movie> {
        let movie = movie.into_movie(new_id());
        self.movies.write().await.push(movie.clone());
        Ok(movie)
    }

    async fn find_movie_by_id(&self, id: &str) -> CoreResult<Option<Movie>> {
        Ok(find(self.movies.read().await.as_slice(), id, |m| m.id.as_str()).cloned())
    }
}

#[async_trait]
impl UserRepository for MemoryStore {
    async fn create_user(&self, user: NewUser) -> CoreResult<User> {
        let user = user.into_user(new_id());
        self.users.write().await.push(user.clone());
        Ok(user)
    }

    async fn find_user_by_id(&self, id: &str) -> CoreResult<Option<User>> {
        Ok(find(self.users.read().await.as_slice(), id, |u| u.id.as_str()).cloned())
    }
}

#[async_trait]
impl BookingRepository for MemoryStore {
    async fn insert_booking(&self, booking: NewBooking) -> CoreResult<Booking> {
        let booking = booking.into_booking(new_id());
        self.bookings.write().await.push(booking.clone());
        Ok(booking)
    }

    async fn find_booking_by_id(&self, id: &str) -> CoreResult<Option<Booking>> {
        Ok(find(self.bookings.read().await.as_slice(), id, |b| b.id.as_str()).cloned())
    }
}

// Each report holds the read locks it needs for its whole computation, so it
// sees one consistent snapshot.
#[async_trait]
impl AnalyticsRepository for MemoryStore {
    async fn movie_booking_totals(&self) -> CoreResult<Vec<MovieBookingTotals>> {
        let bookings = self.bookings.read().await;
        let movies = self.movies.read().await;
        Ok(movie_booking_totals(&bookings, &movies))
    }

    async fn user_booking_history(&self) -> CoreResult<Vec<UserBookingHistory>> {
        let bookings = self.bookings.read().await;
        let users = self.users.read().await;
        let movies = self.movies.read().await;
        Ok(user_booking_history(&bookings, &users, &movies))
    }

    async fn top_users(&self) -> CoreResult<Vec<TopUser>> {
        let bookings = self.bookings.read().await;
        let users = self.users.read().await;
        Ok(top_users(&bookings, &users))
    }

    async fn genre_seat_totals(&self) -> CoreResult<Vec<GenreSeatTotals>> {
        let bookings = self.bookings.read().await;
        let movies = self.movies.read().await;
        Ok(genre_seat_totals(&bookings, &movies))
    }

    async fn active_bookings(&self) -> CoreResult<Vec<ActiveBooking>> {
        let bookings = self.bookings.read().await;
        let users = self.users.read().await;
        let movies = self.movies.read().await;
        Ok(active_bookings(&bookings, &users, &movies))
    }
}
