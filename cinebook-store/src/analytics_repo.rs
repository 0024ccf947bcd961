use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::{from_document, Document};
use mongodb::Collection;
use serde::de::DeserializeOwned;
use tracing::debug;

use cinebook_core::repository::AnalyticsRepository;
use cinebook_core::{CoreError, CoreResult};
use cinebook_shared::{
    ActiveBooking, GenreSeatTotals, MovieBookingTotals, TopUser, UserBookingHistory,
};

use crate::database::{store_error, MongoClient, BOOKINGS};
use crate::pipelines;

pub struct MongoAnalyticsRepository {
    bookings: Collection<Document>,
}

impl MongoAnalyticsRepository {
    pub fn new(client: &MongoClient) -> Self {
        Self {
            bookings: client.collection(BOOKINGS),
        }
    }

    async fn run<T: DeserializeOwned>(&self, report: &str, pipeline: Vec<Document>) -> CoreResult<Vec<T>> {
        let cursor = self.bookings.aggregate(pipeline).await.map_err(store_error)?;
        let docs: Vec<Document> = cursor.try_collect().await.map_err(store_error)?;
        debug!("Report {} returned {} rows", report, docs.len());

        docs.into_iter()
            .map(|d| {
                from_document(d).map_err(|e| {
                    CoreError::Store(format!("Malformed {} row: {}", report, e))
                })
            })
            .collect()
    }
}

#[async_trait]
impl AnalyticsRepository for MongoAnalyticsRepository {
    async fn movie_booking_totals(&self) -> CoreResult<Vec<MovieBookingTotals>> {
        self.run("movie-bookings", pipelines::movie_booking_totals()).await
    }

    async fn user_booking_history(&self) -> CoreResult<Vec<UserBookingHistory>> {
        self.run("user-bookings", pipelines::user_booking_history()).await
    }

    async fn top_users(&self) -> CoreResult<Vec<TopUser>> {
        self.run("top-users", pipelines::top_users()).await
    }

    async fn genre_seat_totals(&self) -> CoreResult<Vec<GenreSeatTotals>> {
        self.run("genre-wise-bookings", pipelines::genre_seat_totals()).await
    }

    async fn active_bookings(&self) -> CoreResult<Vec<ActiveBooking>> {
        self.run("active-bookings", pipelines::active_bookings()).await
    }
}
