use async_trait::async_trait;
use mongodb::bson::{doc, oid::ObjectId};
use mongodb::Collection;
use tracing::debug;

use cinebook_core::repository::BookingRepository;
use cinebook_core::CoreResult;
use cinebook_shared::{Booking, NewBooking};

use crate::database::{store_error, MongoClient, BOOKINGS};

pub struct MongoBookingRepository {
    collection: Collection<Booking>,
}

impl MongoBookingRepository {
    pub fn new(client: &MongoClient) -> Self {
        Self {
            collection: client.collection(BOOKINGS),
        }
    }
}

#[async_trait]
impl BookingRepository for MongoBookingRepository {
    async fn insert_booking(&self, booking: NewBooking) -> CoreResult<Booking> {
        let booking = booking.into_booking(ObjectId::new().to_hex());
        self.collection.insert_one(&booking).await.map_err(store_error)?;
        debug!("Inserted booking {} for user {}", booking.id, booking.user_id);
        Ok(booking)
    }

    async fn find_booking_by_id(&self, id: &str) -> CoreResult<Option<Booking>> {
        self.collection
            .find_one(doc! { "_id": id })
            .await
            .map_err(store_error)
    }
}
