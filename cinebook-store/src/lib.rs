pub mod analytics_repo;
pub mod app_config;
pub mod booking_repo;
pub mod database;
pub mod memory;
pub mod movie_repo;
pub mod pipelines;
pub mod user_repo;

use std::sync::Arc;

use cinebook_core::repository::{
    AnalyticsRepository, BookingRepository, MovieRepository, UserRepository,
};

pub use analytics_repo::MongoAnalyticsRepository;
pub use booking_repo::MongoBookingRepository;
pub use database::MongoClient;
pub use memory::MemoryStore;
pub use movie_repo::MongoMovieRepository;
pub use user_repo::MongoUserRepository;

/// One handle per collection, backed by whichever store was configured.
#[derive(Clone)]
pub struct Repositories {
    pub movies: Arc<dyn MovieRepository>,
    pub users: Arc<dyn UserRepository>,
    pub bookings: Arc<dyn BookingRepository>,
    pub analytics: Arc<dyn AnalyticsRepository>,
}

impl Repositories {
    pub fn mongo(client: &MongoClient) -> Self {
        Self {
            movies: Arc::new(MongoMovieRepository::new(client)),
            users: Arc::new(MongoUserRepository::new(client)),
            bookings: Arc::new(MongoBookingRepository::new(client)),
            analytics: Arc::new(MongoAnalyticsRepository::new(client)),
        }
    }

    pub fn memory(store: Arc<MemoryStore>) -> Self {
        Self {
            movies: store.clone(),
            users: store.clone(),
            bookings: store.clone(),
            analytics: store,
        }
    }
}
