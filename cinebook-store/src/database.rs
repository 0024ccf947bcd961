use mongodb::bson::doc;
use mongodb::{Client, Collection, Database};
use tracing::info;

use cinebook_core::CoreError;

pub const MOVIES: &str = "movies";
pub const USERS: &str = "users";
pub const BOOKINGS: &str = "bookings";

/// Connection handle owned by the process for its whole lifetime.
#[derive(Clone)]
pub struct MongoClient {
    pub db: Database,
}

impl MongoClient {
    pub async fn new(connection_string: &str, db_name: &str) -> Result<Self, mongodb::error::Error> {
        let client = Client::with_uri_str(connection_string).await?;
        let db = client.database(db_name);

        // The driver connects lazily; ping so startup fails fast
        db.run_command(doc! { "ping": 1 }).await?;
        info!("Connected to MongoDB database {}", db_name);

        Ok(Self { db })
    }

    pub fn collection<T: Send + Sync>(&self, name: &str) -> Collection<T> {
        self.db.collection(name)
    }
}

pub(crate) fn store_error(err: mongodb::error::Error) -> CoreError {
    tracing::error!("MongoDB operation failed: {}", err);
    CoreError::Store(err.to_string())
}
