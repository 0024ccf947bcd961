use async_trait::async_trait;
use mongodb::bson::{doc, oid::ObjectId};
use mongodb::Collection;
use tracing::debug;

use cinebook_core::repository::MovieRepository;
use cinebook_core::CoreResult;
use cinebook_shared::{Movie, NewMovie};

use crate::database::{store_error, MongoClient, MOVIES};

pub struct MongoMovieRepository {
    collection: Collection<Movie>,
}

impl MongoMovieRepository {
    pub fn new(client: &MongoClient) -> Self {
        Self {
            collection: client.collection(MOVIES),
        }
    }
}

#[async_trait]
impl MovieRepository for MongoMovieRepository {
    async fn create_movie(&self, movie: NewMovie) -> CoreResult<Movie> {
        let movie = movie.into_movie(ObjectId::new().to_hex());
        self.collection.insert_one(&movie).await.map_err(store_error)?;
        debug!("Inserted movie {}", movie.id);
        Ok(movie)
    }

    async fn find_movie_by_id(&self, id: &str) -> CoreResult<Option<Movie>> {
        self.collection
            .find_one(doc! { "_id": id })
            .await
            .map_err(store_error)
    }
}
