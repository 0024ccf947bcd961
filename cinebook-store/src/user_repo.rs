use async_trait::async_trait;
use mongodb::bson::{doc, oid::ObjectId};
use mongodb::Collection;
use tracing::debug;

use cinebook_core::repository::UserRepository;
use cinebook_core::CoreResult;
use cinebook_shared::{NewUser, User};

use crate::database::{store_error, MongoClient, USERS};

pub struct MongoUserRepository {
    collection: Collection<User>,
}

impl MongoUserRepository {
    pub fn new(client: &MongoClient) -> Self {
        Self {
            collection: client.collection(USERS),
        }
    }
}

#[async_trait]
impl UserRepository for MongoUserRepository {
    async fn create_user(&self, user: NewUser) -> CoreResult<User> {
        let user = user.into_user(ObjectId::new().to_hex());
        self.collection.insert_one(&user).await.map_err(store_error)?;
        debug!("Inserted user {}", user.id);
        Ok(user)
    }

    async fn find_user_by_id(&self, id: &str) -> CoreResult<Option<User>> {
        self.collection
            .find_one(doc! { "_id": id })
            .await
            .map_err(store_error)
    }
}
