//! # Favorite Client
//!
//! High-level API for the favorite store.
use crate::clients::actor_client::ActorClient;
use crate::favorite_actor::FavoriteError;
use crate::framework::{FrameworkError, ResourceClient};
use crate::model::{Favorite, FoodId};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Favorite actor.
#[derive(Clone)]
pub struct FavoriteClient {
    inner: ResourceClient<Favorite>,
}

impl FavoriteClient {
    pub fn new(inner: ResourceClient<Favorite>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Favorite> for FavoriteClient {
    type Error = FavoriteError;

    fn inner(&self) -> &ResourceClient<Favorite> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        FavoriteError::ActorCommunicationError(e.to_string())
    }
}

impl FavoriteClient {
    #[instrument(skip(self, favorite), fields(food_id = %favorite.id))]
    pub async fn add_favorite(&self, favorite: Favorite) -> Result<FoodId, FavoriteError> {
        debug!("Sending request");
        self.inner.create(favorite).await.map_err(|e| match e {
            FrameworkError::Conflict(id) => FavoriteError::AlreadyFavorite(id),
            e => FavoriteError::ActorCommunicationError(e.to_string()),
        })
    }

    #[instrument(skip(self))]
    pub async fn remove_favorite(&self, id: FoodId) -> Result<(), FavoriteError> {
        debug!("Sending request");
        self.inner.delete(id).await.map_err(|e| match e {
            FrameworkError::NotFound(id) => FavoriteError::NotFound(id),
            e => FavoriteError::ActorCommunicationError(e.to_string()),
        })
    }
}
