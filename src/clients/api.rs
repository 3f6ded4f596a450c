//! # Remote API seam
//!
//! The food details screen never talks to a store directly. It goes through
//! [`FoodApi`], which names the five remote calls the screen makes. [`StoreApi`]
//! implements it over the in-process store clients; tests plug in scripted fakes.

use crate::clients::{ActorClient, FavoriteClient, FoodClient, OrderClient};
use crate::favorite_actor::FavoriteError;
use crate::food_actor::FoodError;
use crate::model::{Favorite, FoodId, FoodItem, OrderCreate, OrderId};
use crate::order_actor::OrderError;
use async_trait::async_trait;
use thiserror::Error;

/// Failure of a remote call, whichever store it came from.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ApiError {
    #[error("Food not found: {0}")]
    FoodNotFound(FoodId),

    #[error(transparent)]
    Food(#[from] FoodError),

    #[error(transparent)]
    Favorite(#[from] FavoriteError),

    #[error(transparent)]
    Order(#[from] OrderError),
}

/// The remote calls the food details screen depends on.
#[async_trait]
pub trait FoodApi: Send + Sync + 'static {
    /// Fetch one food item, extras included.
    async fn get_food(&self, id: FoodId) -> Result<FoodItem, ApiError>;

    /// Fetch the caller's favorites.
    async fn list_favorites(&self) -> Result<Vec<Favorite>, ApiError>;

    async fn add_favorite(&self, favorite: Favorite) -> Result<(), ApiError>;

    async fn remove_favorite(&self, id: FoodId) -> Result<(), ApiError>;

    /// Submit an order, returning the id the order store assigned.
    async fn create_order(&self, order: OrderCreate) -> Result<OrderId, ApiError>;
}

/// [`FoodApi`] backed by the store actors.
#[derive(Clone)]
pub struct StoreApi {
    pub food_client: FoodClient,
    pub favorite_client: FavoriteClient,
    pub order_client: OrderClient,
}

#[async_trait]
impl FoodApi for StoreApi {
    async fn get_food(&self, id: FoodId) -> Result<FoodItem, ApiError> {
        self.food_client.get(id).await?.ok_or(ApiError::FoodNotFound(id))
    }

    async fn list_favorites(&self) -> Result<Vec<Favorite>, ApiError> {
        Ok(self.favorite_client.list().await?)
    }

    async fn add_favorite(&self, favorite: Favorite) -> Result<(), ApiError> {
        self.favorite_client.add_favorite(favorite).await?;
        Ok(())
    }

    async fn remove_favorite(&self, id: FoodId) -> Result<(), ApiError> {
        Ok(self.favorite_client.remove_favorite(id).await?)
    }

    async fn create_order(&self, order: OrderCreate) -> Result<OrderId, ApiError> {
        Ok(self.order_client.create_order(order).await?)
    }
}
