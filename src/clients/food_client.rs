//! # Food Client
//!
//! High-level API for the food store. Wraps a `ResourceClient<FoodItem>` and exposes
//! seeding, updates and draft quoting.
use crate::clients::actor_client::ActorClient;
use crate::food_actor::{FoodAction, FoodActionResult, FoodError};
use crate::framework::{FrameworkError, ResourceClient};
use crate::model::{Extra, FoodCreate, FoodId, FoodItem, FoodUpdate};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Food actor.
#[derive(Clone)]
pub struct FoodClient {
    inner: ResourceClient<FoodItem>,
}

impl FoodClient {
    pub fn new(inner: ResourceClient<FoodItem>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<FoodItem> for FoodClient {
    type Error = FoodError;

    fn inner(&self) -> &ResourceClient<FoodItem> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        FoodError::ActorCommunicationError(e.to_string())
    }
}

impl FoodClient {
    #[instrument(skip(self, params), fields(name = %params.name))]
    pub async fn create_food(&self, params: FoodCreate) -> Result<FoodId, FoodError> {
        debug!("Sending request");
        self.inner
            .create(params)
            .await
            .map_err(|e| FoodError::ActorCommunicationError(e.to_string()))
    }

    #[instrument(skip(self))]
    pub async fn update_food(&self, id: FoodId, update: FoodUpdate) -> Result<FoodItem, FoodError> {
        debug!("Sending request");
        self.inner
            .update(id, update)
            .await
            .map_err(|e| FoodError::ActorCommunicationError(e.to_string()))
    }

    /// Price a draft against the stored item.
    ///
    /// Returns the total for `quantity` units plus the selected `extras`.
    #[instrument(skip(self, extras), fields(extras = extras.len()))]
    pub async fn quote(&self, id: FoodId, quantity: u32, extras: Vec<Extra>) -> Result<f64, FoodError> {
        debug!("Quoting draft");
        match self.inner.perform_action(id, FoodAction::Quote { quantity, extras }).await {
            Ok(FoodActionResult::Quote(total)) => Ok(total),
            Err(FrameworkError::NotFound(id)) => Err(FoodError::QuoteRejected(format!("Food not found: {}", id))),
            Err(FrameworkError::Custom(msg)) => Err(FoodError::QuoteRejected(msg)),
            Err(e) => Err(FoodError::ActorCommunicationError(e.to_string())),
        }
    }
}
