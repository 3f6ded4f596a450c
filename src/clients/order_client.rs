use crate::clients::actor_client::ActorClient;
use crate::framework::{FrameworkError, ResourceClient};
use crate::model::{Order, OrderCreate, OrderId};
use crate::order_actor::OrderError;
use async_trait::async_trait;
use tracing::{debug, info, instrument};

/// Client for interacting with the Order actor.
///
/// Pricing happens in the Order actor's `on_create` hook; a rejected draft comes
/// back as [`OrderError::ValidationError`].
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
}

impl OrderClient {
    pub fn new(inner: ResourceClient<Order>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self, order), fields(product_id = %order.product_id))]
    pub async fn create_order(&self, order: OrderCreate) -> Result<OrderId, OrderError> {
        debug!(?order, "create_order called");
        info!("Sending create_order to actor");

        self.inner.create(order).await.map_err(|e| match e {
            FrameworkError::Custom(msg) => OrderError::ValidationError(msg),
            e => OrderError::ActorCommunicationError(e.to_string()),
        })
    }
}

#[async_trait]
impl ActorClient<Order> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &ResourceClient<Order> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        OrderError::ActorCommunicationError(e.to_string())
    }
}
