//! ActorEntity implementation for [`Order`].
//!
//! The order store depends on the food store: `on_create` asks it to quote the
//! submitted draft and keeps the quoted total. A draft the food store cannot price
//! is rejected and never stored.

use crate::clients::FoodClient;
use crate::framework::ActorEntity;
use crate::model::{Order, OrderCreate, OrderId};
use async_trait::async_trait;
use tracing::debug;

#[async_trait]
impl ActorEntity for Order {
    type Id = OrderId;
    type CreateParams = OrderCreate;
    type UpdateParams = ();
    type Action = ();
    type ActionResult = ();
    type Context = FoodClient;

    fn from_create_params(id: OrderId, params: OrderCreate) -> Result<Self, String> {
        if params.quantity == 0 {
            return Err(format!("Quantity for {} must be at least 1", params.product_id));
        }
        Ok(Self::new(id, params))
    }

    async fn on_create(&mut self, food_client: &FoodClient) -> Result<(), String> {
        let selected = self.extras.iter().flatten().cloned().collect();
        let total = food_client
            .quote(self.product_id, self.quantity, selected)
            .await
            .map_err(|e| e.to_string())?;
        debug!(order_id = %self.id, total, "Order quoted");
        self.total = total;
        Ok(())
    }

    async fn on_update(&mut self, _update: (), _ctx: &FoodClient) -> Result<(), String> {
        Ok(())
    }

    async fn handle_action(&mut self, _action: (), _ctx: &FoodClient) -> Result<(), String> {
        Ok(())
    }
}
