//! ActorEntity implementation for [`FoodItem`].
//!
//! Food items are seeded with the ids the catalog carries, can have their display
//! fields and price updated, and answer [`FoodAction::Quote`] for the order store.

use super::actions::{FoodAction, FoodActionResult};
use crate::framework::ActorEntity;
use crate::model::{draft_total, Extra, FoodCreate, FoodId, FoodItem, FoodUpdate};
use async_trait::async_trait;

#[async_trait]
impl ActorEntity for FoodItem {
    type Id = FoodId;
    type CreateParams = FoodCreate;
    type UpdateParams = FoodUpdate;
    type Action = FoodAction;
    type ActionResult = FoodActionResult;
    type Context = ();

    fn requested_id(params: &FoodCreate) -> Option<FoodId> {
        params.id
    }

    fn from_create_params(id: FoodId, params: FoodCreate) -> Result<Self, String> {
        if params.price < 0.0 {
            return Err(format!("Negative price for {}: {}", id, params.price));
        }
        Ok(Self {
            id,
            name: params.name,
            description: params.description,
            price: params.price,
            category: params.category,
            image_url: params.image_url,
            thumbnail_url: params.thumbnail_url,
            extras: params.extras,
        })
    }

    async fn on_update(&mut self, update: FoodUpdate, _ctx: &Self::Context) -> Result<(), String> {
        if let Some(price) = update.price {
            if price < 0.0 {
                return Err(format!("Negative price for {}: {}", self.id, price));
            }
            self.price = price;
        }
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        Ok(())
    }

    async fn handle_action(&mut self, action: FoodAction, _ctx: &Self::Context) -> Result<FoodActionResult, String> {
        match action {
            FoodAction::Quote { quantity, extras } => {
                if quantity == 0 {
                    return Err(format!("Quantity for {} must be at least 1", self.id));
                }
                let mut priced = Vec::with_capacity(extras.len());
                for requested in extras {
                    let known = self
                        .extras
                        .iter()
                        .find(|extra| extra.id == requested.id)
                        .ok_or_else(|| format!("{} does not belong to {}", requested.id, self.id))?;
                    priced.push(Extra {
                        quantity: requested.quantity,
                        ..known.clone()
                    });
                }
                Ok(FoodActionResult::Quote(draft_total(self.price, quantity, &priced)))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::{FrameworkError, ResourceActor};

    fn pasta() -> FoodCreate {
        FoodCreate {
            id: Some(FoodId(1)),
            name: "Ao molho".into(),
            description: "Macarrão ao molho branco".into(),
            price: 10.0,
            category: 1,
            image_url: "image".into(),
            thumbnail_url: "thumb".into(),
            extras: vec![Extra::new(1, "Bacon", 2.0), Extra::new(2, "Frango", 1.5)],
        }
    }

    #[tokio::test]
    async fn quote_uses_stored_values() {
        let (actor, client) = ResourceActor::<FoodItem>::new(4, || FoodId(99));
        tokio::spawn(actor.run(()));
        let id = client.create(pasta()).await.unwrap();

        // Caller-side values are ignored, only quantities count.
        let extras = vec![Extra::new(1, "Bacon", 100.0).with_quantity(3)];
        let quote = client.perform_action(id, FoodAction::Quote { quantity: 2, extras }).await.unwrap();
        assert_eq!(quote, FoodActionResult::Quote(26.0));
    }

    #[tokio::test]
    async fn quote_rejects_foreign_extra_and_zero_quantity() {
        let (actor, client) = ResourceActor::<FoodItem>::new(4, || FoodId(99));
        tokio::spawn(actor.run(()));
        let id = client.create(pasta()).await.unwrap();

        let foreign = vec![Extra::new(9, "Queijo", 1.0).with_quantity(1)];
        let result = client.perform_action(id, FoodAction::Quote { quantity: 1, extras: foreign }).await;
        assert_eq!(
            result,
            Err(FrameworkError::Custom("extra_9 does not belong to food_1".into()))
        );

        let result = client.perform_action(id, FoodAction::Quote { quantity: 0, extras: vec![] }).await;
        assert!(matches!(result, Err(FrameworkError::Custom(_))));
    }

    #[tokio::test]
    async fn negative_price_is_rejected() {
        let (actor, client) = ResourceActor::<FoodItem>::new(4, || FoodId(99));
        tokio::spawn(actor.run(()));
        let id = client.create(pasta()).await.unwrap();

        let update = FoodUpdate {
            price: Some(-1.0),
            ..FoodUpdate::default()
        };
        assert!(client.update(id, update).await.is_err());
        assert_eq!(client.get(id).await.unwrap().unwrap().price, 10.0);
    }
}
