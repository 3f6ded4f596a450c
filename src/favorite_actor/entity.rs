//! ActorEntity implementation for [`Favorite`].
//!
//! Favorites are immutable snapshots of a food's public fields: no updates and no
//! custom actions.

use crate::framework::ActorEntity;
use crate::model::{Favorite, FoodId};
use async_trait::async_trait;

#[async_trait]
impl ActorEntity for Favorite {
    type Id = FoodId;
    type CreateParams = Favorite;
    type UpdateParams = ();
    type Action = ();
    type ActionResult = ();
    type Context = ();

    fn requested_id(params: &Favorite) -> Option<FoodId> {
        Some(params.id)
    }

    fn from_create_params(_id: FoodId, params: Favorite) -> Result<Self, String> {
        Ok(params)
    }

    async fn on_update(&mut self, _update: (), _ctx: &Self::Context) -> Result<(), String> {
        Ok(())
    }

    async fn handle_action(&mut self, _action: (), _ctx: &Self::Context) -> Result<(), String> {
        Ok(())
    }
}
