//! Favorite store: one record per bookmarked food, keyed by the food id.

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::FavoriteClient;
use crate::framework::ResourceActor;
use crate::model::Favorite;

/// Creates a new Favorite actor and its client.
///
/// Favorites always carry their food id, so the generator is never consulted.
pub fn new(buffer_size: usize) -> (ResourceActor<Favorite>, FavoriteClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size, || crate::model::FoodId(0));
    let client = FavoriteClient::new(generic_client);

    (actor, client)
}
