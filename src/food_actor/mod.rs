//! Food store: catalog items with their extras, plus draft quoting.

mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::FoodClient;
use crate::framework::ResourceActor;
use crate::model::{FoodId, FoodItem};
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

/// Creates a new Food actor and its client.
///
/// Items seeded without an explicit id get ids counting up from 1.
pub fn new(buffer_size: usize) -> (ResourceActor<FoodItem>, FoodClient) {
    let food_id_counter = Arc::new(AtomicU32::new(1));
    let next_food_id = move || FoodId(food_id_counter.fetch_add(1, Ordering::SeqCst));

    let (actor, generic_client) = ResourceActor::new(buffer_size, next_food_id);
    let client = FoodClient::new(generic_client);

    (actor, client)
}
