//! Order store: submitted orders, priced against the food store on creation.

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::OrderClient;
use crate::framework::ResourceActor;
use crate::model::{Order, OrderId};
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

/// Creates a new Order actor and its client.
///
/// The actor needs a [`FoodClient`](crate::clients::FoodClient) as its run context.
pub fn new(buffer_size: usize) -> (ResourceActor<Order>, OrderClient) {
    let order_id_counter = Arc::new(AtomicU32::new(1));
    let next_order_id = move || OrderId(order_id_counter.fetch_add(1, Ordering::SeqCst));

    let (actor, generic_client) = ResourceActor::new(buffer_size, next_order_id);
    let client = OrderClient::new(generic_client);

    (actor, client)
}
