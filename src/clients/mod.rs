//! Type-safe wrappers around [`ResourceClient`](crate::framework::ResourceClient),
//! and the [`FoodApi`] seam the food details screen talks through.

pub mod actor_client;
pub mod api;
pub mod favorite_client;
pub mod food_client;
pub mod order_client;

pub use actor_client::ActorClient;
pub use api::*;
pub use favorite_client::*;
pub use food_client::*;
pub use order_client::*;
