//! Pure data structures (DTOs) for the food details domain.
//!
//! The stored types implement the [`ActorEntity`](crate::framework::ActorEntity) trait
//! in their store modules ([`food_actor`](crate::food_actor),
//! [`favorite_actor`](crate::favorite_actor), [`order_actor`](crate::order_actor)).

pub mod favorite;
pub mod food;
pub mod ids;
pub mod order;

pub use favorite::*;
pub use food::*;
pub use ids::*;
pub use order::*;
