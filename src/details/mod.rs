//! The food details screen: one food item, its extras, the running total, the
//! favorite flag and order submission.
//!
//! - [`state`] holds the pure update functions, testable without a runtime.
//! - [`controller`] wires them to the remote [`FoodApi`](crate::clients::FoodApi).
//! - [`view`] turns state into what the renderer draws.

pub mod config;
pub mod controller;
pub mod currency;
pub mod error;
pub mod state;
pub mod view;

pub use config::*;
pub use controller::*;
pub use currency::*;
pub use error::*;
pub use state::*;
pub use view::*;
