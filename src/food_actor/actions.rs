//! Custom actions for the Food actor.
//!
//! These are handled by [`ActorEntity::handle_action`](crate::framework::ActorEntity::handle_action)
//! on [`FoodItem`](crate::model::FoodItem).

use crate::model::Extra;

/// Custom actions for food items.
#[derive(Debug, Clone)]
pub enum FoodAction {
    /// Prices a draft against the stored item.
    ///
    /// Only the ids and quantities of `extras` are trusted; unit values come from
    /// the store.
    ///
    /// # Errors
    /// Fails if the quantity is zero or an extra does not belong to the item.
    Quote { quantity: u32, extras: Vec<Extra> },
}

/// Results from FoodActions - variants match 1:1 with FoodAction
#[derive(Debug, Clone, PartialEq)]
pub enum FoodActionResult {
    Quote(f64),
}
