use crate::model::{ExtraId, FoodId};
use serde::{Deserialize, Serialize};

/// A food item as served by the food store, extras included.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](crate::framework::ActorEntity) trait,
/// allowing it to be managed by a [`ResourceActor`](crate::framework::ResourceActor).
///
/// See [`impl ActorEntity for FoodItem`](crate::food_actor::entity) for details on:
/// - Creation parameters ([`FoodCreate`])
/// - Update parameters ([`FoodUpdate`])
/// - Custom actions ([`FoodAction`](crate::food_actor::FoodAction))
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodItem {
    pub id: FoodId,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: u32,
    pub image_url: String,
    pub thumbnail_url: String,
    #[serde(default)]
    pub extras: Vec<Extra>,
}

/// An optional add-on with its own unit value and adjustable quantity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Extra {
    pub id: ExtraId,
    pub name: String,
    pub value: f64,
    #[serde(default)]
    pub quantity: u32,
}

impl Extra {
    pub fn new(id: impl Into<ExtraId>, name: impl Into<String>, value: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            value,
            quantity: 0,
        }
    }

    /// Same extra with a different quantity.
    pub fn with_quantity(mut self, quantity: u32) -> Self {
        self.quantity = quantity;
        self
    }

    /// `value × quantity`, zero when nothing is selected.
    pub fn subtotal(&self) -> f64 {
        if self.quantity > 0 {
            self.value * f64::from(self.quantity)
        } else {
            0.0
        }
    }
}

/// Total of a draft: every selected extra plus `price × quantity`.
pub fn draft_total<'a>(price: f64, quantity: u32, extras: impl IntoIterator<Item = &'a Extra>) -> f64 {
    let extras_total: f64 = extras.into_iter().map(Extra::subtotal).sum();
    price * f64::from(quantity) + extras_total
}

/// Payload for seeding a food item into the store.
///
/// `id` is optional: catalogs loaded from the remote API carry their own ids.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodCreate {
    #[serde(default)]
    pub id: Option<FoodId>,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: u32,
    pub image_url: String,
    pub thumbnail_url: String,
    #[serde(default)]
    pub extras: Vec<Extra>,
}

/// Payload for updating an existing food item.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FoodUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
}
