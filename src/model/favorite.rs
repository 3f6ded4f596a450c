use crate::model::{FoodId, FoodItem};
use serde::{Deserialize, Serialize};

/// A bookmarked food item: the food's public fields, without extras.
///
/// The favorite store keys records by the food id, so a food can only be
/// favorited once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Favorite {
    pub id: FoodId,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: u32,
    pub image_url: String,
    pub thumbnail_url: String,
}

impl From<&FoodItem> for Favorite {
    fn from(food: &FoodItem) -> Self {
        Self {
            id: food.id,
            name: food.name.clone(),
            description: food.description.clone(),
            price: food.price,
            category: food.category,
            image_url: food.image_url.clone(),
            thumbnail_url: food.thumbnail_url.clone(),
        }
    }
}
