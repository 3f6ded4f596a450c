//! Render-ready snapshot of the screen, handed to the rendering collaborator.

use crate::details::currency::CurrencyFormat;
use crate::details::state::{DetailState, FavoriteState};
use crate::model::ExtraId;

#[derive(Debug, Clone, PartialEq)]
pub struct ExtraRow {
    pub id: ExtraId,
    pub name: String,
    /// Shown only when at least one is selected.
    pub quantity: Option<u32>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DetailsView {
    pub name: String,
    pub description: String,
    pub image_url: String,
    pub unit_price: String,
    pub extras: Vec<ExtraRow>,
    pub food_quantity: u32,
    pub total: String,
    pub favorite: FavoriteState,
}

impl DetailState {
    /// Snapshot for rendering, `None` until a food is loaded.
    pub fn view(&self, currency: &CurrencyFormat) -> Option<DetailsView> {
        let food = self.food.as_ref()?;
        Some(DetailsView {
            name: food.name.clone(),
            description: food.description.clone(),
            image_url: food.image_url.clone(),
            unit_price: currency.format(food.price),
            extras: self
                .extras
                .iter()
                .map(|extra| ExtraRow {
                    id: extra.id,
                    name: extra.name.clone(),
                    quantity: (extra.quantity > 0).then_some(extra.quantity),
                })
                .collect(),
            food_quantity: self.food_quantity,
            total: currency.format(self.total()),
            favorite: self.favorite,
        })
    }
}
