//! Catalog seeding from the remote API's JSON shape.

use crate::food_actor::FoodError;
use crate::model::FoodCreate;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Invalid catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Failed to store food: {0}")]
    Store(#[from] FoodError),
}

/// Parses a JSON array of food items. Items may carry their own `id`.
pub fn parse_catalog(json: &str) -> Result<Vec<FoodCreate>, CatalogError> {
    Ok(serde_json::from_str(json)?)
}
