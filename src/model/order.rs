use crate::model::{Extra, FoodId, OrderId};
use serde::{Deserialize, Serialize};

/// The order record the screen submits.
///
/// `extras` keeps one slot per extra shown on the screen; unselected extras are
/// `None` (serialized as `null`) unless the screen is configured to filter them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderCreate {
    pub product_id: FoodId,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: u32,
    pub thumbnail_url: String,
    pub quantity: u32,
    pub extras: Vec<Option<Extra>>,
}

impl OrderCreate {
    /// The extras actually selected, placeholders skipped.
    pub fn selected_extras(&self) -> impl Iterator<Item = &Extra> {
        self.extras.iter().flatten()
    }
}

/// A stored order.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](crate::framework::ActorEntity) trait,
/// see [`order_actor`](crate::order_actor). `total` is filled in by the store from the
/// food store's quote, never taken from the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub product_id: FoodId,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: u32,
    pub thumbnail_url: String,
    pub quantity: u32,
    pub extras: Vec<Option<Extra>>,
    pub total: f64,
}

impl Order {
    /// Builds a stored order from the submitted record. The total starts at zero
    /// until the store has quoted it.
    pub fn new(id: OrderId, record: OrderCreate) -> Self {
        Self {
            id,
            product_id: record.product_id,
            name: record.name,
            description: record.description,
            price: record.price,
            category: record.category,
            thumbnail_url: record.thumbnail_url,
            quantity: record.quantity,
            extras: record.extras,
            total: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn placeholders_serialize_as_null() {
        let record = OrderCreate {
            product_id: FoodId(1),
            name: "Ao molho".into(),
            description: "Macarrão".into(),
            price: 19.9,
            category: 1,
            thumbnail_url: "thumb".into(),
            quantity: 2,
            extras: vec![None, Some(Extra::new(2, "Bacon", 1.5).with_quantity(1))],
        };

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(
            value["extras"],
            json!([null, { "id": 2, "name": "Bacon", "value": 1.5, "quantity": 1 }])
        );
        assert_eq!(value["product_id"], json!(1));
        assert_eq!(record.selected_extras().count(), 1);
    }
}
