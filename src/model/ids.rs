//! Type-safe identifiers shared by the stores and the screen.

use serde::{Deserialize, Serialize};
use std::fmt::Display;

macro_rules! numeric_id {
    ($(#[$meta:meta])* $name:ident, $prefix:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub u32);

        impl From<u32> for $name {
            fn from(id: u32) -> Self {
                Self(id)
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, concat!($prefix, "_{}"), self.0)
            }
        }
    };
}

numeric_id!(
    /// Identifier of a food item. Favorites are keyed by the same id.
    FoodId,
    "food"
);

numeric_id!(
    /// Identifier of an extra, unique within its food item.
    ExtraId,
    "extra"
);

numeric_id!(
    /// Identifier assigned by the order store.
    OrderId,
    "order"
);
