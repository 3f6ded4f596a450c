//! Screen configuration.

use crate::details::currency::CurrencyFormat;

/// How unselected extras appear in a submitted order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExtrasEncoding {
    /// One slot per extra, `null` where the quantity is zero.
    #[default]
    Placeholders,
    /// Selected extras only.
    Filtered,
}

/// Configuration for a [`FoodDetails`](crate::details::FoodDetails) screen.
#[derive(Debug, Clone, Default)]
pub struct DetailsConfig {
    pub currency: CurrencyFormat,
    pub extras_encoding: ExtrasEncoding,
}
