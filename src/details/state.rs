//! Screen state and the pure update functions behind every user action.
//!
//! Nothing here touches the network. The controller locks a [`DetailState`], applies
//! one [`DetailAction`], and reads derived values (total, order draft, view) back out.

use crate::details::config::ExtrasEncoding;
use crate::details::error::DetailsError;
use crate::model::{draft_total, Extra, ExtraId, FoodItem, OrderCreate};
use serde::{Deserialize, Serialize};

/// Whether the loaded food is bookmarked. Drives the header icon.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FavoriteState {
    Favorited,
    #[default]
    NotFavorited,
}

impl FavoriteState {
    pub fn toggled(self) -> Self {
        match self {
            FavoriteState::Favorited => FavoriteState::NotFavorited,
            FavoriteState::NotFavorited => FavoriteState::Favorited,
        }
    }

    pub fn is_favorite(self) -> bool {
        self == FavoriteState::Favorited
    }

    /// Name of the header icon for this state.
    pub fn icon_name(self) -> &'static str {
        match self {
            FavoriteState::Favorited => "favorite",
            FavoriteState::NotFavorited => "favorite-border",
        }
    }
}

impl From<bool> for FavoriteState {
    fn from(favorited: bool) -> Self {
        if favorited {
            FavoriteState::Favorited
        } else {
            FavoriteState::NotFavorited
        }
    }
}

/// A quantity edit triggered by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailAction {
    IncrementExtra(ExtraId),
    DecrementExtra(ExtraId),
    IncrementFood,
    DecrementFood,
}

/// Everything the screen shows, held for as long as the screen is open.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailState {
    /// The item as fetched. `None` until a load lands.
    pub food: Option<FoodItem>,
    /// Current extras, quantities included.
    pub extras: Vec<Extra>,
    pub favorite: FavoriteState,
    /// Base quantity, never below 1.
    pub food_quantity: u32,
}

impl Default for DetailState {
    fn default() -> Self {
        Self {
            food: None,
            extras: Vec::new(),
            favorite: FavoriteState::NotFavorited,
            food_quantity: 1,
        }
    }
}

impl DetailState {
    /// Fresh state for a fetched food.
    pub fn loaded(food: FoodItem) -> Self {
        Self {
            extras: food.extras.clone(),
            food: Some(food),
            ..Self::default()
        }
    }

    pub fn apply(&mut self, action: DetailAction) -> Result<(), DetailsError> {
        match action {
            DetailAction::IncrementExtra(id) => self.extras = increment_extra(&self.extras, id)?,
            DetailAction::DecrementExtra(id) => self.extras = decrement_extra(&self.extras, id)?,
            DetailAction::IncrementFood => self.food_quantity = increment_quantity(self.food_quantity),
            DetailAction::DecrementFood => self.food_quantity = decrement_quantity(self.food_quantity),
        }
        Ok(())
    }

    /// Running total: selected extras plus `price × food_quantity`.
    ///
    /// Zero before a food is loaded.
    pub fn total(&self) -> f64 {
        match &self.food {
            Some(food) => draft_total(food.price, self.food_quantity, &self.extras),
            None => 0.0,
        }
    }

    /// The order record for the current selection.
    pub fn order_draft(&self, encoding: ExtrasEncoding) -> Result<OrderCreate, DetailsError> {
        let food = self.food.as_ref().ok_or(DetailsError::NotLoaded)?;
        let extras = match encoding {
            ExtrasEncoding::Placeholders => self
                .extras
                .iter()
                .map(|extra| (extra.quantity > 0).then(|| extra.clone()))
                .collect(),
            ExtrasEncoding::Filtered => self
                .extras
                .iter()
                .filter(|extra| extra.quantity > 0)
                .cloned()
                .map(Some)
                .collect(),
        };
        Ok(OrderCreate {
            product_id: food.id,
            name: food.name.clone(),
            description: food.description.clone(),
            price: food.price,
            category: food.category,
            thumbnail_url: food.thumbnail_url.clone(),
            quantity: self.food_quantity,
            extras,
        })
    }
}

/// New extras list with `id`'s quantity raised by one.
pub fn increment_extra(extras: &[Extra], id: ExtraId) -> Result<Vec<Extra>, DetailsError> {
    update_extra(extras, id, |quantity| quantity.saturating_add(1))
}

/// New extras list with `id`'s quantity lowered by one, clamped at zero.
pub fn decrement_extra(extras: &[Extra], id: ExtraId) -> Result<Vec<Extra>, DetailsError> {
    update_extra(extras, id, |quantity| quantity.saturating_sub(1))
}

fn update_extra(extras: &[Extra], id: ExtraId, step: impl Fn(u32) -> u32) -> Result<Vec<Extra>, DetailsError> {
    if !extras.iter().any(|extra| extra.id == id) {
        return Err(DetailsError::ExtraNotFound(id));
    }
    Ok(extras
        .iter()
        .map(|extra| {
            if extra.id == id {
                extra.clone().with_quantity(step(extra.quantity))
            } else {
                extra.clone()
            }
        })
        .collect())
}

/// Base quantity plus one. A zero quantity is invalid and restarts at 1.
pub fn increment_quantity(quantity: u32) -> u32 {
    if quantity > 0 {
        quantity.saturating_add(1)
    } else {
        1
    }
}

/// Base quantity minus one, holding at 1.
pub fn decrement_quantity(quantity: u32) -> u32 {
    if quantity > 1 {
        quantity - 1
    } else {
        1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::FoodId;

    fn food() -> FoodItem {
        FoodItem {
            id: FoodId(1),
            name: "Ao molho".into(),
            description: "Macarrão ao molho branco".into(),
            price: 10.0,
            category: 1,
            image_url: "image".into(),
            thumbnail_url: "thumb".into(),
            extras: vec![Extra::new(1, "Bacon", 2.0), Extra::new(2, "Frango", 1.5)],
        }
    }

    #[test]
    fn extra_goes_up_and_back_down() {
        let extras = vec![Extra::new(1, "Bacon", 2.0).with_quantity(2)];
        let up = increment_extra(&extras, ExtraId(1)).unwrap();
        assert_eq!(up[0].quantity, 3);
        let down = decrement_extra(&up, ExtraId(1)).unwrap();
        assert_eq!(down, extras);

        let zero = vec![Extra::new(1, "Bacon", 2.0)];
        let up = increment_extra(&zero, ExtraId(1)).unwrap();
        assert_eq!(up[0].quantity, 1);
        assert_eq!(decrement_extra(&up, ExtraId(1)).unwrap()[0].quantity, 0);
    }

    #[test]
    fn decrement_clamps_at_zero() {
        let extras = vec![Extra::new(1, "Bacon", 2.0)];
        let down = decrement_extra(&extras, ExtraId(1)).unwrap();
        assert_eq!(down[0].quantity, 0);
    }

    #[test]
    fn only_the_matching_extra_changes() {
        let extras = vec![
            Extra::new(1, "Bacon", 2.0).with_quantity(1),
            Extra::new(2, "Frango", 1.5).with_quantity(4),
        ];
        let up = increment_extra(&extras, ExtraId(2)).unwrap();
        assert_eq!(up[0], extras[0]);
        assert_eq!(up[1].quantity, 5);
        assert_eq!(extras[1].quantity, 4);
    }

    #[test]
    fn unknown_extra_is_an_error() {
        let extras = vec![Extra::new(1, "Bacon", 2.0)];
        assert_eq!(
            increment_extra(&extras, ExtraId(9)),
            Err(DetailsError::ExtraNotFound(ExtraId(9)))
        );
        assert_eq!(
            decrement_extra(&[], ExtraId(1)),
            Err(DetailsError::ExtraNotFound(ExtraId(1)))
        );
    }

    #[test]
    fn food_quantity_saturates_at_one() {
        assert_eq!(increment_quantity(0), 1);
        assert_eq!(increment_quantity(1), 2);
        assert_eq!(decrement_quantity(2), 1);
        assert_eq!(decrement_quantity(1), 1);
        assert_eq!(decrement_quantity(0), 1);

        let mut state = DetailState::loaded(food());
        let actions = [
            DetailAction::DecrementFood,
            DetailAction::IncrementFood,
            DetailAction::DecrementFood,
            DetailAction::DecrementFood,
        ];
        for action in actions {
            state.apply(action).unwrap();
            assert!(state.food_quantity >= 1);
        }
        assert_eq!(state.food_quantity, 1);
    }

    #[test]
    fn total_matches_worked_example() {
        let mut state = DetailState::loaded(food());
        state.apply(DetailAction::IncrementFood).unwrap();
        for _ in 0..3 {
            state.apply(DetailAction::IncrementExtra(ExtraId(1))).unwrap();
        }
        assert_eq!(state.total(), 26.0);
        assert_eq!(DetailState::default().total(), 0.0);
    }

    #[test]
    fn order_draft_keeps_placeholders_or_filters() {
        let mut state = DetailState::loaded(food());
        state.apply(DetailAction::IncrementExtra(ExtraId(2))).unwrap();

        let draft = state.order_draft(ExtrasEncoding::Placeholders).unwrap();
        assert_eq!(draft.extras.len(), 2);
        assert!(draft.extras[0].is_none());
        assert_eq!(draft.extras[1].as_ref().map(|e| e.quantity), Some(1));
        assert_eq!(draft.quantity, 1);
        assert_eq!(draft.product_id, FoodId(1));

        let draft = state.order_draft(ExtrasEncoding::Filtered).unwrap();
        assert_eq!(draft.extras.len(), 1);

        assert_eq!(
            DetailState::default().order_draft(ExtrasEncoding::Placeholders),
            Err(DetailsError::NotLoaded)
        );
    }

    #[test]
    fn favorite_state_toggles_and_names_icons() {
        let state = FavoriteState::from(false);
        assert_eq!(state.icon_name(), "favorite-border");
        assert_eq!(state.toggled(), FavoriteState::Favorited);
        assert_eq!(state.toggled().icon_name(), "favorite");
        assert_eq!(state.toggled().toggled(), state);
        assert!(!state.is_favorite());
    }
}
