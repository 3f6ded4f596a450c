//! # Food Details Controller
//!
//! [`FoodDetails`] owns the screen state and runs the remote calls behind it.
//!
//! ## Generations
//!
//! Every load bumps a generation counter stored next to the state. A load captures
//! the counter before its first remote call and applies each response only if the
//! counter has not moved since, so a slow response for a food the user already
//! navigated away from is discarded. [`FoodDetails::leave`] bumps it too.
//!
//! ## Favorites
//!
//! Toggling flips the flag immediately and hands the remote call to a per-screen
//! worker task. The worker runs favorite calls one at a time in toggle order, so
//! "add" always reaches the store before the "remove" that followed it. An add
//! answered with "already a favorite" or a remove answered with "not found" counts
//! as done. Any other failure rolls the flag back if the screen still shows the
//! value that call set.
//!
//! The state lock is a `std::sync::Mutex` and is never held across an `.await`.

use crate::clients::{ApiError, FoodApi};
use crate::favorite_actor::FavoriteError;
use crate::details::config::DetailsConfig;
use crate::details::error::DetailsError;
use crate::details::state::{decrement_quantity, increment_quantity, DetailAction, DetailState, FavoriteState};
use crate::details::view::DetailsView;
use crate::model::{ExtraId, Favorite, FoodId, OrderId};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, instrument, warn};

/// How a [`FoodDetails::load`] call ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Food and favorite flag were applied.
    Loaded,
    /// The id was already current; nothing was fetched.
    Unchanged,
    /// Another load or a `leave` superseded this one; its responses were dropped.
    Stale,
}

struct Screen {
    generation: u64,
    food_id: Option<FoodId>,
    state: DetailState,
}

enum FavoriteRequest {
    Add(Favorite),
    Remove(FoodId),
}

struct FavoriteCommand {
    request: FavoriteRequest,
    generation: u64,
    prior: FavoriteState,
    respond_to: oneshot::Sender<Result<FavoriteState, DetailsError>>,
}

/// An optimistic favorite toggle whose remote call may still be running.
///
/// Dropping it leaves the call running; the outcome is then only visible through
/// the screen state.
#[must_use = "the toggle's remote outcome is only reported through `settled`"]
pub struct PendingToggle {
    optimistic: FavoriteState,
    response: oneshot::Receiver<Result<FavoriteState, DetailsError>>,
}

impl PendingToggle {
    /// The state shown right after the toggle.
    pub fn optimistic(&self) -> FavoriteState {
        self.optimistic
    }

    /// Waits for the remote call.
    pub async fn settled(self) -> Result<FavoriteState, DetailsError> {
        self.response.await.map_err(|_| DetailsError::WorkerStopped)?
    }
}

/// The food details screen.
///
/// Cheap to clone; clones share state. Must be created inside a Tokio runtime.
pub struct FoodDetails<A: FoodApi> {
    api: Arc<A>,
    config: Arc<DetailsConfig>,
    screen: Arc<Mutex<Screen>>,
    favorites: mpsc::UnboundedSender<FavoriteCommand>,
}

impl<A: FoodApi> Clone for FoodDetails<A> {
    fn clone(&self) -> Self {
        Self {
            api: self.api.clone(),
            config: self.config.clone(),
            screen: self.screen.clone(),
            favorites: self.favorites.clone(),
        }
    }
}

impl<A: FoodApi> FoodDetails<A> {
    pub fn new(api: A, config: DetailsConfig) -> Self {
        let api = Arc::new(api);
        let screen = Arc::new(Mutex::new(Screen {
            generation: 0,
            food_id: None,
            state: DetailState::default(),
        }));
        let (favorites, commands) = mpsc::unbounded_channel();
        tokio::spawn(run_favorite_worker(api.clone(), screen.clone(), commands));

        Self {
            api,
            config: Arc::new(config),
            screen,
            favorites,
        }
    }

    fn lock(&self) -> MutexGuard<'_, Screen> {
        lock_screen(&self.screen)
    }

    /// Loads `id` into the screen: the food first, then the favorite flag.
    ///
    /// Loading the id already on screen does nothing. Loading another id resets the
    /// screen before fetching.
    #[instrument(skip(self), fields(food_id = %id))]
    pub async fn load(&self, id: FoodId) -> Result<LoadOutcome, DetailsError> {
        let generation = {
            let mut screen = self.lock();
            if screen.food_id == Some(id) {
                debug!("Already on screen");
                return Ok(LoadOutcome::Unchanged);
            }
            screen.generation += 1;
            screen.food_id = Some(id);
            screen.state = DetailState::default();
            screen.generation
        };
        info!(generation, "Loading food");

        let food = match self.api.get_food(id).await {
            Ok(food) => food,
            Err(e) => {
                let mut screen = self.lock();
                if screen.generation != generation {
                    return Ok(LoadOutcome::Stale);
                }
                // Let the same id be retried.
                screen.food_id = None;
                warn!(error = %e, "Food fetch failed");
                return Err(DetailsError::LoadFailed(e));
            }
        };

        {
            let mut screen = self.lock();
            if screen.generation != generation {
                debug!(generation, current = screen.generation, "Dropping stale food");
                return Ok(LoadOutcome::Stale);
            }
            screen.state = DetailState::loaded(food);
        }

        let favorites = self.api.list_favorites().await;

        let mut screen = self.lock();
        if screen.generation != generation {
            debug!(generation, current = screen.generation, "Dropping stale favorites");
            return Ok(LoadOutcome::Stale);
        }
        let favorites = match favorites {
            Ok(favorites) => favorites,
            Err(e) => {
                // The flag is unknown; let the same id be loaded again.
                screen.food_id = None;
                warn!(error = %e, "Favorites fetch failed");
                return Err(DetailsError::LoadFailed(e));
            }
        };
        screen.state.favorite = FavoriteState::from(favorites.iter().any(|favorite| favorite.id == id));
        info!(favorite = screen.state.favorite.is_favorite(), "Food loaded");
        Ok(LoadOutcome::Loaded)
    }

    /// Navigation away: clears the screen and drops any response still in flight.
    pub fn leave(&self) {
        let mut screen = self.lock();
        screen.generation += 1;
        screen.food_id = None;
        screen.state = DetailState::default();
        debug!(generation = screen.generation, "Left screen");
    }

    /// Applies one quantity edit.
    pub fn apply(&self, action: DetailAction) -> Result<(), DetailsError> {
        let mut screen = self.lock();
        screen.state.apply(action).inspect_err(|e| warn!(?action, error = %e, "Edit rejected"))
    }

    pub fn increment_extra(&self, id: ExtraId) -> Result<(), DetailsError> {
        self.apply(DetailAction::IncrementExtra(id))
    }

    pub fn decrement_extra(&self, id: ExtraId) -> Result<(), DetailsError> {
        self.apply(DetailAction::DecrementExtra(id))
    }

    pub fn increment_food(&self) {
        let mut screen = self.lock();
        screen.state.food_quantity = increment_quantity(screen.state.food_quantity);
    }

    pub fn decrement_food(&self) {
        let mut screen = self.lock();
        screen.state.food_quantity = decrement_quantity(screen.state.food_quantity);
    }

    pub fn total(&self) -> f64 {
        self.lock().state.total()
    }

    pub fn favorite(&self) -> FavoriteState {
        self.lock().state.favorite
    }

    /// A copy of the current state.
    pub fn state(&self) -> DetailState {
        self.lock().state.clone()
    }

    pub fn view(&self) -> Option<DetailsView> {
        self.lock().state.view(&self.config.currency)
    }

    /// Flips the favorite flag now and queues the matching remote call.
    pub fn toggle_favorite(&self) -> Result<PendingToggle, DetailsError> {
        let (respond_to, response) = oneshot::channel();
        let mut screen = self.lock();
        let food = screen.state.food.as_ref().ok_or(DetailsError::NotLoaded)?;

        let prior = screen.state.favorite;
        let next = prior.toggled();
        let request = match next {
            FavoriteState::Favorited => FavoriteRequest::Add(Favorite::from(food)),
            FavoriteState::NotFavorited => FavoriteRequest::Remove(food.id),
        };
        let command = FavoriteCommand {
            request,
            generation: screen.generation,
            prior,
            respond_to,
        };
        if self.favorites.send(command).is_err() {
            return Err(DetailsError::WorkerStopped);
        }

        screen.state.favorite = next;
        debug!(favorite = next.is_favorite(), "Favorite toggled");
        Ok(PendingToggle {
            optimistic: next,
            response,
        })
    }

    /// Submits the current selection as an order.
    #[instrument(skip(self))]
    pub async fn finish_order(&self) -> Result<OrderId, DetailsError> {
        let draft = self.lock().state.order_draft(self.config.extras_encoding)?;
        debug!(?draft, "Submitting order");

        let order_id = self.api.create_order(draft).await.map_err(|e| {
            warn!(error = %e, "Order submission failed");
            DetailsError::OrderSubmitFailed(e)
        })?;
        info!(%order_id, "Order submitted");
        Ok(order_id)
    }
}

fn lock_screen(screen: &Mutex<Screen>) -> MutexGuard<'_, Screen> {
    screen.lock().unwrap_or_else(PoisonError::into_inner)
}

async fn run_favorite_worker<A: FoodApi>(
    api: Arc<A>,
    screen: Arc<Mutex<Screen>>,
    mut commands: mpsc::UnboundedReceiver<FavoriteCommand>,
) {
    while let Some(command) = commands.recv().await {
        let requested = command.prior.toggled();
        let result = match command.request {
            FavoriteRequest::Add(favorite) => api.add_favorite(favorite).await.or_else(|e| match e {
                ApiError::Favorite(FavoriteError::AlreadyFavorite(_)) => already_applied(e),
                e => Err(e),
            }),
            FavoriteRequest::Remove(id) => api.remove_favorite(id).await.or_else(|e| match e {
                ApiError::Favorite(FavoriteError::NotFound(_)) => already_applied(e),
                e => Err(e),
            }),
        };

        let outcome = match result {
            Ok(()) => Ok(requested),
            Err(e) => {
                let mut current = lock_screen(&screen);
                if current.generation == command.generation && current.state.favorite == requested {
                    current.state.favorite = command.prior;
                    warn!(error = %e, "Favorite call failed, rolled back");
                } else {
                    warn!(error = %e, "Favorite call failed");
                }
                Err(DetailsError::FavoriteToggleFailed(e))
            }
        };
        let _ = command.respond_to.send(outcome);
    }
    debug!("Favorite worker stopped");
}

/// The store already holds the requested state.
fn already_applied(e: ApiError) -> Result<(), ApiError> {
    debug!(reason = %e, "Favorite already in requested state");
    Ok(())
}
