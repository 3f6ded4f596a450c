//! Scripted [`FoodApi`] for screen tests: canned catalog, recorded calls,
//! injectable latency and failures.

use async_trait::async_trait;
use food_details::clients::{ApiError, FoodApi};
use food_details::favorite_actor::FavoriteError;
use food_details::model::{Extra, Favorite, FoodId, FoodItem, OrderCreate, OrderId};
use food_details::order_actor::OrderError;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::{mpsc, oneshot};

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    GetFood(FoodId),
    ListFavorites,
    AddFavorite(FoodId),
    RemoveFavorite(FoodId),
    CreateOrder(OrderCreate),
}

#[derive(Default)]
pub struct ScriptedApi {
    catalog: HashMap<FoodId, FoodItem>,
    favorites: Mutex<Vec<Favorite>>,
    calls: Mutex<Vec<Call>>,
    /// `get_food` for these ids waits for the gate to open.
    gates: Mutex<HashMap<FoodId, oneshot::Receiver<()>>>,
    gate_reached: Mutex<Option<mpsc::UnboundedSender<FoodId>>>,
    add_favorite_delay: Mutex<Option<Duration>>,
    fail_favorites: AtomicBool,
    fail_adds: AtomicBool,
    /// Number of upcoming `list_favorites` calls that fail.
    list_failures: AtomicU32,
    fail_orders: AtomicBool,
    next_order: AtomicU32,
}

pub fn food(id: u32, price: f64, extras: Vec<Extra>) -> FoodItem {
    FoodItem {
        id: FoodId(id),
        name: format!("Food {}", id),
        description: "Macarrão ao molho branco".into(),
        price,
        category: 1,
        image_url: format!("food{}.png", id),
        thumbnail_url: format!("food{}-thumb.png", id),
        extras,
    }
}

impl ScriptedApi {
    pub fn new(catalog: Vec<FoodItem>) -> Arc<Self> {
        Arc::new(Self {
            catalog: catalog.into_iter().map(|food| (food.id, food)).collect(),
            next_order: AtomicU32::new(1),
            ..Self::default()
        })
    }

    pub fn with_favorite(self: &Arc<Self>, id: u32) -> Arc<Self> {
        let favorite = Favorite::from(&self.catalog[&FoodId(id)]);
        self.favorites.lock().unwrap().push(favorite);
        self.clone()
    }

    /// Holds `get_food(id)` until the returned sender fires.
    pub fn gate(&self, id: FoodId) -> oneshot::Sender<()> {
        let (open, gate) = oneshot::channel();
        self.gates.lock().unwrap().insert(id, gate);
        open
    }

    /// Reports every gated `get_food` as it starts waiting.
    pub fn gate_reached(&self) -> mpsc::UnboundedReceiver<FoodId> {
        let (tx, rx) = mpsc::unbounded_channel();
        *self.gate_reached.lock().unwrap() = Some(tx);
        rx
    }

    pub fn delay_add_favorite(&self, delay: Duration) {
        *self.add_favorite_delay.lock().unwrap() = Some(delay);
    }

    pub fn fail_favorites(&self, fail: bool) {
        self.fail_favorites.store(fail, Ordering::SeqCst);
    }

    /// Fails `add_favorite` only, after any configured delay.
    pub fn fail_adds(&self, fail: bool) {
        self.fail_adds.store(fail, Ordering::SeqCst);
    }

    pub fn fail_next_list_favorites(&self, times: u32) {
        self.list_failures.store(times, Ordering::SeqCst);
    }

    pub fn is_favorite(&self, id: FoodId) -> bool {
        self.favorites.lock().unwrap().iter().any(|favorite| favorite.id == id)
    }

    pub fn fail_orders(&self, fail: bool) {
        self.fail_orders.store(fail, Ordering::SeqCst);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn favorite_calls(&self) -> Vec<Call> {
        self.calls()
            .into_iter()
            .filter(|call| matches!(call, Call::AddFavorite(_) | Call::RemoveFavorite(_)))
            .collect()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

/// Lets tests keep a handle on the fake while the screen owns it.
pub struct Shared(pub Arc<ScriptedApi>);

#[async_trait]
impl FoodApi for Shared {
    async fn get_food(&self, id: FoodId) -> Result<FoodItem, ApiError> {
        let api = &self.0;
        api.record(Call::GetFood(id));
        let gate = api.gates.lock().unwrap().remove(&id);
        if let Some(gate) = gate {
            if let Some(reached) = api.gate_reached.lock().unwrap().as_ref() {
                let _ = reached.send(id);
            }
            let _ = gate.await;
        }
        api.catalog.get(&id).cloned().ok_or(ApiError::FoodNotFound(id))
    }

    async fn list_favorites(&self) -> Result<Vec<Favorite>, ApiError> {
        let api = &self.0;
        api.record(Call::ListFavorites);
        let failing = api
            .list_failures
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |left| left.checked_sub(1))
            .is_ok();
        if failing {
            return Err(FavoriteError::ActorCommunicationError("favorites blip".into()).into());
        }
        Ok(api.favorites.lock().unwrap().clone())
    }

    async fn add_favorite(&self, favorite: Favorite) -> Result<(), ApiError> {
        let api = &self.0;
        api.record(Call::AddFavorite(favorite.id));
        let delay = *api.add_favorite_delay.lock().unwrap();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        if api.fail_favorites.load(Ordering::SeqCst) || api.fail_adds.load(Ordering::SeqCst) {
            return Err(FavoriteError::ActorCommunicationError("favorites offline".into()).into());
        }
        let mut favorites = api.favorites.lock().unwrap();
        if favorites.iter().any(|stored| stored.id == favorite.id) {
            return Err(FavoriteError::AlreadyFavorite(favorite.id.to_string()).into());
        }
        favorites.push(favorite);
        Ok(())
    }

    async fn remove_favorite(&self, id: FoodId) -> Result<(), ApiError> {
        let api = &self.0;
        api.record(Call::RemoveFavorite(id));
        if api.fail_favorites.load(Ordering::SeqCst) {
            return Err(FavoriteError::ActorCommunicationError("favorites offline".into()).into());
        }
        let mut favorites = api.favorites.lock().unwrap();
        let before = favorites.len();
        favorites.retain(|favorite| favorite.id != id);
        if favorites.len() == before {
            return Err(FavoriteError::NotFound(id.to_string()).into());
        }
        Ok(())
    }

    async fn create_order(&self, order: OrderCreate) -> Result<OrderId, ApiError> {
        let api = &self.0;
        api.record(Call::CreateOrder(order));
        if api.fail_orders.load(Ordering::SeqCst) {
            return Err(OrderError::ActorCommunicationError("orders offline".into()).into());
        }
        Ok(OrderId(api.next_order.fetch_add(1, Ordering::SeqCst)))
    }
}
