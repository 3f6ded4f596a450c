//! # Core Resource Framework
//!
//! This module defines the generic building blocks behind every store the food
//! details screen talks to.
//!
//! ## Key Types
//!
//! - [`ActorEntity`]: The trait that all stored resource types must implement.
//! - [`ResourceActor`]: The generic actor that owns a collection of entities.
//! - [`ResourceClient`]: The generic client for communicating with actors.
//! - [`FrameworkError`]: Common errors (e.g., ActorClosed, NotFound, Conflict).

use async_trait::async_trait;
use std::collections::HashMap;
use std::fmt::{Debug, Display};
use std::hash::Hash;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, warn};

// =============================================================================
// 1. THE ABSTRACTION (Traits with Hooks, DTOs, and Actions)
// =============================================================================

/// Trait that any resource entity must implement to be managed by ResourceActor.
///
/// # Architecture Note
/// By defining a contract (`ActorEntity`) that all our resource types (FoodItem,
/// Favorite, Order) must satisfy, we can write the `ResourceActor` logic *once* and
/// reuse it everywhere.
///
/// # Async & Context
/// This trait is `#[async_trait]` to allow asynchronous operations in hooks (e.g., the
/// order store asking the food store for a quote). It also defines a `Context` type,
/// which is injected into every hook. This allows "Late Binding" of dependencies
/// (passing clients to `run()` instead of `new()`).
///
/// # Provided Methods
/// - [`ActorEntity::requested_id`] lets a create payload choose its own id.
/// - [`ActorEntity::on_create`] and [`ActorEntity::on_delete`] default to `Ok(())`.
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// The unique identifier for this entity.
    type Id: Eq + Hash + Ord + Clone + Send + Sync + Display + Debug;

    /// The data required to create a new instance (DTO - Data Transfer Object).
    type CreateParams: Send + Sync + Debug;

    /// The data required to update an existing instance.
    type UpdateParams: Send + Sync + Debug;

    /// Enum representing resource-specific operations (e.g., `Quote`).
    type Action: Send + Sync + Debug;

    /// The result type returned by custom actions.
    type ActionResult: Send + Sync + Debug;

    /// The runtime context (dependencies) injected into the actor.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync;

    /// Id chosen by the caller instead of the actor's generator.
    ///
    /// Returning `Some` makes the create fail with [`FrameworkError::Conflict`]
    /// when that id is already stored.
    fn requested_id(_params: &Self::CreateParams) -> Option<Self::Id> {
        None
    }

    /// Construct the full Entity from the ID and Payload.
    /// This is called synchronously before `on_create`.
    fn from_create_params(id: Self::Id, params: Self::CreateParams) -> Result<Self, String>;

    // --- Lifecycle Hooks (Async) ---

    /// Called immediately after the entity is built and before it is stored.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), String> {
        Ok(())
    }

    /// Called when an update request is received.
    async fn on_update(&mut self, update: Self::UpdateParams, _ctx: &Self::Context) -> Result<(), String>;

    /// Called immediately before the entity is removed from the store.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), String> {
        Ok(())
    }

    // --- Action Handler (Async) ---

    /// Handle a custom resource-specific action.
    async fn handle_action(&mut self, action: Self::Action, _ctx: &Self::Context) -> Result<Self::ActionResult, String>;
}

// =============================================================================
// 2. THE GENERIC MESSAGES & ERRORS
// =============================================================================

/// Errors that can occur within the actor framework itself.
#[derive(Debug, Clone, thiserror::Error, PartialEq)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Item already exists: {0}")]
    Conflict(String),
    #[error("Custom error: {0}")]
    Custom(String),
}

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Internal message type sent to the actor to request operations.
///
/// The variants map to CRUD operations plus `List` (read everything) and a custom
/// `Action` for resource-specific logic that does not fit the CRUD model. The type is
/// generic over `T: ActorEntity`, so a favorite payload can never reach the order
/// store.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Create {
        params: T::CreateParams,
        respond_to: Response<T::Id>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    List {
        respond_to: Response<Vec<T>>,
    },
    Update {
        id: T::Id,
        update: T::UpdateParams,
        respond_to: Response<T>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<()>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
}

// =============================================================================
// 3. THE GENERIC ACTOR SERVER
// =============================================================================

/// The generic actor that manages a collection of entities.
///
/// Owns the store and the receiving end of the channel. Messages are handled one at
/// a time, hooks included, so the store needs no lock.
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: HashMap<T::Id, T>,
    next_id_fn: Box<dyn Fn() -> T::Id + Send + Sync>,
    entity_type: &'static str,
}

impl<T: ActorEntity> ResourceActor<T> {
    pub fn new(buffer_size: usize, next_id_fn: impl Fn() -> T::Id + Send + Sync + 'static) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        // "Favorite" rather than "food_details::model::favorite::Favorite"
        let entity_type = std::any::type_name::<T>().rsplit("::").next().unwrap_or("Unknown");
        let actor = Self {
            receiver,
            store: HashMap::new(),
            next_id_fn: Box::new(next_id_fn),
            entity_type,
        };
        (actor, ResourceClient::new(sender))
    }

    /// Runs the event loop until every client is dropped.
    ///
    /// `context` is handed to every entity hook.
    pub async fn run(mut self, context: T::Context) {
        let entity_type = self.entity_type;
        info!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    let _ = respond_to.send(self.create(params, &context).await);
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    debug!(entity_type, %id, found = item.is_some(), "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::List { respond_to } => {
                    let _ = respond_to.send(Ok(self.list()));
                }
                ResourceRequest::Update { id, update, respond_to } => {
                    let _ = respond_to.send(self.update(id, update, &context).await);
                }
                ResourceRequest::Delete { id, respond_to } => {
                    let _ = respond_to.send(self.delete(id, &context).await);
                }
                ResourceRequest::Action { id, action, respond_to } => {
                    let _ = respond_to.send(self.act(id, action, &context).await);
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }

    async fn create(&mut self, params: T::CreateParams, context: &T::Context) -> Result<T::Id, FrameworkError> {
        let entity_type = self.entity_type;
        debug!(entity_type, ?params, "Create");

        let id = match T::requested_id(&params) {
            Some(id) if self.store.contains_key(&id) => {
                warn!(entity_type, %id, "Create conflict");
                return Err(FrameworkError::Conflict(id.to_string()));
            }
            Some(id) => id,
            None => self.generate_id().ok_or_else(|| {
                warn!(entity_type, "No free id");
                FrameworkError::Conflict("generated id".to_string())
            })?,
        };

        let mut item = T::from_create_params(id.clone(), params).map_err(|e| {
            warn!(entity_type, error = %e, "Create failed");
            FrameworkError::Custom(e)
        })?;
        item.on_create(context).await.map_err(|e| {
            warn!(entity_type, %id, error = %e, "on_create failed");
            FrameworkError::Custom(e)
        })?;

        self.store.insert(id.clone(), item);
        info!(entity_type, %id, size = self.store.len(), "Created");
        Ok(id)
    }

    /// Next generated id not already taken by a caller-chosen one.
    ///
    /// Gives up after `len + 1` draws, which is enough for any generator that does
    /// not repeat itself.
    fn generate_id(&self) -> Option<T::Id> {
        (0..=self.store.len())
            .map(|_| (self.next_id_fn)())
            .find(|id| !self.store.contains_key(id))
    }

    fn list(&self) -> Vec<T> {
        let mut entries: Vec<(&T::Id, &T)> = self.store.iter().collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        debug!(entity_type = self.entity_type, count = entries.len(), "List");
        entries.into_iter().map(|(_, item)| item.clone()).collect()
    }

    async fn update(&mut self, id: T::Id, update: T::UpdateParams, context: &T::Context) -> Result<T, FrameworkError> {
        let entity_type = self.entity_type;
        debug!(entity_type, %id, ?update, "Update");
        let item = self.store.get_mut(&id).ok_or_else(|| not_found(entity_type, &id))?;

        // Hooks mutate in place, so validate on a copy and commit only on success.
        let mut updated = item.clone();
        updated.on_update(update, context).await.map_err(|e| {
            warn!(entity_type, %id, error = %e, "Update failed");
            FrameworkError::Custom(e)
        })?;
        *item = updated.clone();
        info!(entity_type, %id, "Updated");
        Ok(updated)
    }

    async fn delete(&mut self, id: T::Id, context: &T::Context) -> Result<(), FrameworkError> {
        let entity_type = self.entity_type;
        debug!(entity_type, %id, "Delete");
        let item = self.store.get(&id).ok_or_else(|| not_found(entity_type, &id))?;

        item.on_delete(context).await.map_err(|e| {
            warn!(entity_type, %id, error = %e, "on_delete failed");
            FrameworkError::Custom(e)
        })?;
        self.store.remove(&id);
        info!(entity_type, %id, size = self.store.len(), "Deleted");
        Ok(())
    }

    async fn act(&mut self, id: T::Id, action: T::Action, context: &T::Context) -> Result<T::ActionResult, FrameworkError> {
        let entity_type = self.entity_type;
        debug!(entity_type, %id, ?action, "Action");
        let item = self.store.get_mut(&id).ok_or_else(|| not_found(entity_type, &id))?;

        match item.handle_action(action, context).await {
            Ok(result) => {
                info!(entity_type, %id, "Action ok");
                Ok(result)
            }
            Err(e) => {
                warn!(entity_type, %id, error = %e, "Action failed");
                Err(FrameworkError::Custom(e))
            }
        }
    }
}

fn not_found<Id: Display>(entity_type: &str, id: &Id) -> FrameworkError {
    warn!(entity_type, %id, "Not found");
    FrameworkError::NotFound(id.to_string())
}

// =============================================================================
// 4. THE GENERIC CLIENT
// =============================================================================

/// A type-safe client for interacting with a `ResourceActor`.
///
/// Holds only a sender, so cloning is cheap and clones can be moved into tasks.
#[derive(Clone)]
pub struct ResourceClient<T: ActorEntity> {
    sender: mpsc::Sender<ResourceRequest<T>>,
}

impl<T: ActorEntity> ResourceClient<T> {
    pub fn new(sender: mpsc::Sender<ResourceRequest<T>>) -> Self {
        Self { sender }
    }

    /// Sends one request and waits for its reply.
    async fn request<R>(&self, build: impl FnOnce(Response<R>) -> ResourceRequest<T>) -> Result<R, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn create(&self, params: T::CreateParams) -> Result<T::Id, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Create { params, respond_to }).await
    }

    pub async fn get(&self, id: T::Id) -> Result<Option<T>, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Get { id, respond_to }).await
    }

    /// Every stored entity, ordered by id.
    pub async fn list(&self) -> Result<Vec<T>, FrameworkError> {
        self.request(|respond_to| ResourceRequest::List { respond_to }).await
    }

    pub async fn update(&self, id: T::Id, update: T::UpdateParams) -> Result<T, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Update { id, update, respond_to }).await
    }

    pub async fn delete(&self, id: T::Id) -> Result<(), FrameworkError> {
        self.request(|respond_to| ResourceRequest::Delete { id, respond_to }).await
    }

    pub async fn perform_action(&self, id: T::Id, action: T::Action) -> Result<T::ActionResult, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Action { id, action, respond_to }).await
    }
}

// =============================================================================
// 5. EXAMPLE USAGE (Test)
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Arc;

    // --- Domain Definition ---

    #[derive(Clone, Debug, PartialEq)]
    struct Coupon {
        code: u32,
        label: String,
        redeemed: bool,
    }

    #[derive(Debug)]
    struct CouponCreate {
        code: Option<u32>,
        label: String,
    }

    #[derive(Debug)]
    struct CouponUpdate {
        label: Option<String>,
    }

    #[derive(Debug)]
    enum CouponAction {
        Redeem,
    }

    #[async_trait]
    impl ActorEntity for Coupon {
        type Id = u32;
        type CreateParams = CouponCreate;
        type UpdateParams = CouponUpdate;
        type Action = CouponAction;
        type ActionResult = bool;
        type Context = ();

        fn requested_id(params: &CouponCreate) -> Option<u32> {
            params.code
        }

        fn from_create_params(code: u32, params: CouponCreate) -> Result<Self, String> {
            if params.label.is_empty() {
                return Err("label must not be empty".to_string());
            }
            Ok(Self {
                code,
                label: params.label,
                redeemed: false,
            })
        }

        async fn on_update(&mut self, update: CouponUpdate, _ctx: &Self::Context) -> Result<(), String> {
            if let Some(label) = update.label {
                self.label = label;
            }
            Ok(())
        }

        async fn handle_action(&mut self, action: CouponAction, _ctx: &Self::Context) -> Result<bool, String> {
            match action {
                CouponAction::Redeem => {
                    if self.redeemed {
                        Ok(false)
                    } else {
                        self.redeemed = true;
                        Ok(true)
                    }
                }
            }
        }
    }

    fn spawn_coupons() -> ResourceClient<Coupon> {
        let counter = Arc::new(AtomicU32::new(100));
        let next_id = move || counter.fetch_add(1, Ordering::SeqCst);
        let (actor, client) = ResourceActor::new(10, next_id);
        tokio::spawn(actor.run(()));
        client
    }

    // --- Tests ---

    #[tokio::test]
    async fn test_resource_actor_crud_and_actions() {
        let client = spawn_coupons();

        // 1. Create with a generated id
        let id = client
            .create(CouponCreate { code: None, label: "Free fries".into() })
            .await
            .unwrap();
        assert_eq!(id, 100);

        // 2. Action: redeem once, then again
        assert!(client.perform_action(id, CouponAction::Redeem).await.unwrap());
        assert!(!client.perform_action(id, CouponAction::Redeem).await.unwrap());

        // 3. Update
        let updated = client
            .update(id, CouponUpdate { label: Some("Free drink".into()) })
            .await
            .unwrap();
        assert_eq!(updated.label, "Free drink");
        assert!(updated.redeemed);

        // 4. Delete
        client.delete(id).await.unwrap();
        assert!(client.get(id).await.unwrap().is_none());
        assert_eq!(client.delete(id).await, Err(FrameworkError::NotFound("100".into())));
    }

    #[tokio::test]
    async fn test_requested_id_conflict_and_sorted_list() {
        let client = spawn_coupons();

        client.create(CouponCreate { code: Some(7), label: "b".into() }).await.unwrap();
        client.create(CouponCreate { code: Some(3), label: "a".into() }).await.unwrap();

        let duplicate = client.create(CouponCreate { code: Some(7), label: "c".into() }).await;
        assert_eq!(duplicate, Err(FrameworkError::Conflict("7".into())));

        let codes: Vec<u32> = client.list().await.unwrap().into_iter().map(|c| c.code).collect();
        assert_eq!(codes, vec![3, 7]);
    }

    #[tokio::test]
    async fn test_generated_id_skips_requested_ones() {
        let client = spawn_coupons();

        client.create(CouponCreate { code: Some(100), label: "a".into() }).await.unwrap();
        client.create(CouponCreate { code: Some(101), label: "b".into() }).await.unwrap();
        let generated = client.create(CouponCreate { code: None, label: "c".into() }).await.unwrap();
        assert_eq!(generated, 102);

        let labels: Vec<String> = client.list().await.unwrap().into_iter().map(|c| c.label).collect();
        assert_eq!(labels, vec!["a", "b", "c"]);
    }

    #[tokio::test]
    async fn test_exhausted_generator_is_a_conflict() {
        let (actor, client) = ResourceActor::<Coupon>::new(4, || 5);
        tokio::spawn(actor.run(()));

        client.create(CouponCreate { code: None, label: "a".into() }).await.unwrap();
        let result = client.create(CouponCreate { code: None, label: "b".into() }).await;
        assert!(matches!(result, Err(FrameworkError::Conflict(_))));
        assert_eq!(client.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_failed_create_is_not_stored() {
        let client = spawn_coupons();

        let result = client.create(CouponCreate { code: Some(1), label: String::new() }).await;
        assert_eq!(result, Err(FrameworkError::Custom("label must not be empty".into())));
        assert!(client.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_closed_actor_reports_actor_closed() {
        let (actor, client) = ResourceActor::<Coupon>::new(1, || 0);
        drop(actor);
        assert_eq!(client.get(1).await, Err(FrameworkError::ActorClosed));
    }
}
