use crate::clients::{FavoriteClient, FoodClient, OrderClient, StoreApi};
use crate::lifecycle::catalog::{parse_catalog, CatalogError};
use crate::model::FoodId;
use tracing::{error, info};

/// Sizing for the store actors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SystemConfig {
    /// Pending requests each store queues before senders wait.
    pub buffer_size: usize,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self { buffer_size: 32 }
    }
}

/// The runtime orchestrator for the stores behind the food details screen.
///
/// `FoodSystem` is responsible for:
/// - **Lifecycle Management**: Starting and stopping the food, favorite and order actors
/// - **Dependency Wiring**: The order actor gets a `FoodClient` to price drafts
/// - **Catalog Seeding**: Loading food items from the remote API's JSON shape
///
/// # Example
///
/// ```ignore
/// let system = FoodSystem::new(SystemConfig::default());
/// system.seed_catalog(CATALOG_JSON).await?;
///
/// let details = FoodDetails::new(system.api(), DetailsConfig::default());
/// details.load(FoodId(1)).await?;
///
/// // Screens hold store clients; drop them before shutting down.
/// drop(details);
/// system.shutdown().await?;
/// ```
pub struct FoodSystem {
    /// Client for interacting with the Food actor
    pub food_client: FoodClient,

    /// Client for interacting with the Favorite actor
    pub favorite_client: FavoriteClient,

    /// Client for interacting with the Order actor
    pub order_client: OrderClient,

    /// Task handles for all running actors (used for graceful shutdown)
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl FoodSystem {
    /// Creates and starts all store actors. Must be called inside a Tokio runtime.
    pub fn new(config: SystemConfig) -> Self {
        // 1. Create actors (no dependencies)
        let (food_actor, food_client) = crate::food_actor::new(config.buffer_size);
        let (favorite_actor, favorite_client) = crate::favorite_actor::new(config.buffer_size);
        let (order_actor, order_client) = crate::order_actor::new(config.buffer_size);

        // 2. Start actors with injected context
        let food_handle = tokio::spawn(food_actor.run(()));
        let favorite_handle = tokio::spawn(favorite_actor.run(()));

        // Order actor prices drafts through the food store (Context = FoodClient)
        let order_handle = tokio::spawn(order_actor.run(food_client.clone()));

        info!(buffer_size = config.buffer_size, "Food system started");
        Self {
            food_client,
            favorite_client,
            order_client,
            handles: vec![food_handle, favorite_handle, order_handle],
        }
    }

    /// A [`FoodApi`](crate::clients::FoodApi) over this system's stores.
    pub fn api(&self) -> StoreApi {
        StoreApi {
            food_client: self.food_client.clone(),
            favorite_client: self.favorite_client.clone(),
            order_client: self.order_client.clone(),
        }
    }

    /// Seeds the food store from a JSON array of food items.
    ///
    /// Items are created in order; the first failure stops seeding and is returned.
    pub async fn seed_catalog(&self, json: &str) -> Result<Vec<FoodId>, CatalogError> {
        let items = parse_catalog(json)?;
        let mut ids = Vec::with_capacity(items.len());
        for item in items {
            ids.push(self.food_client.create_food(item).await?);
        }
        info!(count = ids.len(), "Catalog seeded");
        Ok(ids)
    }

    /// Gracefully shuts down the entire system.
    ///
    /// Dropping the clients closes the actors' channels; each actor drains and exits.
    /// Any [`StoreApi`] handed out (including ones held by open screens) keeps its
    /// actors alive, so drop those first.
    ///
    /// Returns an error if any actor task panicked.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");

        drop(self.order_client);
        drop(self.favorite_client);
        drop(self.food_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
