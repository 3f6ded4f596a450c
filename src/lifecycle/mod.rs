//! # System Lifecycle & Orchestration
//!
//! Starts, wires and stops the store actors behind the food details screen.
//!
//! **Key Responsibilities:**
//! 1. **Actor Creation** - Instantiate the food, favorite and order actors and their clients
//! 2. **Dependency Injection** - The order actor receives a `FoodClient` as its context
//! 3. **Catalog Seeding** - Load food items from JSON ([`catalog`])
//! 4. **Graceful Shutdown** - Drop clients, then await every actor task
//! 5. **Observability Setup** - Initialize tracing ([`setup_tracing`])
//!
//! ## Graceful Shutdown
//!
//! The order actor holds a clone of the `FoodClient`, so the food actor stops only
//! after the order actor has. The graph is acyclic, so dropping every client is
//! enough for all three to exit.

pub mod catalog;
pub mod food_system;
pub mod tracing;

pub use catalog::*;
pub use food_system::*;
pub use self::tracing::setup_tracing;
