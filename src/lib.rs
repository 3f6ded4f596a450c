//! # Food Details
//!
//! > **The core of a food ordering app's details screen, without the UI.**
//!
//! One food item is shown with its optional extras. The user adjusts extra
//! quantities and the base quantity, watches the running total, bookmarks the item
//! and submits an order. Rendering and navigation belong to the host app; this crate
//! owns the state, the update rules and the remote calls.
//!
//! ## 🏗️ Design
//!
//! ### 1. Pure state, thin controller
//! Every user action is a pure function over [`details::DetailState`]. The
//! [`details::FoodDetails`] controller only locks, applies and talks to the network.
//!
//! ### 2. Stale responses never land
//! Loads are tagged with a generation. Navigating to another food, or leaving, makes
//! every response still in flight for the old one a no-op.
//!
//! ### 3. Optimistic favorites with rollback
//! The favorite flag flips immediately. The remote call runs on a per-screen worker
//! in toggle order and the flag is restored if it fails.
//!
//! ### 4. Stores as resource actors
//! The remote food, favorite and order stores are modelled by a generic
//! `ResourceActor<T>` (see [`framework`]), each on its own Tokio task and reached
//! through a typed client. The screen only sees the [`clients::FoodApi`] trait, so a
//! real HTTP backend can replace them.
//!
//! ## 🗺️ Module Tour
//!
//! - [`details`] - The screen: state, controller, view snapshot, currency formatting.
//! - [`clients`] - `FoodApi`, its store-backed implementation, and typed store clients.
//! - [`framework`] - `ActorEntity`, `ResourceActor`, `ResourceClient`, mocks.
//! - [`food_actor`], [`favorite_actor`], [`order_actor`] - The stores.
//! - [`lifecycle`] - `FoodSystem` orchestration, catalog seeding, tracing.
//! - [`model`] - Wire types shared by everything above.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # Run the demo with info logs
//! RUST_LOG=info cargo run
//!
//! # Run the tests
//! cargo test
//! ```

pub mod clients;
pub mod details;
pub mod favorite_actor;
pub mod food_actor;
pub mod framework;
pub mod lifecycle;
pub mod model;
pub mod order_actor;
