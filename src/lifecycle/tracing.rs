//! # Observability & Tracing
//!
//! [`setup_tracing`] initializes structured logging with the `tracing` crate.
//!
//! ## Configuration
//!
//! Verbosity comes from `RUST_LOG`. The compact format hides the module prefix
//! (`with_target(false)`); store logs carry an `entity_type` field instead.
//!
//! ```bash
//! # Screen and store lifecycle
//! RUST_LOG=info cargo run
//!
//! # Full payloads (order drafts, create params, quote actions)
//! RUST_LOG=debug cargo run
//!
//! # Only the screen
//! RUST_LOG=food_details::details=debug cargo run
//! ```
//!
//! ## What Gets Traced
//!
//! - **Screen**: loads with their generation, stale responses being dropped,
//!   rejected edits, favorite rollbacks, order submission
//! - **Stores**: actor startup and shutdown, Create/Get/List/Update/Delete/Action
//!   with entity ids
//! - **Clients**: one `#[instrument]` span per call
//!
//! ## Workflow Trace Example
//!
//! **With `RUST_LOG=info`**:
//!
//! ```text
//! INFO load{id=FoodId(1) food_id=food_1}: Loading food generation=1
//! INFO load{id=FoodId(1) food_id=food_1}: Food loaded favorite=false
//! INFO Created entity_type="Favorite" id=food_1 size=1
//! INFO finish_order: Sending create_order to actor
//! INFO Action ok entity_type="FoodItem" id=food_1
//! INFO Created entity_type="Order" id=order_1 size=1
//! INFO finish_order: Order submitted order_id=order_1
//! ```
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
