//! Generic actor framework for resource management.
//!
//! This module provides the core building blocks for the in-process stores behind
//! the food details screen: each store is a resource actor with CRUD operations,
//! a `List` query and custom actions.
//!
//! # Main Components
//!
//! - [`ActorEntity`] - Trait that resource types implement to be managed by actors
//! - [`ResourceActor`] - Generic actor that manages entities
//! - [`ResourceClient`] - Type-safe client for talking to a [`ResourceActor`]
//! - [`FrameworkError`] - Common error types
//!
//! # Testing
//!
//! See [`mock`] module for utilities to test clients without spawning full actors.

pub mod core;
pub mod mock;

// Re-export core types for convenience
pub use core::*;
