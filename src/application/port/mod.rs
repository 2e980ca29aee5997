// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines abstract interfaces that infrastructure adapters implement.
//! These traits use only domain types, ensuring the application layer remains
//! independent of concrete implementations.
//!
//! # Available Ports
//!
//! - [`gift_store`]: Gift list reads, purchases and custom gifts
//!
//! # Design Notes
//!
//! - All traits use domain types only (no Iced handles, no HTTP types)
//! - Traits are `Send + Sync` so adapters can be shared across tasks
//! - Methods return `Result` with port-level error types
//!
//! # Example
//!
//! ```ignore
//! use gift_registry::application::port::GiftStore;
//!
//! async fn available_count(store: &dyn GiftStore) -> usize {
//!     store
//!         .list_gifts()
//!         .await
//!         .map(|gifts| gifts.iter().filter(|g| g.is_available()).count())
//!         .unwrap_or(0)
//! }
//! ```

pub mod gift_store;

// Re-export main types for convenience
pub use gift_store::{GiftStore, StoreError, StoreResult};
