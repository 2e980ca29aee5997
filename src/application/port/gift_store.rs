// SPDX-License-Identifier: MPL-2.0
//! Gift store port definition.
//!
//! This module defines the [`GiftStore`] trait through which the catalog reads
//! the gift list and records purchases.
//!
//! # Design Notes
//!
//! - Methods are `async` because the production adapter talks HTTP; callers
//!   run them inside Iced `Task`s and receive the outcome as a message
//! - Change notification is not part of the trait: the application refreshes
//!   periodically and after each successful mutation
//! - The trait is `Send + Sync` so a shared `Arc<dyn GiftStore>` can be moved
//!   into tasks

use crate::domain::gift::{CustomGift, Gift, GiftId, Purchase};
use async_trait::async_trait;
use std::fmt;

// =============================================================================
// StoreError
// =============================================================================

/// Errors that can occur while talking to the gift store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The request never produced a response (DNS, TLS, connection reset).
    Network(String),

    /// The store answered with a non-success HTTP status.
    Status {
        /// HTTP status code.
        code: u16,
        /// Response body, possibly truncated.
        body: String,
    },

    /// The response body did not have the expected shape.
    Decode(String),

    /// No gift with the requested id exists.
    NotFound(GiftId),

    /// Another guest marked the gift as purchased first.
    AlreadyPurchased(GiftId),
}

impl StoreError {
    /// Returns the translation key describing this error to the guest.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            StoreError::Network(_) => "store-error-network",
            StoreError::Status { .. } => "store-error-status",
            StoreError::Decode(_) => "store-error-decode",
            StoreError::NotFound(_) => "store-error-not-found",
            StoreError::AlreadyPurchased(_) => "store-error-already-purchased",
        }
    }
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Network(msg) => write!(f, "network error: {msg}"),
            StoreError::Status { code, body } => write!(f, "HTTP status {code}: {body}"),
            StoreError::Decode(msg) => write!(f, "unexpected response: {msg}"),
            StoreError::NotFound(id) => write!(f, "gift {id} not found"),
            StoreError::AlreadyPurchased(id) => write!(f, "gift {id} was already purchased"),
        }
    }
}

impl std::error::Error for StoreError {}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

// =============================================================================
// GiftStore
// =============================================================================

/// Persistent gift catalog.
#[async_trait]
pub trait GiftStore: Send + Sync + fmt::Debug {
    /// Returns every gift, most expensive first.
    async fn list_gifts(&self) -> StoreResult<Vec<Gift>>;

    /// Flips an available gift to purchased and attaches the buyer details.
    ///
    /// # Errors
    ///
    /// [`StoreError::AlreadyPurchased`] when the gift is no longer available,
    /// [`StoreError::NotFound`] when it does not exist.
    async fn mark_purchased(&self, id: GiftId, purchase: &Purchase) -> StoreResult<Gift>;

    /// Records a gift bought outside of the list. The new entry is already
    /// purchased.
    async fn insert_custom_gift(&self, gift: &CustomGift) -> StoreResult<Gift>;

    /// Short human-readable name of the backend, for logs.
    fn name(&self) -> &'static str;
}
