// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core business logic with ZERO external dependencies.
//!
//! This module contains pure domain types, value objects, and business rules.
//! It has no dependencies on external crates (except `std`) to ensure
//! testability and architectural purity.
//!
//! # Modules
//!
//! - [`gift`]: Gift catalog types ([`Gift`](gift::Gift), [`Price`](gift::Price),
//!   [`PriceTier`](gift::PriceTier), [`Purchase`](gift::Purchase),
//!   [`CustomGift`](gift::CustomGift))

pub mod gift;
