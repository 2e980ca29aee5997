// SPDX-License-Identifier: MPL-2.0
//! In-memory gift store.
//!
//! Used when no hosted store is configured, and by tests. Keeps the same
//! semantics as the hosted adapter: the list is returned most expensive first
//! and a purchase only succeeds on an available gift.

use crate::application::port::{GiftStore, StoreError, StoreResult};
use crate::domain::gift::{self, CustomGift, Gift, GiftId, Price, Purchase};
use async_trait::async_trait;
use std::sync::Mutex;

/// Gift store held entirely in memory.
#[derive(Debug, Default)]
pub struct InMemoryGiftStore {
    gifts: Mutex<Vec<Gift>>,
}

impl InMemoryGiftStore {
    /// Creates a store holding `gifts`.
    #[must_use]
    pub fn new(gifts: Vec<Gift>) -> Self {
        Self {
            gifts: Mutex::new(gifts),
        }
    }

    /// Creates a store pre-filled with [`sample_catalog`].
    #[must_use]
    pub fn with_sample_catalog() -> Self {
        Self::new(sample_catalog())
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Gift>> {
        // A panic while holding the lock cannot leave the list half-updated.
        self.gifts.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[async_trait]
impl GiftStore for InMemoryGiftStore {
    async fn list_gifts(&self) -> StoreResult<Vec<Gift>> {
        let mut gifts = self.lock().clone();
        gift::sort_by_price_desc(&mut gifts);
        Ok(gifts)
    }

    async fn mark_purchased(&self, id: GiftId, purchase: &Purchase) -> StoreResult<Gift> {
        let mut gifts = self.lock();
        let entry = gifts
            .iter_mut()
            .find(|g| g.id() == id)
            .ok_or(StoreError::NotFound(id))?;

        if !entry.mark_purchased(purchase.clone()) {
            return Err(StoreError::AlreadyPurchased(id));
        }
        Ok(entry.clone())
    }

    async fn insert_custom_gift(&self, custom: &CustomGift) -> StoreResult<Gift> {
        let mut gifts = self.lock();
        let next_id = gifts.iter().map(|g| g.id().value()).max().unwrap_or(0) + 1;

        let gift = Gift::new(
            GiftId::new(next_id),
            custom.name(),
            custom.price().unwrap_or_default(),
        )
        .taken(Some(custom.purchase().clone()));

        gifts.push(gift.clone());
        Ok(gift)
    }

    fn name(&self) -> &'static str {
        "memory"
    }
}

/// Gift list shown when no hosted store is configured.
#[must_use]
pub fn sample_catalog() -> Vec<Gift> {
    let entries: [(i64, &str, i64, &str); 10] = [
        (1, "Geladeira Frost Free", 389_900, "https://www.magazineluiza.com.br/"),
        (2, "Jogo de Panelas Inox", 89_990, "https://www.amazon.com.br/"),
        (3, "Aspirador Robô", 129_900, "https://www.mercadolivre.com.br/"),
        (4, "Cafeteira Expresso", 64_900, "https://www.amazon.com.br/"),
        (5, "Jogo de Cama Queen", 34_990, "https://www.camicado.com.br/"),
        (6, "Liquidificador", 21_900, "https://www.magazineluiza.com.br/"),
        (7, "Jogo de Taças", 18_990, "https://www.tokstok.com.br/"),
        (8, "Tábua de Frios", 12_900, "https://www.tokstok.com.br/"),
        (9, "Kit Toalhas de Banho", 15_990, "https://www.camicado.com.br/"),
        (10, "Porta-retrato", 5_990, ""),
    ];

    entries
        .into_iter()
        .map(|(id, name, cents, link)| {
            Gift::new(GiftId::new(id), name, Price::from_cents(cents)).with_link(link)
        })
        .collect()
}
