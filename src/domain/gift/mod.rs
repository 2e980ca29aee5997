// SPDX-License-Identifier: MPL-2.0
//! Gift catalog types.
//!
//! A [`Gift`] is one entry of the couple's list. Gifts are split into two
//! columns by [`PriceTier`]: highlights (R$ 200 and up) and keepsakes.

mod price;
mod purchase;

pub use price::Price;
pub use purchase::{CustomGift, Purchase, PurchaseError};

use std::fmt;

/// Gifts priced at or above this amount are highlights.
pub const HIGHLIGHT_THRESHOLD: Price = Price::from_cents(20_000);

// =============================================================================
// GiftId
// =============================================================================

/// Primary key of a gift in the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GiftId(i64);

impl GiftId {
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    #[must_use]
    pub const fn value(self) -> i64 {
        self.0
    }
}

impl fmt::Display for GiftId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// PriceTier
// =============================================================================

/// Column a gift is listed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceTier {
    /// Price at or above [`HIGHLIGHT_THRESHOLD`] (gold accent).
    Highlight,
    /// Everything cheaper (silver accent).
    Keepsake,
}

impl PriceTier {
    /// Classifies a price.
    #[must_use]
    pub fn of(price: Price) -> Self {
        if price >= HIGHLIGHT_THRESHOLD {
            PriceTier::Highlight
        } else {
            PriceTier::Keepsake
        }
    }
}

// =============================================================================
// Gift
// =============================================================================

/// One entry of the gift list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gift {
    id: GiftId,
    name: String,
    price: Price,
    link: Option<String>,
    available: bool,
    purchase: Option<Purchase>,
}

impl Gift {
    /// Creates an available gift without a store link.
    pub fn new(id: GiftId, name: impl Into<String>, price: Price) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            link: None,
            available: true,
            purchase: None,
        }
    }

    /// Sets the store link. A blank link is treated as absent.
    #[must_use]
    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        let link = link.into();
        self.link = (!link.trim().is_empty()).then_some(link);
        self
    }

    /// Marks the gift as already taken, with buyer details when known.
    #[must_use]
    pub fn taken(mut self, purchase: Option<Purchase>) -> Self {
        self.available = false;
        self.purchase = purchase;
        self
    }

    /// Attaches `purchase` and flips availability.
    ///
    /// Returns `false`, leaving the gift untouched, when it was already taken.
    pub fn mark_purchased(&mut self, purchase: Purchase) -> bool {
        if !self.available {
            return false;
        }
        self.available = false;
        self.purchase = Some(purchase);
        true
    }

    #[must_use]
    pub fn id(&self) -> GiftId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn price(&self) -> Price {
        self.price
    }

    #[must_use]
    pub fn link(&self) -> Option<&str> {
        self.link.as_deref()
    }

    #[must_use]
    pub fn is_available(&self) -> bool {
        self.available
    }

    #[must_use]
    pub fn purchase(&self) -> Option<&Purchase> {
        self.purchase.as_ref()
    }

    #[must_use]
    pub fn tier(&self) -> PriceTier {
        PriceTier::of(self.price)
    }
}

/// Sorts gifts from most to least expensive, keeping ties in their order.
pub fn sort_by_price_desc(gifts: &mut [Gift]) {
    gifts.sort_by(|a, b| b.price.cmp(&a.price));
}

/// Splits gifts into `(highlights, keepsakes)`, preserving order.
#[must_use]
pub fn split_by_tier(gifts: &[Gift]) -> (Vec<&Gift>, Vec<&Gift>) {
    gifts
        .iter()
        .partition(|gift| gift.tier() == PriceTier::Highlight)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gift(id: i64, cents: i64) -> Gift {
        Gift::new(GiftId::new(id), format!("gift-{id}"), Price::from_cents(cents))
    }

    #[test]
    fn tier_threshold_is_inclusive() {
        assert_eq!(PriceTier::of(Price::from_cents(20_000)), PriceTier::Highlight);
        assert_eq!(PriceTier::of(Price::from_cents(19_999)), PriceTier::Keepsake);
        assert_eq!(PriceTier::of(Price::from_cents(0)), PriceTier::Keepsake);
    }

    #[test]
    fn split_preserves_order() {
        let gifts = vec![gift(1, 50_000), gift(2, 9_000), gift(3, 20_000), gift(4, 1_000)];
        let (highlights, keepsakes) = split_by_tier(&gifts);

        let ids = |list: &[&Gift]| list.iter().map(|g| g.id().value()).collect::<Vec<_>>();
        assert_eq!(ids(&highlights), vec![1, 3]);
        assert_eq!(ids(&keepsakes), vec![2, 4]);
    }

    #[test]
    fn sort_is_descending_and_stable() {
        let mut gifts = vec![gift(1, 100), gift(2, 300), gift(3, 100), gift(4, 200)];
        sort_by_price_desc(&mut gifts);

        let ids: Vec<i64> = gifts.iter().map(|g| g.id().value()).collect();
        assert_eq!(ids, vec![2, 4, 1, 3]);
    }

    #[test]
    fn mark_purchased_only_once() {
        let mut g = gift(1, 100);
        let first = Purchase::new("Ana", "123", "").expect("valid purchase");
        let second = Purchase::new("Bia", "456", "").expect("valid purchase");

        assert!(g.mark_purchased(first.clone()));
        assert!(!g.is_available());
        assert!(!g.mark_purchased(second));
        assert_eq!(g.purchase(), Some(&first));
    }

    #[test]
    fn blank_link_is_absent() {
        assert_eq!(gift(1, 100).with_link("  ").link(), None);
        assert_eq!(
            gift(1, 100).with_link("https://loja.example/item").link(),
            Some("https://loja.example/item")
        );
    }
}
