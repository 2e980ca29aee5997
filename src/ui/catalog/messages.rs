// SPDX-License-Identifier: MPL-2.0
//! Message types for the catalog page.

use crate::application::port::StoreResult;
use crate::domain::gift::{Gift, GiftId};
use std::time::Instant;

/// Editable fields of the catalog dialogs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    BuyerName,
    BuyerPhone,
    BuyerMessage,
    /// Custom gift dialog only.
    GiftName,
    /// Custom gift dialog only.
    GiftPrice,
}

/// Messages emitted by the catalog page.
#[derive(Debug, Clone)]
pub enum Message {
    /// Fetch the gift list again.
    Refresh,
    GiftsLoaded(StoreResult<Vec<Gift>>),
    /// Open the purchase dialog for an available gift.
    OpenPurchase(GiftId),
    OpenCustomGift,
    /// Close the open dialog unless a request is in flight.
    CloseDialog,
    FieldChanged(Field, String),
    SubmitPurchase,
    PurchaseFinished(StoreResult<Gift>),
    SubmitCustomGift,
    CustomGiftFinished(StoreResult<Gift>),
    /// Copy a gift's store link.
    CopyLink(GiftId),
    CopyPixKey,
    /// Animation tick while the first fetch is running.
    Tick(Instant),
}
