// SPDX-License-Identifier: MPL-2.0
//! Purchase and custom gift requests.
//!
//! Both are validated on construction so an invalid request can never reach
//! the store: buyer name and phone are required, the message is optional.

use super::Price;
use std::fmt;

// =============================================================================
// PurchaseError
// =============================================================================

/// Validation failures for guest-submitted forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PurchaseError {
    /// The buyer name is empty.
    MissingName,
    /// The buyer phone is empty.
    MissingPhone,
    /// A custom gift was submitted without a name.
    MissingGiftName,
    /// The custom gift price could not be understood.
    InvalidPrice,
}

impl PurchaseError {
    /// Returns the translation key describing this error to the guest.
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            PurchaseError::MissingName => "purchase-error-missing-name",
            PurchaseError::MissingPhone => "purchase-error-missing-phone",
            PurchaseError::MissingGiftName => "purchase-error-missing-gift-name",
            PurchaseError::InvalidPrice => "purchase-error-invalid-price",
        }
    }
}

impl fmt::Display for PurchaseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PurchaseError::MissingName => write!(f, "buyer name is required"),
            PurchaseError::MissingPhone => write!(f, "buyer phone is required"),
            PurchaseError::MissingGiftName => write!(f, "gift name is required"),
            PurchaseError::InvalidPrice => write!(f, "price is not a valid amount"),
        }
    }
}

impl std::error::Error for PurchaseError {}

// =============================================================================
// Purchase
// =============================================================================

/// Buyer details attached to a gift when a guest marks it as purchased.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Purchase {
    buyer_name: String,
    buyer_phone: String,
    buyer_message: Option<String>,
}

impl Purchase {
    /// Validates and trims the submitted form fields.
    ///
    /// # Errors
    ///
    /// Returns [`PurchaseError::MissingName`] or [`PurchaseError::MissingPhone`]
    /// when a required field is blank.
    pub fn new(name: &str, phone: &str, message: &str) -> Result<Self, PurchaseError> {
        let buyer_name = name.trim();
        if buyer_name.is_empty() {
            return Err(PurchaseError::MissingName);
        }
        let buyer_phone = phone.trim();
        if buyer_phone.is_empty() {
            return Err(PurchaseError::MissingPhone);
        }
        let buyer_message = Some(message.trim())
            .filter(|m| !m.is_empty())
            .map(str::to_string);

        Ok(Self {
            buyer_name: buyer_name.to_string(),
            buyer_phone: buyer_phone.to_string(),
            buyer_message,
        })
    }

    #[must_use]
    pub fn buyer_name(&self) -> &str {
        &self.buyer_name
    }

    #[must_use]
    pub fn buyer_phone(&self) -> &str {
        &self.buyer_phone
    }

    #[must_use]
    pub fn buyer_message(&self) -> Option<&str> {
        self.buyer_message.as_deref()
    }
}

// =============================================================================
// CustomGift
// =============================================================================

/// A gift the guest bought outside of the list and wants to register.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomGift {
    name: String,
    price: Option<Price>,
    purchase: Purchase,
}

impl CustomGift {
    /// Validates a custom gift.
    ///
    /// `price` is optional: a blank field means the guest prefers not to say.
    ///
    /// # Errors
    ///
    /// Returns [`PurchaseError::MissingGiftName`] for a blank name and
    /// [`PurchaseError::InvalidPrice`] for a price that does not parse.
    pub fn new(name: &str, price: &str, purchase: Purchase) -> Result<Self, PurchaseError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(PurchaseError::MissingGiftName);
        }
        let price = if price.trim().is_empty() {
            None
        } else {
            Some(Price::parse(price).ok_or(PurchaseError::InvalidPrice)?)
        };

        Ok(Self {
            name: name.to_string(),
            price,
            purchase,
        })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn price(&self) -> Option<Price> {
        self.price
    }

    #[must_use]
    pub fn purchase(&self) -> &Purchase {
        &self.purchase
    }
}
