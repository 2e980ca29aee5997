// SPDX-License-Identifier: MPL-2.0
//! Dialog form state.
//!
//! Forms hold raw text exactly as typed. Validation happens on submit through
//! the domain constructors, so a form can never hold a half-validated value.

use super::messages::Field;
use crate::domain::gift::{CustomGift, Gift, GiftId, Purchase, PurchaseError};

/// Buyer contact fields shared by both dialogs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuyerFields {
    pub name: String,
    pub phone: String,
    pub message: String,
}

impl BuyerFields {
    fn set(&mut self, field: Field, value: String) -> bool {
        match field {
            Field::BuyerName => self.name = value,
            Field::BuyerPhone => self.phone = value,
            Field::BuyerMessage => self.message = value,
            Field::GiftName | Field::GiftPrice => return false,
        }
        true
    }

    pub fn to_purchase(&self) -> Result<Purchase, PurchaseError> {
        Purchase::new(&self.name, &self.phone, &self.message)
    }
}

/// "Mark as purchased" dialog for a gift from the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PurchaseForm {
    pub gift_id: GiftId,
    pub gift_name: String,
    pub buyer: BuyerFields,
    pub saving: bool,
}

impl PurchaseForm {
    #[must_use]
    pub fn for_gift(gift: &Gift) -> Self {
        Self {
            gift_id: gift.id(),
            gift_name: gift.name().to_string(),
            buyer: BuyerFields::default(),
            saving: false,
        }
    }
}

/// Dialog registering a gift that is not on the list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomGiftForm {
    pub name: String,
    pub price: String,
    pub buyer: BuyerFields,
    pub saving: bool,
}

impl CustomGiftForm {
    /// Validates the gift name before the buyer fields.
    pub fn to_custom_gift(&self) -> Result<CustomGift, PurchaseError> {
        if self.name.trim().is_empty() {
            return Err(PurchaseError::MissingGiftName);
        }
        let purchase = self.buyer.to_purchase()?;
        CustomGift::new(&self.name, &self.price, purchase)
    }
}

/// The dialog currently covering the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dialog {
    Purchase(PurchaseForm),
    CustomGift(CustomGiftForm),
}

impl Dialog {
    #[must_use]
    pub fn is_saving(&self) -> bool {
        match self {
            Dialog::Purchase(form) => form.saving,
            Dialog::CustomGift(form) => form.saving,
        }
    }

    pub(super) fn set_saving(&mut self, saving: bool) {
        match self {
            Dialog::Purchase(form) => form.saving = saving,
            Dialog::CustomGift(form) => form.saving = saving,
        }
    }

    /// Stores `value` in `field`. Returns `false` if this dialog has no such
    /// field or a request is in flight.
    pub(super) fn set_field(&mut self, field: Field, value: String) -> bool {
        if self.is_saving() {
            return false;
        }
        match self {
            Dialog::Purchase(form) => form.buyer.set(field, value),
            Dialog::CustomGift(form) => match field {
                Field::GiftName => {
                    form.name = value;
                    true
                }
                Field::GiftPrice => {
                    form.price = value;
                    true
                }
                _ => form.buyer.set(field, value),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::gift::Price;

    fn gift() -> Gift {
        Gift::new(GiftId::new(3), "Cafeteira", Price::from_cents(64_900))
    }

    #[test]
    fn purchase_dialog_ignores_gift_fields() {
        let mut dialog = Dialog::Purchase(PurchaseForm::for_gift(&gift()));
        assert!(!dialog.set_field(Field::GiftName, "Quadro".to_string()));
        assert!(dialog.set_field(Field::BuyerName, "Ana".to_string()));

        let Dialog::Purchase(form) = dialog else {
            panic!("expected purchase dialog");
        };
        assert_eq!(form.buyer.name, "Ana");
    }

    #[test]
    fn fields_are_locked_while_saving() {
        let mut dialog = Dialog::CustomGift(CustomGiftForm::default());
        dialog.set_saving(true);
        assert!(!dialog.set_field(Field::GiftName, "Quadro".to_string()));
        assert_eq!(dialog, {
            let mut expected = Dialog::CustomGift(CustomGiftForm::default());
            expected.set_saving(true);
            expected
        });
    }

    #[test]
    fn custom_gift_reports_missing_name_first() {
        let form = CustomGiftForm::default();
        assert_eq!(
            form.to_custom_gift(),
            Err(PurchaseError::MissingGiftName)
        );
    }

    #[test]
    fn custom_gift_requires_buyer_contact() {
        let form = CustomGiftForm {
            name: "Quadro".to_string(),
            buyer: BuyerFields {
                name: "Caio".to_string(),
                ..BuyerFields::default()
            },
            ..CustomGiftForm::default()
        };
        assert_eq!(form.to_custom_gift(), Err(PurchaseError::MissingPhone));
    }

    #[test]
    fn valid_custom_gift_form_builds_domain_value() {
        let form = CustomGiftForm {
            name: "Quadro".to_string(),
            price: "120,50".to_string(),
            buyer: BuyerFields {
                name: "Caio".to_string(),
                phone: "(21) 98888-7777".to_string(),
                message: String::new(),
            },
            saving: false,
        };

        let custom = form.to_custom_gift().expect("valid form");
        assert_eq!(custom.name(), "Quadro");
        assert_eq!(custom.price(), Some(Price::from_cents(12_050)));
        assert_eq!(custom.purchase().buyer_message(), None);
    }
}
