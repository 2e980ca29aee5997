// SPDX-License-Identifier: MPL-2.0
//! Gift catalog page.
//!
//! Shows the couple's gift list split into highlights and keepsakes, lets a
//! guest mark a gift as purchased or register an off-list gift, and displays
//! the bank transfer details.
//!
//! The page follows the "state down, messages up" pattern. Store calls run as
//! [`Task`]s and come back as `*Loaded` / `*Finished` messages. Every outcome
//! a guest should hear about is reported through the ambient [`Toasts`]
//! handle, so [`State::update`] must run inside a notification scope.

mod form;
mod messages;
mod view;

pub use form::{BuyerFields, CustomGiftForm, Dialog, PurchaseForm};
pub use messages::{Field, Message};

use crate::application::port::{GiftStore, StoreError};
use crate::config::PaymentConfig;
use crate::domain::gift::{self, Gift, GiftId};
use crate::error::Result;
use crate::i18n::fluent::I18n;
use crate::ui::notifications::Toasts;
use crate::ui::widgets::spinner;
use iced::{Element, Task};
use std::sync::Arc;
use std::time::Instant;

/// Contextual data needed to update the catalog.
pub struct UpdateContext<'a> {
    pub i18n: &'a I18n,
}

/// Contextual data needed to render the catalog.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

/// Local UI state for the catalog page.
pub struct State {
    store: Arc<dyn GiftStore>,
    payment: PaymentConfig,
    /// Last list received from the store, most expensive first.
    gifts: Vec<Gift>,
    /// Set once the first fetch has completed, successfully or not.
    loaded: bool,
    fetching: bool,
    /// The running fetch started before a local change and must be redone.
    stale: bool,
    dialog: Option<Dialog>,
    spinner_rotation: f32,
    last_tick: Option<Instant>,
}

impl std::fmt::Debug for State {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("State")
            .field("store", &self.store.name())
            .field("gifts", &self.gifts.len())
            .field("loaded", &self.loaded)
            .field("fetching", &self.fetching)
            .field("stale", &self.stale)
            .field("dialog", &self.dialog)
            .finish_non_exhaustive()
    }
}

impl State {
    #[must_use]
    pub fn new(store: Arc<dyn GiftStore>, payment: PaymentConfig) -> Self {
        Self {
            store,
            payment,
            gifts: Vec::new(),
            loaded: false,
            fetching: false,
            stale: false,
            dialog: None,
            spinner_rotation: 0.0,
            last_tick: None,
        }
    }

    /// Starts fetching the gift list unless a fetch is already running.
    pub fn refresh(&mut self) -> Task<Message> {
        if self.fetching {
            return Task::none();
        }
        self.fetching = true;
        tracing::debug!(store = self.store.name(), "fetching gift list");

        let store = Arc::clone(&self.store);
        Task::perform(async move { store.list_gifts().await }, Message::GiftsLoaded)
    }

    /// Refetches after a change made through this page.
    ///
    /// A fetch already in flight may have been answered before the change, so
    /// it is marked stale and reissued when it returns.
    fn refresh_after_change(&mut self) -> Task<Message> {
        if self.fetching {
            self.stale = true;
            return Task::none();
        }
        self.refresh()
    }

    /// True until the first fetch completes.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        !self.loaded
    }

    #[must_use]
    pub fn gifts(&self) -> &[Gift] {
        &self.gifts
    }

    #[must_use]
    pub fn dialog(&self) -> Option<&Dialog> {
        self.dialog.as_ref()
    }

    #[must_use]
    pub fn payment(&self) -> &PaymentConfig {
        &self.payment
    }

    #[must_use]
    pub fn spinner_rotation(&self) -> f32 {
        self.spinner_rotation
    }

    /// Handles a catalog message.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ContextMissing`](crate::error::Error::ContextMissing)
    /// when called outside a notification scope and the message needs to
    /// report an outcome.
    pub fn update(&mut self, message: Message, ctx: &UpdateContext<'_>) -> Result<Task<Message>> {
        match message {
            Message::Refresh => Ok(self.refresh()),
            Message::GiftsLoaded(result) => {
                self.fetching = false;
                if std::mem::take(&mut self.stale) {
                    tracing::debug!("discarding gift list fetched before a local change");
                    return Ok(self.refresh());
                }
                self.loaded = true;
                match result {
                    Ok(gifts) => {
                        tracing::debug!(count = gifts.len(), "gift list loaded");
                        self.gifts = gifts;
                    }
                    Err(err) => {
                        // The previous list stays on screen.
                        tracing::warn!(%err, store = self.store.name(), "cannot load gift list");
                        Toasts::current()?.error(format!(
                            "{} {}",
                            ctx.i18n.tr("catalog-load-error"),
                            ctx.i18n.tr(err.i18n_key())
                        ))?;
                    }
                }
                Ok(Task::none())
            }
            Message::OpenPurchase(id) => {
                if self.dialog.is_none() {
                    self.dialog = self
                        .find(id)
                        .filter(|g| g.is_available())
                        .map(|gift| Dialog::Purchase(PurchaseForm::for_gift(gift)));
                }
                Ok(Task::none())
            }
            Message::OpenCustomGift => {
                if self.dialog.is_none() {
                    self.dialog = Some(Dialog::CustomGift(CustomGiftForm::default()));
                }
                Ok(Task::none())
            }
            Message::CloseDialog => {
                if !self.dialog.as_ref().is_some_and(Dialog::is_saving) {
                    self.dialog = None;
                }
                Ok(Task::none())
            }
            Message::FieldChanged(field, value) => {
                if let Some(dialog) = self.dialog.as_mut() {
                    dialog.set_field(field, value);
                }
                Ok(Task::none())
            }
            Message::SubmitPurchase => self.submit_purchase(ctx),
            Message::PurchaseFinished(result) => self.purchase_finished(result, ctx),
            Message::SubmitCustomGift => self.submit_custom_gift(ctx),
            Message::CustomGiftFinished(result) => self.custom_gift_finished(result, ctx),
            Message::CopyLink(id) => {
                let Some(link) = self.find(id).and_then(Gift::link) else {
                    return Ok(Task::none());
                };
                let link = link.to_string();
                Toasts::current()?.info(ctx.i18n.tr("gift-link-copied"))?;
                Ok(iced::clipboard::write(link))
            }
            Message::CopyPixKey => {
                let Some(key) = view::configured(self.payment.pix_key.as_deref()) else {
                    return Ok(Task::none());
                };
                let key = key.to_string();
                Toasts::current()?.success(ctx.i18n.tr("payment-key-copied"))?;
                Ok(iced::clipboard::write(key))
            }
            Message::Tick(now) => {
                if self.is_loading() {
                    let elapsed = self
                        .last_tick
                        .map(|last| now.saturating_duration_since(last))
                        .unwrap_or_default();
                    self.spinner_rotation = spinner::advance(self.spinner_rotation, elapsed);
                    self.last_tick = Some(now);
                } else {
                    self.last_tick = None;
                }
                Ok(Task::none())
            }
        }
    }

    #[must_use]
    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        view::render(self, &ctx)
    }

    fn find(&self, id: GiftId) -> Option<&Gift> {
        self.gifts.iter().find(|g| g.id() == id)
    }

    /// Replaces the local copy of `gift`, or adds it, keeping the price order.
    fn upsert(&mut self, gift: Gift) {
        match self.gifts.iter_mut().find(|g| g.id() == gift.id()) {
            Some(existing) => *existing = gift,
            None => self.gifts.push(gift),
        }
        gift::sort_by_price_desc(&mut self.gifts);
    }

    fn submit_purchase(&mut self, ctx: &UpdateContext<'_>) -> Result<Task<Message>> {
        let Some(Dialog::Purchase(form)) = self.dialog.as_mut() else {
            return Ok(Task::none());
        };
        if form.saving {
            return Ok(Task::none());
        }

        let purchase = match form.buyer.to_purchase() {
            Ok(purchase) => purchase,
            Err(err) => {
                Toasts::current()?.error(ctx.i18n.tr(err.i18n_key()))?;
                return Ok(Task::none());
            }
        };

        form.saving = true;
        let id = form.gift_id;
        tracing::info!(gift = %id, "submitting purchase");

        let store = Arc::clone(&self.store);
        Ok(Task::perform(
            async move { store.mark_purchased(id, &purchase).await },
            Message::PurchaseFinished,
        ))
    }

    fn purchase_finished(
        &mut self,
        result: crate::application::port::StoreResult<Gift>,
        ctx: &UpdateContext<'_>,
    ) -> Result<Task<Message>> {
        match result {
            Ok(gift) => {
                tracing::info!(gift = %gift.id(), "gift marked as purchased");
                if matches!(self.dialog, Some(Dialog::Purchase(_))) {
                    self.dialog = None;
                }
                let text = ctx
                    .i18n
                    .tr_with_args("purchase-success", &[("gift", gift.name())]);
                self.upsert(gift);
                Toasts::current()?.success(text)?;
                Ok(self.refresh_after_change())
            }
            Err(err) => {
                tracing::warn!(%err, "purchase failed");
                if let Some(dialog) = self.dialog.as_mut() {
                    dialog.set_saving(false);
                }
                Toasts::current()?.error(ctx.i18n.tr(err.i18n_key()))?;
                Ok(self.refresh_if_stale(&err))
            }
        }
    }

    fn submit_custom_gift(&mut self, ctx: &UpdateContext<'_>) -> Result<Task<Message>> {
        let Some(Dialog::CustomGift(form)) = self.dialog.as_mut() else {
            return Ok(Task::none());
        };
        if form.saving {
            return Ok(Task::none());
        }

        let custom = match form.to_custom_gift() {
            Ok(custom) => custom,
            Err(err) => {
                Toasts::current()?.error(ctx.i18n.tr(err.i18n_key()))?;
                return Ok(Task::none());
            }
        };

        form.saving = true;
        tracing::info!(name = custom.name(), "registering custom gift");

        let store = Arc::clone(&self.store);
        Ok(Task::perform(
            async move { store.insert_custom_gift(&custom).await },
            Message::CustomGiftFinished,
        ))
    }

    fn custom_gift_finished(
        &mut self,
        result: crate::application::port::StoreResult<Gift>,
        ctx: &UpdateContext<'_>,
    ) -> Result<Task<Message>> {
        match result {
            Ok(gift) => {
                tracing::info!(gift = %gift.id(), "custom gift registered");
                if matches!(self.dialog, Some(Dialog::CustomGift(_))) {
                    self.dialog = None;
                }
                let text = ctx
                    .i18n
                    .tr_with_args("custom-gift-success", &[("gift", gift.name())]);
                self.upsert(gift);
                Toasts::current()?.success(text)?;
                Ok(self.refresh_after_change())
            }
            Err(err) => {
                tracing::warn!(%err, "custom gift registration failed");
                if let Some(dialog) = self.dialog.as_mut() {
                    dialog.set_saving(false);
                }
                Toasts::current()?.error(ctx.i18n.tr(err.i18n_key()))?;
                Ok(Task::none())
            }
        }
    }

    /// The local list is out of date when the store disagrees about a gift.
    fn refresh_if_stale(&mut self, err: &StoreError) -> Task<Message> {
        match err {
            StoreError::AlreadyPurchased(_) | StoreError::NotFound(_) => {
                self.refresh_after_change()
            }
            _ => Task::none(),
        }
    }
}
