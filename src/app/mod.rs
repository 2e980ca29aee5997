// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the catalog page and the
//! notification overlay.
//!
//! The `App` struct owns the localization bundle, the toast manager and the
//! catalog, and wires the gift store chosen from the settings into the page.
//! Startup problems (unreadable settings) are reported as toasts once the
//! window is up.

mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use subscription::{tick_interval, ANIMATION_TICK, IDLE_TICK};

use crate::application::port::GiftStore;
use crate::config::{self, Config};
use crate::i18n::fluent::I18n;
use crate::infrastructure;
use crate::ui::catalog;
use crate::ui::notifications;
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    theme_mode: ThemeMode,
    catalog: catalog::State,
    /// Toast notification manager for user feedback.
    notifications: notifications::Manager,
    refresh_interval: Duration,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("locale", self.i18n.current_locale())
            .field("theme_mode", &self.theme_mode)
            .field("catalog", &self.catalog)
            .field("notifications", &self.notifications.len())
            .finish_non_exhaustive()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: f32 = 820.0;
pub const WINDOW_DEFAULT_WIDTH: f32 = 1100.0;
pub const MIN_WINDOW_HEIGHT: f32 = 560.0;
pub const MIN_WINDOW_WIDTH: f32 = 720.0;

/// Builds the window settings.
#[must_use]
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(iced::Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires a `Fn` boot closure; the flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads the settings, picks the gift store and starts the first fetch.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang, &config);
        let (store, store_warning) = infrastructure::store_from_config(&config.backend);
        let warnings = config_warning.into_iter().chain(store_warning).collect();

        Self::with_store(i18n, &config, warnings, store, notifications::Manager::new())
    }

    /// Builds the application around an existing store and manager.
    ///
    /// `startup_warnings` are i18n keys shown as error toasts once the window
    /// is up, in order.
    pub fn with_store(
        i18n: I18n,
        config: &Config,
        startup_warnings: Vec<String>,
        store: Arc<dyn GiftStore>,
        mut notifications: notifications::Manager,
    ) -> (Self, Task<Message>) {
        notifications.set_default_duration(config.notifications.auto_dismiss());

        for key in startup_warnings {
            tracing::warn!(key = %key, "startup warning");
            notifications.error(i18n.tr(&key));
        }

        let mut catalog = catalog::State::new(store, config.payment.clone());
        let task = catalog.refresh().map(Message::Catalog);

        let app = Self {
            i18n,
            theme_mode: config.general.theme_mode,
            catalog,
            notifications,
            refresh_interval: config.backend.refresh_interval(),
        };
        tracing::info!(?app, "application started");

        (app, task)
    }

    fn title(&self) -> String {
        self.i18n.tr("app-title")
    }

    fn theme(&self) -> Theme {
        self.theme_mode.to_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        let animating = self.notifications.is_animating() || self.catalog.is_loading();
        let tick_sub = subscription::create_tick_subscription(
            animating,
            self.notifications.has_notifications(),
        );
        let refresh_sub = subscription::create_refresh_subscription(self.refresh_interval);

        Subscription::batch([tick_sub, refresh_sub])
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            i18n: &self.i18n,
            catalog: &mut self.catalog,
            notifications: &mut self.notifications,
        };

        match message {
            Message::Catalog(catalog_message) => {
                update::handle_catalog_message(&mut ctx, catalog_message)
            }
            Message::Notification(notification_message) => {
                update::handle_notification_message(&mut ctx, &notification_message)
            }
            Message::Tick(now) => update::handle_tick(&mut ctx, now),
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            catalog: &self.catalog,
            notifications: &self.notifications,
        })
    }

    #[must_use]
    pub fn catalog(&self) -> &catalog::State {
        &self.catalog
    }

    #[must_use]
    pub fn notifications(&self) -> &notifications::Manager {
        &self.notifications
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::port::StoreError;
    use crate::infrastructure::InMemoryGiftStore;
    use crate::ui::notifications::{Clock, ManualClock, Severity, VisualState};

    fn app_with_clock(warning: Option<String>) -> (App, Arc<ManualClock>) {
        let clock = Arc::new(ManualClock::new());
        let (app, _task) = App::with_store(
            I18n::new(Some("en-US".to_string()), &Config::default()),
            &Config::default(),
            warning.into_iter().collect(),
            Arc::new(InMemoryGiftStore::with_sample_catalog()),
            notifications::Manager::with_clock(clock.clone()),
        );
        (app, clock)
    }

    #[test]
    fn config_warning_is_shown_at_startup() {
        let (app, _clock) =
            app_with_clock(Some("notification-config-load-error".to_string()));

        let shown: Vec<_> = app
            .notifications()
            .notifications()
            .map(|n| (n.message().to_string(), n.severity()))
            .collect();
        assert_eq!(
            shown,
            vec![(
                "Settings could not be read. Defaults are in use.".to_string(),
                Severity::Error
            )]
        );
    }

    #[test]
    fn store_fallback_is_shown_after_config_warning() {
        let config = Config::default();
        let (app, _task) = App::with_store(
            I18n::new(Some("en-US".to_string()), &config),
            &config,
            vec![
                "notification-config-load-error".to_string(),
                infrastructure::STORE_FALLBACK_WARNING.to_string(),
            ],
            Arc::new(InMemoryGiftStore::with_sample_catalog()),
            notifications::Manager::with_clock(Arc::new(ManualClock::new())),
        );

        let shown: Vec<_> = app
            .notifications()
            .notifications()
            .map(|n| (n.message().to_string(), n.severity()))
            .collect();
        assert_eq!(
            shown,
            vec![
                (
                    "Settings could not be read. Defaults are in use.".to_string(),
                    Severity::Error
                ),
                (
                    "The configured gift server cannot be used. A sample list is shown and purchases are not saved."
                        .to_string(),
                    Severity::Error
                ),
            ]
        );
    }

    #[test]
    fn startup_is_loading() {
        let (app, _clock) = app_with_clock(None);
        assert!(app.catalog().is_loading());
        assert!(app.notifications().is_empty());
    }

    #[test]
    fn catalog_outcomes_become_toasts() {
        let (mut app, _clock) = app_with_clock(None);

        let _ = app.update(Message::Catalog(catalog::Message::GiftsLoaded(Err(
            StoreError::Network("offline".to_string()),
        ))));

        assert_eq!(app.notifications().len(), 1);
        assert!(!app.catalog().is_loading());
    }

    #[test]
    fn ticks_expire_toasts() {
        let (mut app, clock) = app_with_clock(Some("notification-config-load-error".to_string()));
        let id = app
            .notifications()
            .notifications()
            .next()
            .map(notifications::Notification::id)
            .expect("startup toast");

        clock.advance(Duration::from_millis(3_000));
        let _ = app.update(Message::Tick(clock.now()));
        assert_eq!(
            app.notifications().visual_state(id),
            Some(VisualState::Exiting)
        );

        clock.advance(Duration::from_millis(300));
        let _ = app.update(Message::Tick(clock.now()));
        assert!(app.notifications().is_empty());
    }

    #[test]
    fn dismiss_message_starts_exit() {
        let (mut app, _clock) = app_with_clock(Some("notification-config-load-error".to_string()));
        let id = app
            .notifications()
            .notifications()
            .next()
            .map(notifications::Notification::id)
            .expect("startup toast");

        let _ = app.update(Message::Notification(
            notifications::NotificationMessage::Dismiss(id),
        ));
        assert_eq!(
            app.notifications().visual_state(id),
            Some(VisualState::Exiting)
        );
    }

    #[test]
    fn view_renders() {
        let (app, _clock) = app_with_clock(None);
        let _element = app.view();
    }
}
