// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct wires together localization, the feature registry and the
//! toast manager, and translates messages into toasts.

mod message;
pub mod paths;
mod persistence;
mod subscription;
mod update;
mod view;

pub use message::{Feedback, Flags, Message};

use crate::config;
use crate::diagnostics::{DiagnosticsCollector, WarningType};
use crate::features::{Features, FEATURES};
use crate::i18n::fluent::I18n;
use crate::ui::notifications::{self, Notification};
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;

/// Root Iced application state.
pub struct App {
    i18n: I18n,
    features: Features,
    theme_mode: ThemeMode,
    /// Toast notification manager for user feedback.
    notifications: notifications::Manager,
    diagnostics: DiagnosticsCollector,
    /// `--config-dir`, if given. Preferences are saved there.
    config_dir: Option<PathBuf>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("features", &self.features)
            .field("theme_mode", &self.theme_mode)
            .field("visible_toasts", &self.notifications.visible_count())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 600;
pub const WINDOW_DEFAULT_WIDTH: u32 = 800;
pub const MIN_WINDOW_HEIGHT: u32 = 400;
pub const MIN_WINDOW_WIDTH: u32 = 500;

pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced requires an Fn boot closure; flags are consumed on the first call
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
    fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_overrides(flags.config_dir.clone());
        let (config, config_warning) = config::load();
        (Self::from_config(flags, &config, config_warning), Task::none())
    }

    /// Builds the application from already-loaded settings.
    ///
    /// `config_warning` is an i18n key shown as a warning toast.
    pub fn from_config(
        flags: Flags,
        config: &config::Config,
        config_warning: Option<String>,
    ) -> Self {
        let diagnostics = DiagnosticsCollector::default();
        let mut notifications = notifications::Manager::with_config(&config.notifications);
        notifications.set_diagnostics(diagnostics.handle());

        if let Some(key) = config_warning {
            notifications.push(
                Notification::warning(key).with_warning_type(WarningType::ConfigurationIssue),
            );
        }

        for (name, capability) in FEATURES.iter() {
            log::info!("feature {name}: enabled={}", capability.enabled);
        }

        Self {
            i18n: I18n::new(flags.lang, config),
            features: FEATURES,
            theme_mode: config.general.theme_mode,
            notifications,
            diagnostics,
            config_dir: flags.config_dir.map(PathBuf::from),
        }
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_tick_subscription(self.notifications.has_notifications())
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            i18n: &mut self.i18n,
            notifications: &mut self.notifications,
            diagnostics: &mut self.diagnostics,
            config_dir: self.config_dir.clone(),
        };
        update::handle_message(&mut ctx, message)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            features: &self.features,
            notifications: &self.notifications,
            diagnostics: &self.diagnostics,
        })
    }

    #[must_use]
    pub fn notifications(&self) -> &notifications::Manager {
        &self.notifications
    }

    #[must_use]
    pub fn diagnostics(&self) -> &DiagnosticsCollector {
        &self.diagnostics
    }

    #[must_use]
    pub fn i18n(&self) -> &I18n {
        &self.i18n
    }
}
