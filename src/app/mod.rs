// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the screens.
//!
//! The `App` struct wires together the domains (screens, theming,
//! localization, notifications) and keeps the policy decisions — window
//! geometry, which interactions notify, device-scheme precedence — close to
//! the main update loop so user-facing behavior is easy to audit.

mod message;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::config::{self, Config};
use crate::i18n::fluent::I18n;
use crate::ui::explore;
use crate::ui::home;
use crate::ui::notifications;
use crate::ui::theming::{AppTheme, ThemeMode};
use iced::{window, Subscription, Task, Theme};
use std::fmt;

pub const WINDOW_DEFAULT_WIDTH: u32 = 420;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 860;
pub const MIN_WINDOW_WIDTH: u32 = 360;
pub const MIN_WINDOW_HEIGHT: u32 = 640;

/// Root Iced application state bridging UI components, localization, and
/// the session-scoped theme.
pub struct App {
    pub i18n: I18n,
    screen: Screen,
    theme: AppTheme,
    home: home::State,
    explore: explore::State,
    /// Toast notification manager for user feedback.
    notifications: notifications::Manager,
    /// Tracked window width; drives the featured-card breakpoint and the
    /// gallery page width.
    viewport_width: f32,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("theme_mode", &self.theme.mode())
            .finish()
    }
}

impl Default for App {
    fn default() -> Self {
        let config = Config::default();
        Self {
            i18n: I18n::default(),
            screen: Screen::Home,
            theme: AppTheme::from_device(),
            home: home::State::new(config.slide_binding),
            explore: explore::State::new(),
            notifications: notifications::Manager::new(),
            viewport_width: WINDOW_DEFAULT_WIDTH as f32,
        }
    }
}

impl App {
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = config::load().unwrap_or_else(|err| {
            tracing::warn!("failed to load settings: {err}");
            Config::default()
        });
        let i18n = I18n::new(flags.lang, &config);

        let app = App {
            i18n,
            home: home::State::new(config.slide_binding),
            ..Self::default()
        };

        (app, Task::none())
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    /// Maps the app theme onto the built-in Iced palettes so stock widgets
    /// follow along.
    fn theme(&self) -> Theme {
        match self.theme.mode() {
            ThemeMode::Light => Theme::Light,
            ThemeMode::Dark => Theme::Dark,
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create(self)
    }
}

/// Builds the window settings.
fn window_settings() -> window::Settings {
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

    // Wrap flags in RefCell<Option<_>> to satisfy the Fn trait requirement
    // while only consuming flags once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_app_starts_on_home() {
        let app = App::default();
        assert_eq!(app.screen, Screen::Home);
    }

    #[test]
    fn title_is_localized_app_name() {
        let app = App::default();
        assert_eq!(app.title(), "Iced Carousel");
    }

    #[test]
    fn iced_theme_follows_app_theme() {
        let mut app = App::default();
        app.theme.set_mode(ThemeMode::Dark);
        assert!(matches!(app.theme(), Theme::Dark));
        app.theme.set_mode(ThemeMode::Light);
        assert!(matches!(app.theme(), Theme::Light));
    }

    #[test]
    fn window_settings_enforce_minimum_size() {
        let settings = window_settings();
        let min = settings.min_size.expect("min size");
        assert!(min.width <= settings.size.width);
        assert!(min.height <= settings.size.height);
    }
}
