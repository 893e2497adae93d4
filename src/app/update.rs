// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! All state transitions happen synchronously in [`App::update`]; events are
//! processed strictly in the order the runtime delivers them.

use super::{App, Message};
use crate::content::Interaction;
use crate::ui::explore;
use crate::ui::home;
use crate::ui::notifications::Notification;
use crate::ui::tab_bar;
use iced::Task;

impl App {
    /// Single update entrypoint.
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Home(message) => match self.home.update(message) {
                home::Event::Interaction(interaction) => self.notify(interaction),
                home::Event::ToggleTheme => self.theme.toggle(),
                home::Event::None => {}
            },
            Message::Explore(message) => match self.explore.update(message) {
                explore::Event::Interaction(interaction) => self.notify(interaction),
            },
            Message::TabBar(message) => {
                if let tab_bar::Event::SwitchTo(screen) = tab_bar::update(message, self.screen) {
                    tracing::debug!(?screen, "switching screen");
                    self.screen = screen;
                }
            }
            Message::Notification(message) => {
                self.notifications.handle_message(&message);
            }
            Message::DeviceSchemeChanged(scheme) => {
                // The device signal wins over any prior manual toggle.
                self.theme.apply_device_scheme(scheme);
            }
            Message::WindowResized(size) => {
                self.viewport_width = size.width;
            }
            Message::Tick(_) => {
                self.notifications.tick();
            }
        }

        Task::none()
    }

    /// Resolves a typed interaction payload into a toast notification.
    fn notify(&mut self, interaction: Interaction) {
        tracing::info!(
            source = ?interaction.source,
            action = ?interaction.action,
            item = %interaction.item,
            "interaction"
        );
        let (arg_name, arg_value) = interaction.message_arg();
        self.notifications
            .push(Notification::info(interaction.message_key()).with_arg(arg_name, arg_value));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{Action, Source};
    use crate::ui::gallery;
    use crate::ui::theming::{DeviceScheme, ThemeMode};

    fn interaction() -> Interaction {
        Interaction::new(Source::InteractiveList, "android", Action::Selected)
    }

    #[test]
    fn interaction_produces_exactly_one_toast() {
        let mut app = App::default();
        let _ = app.update(Message::Home(home::Message::Gallery(
            gallery::Message::Content(interaction()),
        )));
        assert_eq!(app.notifications.visible_count(), 1);
        let toast = app.notifications.visible().next().expect("toast");
        assert_eq!(toast.message_key(), "toast-option-selected");
        assert_eq!(toast.message_args(), &[("id".to_string(), "android".to_string())]);
    }

    #[test]
    fn theme_toggle_message_flips_mode() {
        let mut app = App::default();
        let before = app.theme.mode();
        let _ = app.update(Message::Home(home::Message::ThemeTogglePressed));
        assert_eq!(app.theme.mode(), before.toggled());
    }

    #[test]
    fn device_scheme_message_overrides_toggle() {
        let mut app = App::default();
        app.theme.set_mode(ThemeMode::Dark);
        let _ = app.update(Message::DeviceSchemeChanged(DeviceScheme::Light));
        assert_eq!(app.theme.mode(), ThemeMode::Light);
    }

    #[test]
    fn tab_switch_changes_screen() {
        let mut app = App::default();
        let _ = app.update(Message::TabBar(tab_bar::Message::TabPressed(
            super::super::Screen::Explore,
        )));
        assert_eq!(app.screen, super::super::Screen::Explore);
    }

    #[test]
    fn resize_updates_viewport_width() {
        let mut app = App::default();
        let _ = app.update(Message::WindowResized(iced::Size::new(1024.0, 800.0)));
        assert_eq!(app.viewport_width, 1024.0);
    }

    #[test]
    fn explore_bookmark_toggle_notifies() {
        let mut app = App::default();
        let toggled = Interaction::new(Source::FeaturedCard, "2", Action::BookmarkToggled);
        let _ = app.update(Message::Explore(explore::Message::Card(toggled)));
        let toast = app.notifications.visible().next().expect("toast");
        assert_eq!(toast.message_key(), "toast-bookmark-toggled");
    }
}
