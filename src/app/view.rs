// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Renders the active screen under the tab bar, with the toast overlay
//! stacked on top.

use super::{App, Message, Screen};
use crate::ui::explore;
use crate::ui::home;
use crate::ui::notifications::Toast;
use crate::ui::tab_bar;
use iced::widget::{Column, Container, Stack};
use iced::{Element, Length};

impl App {
    /// Renders the current application view based on the active screen.
    pub fn view(&self) -> Element<'_, Message> {
        let screen_view: Element<'_, Message> = match self.screen {
            Screen::Home => home::view(
                &self.home,
                home::ViewContext {
                    app_theme: &self.theme,
                    i18n: &self.i18n,
                    viewport_width: self.viewport_width,
                },
            )
            .map(Message::Home),
            Screen::Explore => explore::view(
                &self.explore,
                explore::ViewContext {
                    app_theme: &self.theme,
                    i18n: &self.i18n,
                    viewport_width: self.viewport_width,
                },
            )
            .map(Message::Explore),
        };

        let tab_bar_view = tab_bar::view(tab_bar::ViewContext {
            app_theme: &self.theme,
            i18n: &self.i18n,
            active: self.screen,
        })
        .map(Message::TabBar);

        let chrome = Column::new()
            .push(
                Container::new(screen_view)
                    .width(Length::Fill)
                    .height(Length::Fill),
            )
            .push(tab_bar_view);

        let toasts = Toast::view_overlay(&self.notifications, &self.theme, &self.i18n)
            .map(Message::Notification);

        Stack::new()
            .push(chrome)
            .push(toasts)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn view_renders_without_panicking() {
        let app = App::default();
        let _element = app.view();
    }

    #[test]
    fn view_renders_explore_screen_too() {
        let mut app = App::default();
        let _ = app.update(Message::TabBar(tab_bar::Message::TabPressed(
            Screen::Explore,
        )));
        let _element = app.view();
    }
}
