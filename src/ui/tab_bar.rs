// SPDX-License-Identifier: MPL-2.0
//! Two-tab shell for switching between the Home and Explore screens.

use crate::app::Screen;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::AppTheme;
use iced::widget::{button, container, text, Row, Text};
use iced::{alignment, Element, Length};

/// Contextual data needed to render the tab bar.
pub struct ViewContext<'a> {
    pub app_theme: &'a AppTheme,
    pub i18n: &'a I18n,
    pub active: Screen,
}

/// Messages emitted by the tab bar.
#[derive(Debug, Clone)]
pub enum Message {
    TabPressed(Screen),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    None,
    SwitchTo(Screen),
}

/// Process a tab bar message and return the corresponding event.
pub fn update(message: Message, active: Screen) -> Event {
    match message {
        Message::TabPressed(screen) if screen == active => Event::None,
        Message::TabPressed(screen) => Event::SwitchTo(screen),
    }
}

/// Render the tab bar.
pub fn view<'a>(ctx: ViewContext<'_>) -> Element<'a, Message> {
    let colors = ctx.app_theme.colors();
    let background = colors.surface_secondary;

    let mut row = Row::new().width(Length::Fill);
    for (screen, label_key) in [(Screen::Home, "tab-home"), (Screen::Explore, "tab-explore")] {
        let is_active = screen == ctx.active;
        let label_color = if is_active { colors.tint } else { colors.icon };

        let label = Text::new(ctx.i18n.tr(label_key))
            .size(typography::BODY)
            .style(move |_theme: &iced::Theme| text::Style {
                color: Some(label_color),
            })
            .align_x(alignment::Horizontal::Center)
            .width(Length::Fill);

        row = row.push(
            button(label)
                .width(Length::Fill)
                .padding(spacing::MD)
                .style(styles::button::bare)
                .on_press(Message::TabPressed(screen)),
        );
    }

    container(row)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::TAB_BAR_HEIGHT))
        .style(styles::container::surface(background))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pressing_other_tab_switches() {
        let event = update(Message::TabPressed(Screen::Explore), Screen::Home);
        assert_eq!(event, Event::SwitchTo(Screen::Explore));
    }

    #[test]
    fn pressing_active_tab_is_a_no_op() {
        let event = update(Message::TabPressed(Screen::Home), Screen::Home);
        assert_eq!(event, Event::None);
    }
}
