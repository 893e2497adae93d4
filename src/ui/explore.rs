// SPDX-License-Identifier: MPL-2.0
//! Explore screen: a header plus one featured card per item.

use crate::content::{mock, FeaturedItem, Interaction};
use crate::i18n::fluent::I18n;
use crate::ui::components::featured_card;
use crate::ui::design_tokens::spacing;
use crate::ui::themed::{self, TextVariant};
use crate::ui::theming::AppTheme;
use iced::widget::{Column, Container, Scrollable};
use iced::{Element, Length};

/// Messages emitted by the explore screen.
#[derive(Debug, Clone)]
pub enum Message {
    Card(Interaction),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// A card interaction to resolve into a notification.
    Interaction(Interaction),
}

/// Explore screen state: the owned featured collection.
pub struct State {
    items: Vec<FeaturedItem>,
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self {
            items: mock::featured_items(),
        }
    }

    #[must_use]
    pub fn items(&self) -> &[FeaturedItem] {
        &self.items
    }

    /// Processes an explore screen message.
    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::Card(interaction) => Event::Interaction(interaction),
        }
    }
}

impl Default for State {
    fn default() -> Self {
        Self::new()
    }
}

/// Context required to render the explore screen.
pub struct ViewContext<'a> {
    pub app_theme: &'a AppTheme,
    pub i18n: &'a I18n,
    pub viewport_width: f32,
}

/// Renders the header and the card list inside a vertical scroll area.
pub fn view<'a>(state: &'a State, ctx: ViewContext<'a>) -> Element<'a, Message> {
    let header = Column::new()
        .spacing(spacing::XS)
        .padding(spacing::MD)
        .push(themed::text(ctx.app_theme, TextVariant::Title, ctx.i18n.tr("explore-title")))
        .push(themed::text(
            ctx.app_theme,
            TextVariant::Default,
            ctx.i18n.tr("explore-subtitle"),
        ));

    let card_ctx = featured_card::ViewContext {
        app_theme: ctx.app_theme,
        viewport_width: ctx.viewport_width,
    };

    let mut column = Column::new().spacing(spacing::LG).push(header);
    for item in state.items() {
        column = column.push(featured_card::view(&card_ctx, item).map(Message::Card));
    }

    themed::surface(
        ctx.app_theme,
        Scrollable::new(Container::new(column).width(Length::Fill))
            .width(Length::Fill)
            .height(Length::Fill),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{Action, Source};

    #[test]
    fn new_state_owns_the_mock_items() {
        let state = State::new();
        assert_eq!(state.items().len(), 3);
    }

    #[test]
    fn card_interaction_bubbles_up() {
        let mut state = State::new();
        let interaction = Interaction::new(Source::FeaturedCard, "2", Action::BookmarkToggled);
        let event = state.update(Message::Card(interaction.clone()));
        assert_eq!(event, Event::Interaction(interaction));
    }
}
