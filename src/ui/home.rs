// SPDX-License-Identifier: MPL-2.0
//! Home screen: the paginated gallery over its static item collection, with
//! the theme toggle floating over the top-right corner of the strip.

use crate::config::SlideBinding;
use crate::content::{mock, GalleryItem, Interaction};
use crate::i18n::fluent::I18n;
use crate::ui::components::theme_toggle;
use crate::ui::design_tokens::spacing;
use crate::ui::gallery;
use crate::ui::themed;
use crate::ui::theming::AppTheme;
use iced::widget::{Container, Scrollable, Stack};
use iced::{alignment, Element, Length};

/// Messages emitted by the home screen.
#[derive(Debug, Clone)]
pub enum Message {
    Gallery(gallery::Message),
    ThemeTogglePressed,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    None,
    /// A content interaction to resolve into a notification.
    Interaction(Interaction),
    /// The user asked to flip the theme.
    ToggleTheme,
}

/// Home screen state: the owned item collection and the gallery over it.
pub struct State {
    items: Vec<GalleryItem>,
    gallery: gallery::State,
}

impl State {
    #[must_use]
    pub fn new(binding: SlideBinding) -> Self {
        let items = mock::gallery_items();
        let gallery = gallery::State::new(items.len(), binding);
        Self { items, gallery }
    }

    #[must_use]
    pub fn items(&self) -> &[GalleryItem] {
        &self.items
    }

    #[must_use]
    pub fn gallery(&self) -> &gallery::State {
        &self.gallery
    }

    /// Processes a home screen message.
    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::Gallery(message) => match self.gallery.update(message) {
                gallery::Event::Interaction(interaction) => Event::Interaction(interaction),
                gallery::Event::None => Event::None,
            },
            Message::ThemeTogglePressed => Event::ToggleTheme,
        }
    }
}

/// Context required to render the home screen.
pub struct ViewContext<'a> {
    pub app_theme: &'a AppTheme,
    pub i18n: &'a I18n,
    pub viewport_width: f32,
}

/// Renders the gallery inside a vertical scroll area, with the theme toggle
/// overlaid on the strip.
pub fn view<'a>(state: &'a State, ctx: ViewContext<'a>) -> Element<'a, Message> {
    let gallery_view = gallery::view(
        state.gallery(),
        gallery::ViewContext {
            app_theme: ctx.app_theme,
            i18n: ctx.i18n,
            items: state.items(),
            page_width: ctx.viewport_width,
        },
    )
    .map(Message::Gallery);

    let toggle = Container::new(theme_toggle::view(
        ctx.app_theme,
        ctx.i18n,
        Message::ThemeTogglePressed,
    ))
    .width(Length::Fill)
    .align_x(alignment::Horizontal::Right)
    .padding(spacing::SM);

    let stacked = Stack::new().push(gallery_view).push(toggle);

    themed::surface(
        ctx.app_theme,
        Scrollable::new(stacked).width(Length::Fill).height(Length::Fill),
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
        let state = State::new(SlideBinding::Faithful);
        assert_eq!(state.items().len(), 5);
        assert_eq!(state.gallery().active_index(), Some(0));
    }

    #[test]
    fn toggle_press_bubbles_up() {
        let mut state = State::new(SlideBinding::Faithful);
        assert_eq!(state.update(Message::ThemeTogglePressed), Event::ToggleTheme);
    }

    #[test]
    fn gallery_interaction_bubbles_up() {
        let mut state = State::new(SlideBinding::Faithful);
        let interaction = Interaction::new(Source::InteractiveList, "ios", Action::Selected);
        let event = state.update(Message::Gallery(gallery::Message::Content(
            interaction.clone(),
        )));
        assert_eq!(event, Event::Interaction(interaction));
    }

    #[test]
    fn dot_press_moves_the_gallery() {
        let mut state = State::new(SlideBinding::Faithful);
        state.update(Message::Gallery(gallery::Message::DotPressed(2)));
        assert_eq!(state.gallery().active_index(), Some(2));
    }
}
