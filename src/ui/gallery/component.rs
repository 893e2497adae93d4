// SPDX-License-Identifier: MPL-2.0
//! Gallery component encapsulating state and update logic.
//!
//! The component owns a [`SlideNavigator`] and nothing else; items are
//! borrowed from the screen on every render. Scroll-settle and dot-press
//! events go through the navigator so the active index can never leave the
//! collection's bounds.

use crate::config::SlideBinding;
use crate::content::{ContentBlock, Description, GalleryItem, Interaction};
use crate::i18n::fluent::I18n;
use crate::slide_navigation::SlideNavigator;
use crate::ui::components::{
    action_buttons, feature_list, info_cards, interactive_list, placeholder, progress_bar,
};
use crate::ui::design_tokens::{sizing, spacing};
use crate::ui::styles;
use crate::ui::theme;
use crate::ui::themed::{self, TextVariant};
use crate::ui::theming::AppTheme;
use iced::widget::scrollable::{Direction, Scrollbar, Viewport};
use iced::widget::{button, Column, Container, Row, Scrollable, Space};
use iced::{alignment, Element, Length};

/// Slides keep the 16:9 frame of the strip they are paged in.
const SLIDE_ASPECT_RATIO: f32 = 16.0 / 9.0;

/// Messages emitted by gallery widgets.
#[derive(Debug, Clone)]
pub enum Message {
    /// The horizontal strip reported a new scroll position.
    ScrollSettled(Viewport),
    /// A pagination dot was pressed.
    DotPressed(usize),
    /// An interaction bubbled up from the active item's content blocks.
    Content(Interaction),
}

/// Side effects the parent should perform after an update.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    None,
    /// A content interaction to resolve into a notification.
    Interaction(Interaction),
}

/// Gallery state: the navigator plus the configured slide binding.
#[derive(Debug, Clone)]
pub struct State {
    navigator: SlideNavigator,
    binding: SlideBinding,
}

impl State {
    #[must_use]
    pub fn new(item_count: usize, binding: SlideBinding) -> Self {
        Self {
            navigator: SlideNavigator::new(item_count),
            binding,
        }
    }

    #[must_use]
    pub fn active_index(&self) -> Option<usize> {
        self.navigator.active_index()
    }

    #[must_use]
    pub fn binding(&self) -> SlideBinding {
        self.binding
    }

    /// Processes a gallery message and returns the event for the parent.
    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::ScrollSettled(viewport) => {
                let offset = viewport.absolute_offset();
                self.navigator.settle(offset.x, viewport.bounds().width);
                Event::None
            }
            Message::DotPressed(index) => {
                // Pressing a dot selects the slide without scrolling the
                // strip, matching the presentation this reproduces.
                self.navigator.activate(index);
                Event::None
            }
            Message::Content(interaction) => Event::Interaction(interaction),
        }
    }
}

/// Which item's image a slide renders under the given binding.
///
/// `Faithful` reproduces the source behavior where every slide shows the
/// active item's image; `PerSlide` is the corrected per-slide reading.
#[must_use]
pub fn slide_image_index(binding: SlideBinding, active: usize, slide: usize) -> usize {
    match binding {
        SlideBinding::Faithful => active,
        SlideBinding::PerSlide => slide,
    }
}

/// Context required to render the gallery.
pub struct ViewContext<'a> {
    pub app_theme: &'a AppTheme,
    pub i18n: &'a I18n,
    pub items: &'a [GalleryItem],
    /// Width of one page of the strip (the viewport width).
    pub page_width: f32,
}

/// Renders the paged strip, the dot row, and the active item's content
/// panel. An empty item collection renders an explicit empty state.
pub fn view<'a>(state: &State, ctx: ViewContext<'a>) -> Element<'a, Message> {
    let Some(active) = state.active_index().filter(|i| *i < ctx.items.len()) else {
        return empty_state(&ctx);
    };

    let image_height = ctx.page_width / SLIDE_ASPECT_RATIO;

    let mut strip = Row::new();
    for slide in 0..ctx.items.len() {
        let shown = &ctx.items[slide_image_index(state.binding(), active, slide)];
        strip = strip.push(placeholder::media(
            ctx.app_theme,
            shown.image.as_str(),
            shown.title.as_str(),
            Length::Fixed(ctx.page_width),
            image_height,
        ));
    }

    let strip = Scrollable::new(strip)
        .width(Length::Fixed(ctx.page_width))
        .height(Length::Fixed(image_height))
        .direction(Direction::Horizontal(Scrollbar::hidden()))
        .on_scroll(Message::ScrollSettled);

    let mut dots = Row::new()
        .spacing(spacing::XS)
        .align_y(alignment::Vertical::Center);
    for index in 0..ctx.items.len() {
        let color = theme::dot_color(ctx.app_theme.colors(), index == active);
        dots = dots.push(
            button(
                Space::new()
                    .width(Length::Fixed(sizing::DOT))
                    .height(Length::Fixed(sizing::DOT)),
            )
            .padding(0)
            .style(styles::button::dot(color))
            .on_press(Message::DotPressed(index)),
        );
    }

    let pagination = Container::new(dots)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::PAGINATION_STRIP))
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center);

    let item = &ctx.items[active];
    let content_panel = Column::new()
        .spacing(spacing::MD)
        .push(themed::text(ctx.app_theme, TextVariant::Title, item.title.as_str()))
        .push(description(&ctx, &item.description));

    let panel = themed::surface(
        ctx.app_theme,
        Container::new(content_panel)
            .width(Length::Fill)
            .padding(spacing::MD),
    );

    Column::new()
        .push(strip)
        .push(pagination)
        .push(panel)
        .into()
}

/// Resolves the tagged description into widgets.
fn description<'a>(ctx: &ViewContext<'a>, description: &'a Description) -> Element<'a, Message> {
    match description {
        Description::Text(text) => {
            themed::text(ctx.app_theme, TextVariant::Default, text.as_str()).into()
        }
        Description::Blocks(blocks) => {
            let mut column = Column::new().spacing(spacing::MD);
            for block in blocks {
                column = column.push(content_block(ctx, block));
            }
            column.into()
        }
    }
}

fn content_block<'a>(ctx: &ViewContext<'a>, block: &'a ContentBlock) -> Element<'a, Message> {
    match block {
        ContentBlock::Paragraph(text) => {
            themed::text(ctx.app_theme, TextVariant::Default, text.as_str()).into()
        }
        ContentBlock::Features(features) => {
            feature_list::view(ctx.app_theme, ctx.i18n, features)
        }
        ContentBlock::Actions { primary, secondary } => {
            action_buttons::view(ctx.app_theme, primary, secondary).map(Message::Content)
        }
        ContentBlock::Cards(cards) => info_cards::view(ctx.app_theme, cards),
        ContentBlock::Progress { steps, current } => progress_bar::view(
            ctx.app_theme,
            ctx.i18n,
            progress_bar::Progress::new(steps, *current),
        ),
        ContentBlock::Options(entries) => {
            interactive_list::view(ctx.app_theme, ctx.i18n, entries).map(Message::Content)
        }
    }
}

fn empty_state<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    Container::new(themed::text(
        ctx.app_theme,
        TextVariant::Subtitle,
        ctx.i18n.tr("gallery-empty"),
    ))
    .width(Length::Fill)
    .height(Length::Fixed(sizing::CONTENT_PANEL_MIN_HEIGHT))
    .align_x(alignment::Horizontal::Center)
    .align_y(alignment::Vertical::Center)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scrolled_state(item_count: usize) -> State {
        State::new(item_count, SlideBinding::Faithful)
    }

    #[test]
    fn new_state_starts_on_first_slide() {
        let state = scrolled_state(5);
        assert_eq!(state.active_index(), Some(0));
    }

    #[test]
    fn dot_press_selects_exact_slide() {
        let mut state = scrolled_state(5);
        state.update(Message::DotPressed(3));
        assert_eq!(state.active_index(), Some(3));
    }

    #[test]
    fn out_of_range_dot_press_is_rejected() {
        let mut state = scrolled_state(5);
        state.update(Message::DotPressed(9));
        assert_eq!(state.active_index(), Some(0));
    }

    #[test]
    fn content_interaction_is_forwarded_to_parent() {
        use crate::content::{Action, Interaction, Source};

        let mut state = scrolled_state(2);
        let interaction = Interaction::new(Source::InteractiveList, "web", Action::Selected);
        let event = state.update(Message::Content(interaction.clone()));
        assert_eq!(event, Event::Interaction(interaction));
    }

    #[test]
    fn empty_gallery_reports_no_active_index() {
        let state = scrolled_state(0);
        assert_eq!(state.active_index(), None);
    }
}
