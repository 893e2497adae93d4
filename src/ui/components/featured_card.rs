// SPDX-License-Identifier: MPL-2.0
//! Responsive featured card.
//!
//! Layout is a pure function of the viewport width: wide viewports get a
//! two-column card (text beside image), narrow ones get a full-width image
//! with a translucent text overlay at the bottom. The card reflects the
//! bookmark flag it is given and reports presses upward; it never tracks
//! state of its own.

use crate::content::{Action, FeaturedItem, Interaction, Source};
use crate::ui::design_tokens::{breakpoint, palette, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use crate::ui::theme;
use crate::ui::themed::{self, ColorOverride, TextVariant};
use crate::ui::theming::AppTheme;
use iced::widget::{button, Column, Container, Row, Stack, Text};
use iced::{alignment, Color, Element, Length};

/// Margin subtracted from the full viewport in the single-column layout
/// (16 units on each side).
const OVERLAY_MARGIN: f32 = 32.0;
/// Margin subtracted from the half viewport in the two-column layout.
const COLUMN_MARGIN: f32 = 24.0;

/// The two layout modes and their computed image widths.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CardLayout {
    /// Full-width image with a text overlay at the bottom.
    Overlay { image_width: f32 },
    /// Text column beside an image column.
    TwoColumn { image_width: f32 },
}

impl CardLayout {
    /// Selects the layout for a viewport width.
    #[must_use]
    pub fn for_width(viewport_width: f32) -> Self {
        if viewport_width >= breakpoint::TABLET {
            CardLayout::TwoColumn {
                image_width: viewport_width / 2.0 - COLUMN_MARGIN,
            }
        } else {
            CardLayout::Overlay {
                image_width: viewport_width - OVERLAY_MARGIN,
            }
        }
    }

    #[must_use]
    pub fn image_width(&self) -> f32 {
        match *self {
            CardLayout::Overlay { image_width } | CardLayout::TwoColumn { image_width } => {
                image_width
            }
        }
    }
}

/// Context needed to render a featured card.
pub struct ViewContext<'a> {
    pub app_theme: &'a AppTheme,
    pub viewport_width: f32,
}

/// Renders the card for the given item.
pub fn view<'a>(ctx: &ViewContext<'_>, item: &'a FeaturedItem) -> Element<'a, Interaction> {
    match CardLayout::for_width(ctx.viewport_width) {
        layout @ CardLayout::TwoColumn { .. } => two_column(ctx, item, layout),
        layout @ CardLayout::Overlay { .. } => overlay(ctx, item, layout),
    }
}

fn category_label<'a>(item: &'a FeaturedItem) -> Text<'a> {
    Text::new(item.category.to_uppercase())
        .size(typography::CAPTION)
        .font(TextVariant::DefaultSemiBold.font())
        .style(|_theme: &iced::Theme| iced::widget::text::Style {
            color: Some(palette::ACCENT_500),
        })
}

fn text_block<'a>(
    ctx: &ViewContext<'_>,
    item: &'a FeaturedItem,
    title_override: ColorOverride,
    description_override: ColorOverride,
) -> Column<'a, Interaction> {
    Column::new()
        .spacing(spacing::XS)
        .push(category_label(item))
        .push(themed::text_with(
            ctx.app_theme,
            TextVariant::Subtitle,
            title_override,
            item.title.as_str(),
        ))
        .push(themed::text_with(
            ctx.app_theme,
            TextVariant::Default,
            description_override,
            item.description.as_str(),
        ))
}

fn bookmark_button<'a>(item: &'a FeaturedItem, icon_color: Color) -> Element<'a, Interaction> {
    button(
        Container::new(icons::bookmark(sizing::ICON_LG, icon_color))
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center),
    )
    .width(Length::Fixed(sizing::BOOKMARK_BUTTON))
    .height(Length::Fixed(sizing::BOOKMARK_BUTTON))
    .style(styles::button::bookmark(theme::bookmark_background(
        item.bookmarked,
    )))
    .on_press(Interaction::new(
        Source::FeaturedCard,
        item.id.clone(),
        Action::BookmarkToggled,
    ))
    .into()
}

fn media<'a>(
    ctx: &ViewContext<'_>,
    item: &'a FeaturedItem,
    image_width: f32,
) -> Element<'a, Interaction> {
    crate::ui::components::placeholder::media(
        ctx.app_theme,
        item.image.as_str(),
        item.title.as_str(),
        Length::Fixed(image_width),
        sizing::FEATURED_IMAGE_HEIGHT,
    )
}

/// Wide layout: text column on the left, tappable image column on the right.
fn two_column<'a>(
    ctx: &ViewContext<'_>,
    item: &'a FeaturedItem,
    layout: CardLayout,
) -> Element<'a, Interaction> {
    let colors = ctx.app_theme.colors();

    // Text follows the theme in this layout.
    let text_column = Column::new()
        .width(Length::Fill)
        .spacing(spacing::MD)
        .push(text_block(ctx, item, ColorOverride::default(), ColorOverride::default()))
        .push(bookmark_button(item, colors.text_primary));

    let image_column = button(media(ctx, item, layout.image_width()))
        .style(styles::button::bare)
        .padding(0)
        .on_press(Interaction::new(
            Source::FeaturedCard,
            item.id.clone(),
            Action::Opened,
        ));

    Container::new(
        Row::new()
            .spacing(spacing::MD)
            .push(text_column)
            .push(image_column),
    )
    .padding([0.0, spacing::MD])
    .into()
}

/// Narrow layout: full-width tappable image with a scrimmed text overlay
/// anchored at the bottom.
fn overlay<'a>(
    ctx: &ViewContext<'_>,
    item: &'a FeaturedItem,
    layout: CardLayout,
) -> Element<'a, Interaction> {
    // Overlay text sits on the scrim, so it is light in both modes.
    let title_override = ColorOverride::both(palette::WHITE);
    let description_override = ColorOverride::both(Color::from_rgb(0.933, 0.933, 0.933));

    let overlay_row = Row::new()
        .spacing(spacing::MD)
        .align_y(alignment::Vertical::Bottom)
        .push(
            text_block(ctx, item, title_override, description_override).width(Length::Fill),
        )
        .push(bookmark_button(item, palette::WHITE));

    let scrim = Container::new(overlay_row)
        .width(Length::Fixed(layout.image_width()))
        .padding(spacing::MD)
        .style(styles::container::scrim(theme::card_scrim_color()));

    let stacked = Stack::new()
        .push(media(ctx, item, layout.image_width()))
        .push(
            Container::new(scrim)
                .height(Length::Fixed(sizing::FEATURED_IMAGE_HEIGHT))
                .align_y(alignment::Vertical::Bottom),
        );

    let card = button(stacked)
        .style(styles::button::bare)
        .padding(0)
        .on_press(Interaction::new(
            Source::FeaturedCard,
            item.id.clone(),
            Action::Opened,
        ));

    Container::new(card).padding([0.0, spacing::MD]).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::design_tokens::opacity;

    #[test]
    fn tablet_width_selects_two_column_layout() {
        let layout = CardLayout::for_width(1024.0);
        assert_eq!(
            layout,
            CardLayout::TwoColumn {
                image_width: 512.0 - 24.0
            }
        );
    }

    #[test]
    fn phone_width_selects_overlay_layout() {
        let layout = CardLayout::for_width(400.0);
        assert_eq!(
            layout,
            CardLayout::Overlay {
                image_width: 400.0 - 32.0
            }
        );
    }

    #[test]
    fn breakpoint_boundary_is_inclusive() {
        assert!(matches!(
            CardLayout::for_width(768.0),
            CardLayout::TwoColumn { .. }
        ));
        assert!(matches!(
            CardLayout::for_width(767.9),
            CardLayout::Overlay { .. }
        ));
    }

    #[test]
    fn image_height_is_fixed_regardless_of_layout() {
        // Both layouts render the media at the same fixed height token.
        assert_eq!(sizing::FEATURED_IMAGE_HEIGHT, 584.0);
    }

    #[test]
    fn opacity_tokens_used_by_scrim_are_translucent() {
        let scrim = theme::card_scrim_color();
        assert!(scrim.a > 0.0 && scrim.a < opacity::OPAQUE);
    }
}
