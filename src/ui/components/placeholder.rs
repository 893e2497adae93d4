// SPDX-License-Identifier: MPL-2.0
//! Image stand-in panel.
//!
//! Item images are referenced by source string. A source that resolves to an
//! existing local file is rendered with the image widget; anything else
//! (remote URLs are never fetched) degrades to a quiet placeholder panel so
//! a missing image never breaks the surrounding layout.

use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::theme;
use crate::ui::theming::AppTheme;
use iced::widget::image::{Handle, Image};
use iced::widget::{Column, Container, Text};
use iced::{alignment, ContentFit, Element, Length};
use std::path::Path;

/// Renders the media area for an item: its image when locally resolvable,
/// otherwise a placeholder panel carrying the item's title.
pub fn media<'a, M: 'a>(
    app_theme: &AppTheme,
    source: &'a str,
    title: &'a str,
    width: Length,
    height: f32,
) -> Element<'a, M> {
    if Path::new(source).is_file() {
        Container::new(
            Image::new(Handle::from_path(source))
                .content_fit(ContentFit::Cover)
                .width(width)
                .height(Length::Fixed(height)),
        )
        .width(width)
        .height(Length::Fixed(height))
        .into()
    } else {
        view(app_theme, title, width, height)
    }
}

/// The placeholder panel itself.
pub fn view<'a, M: 'a>(
    app_theme: &AppTheme,
    title: &'a str,
    width: Length,
    height: f32,
) -> Element<'a, M> {
    let colors = app_theme.colors();
    let icon = crate::ui::icons::picture(sizing::ICON_LG, colors.icon);
    let label = Text::new(title)
        .size(typography::CAPTION)
        .style({
            let color = colors.text_secondary;
            move |_theme: &iced::Theme| iced::widget::text::Style { color: Some(color) }
        });

    let content = Column::new()
        .spacing(spacing::XS)
        .align_x(alignment::Horizontal::Center)
        .push(icon)
        .push(label);

    let style = theme::placeholder_style(colors);
    Container::new(content)
        .width(width)
        .height(Length::Fixed(height))
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(move |_theme: &iced::Theme| style)
        .into()
}
