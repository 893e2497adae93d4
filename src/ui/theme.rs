// SPDX-License-Identifier: MPL-2.0
//! Shared UI color helpers for the gallery and card components.

use crate::ui::design_tokens::{opacity, palette};
use crate::ui::theming::ColorScheme;
use iced::widget::container;
use iced::Color;

/// Color of a pagination dot at the given position.
pub fn dot_color(colors: &ColorScheme, active: bool) -> Color {
    if active {
        colors.dot_active
    } else {
        colors.dot_inactive
    }
}

/// Semi-transparent scrim behind the phone-layout card text.
pub fn card_scrim_color() -> Color {
    Color {
        a: opacity::OVERLAY_MEDIUM,
        ..palette::BLACK
    }
}

/// Background of the bookmark affordance, highlighted when bookmarked.
pub fn bookmark_background(bookmarked: bool) -> Color {
    if bookmarked {
        palette::ACCENT_500
    } else {
        Color {
            a: opacity::OVERLAY_SUBTLE,
            ..palette::WHITE
        }
    }
}

/// Standard color for error text.
pub fn error_text_color() -> Color {
    palette::ERROR_500
}

/// Style for the image placeholder panel shown when a slide's source cannot
/// be resolved locally.
pub fn placeholder_style(colors: &ColorScheme) -> container::Style {
    container::Style {
        background: Some(iced::Background::Color(colors.surface_secondary)),
        text_color: Some(colors.text_secondary),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn active_dot_uses_accent_in_light_mode() {
        let colors = ColorScheme::light();
        assert_eq!(dot_color(&colors, true), palette::ACCENT_500);
        assert_eq!(dot_color(&colors, false), palette::GRAY_300);
    }

    #[test]
    fn active_dot_is_white_in_dark_mode() {
        let colors = ColorScheme::dark();
        assert_eq!(dot_color(&colors, true), palette::WHITE);
        assert_eq!(dot_color(&colors, false), palette::GRAY_500);
    }

    #[test]
    fn bookmark_background_highlights_when_set() {
        assert_eq!(bookmark_background(true), palette::ACCENT_500);
        assert!(bookmark_background(false).a < 0.5);
    }
}
