// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{opacity, palette, radius};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Filled button for the primary action. The fill is the theme tint.
pub fn primary(tint: Color) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let background = match status {
            button::Status::Hovered => Color {
                a: opacity::OVERLAY_HOVER,
                ..tint
            },
            _ => tint,
        };
        button::Style {
            background: Some(Background::Color(background)),
            text_color: palette::WHITE,
            border: Border {
                radius: radius::MD.into(),
                ..Border::default()
            },
            ..button::Style::default()
        }
    }
}

/// Outlined button for the secondary action: transparent fill, tint border
/// and tint label.
pub fn secondary(tint: Color) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let background = match status {
            button::Status::Hovered => Some(Background::Color(Color {
                a: opacity::OVERLAY_SUBTLE,
                ..tint
            })),
            _ => None,
        };
        button::Style {
            background,
            text_color: tint,
            border: Border {
                color: tint,
                width: 1.0,
                radius: radius::MD.into(),
            },
            ..button::Style::default()
        }
    }
}

/// Round pagination dot. The caller resolves active/inactive color.
pub fn dot(color: Color) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, _status: button::Status| button::Style {
        background: Some(Background::Color(color)),
        border: Border {
            radius: radius::SM.into(),
            ..Border::default()
        },
        ..button::Style::default()
    }
}

/// Activatable list row with a hairline border.
pub fn row(surface: Color, border: Color) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let background = match status {
            button::Status::Hovered | button::Status::Pressed => Color {
                a: opacity::OVERLAY_PRESSED,
                ..surface
            },
            _ => surface,
        };
        button::Style {
            background: Some(Background::Color(background)),
            border: Border {
                color: border,
                width: 1.0,
                radius: radius::MD.into(),
            },
            ..button::Style::default()
        }
    }
}

/// Chromeless button used by tabs, the theme toggle, and tappable cards.
pub fn bare(_theme: &Theme, _status: button::Status) -> button::Style {
    button::Style::default()
}

/// Round bookmark affordance, highlighted when bookmarked.
pub fn bookmark(background: Color) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let background = match status {
            button::Status::Hovered => Color {
                a: (background.a + 0.2).min(opacity::OPAQUE),
                ..background
            },
            _ => background,
        };
        button::Style {
            background: Some(Background::Color(background)),
            border: Border {
                radius: radius::PILL.into(),
                ..Border::default()
            },
            ..button::Style::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_fill_is_the_tint() {
        let style = primary(palette::TINT_500)(&Theme::Light, button::Status::Active);
        assert_eq!(
            style.background,
            Some(Background::Color(palette::TINT_500))
        );
        assert_eq!(style.text_color, palette::WHITE);
    }

    #[test]
    fn secondary_is_outlined_and_transparent() {
        let style = secondary(palette::TINT_500)(&Theme::Light, button::Status::Active);
        assert!(style.background.is_none());
        assert_eq!(style.border.color, palette::TINT_500);
        assert_eq!(style.border.width, 1.0);
    }

    #[test]
    fn dot_uses_given_color() {
        let style = dot(palette::ACCENT_500)(&Theme::Dark, button::Status::Active);
        assert_eq!(
            style.background,
            Some(Background::Color(palette::ACCENT_500))
        );
    }
}
