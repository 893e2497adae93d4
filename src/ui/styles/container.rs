// SPDX-License-Identifier: MPL-2.0
//! Centralized container styles.

use crate::ui::design_tokens::radius;
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Bordered info card.
pub fn card(surface: Color, border: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(surface)),
        border: Border {
            color: border,
            width: 1.0,
            radius: radius::LG.into(),
        },
        ..container::Style::default()
    }
}

/// Flat surface with a solid background.
pub fn surface(background: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(background)),
        ..container::Style::default()
    }
}

/// Scrim behind overlay text at the bottom of the phone-layout card.
pub fn scrim(background: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(background)),
        border: Border {
            radius: iced::border::Radius {
                top_left: 0.0,
                top_right: 0.0,
                bottom_right: radius::XL,
                bottom_left: radius::XL,
            },
            ..Border::default()
        },
        ..container::Style::default()
    }
}

/// Toast card with a severity-colored accent border.
pub fn toast(surface: Color, accent: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(surface)),
        border: Border {
            color: accent,
            width: 2.0,
            radius: radius::MD.into(),
        },
        ..container::Style::default()
    }
}

/// Small round shape (dots, bullets) rendered as a container.
pub fn round(background: Color, diameter: f32) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(background)),
        border: Border {
            radius: (diameter / 2.0).into(),
            ..Border::default()
        },
        ..container::Style::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::design_tokens::palette;

    #[test]
    fn card_has_hairline_border() {
        let style = card(palette::WHITE, palette::GRAY_200)(&Theme::Light);
        assert_eq!(style.border.width, 1.0);
        assert_eq!(style.border.color, palette::GRAY_200);
    }

    #[test]
    fn round_radius_is_half_diameter() {
        let style = round(palette::ACCENT_500, 10.0)(&Theme::Light);
        assert_eq!(style.border.radius.top_left, 5.0);
    }
}
