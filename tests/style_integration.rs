// SPDX-License-Identifier: MPL-2.0
//! Integration tests to validate style, layout, and design token coherence.

use iced::Theme;
use iced_carousel::ui::components::featured_card::CardLayout;
use iced_carousel::ui::components::progress_bar::Progress;
use iced_carousel::ui::design_tokens::{breakpoint, opacity, palette, sizing, spacing};
use iced_carousel::ui::styles::button;
use iced_carousel::ui::theming::{AppTheme, ColorScheme, ThemeMode};

#[test]
fn all_button_styles_compile() {
    let theme = Theme::Dark;

    // Smoke-test all button styles compile and are callable
    let _ = button::primary(palette::TINT_500)(&theme, iced::widget::button::Status::Active);
    let _ = button::secondary(palette::TINT_500)(&theme, iced::widget::button::Status::Hovered);
    let _ = button::dot(palette::ACCENT_500)(&theme, iced::widget::button::Status::Active);
    let _ = button::row(palette::WHITE, palette::GRAY_200)(
        &theme,
        iced::widget::button::Status::Pressed,
    );
    let _ = button::bare(&theme, iced::widget::button::Status::Active);
}

#[test]
fn design_tokens_are_accessible() {
    // Palette
    let _ = palette::TINT_500;
    let _ = palette::ACCENT_500;

    // Spacing
    let _ = spacing::MD;

    // Opacity
    let _ = opacity::OVERLAY_STRONG;

    // Sizing
    let _ = sizing::DOT;
}

#[test]
fn theming_switches_correctly() {
    let light = AppTheme::new(ThemeMode::Light);
    let dark = AppTheme::new(ThemeMode::Dark);

    // Surface colors should be visually opposite between light and dark
    assert!(light.colors().surface_primary.r > dark.colors().surface_primary.r);

    // Text colors should also be opposite between light and dark
    assert!(light.colors().text_primary.r < dark.colors().text_primary.r);
}

#[test]
fn dot_colors_match_both_palettes() {
    let light = ColorScheme::light();
    let dark = ColorScheme::dark();

    assert_eq!(light.dot_active, palette::ACCENT_500);
    assert_eq!(dark.dot_active, palette::WHITE);
    assert_ne!(light.dot_inactive, light.dot_active);
    assert_ne!(dark.dot_inactive, dark.dot_active);
}

#[test]
fn card_layout_widths_follow_the_breakpoint() {
    // Wide viewport: two columns, image takes half the width minus margin.
    assert_eq!(
        CardLayout::for_width(1024.0),
        CardLayout::TwoColumn {
            image_width: 512.0 - 24.0
        }
    );

    // Narrow viewport: overlay layout, image takes the full width minus margin.
    assert_eq!(
        CardLayout::for_width(400.0),
        CardLayout::Overlay {
            image_width: 400.0 - 32.0
        }
    );

    // The breakpoint itself lands on the two-column side.
    assert!(matches!(
        CardLayout::for_width(breakpoint::TABLET),
        CardLayout::TwoColumn { .. }
    ));
}

#[test]
fn progress_widget_marks_dots_lines_and_label() {
    let steps: Vec<String> = ["A", "B", "C", "D"].map(String::from).to_vec();
    let progress = Progress::new(&steps, 2);

    assert!(progress.is_dot_active(0));
    assert!(progress.is_dot_active(1));
    assert!(progress.is_dot_active(2));
    assert!(!progress.is_dot_active(3));

    assert!(progress.is_line_active(0));
    assert!(progress.is_line_active(1));
    assert!(!progress.is_line_active(2));

    assert_eq!(progress.label(), Some("C"));
}
