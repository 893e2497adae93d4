// SPDX-License-Identifier: MPL-2.0
//! Centralized icon module.
//!
//! Icons are rendered as text glyphs, which keeps them crisp at every scale
//! factor without shipping bitmap assets. Names describe the icon's
//! appearance, not the action context (e.g. `chevron_right`, not
//! `open_item`).

use iced::widget::{text, Text};
use iced::Color;

fn glyph(symbol: &'static str, size: f32, color: Color) -> Text<'static> {
    Text::new(symbol)
        .size(size)
        .style(move |_theme: &iced::Theme| text::Style { color: Some(color) })
}

/// Sun: outlined disc with rays.
pub fn sun(size: f32, color: Color) -> Text<'static> {
    glyph("☀", size, color)
}

/// Moon: crescent.
pub fn moon(size: f32, color: Color) -> Text<'static> {
    glyph("☾", size, color)
}

/// Chevron pointing right.
pub fn chevron_right(size: f32, color: Color) -> Text<'static> {
    glyph("›", size, color)
}

/// Check mark.
pub fn check(size: f32, color: Color) -> Text<'static> {
    glyph("✓", size, color)
}

/// Bookmark flag.
pub fn bookmark(size: f32, color: Color) -> Text<'static> {
    glyph("⚑", size, color)
}

/// Multiplication sign used for dismiss buttons.
pub fn cross(size: f32, color: Color) -> Text<'static> {
    glyph("✕", size, color)
}

/// Landscape-in-frame used by the image placeholder panel.
pub fn picture(size: f32, color: Color) -> Text<'static> {
    glyph("🖼", size, color)
}
