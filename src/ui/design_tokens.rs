// SPDX-License-Identifier: MPL-2.0
//! Centralized design tokens following the W3C Design Tokens standard.
//!
//! - **Palette**: base colors
//! - **Opacity**: standardized opacity levels
//! - **Spacing**: spacing scale (8px grid)
//! - **Sizing**: component sizes
//! - **Typography**: font size scale
//! - **Radius**: border radii
//!
//! Tokens are designed to be consistent. Before modifying, check the impact
//! on all components and keep the ratios (e.g. MD = XS * 2).

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.082, 0.090, 0.094); // #151718
    pub const GRAY_800: Color = Color::from_rgb(0.165, 0.165, 0.165); // #2A2A2A
    pub const GRAY_700: Color = Color::from_rgb(0.267, 0.267, 0.267); // #444444
    pub const GRAY_500: Color = Color::from_rgb(0.4, 0.4, 0.4); // #666666
    pub const GRAY_400: Color = Color::from_rgb(0.608, 0.631, 0.651); // #9BA1A6
    pub const GRAY_300: Color = Color::from_rgb(0.8, 0.8, 0.8); // #CCCCCC
    pub const GRAY_200: Color = Color::from_rgb(0.902, 0.902, 0.902); // #E6E6E6
    pub const INK_900: Color = Color::from_rgb(0.067, 0.094, 0.11); // #11181C
    pub const INK_100: Color = Color::from_rgb(0.925, 0.929, 0.933); // #ECEDEE

    // Brand colors (teal scale, tint of the light theme)
    pub const TINT_500: Color = Color::from_rgb(0.039, 0.494, 0.643); // #0A7EA4
    pub const TINT_600: Color = Color::from_rgb(0.031, 0.42, 0.549);
    pub const TINT_400: Color = Color::from_rgb(0.18, 0.58, 0.71);

    // Accent (category labels, active dots, bookmark highlight)
    pub const ACCENT_500: Color = Color::from_rgb(1.0, 0.0, 0.0); // #FF0000

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
    pub const INFO_500: Color = Color::from_rgb(0.392, 0.588, 1.0);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.7;
    pub const OVERLAY_HOVER: f32 = 0.8;
    pub const OVERLAY_PRESSED: f32 = 0.9;
    pub const OPAQUE: f32 = 1.0;

    /// Secondary text rendered at reduced emphasis.
    pub const TEXT_MUTED: f32 = 0.8;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
    pub const XL: f32 = 32.0; // 4 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    // Icon sizes
    pub const ICON_SM: f32 = 16.0;
    pub const ICON_MD: f32 = 20.0;
    pub const ICON_LG: f32 = 24.0;

    /// Pagination dot diameter.
    pub const DOT: f32 = 10.0;
    /// Progress step dot diameter.
    pub const STEP_DOT: f32 = 24.0;
    /// Connector line between progress step dots.
    pub const STEP_LINE_WIDTH: f32 = 30.0;
    pub const STEP_LINE_HEIGHT: f32 = 2.0;
    /// Feature list bullet diameter.
    pub const BULLET: f32 = 8.0;
    /// Bookmark affordance diameter.
    pub const BOOKMARK_BUTTON: f32 = 48.0;
    /// Fixed featured-card image height.
    pub const FEATURED_IMAGE_HEIGHT: f32 = 584.0;
    /// Tab bar height.
    pub const TAB_BAR_HEIGHT: f32 = 56.0;
    /// Toast width.
    pub const TOAST_WIDTH: f32 = 320.0;
    /// Vertical room reserved under the slide strip for the dot row.
    pub const PAGINATION_STRIP: f32 = 50.0;
    /// Minimum height of the gallery content panel.
    pub const CONTENT_PANEL_MIN_HEIGHT: f32 = 300.0;
}

// ============================================================================
// Layout Breakpoints
// ============================================================================

pub mod breakpoint {
    /// Viewport width at which the featured card switches from the stacked
    /// overlay layout to the two-column layout.
    pub const TABLET: f32 = 768.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    pub const CAPTION: f32 = 14.0;
    pub const BODY: f32 = 16.0;
    pub const SUBTITLE: f32 = 20.0;
    pub const HEADING: f32 = 24.0;
    pub const TITLE: f32 = 32.0;

    /// Line height multiplier for running text.
    pub const BODY_LINE_HEIGHT: f32 = 1.5;
}

// ============================================================================
// Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 5.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 10.0;
    pub const XL: f32 = 12.0;
    /// Fully round (dots, bullets, round buttons at half their size).
    pub const PILL: f32 = 24.0;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_keeps_ratios() {
        assert!((spacing::MD - spacing::XS * 2.0).abs() < f32::EPSILON);
        assert!((spacing::XL - spacing::MD * 2.0).abs() < f32::EPSILON);
    }

    #[test]
    fn accent_is_pure_red() {
        assert_eq!(palette::ACCENT_500.r, 1.0);
        assert_eq!(palette::ACCENT_500.g, 0.0);
        assert_eq!(palette::ACCENT_500.b, 0.0);
    }

    #[test]
    fn opacity_values_are_normalized() {
        for value in [
            opacity::TRANSPARENT,
            opacity::OVERLAY_MEDIUM,
            opacity::OVERLAY_STRONG,
            opacity::OPAQUE,
        ] {
            assert!((0.0..=1.0).contains(&value));
        }
    }
}
