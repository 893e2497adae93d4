// SPDX-License-Identifier: MPL-2.0
//! Light/dark theme state shared by every themed component.
//!
//! The [`AppTheme`] struct is the single owner of the active [`ThemeMode`].
//! It is created once at startup, seeded from the device color scheme, and
//! passed by reference into each component's view context; there is no
//! ambient global. All mutation goes through the three writer entry points on
//! `AppTheme`, and the runtime re-renders every consumer after each update.

use crate::ui::design_tokens::{opacity, palette};
use iced::Color;
use serde::{Deserialize, Serialize};

/// The two-state theme selected by the user or the device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    /// The other mode. Toggling twice returns the original value.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        matches!(self, ThemeMode::Dark)
    }
}

/// The device-reported color scheme, as observed by the host platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceScheme {
    Light,
    Dark,
    Unknown,
}

impl DeviceScheme {
    /// Reads the current scheme through the platform detection backend.
    #[must_use]
    pub fn detect() -> Self {
        match dark_light::detect() {
            Ok(dark_light::Mode::Light) => DeviceScheme::Light,
            Ok(dark_light::Mode::Dark) => DeviceScheme::Dark,
            _ => DeviceScheme::Unknown,
        }
    }
}

/// Color palette resolved for one theme mode.
#[derive(Debug, Clone)]
pub struct ColorScheme {
    // Surface colors
    pub surface_primary: Color,
    pub surface_secondary: Color,

    // Text colors
    pub text_primary: Color,
    pub text_secondary: Color,

    // Brand / accent
    pub tint: Color,
    pub icon: Color,

    // Widget chrome
    pub card_border: Color,
    pub row_surface: Color,
    pub dot_active: Color,
    pub dot_inactive: Color,
    pub step_inactive: Color,

    // Overlay colors
    pub overlay_background: Color,
    pub overlay_text: Color,
}

impl ColorScheme {
    /// Light theme palette.
    #[must_use]
    pub fn light() -> Self {
        Self {
            surface_primary: palette::WHITE,
            surface_secondary: palette::GRAY_200,

            text_primary: palette::INK_900,
            text_secondary: Color::from_rgb(0.2, 0.2, 0.2),

            tint: palette::TINT_500,
            icon: Color::from_rgb(0.404, 0.439, 0.463), // #687076

            card_border: palette::GRAY_200,
            row_surface: palette::WHITE,
            dot_active: palette::ACCENT_500,
            dot_inactive: palette::GRAY_300,
            step_inactive: palette::GRAY_200,

            overlay_background: Color {
                a: opacity::OVERLAY_MEDIUM,
                ..palette::BLACK
            },
            overlay_text: palette::WHITE,
        }
    }

    /// Dark theme palette.
    #[must_use]
    pub fn dark() -> Self {
        Self {
            surface_primary: palette::GRAY_900,
            surface_secondary: palette::GRAY_800,

            text_primary: palette::INK_100,
            text_secondary: palette::GRAY_300,

            tint: palette::WHITE,
            icon: palette::GRAY_400,

            card_border: palette::GRAY_700,
            row_surface: palette::GRAY_800,
            dot_active: palette::WHITE,
            dot_inactive: palette::GRAY_500,
            step_inactive: palette::GRAY_700,

            overlay_background: Color {
                a: opacity::OVERLAY_MEDIUM,
                ..palette::BLACK
            },
            overlay_text: palette::WHITE,
        }
    }

    /// Resolves the palette for a mode.
    #[must_use]
    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => Self::light(),
            ThemeMode::Dark => Self::dark(),
        }
    }
}

/// Process-wide theme state: the active mode plus its resolved palette.
///
/// Lifecycle is one app session. The initial value comes from the device
/// scheme (`Light` when the device reports nothing usable) and is never
/// persisted.
#[derive(Debug, Clone)]
pub struct AppTheme {
    mode: ThemeMode,
    colors: ColorScheme,
}

impl AppTheme {
    #[must_use]
    pub fn new(mode: ThemeMode) -> Self {
        Self {
            mode,
            colors: ColorScheme::for_mode(mode),
        }
    }

    /// Seeds the theme from the device-reported color scheme.
    #[must_use]
    pub fn from_device() -> Self {
        Self::from_device_scheme(DeviceScheme::detect())
    }

    /// Seeds the theme from an already-observed device scheme.
    /// `Unknown` falls back to light.
    #[must_use]
    pub fn from_device_scheme(scheme: DeviceScheme) -> Self {
        let mode = match scheme {
            DeviceScheme::Dark => ThemeMode::Dark,
            DeviceScheme::Light | DeviceScheme::Unknown => ThemeMode::Light,
        };
        Self::new(mode)
    }

    #[must_use]
    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    #[must_use]
    pub fn colors(&self) -> &ColorScheme {
        &self.colors
    }

    /// Explicit user selection.
    pub fn set_mode(&mut self, mode: ThemeMode) {
        if self.mode != mode {
            tracing::debug!(?mode, "theme mode changed");
        }
        self.mode = mode;
        self.colors = ColorScheme::for_mode(mode);
    }

    /// Two-state cycle: light becomes dark and vice versa.
    pub fn toggle(&mut self) {
        self.set_mode(self.mode.toggled());
    }

    /// Applies a device scheme change.
    ///
    /// A `Light` or `Dark` report overwrites the current mode unconditionally,
    /// even if the user toggled manually since the last report. `Unknown`
    /// leaves the state untouched.
    pub fn apply_device_scheme(&mut self, scheme: DeviceScheme) {
        match scheme {
            DeviceScheme::Light => self.set_mode(ThemeMode::Light),
            DeviceScheme::Dark => self.set_mode(ThemeMode::Dark),
            DeviceScheme::Unknown => {}
        }
    }
}

impl Default for AppTheme {
    fn default() -> Self {
        Self::new(ThemeMode::Light)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn light_theme_has_light_surface() {
        let scheme = ColorScheme::light();
        assert!(scheme.surface_primary.r > 0.9); // Close to white
    }

    #[test]
    fn dark_theme_has_dark_surface() {
        let scheme = ColorScheme::dark();
        assert!(scheme.surface_primary.r < 0.2); // Close to black
    }

    #[test]
    fn toggle_is_a_two_state_round_trip() {
        let mut theme = AppTheme::new(ThemeMode::Light);
        theme.toggle();
        assert_eq!(theme.mode(), ThemeMode::Dark);
        theme.toggle();
        assert_eq!(theme.mode(), ThemeMode::Light);
    }

    #[test]
    fn device_report_overrides_user_toggle() {
        let mut theme = AppTheme::new(ThemeMode::Light);
        theme.toggle(); // user picked dark
        assert_eq!(theme.mode(), ThemeMode::Dark);

        theme.apply_device_scheme(DeviceScheme::Light);
        assert_eq!(theme.mode(), ThemeMode::Light);
    }

    #[test]
    fn unknown_device_scheme_is_ignored() {
        let mut theme = AppTheme::new(ThemeMode::Dark);
        theme.apply_device_scheme(DeviceScheme::Unknown);
        assert_eq!(theme.mode(), ThemeMode::Dark);
    }

    #[test]
    fn unknown_scheme_seeds_light() {
        let theme = AppTheme::from_device_scheme(DeviceScheme::Unknown);
        assert_eq!(theme.mode(), ThemeMode::Light);
    }

    #[test]
    fn colors_follow_mode() {
        let mut theme = AppTheme::new(ThemeMode::Light);
        let light_surface = theme.colors().surface_primary;
        theme.set_mode(ThemeMode::Dark);
        assert!(theme.colors().surface_primary.r < light_surface.r);
    }
}
