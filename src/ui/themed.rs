// SPDX-License-Identifier: MPL-2.0
//! Themed text and surface primitives.
//!
//! Every visual component renders text and backgrounds through these helpers
//! so color resolution happens in exactly one place: an explicit per-mode
//! override wins when one is supplied for the active mode, otherwise the
//! color comes from the active [`ColorScheme`].

use crate::ui::design_tokens::typography;
use crate::ui::theming::{AppTheme, ThemeMode};
use iced::widget::text as iced_text;
use iced::widget::{container, Container, Text};
use iced::{font, Color, Element, Font};

/// Text roles mirroring the app's typographic scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextVariant {
    /// Body text, 16pt with relaxed line height.
    #[default]
    Default,
    /// Body text with semibold weight.
    DefaultSemiBold,
    /// Screen title, 32pt bold.
    Title,
    /// Section subtitle, 20pt bold.
    Subtitle,
    /// Inline link, tinted body text.
    Link,
}

impl TextVariant {
    #[must_use]
    pub fn size(self) -> f32 {
        match self {
            TextVariant::Default | TextVariant::DefaultSemiBold | TextVariant::Link => {
                typography::BODY
            }
            TextVariant::Subtitle => typography::SUBTITLE,
            TextVariant::Title => typography::TITLE,
        }
    }

    #[must_use]
    pub fn font(self) -> Font {
        match self {
            TextVariant::Default | TextVariant::Link => Font::DEFAULT,
            TextVariant::DefaultSemiBold => Font {
                weight: font::Weight::Semibold,
                ..Font::DEFAULT
            },
            TextVariant::Title | TextVariant::Subtitle => Font {
                weight: font::Weight::Bold,
                ..Font::DEFAULT
            },
        }
    }

    /// Default color of this variant under the given theme.
    #[must_use]
    pub fn color(self, theme: &AppTheme) -> Color {
        match self {
            TextVariant::Link => theme.colors().tint,
            _ => theme.colors().text_primary,
        }
    }
}

/// Optional per-mode color override, resolved against the active mode.
#[derive(Debug, Clone, Copy, Default)]
pub struct ColorOverride {
    pub light: Option<Color>,
    pub dark: Option<Color>,
}

impl ColorOverride {
    /// Same override color for both modes.
    #[must_use]
    pub fn both(color: Color) -> Self {
        Self {
            light: Some(color),
            dark: Some(color),
        }
    }

    /// Distinct override colors per mode.
    #[must_use]
    pub fn per_mode(light: Color, dark: Color) -> Self {
        Self {
            light: Some(light),
            dark: Some(dark),
        }
    }

    /// The override for the active mode, if supplied.
    #[must_use]
    pub fn resolve(&self, mode: ThemeMode) -> Option<Color> {
        match mode {
            ThemeMode::Light => self.light,
            ThemeMode::Dark => self.dark,
        }
    }
}

/// Resolves the final color for a text variant: override first, scheme second.
#[must_use]
pub fn resolve_text_color(
    theme: &AppTheme,
    variant: TextVariant,
    color_override: ColorOverride,
) -> Color {
    color_override
        .resolve(theme.mode())
        .unwrap_or_else(|| variant.color(theme))
}

/// Themed text element in the given variant.
pub fn text<'a>(
    theme: &AppTheme,
    variant: TextVariant,
    content: impl iced_text::IntoFragment<'a>,
) -> Text<'a> {
    text_with(theme, variant, ColorOverride::default(), content)
}

/// Themed text with an explicit per-mode color override.
pub fn text_with<'a>(
    theme: &AppTheme,
    variant: TextVariant,
    color_override: ColorOverride,
    content: impl iced_text::IntoFragment<'a>,
) -> Text<'a> {
    let color = resolve_text_color(theme, variant, color_override);
    let styled = Text::new(content)
        .size(variant.size())
        .font(variant.font())
        .style(move |_theme: &iced::Theme| iced_text::Style { color: Some(color) });

    match variant {
        TextVariant::Default | TextVariant::DefaultSemiBold => {
            styled.line_height(iced_text::LineHeight::Relative(typography::BODY_LINE_HEIGHT))
        }
        _ => styled,
    }
}

/// Themed container: background from the active scheme.
pub fn surface<'a, M: 'a>(
    theme: &AppTheme,
    content: impl Into<Element<'a, M>>,
) -> Container<'a, M> {
    surface_with(theme.colors().surface_primary, content)
}

/// Container with an explicit background color override.
pub fn surface_with<'a, M: 'a>(
    background: Color,
    content: impl Into<Element<'a, M>>,
) -> Container<'a, M> {
    Container::new(content).style(move |_theme: &iced::Theme| container::Style {
        background: Some(iced::Background::Color(background)),
        ..Default::default()
    })
}
