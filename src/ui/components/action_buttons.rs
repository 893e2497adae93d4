// SPDX-License-Identifier: MPL-2.0
//! Primary/secondary action button pair.

use crate::content::{Action, ActionSpec, Interaction, Source};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use crate::ui::theming::AppTheme;
use iced::widget::{button, Row, Text};
use iced::{alignment, Element, Length};

/// Renders exactly two buttons: a filled primary and an outlined secondary.
/// Each activation emits the action's message as an [`Interaction`].
pub fn view<'a>(
    app_theme: &AppTheme,
    primary: &'a ActionSpec,
    secondary: &'a ActionSpec,
) -> Element<'a, Interaction> {
    let tint = app_theme.colors().tint;

    let primary_button = button(
        Text::new(primary.label.as_str())
            .size(typography::BODY)
            .align_x(alignment::Horizontal::Center)
            .width(Length::Fill),
    )
    .width(Length::Fill)
    .padding(spacing::SM)
    .style(styles::button::primary(tint))
    .on_press(Interaction::new(
        Source::ActionButtons,
        primary.message.clone(),
        Action::Primary,
    ));

    let secondary_button = button(
        Text::new(secondary.label.as_str())
            .size(typography::BODY)
            .align_x(alignment::Horizontal::Center)
            .width(Length::Fill),
    )
    .width(Length::Fill)
    .padding(spacing::SM)
    .style(styles::button::secondary(tint))
    .on_press(Interaction::new(
        Source::ActionButtons,
        secondary.message.clone(),
        Action::Secondary,
    ));

    Row::new()
        .spacing(spacing::XS)
        .push(primary_button)
        .push(secondary_button)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::theming::ThemeMode;

    #[test]
    fn view_builds_for_both_modes() {
        let primary = ActionSpec {
            label: "Go".into(),
            message: "going".into(),
        };
        let secondary = ActionSpec {
            label: "More".into(),
            message: "more".into(),
        };
        for mode in [ThemeMode::Light, ThemeMode::Dark] {
            let theme = AppTheme::new(mode);
            let _element = view(&theme, &primary, &secondary);
        }
    }
}
