// SPDX-License-Identifier: MPL-2.0
//! Light/dark toggle affordance: sun or moon icon plus the label of the
//! mode the toggle switches to.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{radius, sizing, spacing};
use crate::ui::icons;
use crate::ui::styles;
use crate::ui::themed::{self, TextVariant};
use crate::ui::theming::AppTheme;
use iced::widget::{button, container, Row};
use iced::{alignment, Border, Element};

/// Renders the toggle; pressing it emits `on_toggle`.
pub fn view<'a, M: Clone + 'a>(
    app_theme: &AppTheme,
    i18n: &I18n,
    on_toggle: M,
) -> Element<'a, M> {
    let colors = app_theme.colors();

    let (icon, label_key) = if app_theme.mode().is_dark() {
        (icons::moon(sizing::ICON_MD, colors.icon), "theme-toggle-light")
    } else {
        (icons::sun(sizing::ICON_MD, colors.icon), "theme-toggle-dark")
    };

    let pill_background = colors.surface_secondary;
    let content = container(
        Row::new()
            .spacing(spacing::XS)
            .align_y(alignment::Vertical::Center)
            .push(icon)
            .push(themed::text(app_theme, TextVariant::DefaultSemiBold, i18n.tr(label_key))),
    )
    .padding(spacing::XS)
    .style(move |_theme: &iced::Theme| container::Style {
        background: Some(iced::Background::Color(pill_background)),
        border: Border {
            radius: radius::PILL.into(),
            ..Border::default()
        },
        ..container::Style::default()
    });

    button(content)
        .style(styles::button::bare)
        .padding(0)
        .on_press(on_toggle)
        .into()
}
