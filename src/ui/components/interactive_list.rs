// SPDX-License-Identifier: MPL-2.0
//! Activatable option list. Each row reports its own id when pressed; no
//! selection state is retained.

use crate::content::{Action, Interaction, ListEntry, Source};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{opacity, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use crate::ui::themed::{self, TextVariant};
use crate::ui::theming::AppTheme;
use iced::widget::{button, text, Column, Row, Text};
use iced::{alignment, Element, Length};

/// Renders one row per entry, in input order.
pub fn view<'a>(
    app_theme: &AppTheme,
    i18n: &I18n,
    entries: &'a [ListEntry],
) -> Element<'a, Interaction> {
    let colors = app_theme.colors();

    let mut column = Column::new()
        .spacing(spacing::XS)
        .push(themed::text(app_theme, TextVariant::Subtitle, i18n.tr("interactive-list-title")));

    for entry in entries {
        let description_color = iced::Color {
            a: opacity::TEXT_MUTED,
            ..colors.text_primary
        };

        let body = Column::new()
            .spacing(spacing::XXS)
            .width(Length::Fill)
            .push(themed::text(app_theme, TextVariant::DefaultSemiBold, entry.title.as_str()))
            .push(
                Text::new(entry.description.as_str())
                    .size(typography::CAPTION)
                    .style(move |_theme: &iced::Theme| text::Style {
                        color: Some(description_color),
                    }),
            );

        let chevron: Element<'static, Interaction> =
            icons::chevron_right(sizing::ICON_MD, colors.icon).into();
        let row = Row::new()
            .align_y(alignment::Vertical::Center)
            .push(body)
            .push(chevron);

        column = column.push(
            button(row)
                .width(Length::Fill)
                .padding(spacing::MD)
                .style(styles::button::row(colors.row_surface, colors.card_border))
                .on_press(Interaction::new(
                    Source::InteractiveList,
                    entry.id.clone(),
                    Action::Selected,
                )),
        );
    }

    column.into()
}
