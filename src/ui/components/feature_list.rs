// SPDX-License-Identifier: MPL-2.0
//! Bulleted list of key features.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing};
use crate::ui::styles;
use crate::ui::themed::{self, TextVariant};
use crate::ui::theming::AppTheme;
use iced::widget::{Column, Container, Row, Space};
use iced::{alignment, Element, Length};

/// Renders one tinted bullet per feature, in input order.
pub fn view<'a, M: 'a>(
    app_theme: &AppTheme,
    i18n: &I18n,
    features: &'a [String],
) -> Element<'a, M> {
    let bullet_color = app_theme.colors().tint;

    let mut column = Column::new()
        .spacing(spacing::XS)
        .push(themed::text(app_theme, TextVariant::Subtitle, i18n.tr("feature-list-title")))
        .push(
            Space::new()
                .width(Length::Shrink)
                .height(Length::Fixed(spacing::XXS)),
        );

    for feature in features {
        let bullet = Container::new(
            Space::new()
                .width(Length::Fixed(sizing::BULLET))
                .height(Length::Fixed(sizing::BULLET)),
        )
        .style(styles::container::round(bullet_color, sizing::BULLET));

        column = column.push(
            Row::new()
                .spacing(spacing::SM)
                .align_y(alignment::Vertical::Center)
                .push(bullet)
                .push(themed::text(app_theme, TextVariant::Default, feature.as_str())),
        );
    }

    column.into()
}
