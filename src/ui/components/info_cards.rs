// SPDX-License-Identifier: MPL-2.0
//! Bordered info cards, one per `{title, content}` pair.

use crate::content::InfoCard;
use crate::ui::design_tokens::spacing;
use crate::ui::styles;
use crate::ui::themed::{self, TextVariant};
use crate::ui::theming::AppTheme;
use iced::widget::{Column, Container};
use iced::{Element, Length};

/// Renders the cards in input order.
pub fn view<'a, M: 'a>(app_theme: &AppTheme, cards: &'a [InfoCard]) -> Element<'a, M> {
    let colors = app_theme.colors();
    let mut column = Column::new().spacing(spacing::XS);

    for card in cards {
        let body = Column::new()
            .spacing(spacing::XS)
            .push(themed::text(app_theme, TextVariant::DefaultSemiBold, card.title.as_str()))
            .push(themed::text(app_theme, TextVariant::Default, card.content.as_str()));

        column = column.push(
            Container::new(body)
                .width(Length::Fill)
                .padding(spacing::MD)
                .style(styles::container::card(colors.surface_primary, colors.card_border)),
        );
    }

    column.into()
}
