// SPDX-License-Identifier: MPL-2.0
//! Step progress indicator: one dot per step, connector lines, and the
//! current step's label underneath.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing};
use crate::ui::icons;
use crate::ui::styles;
use crate::ui::themed::{self, TextVariant};
use crate::ui::theming::AppTheme;
use iced::widget::{Column, Container, Row, Space};
use iced::{alignment, Element, Length};

/// Validated progress state.
///
/// Contract: `current` is clamped into `[0, steps.len() - 1]` at
/// construction; an out-of-range caller value is recorded with a warning
/// instead of panicking at render time. An empty step list yields an empty
/// widget.
#[derive(Debug, Clone, Copy)]
pub struct Progress<'a> {
    steps: &'a [String],
    current: usize,
}

impl<'a> Progress<'a> {
    #[must_use]
    pub fn new(steps: &'a [String], current: usize) -> Self {
        let clamped = match steps.len() {
            0 => 0,
            len if current >= len => {
                tracing::warn!(current, len, "progress step out of range, clamping");
                len - 1
            }
            _ => current,
        };
        Self {
            steps,
            current: clamped,
        }
    }

    #[must_use]
    pub fn current(&self) -> usize {
        self.current
    }

    /// Dots up to and including the current step are active.
    #[must_use]
    pub fn is_dot_active(&self, index: usize) -> bool {
        index <= self.current
    }

    /// The connector between dots `index` and `index + 1` is active while
    /// the current step lies beyond it.
    #[must_use]
    pub fn is_line_active(&self, index: usize) -> bool {
        index < self.current
    }

    /// Steps already completed show a check inside the dot.
    #[must_use]
    pub fn is_step_done(&self, index: usize) -> bool {
        index < self.current
    }

    #[must_use]
    pub fn label(&self) -> Option<&'a str> {
        self.steps.get(self.current).map(String::as_str)
    }
}

/// Renders the progress widget.
pub fn view<'a, M: 'a>(app_theme: &AppTheme, i18n: &I18n, progress: Progress<'a>) -> Element<'a, M> {
    let colors = app_theme.colors();
    let active_color = colors.tint;
    let inactive_color = colors.step_inactive;

    let mut steps_row = Row::new().align_y(alignment::Vertical::Center);
    let step_count = progress.steps.len();

    for index in 0..step_count {
        let dot_color = if progress.is_dot_active(index) {
            active_color
        } else {
            inactive_color
        };

        let dot_content: Element<'a, M> = if progress.is_step_done(index) {
            icons::check(sizing::ICON_SM, palette::WHITE).into()
        } else {
            Space::new()
                .width(Length::Shrink)
                .height(Length::Shrink)
                .into()
        };

        steps_row = steps_row.push(
            Container::new(dot_content)
                .width(Length::Fixed(sizing::STEP_DOT))
                .height(Length::Fixed(sizing::STEP_DOT))
                .align_x(alignment::Horizontal::Center)
                .align_y(alignment::Vertical::Center)
                .style(styles::container::round(dot_color, sizing::STEP_DOT)),
        );

        if index < step_count - 1 {
            let line_color = if progress.is_line_active(index) {
                active_color
            } else {
                inactive_color
            };
            steps_row = steps_row.push(
                Container::new(
                    Space::new()
                        .width(Length::Fixed(sizing::STEP_LINE_WIDTH))
                        .height(Length::Fixed(sizing::STEP_LINE_HEIGHT)),
                )
                .style(styles::container::surface(line_color)),
            );
        }
    }

    let mut column = Column::new()
        .spacing(spacing::MD)
        .push(themed::text(app_theme, TextVariant::Subtitle, i18n.tr("progress-title")))
        .push(steps_row);

    if let Some(label) = progress.label() {
        column = column.push(
            Container::new(themed::text(app_theme, TextVariant::DefaultSemiBold, label))
                .width(Length::Fill)
                .align_x(alignment::Horizontal::Center),
        );
    }

    column.into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn steps() -> Vec<String> {
        ["A", "B", "C", "D"].map(String::from).to_vec()
    }

    #[test]
    fn dots_up_to_current_are_active() {
        let steps = steps();
        let progress = Progress::new(&steps, 2);

        assert!(progress.is_dot_active(0));
        assert!(progress.is_dot_active(1));
        assert!(progress.is_dot_active(2));
        assert!(!progress.is_dot_active(3));
    }

    #[test]
    fn lines_before_current_are_active() {
        let steps = steps();
        let progress = Progress::new(&steps, 2);

        assert!(progress.is_line_active(0)); // between A and B
        assert!(progress.is_line_active(1)); // between B and C
        assert!(!progress.is_line_active(2)); // between C and D
    }

    #[test]
    fn label_is_the_current_step() {
        let steps = steps();
        let progress = Progress::new(&steps, 2);
        assert_eq!(progress.label(), Some("C"));
    }

    #[test]
    fn out_of_range_step_clamps_to_last() {
        let steps = steps();
        let progress = Progress::new(&steps, 17);
        assert_eq!(progress.current(), 3);
        assert_eq!(progress.label(), Some("D"));
    }

    #[test]
    fn empty_steps_yield_no_label() {
        let steps: Vec<String> = Vec::new();
        let progress = Progress::new(&steps, 2);
        assert_eq!(progress.label(), None);
        assert_eq!(progress.current(), 0);
    }

    #[test]
    fn completed_steps_show_check() {
        let steps = steps();
        let progress = Progress::new(&steps, 2);
        assert!(progress.is_step_done(0));
        assert!(progress.is_step_done(1));
        assert!(!progress.is_step_done(2)); // current step has no check yet
    }
}
