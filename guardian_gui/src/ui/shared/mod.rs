//! Shared UI components reusable across pages
//!
//! Contains:
//! - `palette` - Brand colours and container styles
//! - page headers and labelled inputs used by several pages

pub mod palette;

use iced::widget::{column, text, text_input, Column};
use iced::{Alignment, Element, Length};

use crate::Message;

/// Centered page title with a muted subtitle
pub fn page_header<'a>(title: &'a str, subtitle: &'a str) -> Column<'a, Message> {
    column![
        text(title).size(28).color(palette::BLUE),
        text(subtitle).size(13).color(palette::MUTED),
    ]
    .spacing(6)
    .align_x(Alignment::Center)
    .width(Length::Fill)
}

/// Label stacked over a text input
pub fn labeled_input<'a>(
    label: &'a str,
    placeholder: &'a str,
    value: &'a str,
    on_change: impl Fn(String) -> Message + 'a,
) -> Element<'a, Message> {
    column![
        text(label).size(12),
        text_input(placeholder, value)
            .on_input(on_change)
            .width(Length::Fill)
            .padding(6)
            .size(13),
    ]
    .spacing(4)
    .into()
}
