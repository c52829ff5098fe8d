//! Footer (Bottom)

use iced::widget::{column, container, text};
use iced::{Alignment, Element, Length};

use super::shared::palette;
use crate::Message;

pub fn view_footer() -> Element<'static, Message> {
    container(
        column![
            text("© 2025 Phoenix Safety Guardian").size(12),
            text("Protecting women across India").size(11).color(palette::LIGHT_BLUE),
        ]
        .spacing(2)
        .align_x(Alignment::Center),
    )
    .center_x(Length::Fill)
    .padding(12)
    .style(|_theme| container::Style {
        text_color: Some(iced::Color::WHITE),
        background: Some(iced::Background::Color(palette::BLUE)),
        ..container::Style::default()
    })
    .into()
}
