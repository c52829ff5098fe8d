//! SOS button and its countdown dialog
//!
//! The button lives in the home page hero. The dialog is rendered through
//! the modal layer while the countdown runs.
//!
//! Closing the dialog by clicking the backdrop cancels the countdown, the
//! same as the Cancel button. A hidden dialog never leaves an alert pending.

use iced::widget::{button, column, container, row, text, Space};
use iced::{Alignment, Background, Border, Color, Element, Length, Padding};

use guardian_core::sos::SosCountdown;

use super::shared::palette;
use crate::Message;

/// Round red SOS button. Shrinks slightly while pressed.
pub fn view_button(sos: &SosCountdown) -> Element<'static, Message> {
    let size = if sos.is_pressed() { 92.0 } else { 100.0 };

    button(
        container(text("SOS").size(28))
            .center_x(Length::Fill)
            .center_y(Length::Fill),
    )
    .on_press(Message::SosPressed)
    .width(Length::Fixed(size))
    .height(Length::Fixed(size))
    .style(|_theme, status| {
        let base = match status {
            button::Status::Hovered | button::Status::Pressed => Color { a: 0.85, ..palette::RED },
            _ => palette::RED,
        };
        button::Style {
            background: Some(Background::Color(base)),
            text_color: Color::WHITE,
            border: Border {
                color: Color { a: 0.4, ..Color::WHITE },
                width: 4.0,
                radius: 999.0.into(),
            },
            ..button::Style::default()
        }
    })
    .into()
}

/// Countdown confirmation dialog
pub fn view_dialog(sos: &SosCountdown) -> Element<'static, Message> {
    let remaining = sos.remaining().unwrap_or(0);
    let message = sos.dialog_message().unwrap_or_default();

    let title = row![
        text("⚠").size(20).color(palette::RED),
        Space::new().width(8),
        text("Emergency SOS Alert").size(20).color(palette::RED),
    ]
    .align_y(Alignment::Center);

    let dial = container(text(remaining.to_string()).size(40).color(palette::RED))
        .width(Length::Fixed(96.0))
        .height(Length::Fixed(96.0))
        .center_x(Length::Fixed(96.0))
        .center_y(Length::Fixed(96.0))
        .style(|_theme| container::Style {
            background: Some(Background::Color(Color { a: 0.1, ..palette::RED })),
            border: Border {
                color: palette::RED,
                width: 4.0,
                radius: 999.0.into(),
            },
            ..container::Style::default()
        });

    let buttons = row![
        button(container(text("Cancel").size(13)).center_x(Length::Fill))
            .on_press(Message::SosCancel)
            .padding(Padding::from([8, 16]))
            .width(Length::Fill)
            .style(button::secondary),
        button(container(text("Send Now").size(13)).center_x(Length::Fill))
            .on_press(Message::SosSendNow)
            .padding(Padding::from([8, 16]))
            .width(Length::Fill)
            .style(button::danger),
    ]
    .spacing(8);

    column![
        title,
        Space::new().height(20),
        container(text(message).size(14)).center_x(Length::Fill),
        Space::new().height(12),
        container(dial).center_x(Length::Fill),
        Space::new().height(12),
        container(
            text("Your location will be shared with your emergency contacts")
                .size(12)
                .color(palette::MUTED)
        )
        .center_x(Length::Fill),
        Space::new().height(20),
        buttons,
    ]
    .width(Length::Fixed(380.0))
    .into()
}
