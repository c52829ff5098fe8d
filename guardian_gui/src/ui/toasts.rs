//! Toast host (top-right overlay)
//!
//! Newest toast on top. Clicking a toast dismisses it early.

use iced::widget::{button, column, container, text, Column};
use iced::{Background, Border, Color, Element, Length, Padding, Shadow};

use guardian_core::notifications::{Notification, NotificationLevel, ToastQueue};

use super::shared::palette;
use crate::Message;

pub fn view(toasts: &ToastQueue) -> Element<'_, Message> {
    let mut stack: Column<'_, Message> = column![].spacing(8).width(Length::Fixed(340.0));
    for notification in toasts.visible() {
        stack = stack.push(view_toast(notification));
    }

    container(stack)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(Padding::from([72, 16]))
        .align_x(iced::alignment::Horizontal::Right)
        .align_y(iced::alignment::Vertical::Top)
        .into()
}

fn level_color(level: NotificationLevel) -> Color {
    match level {
        NotificationLevel::Success => palette::GREEN,
        NotificationLevel::Info => palette::BLUE,
        NotificationLevel::Error => palette::RED,
    }
}

fn view_toast(notification: &Notification) -> Element<'_, Message> {
    let accent = level_color(notification.level);

    button(text(&notification.message).size(13))
        .on_press(Message::DismissToast(notification.id))
        .padding(Padding::from([10, 14]))
        .width(Length::Fill)
        .style(move |theme: &iced::Theme, _status| {
            let palette = theme.extended_palette();
            button::Style {
                background: Some(Background::Color(palette.background.base.color)),
                text_color: accent,
                border: Border {
                    color: accent,
                    width: 1.0,
                    radius: 8.0.into(),
                },
                shadow: Shadow {
                    color: Color::from_rgba(0.0, 0.0, 0.0, 0.15),
                    offset: iced::Vector::new(0.0, 3.0),
                    blur_radius: 8.0,
                },
                snap: false,
            }
        })
        .into()
}
