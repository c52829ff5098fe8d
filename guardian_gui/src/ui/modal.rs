//! Modal dialog component
//!
//! Renders the SOS countdown and the contact form as a centred box over a
//! semi-transparent backdrop.

use iced::widget::{button, container, opaque, Space};
use iced::{Element, Length};

use guardian_core::Session;

use super::{contacts_page, sos_button};
use crate::Message;

/// Types of modal dialogs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalType {
    /// SOS countdown confirmation
    SosCountdown,
    /// Add or edit an emergency contact
    ContactForm,
}

impl ModalType {
    /// The dialog the session currently wants on screen, if any
    pub fn active(session: &Session) -> Option<ModalType> {
        if session.sos.is_dialog_open() {
            Some(ModalType::SosCountdown)
        } else if session.editor.is_open() {
            Some(ModalType::ContactForm)
        } else {
            None
        }
    }
}

/// Render a modal backdrop (semi-transparent overlay that catches clicks)
pub fn view_backdrop() -> Element<'static, Message> {
    button(Space::new())
        .on_press(Message::ModalDismissed)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(|_, _| {
            iced::widget::button::Style::default()
                .with_background(iced::Color::from_rgba(0.0, 0.0, 0.0, 0.5))
        })
        .into()
}

/// Render a modal dialog based on its type
pub fn view_modal(modal_type: ModalType, session: &Session) -> Element<'_, Message> {
    let content = match modal_type {
        ModalType::SosCountdown => sos_button::view_dialog(&session.sos),
        ModalType::ContactForm => contacts_page::view_dialog(&session.editor),
    };

    let modal_box = container(content)
        .padding(24)
        .style(container::bordered_box);

    // Opaque so clicks inside the box don't reach the backdrop
    container(opaque(modal_box))
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(iced::alignment::Horizontal::Center)
        .align_y(iced::alignment::Vertical::Center)
        .into()
}
