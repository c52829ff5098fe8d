//! Emergency Contacts page
//!
//! Displays:
//! - Header and "Add Contact" button
//! - Contact cards (name, relation, phone, Edit / Remove)
//! - Empty-state card when the list is empty
//!
//! The add/edit form itself is a modal, see `view_dialog`.

use iced::widget::{button, column, container, row, text, Column, Row, Space};
use iced::{Alignment, Element, Length, Padding};

use guardian_core::contacts::{Contact, ContactBook, ContactEditor, ContactField, EditorMode};

use super::shared::{self, palette};
use crate::Message;

pub fn view(book: &ContactBook, compact: bool) -> Element<'_, Message> {
    let header = shared::page_header(
        "Emergency Contacts",
        "Add and manage trusted contacts who will be notified in case of emergency",
    );

    let add_button = row![
        Space::new().width(Length::Fill),
        button(text("+ Add Contact").size(13))
            .on_press(Message::OpenAddContact)
            .padding(Padding::from([8, 16]))
            .style(button::primary),
    ];

    let body: Element<'_, Message> = if book.is_empty() {
        view_empty()
    } else {
        view_grid(book, if compact { 1 } else { 3 })
    };

    column![header, add_button, body].spacing(24).into()
}

fn view_empty() -> Element<'static, Message> {
    container(
        column![
            text("👤").size(40).color(palette::MUTED),
            text("No emergency contacts yet").size(16),
            text("Add trusted friends and family who can help in emergencies")
                .size(12)
                .color(palette::MUTED),
            Space::new().height(8),
            button(text("+ Add Your First Contact").size(13))
                .on_press(Message::OpenAddContact)
                .padding(Padding::from([8, 16]))
                .style(button::secondary),
        ]
        .spacing(8)
        .align_x(Alignment::Center)
        .width(Length::Fill),
    )
    .padding(32)
    .width(Length::Fill)
    .style(palette::card)
    .into()
}

fn view_grid(book: &ContactBook, per_row: usize) -> Element<'_, Message> {
    let contacts: Vec<&Contact> = book.iter().collect();
    let mut grid = column![].spacing(16);
    for chunk in contacts.chunks(per_row) {
        let mut line: Row<'_, Message> = row![].spacing(16);
        for contact in chunk {
            line = line.push(view_card(contact));
        }
        // Pad short rows so cards keep the same width
        for _ in chunk.len()..per_row {
            line = line.push(Space::new().width(Length::FillPortion(1)));
        }
        grid = grid.push(line);
    }
    grid.into()
}

fn view_card(contact: &Contact) -> Element<'_, Message> {
    let heading = container(
        row![
            text("👤").size(20),
            column![
                text(&contact.name).size(15),
                text(&contact.relation).size(12).color(palette::MUTED),
            ]
            .spacing(2),
        ]
        .spacing(12)
        .align_y(Alignment::Center),
    )
    .padding(12)
    .width(Length::Fill)
    .style(palette::tinted(palette::TEAL));

    let actions = row![
        button(text("✎ Edit").size(12))
            .on_press(Message::OpenEditContact(contact.id))
            .padding(Padding::from([4, 10]))
            .style(button::secondary),
        Space::new().width(Length::Fill),
        button(text("🗑 Remove").size(12).color(palette::RED))
            .on_press(Message::RemoveContact(contact.id))
            .padding(Padding::from([4, 10]))
            .style(button::secondary),
    ];

    let body = column![
        row![text("📞").size(13), text(&contact.phone).size(13)].spacing(8),
        actions,
    ]
    .spacing(14)
    .padding(12);

    container(column![heading, body])
        .width(Length::FillPortion(1))
        .style(palette::card)
        .into()
}

/// Add / edit form, rendered in the modal layer
pub fn view_dialog(editor: &ContactEditor) -> Element<'_, Message> {
    let mode = editor.mode().unwrap_or(EditorMode::Add);
    let draft = editor.draft();

    let mut fields: Column<'_, Message> = column![].spacing(12);
    for field in ContactField::ALL {
        let field = *field;
        fields = fields.push(shared::labeled_input(
            field.label(),
            field.placeholder(),
            draft.field(field),
            move |value| Message::ContactFieldChanged(field, value),
        ));
    }

    let buttons = row![
        Space::new().width(Length::Fill),
        button(text("Cancel").size(13))
            .on_press(Message::CloseContactDialog)
            .padding(Padding::from([6, 16]))
            .style(button::secondary),
        button(text(mode.confirm_label()).size(13))
            .on_press(Message::SaveContact)
            .padding(Padding::from([6, 16]))
            .style(button::primary),
    ]
    .spacing(8);

    column![
        text(mode.title()).size(18),
        Space::new().height(12),
        fields,
        Space::new().height(20),
        buttons,
    ]
    .width(Length::Fixed(400.0))
    .into()
}
