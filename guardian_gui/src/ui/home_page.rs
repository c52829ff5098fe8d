//! Home page: hero with the SOS button, feature cards, "How It Works" and
//! the helpline banner.

use iced::widget::{button, column, container, row, text, Column, Row, Space};
use iced::{Alignment, Element, Length, Padding};

use guardian_core::home::{FeatureCard, Helpline, Step, FEATURES, HOW_IT_WORKS, TAGLINE, TITLE};
use guardian_core::Session;

use super::shared::palette;
use super::sos_button;
use crate::Message;

pub fn view(session: &Session, compact: bool) -> Element<'static, Message> {
    let hero = container(
        column![
            text(TITLE).size(34),
            text(TAGLINE).size(18),
            Space::new().height(24),
            sos_button::view_button(&session.sos),
        ]
        .spacing(12)
        .align_x(Alignment::Center)
        .width(Length::Fill),
    )
    .padding(Padding::from([48, 16]))
    .width(Length::Fill)
    .style(palette::banner(palette::TEAL));

    column![
        hero,
        section_title("Safety Features"),
        feature_grid(compact),
        how_it_works(compact),
        help_banner(),
    ]
    .spacing(28)
    .into()
}

fn section_title(title: &'static str) -> Element<'static, Message> {
    container(text(title).size(22).color(palette::BLUE))
        .center_x(Length::Fill)
        .into()
}

/// Four cards in one row, two rows of two in compact mode
fn feature_grid(compact: bool) -> Element<'static, Message> {
    let per_row = if compact { 2 } else { 4 };
    let mut grid = column![].spacing(16);
    for chunk in FEATURES.chunks(per_row) {
        let mut line = row![].spacing(16);
        for card in chunk {
            line = line.push(feature_card(card));
        }
        grid = grid.push(line);
    }
    grid.into()
}

fn feature_card(card: &'static FeatureCard) -> Element<'static, Message> {
    let body = column![
        text(card.title).size(16).color(palette::BLUE),
        text(card.description).size(12).color(palette::MUTED),
    ]
    .spacing(8)
    .align_x(Alignment::Center);

    button(container(body).padding(16).width(Length::Fill).style(palette::card))
        .on_press(Message::Navigate(card.link))
        .padding(0)
        .width(Length::FillPortion(1))
        .style(button::text)
        .into()
}

fn how_it_works(compact: bool) -> Element<'static, Message> {
    let steps: Vec<Element<'static, Message>> = HOW_IT_WORKS.iter().map(step).collect();
    let steps: Element<'static, Message> = if compact {
        Column::with_children(steps).spacing(16).into()
    } else {
        Row::with_children(steps).spacing(16).into()
    };

    container(
        column![section_title("How It Works"), steps]
            .spacing(16)
            .width(Length::Fill),
    )
    .padding(24)
    .width(Length::Fill)
    .style(palette::card)
    .into()
}

fn step(step: &'static Step) -> Element<'static, Message> {
    let badge = container(text(step.number.to_string()).size(22).color(palette::TEAL))
        .center_x(Length::Fixed(56.0))
        .center_y(Length::Fixed(56.0))
        .style(palette::pill(palette::TEAL));

    column![
        badge,
        text(step.title).size(15),
        text(step.description).size(12).color(palette::MUTED),
    ]
    .spacing(8)
    .align_x(Alignment::Center)
    .width(Length::FillPortion(1))
    .into()
}

fn help_banner() -> Element<'static, Message> {
    let mut calls = row![].spacing(12);
    for helpline in Helpline::ALL {
        calls = calls.push(
            button(text(format!("📞 {}", helpline.button_label())).size(14))
                .on_press(Message::CallHelpline(*helpline))
                .padding(Padding::from([10, 18]))
                .style(button::secondary),
        );
    }

    container(
        row![
            column![
                text("Need Immediate Help?").size(22),
                text("Contact women helpline or emergency services").size(13),
                Space::new().height(8),
                calls,
            ]
            .spacing(8),
            Space::new().width(Length::Fill),
            text("⛨").size(72).color(palette::CREAM),
        ]
        .align_y(Alignment::Center),
    )
    .padding(32)
    .width(Length::Fill)
    .style(palette::banner(palette::BLUE))
    .into()
}
