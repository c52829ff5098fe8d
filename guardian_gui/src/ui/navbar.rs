//! Navbar (Top)
//!
//! Brand on the left, page links on the right. Below the compact breakpoint
//! the links fold into a menu opened with the ☰ button.

use iced::widget::{button, column, container, row, rule, text, Column, Space};
use iced::{Alignment, Element, Length, Padding};

use guardian_core::navigation::NavBar;
use guardian_core::Page;

use super::shared::palette;
use crate::Message;

/// Render the navbar, plus the dropdown menu when open in compact mode
pub fn view(nav: &NavBar, compact: bool) -> Element<'static, Message> {
    let brand = button(
        row![
            text("⛨").size(24).color(palette::RED),
            Space::new().width(8),
            text("Phoenix Guardian").size(18).color(palette::BLUE),
        ]
        .align_y(Alignment::Center),
    )
    .on_press(Message::Navigate(Page::Home))
    .padding(0)
    .style(button::text);

    let trailing: Element<'static, Message> = if compact {
        let glyph = if nav.is_menu_open() { "✕" } else { "☰" };
        button(text(glyph).size(20))
            .on_press(Message::ToggleMenu)
            .padding(Padding::from([4, 10]))
            .style(button::text)
            .into()
    } else {
        let mut links = row![].spacing(8).align_y(Alignment::Center);
        for page in Page::ALL {
            links = links.push(nav_link(*page, nav.is_active(*page), false));
        }
        row![links, Space::new().width(16), icon_buttons()]
            .align_y(Alignment::Center)
            .into()
    };

    let bar = row![brand, Space::new().width(Length::Fill), trailing]
        .align_y(Alignment::Center)
        .height(Length::Fixed(56.0));

    let mut content: Column<'static, Message> = column![bar];

    if compact && nav.is_menu_open() {
        let mut menu = column![].spacing(4).padding(Padding::from([8, 0]));
        for page in Page::ALL {
            menu = menu.push(nav_link(*page, nav.is_active(*page), true));
        }
        content = content
            .push(rule::horizontal(1))
            .push(menu)
            .push(rule::horizontal(1))
            .push(container(icon_buttons()).center_x(Length::Fill).padding(8));
    }

    container(content.padding(Padding::from([0, 24])))
        .width(Length::Fill)
        .style(palette::card)
        .into()
}

fn nav_link(page: Page, active: bool, full_width: bool) -> Element<'static, Message> {
    let link = button(text(page.label()).size(13))
        .on_press(Message::Navigate(page))
        .padding(Padding::from([6, 12]))
        .style(if active { button::primary } else { button::text });

    if full_width {
        link.width(Length::Fill).into()
    } else {
        link.into()
    }
}

/// Notification bell and profile buttons. Present for layout only.
fn icon_buttons() -> Element<'static, Message> {
    row![
        button(text("🔔").size(16)).padding(6).style(button::text),
        button(text("👤").size(16)).padding(6).style(button::text),
    ]
    .spacing(4)
    .into()
}
