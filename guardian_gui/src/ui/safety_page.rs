//! Safety Tools page
//!
//! Four cards: Stealth Mode, Voice Distress Detection, Fake Shutdown and
//! general Safety Settings.

use iced::widget::{button, column, container, row, text, toggler, Column, Space};
use iced::{Alignment, Color, Element, Length, Padding};

use guardian_core::safety::{SafetySetting, SafetySettings};

use super::shared::{self, palette};
use crate::Message;

pub fn view(settings: &SafetySettings, compact: bool) -> Element<'static, Message> {
    let header = shared::page_header(
        "Safety Tools",
        "Configure your personal safety features and emergency settings",
    );

    let stealth = card(
        "🔔",
        palette::TEAL,
        "Stealth Mode",
        "Activate discreet monitoring without alerting others",
        described_switch(
            settings,
            SafetySetting::StealthMode,
            "App will run in the background even when closed",
        ),
    );

    let voice = card(
        "🛡",
        palette::RED,
        "Voice Distress Detection",
        "AI-powered detection of distress in your voice",
        described_switch(
            settings,
            SafetySetting::VoiceDetection,
            "Detects keywords and tone changes indicating distress",
        ),
    );

    let fake_shutdown = card(
        "📱",
        palette::BLUE,
        "Fake Shutdown",
        "Appears to shut down but continues monitoring",
        column![
            text(
                "When activated, your phone will appear to shut down but will continue running \
                 safety features and location tracking in stealth mode."
            )
            .size(12)
            .color(palette::MUTED),
            button(container(text("Configure Fake Shutdown").size(13)).center_x(Length::Fill))
                .on_press(Message::ConfigureFakeShutdown)
                .padding(Padding::from([8, 0]))
                .width(Length::Fill)
                .style(button::primary),
        ]
        .spacing(12)
        .into(),
    );

    let mut general: Column<'static, Message> = column![].spacing(14);
    for setting in [
        SafetySetting::AutoRecord,
        SafetySetting::ShakeDetection,
        SafetySetting::LocationTracking,
    ] {
        general = general.push(switch_row(settings, setting, text(setting.label()).size(13).into()));
    }
    let general = card(
        "⛨",
        palette::BLUE,
        "Safety Settings",
        "Configure your safety preferences",
        general.into(),
    );

    let grid: Element<'static, Message> = if compact {
        column![stealth, voice, fake_shutdown, general].spacing(16).into()
    } else {
        column![
            row![stealth, voice].spacing(16),
            row![fake_shutdown, general].spacing(16),
        ]
        .spacing(16)
        .into()
    };

    column![header, grid].spacing(24).into()
}

fn card(
    icon: &'static str,
    icon_color: Color,
    title: &'static str,
    description: &'static str,
    body: Element<'static, Message>,
) -> Element<'static, Message> {
    container(
        column![
            row![text(icon).size(18).color(icon_color), text(title).size(17)]
                .spacing(8)
                .align_y(Alignment::Center),
            text(description).size(12).color(palette::MUTED),
            Space::new().height(8),
            body,
        ]
        .spacing(4),
    )
    .padding(20)
    .width(Length::FillPortion(1))
    .style(palette::card)
    .into()
}

/// Switch with its label and a muted explanation underneath
fn described_switch(
    settings: &SafetySettings,
    setting: SafetySetting,
    detail: &'static str,
) -> Element<'static, Message> {
    let label: Element<'static, Message> = column![
        text(setting.label()).size(13),
        text(detail).size(11).color(palette::MUTED),
    ]
    .spacing(2)
    .into();
    switch_row(settings, setting, label)
}

fn switch_row(
    settings: &SafetySettings,
    setting: SafetySetting,
    label: Element<'static, Message>,
) -> Element<'static, Message> {
    row![
        label,
        Space::new().width(Length::Fill),
        toggler(settings.get(setting))
            .on_toggle(move |enabled| Message::SettingToggled(setting, enabled)),
    ]
    .align_y(Alignment::Center)
    .into()
}
