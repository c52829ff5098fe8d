//! Brand colours and the container styles built from them

use iced::widget::container;
use iced::{Background, Border, Color, Shadow, Theme};

pub const TEAL: Color = Color::from_rgb(0.05, 0.58, 0.53);
pub const BLUE: Color = Color::from_rgb(0.12, 0.23, 0.47);
pub const RED: Color = Color::from_rgb(0.86, 0.15, 0.22);
pub const LIGHT_BLUE: Color = Color::from_rgb(0.49, 0.70, 0.87);
pub const CREAM: Color = Color::from_rgb(0.99, 0.96, 0.91);
pub const MUTED: Color = Color::from_rgb(0.45, 0.45, 0.45);

pub const GREEN: Color = Color::from_rgb(0.13, 0.55, 0.27);
pub const AMBER: Color = Color::from_rgb(0.71, 0.50, 0.05);

/// White card with a soft border, adapts to dark mode
pub fn card(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    container::Style {
        background: Some(Background::Color(palette.background.base.color)),
        border: Border {
            color: palette.background.strong.color,
            width: 1.0,
            radius: 10.0.into(),
        },
        shadow: Shadow {
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.08),
            offset: iced::Vector::new(0.0, 2.0),
            blur_radius: 6.0,
        },
        ..container::Style::default()
    }
}

/// Solid coloured band with white text (hero, help banner)
pub fn banner(color: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme| container::Style {
        text_color: Some(Color::WHITE),
        background: Some(Background::Color(color)),
        border: Border {
            radius: 14.0.into(),
            ..Border::default()
        },
        ..container::Style::default()
    }
}

/// Small rounded pill, e.g. safety badges
pub fn pill(color: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme| container::Style {
        text_color: Some(color),
        background: Some(Background::Color(Color { a: 0.15, ..color })),
        border: Border {
            radius: 999.0.into(),
            ..Border::default()
        },
        ..container::Style::default()
    }
}

/// Tinted box for advisory notes
pub fn tinted(color: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme| container::Style {
        text_color: Some(color),
        background: Some(Background::Color(Color { a: 0.08, ..color })),
        border: Border {
            color: Color { a: 0.3, ..color },
            width: 1.0,
            radius: 6.0.into(),
        },
        ..container::Style::default()
    }
}
