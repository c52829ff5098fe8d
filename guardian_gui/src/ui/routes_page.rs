//! Safe Routes page
//!
//! Journey form on top. Once a route is "found", three tabs show the fixed
//! route options; the safest one includes a stop-by-stop timeline.

use iced::widget::{button, column, container, row, text, Column, Space};
use iced::{Alignment, Color, Element, Length, Padding};

use guardian_core::routes::{RouteKind, RouteOption, RoutePlanner, SafetyRating, WaypointMarker};

use super::shared::{self, palette};
use crate::Message;

pub fn view(planner: &RoutePlanner, compact: bool) -> Element<'_, Message> {
    let header = shared::page_header(
        "Safe Routes",
        "Find and navigate safer routes with real-time safety data",
    );

    let mut content = column![header, view_form(planner, compact)].spacing(24);

    if planner.is_found() {
        content = content.push(view_results(planner));
    }

    content.into()
}

fn view_form(planner: &RoutePlanner, compact: bool) -> Element<'_, Message> {
    let origin = shared::labeled_input(
        "📍 Start Location",
        "Enter starting point",
        &planner.origin,
        Message::OriginChanged,
    );
    let destination = shared::labeled_input(
        "📍 Destination",
        "Enter destination",
        &planner.destination,
        Message::DestinationChanged,
    );

    let inputs: Element<'_, Message> = if compact {
        column![origin, destination].spacing(12).into()
    } else {
        row![origin, destination].spacing(16).into()
    };

    let find = container(
        button(text("Find Safe Route").size(14))
            .on_press(Message::FindRoute)
            .padding(Padding::from([10, 32]))
            .style(button::primary),
    )
    .center_x(Length::Fill);

    container(
        column![
            text("🧭 Plan Your Journey").size(18),
            inputs,
            find,
        ]
        .spacing(16),
    )
    .padding(20)
    .width(Length::Fill)
    .style(palette::card)
    .into()
}

fn view_results(planner: &RoutePlanner) -> Element<'_, Message> {
    let selected = planner.selected();

    let mut tabs = row![].spacing(4);
    for kind in RouteKind::ALL {
        let style = if *kind == selected { button::primary } else { button::secondary };
        tabs = tabs.push(
            button(container(text(kind.tab_label()).size(13)).center_x(Length::Fill))
                .on_press(Message::SelectRouteTab(*kind))
                .padding(Padding::from([8, 0]))
                .width(Length::FillPortion(1))
                .style(style),
        );
    }

    column![tabs, view_route_card(planner, selected.option())]
        .spacing(12)
        .into()
}

fn rating_color(rating: SafetyRating) -> Color {
    match rating {
        SafetyRating::High => palette::GREEN,
        SafetyRating::Good => palette::BLUE,
        SafetyRating::Medium => palette::AMBER,
    }
}

fn view_route_card<'a>(planner: &'a RoutePlanner, option: &'static RouteOption) -> Element<'a, Message> {
    let color = rating_color(option.rating);
    let icon = if option.kind == RouteKind::Fastest { "🧭" } else { "⛨" };

    let heading = row![
        text(icon).size(18).color(color),
        text(option.title).size(15),
        text(format!("{} min", option.duration_min)).size(12).color(palette::MUTED),
        Space::new().width(Length::Fill),
        container(text(option.rating.label()).size(11))
            .padding(Padding::from([3, 10]))
            .style(palette::pill(color)),
    ]
    .spacing(8)
    .align_y(Alignment::Center);

    let mut timeline: Column<'_, Message> = column![].spacing(14);
    for stop in planner.waypoints(option.kind) {
        let (marker, marker_color) = match stop.marker {
            WaypointMarker::Start => ("A", palette::TEAL),
            WaypointMarker::Stop => ("•", palette::TEAL),
            WaypointMarker::End => ("B", palette::RED),
        };
        timeline = timeline.push(
            row![
                container(text(marker).size(12))
                    .center_x(Length::Fixed(24.0))
                    .center_y(Length::Fixed(24.0))
                    .style(palette::pill(marker_color)),
                column![
                    text(stop.name).size(13),
                    text(stop.note).size(11).color(palette::MUTED),
                ]
                .spacing(2),
            ]
            .spacing(12)
            .align_y(Alignment::Center),
        );
    }

    let advisory = container(text(option.advisory).size(12))
        .padding(12)
        .width(Length::Fill)
        .style(palette::tinted(if option.rating == SafetyRating::Medium { palette::AMBER } else { palette::BLUE }));

    let navigate = button(container(text("Navigate").size(14)).center_x(Length::Fill))
        .on_press(Message::NavigateRoute(option.kind))
        .padding(Padding::from([10, 0]))
        .width(Length::Fill)
        .style(button::primary);

    container(column![heading, timeline, advisory, navigate].spacing(18))
        .padding(20)
        .width(Length::Fill)
        .style(palette::card)
        .into()
}
