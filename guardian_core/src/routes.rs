//! # Safe Routes
//!
//! The route planner is a form: origin and destination in, three fixed route
//! options out. No route is computed; "finding" a route only validates the
//! form and reveals the options.

use serde::{Deserialize, Serialize};

use crate::errors::{GuardianError, GuardianResult};
use crate::notifications::Notification;

/// Shown when either end of the journey is blank
pub const MISSING_ENDPOINTS_MESSAGE: &str = "Please enter both origin and destination";

/// Which of the three options a tab shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum RouteKind {
    #[default]
    Safest,
    Fastest,
    Balanced,
}

impl RouteKind {
    pub const ALL: &'static [RouteKind] = &[RouteKind::Safest, RouteKind::Fastest, RouteKind::Balanced];

    /// Tab label
    pub fn tab_label(&self) -> &'static str {
        match self {
            RouteKind::Safest => "Safest Route",
            RouteKind::Fastest => "Fastest Route",
            RouteKind::Balanced => "Balanced",
        }
    }

    pub fn option(&self) -> &'static RouteOption {
        match self {
            RouteKind::Safest => &ROUTE_OPTIONS[0],
            RouteKind::Fastest => &ROUTE_OPTIONS[1],
            RouteKind::Balanced => &ROUTE_OPTIONS[2],
        }
    }
}

impl std::fmt::Display for RouteKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.tab_label())
    }
}

/// Safety badge on a route card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SafetyRating {
    High,
    Good,
    Medium,
}

impl SafetyRating {
    pub fn label(&self) -> &'static str {
        match self {
            SafetyRating::High => "High Safety",
            SafetyRating::Good => "Good Safety",
            SafetyRating::Medium => "Medium Safety",
        }
    }
}

/// A fixed route description
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RouteOption {
    pub kind: RouteKind,
    pub title: &'static str,
    pub duration_min: u32,
    pub rating: SafetyRating,
    pub advisory: &'static str,
}

pub static ROUTE_OPTIONS: [RouteOption; 3] = [
    RouteOption {
        kind: RouteKind::Safest,
        title: "Safest Route",
        duration_min: 35,
        rating: SafetyRating::High,
        advisory: "This route avoids isolated areas and follows well-lit streets with CCTV coverage.",
    },
    RouteOption {
        kind: RouteKind::Fastest,
        title: "Fastest Route",
        duration_min: 22,
        rating: SafetyRating::Medium,
        advisory: "This route includes some less monitored areas but is significantly faster.",
    },
    RouteOption {
        kind: RouteKind::Balanced,
        title: "Balanced Route",
        duration_min: 28,
        rating: SafetyRating::Good,
        advisory: "This route balances safety with travel time for an optimal journey.",
    },
];

/// Marker style of a waypoint on the route timeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WaypointMarker {
    Start,
    Stop,
    End,
}

/// One stop on the route timeline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Waypoint {
    pub marker: WaypointMarker,
    pub name: String,
    pub note: String,
}

/// Form state and revealed results
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoutePlanner {
    pub origin: String,
    pub destination: String,
    found: bool,
    selected: RouteKind,
}

impl RoutePlanner {
    pub fn is_found(&self) -> bool {
        self.found
    }

    pub fn selected(&self) -> RouteKind {
        self.selected
    }

    pub fn select(&mut self, kind: RouteKind) {
        self.selected = kind;
    }

    /// Validate the form and reveal the route options.
    ///
    /// A failed search leaves previously revealed results showing.
    pub fn find_route(&mut self) -> GuardianResult<Notification> {
        let missing: Vec<String> = [("origin", &self.origin), ("destination", &self.destination)]
            .into_iter()
            .filter(|(_, value)| value.is_empty())
            .map(|(field, _)| field.to_string())
            .collect();

        if !missing.is_empty() {
            tracing::warn!(?missing, "route search rejected");
            return Err(GuardianError::incomplete_form("route", missing, MISSING_ENDPOINTS_MESSAGE));
        }

        tracing::info!(origin = %self.origin, destination = %self.destination, "safe route found (simulated)");
        self.found = true;
        Ok(Notification::success("Safe route found"))
    }

    /// Timeline for a route. Only the safest route has detailed stops.
    pub fn waypoints(&self, kind: RouteKind) -> Vec<Waypoint> {
        if kind != RouteKind::Safest {
            return Vec::new();
        }
        let origin = if self.origin.is_empty() { "Starting Point" } else { self.origin.as_str() };
        let destination = if self.destination.is_empty() { "Destination" } else { self.destination.as_str() };
        vec![
            Waypoint {
                marker: WaypointMarker::Start,
                name: origin.to_string(),
                note: "Well-lit main road".to_string(),
            },
            Waypoint {
                marker: WaypointMarker::Stop,
                name: "Metro Station".to_string(),
                note: "Guarded, CCTV surveillance".to_string(),
            },
            Waypoint {
                marker: WaypointMarker::End,
                name: destination.to_string(),
                note: "Commercial area".to_string(),
            },
        ]
    }

    /// "Navigate" button on a route card
    pub fn navigate(&self, kind: RouteKind) -> Notification {
        let option = kind.option();
        tracing::info!(route = %kind, "navigation requested (simulated)");
        Notification::info(format!(
            "Navigating via {} ({} min). Turn-by-turn guidance is simulated.",
            option.title, option.duration_min
        ))
    }
}
