//! # guardian_core - Phoenix Safety Guardian State
//!
//! `guardian_core` holds every piece of state behind the Phoenix Safety
//! Guardian front ends: the SOS countdown, the emergency contact list and its
//! dialog, the route planner, the safety switches, navigation and the toast
//! queue. It has no UI toolkit dependency, so the Iced GUI and the terminal
//! CLI drive the same code.
//!
//! All features are simulated. Nothing is sent, stored or located; actions
//! end in a [`Notification`].
//!
//! ## Quick Start
//!
//! ```rust
//! use std::time::Duration;
//! use guardian_core::Session;
//!
//! let mut session = Session::default();
//! session.press_sos();
//! for _ in 0..5 {
//!     session.advance(Duration::from_secs(1));
//! }
//! assert_eq!(session.sos.history().len(), 1);
//! ```
//!
//! ## Modules
//!
//! - [`session`] - Aggregate state driven by the front ends
//! - [`sos`] - Countdown confirmation and simulated alert
//! - [`contacts`] - Contact list and add/edit dialog
//! - [`routes`] - Route form and the fixed route options
//! - [`safety`] - Safety switches
//! - [`home`] - Landing page copy and helplines
//! - [`navigation`] - Pages and navbar state
//! - [`notifications`] - Toasts and their expiry
//! - [`config`] - figment-based configuration
//! - [`logging`] - tracing subscriber setup
//! - [`errors`] - Structured error types

pub mod config;
pub mod contacts;
pub mod errors;
pub mod home;
pub mod logging;
pub mod navigation;
pub mod notifications;
pub mod routes;
pub mod safety;
pub mod session;
pub mod sos;

// Re-export commonly used types at crate root for convenience
pub use config::GuardianConfig;
pub use errors::{GuardianError, GuardianResult};
pub use navigation::Page;
pub use notifications::{Notification, NotificationLevel};
pub use session::Session;
