//! UI module for the Phoenix Guardian GUI
//!
//! # Layout
//! - `navbar` - Brand, page links, compact menu
//! - one module per page: `home_page`, `safety_page`, `contacts_page`, `routes_page`
//! - `footer` - Bottom band
//!
//! # Overlays
//! - `modal` - Backdrop and centred dialog (SOS countdown, contact form)
//! - `toasts` - Notification stack, top-right
//!
//! # Components
//! - `sos_button` - SOS button and countdown dialog
//! - `shared` - Palette, page headers, labelled inputs

// Chrome
pub mod navbar;
pub mod footer;

// Pages
pub mod home_page;
pub mod safety_page;
pub mod contacts_page;
pub mod routes_page;

// Overlays
pub mod modal;
pub mod toasts;

// Components
pub mod sos_button;
pub mod shared;
