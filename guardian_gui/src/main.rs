//! # Phoenix Guardian GUI Application
//!
//! Graphical front end for Phoenix Safety Guardian, built with Iced for
//! Windows, macOS, Linux and WASM. All state lives in
//! [`guardian_core::Session`]; this crate maps user input to session calls
//! and draws the result.
//!
//! Timers (SOS countdown, press flash, toast expiry) are driven by a single
//! `Tick` subscription that only runs while something is counting down.

mod ui;

use std::time::Duration;

use iced::time::Instant;
use iced::widget::{column, container, scrollable, stack};
use iced::{Element, Length, Size, Subscription, Task, Theme};
use uuid::Uuid;

use guardian_core::contacts::ContactField;
use guardian_core::home::Helpline;
use guardian_core::navigation;
use guardian_core::routes::RouteKind;
use guardian_core::safety::SafetySetting;
use guardian_core::{GuardianConfig, Page, Session};

use ui::modal::ModalType;

/// How often timers are advanced while any are running
const TIMER_RESOLUTION: Duration = Duration::from_millis(50);

/// Initial window size (logical pixels)
const WINDOW_SIZE: Size = Size::new(1100.0, 800.0);

#[derive(Debug, Clone)]
pub enum Message {
    // Navigation
    Navigate(Page),
    ToggleMenu,
    WindowResized(Size),

    // SOS
    SosPressed,
    SosCancel,
    SosSendNow,

    // Contacts
    OpenAddContact,
    OpenEditContact(Uuid),
    ContactFieldChanged(ContactField, String),
    SaveContact,
    CloseContactDialog,
    RemoveContact(Uuid),

    // Routes
    OriginChanged(String),
    DestinationChanged(String),
    FindRoute,
    SelectRouteTab(RouteKind),
    NavigateRoute(RouteKind),

    // Safety
    SettingToggled(SafetySetting, bool),
    ConfigureFakeShutdown,

    // Home
    CallHelpline(Helpline),

    // Overlays and timers
    ModalDismissed,
    DismissToast(Uuid),
    Tick(Instant),
}

pub struct App {
    pub session: Session,
    pub dark_mode: bool,
    pub window_width: f32,
    /// When timers were last advanced. `None` while no timer runs.
    last_tick: Option<Instant>,
}

impl Default for App {
    fn default() -> Self {
        App::with_config(&GuardianConfig::default())
    }
}

impl App {
    fn new() -> Self {
        let config = load_config();
        App::with_config(&config)
    }

    pub fn with_config(config: &GuardianConfig) -> Self {
        App {
            session: Session::new(config),
            dark_mode: config.appearance.dark_mode,
            window_width: WINDOW_SIZE.width,
            last_tick: None,
        }
    }

    fn title(&self) -> String {
        format!("Phoenix Guardian - {}", self.session.nav.current().label())
    }

    fn theme(&self) -> Theme {
        if self.dark_mode {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        let timers_were_idle = !self.session.needs_ticks();

        match message {
            // ===== Navigation =====
            Message::Navigate(page) => self.session.nav.navigate(page),
            Message::ToggleMenu => self.session.nav.toggle_menu(),
            Message::WindowResized(size) => {
                self.window_width = size.width;
                self.session.nav.set_viewport_width(size.width);
            }

            // ===== SOS =====
            Message::SosPressed => {
                self.session.press_sos();
            }
            Message::SosCancel => self.session.cancel_sos(),
            Message::SosSendNow => self.session.send_sos_now(),

            // ===== Contacts =====
            Message::OpenAddContact => self.session.editor.open_add(),
            Message::OpenEditContact(id) => {
                if let Err(e) = self.session.edit_contact(id) {
                    tracing::warn!(error = %e, "cannot edit contact");
                }
            }
            Message::ContactFieldChanged(field, value) => self.session.editor.set_field(field, value),
            Message::SaveContact => {
                self.session.save_contact();
            }
            Message::CloseContactDialog => self.session.editor.close(),
            Message::RemoveContact(id) => {
                self.session.remove_contact(id);
            }

            // ===== Routes =====
            Message::OriginChanged(value) => self.session.planner.origin = value,
            Message::DestinationChanged(value) => self.session.planner.destination = value,
            Message::FindRoute => {
                self.session.find_route();
            }
            Message::SelectRouteTab(kind) => self.session.planner.select(kind),
            Message::NavigateRoute(kind) => self.session.navigate_route(kind),

            // ===== Safety =====
            Message::SettingToggled(setting, enabled) => self.session.set_setting(setting, enabled),
            Message::ConfigureFakeShutdown => self.session.configure_fake_shutdown(),

            // ===== Home =====
            Message::CallHelpline(helpline) => self.session.dial(helpline),

            // ===== Overlays and timers =====
            Message::ModalDismissed => match ModalType::active(&self.session) {
                // Closing the SOS dialog any way other than "Send Now" cancels it
                Some(ModalType::SosCountdown) => self.session.cancel_sos(),
                Some(ModalType::ContactForm) => self.session.editor.close(),
                None => {}
            },
            Message::DismissToast(id) => {
                self.session.toasts.dismiss(id);
            }
            Message::Tick(now) => {
                let elapsed = self
                    .last_tick
                    .map(|last| now.saturating_duration_since(last))
                    .unwrap_or_default();
                self.last_tick = Some(now);
                self.session.advance(elapsed);
            }
        }

        if !self.session.needs_ticks() {
            self.last_tick = None;
        } else if timers_were_idle {
            self.last_tick = Some(Instant::now());
        }

        Task::none()
    }

    fn subscription(&self) -> Subscription<Message> {
        let resize = iced::window::resize_events().map(|(_id, size)| Message::WindowResized(size));

        if self.session.needs_ticks() {
            Subscription::batch([resize, iced::time::every(TIMER_RESOLUTION).map(Message::Tick)])
        } else {
            resize
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let compact = navigation::is_compact(self.window_width);

        let page: Element<'_, Message> = match self.session.nav.current() {
            Page::Home => ui::home_page::view(&self.session, compact),
            Page::Safety => ui::safety_page::view(&self.session.safety, compact),
            Page::Contacts => ui::contacts_page::view(&self.session.contacts, compact),
            Page::Routes => ui::routes_page::view(&self.session.planner, compact),
        };

        let base = column![
            ui::navbar::view(&self.session.nav, compact),
            scrollable(container(page).padding(24).width(Length::Fill)).height(Length::Fill),
            ui::footer::view_footer(),
        ]
        .width(Length::Fill)
        .height(Length::Fill);

        let mut layers = stack![base].width(Length::Fill).height(Length::Fill);

        if let Some(modal) = ModalType::active(&self.session) {
            layers = layers
                .push(ui::modal::view_backdrop())
                .push(ui::modal::view_modal(modal, &self.session));
        }

        layers.push(ui::toasts::view(&self.session.toasts)).into()
    }
}

/// Load configuration, falling back to defaults when it is unreadable
fn load_config() -> GuardianConfig {
    #[cfg(target_arch = "wasm32")]
    {
        GuardianConfig::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        match GuardianConfig::load() {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(error = %e, "using default configuration");
                GuardianConfig::default()
            }
        }
    }
}

fn main() -> iced::Result {
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();

    #[cfg(not(target_arch = "wasm32"))]
    guardian_core::logging::init_logging(guardian_core::logging::Verbosity::Normal);

    tracing::info!("starting Phoenix Guardian GUI");

    iced::application(App::new, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .subscription(App::subscription)
        .window_size(WINDOW_SIZE)
        .run()
}
