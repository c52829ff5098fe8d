//! # Session
//!
//! Everything one running app holds: navbar, SOS countdown, contacts and
//! their dialog, route planner, safety switches and the toast queue.
//! Front ends forward user actions here and render the result; every action
//! that produces a notification pushes it onto [`Session::toasts`].

use std::time::Duration;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::GuardianConfig;
use crate::contacts::{ContactBook, ContactEditor};
use crate::errors::{GuardianError, GuardianResult};
use crate::home::Helpline;
use crate::navigation::NavBar;
use crate::notifications::{Notification, ToastQueue};
use crate::routes::{RouteKind, RoutePlanner};
use crate::safety::{SafetySetting, SafetySettings};
use crate::sos::SosCountdown;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub nav: NavBar,
    pub sos: SosCountdown,
    pub contacts: ContactBook,
    pub editor: ContactEditor,
    pub planner: RoutePlanner,
    pub safety: SafetySettings,
    pub toasts: ToastQueue,
}

impl Default for Session {
    fn default() -> Self {
        Session::new(&GuardianConfig::default())
    }
}

impl Session {
    pub fn new(config: &GuardianConfig) -> Self {
        let contacts = if config.contacts.load_samples {
            ContactBook::with_samples()
        } else {
            ContactBook::default()
        };
        Session {
            nav: NavBar::default(),
            sos: SosCountdown::new(&config.sos),
            contacts,
            editor: ContactEditor::default(),
            planner: RoutePlanner::default(),
            safety: SafetySettings::default(),
            toasts: ToastQueue::new(
                config.notifications.default_duration(),
                config.notifications.max_visible,
            ),
        }
    }

    /// Show a toast
    pub fn notify(&mut self, notification: Notification) {
        self.toasts.push(notification);
    }

    /// Show the outcome of a fallible action: its toast on success, an
    /// error toast on failure. Returns whether the action succeeded.
    pub fn report(&mut self, outcome: GuardianResult<Notification>) -> bool {
        match outcome {
            Ok(notification) => {
                self.notify(notification);
                true
            }
            Err(err) => {
                self.notify(Notification::from_error(&err));
                false
            }
        }
    }

    /// Whether time needs to be fed in through [`Session::advance`]
    pub fn needs_ticks(&self) -> bool {
        self.sos.needs_ticks() || !self.toasts.is_empty()
    }

    /// Move every timer forward by `elapsed`
    pub fn advance(&mut self, elapsed: Duration) {
        // Expire first so a toast raised by this step gets its full duration
        self.toasts.advance(elapsed);
        let contacts = self.contacts.len();
        if let Some(alert) = self.sos.advance(elapsed, contacts) {
            self.notify(alert);
        }
    }

    // ===== SOS =====

    pub fn press_sos(&mut self) -> bool {
        self.sos.press()
    }

    pub fn cancel_sos(&mut self) {
        if let Some(n) = self.sos.cancel() {
            self.notify(n);
        }
    }

    pub fn send_sos_now(&mut self) {
        let contacts = self.contacts.len();
        if let Some(n) = self.sos.send_now(contacts) {
            self.notify(n);
        }
    }

    // ===== Contacts =====

    /// Open the edit dialog for a contact
    pub fn edit_contact(&mut self, id: Uuid) -> GuardianResult<()> {
        let contact = self
            .contacts
            .get(id)
            .ok_or_else(|| GuardianError::contact_not_found(id))?;
        self.editor.open_edit(contact);
        Ok(())
    }

    /// Save the open dialog. Returns whether the contact was stored.
    pub fn save_contact(&mut self) -> bool {
        let outcome = self.editor.save(&mut self.contacts);
        self.report(outcome)
    }

    pub fn remove_contact(&mut self, id: Uuid) -> bool {
        let outcome = self.contacts.remove_with_notice(id);
        self.report(outcome)
    }

    // ===== Routes =====

    pub fn find_route(&mut self) -> bool {
        let outcome = self.planner.find_route();
        self.report(outcome)
    }

    pub fn navigate_route(&mut self, kind: RouteKind) {
        let n = self.planner.navigate(kind);
        self.notify(n);
    }

    // ===== Safety =====

    pub fn set_setting(&mut self, setting: SafetySetting, enabled: bool) {
        if let Some(n) = self.safety.set(setting, enabled) {
            self.notify(n);
        }
    }

    pub fn toggle_setting(&mut self, setting: SafetySetting) {
        if let Some(n) = self.safety.toggle(setting) {
            self.notify(n);
        }
    }

    pub fn configure_fake_shutdown(&mut self) {
        let n = self.safety.configure_fake_shutdown();
        self.notify(n);
    }

    // ===== Home =====

    pub fn dial(&mut self, helpline: Helpline) {
        self.notify(helpline.dial());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contacts::ContactField;
    use crate::notifications::NotificationLevel;
    use crate::sos::ALERT_MESSAGE;

    fn messages(session: &Session) -> Vec<String> {
        session.toasts.visible().iter().map(|n| n.message.clone()).collect()
    }

    #[test]
    fn test_new_respects_sample_setting() {
        assert_eq!(Session::default().contacts.len(), 3);

        let mut config = GuardianConfig::default();
        config.contacts.load_samples = false;
        assert!(Session::new(&config).contacts.is_empty());
    }

    #[test]
    fn test_sos_runs_to_alert() {
        let mut session = Session::default();
        assert!(!session.needs_ticks());

        session.press_sos();
        assert!(session.needs_ticks());
        for _ in 0..5 {
            session.advance(Duration::from_secs(1));
        }

        assert!(!session.sos.is_dialog_open());
        assert_eq!(messages(&session), vec![ALERT_MESSAGE.to_string()]);
        assert_eq!(session.sos.history()[0].contacts_notified, 3);

        // Alert toast lasts five seconds
        session.advance(Duration::from_millis(4999));
        assert_eq!(session.toasts.len(), 1);
        session.advance(Duration::from_millis(1));
        assert!(session.toasts.is_empty());
        assert!(!session.needs_ticks());
    }

    #[test]
    fn test_sos_cancel() {
        let mut session = Session::default();
        session.press_sos();
        session.advance(Duration::from_secs(3));
        session.cancel_sos();
        assert_eq!(messages(&session), vec!["SOS alert canceled".to_string()]);
        session.advance(Duration::from_secs(3));
        assert!(session.sos.history().is_empty());
    }

    #[test]
    fn test_contact_flow() {
        let mut session = Session::default();
        session.editor.open_add();
        assert!(!session.save_contact());
        assert_eq!(session.toasts.visible()[0].level, NotificationLevel::Error);
        assert!(session.editor.is_open());

        session.editor.set_field(ContactField::Name, "Ritu Singh");
        session.editor.set_field(ContactField::Phone, "+91 91234 56789");
        assert!(session.save_contact());
        assert_eq!(session.contacts.len(), 4);

        let id = session.contacts.nth(3).unwrap().id;
        session.edit_contact(id).unwrap();
        session.editor.set_field(ContactField::Relation, "Colleague");
        assert!(session.save_contact());
        assert_eq!(session.contacts.get(id).unwrap().relation, "Colleague");

        assert!(session.remove_contact(id));
        assert!(!session.remove_contact(id));
        assert_eq!(session.contacts.len(), 3);
        assert!(session.edit_contact(id).is_err());
    }

    #[test]
    fn test_route_and_settings_toasts() {
        let mut session = Session::default();
        assert!(!session.find_route());
        session.planner.origin = "A".to_string();
        session.planner.destination = "B".to_string();
        assert!(session.find_route());

        session.toggle_setting(SafetySetting::VoiceDetection);
        session.toggle_setting(SafetySetting::AutoRecord);
        session.configure_fake_shutdown();

        assert_eq!(session.toasts.len(), 4);
        assert!(!session.safety.auto_record);
    }

    #[test]
    fn test_session_serializes() {
        let session = Session::default();
        let json = serde_json::to_string(&session).unwrap();
        assert!(json.contains("Priya Sharma"));
        assert!(json.contains("\"stealth_mode\":false"));
    }

    #[test]
    fn test_session_restores_from_json() {
        let mut session = Session::default();
        session.press_sos();
        session.advance(Duration::from_secs(2));
        session.toggle_setting(SafetySetting::StealthMode);

        let json = serde_json::to_string(&session).unwrap();
        let restored: Session = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, session);
        assert_eq!(restored.sos.remaining(), Some(3));
    }
}
