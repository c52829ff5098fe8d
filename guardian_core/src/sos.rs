//! # SOS Countdown
//!
//! Pressing the SOS button opens a confirmation dialog and counts down
//! (5 ticks, one per second by default). If nobody cancels, the alert fires.
//! The alert itself is simulated: it produces an error toast and an entry in
//! the alert history, nothing leaves the process.
//!
//! ```text
//!            press                tick (remaining > 1)
//!   Idle ───────────▶ Counting ◀──────────────┐
//!    ▲                  │  │  └───────────────┘
//!    │     cancel       │  │ tick (remaining == 1) / send_now
//!    ├──────────────────┘  ▼
//!    └─────────────── alert fired
//! ```
//!
//! The machine does not own a timer. Callers feed elapsed time through
//! [`SosCountdown::advance`], which performs one [`SosCountdown::tick`] per
//! whole tick interval.

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::SosConfig;
use crate::notifications::Notification;

/// Toast shown when the alert fires
pub const ALERT_MESSAGE: &str = "SOS Alert triggered! Location shared with your emergency contacts.";

/// Toast shown when the countdown is cancelled
pub const CANCEL_MESSAGE: &str = "SOS alert canceled";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SosPhase {
    Idle,
    Counting { remaining: u32 },
}

/// What fired an alert
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AlertTrigger {
    /// Countdown ran out
    Countdown,
    /// User pressed "Send Now"
    SendNow,
}

/// Record of a fired (simulated) alert
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SosAlert {
    pub sequence: u32,
    pub trigger: AlertTrigger,
    pub triggered_at: DateTime<Utc>,
    pub contacts_notified: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SosCountdown {
    countdown_secs: u32,
    tick_interval: Duration,
    press_flash: Duration,
    alert_duration: Duration,
    phase: SosPhase,
    since_last_tick: Duration,
    flash_remaining: Duration,
    history: Vec<SosAlert>,
}

impl Default for SosCountdown {
    fn default() -> Self {
        SosCountdown::new(&SosConfig::default())
    }
}

impl SosCountdown {
    pub fn new(config: &SosConfig) -> Self {
        SosCountdown {
            countdown_secs: config.countdown_secs,
            tick_interval: config.tick_interval(),
            press_flash: config.press_flash(),
            alert_duration: config.alert_duration(),
            phase: SosPhase::Idle,
            since_last_tick: Duration::ZERO,
            flash_remaining: Duration::ZERO,
            history: Vec::new(),
        }
    }

    pub fn phase(&self) -> SosPhase {
        self.phase
    }

    /// Seconds left on the countdown, if one is running
    pub fn remaining(&self) -> Option<u32> {
        match self.phase {
            SosPhase::Idle => None,
            SosPhase::Counting { remaining } => Some(remaining),
        }
    }

    /// The confirmation dialog is open exactly while counting
    pub fn is_dialog_open(&self) -> bool {
        matches!(self.phase, SosPhase::Counting { .. })
    }

    /// Whether the button is in its brief pressed state
    pub fn is_pressed(&self) -> bool {
        !self.flash_remaining.is_zero()
    }

    /// Whether the caller needs to keep feeding time in
    pub fn needs_ticks(&self) -> bool {
        self.is_dialog_open() || self.is_pressed()
    }

    pub fn history(&self) -> &[SosAlert] {
        &self.history
    }

    /// Dialog body line for the current countdown
    pub fn dialog_message(&self) -> Option<String> {
        self.remaining()
            .map(|n| format!("SOS alert will be sent in {} seconds", n))
    }

    /// Start the countdown. Returns false if one is already running.
    pub fn press(&mut self) -> bool {
        self.flash_remaining = self.press_flash;
        if self.is_dialog_open() {
            return false;
        }
        tracing::info!(seconds = self.countdown_secs, "SOS countdown started");
        self.phase = SosPhase::Counting {
            remaining: self.countdown_secs,
        };
        self.since_last_tick = Duration::ZERO;
        true
    }

    /// One countdown step. Fires the alert when the count reaches zero.
    pub fn tick(&mut self, contacts: usize) -> Option<Notification> {
        let SosPhase::Counting { remaining } = self.phase else {
            return None;
        };
        let remaining = remaining.saturating_sub(1);
        tracing::debug!(remaining, "SOS countdown tick");
        if remaining == 0 {
            Some(self.fire(AlertTrigger::Countdown, contacts))
        } else {
            self.phase = SosPhase::Counting { remaining };
            None
        }
    }

    /// Feed wall time in. Drains the press flash and runs due ticks.
    pub fn advance(&mut self, elapsed: Duration, contacts: usize) -> Option<Notification> {
        self.flash_remaining = self.flash_remaining.saturating_sub(elapsed);
        if !self.is_dialog_open() {
            return None;
        }

        self.since_last_tick += elapsed;
        while self.since_last_tick >= self.tick_interval {
            self.since_last_tick -= self.tick_interval;
            if let Some(alert) = self.tick(contacts) {
                return Some(alert);
            }
        }
        None
    }

    /// Abort the countdown. Does nothing when idle.
    pub fn cancel(&mut self) -> Option<Notification> {
        if !self.is_dialog_open() {
            return None;
        }
        tracing::info!("SOS countdown canceled");
        self.reset();
        Some(Notification::info(CANCEL_MESSAGE))
    }

    /// Skip the rest of the countdown. Does nothing when idle.
    pub fn send_now(&mut self, contacts: usize) -> Option<Notification> {
        if !self.is_dialog_open() {
            return None;
        }
        Some(self.fire(AlertTrigger::SendNow, contacts))
    }

    fn fire(&mut self, trigger: AlertTrigger, contacts: usize) -> Notification {
        self.reset();
        let alert = SosAlert {
            sequence: self.history.len() as u32 + 1,
            trigger,
            triggered_at: Utc::now(),
            contacts_notified: contacts,
        };
        tracing::info!(
            sequence = alert.sequence,
            trigger = ?alert.trigger,
            contacts = alert.contacts_notified,
            "SOS alert triggered (simulated)"
        );
        self.history.push(alert);
        Notification::error(ALERT_MESSAGE).with_duration(self.alert_duration)
    }

    fn reset(&mut self) {
        self.phase = SosPhase::Idle;
        self.since_last_tick = Duration::ZERO;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notifications::NotificationLevel;

    const SECOND: Duration = Duration::from_secs(1);

    #[test]
    fn test_press_opens_dialog_at_five() {
        let mut sos = SosCountdown::default();
        assert!(!sos.is_dialog_open());

        assert!(sos.press());
        assert!(sos.is_dialog_open());
        assert_eq!(sos.remaining(), Some(5));
        assert_eq!(sos.dialog_message().unwrap(), "SOS alert will be sent in 5 seconds");
    }

    #[test]
    fn test_countdown_fires_after_five_ticks() {
        let mut sos = SosCountdown::default();
        sos.press();

        for expected in [4, 3, 2, 1] {
            assert!(sos.tick(3).is_none());
            assert_eq!(sos.remaining(), Some(expected));
        }

        let alert = sos.tick(3).expect("fifth tick fires");
        assert_eq!(alert.level, NotificationLevel::Error);
        assert_eq!(alert.message, ALERT_MESSAGE);
        assert_eq!(alert.duration, Some(Duration::from_millis(5000)));
        assert!(!sos.is_dialog_open());
        assert_eq!(sos.history().len(), 1);
        assert_eq!(sos.history()[0].trigger, AlertTrigger::Countdown);
        assert_eq!(sos.history()[0].contacts_notified, 3);
    }

    #[test]
    fn test_advance_accumulates_partial_intervals() {
        let mut sos = SosCountdown::default();
        sos.press();

        assert!(sos.advance(Duration::from_millis(600), 0).is_none());
        assert_eq!(sos.remaining(), Some(5));
        assert!(sos.advance(Duration::from_millis(600), 0).is_none());
        assert_eq!(sos.remaining(), Some(4));

        // 3.8s more covers the remaining four ticks
        let alert = sos.advance(Duration::from_millis(3800), 0);
        assert!(alert.is_some());
        assert_eq!(sos.phase(), SosPhase::Idle);
    }

    #[test]
    fn test_cancel_stops_countdown() {
        let mut sos = SosCountdown::default();
        sos.press();
        sos.advance(SECOND * 2, 0);

        let toast = sos.cancel().unwrap();
        assert_eq!(toast.level, NotificationLevel::Info);
        assert_eq!(toast.message, CANCEL_MESSAGE);
        assert!(!sos.is_dialog_open());

        // No late alert after cancel
        assert!(sos.advance(SECOND * 10, 0).is_none());
        assert!(sos.history().is_empty());
        assert!(sos.cancel().is_none());
    }

    #[test]
    fn test_send_now_fires_once() {
        let mut sos = SosCountdown::default();
        sos.press();
        sos.tick(1);

        let alert = sos.send_now(1).unwrap();
        assert_eq!(alert.message, ALERT_MESSAGE);
        assert_eq!(sos.history()[0].trigger, AlertTrigger::SendNow);

        // Countdown must not keep running in the background
        assert!(sos.advance(SECOND * 10, 1).is_none());
        assert_eq!(sos.history().len(), 1);
        assert!(sos.send_now(1).is_none());
    }

    #[test]
    fn test_press_while_counting_is_ignored() {
        let mut sos = SosCountdown::default();
        sos.press();
        sos.tick(0);
        assert!(!sos.press());
        assert_eq!(sos.remaining(), Some(4));
    }

    #[test]
    fn test_press_flash_expires() {
        let mut sos = SosCountdown::default();
        sos.press();
        assert!(sos.is_pressed());
        sos.advance(Duration::from_millis(199), 0);
        assert!(sos.is_pressed());
        sos.advance(Duration::from_millis(1), 0);
        assert!(!sos.is_pressed());
        assert!(sos.needs_ticks());
    }

    #[test]
    fn test_custom_config() {
        let config = SosConfig {
            countdown_secs: 2,
            tick_interval_ms: 500,
            ..SosConfig::default()
        };
        let mut sos = SosCountdown::new(&config);
        sos.press();
        assert!(sos.advance(Duration::from_millis(500), 0).is_none());
        assert!(sos.advance(Duration::from_millis(500), 0).is_some());
        assert_eq!(sos.history()[0].sequence, 1);
    }
}
