//! # Safety Settings
//!
//! Five switches and one button. Stealth mode and voice detection announce
//! themselves with a toast; the remaining switches only flip state. No other
//! part of the app reads these values.

use serde::{Deserialize, Serialize};

use crate::notifications::Notification;

/// Shown by "Configure Fake Shutdown"
pub const FAKE_SHUTDOWN_MESSAGE: &str =
    "Fake shutdown mode ready. Press power button 3 times quickly to activate.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SafetySetting {
    StealthMode,
    VoiceDetection,
    AutoRecord,
    ShakeDetection,
    LocationTracking,
}

impl SafetySetting {
    pub const ALL: &'static [SafetySetting] = &[
        SafetySetting::StealthMode,
        SafetySetting::VoiceDetection,
        SafetySetting::AutoRecord,
        SafetySetting::ShakeDetection,
        SafetySetting::LocationTracking,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SafetySetting::StealthMode => "Enable Stealth Monitoring",
            SafetySetting::VoiceDetection => "Enable Voice Detection",
            SafetySetting::AutoRecord => "Auto-Record in Emergency",
            SafetySetting::ShakeDetection => "Shake Detection",
            SafetySetting::LocationTracking => "Continuous Location Tracking",
        }
    }

    /// Short name accepted by the CLI `toggle` command
    pub fn key(&self) -> &'static str {
        match self {
            SafetySetting::StealthMode => "stealth",
            SafetySetting::VoiceDetection => "voice",
            SafetySetting::AutoRecord => "auto-record",
            SafetySetting::ShakeDetection => "shake",
            SafetySetting::LocationTracking => "location",
        }
    }

    pub fn from_key(key: &str) -> Option<SafetySetting> {
        SafetySetting::ALL.iter().copied().find(|s| s.key() == key)
    }

    /// Feature name used in the toast, for the settings that announce
    fn announced_name(&self) -> Option<&'static str> {
        match self {
            SafetySetting::StealthMode => Some("Stealth mode"),
            SafetySetting::VoiceDetection => Some("Voice distress detection"),
            _ => None,
        }
    }
}

impl std::fmt::Display for SafetySetting {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SafetySettings {
    pub stealth_mode: bool,
    pub voice_detection: bool,
    pub auto_record: bool,
    pub shake_detection: bool,
    pub location_tracking: bool,
}

impl Default for SafetySettings {
    fn default() -> Self {
        SafetySettings {
            stealth_mode: false,
            voice_detection: false,
            auto_record: true,
            shake_detection: true,
            location_tracking: false,
        }
    }
}

impl SafetySettings {
    pub fn get(&self, setting: SafetySetting) -> bool {
        match setting {
            SafetySetting::StealthMode => self.stealth_mode,
            SafetySetting::VoiceDetection => self.voice_detection,
            SafetySetting::AutoRecord => self.auto_record,
            SafetySetting::ShakeDetection => self.shake_detection,
            SafetySetting::LocationTracking => self.location_tracking,
        }
    }

    fn slot(&mut self, setting: SafetySetting) -> &mut bool {
        match setting {
            SafetySetting::StealthMode => &mut self.stealth_mode,
            SafetySetting::VoiceDetection => &mut self.voice_detection,
            SafetySetting::AutoRecord => &mut self.auto_record,
            SafetySetting::ShakeDetection => &mut self.shake_detection,
            SafetySetting::LocationTracking => &mut self.location_tracking,
        }
    }

    /// Set a switch. Returns the toast, if this setting announces changes.
    pub fn set(&mut self, setting: SafetySetting, enabled: bool) -> Option<Notification> {
        *self.slot(setting) = enabled;
        tracing::debug!(%setting, enabled, "safety setting changed");

        let name = setting.announced_name()?;
        Some(if enabled {
            Notification::success(format!("{} activated", name))
        } else {
            Notification::info(format!("{} deactivated", name))
        })
    }

    /// Flip a switch
    pub fn toggle(&mut self, setting: SafetySetting) -> Option<Notification> {
        let enabled = !self.get(setting);
        self.set(setting, enabled)
    }

    /// "Configure Fake Shutdown" button
    pub fn configure_fake_shutdown(&self) -> Notification {
        tracing::info!("fake shutdown configured (simulated)");
        Notification::success(FAKE_SHUTDOWN_MESSAGE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notifications::NotificationLevel;

    #[test]
    fn test_defaults() {
        let s = SafetySettings::default();
        let on: Vec<_> = SafetySetting::ALL.iter().filter(|k| s.get(**k)).collect();
        assert_eq!(on, vec![&SafetySetting::AutoRecord, &SafetySetting::ShakeDetection]);
    }

    #[test]
    fn test_stealth_toggle_messages() {
        let mut s = SafetySettings::default();
        let on = s.toggle(SafetySetting::StealthMode).unwrap();
        assert_eq!(on.level, NotificationLevel::Success);
        assert_eq!(on.message, "Stealth mode activated");
        assert!(s.stealth_mode);

        let off = s.toggle(SafetySetting::StealthMode).unwrap();
        assert_eq!(off.level, NotificationLevel::Info);
        assert_eq!(off.message, "Stealth mode deactivated");
    }

    #[test]
    fn test_voice_toggle_messages() {
        let mut s = SafetySettings::default();
        assert_eq!(
            s.set(SafetySetting::VoiceDetection, true).unwrap().message,
            "Voice distress detection activated"
        );
        assert_eq!(
            s.set(SafetySetting::VoiceDetection, false).unwrap().message,
            "Voice distress detection deactivated"
        );
    }

    #[test]
    fn test_quiet_switches() {
        let mut s = SafetySettings::default();
        assert!(s.toggle(SafetySetting::ShakeDetection).is_none());
        assert!(!s.shake_detection);
        assert!(s.toggle(SafetySetting::LocationTracking).is_none());
        assert!(s.location_tracking);
    }

    #[test]
    fn test_keys() {
        for setting in SafetySetting::ALL {
            assert_eq!(SafetySetting::from_key(setting.key()), Some(*setting));
        }
        assert_eq!(SafetySetting::from_key("teleport"), None);
    }

    #[test]
    fn test_fake_shutdown() {
        let n = SafetySettings::default().configure_fake_shutdown();
        assert_eq!(n.level, NotificationLevel::Success);
        assert_eq!(n.message, FAKE_SHUTDOWN_MESSAGE);
    }
}
