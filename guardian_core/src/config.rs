//! # Configuration
//!
//! Loaded with figment from, in order (later wins):
//! 1. Built-in defaults
//! 2. TOML file at `~/.config/phoenix-guardian/config.toml` (native only)
//! 3. Environment variables prefixed with `GUARDIAN_`, nested keys split on
//!    `__` (e.g. `GUARDIAN_SOS__COUNTDOWN_SECS=3`)
//!
//! ```toml
//! [sos]
//! countdown_secs = 5
//! tick_interval_ms = 1000
//!
//! [appearance]
//! dark_mode = true
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::errors::{GuardianError, GuardianResult};

/// Directory name under the platform config dir
const CONFIG_DIR_NAME: &str = "phoenix-guardian";

/// Default configuration file name
const CONFIG_FILE_NAME: &str = "config.toml";

/// Environment variable prefix
const ENV_PREFIX: &str = "GUARDIAN_";

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GuardianConfig {
    pub sos: SosConfig,
    pub notifications: NotificationConfig,
    pub appearance: AppearanceConfig,
    pub contacts: ContactsConfig,
}

/// SOS countdown timing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SosConfig {
    /// Number of countdown ticks before the alert fires
    pub countdown_secs: u32,
    /// Time between ticks in milliseconds
    pub tick_interval_ms: u64,
    /// How long the button stays visually pressed
    pub press_flash_ms: u64,
    /// On-screen duration of the alert toast
    pub alert_duration_ms: u64,
}

/// Toast host settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationConfig {
    pub default_duration_ms: u64,
    pub max_visible: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppearanceConfig {
    pub dark_mode: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactsConfig {
    /// Start with the three sample contacts instead of an empty list
    pub load_samples: bool,
}

impl Default for SosConfig {
    fn default() -> Self {
        Self {
            countdown_secs: 5,
            tick_interval_ms: 1000,
            press_flash_ms: 200,
            alert_duration_ms: 5000,
        }
    }
}

impl SosConfig {
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    pub fn press_flash(&self) -> Duration {
        Duration::from_millis(self.press_flash_ms)
    }

    pub fn alert_duration(&self) -> Duration {
        Duration::from_millis(self.alert_duration_ms)
    }
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            default_duration_ms: 4000,
            max_visible: 3,
        }
    }
}

impl NotificationConfig {
    pub fn default_duration(&self) -> Duration {
        Duration::from_millis(self.default_duration_ms)
    }
}

impl Default for ContactsConfig {
    fn default() -> Self {
        Self { load_samples: true }
    }
}

impl GuardianConfig {
    /// Load configuration from all sources.
    ///
    /// The platform config file is optional: when it does not exist the
    /// defaults and environment are used.
    ///
    /// # Errors
    ///
    /// Returns [`GuardianError::InvalidConfig`] if a source fails to parse or
    /// the merged values do not validate.
    pub fn load() -> GuardianResult<Self> {
        Self::extract(default_config_path().as_deref())
    }

    /// Load configuration with an explicit config file (or none).
    ///
    /// Unlike [`GuardianConfig::load`], a file named here must exist.
    ///
    /// # Errors
    ///
    /// Returns [`GuardianError::InvalidConfig`] if the file is missing, fails
    /// to parse, or the merged values do not validate.
    pub fn load_from(config_file: Option<&Path>) -> GuardianResult<Self> {
        if let Some(path) = config_file {
            if !path.is_file() {
                return Err(GuardianError::invalid_config(format!(
                    "config file not found: {}",
                    path.display()
                )));
            }
        }
        Self::extract(config_file)
    }

    fn extract(config_file: Option<&Path>) -> GuardianResult<Self> {
        let mut figment = Figment::new().merge(Serialized::defaults(GuardianConfig::default()));
        if let Some(path) = config_file {
            tracing::debug!(path = %path.display(), "reading config file");
            figment = figment.merge(Toml::file(path));
        }
        let config: GuardianConfig = figment
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`GuardianError::InvalidConfig`] naming the offending key.
    pub fn validate(&self) -> GuardianResult<()> {
        if self.sos.countdown_secs == 0 {
            return Err(GuardianError::invalid_config("sos.countdown_secs must be at least 1"));
        }
        if self.sos.tick_interval_ms == 0 {
            return Err(GuardianError::invalid_config("sos.tick_interval_ms must be positive"));
        }
        if self.notifications.max_visible == 0 {
            return Err(GuardianError::invalid_config("notifications.max_visible must be at least 1"));
        }
        Ok(())
    }
}

/// Default config file path, if the platform has a config directory.
#[cfg(not(target_arch = "wasm32"))]
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}

/// Browsers have no config directory.
#[cfg(target_arch = "wasm32")]
pub fn default_config_path() -> Option<PathBuf> {
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn test_defaults() {
        let config = GuardianConfig::default();
        assert_eq!(config.sos.countdown_secs, 5);
        assert_eq!(config.sos.tick_interval(), Duration::from_secs(1));
        assert_eq!(config.sos.press_flash(), Duration::from_millis(200));
        assert_eq!(config.notifications.default_duration(), Duration::from_millis(4000));
        assert!(config.contacts.load_samples);
        assert!(!config.appearance.dark_mode);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_toml_and_env() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "guardian.toml",
                r#"
                [sos]
                countdown_secs = 3

                [appearance]
                dark_mode = true
                "#,
            )?;
            jail.set_env("GUARDIAN_NOTIFICATIONS__MAX_VISIBLE", "5");

            let config = GuardianConfig::load_from(Some(Path::new("guardian.toml")))
                .map_err(|e| e.to_string())?;
            assert_eq!(config.sos.countdown_secs, 3);
            assert_eq!(config.sos.tick_interval_ms, 1000);
            assert!(config.appearance.dark_mode);
            assert_eq!(config.notifications.max_visible, 5);
            Ok(())
        });
    }

    #[test]
    fn test_explicit_missing_file_is_invalid_config() {
        Jail::expect_with(|_jail| {
            let err = GuardianConfig::load_from(Some(Path::new("nope.toml"))).unwrap_err();
            assert_eq!(err.error_code(), "INVALID_CONFIG");
            assert!(err.to_string().contains("nope.toml"));
            Ok(())
        });
    }

    #[test]
    fn test_load_from_none_uses_defaults() {
        Jail::expect_with(|_jail| {
            let config = GuardianConfig::load_from(None).map_err(|e| e.to_string())?;
            assert_eq!(config, GuardianConfig::default());
            Ok(())
        });
    }

    // dirs resolves the config dir from HOME / XDG_CONFIG_HOME on unix
    #[cfg(unix)]
    #[test]
    fn test_load_without_platform_file_uses_defaults() {
        Jail::expect_with(|jail| {
            let home = jail.directory().display().to_string();
            jail.set_env("HOME", &home);
            jail.set_env("XDG_CONFIG_HOME", &home);

            let config = GuardianConfig::load().map_err(|e| e.to_string())?;
            assert_eq!(config, GuardianConfig::default());
            Ok(())
        });
    }

    #[test]
    fn test_validation_rejects_zero_countdown() {
        Jail::expect_with(|jail| {
            jail.set_env("GUARDIAN_SOS__COUNTDOWN_SECS", "0");
            let err = GuardianConfig::load_from(None).unwrap_err();
            assert_eq!(err.error_code(), "INVALID_CONFIG");
            assert!(err.to_string().contains("countdown_secs"));
            Ok(())
        });
    }

    #[test]
    fn test_bad_value_is_invalid_config() {
        Jail::expect_with(|jail| {
            jail.set_env("GUARDIAN_SOS__TICK_INTERVAL_MS", "soon");
            let err = GuardianConfig::load_from(None).unwrap_err();
            assert!(matches!(err, GuardianError::InvalidConfig { .. }));
            Ok(())
        });
    }
}
