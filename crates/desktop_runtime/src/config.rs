//! Desktop shell configuration embedded at build time from `desktop.toml`.
//!
//! `build.rs` validates the TOML file and embeds it as JSON; [`desktop_config`] parses that payload
//! once and falls back to [`DesktopConfig::default`] when it cannot be used.

use std::sync::OnceLock;

use leptos::logging;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::WindowId;

mod generated {
    include!(concat!(env!("OUT_DIR"), "/desktop_config_generated.rs"));
}

/// Supported `schema_version` of `desktop.toml`.
pub const DESKTOP_CONFIG_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Errors raised while loading the embedded configuration payload.
pub enum ConfigError {
    /// The payload is not valid JSON for [`DesktopConfig`].
    #[error("desktop config parse failed: {0}")]
    Parse(String),
    /// The payload parsed but violates a config invariant.
    #[error("desktop config invalid: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskbarConfig {
    pub height_px: i32,
    pub clock_refresh_ms: u32,
}

impl Default for TaskbarConfig {
    fn default() -> Self {
        Self {
            height_px: 40,
            clock_refresh_ms: 1000,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EffectsConfig {
    /// Length of the minimize fade; `0` hides minimized windows immediately.
    pub minimize_fade_ms: u32,
    pub toast_lifetime_ms: u32,
}

impl Default for EffectsConfig {
    fn default() -> Self {
        Self {
            minimize_fade_ms: 180,
            toast_lifetime_ms: 2800,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusConfig {
    pub visitor_seed: u64,
    pub visitor_interval_ms: u32,
}

impl Default for StatusConfig {
    fn default() -> Self {
        Self {
            visitor_seed: 1337,
            visitor_interval_ms: 5000,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileConfig {
    pub owner: String,
    pub email: String,
    pub resume_path: String,
    pub about: String,
    pub skills: Vec<String>,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            owner: "Visitor".to_string(),
            email: "hello@retro-portfolio.dev".to_string(),
            resume_path: "resume.pdf".to_string(),
            about: "Portfolio owner.".to_string(),
            skills: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabConfig {
    pub title: String,
    #[serde(default)]
    pub lines: Vec<String>,
    /// Renders the terminal app instead of static lines.
    #[serde(default)]
    pub terminal: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowConfig {
    pub id: u64,
    pub title: String,
    pub icon: String,
    #[serde(default)]
    pub tabs: Vec<TabConfig>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconConfig {
    pub label: String,
    pub icon: String,
    pub opens: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
/// What a start-menu entry does when activated.
pub enum StartMenuAction {
    /// Raise an "Opening: <label>" toast.
    Announce,
    /// Open (restore) a managed window.
    Open {
        /// Target window id.
        window: u64,
    },
    /// Show the shutdown dialog.
    Shutdown,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StartMenuEntryConfig {
    pub label: String,
    pub icon: String,
    pub action: StartMenuAction,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Parsed `desktop.toml`.
pub struct DesktopConfig {
    pub schema_version: u32,
    pub taskbar: TaskbarConfig,
    pub effects: EffectsConfig,
    pub status: StatusConfig,
    pub profile: ProfileConfig,
    #[serde(default)]
    pub windows: Vec<WindowConfig>,
    #[serde(default)]
    pub icons: Vec<IconConfig>,
    #[serde(default)]
    pub start_menu: Vec<StartMenuEntryConfig>,
}

impl Default for DesktopConfig {
    fn default() -> Self {
        Self {
            schema_version: DESKTOP_CONFIG_SCHEMA_VERSION,
            taskbar: TaskbarConfig::default(),
            effects: EffectsConfig::default(),
            status: StatusConfig::default(),
            profile: ProfileConfig::default(),
            windows: vec![WindowConfig {
                id: 1,
                title: "My Portfolio".to_string(),
                icon: "computer".to_string(),
                tabs: Vec::new(),
            }],
            icons: vec![IconConfig {
                label: "My Portfolio".to_string(),
                icon: "computer".to_string(),
                opens: 1,
            }],
            start_menu: vec![StartMenuEntryConfig {
                label: "Shut Down...".to_string(),
                icon: "power".to_string(),
                action: StartMenuAction::Shutdown,
            }],
        }
    }
}

impl DesktopConfig {
    /// Looks up the configuration of a managed window.
    pub fn window(&self, window_id: WindowId) -> Option<&WindowConfig> {
        self.windows.iter().find(|w| w.id == window_id.0)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.schema_version != DESKTOP_CONFIG_SCHEMA_VERSION {
            return Err(ConfigError::Invalid(format!(
                "schema version {} is not supported",
                self.schema_version
            )));
        }
        if self.taskbar.height_px <= 0 {
            return Err(ConfigError::Invalid(
                "taskbar height must be positive".to_string(),
            ));
        }
        if let Some(icon) = self
            .icons
            .iter()
            .find(|icon| self.window(WindowId(icon.opens)).is_none())
        {
            return Err(ConfigError::Invalid(format!(
                "icon `{}` opens unknown window {}",
                icon.label, icon.opens
            )));
        }
        Ok(())
    }
}

/// Parses and validates a JSON config payload.
///
/// # Errors
///
/// Returns [`ConfigError::Parse`] for malformed JSON and [`ConfigError::Invalid`] when the payload
/// violates a config invariant.
pub fn parse_config(raw: &str) -> Result<DesktopConfig, ConfigError> {
    let config: DesktopConfig =
        serde_json::from_str(raw).map_err(|err| ConfigError::Parse(err.to_string()))?;
    config.validate()?;
    Ok(config)
}

/// Returns the process-wide desktop configuration.
pub fn desktop_config() -> &'static DesktopConfig {
    static CONFIG: OnceLock<DesktopConfig> = OnceLock::new();
    CONFIG.get_or_init(|| match parse_config(generated::DESKTOP_CONFIG_JSON) {
        Ok(config) => config,
        Err(err) => {
            logging::warn!("{err}; using built-in defaults");
            DesktopConfig::default()
        }
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn embedded_config_parses_and_references_known_windows() {
        let config = parse_config(generated::DESKTOP_CONFIG_JSON).expect("embedded config");

        assert_eq!(config.schema_version, DESKTOP_CONFIG_SCHEMA_VERSION);
        assert!(config.taskbar.height_px > 0);
        for icon in &config.icons {
            assert!(config.window(WindowId(icon.opens)).is_some());
        }
    }

    #[test]
    fn malformed_payload_is_a_parse_error() {
        let err = parse_config("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn icon_pointing_at_missing_window_is_rejected() {
        let mut config = DesktopConfig::default();
        config.icons[0].opens = 99;
        let raw = serde_json::to_string(&config).unwrap();

        assert_eq!(
            parse_config(&raw),
            Err(ConfigError::Invalid(
                "icon `My Portfolio` opens unknown window 99".to_string()
            ))
        );
    }

    #[test]
    fn start_menu_actions_use_tagged_representation() {
        let action: StartMenuAction =
            serde_json::from_str(r#"{ "kind": "open", "window": 1 }"#).unwrap();
        assert_eq!(action, StartMenuAction::Open { window: 1 });
    }
}
