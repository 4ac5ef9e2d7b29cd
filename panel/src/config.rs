//! Configuration loading and validation for the notification panel.
//!
//! This module parses a TOML configuration into a [`PanelConfig`],
//! applies defaults via serde, and performs strict validation with
//! field-path error messages. Configuration is static: read once at
//! plugin load, never re-read.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{PanelError, Result};

/// Default panel width in pixels.
pub const DEFAULT_PANEL_WIDTH: u32 = 400;

/// Default panel height in pixels.
pub const DEFAULT_PANEL_HEIGHT: u32 = 700;

/// Static panel configuration.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct PanelConfig {
    /// Fixed panel width in pixels
    pub panel_width: u32,
    /// Fixed panel height in pixels
    pub panel_height: u32,
    /// Whether to mirror the newest notification into the OS tray
    pub use_system_tray: bool,
    /// Tray icon override; if absent the host application's icon is used
    pub tray_icon_path: Option<PathBuf>,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            panel_width: DEFAULT_PANEL_WIDTH,
            panel_height: DEFAULT_PANEL_HEIGHT,
            use_system_tray: true,
            tray_icon_path: None,
        }
    }
}

impl PanelConfig {
    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`PanelError::Configuration`] with a field-path message
    /// for any rejected value.
    pub fn validate(&self) -> Result<()> {
        if self.panel_width == 0 {
            return Err(PanelError::Configuration(
                "panelWidth: must be > 0".to_string(),
            ));
        }
        if self.panel_height == 0 {
            return Err(PanelError::Configuration(
                "panelHeight: must be > 0".to_string(),
            ));
        }
        if let Some(path) = &self.tray_icon_path {
            if path.as_os_str().is_empty() {
                return Err(PanelError::Configuration(
                    "trayIconPath: cannot be empty".to_string(),
                ));
            }
        }
        Ok(())
    }

    /// Loads and validates a panel configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns [`PanelError::Configuration`] on parse or validation
    /// failure.
    pub fn from_toml_str(input: &str) -> Result<Self> {
        let config: Self = toml::from_str(input)
            .map_err(|e| PanelError::Configuration(format!("TOML parse error: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads and validates a panel configuration from a TOML file path.
    ///
    /// # Errors
    ///
    /// Returns [`PanelError::Configuration`] if the file cannot be read,
    /// parsed, or validated.
    pub fn from_toml_path(path: impl AsRef<Path>) -> Result<Self> {
        let data = fs::read_to_string(&path).map_err(|e| {
            PanelError::Configuration(format!(
                "Failed to read config {:?}: {}",
                path.as_ref(),
                e
            ))
        })?;
        Self::from_toml_str(&data)
    }
}
