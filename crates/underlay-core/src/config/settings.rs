//! Configuration loading with built-in fallbacks.

use crate::Result;
use crate::menu::MenuRecord;
use serde::Deserialize;
use std::path::Path;
use tracing::warn;

/// Main configuration
///
/// Merging is a shallow overwrite of recognized top-level keys: a user file
/// that provides `menu_items` replaces the built-in list wholesale, a file
/// that omits it keeps the built-in list. Unknown keys are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_menu_items")]
    pub menu_items: Vec<MenuRecord>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            menu_items: default_menu_items(),
        }
    }
}

impl Config {
    /// Load configuration from `path`.
    ///
    /// A missing file silently yields the defaults. An unreadable or
    /// malformed file yields the defaults plus one diagnostic; loading is
    /// never fatal.
    #[must_use]
    pub fn load(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match Self::read(path) {
            Ok(config) => config,
            Err(e) => {
                warn!(
                    "Could not load config from {}: {e}; using default configuration",
                    path.display()
                );
                Self::default()
            }
        }
    }

    fn read(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }
}

/// The built-in menu records: terminal, file manager, launcher and a
/// settings submenu, in the order they appear on screen.
#[must_use]
pub fn default_menu_items() -> Vec<MenuRecord> {
    vec![
        MenuRecord {
            label: Some("Open Terminal".to_string()),
            command: Some("kitty".to_string()),
            icon: Some("utilities-terminal".to_string()),
            ..MenuRecord::default()
        },
        MenuRecord {
            label: Some("File Manager".to_string()),
            command: Some("thunar".to_string()),
            icon: Some("system-file-manager".to_string()),
            ..MenuRecord::default()
        },
        MenuRecord {
            separator: true,
            ..MenuRecord::default()
        },
        MenuRecord {
            label: Some("App Launcher".to_string()),
            command: Some("wofi --show drun".to_string()),
            icon: Some("view-grid-symbolic".to_string()),
            ..MenuRecord::default()
        },
        MenuRecord {
            separator: true,
            ..MenuRecord::default()
        },
        MenuRecord {
            label: Some("Settings".to_string()),
            submenu: Some(vec![
                MenuRecord {
                    label: Some("Wayfire Config".to_string()),
                    command: Some("wcm".to_string()),
                    icon: Some("preferences-system".to_string()),
                    ..MenuRecord::default()
                },
                MenuRecord {
                    label: Some("Display Settings".to_string()),
                    command: Some("wlr-randr-gui || wdisplays".to_string()),
                    icon: Some("preferences-desktop-display".to_string()),
                    ..MenuRecord::default()
                },
            ]),
            ..MenuRecord::default()
        },
    ]
}
