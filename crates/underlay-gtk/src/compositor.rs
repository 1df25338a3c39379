//! Compositor detection for layer-shell capability checks.
//!
//! The surface cannot exist without wlr-layer-shell, so startup aborts when
//! the detected environment does not provide it.

use tracing::debug;

/// Type of compositor/desktop environment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CompositorType {
    /// Wayfire compositor
    Wayfire,
    /// Hyprland compositor
    Hyprland,
    /// Niri compositor
    Niri,
    /// Sway compositor
    Sway,
    /// GNOME (no layer-shell support)
    Gnome,
    /// X11 (no layer-shell support)
    X11,
    /// Unknown compositor (assumed layer-shell support on Wayland)
    Unknown,
}

impl CompositorType {
    pub(crate) fn supports_layer_shell(self) -> bool {
        matches!(
            self,
            Self::Wayfire | Self::Hyprland | Self::Niri | Self::Sway | Self::Unknown
        )
    }
}

/// Detected compositor environment
pub(crate) struct Compositor {
    compositor_type: CompositorType,
}

impl Compositor {
    /// Detect the compositor based on environment variables
    pub(crate) fn detect() -> Self {
        let compositor_type = Self::detect_type();
        debug!("Detected compositor: {:?}", compositor_type);

        Self { compositor_type }
    }

    fn detect_type() -> CompositorType {
        if std::env::var("DISPLAY").is_ok() && std::env::var("WAYLAND_DISPLAY").is_err() {
            debug!("Detected X11 display");
            return CompositorType::X11;
        }

        if std::env::var("WAYFIRE_CONFIG_FILE").is_ok()
            || std::env::var("XDG_CURRENT_DESKTOP")
                .map(|d| d.to_lowercase().contains("wayfire"))
                .unwrap_or(false)
        {
            debug!("Detected Wayfire via environment");
            return CompositorType::Wayfire;
        }

        if std::env::var("HYPRLAND_INSTANCE_SIGNATURE").is_ok() {
            debug!("Detected Hyprland via HYPRLAND_INSTANCE_SIGNATURE");
            return CompositorType::Hyprland;
        }

        if std::env::var("NIRI_SOCKET").is_ok() {
            debug!("Detected Niri via NIRI_SOCKET");
            return CompositorType::Niri;
        }

        if std::env::var("SWAYSOCK").is_ok() {
            debug!("Detected Sway via SWAYSOCK");
            return CompositorType::Sway;
        }

        if std::env::var("GNOME_DESKTOP_SESSION_ID").is_ok()
            || std::env::var("XDG_CURRENT_DESKTOP")
                .map(|d| d.to_lowercase().contains("gnome"))
                .unwrap_or(false)
        {
            debug!("Detected GNOME desktop");
            return CompositorType::Gnome;
        }

        if std::env::var("WAYLAND_DISPLAY").is_ok() {
            debug!("Detected generic Wayland display");
            return CompositorType::Unknown;
        }

        debug!("Could not detect compositor type");
        CompositorType::Unknown
    }

    /// Check if layer-shell is supported
    pub(crate) fn supports_layer_shell(&self) -> bool {
        self.compositor_type.supports_layer_shell()
    }
}
