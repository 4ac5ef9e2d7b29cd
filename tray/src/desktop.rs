//! Desktop tray backend using notify-rust.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use noticeboard_panel::Severity;

use crate::bridge::TrayBackend;
use crate::error::{Result, TrayError};

/// Check if tray messages are available on this system.
#[must_use]
#[allow(clippy::missing_const_for_fn)] // Not const on Linux (runs command)
pub fn is_available() -> bool {
    #[cfg(target_os = "macos")]
    {
        true // macOS always has notification support
    }

    #[cfg(target_os = "linux")]
    {
        // Check for notification daemon
        std::process::Command::new("notify-send")
            .arg("--version")
            .output()
            .is_ok()
    }

    #[cfg(target_os = "windows")]
    {
        true // Windows 10+ has notification support
    }

    #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
    {
        false
    }
}

/// Tray backend delivering messages through the desktop notification
/// service.
#[derive(Debug, Default)]
pub struct DesktopTray {
    icon: Option<PathBuf>,
}

impl DesktopTray {
    /// Creates the desktop backend.
    ///
    /// # Errors
    ///
    /// Returns [`TrayError::Unsupported`] when the platform has no usable
    /// notification service; callers then run without a tray bridge.
    pub fn new() -> Result<Self> {
        if !is_available() {
            return Err(TrayError::Unsupported(
                "no notification service detected on this platform".into(),
            ));
        }
        Ok(Self { icon: None })
    }
}

impl TrayBackend for DesktopTray {
    fn set_icon(&mut self, icon: Option<&Path>) -> Result<()> {
        debug!(?icon, "tray icon updated");
        self.icon = icon.map(Path::to_path_buf);
        Ok(())
    }

    fn show_message(&mut self, title: &str, body: &str, severity: Severity) -> Result<()> {
        use notify_rust::Notification;

        debug!("Sending tray message: {}", title);

        let icon = self.icon.as_ref().map_or_else(
            || severity.icon_name().to_string(),
            |path| path.to_string_lossy().into_owned(),
        );

        Notification::new()
            .appname("Noticeboard")
            .summary(title)
            .body(body)
            .icon(&icon)
            .timeout(notify_rust::Timeout::Milliseconds(5000))
            .show()
            .map_err(|e| {
                warn!("Failed to send tray message: {}", e);
                TrayError::Send(e.to_string())
            })?;

        Ok(())
    }
}
