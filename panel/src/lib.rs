//! Host-agnostic core of a notification panel for DCC plugin integrations.
//!
//! This crate provides the data model and queue behind a docked
//! notification panel: severity-tagged messages posted by host callback
//! code, held newest-first in a store, and broadcast synchronously to
//! observers such as a tray mirror. All rendering is behind the adapter
//! traits in [`host`]; the concrete GUI toolkit never leaks in here.
//!
//! # Example
//!
//! ```
//! use noticeboard_panel::{Panel, PanelConfig, Severity};
//!
//! let mut panel = Panel::new(PanelConfig::default());
//!
//! panel.info("Render finished", "Shot 010 rendered without warnings.", None)?;
//! panel.error(
//!     "Render failed",
//!     "Shot 020 aborted on frame 1042.",
//!     Some("Missing input on Read3."),
//! )?;
//!
//! assert_eq!(panel.store().front().map(|n| n.severity), Some(Severity::Critical));
//! # Ok::<(), noticeboard_panel::PanelError>(())
//! ```

#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod error;
pub mod host;
pub mod notification;
pub mod panel;
pub mod store;

// Re-export main types for convenience
pub use config::PanelConfig;
pub use error::{PanelError, Result};
pub use host::{ColorSource, HostCall, MenuHost, ModalPresenter, PanelRenderer, RecordingHost};
pub use notification::{
    Notification, PresentAction, Severity, MESSAGE_DISPLAY_LIMIT, TRUNCATION_MARKER,
};
pub use panel::{Panel, MENU_LABEL};
pub use store::{NotificationStore, ObserverId};

/// Core utilities and helper functions
pub mod utils {
    use tracing::info;

    /// Initialize tracing for the embedding plugin
    ///
    /// # Errors
    ///
    /// Returns [`PanelError::Initialization`](crate::PanelError::Initialization)
    /// if a global subscriber is already installed.
    pub fn init_tracing(level: &str) -> crate::Result<()> {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

        fmt()
            .with_env_filter(filter)
            .try_init()
            .map_err(|e| crate::PanelError::Initialization(e.to_string()))?;

        info!("Tracing initialized with level: {}", level);
        Ok(())
    }
}
