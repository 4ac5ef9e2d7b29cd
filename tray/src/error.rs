//! Tray error types with categorical error codes.

use thiserror::Error;

/// Tray-specific errors with categorical codes.
#[derive(Debug, Error)]
pub enum TrayError {
    /// No usable tray/notification service on this platform (TRAY001).
    ///
    /// Raised at construction; callers skip installing the bridge and the
    /// panel keeps working without tray mirroring.
    #[error("System tray unsupported: {0}")]
    Unsupported(String),

    /// A tray message could not be delivered (TRAY002)
    #[error("Tray send error: {0}")]
    Send(String),
}

impl TrayError {
    /// Returns the categorical error code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Unsupported(_) => "TRAY001",
            Self::Send(_) => "TRAY002",
        }
    }
}

impl From<TrayError> for noticeboard_panel::PanelError {
    fn from(err: TrayError) -> Self {
        Self::Host(err.to_string())
    }
}

/// Result type alias for tray operations.
pub type Result<T> = std::result::Result<T, TrayError>;
