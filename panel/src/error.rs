//! Panel error types with categorical error codes.

use thiserror::Error;

/// Panel-specific errors with categorical codes.
#[derive(Debug, Error)]
pub enum PanelError {
    /// A constructor precondition was violated (PANEL001)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Configuration could not be loaded or validated (PANEL002)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Startup wiring failed (PANEL003)
    #[error("Initialization error: {0}")]
    Initialization(String),

    /// A host adapter operation failed (PANEL004)
    #[error("Host error: {0}")]
    Host(String),

    /// IO error (PANEL005)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl PanelError {
    /// Returns the categorical error code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::InvalidArgument(_) => "PANEL001",
            Self::Configuration(_) => "PANEL002",
            Self::Initialization(_) => "PANEL003",
            Self::Host(_) => "PANEL004",
            Self::Io(_) => "PANEL005",
        }
    }
}

/// Result type alias for panel operations.
pub type Result<T> = std::result::Result<T, PanelError>;
