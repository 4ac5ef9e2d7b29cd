//! Notification record types and display formatting.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{PanelError, Result};

/// Maximum number of characters a message may occupy in a panel row or
/// tray mirror before truncation kicks in.
pub const MESSAGE_DISPLAY_LIMIT: usize = 150;

/// Marker appended to messages cut down by [`Notification::truncated_message`].
pub const TRUNCATION_MARKER: &str = "[...]";

/// Urgency classification of a notification.
///
/// Severity controls iconography only; it carries no routing or filtering
/// semantics. Variants are ordered by increasing urgency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Informational message.
    #[default]
    Information,
    /// Something the user should look at.
    Warning,
    /// Something went wrong.
    Critical,
}

impl Severity {
    /// Parses a severity from a string.
    ///
    /// Accepts case-insensitive values:
    /// - `"warning"` → `Warning`
    /// - `"critical"`, `"error"` → `Critical`
    /// - Any other value → `Information` (default)
    #[must_use]
    #[allow(clippy::should_implement_trait)] // Infallible parsing, not FromStr
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "warning" => Self::Warning,
            "critical" | "error" => Self::Critical,
            _ => Self::Information,
        }
    }

    /// Returns the canonical lowercase form used in config and JSON.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Information => "information",
            Self::Warning => "warning",
            Self::Critical => "critical",
        }
    }

    /// Returns the display name shown to users.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Information => "Information",
            Self::Warning => "Warning",
            Self::Critical => "Critical",
        }
    }

    /// Returns the freedesktop icon class rendered for this severity in
    /// both the panel row and the tray mirror.
    #[must_use]
    pub const fn icon_name(&self) -> &'static str {
        match self {
            Self::Information => "dialog-information",
            Self::Warning => "dialog-warning",
            Self::Critical => "dialog-error",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Outcome of presenting a notification's detail dialog.
///
/// The two actions are modeled as explicit values rather than dialog
/// return codes so callers never have to interpret button roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresentAction {
    /// Remove the notification from its store.
    Dismiss,
    /// Leave the notification in place.
    Close,
}

/// One discrete message instance with severity, content, and timestamp.
///
/// `created_at` is assigned at construction and never changes. The record
/// is owned by exactly one [`NotificationStore`](crate::store::NotificationStore)
/// while active and dropped on dismissal; nothing is persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    /// Unique identifier for the notification.
    pub id: Uuid,
    /// Short title shown in the panel row.
    pub title: String,
    /// Full message body.
    pub message: String,
    /// Optional longer details shown only in the detail dialog.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    /// Urgency classification, drives iconography only.
    pub severity: Severity,
    /// When the notification was created.
    pub created_at: DateTime<Local>,
}

impl Notification {
    /// Creates a new notification with the given severity.
    ///
    /// # Errors
    ///
    /// Returns [`PanelError::InvalidArgument`] if `title` or `message` is
    /// empty or whitespace-only. This is the fail-fast boundary for host
    /// callback code; malformed calls surface at the call site.
    pub fn new(
        title: impl Into<String>,
        message: impl Into<String>,
        severity: Severity,
    ) -> Result<Self> {
        let title = title.into();
        let message = message.into();

        if title.trim().is_empty() {
            return Err(PanelError::InvalidArgument(
                "notification title must be a non-empty string".into(),
            ));
        }
        if message.trim().is_empty() {
            return Err(PanelError::InvalidArgument(
                "notification message must be a non-empty string".into(),
            ));
        }

        Ok(Self {
            id: Uuid::new_v4(),
            title,
            message,
            details: None,
            severity,
            created_at: Local::now(),
        })
    }

    /// Adds optional details.
    #[must_use]
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Returns the message cut down for single-row display.
    ///
    /// Messages of at most [`MESSAGE_DISPLAY_LIMIT`] characters come back
    /// unchanged; longer ones are cut so that content plus
    /// [`TRUNCATION_MARKER`] occupy exactly the limit. Counts characters,
    /// not bytes, so multi-byte content is never split.
    #[must_use]
    pub fn truncated_message(&self) -> String {
        if self.message.chars().count() <= MESSAGE_DISPLAY_LIMIT {
            return self.message.clone();
        }
        let keep = MESSAGE_DISPLAY_LIMIT - TRUNCATION_MARKER.chars().count();
        let mut truncated: String = self.message.chars().take(keep).collect();
        truncated.push_str(TRUNCATION_MARKER);
        truncated
    }

    /// Returns the local-time label rendered beside the title, e.g. `9:41`.
    #[must_use]
    pub fn time_display(&self) -> String {
        self.created_at.format("%-H:%M").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncation_boundary_is_exact() {
        let at_limit = Notification::new("t", "a".repeat(150), Severity::Information)
            .expect("notification");
        assert_eq!(at_limit.truncated_message(), at_limit.message);

        let over_limit = Notification::new("t", "a".repeat(151), Severity::Information)
            .expect("notification");
        let display = over_limit.truncated_message();
        assert_eq!(display.chars().count(), 150);
        assert!(display.ends_with(TRUNCATION_MARKER));
    }

    #[test]
    fn created_at_is_stable() {
        let n = Notification::new("t", "m", Severity::Warning).expect("notification");
        let stamp = n.created_at;
        let n = n.with_details("later");
        assert_eq!(n.created_at, stamp);
    }
}
