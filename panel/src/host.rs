//! Host adapter interface and implementations.
//!
//! This module defines the seam between the panel core and the embedding
//! host application. The concrete GUI adapter (menu widgets, detail
//! dialogs, panel rows) lives outside this crate and implements these
//! traits; the core only hands over display data and receives explicit
//! results back.
//!
//! A [`RecordingHost`] implementation records calls for testing and
//! doubles as a do-nothing host.

use std::sync::Mutex;

use crate::error::Result;
use crate::notification::{Notification, PresentAction};

/// Blocking detail dialog for a single notification.
///
/// `present` suspends the calling control flow until the user picks an
/// action. This is a deliberate, local blocking wait on the UI thread,
/// not a concurrency hazard.
pub trait ModalPresenter {
    /// Shows the full title/message/details and returns the chosen action.
    fn present(&mut self, notification: &Notification) -> PresentAction;
}

/// Re-draws the visible panel list.
///
/// Adapters drive this off [`NotificationStore::revision`]: whenever the
/// counter moves, call `render` with a fresh
/// [`snapshot`](crate::store::NotificationStore::snapshot).
///
/// [`NotificationStore::revision`]: crate::store::NotificationStore::revision
pub trait PanelRenderer {
    /// Renders the given notifications, newest first.
    fn render(&mut self, notifications: &[Notification]);
}

/// Mounts the panel's interactive widget into a host menu.
pub trait MenuHost {
    /// Adds a menu entry with the given label.
    ///
    /// `menu` names the host menu location; `None` means the host's
    /// default location.
    ///
    /// # Errors
    ///
    /// Returns an error if the host rejects the mount.
    fn add_menu_entry(&mut self, menu: Option<&str>, label: &str) -> Result<()>;
}

/// Read-only access to the host's color preferences.
///
/// Used purely for cosmetic highlight rendering; a missing key never
/// affects core behavior.
pub trait ColorSource {
    /// Returns the 8-bit RGB value for a preference key, if the host
    /// knows it (e.g. `UIHighlightColor`).
    fn color(&self, key: &str) -> Option<(u8, u8, u8)>;
}

/// Log entry for recording host adapter calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostCall {
    /// A menu entry was mounted
    MenuEntry {
        /// Requested menu location, `None` for the host default
        menu: Option<String>,
        /// Entry label
        label: String,
    },
    /// The panel list was re-rendered
    Render {
        /// Number of notifications handed over
        count: usize,
    },
    /// A detail dialog was presented
    Present {
        /// Title of the presented notification
        title: String,
    },
}

/// A null host implementation that records calls for testing.
///
/// Performs no actual GUI work; `present` answers with a scripted
/// action (`Close` unless configured otherwise).
#[derive(Debug)]
pub struct RecordingHost {
    calls: Mutex<Vec<HostCall>>,
    present_action: PresentAction,
    highlight: Option<(u8, u8, u8)>,
}

impl Default for RecordingHost {
    fn default() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            present_action: PresentAction::Close,
            highlight: None,
        }
    }
}

impl RecordingHost {
    /// Creates a new `RecordingHost` answering `Close` to every dialog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Scripts the action returned by every presented dialog.
    #[must_use]
    pub fn with_present_action(mut self, action: PresentAction) -> Self {
        self.present_action = action;
        self
    }

    /// Sets the highlight color reported for any preference key.
    #[must_use]
    pub fn with_highlight(mut self, color: (u8, u8, u8)) -> Self {
        self.highlight = Some(color);
        self
    }

    /// Returns a copy of all recorded calls, in order.
    #[must_use]
    pub fn calls(&self) -> Vec<HostCall> {
        self.calls.lock().map_or_else(|_| Vec::new(), |calls| calls.clone())
    }

    /// Number of recorded calls.
    #[must_use]
    pub fn call_count(&self) -> usize {
        self.calls.lock().map_or(0, |calls| calls.len())
    }

    fn record(&self, call: HostCall) {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(call);
        }
    }
}

impl ModalPresenter for RecordingHost {
    fn present(&mut self, notification: &Notification) -> PresentAction {
        self.record(HostCall::Present {
            title: notification.title.clone(),
        });
        self.present_action
    }
}

impl PanelRenderer for RecordingHost {
    fn render(&mut self, notifications: &[Notification]) {
        self.record(HostCall::Render {
            count: notifications.len(),
        });
    }
}

impl MenuHost for RecordingHost {
    fn add_menu_entry(&mut self, menu: Option<&str>, label: &str) -> Result<()> {
        self.record(HostCall::MenuEntry {
            menu: menu.map(str::to_string),
            label: label.to_string(),
        });
        Ok(())
    }
}

impl ColorSource for RecordingHost {
    fn color(&self, _key: &str) -> Option<(u8, u8, u8)> {
        self.highlight
    }
}
