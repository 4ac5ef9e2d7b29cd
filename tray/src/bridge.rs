//! Bridge between the notification store and an OS tray backend.

use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use tracing::{debug, warn};
use uuid::Uuid;

use noticeboard_panel::{
    ModalPresenter, Notification, NotificationStore, ObserverId, PresentAction, Severity,
};

use crate::error::Result;

/// Trait for tray backends, allowing for mocking in tests.
pub trait TrayBackend {
    /// Replaces the tray icon; `None` restores the host application icon.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend rejects the icon.
    fn set_icon(&mut self, icon: Option<&Path>) -> Result<()>;

    /// Shows a transient tray message with a severity-derived icon class.
    ///
    /// # Errors
    ///
    /// Returns an error if the message cannot be delivered.
    fn show_message(&mut self, title: &str, body: &str, severity: Severity) -> Result<()>;
}

/// Mirrors the newest notification into the OS tray.
///
/// Stateless apart from a back-reference to the most recently mirrored
/// notification (a clone; the store keeps ownership of the live record),
/// kept only so an activated tray message can reopen its detail view.
#[derive(Debug)]
pub struct TrayBridge<B: TrayBackend> {
    backend: B,
    last_shown: Option<Notification>,
}

impl<B: TrayBackend> TrayBridge<B> {
    /// Creates a bridge over the given backend, applying the configured
    /// icon override.
    ///
    /// # Errors
    ///
    /// Propagates the backend's icon failure.
    pub fn new(backend: B, icon: Option<PathBuf>) -> Result<Self> {
        let mut backend = backend;
        backend.set_icon(icon.as_deref())?;
        Ok(Self {
            backend,
            last_shown: None,
        })
    }

    /// Mirrors a notification: records it as last-shown, then issues the
    /// tray message with truncated body.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot deliver the message. The
    /// notification is recorded as last-shown either way.
    pub fn mirror(&mut self, notification: &Notification) -> Result<()> {
        debug!(id = %notification.id, "mirroring notification to tray");
        self.last_shown = Some(notification.clone());
        self.backend.show_message(
            &notification.title,
            &notification.truncated_message(),
            notification.severity,
        )
    }

    /// The most recently mirrored notification, if any.
    #[must_use]
    pub fn last_shown(&self) -> Option<&Notification> {
        self.last_shown.as_ref()
    }

    /// Handles the tray message being activated by the user.
    ///
    /// Presents the last-shown notification and returns its id together
    /// with the chosen action, so the caller can apply a
    /// [`PresentAction::Dismiss`] to the store. A no-op returning `None`
    /// when nothing has been mirrored yet.
    pub fn activated(
        &mut self,
        presenter: &mut dyn ModalPresenter,
    ) -> Option<(Uuid, PresentAction)> {
        let notification = self.last_shown.as_ref()?;
        Some((notification.id, presenter.present(notification)))
    }

    /// Subscribes a shared bridge to a store.
    ///
    /// Every notified message is mirrored; delivery failures are logged
    /// and swallowed so `notify` stays total for the poster.
    pub fn subscribe(bridge: &Rc<RefCell<Self>>, store: &mut NotificationStore) -> ObserverId
    where
        B: 'static,
    {
        let bridge = Rc::clone(bridge);
        store.subscribe(move |notification| {
            if let Err(e) = bridge.borrow_mut().mirror(notification) {
                warn!("Failed to mirror notification to tray: {}", e);
            }
        })
    }
}
