//! Plugin-facing facade over the notification store.
//!
//! A [`Panel`] is the explicit context object constructed once at plugin
//! initialization and handed to whatever needs it: host callback code
//! posts through the three severity entry points, the GUI adapter reads
//! the store and drives the detail dialog, the tray bridge subscribes to
//! the store. There is deliberately no global instance.

use tracing::info;
use uuid::Uuid;

use crate::config::PanelConfig;
use crate::error::Result;
use crate::host::{MenuHost, ModalPresenter};
use crate::notification::{Notification, PresentAction, Severity};
use crate::store::NotificationStore;

/// Label of the menu entry mounted by [`Panel::install`].
pub const MENU_LABEL: &str = "Notifications";

/// The notification panel context: one store plus its static config.
///
/// Lives for the whole host session; mutated only from the UI thread.
#[derive(Debug, Default)]
pub struct Panel {
    config: PanelConfig,
    store: NotificationStore,
}

impl Panel {
    /// Creates a panel with the given configuration.
    #[must_use]
    pub fn new(config: PanelConfig) -> Self {
        info!(
            width = config.panel_width,
            height = config.panel_height,
            tray = config.use_system_tray,
            "notification panel created"
        );
        Self {
            config,
            store: NotificationStore::new(),
        }
    }

    /// Posts an information-level notification.
    ///
    /// # Errors
    ///
    /// Returns [`PanelError::InvalidArgument`](crate::PanelError::InvalidArgument)
    /// if `title` or `message` is empty.
    pub fn info(&mut self, title: &str, message: &str, details: Option<&str>) -> Result<Uuid> {
        self.post(Severity::Information, title, message, details)
    }

    /// Posts a warning-level notification.
    ///
    /// # Errors
    ///
    /// Returns [`PanelError::InvalidArgument`](crate::PanelError::InvalidArgument)
    /// if `title` or `message` is empty.
    pub fn warning(&mut self, title: &str, message: &str, details: Option<&str>) -> Result<Uuid> {
        self.post(Severity::Warning, title, message, details)
    }

    /// Posts a critical-level notification.
    ///
    /// # Errors
    ///
    /// Returns [`PanelError::InvalidArgument`](crate::PanelError::InvalidArgument)
    /// if `title` or `message` is empty.
    pub fn error(&mut self, title: &str, message: &str, details: Option<&str>) -> Result<Uuid> {
        self.post(Severity::Critical, title, message, details)
    }

    fn post(
        &mut self,
        severity: Severity,
        title: &str,
        message: &str,
        details: Option<&str>,
    ) -> Result<Uuid> {
        let mut notification = Notification::new(title, message, severity)?;
        if let Some(details) = details {
            notification = notification.with_details(details);
        }
        Ok(self.store.notify(notification))
    }

    /// Mounts the panel's menu entry into the named host menu location,
    /// or the host's default location when `menu` is `None`.
    ///
    /// # Errors
    ///
    /// Propagates the host's mount failure.
    pub fn install(&self, host: &mut dyn MenuHost, menu: Option<&str>) -> Result<()> {
        host.add_menu_entry(menu, MENU_LABEL)
    }

    /// Runs the blocking detail dialog for an active notification.
    ///
    /// A [`PresentAction::Dismiss`] answer removes the notification from
    /// the store; [`PresentAction::Close`] leaves it in place. Returns
    /// `None` if the id is no longer active.
    pub fn present(
        &mut self,
        id: Uuid,
        presenter: &mut dyn ModalPresenter,
    ) -> Option<PresentAction> {
        let action = presenter.present(self.store.get(id)?);
        if action == PresentAction::Dismiss {
            self.store.dismiss(id);
        }
        Some(action)
    }

    /// Read access to the notification store.
    #[must_use]
    pub fn store(&self) -> &NotificationStore {
        &self.store
    }

    /// Mutable access to the notification store, for subscriptions and
    /// user-driven dismissal.
    pub fn store_mut(&mut self) -> &mut NotificationStore {
        &mut self.store
    }

    /// The static configuration this panel was created with.
    #[must_use]
    pub fn config(&self) -> &PanelConfig {
        &self.config
    }
}
