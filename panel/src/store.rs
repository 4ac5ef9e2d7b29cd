//! Active-notification storage with synchronous observer broadcast.

use std::collections::VecDeque;

use tracing::debug;
use uuid::Uuid;

use crate::notification::Notification;

/// Callback invoked with every notification handed to [`NotificationStore::notify`].
///
/// Observers run synchronously on the UI thread; adapters that need shared
/// mutable state capture it behind `Rc<RefCell<…>>`.
pub type Observer = Box<dyn FnMut(&Notification)>;

/// Handle returned by [`NotificationStore::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(u64);

/// The ordered collection of currently active notifications.
///
/// Newest-first: the most recent notification is the head element and the
/// visible top of the panel. The store exclusively owns its records; a
/// dismissed notification is dropped. One instance lives for the whole
/// plugin session, mutated only from the host's UI thread.
#[derive(Default)]
pub struct NotificationStore {
    entries: VecDeque<Notification>,
    observers: Vec<(ObserverId, Observer)>,
    next_observer: u64,
    revision: u64,
}

impl std::fmt::Debug for NotificationStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NotificationStore")
            .field("entries", &self.entries.len())
            .field("observers", &self.observers.len())
            .field("revision", &self.revision)
            .finish()
    }
}

impl NotificationStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a notification at the head of the sequence and broadcasts
    /// it to every registered observer, in registration order, before
    /// returning. Total: duplicates are simply duplicate entries.
    ///
    /// Returns the id of the inserted notification.
    pub fn notify(&mut self, notification: Notification) -> Uuid {
        let id = notification.id;
        debug!(%id, severity = notification.severity.as_str(), "notification posted");

        self.entries.push_front(notification);
        self.revision += 1;

        // Broadcast strictly after head insertion.
        if let Some(newest) = self.entries.front() {
            for (_, observer) in &mut self.observers {
                observer(newest);
            }
        }
        id
    }

    /// Removes the notification with the given id, if present.
    ///
    /// Returns whether anything was removed; an absent id is a no-op,
    /// never an error.
    pub fn dismiss(&mut self, id: Uuid) -> bool {
        let Some(index) = self.entries.iter().position(|n| n.id == id) else {
            return false;
        };
        let _removed = self.entries.remove(index);
        self.revision += 1;
        debug!(%id, "notification dismissed");
        true
    }

    /// Removes every active notification. A no-op on an empty store.
    pub fn dismiss_all(&mut self) {
        if self.entries.is_empty() {
            return;
        }
        let count = self.entries.len();
        self.entries.clear();
        self.revision += 1;
        debug!(count, "dismissed all notifications");
    }

    /// Registers an observer invoked on every future [`notify`](Self::notify).
    pub fn subscribe(&mut self, observer: impl FnMut(&Notification) + 'static) -> ObserverId {
        let id = ObserverId(self.next_observer);
        self.next_observer += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Removes a previously registered observer. Returns whether the
    /// handle was still registered.
    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(observer_id, _)| *observer_id != id);
        self.observers.len() != before
    }

    /// Returns the notification with the given id, if still active.
    #[must_use]
    pub fn get(&self, id: Uuid) -> Option<&Notification> {
        self.entries.iter().find(|n| n.id == id)
    }

    /// Returns the newest notification, if any.
    #[must_use]
    pub fn front(&self) -> Option<&Notification> {
        self.entries.front()
    }

    /// Iterates active notifications, newest first.
    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.entries.iter()
    }

    /// Number of active notifications.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the store holds no active notifications.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Clones the current sequence, newest first, for handing to a
    /// rendering adapter.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Notification> {
        self.entries.iter().cloned().collect()
    }

    /// Monotonic change counter, bumped by every mutation of the sequence.
    ///
    /// Rendering adapters compare this against their last-seen value to
    /// decide when to re-draw the panel list.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }
}
