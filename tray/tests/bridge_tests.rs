#![allow(
    missing_docs,
    clippy::expect_used,
    clippy::unwrap_used,
    unused_crate_dependencies
)]

use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use std::sync::{Arc, Mutex};

use noticeboard_panel::{
    Notification, Panel, PanelConfig, PresentAction, RecordingHost, Severity,
    MESSAGE_DISPLAY_LIMIT, TRUNCATION_MARKER,
};
use noticeboard_tray::{TrayBackend, TrayBridge, TrayError};

#[derive(Debug, Clone, Default)]
struct MockTray {
    messages: Arc<Mutex<Vec<(String, String, Severity)>>>,
    icons: Arc<Mutex<Vec<Option<PathBuf>>>>,
    fail_send: bool,
}

impl MockTray {
    fn new() -> Self {
        Self::default()
    }

    fn failing() -> Self {
        Self {
            fail_send: true,
            ..Self::default()
        }
    }

    fn messages(&self) -> Vec<(String, String, Severity)> {
        self.messages
            .lock()
            .map_or_else(|_| Vec::new(), |messages| messages.clone())
    }

    fn icons(&self) -> Vec<Option<PathBuf>> {
        self.icons
            .lock()
            .map_or_else(|_| Vec::new(), |icons| icons.clone())
    }
}

impl TrayBackend for MockTray {
    fn set_icon(&mut self, icon: Option<&Path>) -> noticeboard_tray::Result<()> {
        self.icons
            .lock()
            .map_err(|_| TrayError::Send("icon lock poisoned".to_string()))?
            .push(icon.map(Path::to_path_buf));
        Ok(())
    }

    fn show_message(
        &mut self,
        title: &str,
        body: &str,
        severity: Severity,
    ) -> noticeboard_tray::Result<()> {
        if self.fail_send {
            return Err(TrayError::Send("no tray daemon".to_string()));
        }
        self.messages
            .lock()
            .map_err(|_| TrayError::Send("message lock poisoned".to_string()))?
            .push((title.to_string(), body.to_string(), severity));
        Ok(())
    }
}

fn mk(title: &str, message: &str, severity: Severity) -> Notification {
    Notification::new(title, message, severity).expect("notification")
}

#[test]
fn test_construction_applies_icon_override() {
    let mock = MockTray::new();
    let icon = PathBuf::from("/opt/studio/icons/panel.png");
    let _bridge = TrayBridge::new(mock.clone(), Some(icon.clone())).expect("bridge");

    assert_eq!(mock.icons(), vec![Some(icon)]);
}

#[test]
fn test_construction_without_override_uses_default_icon() {
    let mock = MockTray::new();
    let _bridge = TrayBridge::new(mock.clone(), None).expect("bridge");

    assert_eq!(mock.icons(), vec![None]);
}

#[test]
fn test_mirror_sends_exactly_once() {
    let mock = MockTray::new();
    let mut bridge = TrayBridge::new(mock.clone(), None).expect("bridge");

    let n = mk("Render failed", "Shot 020 aborted.", Severity::Critical);
    bridge.mirror(&n).expect("mirror");

    let messages = mock.messages();
    assert_eq!(messages.len(), 1);
    assert_eq!(
        messages[0],
        (
            "Render failed".to_string(),
            "Shot 020 aborted.".to_string(),
            Severity::Critical
        )
    );
    assert_eq!(bridge.last_shown().map(|n| n.id), Some(n.id));
}

#[test]
fn test_mirror_truncates_body() {
    let mock = MockTray::new();
    let mut bridge = TrayBridge::new(mock.clone(), None).expect("bridge");

    let n = mk("t", &"x".repeat(400), Severity::Warning);
    bridge.mirror(&n).expect("mirror");

    let body = &mock.messages()[0].1;
    assert_eq!(body.chars().count(), MESSAGE_DISPLAY_LIMIT);
    assert!(body.ends_with(TRUNCATION_MARKER));
}

#[test]
fn test_activation_without_history_is_noop() {
    let mock = MockTray::new();
    let mut bridge = TrayBridge::new(mock, None).expect("bridge");

    let mut host = RecordingHost::new();
    assert!(bridge.activated(&mut host).is_none());
    assert_eq!(host.call_count(), 0);
}

#[test]
fn test_activation_reopens_last_shown() {
    let mock = MockTray::new();
    let mut bridge = TrayBridge::new(mock, None).expect("bridge");

    let older = mk("older", "m", Severity::Information);
    let newer = mk("newer", "m", Severity::Warning);
    bridge.mirror(&older).expect("mirror");
    bridge.mirror(&newer).expect("mirror");

    let mut host = RecordingHost::new().with_present_action(PresentAction::Dismiss);
    let (id, action) = bridge.activated(&mut host).expect("activation");

    assert_eq!(id, newer.id);
    assert_eq!(action, PresentAction::Dismiss);
}

#[test]
fn test_tray_click_dismiss_flow() {
    let mut panel = Panel::new(PanelConfig::default());
    let bridge = Rc::new(RefCell::new(
        TrayBridge::new(MockTray::new(), None).expect("bridge"),
    ));
    TrayBridge::subscribe(&bridge, panel.store_mut());

    let id = panel.error("Render failed", "m", None).expect("error");

    // User clicks the tray message, then picks Dismiss in the dialog
    let mut host = RecordingHost::new().with_present_action(PresentAction::Dismiss);
    let (clicked, action) = bridge.borrow_mut().activated(&mut host).expect("activation");
    assert_eq!(clicked, id);
    if action == PresentAction::Dismiss {
        panel.store_mut().dismiss(clicked);
    }

    assert!(panel.store().is_empty());
}

#[test]
fn test_send_failure_does_not_break_notify() {
    let mut panel = Panel::new(PanelConfig::default());
    let bridge = Rc::new(RefCell::new(
        TrayBridge::new(MockTray::failing(), None).expect("bridge"),
    ));
    TrayBridge::subscribe(&bridge, panel.store_mut());

    // Posting must stay total even when the tray backend is broken
    let id = panel.warning("t", "m", None).expect("warning");
    assert_eq!(panel.store().front().map(|n| n.id), Some(id));
    // The failed mirror is still recorded as last-shown
    assert_eq!(bridge.borrow().last_shown().map(|n| n.id), Some(id));
}

#[test]
fn test_end_to_end_critical_post_is_mirrored_once() {
    let mock = MockTray::new();
    let mut panel = Panel::new(PanelConfig::default());
    let bridge = Rc::new(RefCell::new(
        TrayBridge::new(mock.clone(), None).expect("bridge"),
    ));
    TrayBridge::subscribe(&bridge, panel.store_mut());

    panel
        .error("Blur Node Created", "msg", Some("details"))
        .expect("error");

    assert_eq!(panel.store().len(), 1);
    let head = panel.store().front().expect("head");
    assert_eq!(head.title, "Blur Node Created");
    assert_eq!(head.severity, Severity::Critical);
    assert_eq!(head.details.as_deref(), Some("details"));

    let messages = mock.messages();
    assert_eq!(messages.len(), 1);
    assert_eq!(
        messages[0],
        (
            "Blur Node Created".to_string(),
            "msg".to_string(),
            Severity::Critical
        )
    );
}
