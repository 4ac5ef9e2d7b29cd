//! Optional OS tray mirror for the noticeboard notification panel.
//!
//! The bridge observes a
//! [`NotificationStore`](noticeboard_panel::NotificationStore) and echoes
//! each new notification as a transient tray message; activating the
//! message reopens the notification's detail dialog. If the platform has
//! no notification service the bridge simply is not installed and the
//! panel runs without mirroring.
//!
//! # Example
//!
//! ```no_run
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! use noticeboard_panel::{Panel, PanelConfig};
//! use noticeboard_tray::{DesktopTray, TrayBridge};
//!
//! let mut panel = Panel::new(PanelConfig::default());
//!
//! match DesktopTray::new() {
//!     Ok(backend) => {
//!         let icon = panel.config().tray_icon_path.clone();
//!         let bridge = Rc::new(RefCell::new(TrayBridge::new(backend, icon)?));
//!         TrayBridge::subscribe(&bridge, panel.store_mut());
//!     }
//!     Err(e) => tracing::warn!("Tray mirroring disabled: {}", e),
//! }
//! # Ok::<(), noticeboard_tray::TrayError>(())
//! ```

#![allow(clippy::module_name_repetitions)]

pub mod bridge;
pub mod desktop;
pub mod error;

// Re-export main types for convenience
pub use bridge::{TrayBackend, TrayBridge};
pub use desktop::{is_available, DesktopTray};
pub use error::{Result, TrayError};
