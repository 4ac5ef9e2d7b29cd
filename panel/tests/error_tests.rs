#![allow(
    missing_docs,
    clippy::expect_used,
    clippy::unwrap_used,
    unused_crate_dependencies
)]

use noticeboard_panel::PanelError;

#[test]
fn test_error_codes() {
    assert_eq!(PanelError::InvalidArgument("test".into()).code(), "PANEL001");
    assert_eq!(PanelError::Configuration("test".into()).code(), "PANEL002");
    assert_eq!(PanelError::Initialization("test".into()).code(), "PANEL003");
    assert_eq!(PanelError::Host("test".into()).code(), "PANEL004");
    assert_eq!(
        PanelError::Io(std::io::Error::other("test")).code(),
        "PANEL005"
    );
}

#[test]
fn test_error_display() {
    let err = PanelError::InvalidArgument("title must be a non-empty string".into());
    assert!(err.to_string().contains("Invalid argument"));
    assert!(err.to_string().contains("non-empty string"));

    let err = PanelError::Configuration("panelWidth: must be > 0".into());
    assert!(err.to_string().contains("Configuration"));
    assert!(err.to_string().contains("panelWidth"));

    let err = PanelError::Host("menu unavailable".into());
    assert!(err.to_string().contains("Host"));
    assert!(err.to_string().contains("menu unavailable"));
}

#[test]
fn test_error_from_io() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "test file");
    let err = PanelError::from(io_err);

    assert!(matches!(err, PanelError::Io(_)));
    assert_eq!(err.code(), "PANEL005");
}
