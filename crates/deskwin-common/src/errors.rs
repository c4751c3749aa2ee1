use std::path::PathBuf;

use crate::types::WindowKey;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

/// Errors raised by the window manager and the dock.
///
/// None of these leave the window table modified.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WindowError {
    #[error("invalid window identity: {0}")]
    InvalidIdentity(WindowKey),

    #[error("window is not open: {0}")]
    NotOpen(WindowKey),

    #[error("unknown dock app: {0}")]
    UnknownApp(String),

    #[error("stacking counter exhausted")]
    StackExhausted,

    #[error("invalid window manager config: {0}")]
    InvalidConfig(String),
}

#[derive(Debug, thiserror::Error)]
pub enum DeskwinError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Window(#[from] WindowError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = ConfigError::FileNotFound(PathBuf::from("/tmp/missing.toml"));
        assert_eq!(err.to_string(), "config file not found: /tmp/missing.toml");

        let err = ConfigError::ParseError("unexpected token".into());
        assert_eq!(err.to_string(), "config parse error: unexpected token");

        let err = ConfigError::ValidationError("windows.seed must exceed floor".into());
        assert_eq!(
            err.to_string(),
            "config validation error: windows.seed must exceed floor"
        );
    }

    #[test]
    fn window_error_display() {
        let err = WindowError::InvalidIdentity(WindowKey::from("calculator"));
        assert_eq!(err.to_string(), "invalid window identity: calculator");

        let err = WindowError::NotOpen(WindowKey::from("terminal"));
        assert_eq!(err.to_string(), "window is not open: terminal");

        let err = WindowError::UnknownApp("trash".into());
        assert_eq!(err.to_string(), "unknown dock app: trash");

        let err = WindowError::StackExhausted;
        assert_eq!(err.to_string(), "stacking counter exhausted");
    }

    #[test]
    fn window_error_equality() {
        let a = WindowError::InvalidIdentity(WindowKey::from("x"));
        let b = WindowError::InvalidIdentity(WindowKey::from("x"));
        let c = WindowError::NotOpen(WindowKey::from("x"));
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn deskwin_error_from_config() {
        let config_err = ConfigError::ParseError("bad toml".into());
        let err: DeskwinError = config_err.into();
        assert!(matches!(err, DeskwinError::Config(_)));
        assert!(err.to_string().contains("bad toml"));
    }

    #[test]
    fn deskwin_error_from_window() {
        let err: DeskwinError = WindowError::NotOpen(WindowKey::from("finder")).into();
        assert!(matches!(err, DeskwinError::Window(_)));
        assert_eq!(err.to_string(), "window is not open: finder");
    }

    #[test]
    fn deskwin_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: DeskwinError = io_err.into();
        assert!(matches!(err, DeskwinError::Io(_)));
        assert!(err.to_string().contains("file missing"));
    }

    #[test]
    fn deskwin_error_other() {
        let err = DeskwinError::Other("something went wrong".into());
        assert_eq!(err.to_string(), "something went wrong");
    }
}
