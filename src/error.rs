//! Error types for kickpulse.
//!
//! The crate-level [`PulseError`] covers startup and I/O failures. The
//! per-stage monitor errors (`ProbeError`, `SendError`) live next to the
//! prober and sender; they never escape a monitor cycle.

use thiserror::Error;

/// The primary error type for kickpulse operations.
#[derive(Error, Debug)]
pub enum PulseError {
    /// Configuration errors (missing fields, invalid wait times, bad
    /// credential scheme). Fatal: raised once at startup, before any
    /// monitor is spawned.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Standard I/O errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// HTTP client construction/request errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

/// A specialized `Result` type for kickpulse operations.
pub type Result<T> = std::result::Result<T, PulseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = PulseError::Config("channels must not be empty".to_string());
        assert_eq!(
            err.to_string(),
            "Configuration error: channels must not be empty"
        );
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: PulseError = io_err.into();
        assert!(matches!(err, PulseError::Io(_)));
    }

    #[test]
    fn test_error_from_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{bad").unwrap_err();
        let err: PulseError = json_err.into();
        assert!(matches!(err, PulseError::Json(_)));
    }

    #[test]
    fn test_result_type() {
        fn returns_result() -> Result<u64> {
            Ok(42)
        }
        assert_eq!(returns_result().unwrap(), 42);
    }
}
