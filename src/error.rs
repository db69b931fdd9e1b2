//! Error types for reqparser
//!
//! This module defines the error hierarchy for the whole crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.

use axum::http::StatusCode;
use thiserror::Error;

/// The main error type for reqparser
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Input Errors
    // ============================================================================
    #[error("Failed to decode request body: {message}")]
    Decode { message: String },

    #[error("Unsupported format type: {target}. Valid formats are: go, rust")]
    UnsupportedTarget { target: String },

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    // ============================================================================
    // I/O Errors
    // ============================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ============================================================================
    // Generic Errors
    // ============================================================================
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a decode error
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Create an unsupported target error
    pub fn unsupported_target(target: impl Into<String>) -> Self {
        Self::UnsupportedTarget {
            target: target.into(),
        }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Whether the error was caused by the client's input rather than the server
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Error::Decode { .. } | Error::UnsupportedTarget { .. } | Error::JsonParse(_)
        )
    }

    /// HTTP status a request handler should answer with
    pub fn status_code(&self) -> StatusCode {
        if self.is_client_error() {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

/// Result type alias for reqparser
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, message: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, message: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", message.into(), inner))
        })
    }

    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", f(), inner))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::decode("EOF while parsing a value at line 1 column 0");
        assert_eq!(
            err.to_string(),
            "Failed to decode request body: EOF while parsing a value at line 1 column 0"
        );

        let err = Error::unsupported_target("java");
        assert_eq!(
            err.to_string(),
            "Unsupported format type: java. Valid formats are: go, rust"
        );

        let err = Error::config("max_depth must be greater than zero");
        assert_eq!(
            err.to_string(),
            "Configuration error: max_depth must be greater than zero"
        );
    }

    #[test]
    fn test_status_code() {
        assert_eq!(Error::decode("bad").status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            Error::unsupported_target("xml").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            Error::config("bind").status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            Error::Other("boom".to_string()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_result_context() {
        let result: Result<()> = Err(Error::config("inner"));
        let with_context = result.context("outer");
        assert!(with_context
            .unwrap_err()
            .to_string()
            .contains("outer: Configuration error: inner"));
    }

    #[test]
    fn test_io_error_with_context() {
        let io = std::io::Error::new(std::io::ErrorKind::AddrInUse, "address in use");
        let result: std::result::Result<(), std::io::Error> = Err(io);
        let err = result
            .with_context(|| "Failed to bind to 0.0.0.0:8080".to_string())
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Failed to bind to 0.0.0.0:8080: IO error: address in use"
        );
        assert!(!err.is_client_error());
    }
}
