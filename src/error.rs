//! Central error types for cursorkit.
//!
//! This module provides typed errors for better error handling across the
//! codebase. The only recoverable domain failure is canvas resolution: a
//! scene without the tagged canvas holder leaves reticle tracking disabled
//! but never aborts the host.

use thiserror::Error;

/// Main error type for cursor operations.
#[derive(Error, Debug)]
pub enum CursorError {
    /// No object carrying the expected canvas tag exists in the current scene.
    #[error("No canvas holder with tag '{tag}' in the current scene")]
    CanvasHolderNotFound { tag: String },

    /// Reticle canvas has not been resolved yet; tracking cannot be enabled.
    #[error("Reticle canvas not resolved")]
    CanvasNotResolved,

    /// Config file read/write failed
    #[error("Storage error: {0}")]
    StorageError(#[from] std::io::Error),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Generic error with message
    #[error("{0}")]
    Other(String),
}

impl From<String> for CursorError {
    fn from(msg: String) -> Self {
        CursorError::Other(msg)
    }
}

impl From<&str> for CursorError {
    fn from(msg: &str) -> Self {
        CursorError::Other(msg.to_string())
    }
}

/// Extension trait for adding context to Results.
///
/// Similar to anyhow's `Context` trait, this allows chaining context
/// information onto errors for better debugging.
pub trait ResultExt<T> {
    /// Add context to an error, converting it to CursorError::Other.
    fn context(self, msg: &str) -> CursorResult<T>;

    /// Add context lazily (only evaluated on error).
    fn with_context<F: FnOnce() -> String>(self, f: F) -> CursorResult<T>;
}

impl<T, E: std::fmt::Display> ResultExt<T> for Result<T, E> {
    fn context(self, msg: &str) -> CursorResult<T> {
        self.map_err(|e| CursorError::Other(format!("{}: {}", msg, e)))
    }

    fn with_context<F: FnOnce() -> String>(self, f: F) -> CursorResult<T> {
        self.map_err(|e| CursorError::Other(format!("{}: {}", f(), e)))
    }
}

/// Extension trait for adding context to Option types.
pub trait OptionExt<T> {
    /// Convert None to CursorError::Other with the given message.
    fn context(self, msg: &str) -> CursorResult<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn context(self, msg: &str) -> CursorResult<T> {
        self.ok_or_else(|| CursorError::Other(msg.to_string()))
    }
}

/// Type alias for Results using CursorError.
pub type CursorResult<T> = Result<T, CursorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CursorError::CanvasHolderNotFound {
            tag: "CursorHolder".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "No canvas holder with tag 'CursorHolder' in the current scene"
        );
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: CursorError = io_err.into();
        assert!(matches!(err, CursorError::StorageError(_)));
    }

    #[test]
    fn test_from_string() {
        let err: CursorError = "test error".into();
        assert!(matches!(err, CursorError::Other(_)));
    }

    #[test]
    fn test_result_ext_context() {
        let result: Result<(), &str> = Err("original error");
        let with_context = result.context("operation failed");

        assert!(matches!(with_context, Err(CursorError::Other(_))));
        let msg = with_context.unwrap_err().to_string();
        assert!(msg.contains("operation failed"));
        assert!(msg.contains("original error"));
    }

    #[test]
    fn test_result_ext_with_context() {
        let result: Result<(), &str> = Err("inner");
        let with_context = result.with_context(|| format!("ctx-{}", 42));

        let msg = with_context.unwrap_err().to_string();
        assert!(msg.contains("ctx-42"));
        assert!(msg.contains("inner"));
    }

    #[test]
    fn test_option_ext_context() {
        let opt: Option<i32> = None;
        let result = opt.context("value was missing");

        assert!(matches!(result, Err(CursorError::Other(_))));
        assert!(result.unwrap_err().to_string().contains("value was missing"));
    }

    #[test]
    fn test_option_ext_some_passthrough() {
        let opt: Option<i32> = Some(42);
        let result = opt.context("should not appear");

        assert_eq!(result.unwrap(), 42);
    }
}
