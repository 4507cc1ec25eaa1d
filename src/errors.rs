// SPDX-License-Identifier: MPL-2.0

//! Error types for the capture/scan session

use std::fmt;

/// Result type alias using SessionError
pub type SessionResult<T> = Result<T, SessionError>;

/// Main session error type
#[derive(Debug, Clone)]
pub enum SessionError {
    /// Photo capture errors
    Capture(CaptureError),
    /// History persistence errors
    History(HistoryError),
    /// External URL opener errors
    OpenUrl(OpenUrlError),
}

/// Device-level capture errors
#[derive(Debug, Clone)]
pub enum CaptureError {
    /// Camera hardware is busy or in use
    Busy,
    /// Capture failed
    Failed(String),
}

/// History persistence errors
#[derive(Debug, Clone)]
pub enum HistoryError {
    /// Stored blob failed to parse as the expected shape
    Corrupt(String),
    /// Store rejected a write or remove
    WriteFailed(String),
}

/// The external opener rejected a URL
#[derive(Debug, Clone)]
pub struct OpenUrlError(pub String);

/// A key-value store write or remove failed
#[derive(Debug, Clone)]
pub struct StoreError(pub String);

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::Capture(e) => write!(f, "Capture error: {}", e),
            SessionError::History(e) => write!(f, "History error: {}", e),
            SessionError::OpenUrl(e) => write!(f, "{}", e),
        }
    }
}

impl fmt::Display for CaptureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaptureError::Busy => write!(f, "Camera is busy"),
            CaptureError::Failed(msg) => write!(f, "Capture failed: {}", msg),
        }
    }
}

impl fmt::Display for HistoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HistoryError::Corrupt(msg) => write!(f, "Corrupt history blob: {}", msg),
            HistoryError::WriteFailed(msg) => write!(f, "History write failed: {}", msg),
        }
    }
}

impl fmt::Display for OpenUrlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Failed to open URL: {}", self.0)
    }
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Store operation failed: {}", self.0)
    }
}

impl std::error::Error for SessionError {}
impl std::error::Error for CaptureError {}
impl std::error::Error for HistoryError {}
impl std::error::Error for OpenUrlError {}
impl std::error::Error for StoreError {}

// Conversions from sub-errors to SessionError
impl From<CaptureError> for SessionError {
    fn from(err: CaptureError) -> Self {
        SessionError::Capture(err)
    }
}

impl From<HistoryError> for SessionError {
    fn from(err: HistoryError) -> Self {
        SessionError::History(err)
    }
}

impl From<OpenUrlError> for SessionError {
    fn from(err: OpenUrlError) -> Self {
        SessionError::OpenUrl(err)
    }
}

impl From<StoreError> for HistoryError {
    fn from(err: StoreError) -> Self {
        HistoryError::WriteFailed(err.0)
    }
}

impl From<serde_json::Error> for HistoryError {
    fn from(err: serde_json::Error) -> Self {
        HistoryError::Corrupt(err.to_string())
    }
}

impl From<std::io::Error> for StoreError {
    fn from(err: std::io::Error) -> Self {
        StoreError(err.to_string())
    }
}
