//! Sync Errors
//!
//! Failure kinds of the API sync client.

use std::fmt;

/// Common result type for sync operations
pub type SyncResult<T> = Result<T, SyncError>;

/// Errors raised while talking to the ticket service or updating a view
#[derive(Debug, Clone, PartialEq)]
pub enum SyncError {
    /// Network failure or non-2xx response
    RequestFailed {
        method: &'static str,
        path: String,
        /// HTTP status, `None` when the request never got a response
        status: Option<u16>,
        detail: String,
    },
    /// A named view target is not present on the page
    ElementMissing(&'static str),
    /// A 2xx body that does not decode into the expected records
    SchemaMismatch { path: String, detail: String },
}

impl SyncError {
    pub fn request(method: &'static str, path: impl Into<String>, detail: impl Into<String>) -> Self {
        SyncError::RequestFailed {
            method,
            path: path.into(),
            status: None,
            detail: detail.into(),
        }
    }

    pub fn status(method: &'static str, path: impl Into<String>, status: u16, detail: impl Into<String>) -> Self {
        SyncError::RequestFailed {
            method,
            path: path.into(),
            status: Some(status),
            detail: detail.into(),
        }
    }

    pub fn schema(path: impl Into<String>, detail: impl Into<String>) -> Self {
        SyncError::SchemaMismatch {
            path: path.into(),
            detail: detail.into(),
        }
    }

    /// Short kind name used as a log prefix
    pub fn kind(&self) -> &'static str {
        match self {
            SyncError::RequestFailed { .. } => "RequestFailed",
            SyncError::ElementMissing(_) => "ElementMissing",
            SyncError::SchemaMismatch { .. } => "SchemaMismatch",
        }
    }
}

impl fmt::Display for SyncError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SyncError::RequestFailed { method, path, status: Some(code), detail } => {
                write!(f, "{} {} failed with status {}: {}", method, path, code, detail)
            }
            SyncError::RequestFailed { method, path, status: None, detail } => {
                write!(f, "{} {} failed: {}", method, path, detail)
            }
            SyncError::ElementMissing(name) => write!(f, "{} element not found", name),
            SyncError::SchemaMismatch { path, detail } => {
                write!(f, "Unexpected response from {}: {}", path, detail)
            }
        }
    }
}

impl std::error::Error for SyncError {}
