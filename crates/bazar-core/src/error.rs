//! Error types
//!
//! None of these are fatal. Each is handled where it occurs and, when the
//! user should hear about it, turned into a notice.

use thiserror::Error;

use crate::domain::{ItemId, ListId};

/// Key-value backend failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    #[error("storage read failed: {0}")]
    Read(String),

    #[error("storage write failed: {0}")]
    Write(String),

    #[error("serialization failed: {0}")]
    Serialize(String),
}

impl From<serde_json::Error> for StorageError {
    fn from(err: serde_json::Error) -> Self {
        StorageError::Serialize(err.to_string())
    }
}

/// Rejected store operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("list not found: {0}")]
    ListNotFound(ListId),

    #[error("item not found: {0}")]
    ItemNotFound(ItemId),

    #[error("festival list cannot be deleted: {0}")]
    ProtectedList(ListId),

    #[error("item already in list: {0}")]
    DuplicateItem(String),

    #[error("item name is empty")]
    EmptyName,

    #[error("no ingredients found in recipe text")]
    EmptyExtraction,
}

/// Voice capture failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CaptureError {
    #[error("speech recognition is not supported here")]
    Unavailable,

    #[error("microphone permission denied")]
    PermissionDenied,

    #[error("speech recognition network error")]
    Network,

    #[error("a capture session is already running")]
    SessionActive,

    #[error("speech recognition error: {0}")]
    Engine(String),
}

impl CaptureError {
    /// Map a recognizer error code; `None` for codes that mean cancellation
    pub fn from_engine_code(code: &str) -> Option<Self> {
        match code {
            "aborted" => None,
            "not-allowed" | "service-not-allowed" => Some(CaptureError::PermissionDenied),
            "network" => Some(CaptureError::Network),
            other => Some(CaptureError::Engine(other.to_string())),
        }
    }

    /// Whether the capability should stay off for the rest of the session
    pub fn disables_capture(&self) -> bool {
        matches!(self, CaptureError::Unavailable | CaptureError::PermissionDenied)
    }
}
