//! Error types for the message store, directory, preferences and compose flow.
//!
//! CHANGELOG:
//! - 10/12/2026 - Split validation failures into specific variants
//! - 10/09/2026 - Initial error taxonomy

use std::path::PathBuf;
use thiserror::Error;

/// Message store unreachable or failing mid-scan. Always propagated.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to open message store at {path:?}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    #[error("message store query failed: {0}")]
    Query(#[from] rusqlite::Error),

    #[error("message store unavailable: {0}")]
    Unavailable(String),
}

/// Directory miss or failure. Recovered locally as "no display name".
#[derive(Debug, Error)]
#[error("directory lookup for {address} failed: {reason}")]
pub struct LookupError {
    pub address: String,
    pub reason: String,
}

/// Preference file could not be read or written.
#[derive(Debug, Error)]
pub enum PreferencesError {
    #[error("failed to access preferences file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse preferences file {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to serialize preferences: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Compose input rejected before anything is sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Message body is empty")]
    EmptyBody,

    #[error("Phone number too short")]
    TooShort,

    #[error("Phone number too long")]
    TooLong,

    #[error("Please only enter numerical digits")]
    NonDigit,
}

/// Transport could not hand the message off.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("send command is empty")]
    EmptyCommand,

    #[error("failed to spawn {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("send command failed: {0}")]
    Failed(String),
}
