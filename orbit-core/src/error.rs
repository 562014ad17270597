//! Error types for the Orbit core library.

use std::path::PathBuf;

use thiserror::Error;

/// A violated entity invariant, naming the offending field.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid {field}: {reason}")]
pub struct ValidationError {
    /// Field (or field path, e.g. `sectors[0].objects[1].name`) that failed.
    pub field: String,
    /// Human-readable description of the violated rule.
    pub reason: String,
}

impl ValidationError {
    /// Build a validation error for `field`.
    #[must_use]
    pub fn new(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Top-level error type for all Orbit operations.
#[derive(Error, Debug)]
pub enum OrbitError {
    /// An entity failed validation before reaching the store.
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// Update or lookup against a key that is not stored.
    #[error("{kind} not found: {id}")]
    NotFound {
        /// Entity kind (`player`, `item`, `game map`, `sector`).
        kind: &'static str,
        /// The key that was looked up.
        id: String,
    },

    /// Registration attempted with a username that is already taken.
    #[error("Username already exists: {0}")]
    DuplicateUsername(String),

    /// Empty, too short or mismatched credentials.
    #[error("Invalid credentials: {0}")]
    InvalidCredentials(String),

    /// Writing a collection to disk failed.
    #[error("Failed to persist {}: {source}", path.display())]
    Persistence {
        /// File that could not be written.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// Serialization or deserialization failure.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Generic I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience Result type alias.
pub type Result<T> = std::result::Result<T, OrbitError>;
