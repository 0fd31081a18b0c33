//! Core error types for calmafit-core.
//!
//! This module defines the error hierarchy using thiserror. Note that most
//! persistence failures are deliberately *not* errors: the profile store
//! degrades to "no data" when the blob is absent or unreadable, so only
//! configuration, chat transport, and validation produce typed errors.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for calmafit-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Storage-related errors
    #[error("Storage error: {0}")]
    Store(#[from] StoreError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Chat endpoint errors
    #[error("Chat error: {0}")]
    Chat(#[from] ChatError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Storage-specific errors.
///
/// Only raised by operations where the caller explicitly asked for the
/// failure cause; the `ProfileStore` itself swallows these by contract.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Data directory could not be resolved or created
    #[error("Failed to prepare data directory {path}: {source}")]
    DataDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Failed to parse configuration
    #[error("Failed to parse configuration: {0}")]
    ParseFailed(String),
}

/// Chat endpoint errors.
///
/// The UI-facing contract substitutes [`crate::chat::FALLBACK_REPLY`] for
/// any of these; they exist so the CLI and tests can see the cause.
#[derive(Error, Debug)]
pub enum ChatError {
    /// Transport-level failure
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Endpoint returned a failure status
    #[error("Chat endpoint returned HTTP {status}: {message}")]
    Endpoint { status: u16, message: String },

    /// Response body did not contain a message
    #[error("Chat endpoint returned no message")]
    EmptyResponse,

    /// API credential not configured
    #[error("Chat API key not set (expected in {env_var})")]
    MissingCredential { env_var: &'static str },
}

/// Validation errors.
///
/// Form-level validation returns user-facing message strings instead (see
/// [`crate::validation`]); this type covers programmatic misuse.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// Wizard transition not allowed from the current step
    #[error("Step '{step}' cannot advance: {reason}")]
    StepBlocked { step: String, reason: String },
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
