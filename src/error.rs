//! Error handling module for soloinstall
//!
//! Provides centralized error handling with proper error types using thiserror.
//! Profile and application code returns these errors unchanged to the caller,
//! which decides whether to abort the provisioning run.

use thiserror::Error;

/// Main error type for soloinstall
#[derive(Error, Debug)]
pub enum SoloInstallError {
    /// IO errors (file operations, symlinks, spawning commands)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration defects (unknown backend, contradictory selections)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Validation errors (profile package lists, usernames)
    #[error("Validation error: {0}")]
    Validation(String),

    /// The installer session reported a failed package or service action
    #[error("Installation failed: {0}")]
    Installation(String),

    /// General errors (catch-all for edge cases)
    #[error("{0}")]
    General(String),
}

/// Result type alias for soloinstall operations
pub type Result<T> = std::result::Result<T, SoloInstallError>;

// Convenient error constructors
impl SoloInstallError {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create an installation error
    pub fn installation(msg: impl Into<String>) -> Self {
        Self::Installation(msg.into())
    }

    /// Create a general error
    pub fn general(msg: impl Into<String>) -> Self {
        Self::General(msg.into())
    }

    /// True for errors caused by the user-supplied configuration rather
    /// than by the target system.
    pub fn is_config_defect(&self) -> bool {
        matches!(self, Self::Config(_) | Self::Validation(_))
    }
}
