//! Target user accounts.
//!
//! Accounts are created by the surrounding installer; this crate only reads
//! them to scope per-user configuration such as user-level systemd units.

use serde::{Deserialize, Serialize};
use std::path::{Component, PathBuf};

use crate::error::{Result, SoloInstallError};

/// A user account on the target system.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct User {
    pub username: String,
    /// Home directory inside the target root (default: `/home/<username>`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub home: Option<PathBuf>,
}

impl User {
    pub fn new(username: &str) -> Self {
        Self {
            username: username.to_string(),
            home: None,
        }
    }

    /// Set a non-standard home directory.
    pub fn with_home(mut self, home: &str) -> Self {
        self.home = Some(PathBuf::from(home));
        self
    }

    /// Home directory as seen from inside the target root.
    pub fn home_dir(&self) -> PathBuf {
        self.home
            .clone()
            .unwrap_or_else(|| PathBuf::from("/home").join(&self.username))
    }

    /// Validate the username against useradd's default rules
    /// (1-32 chars, lowercase letter or underscore first, then `[a-z0-9_-]`).
    pub fn validate(&self) -> Result<()> {
        let name = self.username.as_str();
        if name.is_empty() || name.len() > 32 {
            return Err(SoloInstallError::validation(format!(
                "Username '{}' must be 1-32 characters long",
                name
            )));
        }
        if let Some(first) = name.chars().next() {
            if !(first.is_ascii_lowercase() || first == '_') {
                return Err(SoloInstallError::validation(format!(
                    "Username '{}' must start with a lowercase letter or underscore",
                    name
                )));
            }
        }
        if !name
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_' || c == '-')
        {
            return Err(SoloInstallError::validation(format!(
                "Username '{}' can only contain lowercase letters, digits, '_' and '-'",
                name
            )));
        }
        if let Some(home) = &self.home {
            if !home.is_absolute() {
                return Err(SoloInstallError::validation(format!(
                    "Home directory for '{}' must be an absolute path",
                    name
                )));
            }
            if home.components().any(|c| c == Component::ParentDir) {
                return Err(SoloInstallError::validation(format!(
                    "Home directory for '{}' must not contain '..'",
                    name
                )));
            }
        }
        Ok(())
    }
}
