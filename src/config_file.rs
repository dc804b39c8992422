//! Provisioning configuration file handling.
//!
//! A provisioning config bundles everything one run needs: the selected
//! profile, an optional greeter override, the optional applications and the
//! accounts they apply to. Files are JSON:
//!
//! ```json
//! {
//!   "profile": "gnome",
//!   "app_config": {
//!     "bluetooth_config": { "enabled": true },
//!     "audio_config": { "audio": "pipewire" }
//!   },
//!   "users": [{ "username": "alice" }]
//! }
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::config::ApplicationConfiguration;
use crate::error::SoloInstallError;
use crate::profiles::Profile;
use crate::types::GreeterType;
use crate::users::User;

/// Provisioning configuration that can be saved/loaded
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProvisioningConfig {
    /// Profile to install (None = base system only)
    #[serde(default)]
    pub profile: Option<Profile>,
    /// Greeter replacing the profile's default
    #[serde(default)]
    pub greeter: Option<GreeterType>,
    #[serde(default)]
    pub app_config: ApplicationConfiguration,
    #[serde(default)]
    pub users: Vec<User>,
}

impl ProvisioningConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Save configuration to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .context("Failed to serialize configuration to JSON")?;

        fs::write(&path, json)
            .with_context(|| format!("Failed to write configuration to {:?}", path.as_ref()))?;

        Ok(())
    }

    /// Load configuration from a JSON file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read configuration from {:?}", path.as_ref()))?;

        let config: Self =
            serde_json::from_str(&content).context("Failed to parse configuration JSON")?;

        Ok(config)
    }

    /// Validate the configuration.
    ///
    /// Checks the profile's package list, every username and that no account
    /// is listed twice.
    pub fn validate(&self) -> crate::error::Result<()> {
        if let Some(profile) = &self.profile {
            profile.validate()?;
        } else if self.greeter.is_some() {
            return Err(SoloInstallError::config(
                "A greeter was selected without a profile",
            ));
        }

        let mut seen = HashSet::new();
        for user in &self.users {
            user.validate()?;
            if !seen.insert(user.username.as_str()) {
                return Err(SoloInstallError::validation(format!(
                    "User '{}' is listed more than once",
                    user.username
                )));
            }
        }

        Ok(())
    }

    /// Users as the optional slice the application handler expects.
    pub fn users(&self) -> Option<&[User]> {
        if self.users.is_empty() {
            None
        } else {
            Some(self.users.as_slice())
        }
    }
}
