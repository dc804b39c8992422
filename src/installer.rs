//! Installer module
//!
//! Runs one provisioning pass: profile first, then optional applications,
//! all against a single installer session.

use tracing::info;

use crate::config_file::ProvisioningConfig;
use crate::error::Result;
use crate::logic::{ApplicationHandler, ProfileHandler};
use crate::session::InstallerSession;

/// Provision the target system described by `config`.
///
/// The config is validated before the session is touched. Session errors
/// propagate unchanged; nothing is retried or rolled back.
pub fn provision(session: &mut dyn InstallerSession, config: &ProvisioningConfig) -> Result<()> {
    config.validate()?;

    match &config.profile {
        Some(profile) => {
            ProfileHandler::new().install_profile(session, profile, config.greeter)?;
        }
        None => info!("No profile selected, skipping profile installation"),
    }

    ApplicationHandler::new().install_applications(session, &config.app_config, config.users())?;

    info!("Provisioning complete");
    Ok(())
}
