//! Profile installation.
//!
//! Installs the selected profile's packages, its greeter and its companion
//! units. Greeter daemon configuration (themes, autologin) is left to the
//! greeter packages' defaults.

use tracing::{debug, info};

use crate::error::Result;
use crate::logic::resolver::{
    resolve_companion_services, resolve_greeter, resolve_profile_packages,
};
use crate::profiles::Profile;
use crate::session::InstallerSession;
use crate::types::GreeterType;

/// Stateless profile installer. Construct one per provisioning run.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProfileHandler;

impl ProfileHandler {
    pub fn new() -> Self {
        Self
    }

    /// Install `profile` into the session.
    ///
    /// Order: profile packages, companion units, then the greeter packages
    /// and unit. The first session failure stops the sequence and is
    /// returned unchanged.
    pub fn install_profile(
        &self,
        session: &mut dyn InstallerSession,
        profile: &Profile,
        greeter_override: Option<GreeterType>,
    ) -> Result<()> {
        profile.validate()?;
        info!("Installing profile: {} ({})", profile.name(), profile.category());

        let packages = resolve_profile_packages(profile);
        debug!("Resolved profile packages: {:?}", packages);
        session.add_packages(&packages)?;

        for service in resolve_companion_services(profile, greeter_override) {
            session.enable_service(service)?;
        }

        match resolve_greeter(profile, greeter_override) {
            Some(greeter) => {
                info!("Installing greeter: {}", greeter);
                session.add_packages(greeter.packages())?;
                session.enable_service(greeter.service())?;
            }
            None => debug!("No greeter for profile {}", profile.name()),
        }

        Ok(())
    }
}
