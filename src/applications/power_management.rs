use tracing::info;

use super::Application;
use crate::error::Result;
use crate::session::InstallerSession;
use crate::types::PowerManagement;
use crate::users::User;

/// Power profile daemon (power-profiles-daemon or tuned).
#[derive(Debug, Clone, Copy)]
pub struct PowerManagementApp {
    backend: PowerManagement,
}

impl PowerManagementApp {
    pub fn new(backend: PowerManagement) -> Self {
        Self { backend }
    }

    pub fn packages(&self) -> &'static [&'static str] {
        match self.backend {
            PowerManagement::PowerProfilesDaemon => &["power-profiles-daemon"],
            // tuned-ppd keeps desktop power sliders working on top of tuned
            PowerManagement::Tuned => &["tuned", "tuned-ppd"],
        }
    }

    pub fn services(&self) -> &'static [&'static str] {
        match self.backend {
            PowerManagement::PowerProfilesDaemon => &["power-profiles-daemon.service"],
            PowerManagement::Tuned => &["tuned.service", "tuned-ppd.service"],
        }
    }
}

impl Application for PowerManagementApp {
    fn name(&self) -> &'static str {
        "power-management"
    }

    fn install(&self, session: &mut dyn InstallerSession, _users: Option<&[User]>) -> Result<()> {
        info!("Installing power management: {}", self.backend);
        session.add_packages(self.packages())?;
        for service in self.services() {
            session.enable_service(service)?;
        }
        Ok(())
    }
}
