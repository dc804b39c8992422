use tracing::info;

use super::Application;
use crate::error::Result;
use crate::session::InstallerSession;
use crate::users::User;

const PACKAGES: &[&str] = &["cups", "system-config-printer", "cups-pk-helper"];
const SERVICE: &str = "cups.service";

/// CUPS printing service.
#[derive(Debug, Clone, Copy, Default)]
pub struct PrintServiceApp;

impl Application for PrintServiceApp {
    fn name(&self) -> &'static str {
        "print-service"
    }

    fn install(&self, session: &mut dyn InstallerSession, _users: Option<&[User]>) -> Result<()> {
        info!("Installing print service");
        session.add_packages(PACKAGES)?;
        session.enable_service(SERVICE)
    }
}
