use tracing::info;

use super::Application;
use crate::error::Result;
use crate::session::InstallerSession;
use crate::users::User;

const PACKAGES: &[&str] = &["bluez", "bluez-utils"];
const SERVICE: &str = "bluetooth.service";

/// Bluetooth stack (BlueZ daemon and CLI tools).
#[derive(Debug, Clone, Copy, Default)]
pub struct BluetoothApp;

impl Application for BluetoothApp {
    fn name(&self) -> &'static str {
        "bluetooth"
    }

    fn install(&self, session: &mut dyn InstallerSession, _users: Option<&[User]>) -> Result<()> {
        info!("Installing Bluetooth");
        session.add_packages(PACKAGES)?;
        session.enable_service(SERVICE)
    }
}
