//! Optional applications installed on top of the base system.
//!
//! Each application is a small stateless struct implementing [`Application`].
//! It translates its own parameters into package and service actions against
//! an [`InstallerSession`]. Applications never look at each other's state.
//!
//! | Application          | Config section            |
//! |----------------------|---------------------------|
//! | `BluetoothApp`       | `bluetooth_config`        |
//! | `AudioApp`           | `audio_config`            |
//! | `PrintServiceApp`    | `print_service_config`    |
//! | `PowerManagementApp` | `power_management_config` |

mod audio;
mod bluetooth;
mod power_management;
mod print_service;

pub use audio::AudioApp;
pub use bluetooth::BluetoothApp;
pub use power_management::PowerManagementApp;
pub use print_service::PrintServiceApp;

use crate::error::Result;
use crate::session::InstallerSession;
use crate::users::User;

/// An independently toggleable subsystem.
pub trait Application {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Install the subsystem into the session.
    ///
    /// `users` is only consulted by applications with per-user state; the
    /// others ignore it.
    fn install(&self, session: &mut dyn InstallerSession, users: Option<&[User]>) -> Result<()>;
}
