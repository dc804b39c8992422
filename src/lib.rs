//! soloinstall Library
//!
//! Profile and optional-application provisioning for a freshly installed
//! Arch Linux system. All system changes go through an [`InstallerSession`].

pub mod applications;
pub mod cli;
pub mod config;
pub mod config_file;
pub mod error;
pub mod installer;
pub mod logic;
pub mod profiles;
pub mod session;
pub mod types;
pub mod users;

// Re-export main types for convenience
pub use applications::{Application, AudioApp, BluetoothApp, PowerManagementApp, PrintServiceApp};
pub use config::{
    ApplicationConfiguration, AudioConfiguration, BluetoothConfiguration,
    PowerManagementConfiguration, PrintServiceConfiguration,
};
pub use config_file::ProvisioningConfig;
pub use error::SoloInstallError;
pub use installer::provision;
pub use logic::{ApplicationHandler, ProfileHandler};
pub use profiles::{CustomProfile, DesktopProfile, Profile};
pub use session::{ChrootSession, DryRunSession, InstallerSession, SessionAction};
pub use types::{Audio, DisplayServer, GreeterType, PowerManagement, ProfileType};
pub use users::User;
