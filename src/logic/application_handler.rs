//! Optional application dispatch.
//!
//! # Dispatch Rules
//!
//! Guards run in this fixed order, each independent of the others:
//!
//! | Step | Guard | Application |
//! |------|-------|-------------|
//! | 1 | `bluetooth_config.enabled` | `BluetoothApp` |
//! | 2 | `audio_config.audio != none` | `AudioApp` (receives users) |
//! | 3 | `print_service_config.enabled` | `PrintServiceApp` |
//! | 4 | `power_management_config` present | `PowerManagementApp` |
//!
//! # Failure Policy
//!
//! **FAIL-FAST**: the first error returned by an application stops the run
//! and reaches the caller untouched. Whether to abort provisioning or carry
//! on with a warning is the caller's decision.

use tracing::{debug, info};

use crate::applications::{
    Application, AudioApp, BluetoothApp, PowerManagementApp, PrintServiceApp,
};
use crate::config::ApplicationConfiguration;
use crate::error::Result;
use crate::session::InstallerSession;
use crate::users::User;

/// Stateless application dispatcher. Construct one per provisioning run.
#[derive(Debug, Clone, Copy, Default)]
pub struct ApplicationHandler;

impl ApplicationHandler {
    pub fn new() -> Self {
        Self
    }

    /// Install every application requested by `app_config`.
    pub fn install_applications(
        &self,
        session: &mut dyn InstallerSession,
        app_config: &ApplicationConfiguration,
        users: Option<&[User]>,
    ) -> Result<()> {
        if app_config.bluetooth_requested() {
            self.run(&BluetoothApp, session, users)?;
        } else {
            debug!("Bluetooth not requested");
        }

        if let Some(audio) = app_config.requested_audio() {
            self.run(&AudioApp::new(audio), session, users)?;
        } else {
            debug!("Audio not requested");
        }

        if app_config.print_service_requested() {
            self.run(&PrintServiceApp, session, users)?;
        } else {
            debug!("Print service not requested");
        }

        if let Some(backend) = app_config.requested_power_management() {
            self.run(&PowerManagementApp::new(backend), session, users)?;
        } else {
            debug!("Power management not requested");
        }

        Ok(())
    }

    fn run(
        &self,
        app: &dyn Application,
        session: &mut dyn InstallerSession,
        users: Option<&[User]>,
    ) -> Result<()> {
        app.install(session, users)?;
        info!("Application installed: {}", app.name());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::DryRunSession;
    use crate::types::Audio;

    #[test]
    fn test_empty_config_does_nothing() {
        let mut session = DryRunSession::new();
        ApplicationHandler::new()
            .install_applications(&mut session, &ApplicationConfiguration::default(), None)
            .unwrap();
        assert!(session.actions().is_empty());
    }

    #[test]
    fn test_disabled_bluetooth_skipped() {
        let mut session = DryRunSession::new();
        let config = ApplicationConfiguration::new()
            .with_bluetooth(false)
            .with_audio(Audio::NoAudio);
        ApplicationHandler::new()
            .install_applications(&mut session, &config, None)
            .unwrap();
        assert!(session.actions().is_empty());
    }

    #[test]
    fn test_print_service_after_audio() {
        let mut session = DryRunSession::new();
        let config = ApplicationConfiguration::new()
            .with_print_service(true)
            .with_audio(Audio::Pulseaudio);
        ApplicationHandler::new()
            .install_applications(&mut session, &config, None)
            .unwrap();
        assert_eq!(
            session.installed_packages(),
            vec!["pulseaudio", "cups", "system-config-printer", "cups-pk-helper"]
        );
    }
}
