use tracing::{debug, info};

use super::Application;
use crate::error::{Result, SoloInstallError};
use crate::session::InstallerSession;
use crate::types::Audio;
use crate::users::User;

const PIPEWIRE_PACKAGES: &[&str] = &[
    "pipewire",
    "pipewire-alsa",
    "pipewire-jack",
    "pipewire-pulse",
    "gst-plugin-pipewire",
    "libpulse",
    "wireplumber",
];

const PULSEAUDIO_PACKAGES: &[&str] = &["pulseaudio"];

/// Audio server, configured per user.
#[derive(Debug, Clone, Copy)]
pub struct AudioApp {
    audio: Audio,
}

impl AudioApp {
    pub fn new(audio: Audio) -> Self {
        Self { audio }
    }

    /// Packages for the selected server.
    ///
    /// `NoAudio` is a configuration defect at this point: the caller asked
    /// to install audio without choosing a server.
    pub fn packages(&self) -> Result<&'static [&'static str]> {
        match self.audio {
            Audio::Pipewire => Ok(PIPEWIRE_PACKAGES),
            Audio::Pulseaudio => Ok(PULSEAUDIO_PACKAGES),
            Audio::NoAudio => Err(SoloInstallError::config(
                "audio installation requested without an audio server",
            )),
        }
    }

    /// User unit enabled for every account.
    pub fn user_unit(&self) -> Option<&'static str> {
        match self.audio {
            Audio::Pipewire => Some("pipewire-pulse.service"),
            Audio::Pulseaudio => Some("pulseaudio.socket"),
            Audio::NoAudio => None,
        }
    }
}

impl Application for AudioApp {
    fn name(&self) -> &'static str {
        "audio"
    }

    fn install(&self, session: &mut dyn InstallerSession, users: Option<&[User]>) -> Result<()> {
        let packages = self.packages()?;
        info!("Installing audio server: {}", self.audio);
        session.add_packages(packages)?;

        let (Some(unit), Some(users)) = (self.user_unit(), users) else {
            debug!("No per-user audio configuration to apply");
            return Ok(());
        };
        for user in users {
            session.enable_user_service(user, unit)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{DryRunSession, SessionAction};

    fn user_units(session: &DryRunSession) -> Vec<(String, String)> {
        session
            .actions()
            .iter()
            .filter_map(|a| match a {
                SessionAction::EnableUserService { username, service } => {
                    Some((username.clone(), service.clone()))
                }
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_pipewire_per_user() {
        let mut session = DryRunSession::new();
        let users = [User::new("alice"), User::new("bob")];
        AudioApp::new(Audio::Pipewire)
            .install(&mut session, Some(users.as_slice()))
            .unwrap();

        assert!(session.installed_packages().contains(&"wireplumber"));
        assert_eq!(
            user_units(&session),
            vec![
                ("alice".to_string(), "pipewire-pulse.service".to_string()),
                ("bob".to_string(), "pipewire-pulse.service".to_string()),
            ]
        );
    }

    #[test]
    fn test_pulseaudio_without_users() {
        let mut session = DryRunSession::new();
        AudioApp::new(Audio::Pulseaudio)
            .install(&mut session, None)
            .unwrap();

        assert_eq!(session.installed_packages(), vec!["pulseaudio"]);
        assert!(user_units(&session).is_empty());
    }

    #[test]
    fn test_no_audio_is_config_defect() {
        let mut session = DryRunSession::new();
        let err = AudioApp::new(Audio::NoAudio)
            .install(&mut session, None)
            .unwrap_err();

        assert!(err.is_config_defect());
        assert!(session.actions().is_empty());
    }
}
