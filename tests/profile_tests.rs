//! Tests for Profile Installation and Provisioning
//!
//! These tests verify:
//! - Greeter resolution (default vs override)
//! - Display-server dependencies are installed with the profile
//! - `provision` runs the profile before applications and fails fast

mod common;

use common::{ScriptedSession, users};
use soloinstall::{
    ApplicationConfiguration, Audio, DryRunSession, GreeterType, Profile, ProfileHandler,
    ProvisioningConfig, SessionAction, provision,
};

fn rendered(actions: &[SessionAction]) -> Vec<String> {
    actions.iter().map(|a| a.to_string()).collect()
}

#[test]
fn test_mate_uses_lightdm_by_default() {
    let mut session = DryRunSession::new();
    ProfileHandler::new()
        .install_profile(&mut session, &Profile::Mate, None)
        .unwrap();

    assert_eq!(
        rendered(session.actions()),
        vec![
            "install xorg-server mate mate-extra",
            "install lightdm lightdm-gtk-greeter",
            "enable lightdm.service",
        ]
    );
}

#[test]
fn test_greeter_override_replaces_default() {
    let mut session = DryRunSession::new();
    ProfileHandler::new()
        .install_profile(&mut session, &Profile::Gnome, Some(GreeterType::Sddm))
        .unwrap();

    let packages = session.installed_packages();
    assert!(packages.contains(&"sddm"));
    assert!(!packages.contains(&"gdm"));
}

#[test]
fn test_server_profile_enables_companion_service() {
    let mut session = DryRunSession::new();
    ProfileHandler::new()
        .install_profile(&mut session, &Profile::Sshd, None)
        .unwrap();

    assert_eq!(
        rendered(session.actions()),
        vec!["install openssh", "enable sshd.service"]
    );
}

#[test]
fn test_profile_package_failure_stops_greeter() {
    let mut session = ScriptedSession::failing_on_package("gnome");
    let result = ProfileHandler::new().install_profile(&mut session, &Profile::Gnome, None);

    assert!(result.is_err());
    assert!(session.actions().is_empty());
}

#[test]
fn test_provision_full_desktop() {
    let config = ProvisioningConfig {
        profile: Some(Profile::Kde),
        greeter: None,
        app_config: ApplicationConfiguration::new()
            .with_bluetooth(true)
            .with_audio(Audio::Pipewire),
        users: users(&["alice"]),
    };
    let mut session = ScriptedSession::new();
    provision(&mut session, &config).unwrap();

    let firsts: Vec<String> = session
        .install_calls()
        .into_iter()
        .map(|call| call[0].clone())
        .collect();
    assert_eq!(firsts, vec!["xorg-server", "sddm", "bluez", "pipewire"]);
    assert_eq!(session.user_service_targets(), vec!["alice"]);
}

#[test]
fn test_provision_profile_failure_skips_applications() {
    let config = ProvisioningConfig {
        profile: Some(Profile::Gnome),
        app_config: ApplicationConfiguration::new().with_bluetooth(true),
        ..Default::default()
    };
    let mut session = ScriptedSession::failing_on_service("gdm.service");

    assert!(provision(&mut session, &config).is_err());
    assert!(!session.installed_packages().contains(&"bluez"));
}
