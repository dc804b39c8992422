//! Tests for Application Dispatch
//!
//! These tests verify:
//! - Guards: absent or disabled sections install nothing
//! - Ordering: bluetooth, audio, print service, power management
//! - User scoping: the audio step sees the full user list
//! - Fail-fast: a session error stops the run and reaches the caller

mod common;

use common::{ScriptedSession, users};
use soloinstall::{
    ApplicationConfiguration, ApplicationHandler, Audio, PowerManagement, SoloInstallError,
};

// =============================================================================
// Guard Tests
// =============================================================================

#[test]
fn test_bluetooth_absent_no_bluetooth_calls() {
    let mut session = ScriptedSession::new();
    let config = ApplicationConfiguration::new().with_audio(Audio::Pipewire);

    ApplicationHandler::new()
        .install_applications(&mut session, &config, None)
        .unwrap();

    assert!(!session.installed_packages().contains(&"bluez"));
}

#[test]
fn test_bluetooth_disabled_no_bluetooth_calls() {
    let mut session = ScriptedSession::new();
    let config = ApplicationConfiguration::new().with_bluetooth(false);

    ApplicationHandler::new()
        .install_applications(&mut session, &config, None)
        .unwrap();

    assert!(session.actions().is_empty());
}

#[test]
fn test_no_audio_no_audio_calls() {
    let mut session = ScriptedSession::new();
    let config = ApplicationConfiguration::new()
        .with_bluetooth(true)
        .with_audio(Audio::NoAudio);

    ApplicationHandler::new()
        .install_applications(&mut session, &config, Some(users(&["alice"]).as_slice()))
        .unwrap();

    assert_eq!(session.install_calls(), vec![vec!["bluez", "bluez-utils"]]);
    assert!(session.user_service_targets().is_empty());
}

// =============================================================================
// Ordering Tests
// =============================================================================

#[test]
fn test_bluetooth_then_pipewire() {
    let mut session = ScriptedSession::new();
    let config = ApplicationConfiguration::new()
        .with_bluetooth(true)
        .with_audio(Audio::Pipewire);
    let accounts = users(&["alice", "bob", "carol"]);

    ApplicationHandler::new()
        .install_applications(&mut session, &config, Some(accounts.as_slice()))
        .unwrap();

    let calls = session.install_calls();
    assert_eq!(calls.len(), 2, "expected exactly two install calls");
    assert_eq!(calls[0], vec!["bluez", "bluez-utils"]);
    assert_eq!(calls[1][0], "pipewire");
    assert_eq!(session.user_service_targets(), vec!["alice", "bob", "carol"]);
}

#[test]
fn test_pulseaudio_only_scenario() {
    let mut session = ScriptedSession::new();
    let config = ApplicationConfiguration::new().with_audio(Audio::Pulseaudio);

    ApplicationHandler::new()
        .install_applications(&mut session, &config, Some(users(&["u1", "u2"]).as_slice()))
        .unwrap();

    assert_eq!(session.install_calls(), vec![vec!["pulseaudio"]]);
    assert_eq!(session.user_service_targets(), vec!["u1", "u2"]);
    assert!(!session.installed_packages().contains(&"bluez"));
}

#[test]
fn test_full_config_order() {
    let mut session = ScriptedSession::new();
    let config = ApplicationConfiguration::new()
        .with_power_management(PowerManagement::PowerProfilesDaemon)
        .with_print_service(true)
        .with_audio(Audio::Pulseaudio)
        .with_bluetooth(true);

    ApplicationHandler::new()
        .install_applications(&mut session, &config, None)
        .unwrap();

    let firsts: Vec<String> = session
        .install_calls()
        .into_iter()
        .map(|call| call[0].clone())
        .collect();
    assert_eq!(
        firsts,
        vec!["bluez", "pulseaudio", "cups", "power-profiles-daemon"]
    );
}

// =============================================================================
// Fail-fast Tests
// =============================================================================

#[test]
fn test_bluetooth_failure_stops_audio() {
    let mut session = ScriptedSession::failing_on_package("bluez");
    let config = ApplicationConfiguration::new()
        .with_bluetooth(true)
        .with_audio(Audio::Pipewire);

    let err = ApplicationHandler::new()
        .install_applications(&mut session, &config, Some(users(&["alice"]).as_slice()))
        .unwrap_err();

    match err {
        SoloInstallError::Installation(msg) => assert_eq!(msg, "target not found: bluez"),
        other => panic!("error was translated: {:?}", other),
    }
    assert!(session.actions().is_empty(), "audio must not be attempted");
}

#[test]
fn test_service_failure_propagates() {
    let mut session = ScriptedSession::failing_on_service("bluetooth.service");
    let config = ApplicationConfiguration::new()
        .with_bluetooth(true)
        .with_print_service(true);

    let err = ApplicationHandler::new()
        .install_applications(&mut session, &config, None)
        .unwrap_err();

    assert!(!err.is_config_defect());
    // Packages were installed before the unit failed; cups never started
    assert_eq!(session.install_calls(), vec![vec!["bluez", "bluez-utils"]]);
}

#[test]
fn test_late_failure_keeps_earlier_steps() {
    let mut session = ScriptedSession::failing_on_package("cups");
    let config = ApplicationConfiguration::new()
        .with_audio(Audio::Pulseaudio)
        .with_print_service(true)
        .with_power_management(PowerManagement::Tuned);

    assert!(
        ApplicationHandler::new()
            .install_applications(&mut session, &config, None)
            .is_err()
    );
    assert_eq!(session.install_calls(), vec![vec!["pulseaudio"]]);
}
