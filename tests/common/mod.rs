//! Shared test session with scripted failures.

#![allow(dead_code)]

use soloinstall::error::{Result, SoloInstallError};
use soloinstall::{DryRunSession, InstallerSession, SessionAction, User};

/// Records like `DryRunSession`, but fails when asked to install a given
/// package or enable a given unit. Failed actions are not recorded.
#[derive(Debug, Default)]
pub struct ScriptedSession {
    inner: DryRunSession,
    fail_on_package: Option<String>,
    fail_on_service: Option<String>,
}

impl ScriptedSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_on_package(package: &str) -> Self {
        Self {
            fail_on_package: Some(package.to_string()),
            ..Self::default()
        }
    }

    pub fn failing_on_service(service: &str) -> Self {
        Self {
            fail_on_service: Some(service.to_string()),
            ..Self::default()
        }
    }

    pub fn actions(&self) -> &[SessionAction] {
        self.inner.actions()
    }

    pub fn installed_packages(&self) -> Vec<&str> {
        self.inner.installed_packages()
    }

    /// Install actions only, as package lists.
    pub fn install_calls(&self) -> Vec<Vec<String>> {
        self.actions()
            .iter()
            .filter_map(|a| match a {
                SessionAction::InstallPackages { packages } => Some(packages.clone()),
                _ => None,
            })
            .collect()
    }

    /// Usernames that received a user unit, in order.
    pub fn user_service_targets(&self) -> Vec<String> {
        self.actions()
            .iter()
            .filter_map(|a| match a {
                SessionAction::EnableUserService { username, .. } => Some(username.clone()),
                _ => None,
            })
            .collect()
    }
}

impl InstallerSession for ScriptedSession {
    fn add_packages(&mut self, packages: &[&str]) -> Result<()> {
        if let Some(bad) = &self.fail_on_package {
            if packages.contains(&bad.as_str()) {
                return Err(SoloInstallError::installation(format!(
                    "target not found: {}",
                    bad
                )));
            }
        }
        self.inner.add_packages(packages)
    }

    fn enable_service(&mut self, service: &str) -> Result<()> {
        if self.fail_on_service.as_deref() == Some(service) {
            return Err(SoloInstallError::installation(format!(
                "Failed to enable unit: {}",
                service
            )));
        }
        self.inner.enable_service(service)
    }

    fn enable_user_service(&mut self, user: &User, service: &str) -> Result<()> {
        self.inner.enable_user_service(user, service)
    }
}

pub fn users(names: &[&str]) -> Vec<User> {
    names.iter().map(|n| User::new(n)).collect()
}
