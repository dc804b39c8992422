//! Installer session: the executor behind every package and service action.
//!
//! Profiles and applications never touch the target system directly. They
//! describe what they need through [`InstallerSession`], which keeps the
//! orchestration logic testable and lets the same plan run for real
//! ([`ChrootSession`]) or be previewed ([`DryRunSession`]).
//!
//! # Failure contract
//!
//! Every operation returns `Err` when the action did not take effect. Callers
//! propagate it unchanged; the session is the only place that knows how an
//! action failed.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Component, Path, PathBuf};
use std::process::{Command, Stdio};
use tracing::{debug, info, warn};

use crate::error::{Result, SoloInstallError};
use crate::users::User;

/// User units shipped by packages live here inside the target root.
const USER_UNIT_DIR: &str = "/usr/lib/systemd/user";

/// Operations the provisioning layer needs from the installer.
pub trait InstallerSession {
    /// Install packages into the target system.
    fn add_packages(&mut self, packages: &[&str]) -> Result<()>;

    /// Enable a system-level systemd unit.
    fn enable_service(&mut self, service: &str) -> Result<()>;

    /// Enable a user-level systemd unit for one account.
    fn enable_user_service(&mut self, user: &User, service: &str) -> Result<()>;
}

/// One action performed (or planned) against a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum SessionAction {
    InstallPackages { packages: Vec<String> },
    EnableService { service: String },
    EnableUserService { username: String, service: String },
}

impl fmt::Display for SessionAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InstallPackages { packages } => write!(f, "install {}", packages.join(" ")),
            Self::EnableService { service } => write!(f, "enable {}", service),
            Self::EnableUserService { username, service } => {
                write!(f, "enable {} for user {}", service, username)
            }
        }
    }
}

// ============================================================================
// Dry run
// ============================================================================

/// Session that records actions instead of executing them.
///
/// Used for `--dry-run` previews and as the observable session in tests.
#[derive(Debug, Default)]
pub struct DryRunSession {
    actions: Vec<SessionAction>,
}

impl DryRunSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Actions recorded so far, in call order.
    pub fn actions(&self) -> &[SessionAction] {
        &self.actions
    }

    pub fn into_actions(self) -> Vec<SessionAction> {
        self.actions
    }

    /// Every package across all install actions, in call order.
    pub fn installed_packages(&self) -> Vec<&str> {
        self.actions
            .iter()
            .filter_map(|action| match action {
                SessionAction::InstallPackages { packages } => Some(packages),
                _ => None,
            })
            .flatten()
            .map(String::as_str)
            .collect()
    }
}

impl InstallerSession for DryRunSession {
    fn add_packages(&mut self, packages: &[&str]) -> Result<()> {
        debug!("dry-run: install {:?}", packages);
        self.actions.push(SessionAction::InstallPackages {
            packages: packages.iter().map(|p| p.to_string()).collect(),
        });
        Ok(())
    }

    fn enable_service(&mut self, service: &str) -> Result<()> {
        debug!("dry-run: enable {}", service);
        self.actions.push(SessionAction::EnableService {
            service: service.to_string(),
        });
        Ok(())
    }

    fn enable_user_service(&mut self, user: &User, service: &str) -> Result<()> {
        debug!("dry-run: enable {} for {}", service, user.username);
        self.actions.push(SessionAction::EnableUserService {
            username: user.username.clone(),
            service: service.to_string(),
        });
        Ok(())
    }
}

// ============================================================================
// arch-chroot
// ============================================================================

/// Session executing actions inside a mounted target root via `arch-chroot`.
#[derive(Debug, Clone)]
pub struct ChrootSession {
    target: PathBuf,
}

impl ChrootSession {
    /// Create a session for the system mounted at `target` (e.g. `/mnt`).
    pub fn new<P: AsRef<Path>>(target: P) -> Self {
        Self {
            target: target.as_ref().to_path_buf(),
        }
    }

    pub fn target(&self) -> &Path {
        &self.target
    }

    /// pacman invocation used inside the chroot.
    pub fn pacman_args(packages: &[&str]) -> Vec<String> {
        let mut args: Vec<String> = ["pacman", "-S", "--needed", "--noconfirm"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        args.extend(packages.iter().map(|p| p.to_string()));
        args
    }

    /// Run a command inside the target root and fail on non-zero exit.
    fn run_in_chroot(&self, args: &[String]) -> Result<()> {
        info!("arch-chroot {} {}", self.target.display(), args.join(" "));

        let output = Command::new("arch-chroot")
            .arg(&self.target)
            .args(args)
            .stdin(Stdio::null())
            .output()?;

        if output.status.success() {
            return Ok(());
        }

        let stderr = String::from_utf8_lossy(&output.stderr);
        let code = output.status.code().unwrap_or(-1);
        warn!("'{}' failed with exit code {}", args.join(" "), code);
        Err(SoloInstallError::installation(format!(
            "'{}' failed (exit code {}): {}",
            args.join(" "),
            code,
            stderr.trim()
        )))
    }

    /// Host path of `path` inside the target root.
    ///
    /// Paths that would climb out of the root are refused.
    fn in_target(&self, path: &Path) -> Result<PathBuf> {
        let mut resolved = self.target.clone();
        for component in path.components() {
            match component {
                Component::RootDir | Component::CurDir => {}
                Component::Normal(part) => resolved.push(part),
                Component::ParentDir | Component::Prefix(_) => {
                    return Err(SoloInstallError::validation(format!(
                        "Path {} leaves the target root",
                        path.display()
                    )));
                }
            }
        }
        Ok(resolved)
    }

    /// Create the `*.wants` symlink that enables a user unit.
    ///
    /// Socket units hook into `sockets.target`, everything else into
    /// `default.target`. An existing link is left untouched.
    pub fn link_user_unit(&self, user: &User, service: &str) -> Result<PathBuf> {
        let wants = if service.ends_with(".socket") {
            "sockets.target.wants"
        } else {
            "default.target.wants"
        };

        let dir = self
            .in_target(&user.home_dir())?
            .join(".config/systemd/user")
            .join(wants);
        std::fs::create_dir_all(&dir)?;

        let link = dir.join(service);
        if link.symlink_metadata().is_ok() {
            debug!("{} already enabled for {}", service, user.username);
            return Ok(link);
        }

        std::os::unix::fs::symlink(Path::new(USER_UNIT_DIR).join(service), &link)?;
        Ok(link)
    }
}

impl InstallerSession for ChrootSession {
    fn add_packages(&mut self, packages: &[&str]) -> Result<()> {
        if packages.is_empty() {
            warn!("add_packages called with empty package list");
            return Ok(());
        }
        self.run_in_chroot(&Self::pacman_args(packages))
    }

    fn enable_service(&mut self, service: &str) -> Result<()> {
        self.run_in_chroot(&["systemctl".to_string(), "enable".to_string(), service.to_string()])
    }

    fn enable_user_service(&mut self, user: &User, service: &str) -> Result<()> {
        let link = self.link_user_unit(user, service)?;
        info!("Enabled {} for {} ({})", service, user.username, link.display());

        // The link was created as root; hand the config tree back to the user
        let config_dir = user.home_dir().join(".config");
        self.run_in_chroot(&[
            "chown".to_string(),
            "-R".to_string(),
            format!("{}:", user.username),
            config_dir.display().to_string(),
        ])
    }
}
