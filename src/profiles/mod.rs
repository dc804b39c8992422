//! Installation profiles.
//!
//! A profile is a declarative description of a system role: its name, its
//! category and the packages it needs. Graphical profiles additionally carry a
//! [`DesktopProfile`] payload naming the windowing subsystem they run on and
//! the greeter they ship with by default.
//!
//! # Supported Profiles
//!
//! | Profile   | Category    | Display server | Greeter        |
//! |-----------|-------------|----------------|----------------|
//! | Minimal   | minimal     | -              | -              |
//! | Gnome     | desktop-env | Xorg           | gdm            |
//! | Kde       | desktop-env | Xorg           | sddm           |
//! | Mate      | desktop-env | Xorg           | lightdm        |
//! | Xfce      | desktop-env | Xorg           | lightdm        |
//! | Cinnamon  | desktop-env | Xorg           | lightdm        |
//! | Budgie    | desktop-env | Xorg           | lightdm-slick  |
//! | Cosmic    | desktop-env | Wayland        | cosmic-greeter |
//! | Hyprland  | window-mgr  | Wayland        | sddm           |
//! | Sway      | window-mgr  | Wayland        | lightdm        |
//! | I3        | window-mgr  | Xorg           | lightdm        |
//! | Sshd      | server      | -              | -              |
//! | Docker    | server      | -              | -              |
//! | Nginx     | server      | -              | -              |
//!
//! Adding a desktop means adding a variant and its three match arms; nothing
//! in `logic` changes.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

use crate::error::{Result, SoloInstallError};
use crate::types::{DisplayServer, GreeterType, ProfileType};

/// Desktop-specific extension carried by graphical profiles.
///
/// A desktop without a greeter cannot be expressed: `default_greeter` is not
/// optional.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DesktopProfile {
    pub display_server: DisplayServer,
    pub default_greeter: GreeterType,
}

impl DesktopProfile {
    pub const fn new(display_server: DisplayServer, default_greeter: GreeterType) -> Self {
        Self {
            display_server,
            default_greeter,
        }
    }
}

/// User-declared profile for setups the built-in list doesn't cover.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CustomProfile {
    pub name: String,
    pub packages: Vec<String>,
    #[serde(default)]
    pub services: Vec<String>,
    /// Present when the custom set is a graphical session.
    #[serde(default)]
    pub desktop: Option<DesktopProfile>,
}

/// Profile selection.
///
/// Built-in variants differ only in the data they return; the custom variant
/// carries its data inline.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[derive(EnumIter, EnumString, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Profile {
    /// Base system with networking and an editor, no GUI.
    #[default]
    Minimal,

    Gnome,
    Kde,
    Mate,
    Xfce,
    Cinnamon,
    Budgie,
    Cosmic,

    Hyprland,
    Sway,
    I3,

    Sshd,
    Docker,
    Nginx,

    #[strum(disabled)]
    Custom(CustomProfile),
}

impl Profile {
    /// Iterate the built-in profiles in menu order.
    pub fn builtin() -> impl Iterator<Item = Profile> {
        Profile::iter().filter(|p| !matches!(p, Profile::Custom(_)))
    }

    /// Display name.
    pub fn name(&self) -> &str {
        match self {
            Profile::Minimal => "Minimal",
            Profile::Gnome => "GNOME",
            Profile::Kde => "KDE Plasma",
            Profile::Mate => "Mate",
            Profile::Xfce => "Xfce4",
            Profile::Cinnamon => "Cinnamon",
            Profile::Budgie => "Budgie",
            Profile::Cosmic => "COSMIC",
            Profile::Hyprland => "Hyprland",
            Profile::Sway => "Sway",
            Profile::I3 => "i3-wm",
            Profile::Sshd => "sshd",
            Profile::Docker => "Docker",
            Profile::Nginx => "Nginx",
            Profile::Custom(custom) => custom.name.as_str(),
        }
    }

    /// Functional class, used to group profiles in selection menus.
    pub fn category(&self) -> ProfileType {
        match self {
            Profile::Minimal => ProfileType::Minimal,
            Profile::Gnome
            | Profile::Kde
            | Profile::Mate
            | Profile::Xfce
            | Profile::Cinnamon
            | Profile::Budgie
            | Profile::Cosmic => ProfileType::DesktopEnv,
            Profile::Hyprland | Profile::Sway | Profile::I3 => ProfileType::WindowMgr,
            Profile::Sshd | Profile::Docker | Profile::Nginx => ProfileType::Server,
            Profile::Custom(_) => ProfileType::Custom,
        }
    }

    /// Packages this profile installs, in installation order.
    ///
    /// Greeter and display-server packages are not included; the resolver
    /// adds them from [`Profile::desktop`].
    pub fn packages(&self) -> Vec<&str> {
        match self {
            Profile::Custom(custom) => custom.packages.iter().map(String::as_str).collect(),
            builtin => builtin_packages(builtin).to_vec(),
        }
    }

    /// Companion services enabled alongside the packages.
    pub fn services(&self) -> Vec<&str> {
        match self {
            Profile::Sshd => vec!["sshd.service"],
            Profile::Docker => vec!["docker.service"],
            Profile::Nginx => vec!["nginx.service"],
            Profile::Custom(custom) => custom.services.iter().map(String::as_str).collect(),
            _ => Vec::new(),
        }
    }

    /// Desktop extension, `None` for headless profiles.
    pub fn desktop(&self) -> Option<DesktopProfile> {
        use DisplayServer::{Wayland, Xorg};
        use GreeterType::*;

        let desktop = match self {
            Profile::Gnome => DesktopProfile::new(Xorg, Gdm),
            Profile::Kde => DesktopProfile::new(Xorg, Sddm),
            Profile::Mate => DesktopProfile::new(Xorg, Lightdm),
            Profile::Xfce => DesktopProfile::new(Xorg, Lightdm),
            Profile::Cinnamon => DesktopProfile::new(Xorg, Lightdm),
            Profile::Budgie => DesktopProfile::new(Xorg, LightdmSlick),
            Profile::Cosmic => DesktopProfile::new(Wayland, CosmicGreeter),
            Profile::Hyprland => DesktopProfile::new(Wayland, Sddm),
            Profile::Sway => DesktopProfile::new(Wayland, Lightdm),
            Profile::I3 => DesktopProfile::new(Xorg, Lightdm),
            Profile::Custom(custom) => return custom.desktop,
            Profile::Minimal | Profile::Sshd | Profile::Docker | Profile::Nginx => return None,
        };
        Some(desktop)
    }

    /// Greeter installed when the user doesn't pick one.
    pub fn default_greeter_type(&self) -> Option<GreeterType> {
        self.desktop().map(|d| d.default_greeter)
    }

    pub fn is_desktop(&self) -> bool {
        self.desktop().is_some()
    }

    /// Human-readable description for selection menus.
    pub fn description(&self) -> &'static str {
        match self {
            Profile::Minimal => "Minimal system without GUI",
            Profile::Gnome => "GNOME desktop environment",
            Profile::Kde => "KDE Plasma desktop",
            Profile::Mate => "MATE desktop, a continuation of GNOME 2",
            Profile::Xfce => "Xfce desktop environment (lightweight)",
            Profile::Cinnamon => "Cinnamon desktop environment",
            Profile::Budgie => "Budgie desktop environment",
            Profile::Cosmic => "COSMIC desktop environment (Wayland)",
            Profile::Hyprland => "Hyprland Wayland compositor (tiling)",
            Profile::Sway => "Sway Wayland compositor (i3-compatible)",
            Profile::I3 => "i3 window manager (X11 tiling)",
            Profile::Sshd => "OpenSSH server",
            Profile::Docker => "Docker container engine",
            Profile::Nginx => "Nginx web server",
            Profile::Custom(_) => "User-defined package set",
        }
    }

    /// Check the profile for configuration defects.
    ///
    /// Rejects an empty package list, duplicate or blank package names, blank
    /// service names and a custom profile without a name.
    pub fn validate(&self) -> Result<()> {
        if let Profile::Custom(custom) = self {
            if custom.name.trim().is_empty() {
                return Err(SoloInstallError::validation("Custom profile must have a name"));
            }
        }

        let packages = self.packages();
        if packages.is_empty() {
            return Err(SoloInstallError::validation(format!(
                "Profile '{}' has no packages",
                self.name()
            )));
        }

        let mut seen = HashSet::new();
        for package in &packages {
            if package.trim().is_empty() || package.contains(char::is_whitespace) {
                return Err(SoloInstallError::validation(format!(
                    "Profile '{}' has an invalid package name: {:?}",
                    self.name(),
                    package
                )));
            }
            if !seen.insert(*package) {
                return Err(SoloInstallError::validation(format!(
                    "Profile '{}' lists package '{}' more than once",
                    self.name(),
                    package
                )));
            }
        }

        for service in self.services() {
            if service.trim().is_empty() || service.contains(char::is_whitespace) {
                return Err(SoloInstallError::validation(format!(
                    "Profile '{}' has an invalid service name: {:?}",
                    self.name(),
                    service
                )));
            }
        }

        Ok(())
    }
}

fn builtin_packages(profile: &Profile) -> &'static [&'static str] {
    match profile {
        Profile::Minimal => &["networkmanager", "vim", "sudo"],

        Profile::Gnome => &["gnome", "gnome-tweaks"],

        Profile::Kde => &[
            "plasma-meta",
            "plasma-workspace",
            "konsole",
            "kate",
            "dolphin",
            "ark",
        ],

        Profile::Mate => &["mate", "mate-extra"],

        Profile::Xfce => &["xfce4", "xfce4-goodies", "pavucontrol", "gvfs", "xarchiver"],

        Profile::Cinnamon => &[
            "cinnamon",
            "system-config-printer",
            "gnome-keyring",
            "gnome-terminal",
            "engrampa",
            "gnome-screenshot",
            "gvfs-smb",
            "xed",
            "xdg-user-dirs-gtk",
        ],

        Profile::Budgie => &[
            "budgie",
            "arc-gtk-theme",
            "mate-terminal",
            "nemo",
            "papirus-icon-theme",
        ],

        Profile::Cosmic => &["cosmic", "xdg-user-dirs"],

        Profile::Hyprland => &[
            "hyprland",
            "uwsm",
            "xdg-desktop-portal-hyprland",
            "qt5-wayland",
            "qt6-wayland",
            "polkit-kde-agent",
            // Session tools
            "kitty",
            "wofi",
            "dunst",
            "dolphin",
            "grim",
            "slurp",
        ],

        Profile::Sway => &[
            "sway",
            "swaybg",
            "swaylock",
            "swayidle",
            "waybar",
            "wmenu",
            "foot",
            "brightnessctl",
            "grim",
            "slurp",
            "pavucontrol",
            "xorg-xwayland",
        ],

        Profile::I3 => &[
            "i3-wm",
            "i3lock",
            "i3status",
            "i3blocks",
            "xss-lock",
            "xterm",
            "dmenu",
        ],

        Profile::Sshd => &["openssh"],
        Profile::Docker => &["docker"],
        Profile::Nginx => &["nginx"],

        Profile::Custom(_) => &[],
    }
}
