//! Type-safe selection enums for soloinstall
//!
//! Every choice the user can make (profile category, greeter, audio server,
//! power daemon) is a closed Rust enum. An unknown value in a config file is
//! rejected at parse time instead of silently falling back to a default.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Functional class of a profile, used to group choices in selection menus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum ProfileType {
    /// Base system only, no GUI
    Minimal,
    /// Full desktop environment (GNOME, KDE, ...)
    DesktopEnv,
    /// Standalone window manager or compositor
    WindowMgr,
    /// Headless server role
    Server,
    /// User-declared package set
    Custom,
}

impl ProfileType {
    /// Human-readable heading for selection menus.
    pub fn heading(&self) -> &'static str {
        match self {
            Self::Minimal => "Minimal",
            Self::DesktopEnv => "Desktop environments",
            Self::WindowMgr => "Window managers",
            Self::Server => "Server roles",
            Self::Custom => "Custom",
        }
    }
}

/// Windowing subsystem a graphical profile depends on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum DisplayServer {
    Xorg,
    Wayland,
}

impl DisplayServer {
    /// Packages the windowing subsystem itself requires.
    ///
    /// Wayland compositors pull their own libraries, so only Xorg adds
    /// anything here.
    pub fn packages(&self) -> &'static [&'static str] {
        match self {
            Self::Xorg => &["xorg-server"],
            Self::Wayland => &[],
        }
    }
}

/// Login/display manager service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum GreeterType {
    Gdm,
    Sddm,
    Lightdm,
    LightdmSlick,
    Ly,
    CosmicGreeter,
}

impl GreeterType {
    /// Packages providing the greeter.
    pub fn packages(&self) -> &'static [&'static str] {
        match self {
            Self::Gdm => &["gdm"],
            Self::Sddm => &["sddm"],
            Self::Lightdm => &["lightdm", "lightdm-gtk-greeter"],
            Self::LightdmSlick => &["lightdm", "lightdm-slick-greeter"],
            Self::Ly => &["ly"],
            Self::CosmicGreeter => &["cosmic-greeter"],
        }
    }

    /// systemd unit to enable so the greeter starts at boot.
    pub fn service(&self) -> &'static str {
        match self {
            Self::Gdm => "gdm.service",
            Self::Sddm => "sddm.service",
            // Both lightdm flavours share the daemon; only the greeter binary differs
            Self::Lightdm | Self::LightdmSlick => "lightdm.service",
            Self::Ly => "ly.service",
            Self::CosmicGreeter => "cosmic-greeter.service",
        }
    }
}

/// Audio server selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Audio {
    #[default]
    #[serde(rename = "none")]
    #[strum(serialize = "none")]
    NoAudio,
    Pipewire,
    Pulseaudio,
}

/// Power management daemon selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum PowerManagement {
    #[default]
    PowerProfilesDaemon,
    Tuned,
}
