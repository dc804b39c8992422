//! Application configuration.
//!
//! One optional section per toggleable subsystem. A missing section means
//! "not requested"; there is no default-on behaviour.

use serde::{Deserialize, Serialize};

use crate::types::{Audio, PowerManagement};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BluetoothConfiguration {
    pub enabled: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AudioConfiguration {
    pub audio: Audio,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PrintServiceConfiguration {
    pub enabled: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PowerManagementConfiguration {
    pub power_management: PowerManagement,
}

/// Optional applications requested by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ApplicationConfiguration {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bluetooth_config: Option<BluetoothConfiguration>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio_config: Option<AudioConfiguration>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub print_service_config: Option<PrintServiceConfiguration>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub power_management_config: Option<PowerManagementConfiguration>,
}

impl ApplicationConfiguration {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bluetooth(mut self, enabled: bool) -> Self {
        self.bluetooth_config = Some(BluetoothConfiguration { enabled });
        self
    }

    pub fn with_audio(mut self, audio: Audio) -> Self {
        self.audio_config = Some(AudioConfiguration { audio });
        self
    }

    pub fn with_print_service(mut self, enabled: bool) -> Self {
        self.print_service_config = Some(PrintServiceConfiguration { enabled });
        self
    }

    pub fn with_power_management(mut self, power_management: PowerManagement) -> Self {
        self.power_management_config = Some(PowerManagementConfiguration { power_management });
        self
    }

    pub fn bluetooth_requested(&self) -> bool {
        self.bluetooth_config.is_some_and(|c| c.enabled)
    }

    /// Selected audio server, `None` when absent or explicitly disabled.
    pub fn requested_audio(&self) -> Option<Audio> {
        self.audio_config
            .map(|c| c.audio)
            .filter(|audio| *audio != Audio::NoAudio)
    }

    pub fn print_service_requested(&self) -> bool {
        self.print_service_config.is_some_and(|c| c.enabled)
    }

    pub fn requested_power_management(&self) -> Option<PowerManagement> {
        self.power_management_config.map(|c| c.power_management)
    }

    /// True when no section requests anything.
    pub fn is_empty(&self) -> bool {
        !self.bluetooth_requested()
            && self.requested_audio().is_none()
            && !self.print_service_requested()
            && self.requested_power_management().is_none()
    }
}
