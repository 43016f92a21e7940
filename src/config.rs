//! Device Configuration.
//!
//! Loads the organization/speed selection and the system topology
//! (channel and rank counts) from TOML. Bank, row, and column counts are
//! fixed by the chosen organization and are not configurable.

use serde::Deserialize;

use crate::common::ModelError;
use crate::ddr3::Ddr3;

const DEFAULT_ORG: &str = "DDR3_8Gb_x8";
const DEFAULT_SPEED: &str = "DDR3_1600K";
const DEFAULT_CHANNELS: usize = 1;
const DEFAULT_RANKS: usize = 1;

/// Top-level configuration for the DDR3 model.
#[derive(Debug, Deserialize)]
pub struct Config {
    pub device: DeviceConfig,
}

/// Device selection and topology settings.
#[derive(Debug, Deserialize)]
pub struct DeviceConfig {
    /// Canonical organization name, e.g. `DDR3_8Gb_x8`.
    #[serde(default = "default_org")]
    pub org: String,

    /// Canonical speed-bin name, e.g. `DDR3_1600K`.
    #[serde(default = "default_speed")]
    pub speed: String,

    /// Number of channels in the simulated system.
    #[serde(default = "default_channels")]
    pub channels: usize,

    /// Number of ranks per channel.
    #[serde(default = "default_ranks")]
    pub ranks: usize,
}

impl Config {
    /// Parses a configuration from a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Constructs the device model this configuration describes.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::UnknownParameter`] if the organization or
    /// speed name matches no table key.
    pub fn build_device(&self) -> Result<Ddr3, ModelError> {
        let mut device = Ddr3::from_names(&self.device.org, &self.device.speed)?;
        device.set_channel_number(self.device.channels);
        device.set_rank_number(self.device.ranks);
        Ok(device)
    }
}

fn default_org() -> String {
    DEFAULT_ORG.to_string()
}

fn default_speed() -> String {
    DEFAULT_SPEED.to_string()
}

fn default_channels() -> usize {
    DEFAULT_CHANNELS
}

fn default_ranks() -> usize {
    DEFAULT_RANKS
}
