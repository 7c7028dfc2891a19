//! Controller configuration.
//!
//! The interlock thresholds changed between bench revisions (70/50,
//! 80/50, and one build with the policy disabled outright), so both
//! thresholds and the enable flag are configuration rather than
//! constants. Defaults match the 70/50 revision.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

pub const DEFAULT_CAMERA_PIN: u8 = 7;
pub const DEFAULT_LAMP_PIN: u8 = 8;
pub const DEFAULT_HUMIDITY_ON_PCT: f32 = 70.0;
pub const DEFAULT_HUMIDITY_OFF_PCT: f32 = 50.0;

/// Humidity/lamp interlock policy parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InterlockConfig {
    pub enabled: bool,
    /// Lamp is forced on when humidity rises above this.
    pub humidity_on_pct: f32,
    /// Lamp is forced off when humidity drops below this.
    pub humidity_off_pct: f32,
}

impl Default for InterlockConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            humidity_on_pct: DEFAULT_HUMIDITY_ON_PCT,
            humidity_off_pct: DEFAULT_HUMIDITY_OFF_PCT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControllerConfig {
    /// Relay line driving the guide-camera supply.
    pub camera_pin: u8,
    /// Relay line driving the IR dew-heater lamp.
    pub lamp_pin: u8,
    pub interlock: InterlockConfig,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            camera_pin: DEFAULT_CAMERA_PIN,
            lamp_pin: DEFAULT_LAMP_PIN,
            interlock: InterlockConfig::default(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] serde_json::Error),
}

impl ControllerConfig {
    /// Load a JSON config file. Missing fields fall back to defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }
}
