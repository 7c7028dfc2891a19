//! Humidity/lamp interlock policy.

use crate::config::InterlockConfig;

/// Hysteresis-band interlock coupling atmospheric humidity to the IR
/// dew-heater lamp. Above the high threshold the lamp is forced on,
/// below the low threshold forced off; inside the band the last
/// commanded state is retained so the lamp does not chatter around a
/// single cutoff.
#[derive(Debug, Clone)]
pub struct LampInterlock {
    config: InterlockConfig,
}

impl LampInterlock {
    pub fn new(config: InterlockConfig) -> Self {
        Self { config }
    }

    /// Evaluate one humidity sample. `Some(level)` forces the lamp to
    /// `level`; `None` retains the current state. A NaN sample (sensor
    /// not yet read, or a failed read) never trips either side.
    pub fn evaluate(&self, humidity_pct: f32) -> Option<bool> {
        if !self.config.enabled {
            return None;
        }

        if humidity_pct > self.config.humidity_on_pct {
            Some(true)
        } else if humidity_pct < self.config.humidity_off_pct {
            Some(false)
        } else {
            None
        }
    }

    pub fn config(&self) -> &InterlockConfig {
        &self.config
    }
}
