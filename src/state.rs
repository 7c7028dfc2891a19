//! Controller state model.

use heapless::Vec;
use static_assertions::const_assert;

/// Number of probes on the shared telescope temperature bus.
pub const TEMP_CHANNEL_COUNT: usize = 5;

/// Channel labels in physical bus order. The index ties each label to a
/// sensor position on the telescope, so the order is load-bearing.
pub const TEMP_CHANNEL_LABELS: &[&str] = &["CCD-QSI", "CCD-GUIDE", "Opt.-Tube", "Dew-Zap", "Opt.-Edg"];

const_assert!(TEMP_CHANNEL_LABELS.len() == TEMP_CHANNEL_COUNT);

/// One temperature probe position: fixed label, last-read value.
#[derive(Debug, Clone, PartialEq)]
pub struct TempChannel {
    pub label: &'static str,
    pub value_c: f32,
}

/// Single source of truth for everything the controller commands or has
/// sampled. Owned by `DeviceController`; every mutation goes through a
/// controller method, so each boolean always mirrors the last commanded
/// value.
#[derive(Debug, Clone)]
pub struct DeviceStateStore {
    pub camera_on: bool,
    pub lamp_on: bool,
    pub backlight_on: bool,
    /// Last atmospheric sample; NaN until the first read.
    pub atmosphere_temp_c: f32,
    pub atmosphere_humidity_pct: f32,
    pub wind_speed_kmh: f32,
    /// Running peak, monotonically non-decreasing for the controller's
    /// lifetime. Never reset.
    pub max_wind_speed_kmh: f32,
    /// Fixed-size channel table; no channel is added or removed after
    /// construction and the order never changes.
    pub channels: Vec<TempChannel, TEMP_CHANNEL_COUNT>,
}

impl DeviceStateStore {
    pub fn new() -> Self {
        let mut channels = Vec::new();
        for &label in TEMP_CHANNEL_LABELS {
            let _ = channels.push(TempChannel {
                label,
                value_c: f32::NAN,
            });
        }

        Self {
            camera_on: false,
            lamp_on: false,
            backlight_on: false,
            atmosphere_temp_c: f32::NAN,
            atmosphere_humidity_pct: f32::NAN,
            wind_speed_kmh: 0.0,
            max_wind_speed_kmh: 0.0,
            channels,
        }
    }
}

impl Default for DeviceStateStore {
    fn default() -> Self {
        Self::new()
    }
}
