//! Status report rendering.
//!
//! Read-only over the state store; the agent refreshes channel values
//! through the controller immediately before calling in here, so the
//! telescope section never serves stale readings.

use crate::state::DeviceStateStore;
use core::fmt::Write;

const RULE: &str = "=========================";

fn power_label(on: bool) -> &'static str {
    if on {
        "Power-ON"
    } else {
        "Power-OFF"
    }
}

/// Full consolidated status block: devices, atmosphere, telescope
/// channels in fixed bus order.
pub fn status_report(state: &DeviceStateStore) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(out, "Observatory Status");
    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(out, "=======  Devices   ======");
    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(out, "IR-LAMP  : {}", power_label(state.lamp_on));
    let _ = writeln!(out, "QHY-CCD  : {}", power_label(state.camera_on));
    let _ = writeln!(out, "BACKLIGHT: {}", power_label(state.backlight_on));
    let _ = writeln!(out, "====== Atmosphere =======");
    let _ = writeln!(out, "Tatm    : {:.2}C", state.atmosphere_temp_c);
    let _ = writeln!(out, "Humidity: {:.2}%", state.atmosphere_humidity_pct);
    let _ = writeln!(out, "Wind    : {:.2}km/h", state.wind_speed_kmh);
    let _ = writeln!(out, "Wind max: {:.2}km/h", state.max_wind_speed_kmh);
    let _ = writeln!(out, "======= Telescope =======");
    write_channels(&mut out, state);
    let _ = write!(out, "{RULE}");
    out
}

/// Channel readings only.
pub fn temperature_report(state: &DeviceStateStore) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "==================");
    write_channels(&mut out, state);
    let trimmed = out.trim_end().len();
    out.truncate(trimmed);
    out
}

fn write_channels(out: &mut String, state: &DeviceStateStore) {
    for channel in &state.channels {
        let _ = writeln!(out, "Sensor {:<9}: {:.2}C", channel.label, channel.value_c);
    }
}
