//! Device-state controller: the single mutation funnel.
//!
//! Every write to the [`DeviceStateStore`] happens inside one of the
//! methods here, together with the matching physical actuation, so the
//! stored booleans can never diverge from the last commanded levels.

use crate::config::ControllerConfig;
use crate::drivers::{DisplayFrame, DisplayPanel, FocuserDrive, InstrumentHal, SwitchBank};
use crate::interlock::LampInterlock;
use crate::state::DeviceStateStore;
use tracing::info;

pub struct DeviceController<H: InstrumentHal> {
    switches: H::Switches,
    focuser: H::Focuser,
    display: H::Display,
    state: DeviceStateStore,
    interlock: LampInterlock,
    interlock_trips: u32,
    camera_pin: u8,
    lamp_pin: u8,
}

impl<H: InstrumentHal> DeviceController<H> {
    /// Build the controller and run the power-up sequence: both relays
    /// off, focuser coils released, backlight on, splash frame shown.
    pub fn new(
        config: &ControllerConfig,
        switches: H::Switches,
        focuser: H::Focuser,
        display: H::Display,
    ) -> Self {
        let mut controller = Self {
            switches,
            focuser,
            display,
            state: DeviceStateStore::new(),
            interlock: LampInterlock::new(config.interlock),
            interlock_trips: 0,
            camera_pin: config.camera_pin,
            lamp_pin: config.lamp_pin,
        };

        controller.set_camera(false);
        controller.set_lamp(false);
        controller.focuser.release();
        controller.set_backlight(true);
        controller.display.render(&DisplayFrame::splash());
        controller
    }

    pub fn state(&self) -> &DeviceStateStore {
        &self.state
    }

    pub fn set_camera(&mut self, on: bool) {
        self.switches.set_line(self.camera_pin, on);
        self.state.camera_on = on;
        info!("guide camera relay {}", if on { "on" } else { "off" });
    }

    pub fn set_lamp(&mut self, on: bool) {
        self.switches.set_line(self.lamp_pin, on);
        self.state.lamp_on = on;
        info!("IR lamp {}", if on { "on" } else { "off" });
    }

    pub fn set_backlight(&mut self, on: bool) {
        self.display.set_backlight(on);
        self.state.backlight_on = on;
    }

    /// Flip the stored state, then apply it. Returns the new level.
    pub fn toggle_camera(&mut self) -> bool {
        let on = !self.state.camera_on;
        self.set_camera(on);
        on
    }

    pub fn toggle_lamp(&mut self) -> bool {
        let on = !self.state.lamp_on;
        self.set_lamp(on);
        on
    }

    pub fn toggle_backlight(&mut self) -> bool {
        let on = !self.state.backlight_on;
        self.set_backlight(on);
        on
    }

    /// Blocking move: issues the full step count (sign = direction),
    /// then de-energizes all coil lines so the idle motor draws nothing.
    /// The count is passed through unvalidated.
    pub fn move_focuser(&mut self, steps: i32) {
        self.focuser.step(steps);
        self.focuser.release();
        info!("focuser moved {} steps", steps);
    }

    /// Store a wind sample and track the running peak. No domain check;
    /// negative samples are accepted. A NaN sample never raises the
    /// peak.
    pub fn record_wind_sample(&mut self, speed_kmh: f32) {
        self.state.wind_speed_kmh = speed_kmh;
        if speed_kmh > self.state.max_wind_speed_kmh {
            self.state.max_wind_speed_kmh = speed_kmh;
        }
    }

    pub fn record_atmosphere(&mut self, temp_c: f32, humidity_pct: f32) {
        self.state.atmosphere_temp_c = temp_c;
        self.state.atmosphere_humidity_pct = humidity_pct;
    }

    /// Evaluate the humidity interlock against the stored sample and
    /// force the lamp if it trips. Re-applying the current level is
    /// fine; only actual flips count as trips.
    pub fn apply_interlock(&mut self) {
        let humidity = self.state.atmosphere_humidity_pct;
        if let Some(force) = self.interlock.evaluate(humidity) {
            if force != self.state.lamp_on {
                self.interlock_trips = self.interlock_trips.wrapping_add(1);
                info!(
                    "humidity interlock forcing lamp {} at {:.1}% RH",
                    if force { "on" } else { "off" },
                    humidity
                );
            }
            self.set_lamp(force);
        }
    }

    /// Overwrite channel values in fixed bus order. Extra readings are
    /// dropped; missing ones leave the old value in place.
    pub fn refresh_channels(&mut self, readings: &[f32]) {
        for (channel, value) in self.state.channels.iter_mut().zip(readings) {
            channel.value_c = *value;
        }
    }

    /// Push the ambient-conditions frame to the front panel.
    pub fn render_environment(&mut self) {
        let frame = DisplayFrame::environment(
            self.state.atmosphere_temp_c,
            self.state.atmosphere_humidity_pct,
        );
        self.display.render(&frame);
    }

    pub fn interlock(&self) -> &LampInterlock {
        &self.interlock
    }

    /// How many times the interlock actually flipped the lamp.
    pub fn interlock_trips(&self) -> u32 {
        self.interlock_trips
    }

    pub fn switches(&self) -> &H::Switches {
        &self.switches
    }

    pub fn focuser(&self) -> &H::Focuser {
        &self.focuser
    }

    pub fn display(&self) -> &H::Display {
        &self.display
    }
}
