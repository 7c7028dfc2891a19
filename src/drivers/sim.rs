//! Simulated bench drivers.
//!
//! Each sim records what the controller commanded (relay levels, focuser
//! op sequence, display frames) and returns operator-settable sensor
//! values, so tests and the console binary can run without hardware.

use super::{
    AtmosphereSensor, DisplayFrame, DisplayPanel, FocuserDrive, InstrumentHal, PeripheralBus,
    ProbeResponse, SwitchBank, TemperatureBus, WindSensor,
};
use crate::state::TEMP_CHANNEL_COUNT;

pub const MAX_SWITCH_LINES: usize = 32;

/// Sentinel the vendor temperature library reports for a missing probe.
pub const DISCONNECTED_TEMP_C: f32 = -127.0;

#[derive(Debug, Default)]
pub struct SimSwitchBank {
    levels: [bool; MAX_SWITCH_LINES],
    writes: u32,
}

impl SimSwitchBank {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn level(&self, pin: u8) -> bool {
        self.levels.get(pin as usize).copied().unwrap_or(false)
    }

    pub fn write_count(&self) -> u32 {
        self.writes
    }
}

impl SwitchBank for SimSwitchBank {
    fn set_line(&mut self, pin: u8, level: bool) {
        if let Some(slot) = self.levels.get_mut(pin as usize) {
            *slot = level;
        }
        self.writes = self.writes.wrapping_add(1);
    }
}

/// One recorded focuser driver operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocuserOp {
    Step(i32),
    Release,
}

#[derive(Debug, Default)]
pub struct SimFocuser {
    ops: Vec<FocuserOp>,
    position: i64,
}

impl SimFocuser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Full operation log since construction, in issue order.
    pub fn ops(&self) -> &[FocuserOp] {
        &self.ops
    }

    /// Net step position (signed sum of all step commands).
    pub fn position(&self) -> i64 {
        self.position
    }
}

impl FocuserDrive for SimFocuser {
    fn step(&mut self, steps: i32) {
        self.ops.push(FocuserOp::Step(steps));
        self.position += i64::from(steps);
    }

    fn release(&mut self) {
        self.ops.push(FocuserOp::Release);
    }
}

#[derive(Debug, Default)]
pub struct SimDisplay {
    backlight: bool,
    frames: Vec<DisplayFrame>,
}

impl SimDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn backlight(&self) -> bool {
        self.backlight
    }

    pub fn last_frame(&self) -> Option<&DisplayFrame> {
        self.frames.last()
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }
}

impl DisplayPanel for SimDisplay {
    fn render(&mut self, frame: &DisplayFrame) {
        self.frames.push(frame.clone());
    }

    fn set_backlight(&mut self, on: bool) {
        self.backlight = on;
    }
}

#[derive(Debug)]
pub struct SimTempBus {
    readings: [f32; TEMP_CHANNEL_COUNT],
    request_count: u32,
}

impl Default for SimTempBus {
    fn default() -> Self {
        Self {
            readings: [20.0; TEMP_CHANNEL_COUNT],
            request_count: 0,
        }
    }
}

impl SimTempBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_reading(&mut self, index: usize, value_c: f32) {
        if let Some(slot) = self.readings.get_mut(index) {
            *slot = value_c;
        }
    }

    pub fn set_all(&mut self, values: [f32; TEMP_CHANNEL_COUNT]) {
        self.readings = values;
    }

    /// How many bus-wide conversions have been requested.
    pub fn request_count(&self) -> u32 {
        self.request_count
    }
}

impl TemperatureBus for SimTempBus {
    fn request_temperatures(&mut self) {
        self.request_count = self.request_count.wrapping_add(1);
    }

    fn temp_c_by_index(&mut self, index: usize) -> f32 {
        self.readings
            .get(index)
            .copied()
            .unwrap_or(DISCONNECTED_TEMP_C)
    }

    fn device_count(&self) -> usize {
        TEMP_CHANNEL_COUNT
    }
}

#[derive(Debug)]
pub struct SimAtmosphere {
    temperature_c: f32,
    humidity_pct: f32,
}

impl Default for SimAtmosphere {
    fn default() -> Self {
        // Defaults sit inside the default interlock hysteresis band so a
        // fresh bench does not trip the lamp on its own.
        Self {
            temperature_c: 15.0,
            humidity_pct: 55.0,
        }
    }
}

impl SimAtmosphere {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_temperature_c(&mut self, value: f32) {
        self.temperature_c = value;
    }

    pub fn set_humidity_pct(&mut self, value: f32) {
        self.humidity_pct = value;
    }
}

impl AtmosphereSensor for SimAtmosphere {
    fn read_temperature_c(&mut self) -> f32 {
        self.temperature_c
    }

    fn read_humidity_pct(&mut self) -> f32 {
        self.humidity_pct
    }
}

#[derive(Debug, Default)]
pub struct SimWind {
    speed_kmh: f32,
}

impl SimWind {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_speed_kmh(&mut self, value: f32) {
        self.speed_kmh = value;
    }
}

impl WindSensor for SimWind {
    fn read_speed_kmh(&mut self) -> f32 {
        self.speed_kmh
    }
}

#[derive(Debug, Default)]
pub struct SimPeripheralBus {
    responders: Vec<u8>,
    faulted: Vec<u8>,
}

impl SimPeripheralBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_responders(addresses: &[u8]) -> Self {
        Self {
            responders: addresses.to_vec(),
            faulted: Vec::new(),
        }
    }

    pub fn add_responder(&mut self, address: u8) {
        self.responders.push(address);
    }

    pub fn add_faulted(&mut self, address: u8) {
        self.faulted.push(address);
    }
}

impl PeripheralBus for SimPeripheralBus {
    fn probe(&mut self, address: u8) -> ProbeResponse {
        if self.responders.contains(&address) {
            ProbeResponse::Acked
        } else if self.faulted.contains(&address) {
            ProbeResponse::Error
        } else {
            ProbeResponse::Silent
        }
    }
}

/// Marker binding the sim drivers into one bench.
#[derive(Debug)]
pub enum SimHal {}

impl InstrumentHal for SimHal {
    type Switches = SimSwitchBank;
    type Focuser = SimFocuser;
    type Display = SimDisplay;
    type TempBus = SimTempBus;
    type Atmosphere = SimAtmosphere;
    type Wind = SimWind;
    type Bus = SimPeripheralBus;
}
