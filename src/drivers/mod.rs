//! Collaborator seams for the vendor sensor/actuator drivers.
//!
//! The controller core never talks to hardware directly: every external
//! driver (relay bank, stepper, character display, temperature bus,
//! atmosphere sensor, anemometer, peripheral bus) sits behind one of the
//! narrow traits below. [`sim`] provides bench implementations used by the
//! console binary and the test suite.

pub mod sim;

use arrayvec::ArrayString;

/// Character width of the front-panel display (16x2 module).
pub const DISPLAY_COLS: usize = 16;

/// One rendered frame for the 16x2 front-panel display.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisplayFrame {
    pub top: ArrayString<DISPLAY_COLS>,
    pub bottom: ArrayString<DISPLAY_COLS>,
}

impl DisplayFrame {
    /// Build a frame, clipping each line to the display width.
    pub fn new(top: &str, bottom: &str) -> Self {
        Self {
            top: clip(top),
            bottom: clip(bottom),
        }
    }

    /// Power-up splash shown until the first environment refresh.
    pub fn splash() -> Self {
        Self::new("Weather Station", "Virgo Obs. M15")
    }

    /// Standard ambient-conditions frame.
    pub fn environment(temp_c: f32, humidity_pct: f32) -> Self {
        Self::new(
            &format!("Temp: {temp_c:.1}C"),
            &format!("Hum : {humidity_pct:.1}%"),
        )
    }
}

fn clip(text: &str) -> ArrayString<DISPLAY_COLS> {
    let mut out = ArrayString::new();
    for ch in text.chars() {
        if out.try_push(ch).is_err() {
            break;
        }
    }
    out
}

/// Digital output lines for the power relays.
pub trait SwitchBank {
    fn set_line(&mut self, pin: u8, level: bool);
}

/// Focuser stepper driver. `step` blocks until the requested count has
/// been issued; `release` drops all coil drive lines so the motor does
/// not draw current while idle.
pub trait FocuserDrive {
    fn step(&mut self, steps: i32);
    fn release(&mut self);
}

/// Front-panel character display.
pub trait DisplayPanel {
    fn render(&mut self, frame: &DisplayFrame);
    fn set_backlight(&mut self, on: bool);
}

/// Shared multi-probe temperature bus. A bus-wide conversion must be
/// requested before the per-index reads are meaningful.
pub trait TemperatureBus {
    fn request_temperatures(&mut self);
    fn temp_c_by_index(&mut self, index: usize) -> f32;
    fn device_count(&self) -> usize;
}

/// Combined atmospheric temperature/humidity sensor.
pub trait AtmosphereSensor {
    fn read_temperature_c(&mut self) -> f32;
    fn read_humidity_pct(&mut self) -> f32;
}

/// Anemometer.
pub trait WindSensor {
    fn read_speed_kmh(&mut self) -> f32;
}

/// Outcome of probing a single peripheral-bus address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeResponse {
    /// A device acknowledged the address.
    Acked,
    /// The transaction failed with an explicit bus error.
    Error,
    /// Nothing answered.
    Silent,
}

/// Shared peripheral bus, probed address-by-address by the scanner.
pub trait PeripheralBus {
    fn probe(&mut self, address: u8) -> ProbeResponse;
}

/// Bundle of driver types making up one physical (or simulated) bench.
///
/// Binding the seven seams through associated types keeps the controller,
/// gateway, and agent each generic over a single parameter.
pub trait InstrumentHal {
    type Switches: SwitchBank;
    type Focuser: FocuserDrive;
    type Display: DisplayPanel;
    type TempBus: TemperatureBus;
    type Atmosphere: AtmosphereSensor;
    type Wind: WindSensor;
    type Bus: PeripheralBus;
}
