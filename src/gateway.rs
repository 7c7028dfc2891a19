//! Uniform read access to the environmental sensors.

use crate::drivers::{AtmosphereSensor, InstrumentHal, TemperatureBus, WindSensor};
use crate::state::TEMP_CHANNEL_COUNT;
use heapless::Vec;

/// Pure query surface over the sensor drivers. No retries and no
/// fallback: a failed or extreme reading is passed through untouched,
/// distinguishing the two is the driver's job.
pub struct SensorGateway<H: InstrumentHal> {
    temp_bus: H::TempBus,
    atmosphere: H::Atmosphere,
    wind: H::Wind,
}

impl<H: InstrumentHal> SensorGateway<H> {
    pub fn new(temp_bus: H::TempBus, atmosphere: H::Atmosphere, wind: H::Wind) -> Self {
        Self {
            temp_bus,
            atmosphere,
            wind,
        }
    }

    /// Request a bus-wide conversion, then read every channel in index
    /// order.
    pub fn sample_all_temperatures(&mut self) -> Vec<f32, TEMP_CHANNEL_COUNT> {
        self.temp_bus.request_temperatures();
        let count = self.temp_bus.device_count().min(TEMP_CHANNEL_COUNT);
        let mut readings = Vec::new();
        for index in 0..count {
            let _ = readings.push(self.temp_bus.temp_c_by_index(index));
        }
        readings
    }

    pub fn sample_temperature_c(&mut self) -> f32 {
        self.atmosphere.read_temperature_c()
    }

    pub fn sample_humidity_pct(&mut self) -> f32 {
        self.atmosphere.read_humidity_pct()
    }

    pub fn sample_wind_kmh(&mut self) -> f32 {
        self.wind.read_speed_kmh()
    }

    pub fn temp_bus(&self) -> &H::TempBus {
        &self.temp_bus
    }

    pub fn temp_bus_mut(&mut self) -> &mut H::TempBus {
        &mut self.temp_bus
    }

    pub fn atmosphere_mut(&mut self) -> &mut H::Atmosphere {
        &mut self.atmosphere
    }

    pub fn wind_mut(&mut self) -> &mut H::Wind {
        &mut self.wind
    }
}
