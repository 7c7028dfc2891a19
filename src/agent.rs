//! Per-line orchestration glue.
//!
//! One input line is dispatched and fully handled, then the environment
//! is refreshed and the display updated, before the next line is looked
//! at. Everything is synchronous and single-threaded, so no locking
//! exists anywhere in the crate.

use crate::config::ControllerConfig;
use crate::controller::DeviceController;
use crate::drivers::sim::{
    SimAtmosphere, SimDisplay, SimFocuser, SimHal, SimPeripheralBus, SimSwitchBank, SimTempBus,
    SimWind,
};
use crate::drivers::InstrumentHal;
use crate::gateway::SensorGateway;
use crate::protocol::{CommandDispatcher, Request};
use crate::report;
use crate::scan::scan_bus;
use crate::state::DeviceStateStore;
use tracing::debug;

pub const FOCUSER_PROMPT: &str = "Focusing, insert the number of steps:";

pub struct ObservatoryAgent<H: InstrumentHal> {
    controller: DeviceController<H>,
    gateway: SensorGateway<H>,
    bus: H::Bus,
    dispatcher: CommandDispatcher,
}

impl<H: InstrumentHal> ObservatoryAgent<H> {
    pub fn new(controller: DeviceController<H>, gateway: SensorGateway<H>, bus: H::Bus) -> Self {
        Self {
            controller,
            gateway,
            bus,
            dispatcher: CommandDispatcher::new(),
        }
    }

    /// Handle one input line to completion. Returns the reply text, if
    /// any; unknown tokens produce none. Every line except the focuser
    /// step-count prompt ends with an environmental refresh and a
    /// display update, keeping the shown readings current no matter
    /// which command (if any) matched.
    pub fn handle_line(&mut self, line: &str) -> Option<String> {
        let reply = match self.dispatcher.feed_line(line) {
            Request::ToggleCamera => {
                let on = self.controller.toggle_camera();
                Some(format!(
                    "QHY camera switched {}",
                    if on { "on" } else { "off" }
                ))
            }
            Request::ToggleLamp => {
                let on = self.controller.toggle_lamp();
                Some(format!("IR-Lamp switched {}", if on { "on" } else { "off" }))
            }
            Request::ToggleBacklight => {
                let on = self.controller.toggle_backlight();
                Some(format!(
                    "Display backlight switched {}",
                    if on { "on" } else { "off" }
                ))
            }
            // The prompt only moves the state machine; the command
            // completes (and refreshes) on the count line.
            Request::PromptFocuserSteps => return Some(FOCUSER_PROMPT.to_string()),
            Request::MoveFocuser(steps) => {
                self.controller.move_focuser(steps);
                Some(format!("Move the focuser of {steps} steps ... DONE"))
            }
            Request::Status => {
                let readings = self.gateway.sample_all_temperatures();
                self.controller.refresh_channels(&readings);
                Some(report::status_report(self.controller.state()))
            }
            Request::Temperatures => {
                let readings = self.gateway.sample_all_temperatures();
                self.controller.refresh_channels(&readings);
                Some(report::temperature_report(self.controller.state()))
            }
            Request::ScanBus => {
                let summary = scan_bus(&mut self.bus);
                Some(summary.render())
            }
            Request::Ignored => None,
        };

        self.refresh_environment();
        reply
    }

    fn refresh_environment(&mut self) {
        let humidity = self.gateway.sample_humidity_pct();
        let temperature = self.gateway.sample_temperature_c();
        self.controller.record_atmosphere(temperature, humidity);
        self.controller.apply_interlock();

        let wind = self.gateway.sample_wind_kmh();
        self.controller.record_wind_sample(wind);

        self.controller.render_environment();
        debug!(
            "environment refreshed: {:.1}C {:.1}% RH, wind {:.1} km/h",
            temperature, humidity, wind
        );
    }

    pub fn state(&self) -> &DeviceStateStore {
        self.controller.state()
    }

    pub fn controller(&self) -> &DeviceController<H> {
        &self.controller
    }

    pub fn dispatcher(&self) -> &CommandDispatcher {
        &self.dispatcher
    }

    pub fn gateway_mut(&mut self) -> &mut SensorGateway<H> {
        &mut self.gateway
    }

    pub fn bus_mut(&mut self) -> &mut H::Bus {
        &mut self.bus
    }
}

impl ObservatoryAgent<SimHal> {
    /// Agent wired to a fully simulated bench; the console binary and
    /// the integration tests both start here.
    pub fn sim_bench(config: &ControllerConfig) -> Self {
        let controller = DeviceController::new(
            config,
            SimSwitchBank::new(),
            SimFocuser::new(),
            SimDisplay::new(),
        );
        let gateway = SensorGateway::new(SimTempBus::new(), SimAtmosphere::new(), SimWind::new());
        ObservatoryAgent::new(controller, gateway, SimPeripheralBus::new())
    }
}
