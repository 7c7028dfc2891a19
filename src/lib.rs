//! # Observatory Instrument Controller
//!
//! Control logic for a small single-board observatory instrument
//! controller: a line-oriented text command protocol toggles instrument
//! power states (guide camera, IR dew-heater lamp, display backlight),
//! drives the focuser stepper, polls the environmental sensors, and
//! reports aggregate status. A humidity-driven hysteresis interlock
//! couples atmospheric readings to the dew-heater lamp.
//!
//! Vendor sensor/actuator drivers live behind the narrow traits in
//! [`drivers`]; [`drivers::sim`] supplies bench implementations so the
//! whole controller runs (and is tested) without hardware.
//!
//! ## Quick start
//!
//! ```rust
//! use obsbus::agent::ObservatoryAgent;
//! use obsbus::config::ControllerConfig;
//!
//! let mut agent = ObservatoryAgent::sim_bench(&ControllerConfig::default());
//!
//! // Toggle the guide camera, then ask for the full status block.
//! agent.handle_line("camera");
//! let status = agent.handle_line("status").unwrap();
//! assert!(status.contains("QHY-CCD  : Power-ON"));
//! ```
//!
//! ## Architecture
//!
//! - [`agent`] - per-line orchestration and the public entry point
//! - [`controller`] - device-state controller, the single mutation funnel
//! - [`protocol`] - command vocabulary and the dispatcher state machine
//! - [`interlock`] - humidity/lamp hysteresis policy
//! - [`gateway`] - uniform sensor read access
//! - [`report`] - status text rendering
//! - [`scan`] - peripheral-bus diagnostics sweep
//! - [`drivers`] - collaborator trait seams and the simulated bench

pub mod agent;
pub mod config;
pub mod controller;
pub mod drivers;
pub mod gateway;
pub mod interlock;
pub mod protocol;
pub mod report;
pub mod scan;
pub mod state;

// Re-export the main public types for convenience
pub use agent::ObservatoryAgent;
pub use config::{ControllerConfig, InterlockConfig};
pub use controller::DeviceController;
pub use gateway::SensorGateway;
pub use protocol::{Command, CommandDispatcher, DispatchState, Request};
pub use state::DeviceStateStore;
