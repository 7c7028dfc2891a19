//! Peripheral-bus scanner, used only for diagnostics.

use crate::drivers::{PeripheralBus, ProbeResponse};
use core::fmt::Write;
use heapless::Vec;

/// First and last probed addresses (7-bit bus, reserved ends skipped).
pub const BUS_ADDR_FIRST: u8 = 1;
pub const BUS_ADDR_LAST: u8 = 126;

pub const MAX_BUS_DEVICES: usize = 126;

/// Outcome of one full bus sweep.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScanReport {
    /// Addresses that acknowledged, in address order.
    pub responders: Vec<u8, MAX_BUS_DEVICES>,
    /// Addresses that failed with an explicit bus error.
    pub errors: Vec<u8, MAX_BUS_DEVICES>,
}

impl ScanReport {
    pub fn device_count(&self) -> usize {
        self.responders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.responders.is_empty()
    }

    /// Human-readable summary. An empty bus reports distinctly from a
    /// populated one.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for &address in &self.responders {
            let _ = writeln!(out, "I2C device found at address 0x{address:02X}  !");
        }
        for &address in &self.errors {
            let _ = writeln!(out, "Unknown error at address 0x{address:02X}");
        }
        if self.is_empty() {
            let _ = write!(out, "No I2C devices found");
        } else {
            let _ = write!(out, "done");
        }
        out
    }
}

/// Probe every valid address once and classify each response. Purely
/// diagnostic; touches nothing but the bus itself.
pub fn scan_bus(bus: &mut impl PeripheralBus) -> ScanReport {
    let mut report = ScanReport::default();
    for address in BUS_ADDR_FIRST..=BUS_ADDR_LAST {
        match bus.probe(address) {
            ProbeResponse::Acked => {
                let _ = report.responders.push(address);
            }
            ProbeResponse::Error => {
                let _ = report.errors.push(address);
            }
            ProbeResponse::Silent => {}
        }
    }
    report
}
