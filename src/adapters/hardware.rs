//! Hardware adapter — bridges real peripherals to domain port traits.
//!
//! Owns the [`SensorHub`] and the buzzer driver, exposing them through
//! [`SensorPort`], [`AlarmPort`], and [`InputPort`].  This is the only
//! module in the system that touches actual hardware.  On non-espidf
//! targets, the underlying drivers use cfg-gated simulation stubs.

use crate::app::ports::{AlarmPort, InputPort, SensorPort};
use crate::app::readings::ReadingSet;
use crate::drivers::buzzer::Buzzer;
use crate::drivers::hw_init;
use crate::pins;
use crate::sensors::SensorHub;

/// Concrete adapter that combines all hardware behind port traits.
pub struct HardwareAdapter {
    hub: SensorHub,
    buzzer: Buzzer,
}

impl HardwareAdapter {
    pub fn new(hub: SensorHub, buzzer: Buzzer) -> Self {
        Self { hub, buzzer }
    }
}

// ── SensorPort implementation ─────────────────────────────────

impl SensorPort for HardwareAdapter {
    fn sample(&mut self) -> ReadingSet {
        self.hub.sample()
    }
}

// ── AlarmPort implementation ──────────────────────────────────

impl AlarmPort for HardwareAdapter {
    fn set_alarm(&mut self, on: bool) {
        self.buzzer.set(on);
    }

    fn is_alarm_on(&self) -> bool {
        self.buzzer.is_on()
    }
}

// ── InputPort implementation ──────────────────────────────────

impl InputPort for HardwareAdapter {
    fn button_level(&mut self) -> bool {
        hw_init::gpio_read(pins::BUTTON_GPIO)
    }
}
