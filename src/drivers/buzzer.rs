//! Alarm buzzer driver.
//!
//! A piezo sounder behind an NPN transistor on a plain GPIO — driven as a
//! level, not a tone.  Setting the same level twice just holds the line.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: writes the GPIO via hw_init.
//! On host/test: hw_init mirrors the level into the simulated pin table.

use crate::drivers::hw_init;

pub struct Buzzer {
    gpio: i32,
    on: bool,
}

impl Buzzer {
    pub fn new(gpio: i32) -> Self {
        Self { gpio, on: false }
    }

    /// Drive the alarm line to the given level.
    pub fn set(&mut self, on: bool) {
        hw_init::gpio_write(self.gpio, on);
        self.on = on;
    }

    /// Level the line is currently driven to.
    pub fn is_on(&self) -> bool {
        self.on
    }
}
