//! Sensor subsystem — individual drivers and the aggregating [`SensorHub`].
//!
//! The hub owns both sensor drivers and produces a [`ReadingSet`] each
//! sampling cycle for the application service.

pub mod light;
pub mod sht31;

use crate::app::readings::ReadingSet;
use light::LightSensor;
use sht31::Sht31Sensor;

/// Aggregates the sensor drivers and produces a unified snapshot.
pub struct SensorHub {
    sht31: Sht31Sensor,
    light: LightSensor,
}

impl SensorHub {
    /// Construct a new hub.  Pass in pre-built drivers (built in main
    /// where peripheral ownership is established).
    pub fn new(sht31: Sht31Sensor, light: LightSensor) -> Self {
        Self { sht31, light }
    }

    /// Read every sensor and return a unified snapshot.
    ///
    /// A failed SHT31 channel is reported as absent in the snapshot and
    /// the loop carries on — the next cycle is the retry.
    pub fn sample(&mut self) -> ReadingSet {
        let sht = self.sht31.read();
        let light_raw = self.light.read();

        ReadingSet {
            temperature_c: sht.temperature_c,
            humidity_pct: sht.humidity_pct,
            light_raw,
        }
    }
}
