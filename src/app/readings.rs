//! The per-cycle sensor snapshot.

/// One sampling cycle's worth of readings.
///
/// Temperature and humidity are `None` when the sensor could not produce a
/// valid value that cycle (bus error, failed CRC) — never silently zero.
/// The light channel is a raw ADC value and has no failure mode.
///
/// Created fresh each sampling cycle and owned by the service; consumers
/// receive it by value or shared reference and never mutate it.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ReadingSet {
    /// Ambient temperature in Celsius, or `None` for this cycle.
    pub temperature_c: Option<f32>,
    /// Relative humidity in percent, or `None` for this cycle.
    pub humidity_pct: Option<f32>,
    /// Raw ambient light level (0 = dark, 4095 = saturated).
    pub light_raw: u16,
}
