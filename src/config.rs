//! System configuration parameters
//!
//! All tunable parameters for the RoomSense node.  Thresholds and cadences
//! are compile-time defaults; there is no runtime reconfiguration path.

/// Core system configuration
#[derive(Debug, Clone)]
pub struct SystemConfig {
    // --- Alarm thresholds ---
    /// Temperature (Celsius) at or above which the alarm sounds
    pub temp_alarm_c: f32,
    /// Relative humidity (%) at or above which the alarm sounds
    pub humidity_alarm_pct: f32,
    /// Raw light level (0-4095) at or below which the alarm sounds
    pub light_alarm_raw: u16,

    // --- Timing ---
    /// Sensor sampling interval (milliseconds)
    pub sample_interval_ms: u32,
    /// Display refresh interval (milliseconds)
    pub render_interval_ms: u32,
    /// Button debounce window (milliseconds)
    pub debounce_ms: u32,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            // Alarm thresholds
            temp_alarm_c: 30.0,
            humidity_alarm_pct: 70.0,
            light_alarm_raw: 300,

            // Timing
            sample_interval_ms: 2000,
            render_interval_ms: 500,
            debounce_ms: 50,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_sane() {
        let c = SystemConfig::default();
        assert!(c.temp_alarm_c > 0.0);
        assert!(c.humidity_alarm_pct > 0.0 && c.humidity_alarm_pct <= 100.0);
        assert!(c.light_alarm_raw < 4095);
        assert!(c.sample_interval_ms > 0);
        assert!(c.render_interval_ms > 0);
        assert!(c.debounce_ms > 0);
    }

    #[test]
    fn timing_ratios_make_sense() {
        let c = SystemConfig::default();
        assert!(
            c.render_interval_ms < c.sample_interval_ms,
            "display should refresh faster than sensors are sampled"
        );
        assert!(
            c.debounce_ms < c.render_interval_ms,
            "debounce window should be shorter than a render interval"
        );
    }
}
