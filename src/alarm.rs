//! Alarm threshold policy.
//!
//! [`AlarmPolicy::evaluate`] is a pure, total function from a reading set
//! to the alarm state — recomputed from scratch every sampling cycle, never
//! latched.  An absent channel means "cannot evaluate this condition", not
//! "condition met": partial sensor failure can mask an alarm condition for
//! a cycle, but it can never raise a spurious one.

use crate::app::readings::ReadingSet;
use crate::config::SystemConfig;

/// The fixed threshold set the evaluator judges readings against.
#[derive(Debug, Clone, Copy)]
pub struct AlarmPolicy {
    temp_high_c: f32,
    humidity_high_pct: f32,
    light_low_raw: u16,
}

impl AlarmPolicy {
    pub fn new(config: &SystemConfig) -> Self {
        Self {
            temp_high_c: config.temp_alarm_c,
            humidity_high_pct: config.humidity_alarm_pct,
            light_low_raw: config.light_alarm_raw,
        }
    }

    /// True iff at least one threshold condition holds.
    pub fn evaluate(&self, readings: &ReadingSet) -> bool {
        let too_hot = readings
            .temperature_c
            .map_or(false, |t| t >= self.temp_high_c);
        let too_humid = readings
            .humidity_pct
            .map_or(false, |h| h >= self.humidity_high_pct);
        let too_dark = readings.light_raw <= self.light_low_raw;

        too_hot || too_humid || too_dark
    }
}

// ═══════════════════════════════════════════════════════════════
//  Tests
// ═══════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;

    fn policy() -> AlarmPolicy {
        AlarmPolicy::new(&SystemConfig::default()) // 30.0 C / 70.0 % / 300 raw
    }

    fn nominal() -> ReadingSet {
        ReadingSet {
            temperature_c: Some(22.0),
            humidity_pct: Some(45.0),
            light_raw: 2000,
        }
    }

    #[test]
    fn nominal_readings_do_not_alarm() {
        assert!(!policy().evaluate(&nominal()));
    }

    #[test]
    fn hot_temperature_alarms_regardless_of_other_channels() {
        let r = ReadingSet {
            temperature_c: Some(35.0),
            ..nominal()
        };
        assert!(policy().evaluate(&r));

        // Humidity absent, light bright — temperature alone decides.
        let r = ReadingSet {
            temperature_c: Some(35.0),
            humidity_pct: None,
            light_raw: 4095,
        };
        assert!(policy().evaluate(&r));
    }

    #[test]
    fn threshold_boundary_is_inclusive() {
        let r = ReadingSet {
            temperature_c: Some(30.0),
            ..nominal()
        };
        assert!(policy().evaluate(&r));

        let r = ReadingSet {
            humidity_pct: Some(70.0),
            ..nominal()
        };
        assert!(policy().evaluate(&r));

        let r = ReadingSet {
            light_raw: 300,
            ..nominal()
        };
        assert!(policy().evaluate(&r));
    }

    #[test]
    fn high_humidity_alarms() {
        let r = ReadingSet {
            humidity_pct: Some(85.5),
            ..nominal()
        };
        assert!(policy().evaluate(&r));
    }

    #[test]
    fn darkness_alarms_even_with_both_channels_absent() {
        let r = ReadingSet {
            temperature_c: None,
            humidity_pct: None,
            light_raw: 100,
        };
        assert!(policy().evaluate(&r));
    }

    #[test]
    fn absent_channels_never_trigger_by_themselves() {
        let r = ReadingSet {
            temperature_c: None,
            humidity_pct: None,
            light_raw: 2000,
        };
        assert!(!policy().evaluate(&r));
    }
}
