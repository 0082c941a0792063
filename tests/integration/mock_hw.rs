//! Mock hardware adapters for integration tests.
//!
//! Records every alarm drive and committed display frame so tests can
//! assert on the full history without touching real GPIO/I2C.

use roomsense::app::events::AppEvent;
use roomsense::app::ports::{AlarmPort, DisplayPort, EventSink, InputPort, SensorPort};
use roomsense::app::readings::ReadingSet;

// ── MockHardware ──────────────────────────────────────────────

pub struct MockHardware {
    /// What the next `sample()` returns.
    pub readings: ReadingSet,
    /// Raw button line level fed to the debouncer.
    pub button_high: bool,
    /// Every `set_alarm` call, in order.
    pub alarm_drives: Vec<bool>,
    pub sample_calls: u32,
}

#[allow(dead_code)]
impl MockHardware {
    pub fn new() -> Self {
        Self {
            readings: ReadingSet {
                temperature_c: Some(22.0),
                humidity_pct: Some(45.0),
                light_raw: 2000,
            },
            button_high: false,
            alarm_drives: Vec::new(),
            sample_calls: 0,
        }
    }

    pub fn last_alarm_drive(&self) -> Option<bool> {
        self.alarm_drives.last().copied()
    }
}

impl Default for MockHardware {
    fn default() -> Self {
        Self::new()
    }
}

impl SensorPort for MockHardware {
    fn sample(&mut self) -> ReadingSet {
        self.sample_calls += 1;
        self.readings
    }
}

impl AlarmPort for MockHardware {
    fn set_alarm(&mut self, on: bool) {
        self.alarm_drives.push(on);
    }

    fn is_alarm_on(&self) -> bool {
        self.last_alarm_drive().unwrap_or(false)
    }
}

impl InputPort for MockHardware {
    fn button_level(&mut self) -> bool {
        self.button_high
    }
}

// ── MockDisplay ───────────────────────────────────────────────

/// Captures every committed frame as a list of `(row, text)` lines.
pub struct MockDisplay {
    pending: Vec<(u8, String)>,
    pub frames: Vec<Vec<(u8, String)>>,
}

#[allow(dead_code)]
impl MockDisplay {
    pub fn new() -> Self {
        Self {
            pending: Vec::new(),
            frames: Vec::new(),
        }
    }

    /// Text of `row` in the most recently committed frame.
    pub fn last_frame_line(&self, row: u8) -> Option<&str> {
        self.frames.last().and_then(|frame| {
            frame
                .iter()
                .find(|(r, _)| *r == row)
                .map(|(_, s)| s.as_str())
        })
    }
}

impl Default for MockDisplay {
    fn default() -> Self {
        Self::new()
    }
}

impl DisplayPort for MockDisplay {
    fn clear(&mut self) {
        self.pending.clear();
    }

    fn write_line(&mut self, row: u8, text: &str) {
        self.pending.push((row, text.to_string()));
    }

    fn flush(&mut self) {
        self.frames.push(self.pending.clone());
    }
}

// ── RecordingSink ─────────────────────────────────────────────

pub struct RecordingSink {
    pub events: Vec<AppEvent>,
}

#[allow(dead_code)]
impl RecordingSink {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn count(&self, pred: impl Fn(&AppEvent) -> bool) -> usize {
        self.events.iter().filter(|e| pred(e)).count()
    }
}

impl Default for RecordingSink {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for RecordingSink {
    fn emit(&mut self, event: &AppEvent) {
        self.events.push(event.clone());
    }
}
