//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing structured application events to
//! the ESP-IDF logger (which goes to UART / USB-CDC in production).  The
//! `SAMPLE |` records are the line-oriented diagnostic stream external
//! log collection scrapes — best effort, one line per sampling cycle.

use core::fmt;

use log::info;

use crate::app::events::AppEvent;
use crate::app::ports::EventSink;
use crate::sensors::light::LIGHT_RAW_MAX;

/// Adapter that logs every [`AppEvent`] to the serial console.
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

/// Formats an optional channel as `23.4` or `absent`.
struct Channel(Option<f32>);

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(v) => write!(f, "{v:.1}"),
            None => f.write_str("absent"),
        }
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &AppEvent) {
        match event {
            AppEvent::SampleCycle { readings, alarm } => {
                info!(
                    "SAMPLE | T={}\u{00b0}C | H={}% | L={}/{} | alarm={}",
                    Channel(readings.temperature_c),
                    Channel(readings.humidity_pct),
                    readings.light_raw,
                    LIGHT_RAW_MAX,
                    if *alarm { "on" } else { "off" },
                );
            }
            AppEvent::AlarmRaised => {
                info!("ALARM | raised");
            }
            AppEvent::AlarmCleared => {
                info!("ALARM | cleared");
            }
            AppEvent::ViewChanged(mode) => {
                info!("VIEW  | -> {:?}", mode);
            }
            AppEvent::Started => {
                info!("START | v{}", env!("CARGO_PKG_VERSION"));
            }
        }
    }
}
