//! Port traits — the hexagonal boundary between domain logic and the outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ AppService (domain)
//! ```
//!
//! Driven adapters (sensors, buzzer, display, event sinks) implement these
//! traits.  The [`AppService`](super::service::AppService) consumes them via
//! generics, so the domain core never touches hardware directly.

use super::events::AppEvent;
use super::readings::ReadingSet;

// ───────────────────────────────────────────────────────────────
// Sensor port (driven adapter: hardware → domain)
// ───────────────────────────────────────────────────────────────

/// Read-side port: the domain calls this to obtain sensor data.
pub trait SensorPort {
    /// Read every sensor and return a fresh snapshot.
    ///
    /// Channel failures are encoded in the snapshot (absent values), never
    /// escalated — a flaky sensor must not stall the loop.
    fn sample(&mut self) -> ReadingSet;
}

// ───────────────────────────────────────────────────────────────
// Alarm port (driven adapter: domain → buzzer)
// ───────────────────────────────────────────────────────────────

/// Write-side port: the domain drives the alarm output through this.
pub trait AlarmPort {
    /// Set the alarm line level.  Idempotent: repeating the same state
    /// holds the level with no further observable effect.
    fn set_alarm(&mut self, on: bool);

    /// Query whether the alarm line is currently driven high.
    fn is_alarm_on(&self) -> bool;
}

// ───────────────────────────────────────────────────────────────
// Input port (driven adapter: button GPIO → domain)
// ───────────────────────────────────────────────────────────────

/// Raw digital input: the domain polls this every pass and feeds the level
/// to the debouncer.  Active-high (pressed = `true`).
pub trait InputPort {
    fn button_level(&mut self) -> bool;
}

// ───────────────────────────────────────────────────────────────
// Display port (driven adapter: domain → OLED)
// ───────────────────────────────────────────────────────────────

/// Line-oriented drawing surface.
///
/// The renderer always performs a full-frame redraw: `clear`, a run of
/// `write_line` calls, then a single `flush` that commits the frame
/// atomically from the caller's perspective.  Implementations for dead
/// hardware silently swallow all three.
pub trait DisplayPort {
    /// Blank the in-progress frame.
    fn clear(&mut self);

    /// Draw one line of text at the given row (0 = top).
    fn write_line(&mut self, row: u8, text: &str);

    /// Commit the frame to the panel.
    fn flush(&mut self);
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → logging / diagnostics)
// ───────────────────────────────────────────────────────────────

/// The domain emits structured [`AppEvent`]s through this port.  Adapters
/// decide where they go (serial log today; anything else tomorrow).
pub trait EventSink {
    fn emit(&mut self, event: &AppEvent);
}
