//! View rendering — reading set + alarm state + mode → display lines.
//!
//! Stateless per call: the renderer owns nothing and always redraws the
//! full frame (`clear`, lines, `flush`).  The two layouts deliberately
//! differ in how they surface an absent channel: Summary prints a friendly
//! `ERR` marker, Detail prints the raw `NaN` the formatting machinery
//! produces for a missing value.

use core::fmt::Write;

use heapless::String;

use crate::app::ports::DisplayPort;
use crate::app::readings::ReadingSet;
use crate::sensors::light::LIGHT_RAW_MAX;

/// Which of the two layouts the display currently shows.
///
/// The renderer matches exhaustively — a third mode is a compile error at
/// the match, not a silent fallthrough.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    Summary,
    Detail,
}

impl ViewMode {
    /// The other mode.  Applied on each confirmed button press.
    pub fn toggled(self) -> Self {
        match self {
            Self::Summary => Self::Detail,
            Self::Detail => Self::Summary,
        }
    }
}

/// Longest line the layouts produce; SSD1306 fits 21 columns of 6 px glyphs.
type Line = String<21>;

/// Redraw the full frame for the given mode.
pub fn render(
    display: &mut impl DisplayPort,
    readings: &ReadingSet,
    alarm: bool,
    mode: ViewMode,
) {
    display.clear();
    match mode {
        ViewMode::Summary => render_summary(display, readings, alarm),
        ViewMode::Detail => render_detail(display, readings),
    }
    display.flush();
}

fn render_summary(display: &mut impl DisplayPort, readings: &ReadingSet, alarm: bool) {
    display.write_line(0, "RoomSense");

    let mut line = Line::new();
    match readings.temperature_c {
        Some(t) => {
            let _ = write!(line, "T: {t:.1} C");
        }
        None => {
            let _ = line.push_str("T: ERR");
        }
    }
    display.write_line(1, &line);

    line.clear();
    match readings.humidity_pct {
        Some(h) => {
            let _ = write!(line, "H: {h:.1} %");
        }
        None => {
            let _ = line.push_str("H: ERR");
        }
    }
    display.write_line(2, &line);

    line.clear();
    let _ = write!(line, "L: {} /{}", readings.light_raw, LIGHT_RAW_MAX);
    display.write_line(3, &line);

    display.write_line(4, if alarm { "ALARM ON" } else { "ALARM OFF" });
}

fn render_detail(display: &mut impl DisplayPort, readings: &ReadingSet) {
    display.write_line(0, "Readings");

    // Absent channels fall back to NaN and are printed as-is.
    let mut line = Line::new();
    let _ = write!(line, "T= {:.2}", readings.temperature_c.unwrap_or(f32::NAN));
    display.write_line(1, &line);

    line.clear();
    let _ = write!(line, "H= {:.2}", readings.humidity_pct.unwrap_or(f32::NAN));
    display.write_line(2, &line);

    line.clear();
    let _ = write!(line, "L= {}", readings.light_raw);
    display.write_line(3, &line);

    display.write_line(4, "BTN: switch view");
}

// ═══════════════════════════════════════════════════════════════
//  Tests
// ═══════════════════════════════════════════════════════════════
