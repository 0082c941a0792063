//! Cooperative pass scheduler.
//!
//! The main loop calls [`Scheduler::poll`] on every pass with the current
//! monotonic time; the scheduler compares elapsed time against the two
//! fixed intervals and reports which periodic tasks are due.  No pass ever
//! suspends — cadence is enforced purely by timestamp comparison, so the
//! loop stays single-threaded and run-to-completion.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                       Main Loop                          │
//! │                                                          │
//! │   every pass ──▶ Scheduler::poll(now) ──▶ Pass           │
//! │                                            │             │
//! │             sample_due ────────────────────┤             │
//! │             (sample → evaluate → alarm)    │             │
//! │             render_due ────────────────────┤             │
//! │             (redraw current view)          │             │
//! │             always: debouncer poll         │             │
//! └──────────────────────────────────────────────────────────┘
//! ```

use crate::config::SystemConfig;

/// The result of one scheduler poll.
///
/// When both tasks are due in the same pass, the caller must run the
/// sampling task first so the render that follows never shows data older
/// than the just-completed sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pass {
    /// The sampling interval has elapsed since the last sample.
    pub sample_due: bool,
    /// The render interval has elapsed since the last redraw.
    pub render_due: bool,
}

/// Tracks the last-fired timestamp of each periodic task.
///
/// Timestamps are monotonic milliseconds compared with `wrapping_sub`, so
/// the schedule survives the u32 rollover at ~49.7 days of uptime.
pub struct Scheduler {
    sample_interval_ms: u32,
    render_interval_ms: u32,
    last_sample_ms: u32,
    last_render_ms: u32,
}

impl Scheduler {
    /// Both timers start at zero: the first sample fires one full interval
    /// after boot, and renders before that show the pre-sample defaults.
    pub fn new(config: &SystemConfig) -> Self {
        Self {
            sample_interval_ms: config.sample_interval_ms,
            render_interval_ms: config.render_interval_ms,
            last_sample_ms: 0,
            last_render_ms: 0,
        }
    }

    /// Check which tasks are due at `now_ms`, advancing the timestamp of
    /// each task that fires.
    pub fn poll(&mut self, now_ms: u32) -> Pass {
        let sample_due = now_ms.wrapping_sub(self.last_sample_ms) >= self.sample_interval_ms;
        if sample_due {
            self.last_sample_ms = now_ms;
        }

        let render_due = now_ms.wrapping_sub(self.last_render_ms) >= self.render_interval_ms;
        if render_due {
            self.last_render_ms = now_ms;
        }

        Pass {
            sample_due,
            render_due,
        }
    }
}

// ═══════════════════════════════════════════════════════════════
//  Tests
// ═══════════════════════════════════════════════════════════════
