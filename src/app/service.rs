//! Application service — the hexagonal core.
//!
//! [`AppService`] owns every piece of cross-task mutable state (latest
//! readings, alarm flag, view mode, timing state) and runs one cooperative
//! pass per [`tick`](AppService::tick).  All I/O flows through port traits
//! injected at call sites, making the entire service testable with mock
//! adapters.
//!
//! ```text
//!  SensorPort ──▶ ┌────────────────────────┐ ──▶ DisplayPort
//!  InputPort  ──▶ │       AppService        │ ──▶ AlarmPort
//!                 │  pacing · alarm · view  │ ──▶ EventSink
//!                 └────────────────────────┘
//! ```

use log::{info, warn};

use crate::alarm::AlarmPolicy;
use crate::config::SystemConfig;
use crate::drivers::button::{ButtonDebouncer, ButtonEvent};
use crate::scheduler::Scheduler;
use crate::view::{self, ViewMode};

use super::events::AppEvent;
use super::ports::{AlarmPort, DisplayPort, EventSink, InputPort, SensorPort};
use super::readings::ReadingSet;

// ───────────────────────────────────────────────────────────────
// AppService
// ───────────────────────────────────────────────────────────────

/// The application service orchestrates all domain logic.
pub struct AppService {
    scheduler: Scheduler,
    debouncer: ButtonDebouncer,
    policy: AlarmPolicy,
    /// Most recent snapshot; renders between samples reuse it.
    latest: ReadingSet,
    alarm_active: bool,
    mode: ViewMode,
    sample_count: u64,
}

impl AppService {
    pub fn new(config: &SystemConfig) -> Self {
        Self {
            scheduler: Scheduler::new(config),
            debouncer: ButtonDebouncer::new(config.debounce_ms),
            policy: AlarmPolicy::new(config),
            latest: ReadingSet::default(),
            alarm_active: false,
            mode: ViewMode::Summary,
            sample_count: 0,
        }
    }

    /// Announce startup through the sink.
    pub fn start(&mut self, sink: &mut impl EventSink) {
        sink.emit(&AppEvent::Started);
        info!("AppService started in {:?} view", self.mode);
    }

    // ── Per-pass orchestration ────────────────────────────────

    /// Run one cooperative pass.  Non-suspending: each step either runs to
    /// completion or is skipped because its interval has not elapsed.
    ///
    /// The `hw` parameter satisfies all three hardware-facing ports — this
    /// avoids a double mutable borrow while keeping the port boundary
    /// explicit.
    ///
    /// Sampling runs before rendering, so when both are due in the same
    /// pass the render shows the just-completed sample, never stale data.
    pub fn tick(
        &mut self,
        now_ms: u32,
        hw: &mut (impl SensorPort + AlarmPort + InputPort),
        display: &mut impl DisplayPort,
        sink: &mut impl EventSink,
    ) {
        let pass = self.scheduler.poll(now_ms);

        // 1. Sample → evaluate → drive the buzzer.
        if pass.sample_due {
            self.sample_count += 1;
            let readings = hw.sample();
            let alarm = self.policy.evaluate(&readings);

            if alarm != self.alarm_active {
                if alarm {
                    warn!("alarm raised: {:?}", readings);
                    sink.emit(&AppEvent::AlarmRaised);
                } else {
                    info!("alarm cleared");
                    sink.emit(&AppEvent::AlarmCleared);
                }
            }

            hw.set_alarm(alarm);
            self.alarm_active = alarm;
            self.latest = readings;
            sink.emit(&AppEvent::SampleCycle { readings, alarm });
        }

        // 2. Redraw the current view.
        if pass.render_due {
            view::render(display, &self.latest, self.alarm_active, self.mode);
        }

        // 3. Debounce the button — every pass, it's cheap.
        if let Some(ButtonEvent::Toggle) = self.debouncer.poll(hw.button_level(), now_ms) {
            self.mode = self.mode.toggled();
            sink.emit(&AppEvent::ViewChanged(self.mode));
            info!("view mode -> {:?}", self.mode);
        }
    }

    // ── Queries ───────────────────────────────────────────────

    /// The view currently shown.
    pub fn view_mode(&self) -> ViewMode {
        self.mode
    }

    /// Whether the alarm line is currently commanded on.
    pub fn alarm_active(&self) -> bool {
        self.alarm_active
    }

    /// Most recent reading set (pre-first-sample: all channels absent).
    pub fn latest_readings(&self) -> ReadingSet {
        self.latest
    }

    /// Sampling cycles completed since startup.
    pub fn sample_count(&self) -> u64 {
        self.sample_count
    }
}
