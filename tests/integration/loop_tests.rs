//! Integration tests for the cooperative loop: AppService against mock
//! adapters, driven with simulated time.
//!
//! These verify the cadence, ordering, debounce, and alarm behaviour of
//! the full composition — the same pass sequence the firmware runs on
//! target, minus the real peripherals.

use crate::mock_hw::{MockDisplay, MockHardware, RecordingSink};

use roomsense::app::events::AppEvent;
use roomsense::app::readings::ReadingSet;
use roomsense::app::service::AppService;
use roomsense::config::SystemConfig;
use roomsense::view::ViewMode;

fn make_app() -> (AppService, MockHardware, MockDisplay, RecordingSink) {
    let config = SystemConfig::default(); // 2000/500/50 ms
    let mut app = AppService::new(&config);
    let mut sink = RecordingSink::new();
    app.start(&mut sink);
    (app, MockHardware::new(), MockDisplay::new(), sink)
}

/// Drive the loop from `from_ms` to `to_ms` inclusive in 10 ms passes.
fn run(
    app: &mut AppService,
    hw: &mut MockHardware,
    display: &mut MockDisplay,
    sink: &mut RecordingSink,
    from_ms: u32,
    to_ms: u32,
) {
    let mut now = from_ms;
    while now <= to_ms {
        app.tick(now, hw, display, sink);
        now += 10;
    }
}

// ── Cadence ───────────────────────────────────────────────────

#[test]
fn one_sample_and_four_renders_over_2100_ms() {
    let (mut app, mut hw, mut display, mut sink) = make_app();

    run(&mut app, &mut hw, &mut display, &mut sink, 0, 2100);

    assert_eq!(hw.sample_calls, 1, "sample fires once (at 2000 ms)");
    assert_eq!(
        display.frames.len(),
        4,
        "renders at 500/1000/1500/2000 ms"
    );
    assert_eq!(
        sink.count(|e| matches!(e, AppEvent::SampleCycle { .. })),
        1,
        "one diagnostic record per sampling cycle"
    );
}

#[test]
fn renders_before_the_first_sample_show_absent_channels() {
    let (mut app, mut hw, mut display, mut sink) = make_app();

    run(&mut app, &mut hw, &mut display, &mut sink, 0, 1900);

    // Three renders so far, all of the default (pre-sample) snapshot.
    assert_eq!(display.frames.len(), 3);
    assert_eq!(display.last_frame_line(1), Some("T: ERR"));
    assert_eq!(display.last_frame_line(2), Some("H: ERR"));
}

#[test]
fn render_in_the_same_pass_shows_the_just_completed_sample() {
    let (mut app, mut hw, mut display, mut sink) = make_app();
    hw.readings = ReadingSet {
        temperature_c: Some(25.0),
        humidity_pct: Some(40.0),
        light_raw: 1234,
    };

    // At 2000 ms both tasks are due in one pass; sampling must win.
    app.tick(2000, &mut hw, &mut display, &mut sink);

    assert_eq!(hw.sample_calls, 1);
    assert_eq!(display.frames.len(), 1);
    assert_eq!(display.last_frame_line(1), Some("T: 25.0 C"));
    assert_eq!(display.last_frame_line(3), Some("L: 1234 /4095"));
}

// ── Alarm behaviour ───────────────────────────────────────────

#[test]
fn alarm_raises_and_clears_with_one_event_per_transition() {
    let (mut app, mut hw, mut display, mut sink) = make_app();

    // First cycle: hot room.
    hw.readings = ReadingSet {
        temperature_c: Some(35.0),
        humidity_pct: Some(40.0),
        light_raw: 2000,
    };
    app.tick(2000, &mut hw, &mut display, &mut sink);
    assert_eq!(hw.last_alarm_drive(), Some(true));
    assert!(app.alarm_active());

    // Second cycle: cooled down.
    hw.readings.temperature_c = Some(24.0);
    app.tick(4000, &mut hw, &mut display, &mut sink);
    assert_eq!(hw.last_alarm_drive(), Some(false));
    assert!(!app.alarm_active());

    assert_eq!(sink.count(|e| matches!(e, AppEvent::AlarmRaised)), 1);
    assert_eq!(sink.count(|e| matches!(e, AppEvent::AlarmCleared)), 1);
}

#[test]
fn alarm_line_is_driven_every_sampling_cycle() {
    let (mut app, mut hw, mut display, mut sink) = make_app();

    app.tick(2000, &mut hw, &mut display, &mut sink);
    app.tick(4000, &mut hw, &mut display, &mut sink);
    app.tick(6000, &mut hw, &mut display, &mut sink);

    // Idempotent holds: same state re-driven once per cycle.
    assert_eq!(hw.alarm_drives, vec![false, false, false]);
}

#[test]
fn absent_channels_with_dark_room_still_alarm() {
    let (mut app, mut hw, mut display, mut sink) = make_app();
    hw.readings = ReadingSet {
        temperature_c: None,
        humidity_pct: None,
        light_raw: 50,
    };

    app.tick(2000, &mut hw, &mut display, &mut sink);

    assert_eq!(hw.last_alarm_drive(), Some(true));
    assert_eq!(display.last_frame_line(4), Some("ALARM ON"));
}

// ── View switching ────────────────────────────────────────────

#[test]
fn clean_rising_edge_toggles_view_exactly_once() {
    let (mut app, mut hw, mut display, mut sink) = make_app();
    assert_eq!(app.view_mode(), ViewMode::Summary);

    // Button pressed at 100 ms and held well past the debounce window.
    run(&mut app, &mut hw, &mut display, &mut sink, 0, 90);
    hw.button_high = true;
    run(&mut app, &mut hw, &mut display, &mut sink, 100, 400);

    assert_eq!(app.view_mode(), ViewMode::Detail);
    assert_eq!(
        sink.count(|e| matches!(e, AppEvent::ViewChanged(_))),
        1,
        "holding the button must not re-toggle"
    );

    // The next render uses the Detail layout.
    run(&mut app, &mut hw, &mut display, &mut sink, 410, 510);
    assert_eq!(display.last_frame_line(4), Some("BTN: switch view"));
}

#[test]
fn press_release_press_toggles_twice() {
    let (mut app, mut hw, mut display, mut sink) = make_app();

    hw.button_high = true;
    run(&mut app, &mut hw, &mut display, &mut sink, 100, 200);
    hw.button_high = false;
    run(&mut app, &mut hw, &mut display, &mut sink, 210, 300);
    hw.button_high = true;
    run(&mut app, &mut hw, &mut display, &mut sink, 310, 400);

    assert_eq!(sink.count(|e| matches!(e, AppEvent::ViewChanged(_))), 2);
    assert_eq!(app.view_mode(), ViewMode::Summary, "two toggles round-trip");
}

#[test]
fn detail_view_surfaces_absent_temperature_as_nan() {
    let (mut app, mut hw, mut display, mut sink) = make_app();
    hw.readings = ReadingSet {
        temperature_c: None,
        humidity_pct: Some(22.5),
        light_raw: 1500,
    };

    // Switch to Detail, then let a sample-and-render cycle complete.
    hw.button_high = true;
    run(&mut app, &mut hw, &mut display, &mut sink, 100, 200);
    assert_eq!(app.view_mode(), ViewMode::Detail);
    run(&mut app, &mut hw, &mut display, &mut sink, 210, 2010);

    assert_eq!(display.last_frame_line(1), Some("T= NaN"));
    assert_eq!(display.last_frame_line(2), Some("H= 22.50"));
    assert_eq!(display.last_frame_line(3), Some("L= 1500"));
}
