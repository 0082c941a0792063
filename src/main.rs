//! RoomSense Firmware — Main Entry Point
//!
//! Hexagonal architecture around a single cooperative loop: no RTOS tasks,
//! no preemption, no blocking waits.  Every pass polls the scheduler and
//! runs whichever of the three activities (sample, render, debounce) is
//! due, then returns straight to the top.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                     Adapters (outer ring)                    │
//! │                                                              │
//! │  HardwareAdapter        OledDisplay        LogEventSink      │
//! │  (Sensor+Alarm+Input)   (DisplayPort)      (EventSink)       │
//! │                                                              │
//! │  ──────────────── Port Trait Boundary ───────────────────    │
//! │                                                              │
//! │  ┌────────────────────────────────────────────────────────┐  │
//! │  │              AppService (pure logic)                   │  │
//! │  │  Scheduler · AlarmPolicy · Debouncer · ViewMode        │  │
//! │  └────────────────────────────────────────────────────────┘  │
//! └──────────────────────────────────────────────────────────────┘
//! ```
#![deny(unused_must_use)]

use anyhow::Result;
use log::info;

use esp_idf_hal::i2c::{I2cConfig, I2cDriver};
use esp_idf_hal::peripherals::Peripherals;
use esp_idf_hal::units::FromValueType;

use roomsense::adapters::display::OledDisplay;
use roomsense::adapters::hardware::HardwareAdapter;
use roomsense::adapters::log_sink::LogEventSink;
use roomsense::adapters::time::Esp32TimeAdapter;
use roomsense::app::service::AppService;
use roomsense::config::SystemConfig;
use roomsense::drivers::buzzer::Buzzer;
use roomsense::drivers::{hw_init, watchdog::Watchdog};
use roomsense::pins;
use roomsense::sensors::light::LightSensor;
use roomsense::sensors::sht31::Sht31Sensor;
use roomsense::sensors::SensorHub;

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("RoomSense v{} starting", env!("CARGO_PKG_VERSION"));

    // ── 2. Peripheral bring-up ────────────────────────────────
    if let Err(e) = hw_init::init_peripherals() {
        // ADC/GPIO init failure is critical — log and halt.
        // In production this triggers the watchdog reset after timeout.
        log::error!("HAL init failed: {} — halting", e);
        #[allow(clippy::empty_loop)]
        loop {}
    }
    let watchdog = Watchdog::new();

    let config = SystemConfig::default();

    // ── 3. I2C buses (bus 0 → OLED, bus 1 → SHT31) ────────────
    let peripherals = Peripherals::take()?;
    let i2c_cfg = I2cConfig::new().baudrate(400.kHz().into());

    let oled_i2c = I2cDriver::new(
        peripherals.i2c0,
        peripherals.pins.gpio14, // pins::OLED_SDA_GPIO
        peripherals.pins.gpio15, // pins::OLED_SCL_GPIO
        &i2c_cfg,
    )?;
    let sht_i2c = I2cDriver::new(
        peripherals.i2c1,
        peripherals.pins.gpio1, // pins::SHT_SDA_GPIO
        peripherals.pins.gpio2, // pins::SHT_SCL_GPIO
        &i2c_cfg,
    )?;

    // ── 4. Construct adapters ─────────────────────────────────
    // A dead display degrades to no-op rendering inside the adapter;
    // sampling and alarming continue regardless.
    let mut display = OledDisplay::new(oled_i2c);

    let hub = SensorHub::new(
        Sht31Sensor::new(sht_i2c, pins::SHT31_ADDR),
        LightSensor::new(pins::LIGHT_ADC_GPIO),
    );
    let mut hw = HardwareAdapter::new(hub, Buzzer::new(pins::BUZZER_GPIO));
    let mut sink = LogEventSink::new();
    let time = Esp32TimeAdapter::new();

    // ── 5. Application service ────────────────────────────────
    let mut app = AppService::new(&config);
    app.start(&mut sink);

    info!(
        "entering cooperative loop (sample {} ms, render {} ms, debounce {} ms)",
        config.sample_interval_ms, config.render_interval_ms, config.debounce_ms
    );

    // ── 6. Cooperative loop ───────────────────────────────────
    loop {
        let now_ms = time.uptime_ms();
        app.tick(now_ms, &mut hw, &mut display, &mut sink);
        watchdog.feed();
    }
}
