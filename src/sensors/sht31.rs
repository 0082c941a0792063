//! SHT31 humidity/temperature sensor (Sensirion, I2C).
//!
//! Single-shot acquisition at high repeatability: issue the measure
//! command, wait out the conversion, read the 6-byte frame.  Temperature
//! and humidity each carry their own CRC-8, so one corrupt channel does
//! not take the other down with it — each is validated and reported
//! independently.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: owns an `esp-idf-hal` I2C driver (bus 1) and talks to the
//! part through the `embedded-hal` I2c trait.
//! On host/test: synthesises frames from injectable atomics, with a fail
//! flag to simulate a dead bus.

use core::sync::atomic::{AtomicBool, AtomicU16};
#[cfg(not(target_os = "espidf"))]
use core::sync::atomic::Ordering;

use log::warn;

use crate::error::SensorError;

/// Measure command: single shot, high repeatability, no clock stretching.
#[cfg(target_os = "espidf")]
const MEASURE_HIGHREP: [u8; 2] = [0x24, 0x00];

/// Conversion time at high repeatability per datasheet (max 15 ms).
#[cfg(target_os = "espidf")]
const MEASURE_DELAY_MS: u32 = 15;

static SIM_TEMP_RAW: AtomicU16 = AtomicU16::new(25085); // ~22.0 C
static SIM_HUM_RAW: AtomicU16 = AtomicU16::new(29490); // ~45.0 %
static SIM_BUS_FAIL: AtomicBool = AtomicBool::new(false);

/// Inject a temperature/humidity pair for host tests.
#[cfg(not(target_os = "espidf"))]
pub fn sim_set_sht31(temperature_c: f32, humidity_pct: f32) {
    let t_raw = ((temperature_c + 45.0) / 175.0 * 65535.0) as u16;
    let h_raw = (humidity_pct / 100.0 * 65535.0) as u16;
    SIM_TEMP_RAW.store(t_raw, Ordering::Relaxed);
    SIM_HUM_RAW.store(h_raw, Ordering::Relaxed);
}

/// Make every host read fail as if the bus were dead.
#[cfg(not(target_os = "espidf"))]
pub fn sim_set_sht31_fail(fail: bool) {
    SIM_BUS_FAIL.store(fail, Ordering::Relaxed);
}

/// Per-channel result of one acquisition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShtReading {
    pub temperature_c: Option<f32>,
    pub humidity_pct: Option<f32>,
}

impl ShtReading {
    const ABSENT: Self = Self {
        temperature_c: None,
        humidity_pct: None,
    };
}

pub struct Sht31Sensor {
    addr: u8,
    #[cfg(target_os = "espidf")]
    i2c: esp_idf_hal::i2c::I2cDriver<'static>,
}

impl Sht31Sensor {
    #[cfg(target_os = "espidf")]
    pub fn new(i2c: esp_idf_hal::i2c::I2cDriver<'static>, addr: u8) -> Self {
        Self { addr, i2c }
    }

    #[cfg(not(target_os = "espidf"))]
    pub fn new(addr: u8) -> Self {
        Self { addr }
    }

    /// Acquire one measurement.  A failed transaction yields both channels
    /// absent; a corrupt CRC yields only that channel absent.
    pub fn read(&mut self) -> ShtReading {
        match self.read_frame() {
            Ok(frame) => {
                let reading = parse_frame(&frame);
                if reading.temperature_c.is_none() || reading.humidity_pct.is_none() {
                    warn!("SHT31 (0x{:02x}): {}", self.addr, SensorError::CrcMismatch);
                }
                reading
            }
            Err(e) => {
                warn!("SHT31 (0x{:02x}) read failed: {}", self.addr, e);
                ShtReading::ABSENT
            }
        }
    }

    #[cfg(target_os = "espidf")]
    fn read_frame(&mut self) -> Result<[u8; 6], SensorError> {
        use embedded_hal::i2c::{ErrorKind, I2c};

        fn classify<E: embedded_hal::i2c::Error>(e: E) -> SensorError {
            match e.kind() {
                ErrorKind::NoAcknowledge(_) => SensorError::NoAck,
                _ => SensorError::Bus,
            }
        }

        self.i2c
            .write(self.addr, &MEASURE_HIGHREP)
            .map_err(classify)?;

        esp_idf_hal::delay::FreeRtos::delay_ms(MEASURE_DELAY_MS);

        let mut frame = [0u8; 6];
        self.i2c.read(self.addr, &mut frame).map_err(classify)?;
        Ok(frame)
    }

    #[cfg(not(target_os = "espidf"))]
    fn read_frame(&mut self) -> Result<[u8; 6], SensorError> {
        if SIM_BUS_FAIL.load(Ordering::Relaxed) {
            return Err(SensorError::Bus);
        }
        let t = SIM_TEMP_RAW.load(Ordering::Relaxed).to_be_bytes();
        let h = SIM_HUM_RAW.load(Ordering::Relaxed).to_be_bytes();
        Ok([t[0], t[1], crc8(&t), h[0], h[1], crc8(&h)])
    }
}

// ───────────────────────────────────────────────────────────────
// Frame parsing (pure, shared between targets)
// ───────────────────────────────────────────────────────────────

/// Validate and convert a raw 6-byte frame, per channel.
pub fn parse_frame(frame: &[u8; 6]) -> ShtReading {
    let temperature_c = if crc8(&frame[0..2]) == frame[2] {
        Some(convert_temperature(u16::from_be_bytes([frame[0], frame[1]])))
    } else {
        None
    };

    let humidity_pct = if crc8(&frame[3..5]) == frame[5] {
        Some(convert_humidity(u16::from_be_bytes([frame[3], frame[4]])))
    } else {
        None
    };

    ShtReading {
        temperature_c,
        humidity_pct,
    }
}

fn convert_temperature(raw: u16) -> f32 {
    -45.0 + 175.0 * f32::from(raw) / 65535.0
}

fn convert_humidity(raw: u16) -> f32 {
    100.0 * f32::from(raw) / 65535.0
}

/// CRC-8 as specified by Sensirion: polynomial 0x31, init 0xFF.
fn crc8(data: &[u8]) -> u8 {
    let mut crc: u8 = 0xFF;
    for &byte in data {
        crc ^= byte;
        for _ in 0..8 {
            crc = if crc & 0x80 != 0 {
                (crc << 1) ^ 0x31
            } else {
                crc << 1
            };
        }
    }
    crc
}

// ═══════════════════════════════════════════════════════════════
//  Tests
// ═══════════════════════════════════════════════════════════════
