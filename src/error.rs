#![allow(dead_code)] // Error types reserved for future typed port returns

//! Unified error types for the RoomSense firmware.
//!
//! Follows embedded best practice: a single `Error` enum that every subsystem
//! can convert into, keeping the top-level control loop's error handling
//! uniform.  All variants are `Copy` so they can be cheaply passed around
//! without allocation.

use core::fmt;

// ---------------------------------------------------------------------------
// Top-level firmware error
// ---------------------------------------------------------------------------

/// Every fallible operation in the firmware funnels into this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A sensor could not be read or returned corrupt data.
    Sensor(SensorError),
    /// The display could not be initialised or written.
    Display(DisplayError),
    /// Peripheral initialisation failed.
    Init(&'static str),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sensor(e) => write!(f, "sensor: {e}"),
            Self::Display(e) => write!(f, "display: {e}"),
            Self::Init(msg) => write!(f, "init: {msg}"),
        }
    }
}

// ---------------------------------------------------------------------------
// Sensor errors
// ---------------------------------------------------------------------------

/// A failed read on one sampling cycle.  Never fatal: the affected channel
/// is reported as absent and the next cycle retries implicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SensorError {
    /// I2C transaction failed (bus error, arbitration loss, timeout).
    Bus,
    /// The sensor did not acknowledge its address or a command.
    NoAck,
    /// A measurement frame arrived but its CRC did not check out.
    CrcMismatch,
}

impl fmt::Display for SensorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bus => write!(f, "i2c bus error"),
            Self::NoAck => write!(f, "no ack from sensor"),
            Self::CrcMismatch => write!(f, "crc mismatch"),
        }
    }
}

impl From<SensorError> for Error {
    fn from(e: SensorError) -> Self {
        Self::Sensor(e)
    }
}

// ---------------------------------------------------------------------------
// Display errors
// ---------------------------------------------------------------------------

/// Display failures are detected once at startup and downgraded: rendering
/// calls are still issued but their effect is unobserved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayError {
    /// The controller did not respond to the init sequence.
    InitFailed,
    /// A frame write failed mid-transfer.
    Bus,
}

impl fmt::Display for DisplayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InitFailed => write!(f, "init failed"),
            Self::Bus => write!(f, "i2c bus error"),
        }
    }
}

impl From<DisplayError> for Error {
    fn from(e: DisplayError) -> Self {
        Self::Display(e)
    }
}
