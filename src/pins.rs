//! GPIO / peripheral pin assignments for the RoomSense main board.
//!
//! Single source of truth — every driver references this module rather than
//! hard-coding pin numbers.  Change a pin here and it propagates everywhere.
//!
//! The two I2C buses are owned by `esp-idf-hal` drivers constructed in
//! `main()`; their pin constants here document the board wiring.

// ---------------------------------------------------------------------------
// I2C bus 0 — SSD1306 OLED (128x64)
// ---------------------------------------------------------------------------

pub const OLED_SDA_GPIO: i32 = 14;
pub const OLED_SCL_GPIO: i32 = 15;
/// SSD1306 slave address (SA0 tied low).
pub const OLED_ADDR: u8 = 0x3C;

// ---------------------------------------------------------------------------
// I2C bus 1 — SHT31 humidity/temperature sensor
// ---------------------------------------------------------------------------

pub const SHT_SDA_GPIO: i32 = 1;
pub const SHT_SCL_GPIO: i32 = 2;
/// SHT31 slave address (ADDR pin tied low).
pub const SHT31_ADDR: u8 = 0x44;

// ---------------------------------------------------------------------------
// Sensors — Analog (ADC1)
// ---------------------------------------------------------------------------

/// Photoresistor in a voltage divider — ambient light level.
/// ADC1 channel 4 (GPIO 5 on ESP32-S3).
pub const LIGHT_ADC_GPIO: i32 = 5;

// ---------------------------------------------------------------------------
// User button (active-high with external pull-down)
// ---------------------------------------------------------------------------

/// Momentary push-button for view switching.  Rests LOW; pressed = HIGH.
pub const BUTTON_GPIO: i32 = 16;

// ---------------------------------------------------------------------------
// Alarm buzzer (active-high)
// ---------------------------------------------------------------------------

/// Piezo buzzer driven through an NPN transistor.  HIGH = sounding.
pub const BUZZER_GPIO: i32 = 4;
