//! Monotonic time adapter.
//!
//! The whole loop is paced off a single milliseconds-since-boot counter.
//!
//! - **`target_os = "espidf"`** — wraps `esp_timer_get_time()` from the
//!   ESP-IDF high-resolution timer (microsecond precision, monotonic).
//! - **`not(target_os = "espidf")`** — uses `std::time::Instant` for
//!   host-side testing and simulation.

pub struct Esp32TimeAdapter {
    #[cfg(not(target_os = "espidf"))]
    start: std::time::Instant,
}

impl Default for Esp32TimeAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl Esp32TimeAdapter {
    pub fn new() -> Self {
        Self {
            #[cfg(not(target_os = "espidf"))]
            start: std::time::Instant::now(),
        }
    }

    /// Milliseconds since boot, truncated to u32 (wraps at ~49.7 days —
    /// all consumers compare with `wrapping_sub`).
    #[cfg(target_os = "espidf")]
    pub fn uptime_ms(&self) -> u32 {
        ((unsafe { esp_idf_svc::sys::esp_timer_get_time() }) / 1_000) as u32
    }

    /// Milliseconds since boot, truncated to u32.
    #[cfg(not(target_os = "espidf"))]
    pub fn uptime_ms(&self) -> u32 {
        self.start.elapsed().as_millis() as u32
    }
}
