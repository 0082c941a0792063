//! SSD1306 OLED display adapter.
//!
//! Implements [`DisplayPort`] over a 128x64 I2C panel using the `ssd1306`
//! buffered-graphics mode with `embedded-graphics` text drawing.
//!
//! Display-init failure is non-fatal: the adapter keeps accepting draw
//! calls and swallows them, so the loop keeps sampling and alarming with
//! nothing on screen.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: drives the panel through an `esp-idf-hal` I2C driver.
//! On host/test: records committed frames in memory for inspection.

/// Vertical pitch of one text row in pixels (ProFont 9pt glyph box).
#[cfg(target_os = "espidf")]
const LINE_PX: i32 = 12;

// ───────────────────────────────────────────────────────────────
// ESP-IDF implementation
// ───────────────────────────────────────────────────────────────

#[cfg(target_os = "espidf")]
mod target {
    use embedded_graphics::mono_font::MonoTextStyle;
    use embedded_graphics::pixelcolor::BinaryColor;
    use embedded_graphics::prelude::*;
    use embedded_graphics::text::{Baseline, Text};
    use esp_idf_hal::i2c::I2cDriver;
    use log::warn;
    use profont::PROFONT_9_POINT;
    use ssd1306::mode::BufferedGraphicsMode;
    use ssd1306::prelude::*;
    use ssd1306::{I2CDisplayInterface, Ssd1306};

    use super::LINE_PX;
    use crate::app::ports::DisplayPort;

    type Panel = Ssd1306<
        I2CInterface<I2cDriver<'static>>,
        DisplaySize128x64,
        BufferedGraphicsMode<DisplaySize128x64>,
    >;

    pub struct OledDisplay {
        /// `None` when init failed at boot; every call is then a no-op.
        panel: Option<Panel>,
    }

    impl OledDisplay {
        /// Bring up the panel.  A failed init is logged once and degrades
        /// to a dead display rather than an error.
        pub fn new(i2c: I2cDriver<'static>) -> Self {
            let interface = I2CDisplayInterface::new(i2c);
            let mut panel = Ssd1306::new(interface, DisplaySize128x64, DisplayRotation::Rotate0)
                .into_buffered_graphics_mode();

            match panel.init() {
                Ok(()) => Self { panel: Some(panel) },
                Err(e) => {
                    warn!("display init failed ({:?}); rendering disabled", e);
                    Self { panel: None }
                }
            }
        }
    }

    impl DisplayPort for OledDisplay {
        fn clear(&mut self) {
            if let Some(panel) = &mut self.panel {
                panel.clear_buffer();
            }
        }

        fn write_line(&mut self, row: u8, text: &str) {
            let Some(panel) = &mut self.panel else {
                return;
            };
            let style = MonoTextStyle::new(&PROFONT_9_POINT, BinaryColor::On);
            let origin = Point::new(0, i32::from(row) * LINE_PX);
            // Drawing into the buffer is infallible; errors can't occur
            // until flush.
            let _ = Text::with_baseline(text, origin, style, Baseline::Top).draw(panel);
        }

        fn flush(&mut self) {
            if let Some(panel) = &mut self.panel {
                if let Err(e) = panel.flush() {
                    log::warn!("display flush failed: {:?}", e);
                }
            }
        }
    }
}

#[cfg(target_os = "espidf")]
pub use target::OledDisplay;

// ───────────────────────────────────────────────────────────────
// Host simulation
// ───────────────────────────────────────────────────────────────

#[cfg(not(target_os = "espidf"))]
mod sim {
    use crate::app::ports::DisplayPort;

    /// In-memory stand-in: frames become inspectable string vectors.
    pub struct OledDisplay {
        pending: Vec<(u8, String)>,
        committed: Vec<Vec<(u8, String)>>,
    }

    impl OledDisplay {
        pub fn new() -> Self {
            Self {
                pending: Vec::new(),
                committed: Vec::new(),
            }
        }

        /// Frames committed so far, oldest first.
        pub fn frames(&self) -> &[Vec<(u8, String)>] {
            &self.committed
        }
    }

    impl Default for OledDisplay {
        fn default() -> Self {
            Self::new()
        }
    }

    impl DisplayPort for OledDisplay {
        fn clear(&mut self) {
            self.pending.clear();
        }

        fn write_line(&mut self, row: u8, text: &str) {
            self.pending.push((row, text.to_string()));
        }

        fn flush(&mut self) {
            self.committed.push(self.pending.clone());
        }
    }
}

#[cfg(not(target_os = "espidf"))]
pub use sim::OledDisplay;
