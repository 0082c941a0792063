//! Level-polled button debouncer.
//!
//! ## Hardware
//!
//! Active-high momentary switch with external pull-down: the line rests
//! LOW and reads HIGH while pressed.  The main loop polls the raw level on
//! every pass and feeds it here together with the current monotonic time.
//!
//! ## Policy
//!
//! A raw level change is accepted as stable only once the debounce window
//! has elapsed since the last *accepted* transition.  Chatter inside the
//! window is absorbed without restarting the window — a bouncing contact
//! therefore settles exactly one window after the first accepted edge,
//! not one window after the last bounce.  Only the low→high stable
//! transition emits an event; release updates state silently.

/// Event emitted on a confirmed press (stable low→high transition).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonEvent {
    /// Switch the display to the other view.
    Toggle,
}

/// Two-state edge detector over the raw button line.
pub struct ButtonDebouncer {
    last_stable_level: bool,
    last_transition_ms: u32,
    debounce_ms: u32,
}

impl ButtonDebouncer {
    /// Starts from the rest level (LOW) with the window anchored at boot.
    pub fn new(debounce_ms: u32) -> Self {
        Self {
            last_stable_level: false,
            last_transition_ms: 0,
            debounce_ms,
        }
    }

    /// Call from the main loop on every pass.
    /// `raw_high` is the current raw line level; `now_ms` is monotonic.
    /// Returns a toggle event on a confirmed press, if any.
    pub fn poll(&mut self, raw_high: bool, now_ms: u32) -> Option<ButtonEvent> {
        if raw_high == self.last_stable_level {
            return None;
        }

        if now_ms.wrapping_sub(self.last_transition_ms) <= self.debounce_ms {
            // Inside the window: ignore the change, keep the window anchor.
            return None;
        }

        self.last_stable_level = raw_high;
        self.last_transition_ms = now_ms;

        if raw_high {
            Some(ButtonEvent::Toggle)
        } else {
            None
        }
    }
}
