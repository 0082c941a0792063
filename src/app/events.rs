//! Outbound application events.
//!
//! The [`AppService`](super::service::AppService) emits these through the
//! [`EventSink`](super::ports::EventSink) port.  Adapters on the other
//! side decide what to do with them — today that is the serial log.

use super::readings::ReadingSet;
use crate::view::ViewMode;

/// Structured events emitted by the application core.
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// One sampling cycle completed: the fresh readings and the alarm
    /// state evaluated from them.  Emitted once per cycle — this is the
    /// diagnostic record external log collection keys on.
    SampleCycle { readings: ReadingSet, alarm: bool },

    /// The alarm state flipped from off to on.
    AlarmRaised,

    /// The alarm state flipped from on to off.
    AlarmCleared,

    /// The user toggled the display view.
    ViewChanged(ViewMode),

    /// The application service has started.
    Started,
}
