//! Analytics events queued by the engine for the tracker to send.
//!
//! The engine records what happened; the application shell drains this
//! queue each frame and forwards events to the remote store. Keeping the
//! queue here means the state machine stays synchronous and testable while
//! the network side stays fire-and-forget.

use longshot_types::SlideId;

/// One analytics fact produced by the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalyticsEvent {
    /// A slide became current, after spending `seconds_on_previous` whole
    /// seconds on the slide it replaced.
    SlideView {
        slide: SlideId,
        seconds_on_previous: u64,
    },
    /// The viewer reached the certificate.
    Completed,
    /// The mute toggle changed the sound preference.
    SoundPreference { enabled: bool },
    /// The timescale experiment ran with the viewer's age input.
    ExperimentResult {
        age: u8,
        years_needed: u64,
        generations_needed: u64,
    },
}

#[derive(Debug, Default)]
pub struct AnalyticsQueue {
    pending: Vec<AnalyticsEvent>,
}

impl AnalyticsQueue {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: AnalyticsEvent) {
        self.pending.push(event);
    }

    pub fn drain(&mut self) -> Vec<AnalyticsEvent> {
        std::mem::take(&mut self.pending)
    }
}
