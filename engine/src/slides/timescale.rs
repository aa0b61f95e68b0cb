//! Timescale slide: how long weekly play takes to win on average.

use std::time::Duration;

use longshot_types::Cue;

use crate::analytics::{AnalyticsEvent, AnalyticsQueue};
use crate::sound::SoundState;

/// Expected years of weekly play before a jackpot, at 1-in-139,838,160 odds.
pub const YEARS_NEEDED: u64 = 2_688_233;
/// One human generation, for the "how many grandparents" framing.
pub const GENERATION_YEARS: u64 = 80;

pub const AGE_MIN: u8 = 5;
pub const AGE_MAX: u8 = 15;
const DEFAULT_AGE: u8 = 9;

/// The reveal is underscored by ten quick ticks.
const TICK_INTERVAL: Duration = Duration::from_millis(200);
const TICK_COUNT: u8 = 10;

#[derive(Debug)]
struct TickRun {
    played: u8,
    since: Duration,
}

#[derive(Debug)]
pub struct TimescaleUnit {
    age: u8,
    calculated: bool,
    ticks: Option<TickRun>,
}

impl TimescaleUnit {
    #[must_use]
    pub fn new() -> Self {
        Self {
            age: DEFAULT_AGE,
            calculated: false,
            ticks: None,
        }
    }

    #[must_use]
    pub fn age(&self) -> u8 {
        self.age
    }

    #[must_use]
    pub fn calculated(&self) -> bool {
        self.calculated
    }

    #[must_use]
    pub fn generations_needed() -> u64 {
        YEARS_NEEDED.div_ceil(GENERATION_YEARS)
    }

    /// Move the age slider. Clicks on every change.
    pub fn adjust_age(&mut self, delta: i32, sound: &mut SoundState) {
        let next = (i32::from(self.age) + delta).clamp(i32::from(AGE_MIN), i32::from(AGE_MAX));
        let next = next as u8;
        if next == self.age {
            return;
        }
        self.age = next;
        sound.play(Cue::Click);
    }

    /// Run the calculation: reveal the numbers and record the experiment.
    pub fn calculate(&mut self, sound: &mut SoundState, analytics: &mut AnalyticsQueue) {
        if self.calculated {
            return;
        }
        self.calculated = true;
        sound.play(Cue::Surprise);
        analytics.push(AnalyticsEvent::ExperimentResult {
            age: self.age,
            years_needed: YEARS_NEEDED,
            generations_needed: Self::generations_needed(),
        });
        self.ticks = Some(TickRun {
            played: 0,
            since: Duration::ZERO,
        });
    }

    pub fn advance(&mut self, delta: Duration, sound: &mut SoundState) {
        let Some(run) = self.ticks.as_mut() else {
            return;
        };
        run.since = run.since.saturating_add(delta);
        while run.since >= TICK_INTERVAL && run.played < TICK_COUNT {
            run.since -= TICK_INTERVAL;
            run.played += 1;
            sound.play(Cue::Tick);
        }
        if run.played >= TICK_COUNT {
            self.ticks = None;
        }
    }
}

impl Default for TimescaleUnit {
    fn default() -> Self {
        Self::new()
    }
}
