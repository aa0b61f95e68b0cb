//! Magnitude slide: counting the way up to 139,838,160.

use std::time::Duration;

use longshot_types::Cue;

use crate::sound::SoundState;

/// EuroMillions jackpot odds: one in this many.
pub const JACKPOT_ODDS: u64 = 139_838_160;

/// The counter jumps an order of magnitude at a time rather than actually
/// counting; the point is the punchline, not the arithmetic.
pub const COUNTER_STEPS: [u64; 8] = [
    1_000,
    10_000,
    100_000,
    1_000_000,
    10_000_000,
    50_000_000,
    100_000_000,
    JACKPOT_ODDS,
];

const STEP_INTERVAL: Duration = Duration::from_millis(300);

/// The three "how much is that" comparison cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComparisonCard {
    Countries,
    Stadiums,
    Sand,
}

impl ComparisonCard {
    pub const ALL: [ComparisonCard; 3] = [
        ComparisonCard::Countries,
        ComparisonCard::Stadiums,
        ComparisonCard::Sand,
    ];
}

#[derive(Debug)]
enum CounterState {
    Idle,
    Running { step: usize, since: Duration },
    Done,
}

#[derive(Debug)]
pub struct MagnitudeUnit {
    counter: CounterState,
    active_card: Option<ComparisonCard>,
}

impl MagnitudeUnit {
    #[must_use]
    pub fn new() -> Self {
        Self {
            counter: CounterState::Idle,
            active_card: None,
        }
    }

    /// Value the counter currently shows, once started.
    #[must_use]
    pub fn shown_value(&self) -> Option<u64> {
        match &self.counter {
            CounterState::Idle => None,
            CounterState::Running { step, .. } => {
                if *step == 0 {
                    Some(0)
                } else {
                    Some(COUNTER_STEPS[step - 1])
                }
            }
            CounterState::Done => Some(JACKPOT_ODDS),
        }
    }

    /// True once the counter has landed on the final value.
    #[must_use]
    pub fn counter_done(&self) -> bool {
        matches!(self.counter, CounterState::Done)
    }

    #[must_use]
    pub fn active_card(&self) -> Option<ComparisonCard> {
        self.active_card
    }

    /// Kick off the counter. Ignored once it has run.
    pub fn start_counter(&mut self, sound: &mut SoundState) {
        if !matches!(self.counter, CounterState::Idle) {
            return;
        }
        sound.play(Cue::Surprise);
        self.counter = CounterState::Running {
            step: 0,
            since: Duration::ZERO,
        };
    }

    /// Toggle a comparison card's detail text.
    pub fn toggle_card(&mut self, card: ComparisonCard, sound: &mut SoundState) {
        sound.play(Cue::Surprise);
        self.active_card = if self.active_card == Some(card) {
            None
        } else {
            Some(card)
        };
    }

    pub fn advance(&mut self, delta: Duration, sound: &mut SoundState) {
        let CounterState::Running { step, since } = &mut self.counter else {
            return;
        };
        *since = since.saturating_add(delta);
        while *since >= STEP_INTERVAL {
            *since -= STEP_INTERVAL;
            if *step < COUNTER_STEPS.len() {
                *step += 1;
                sound.play(Cue::Click);
            } else {
                self.counter = CounterState::Done;
                sound.play(Cue::Surprise);
                return;
            }
        }
    }
}

impl Default for MagnitudeUnit {
    fn default() -> Self {
        Self::new()
    }
}
