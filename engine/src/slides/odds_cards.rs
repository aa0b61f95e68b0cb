//! Odds-cards slide: everyday long shots against the jackpot, on a log scale.

use std::time::Duration;

use longshot_types::Cue;

use crate::sound::SoundState;

pub const ODDS_CARD_COUNT: usize = 4;

/// Odds behind each card, in deck order: four-leaf clover, becoming an
/// astronaut, being struck by lightning, winning the jackpot.
pub const ODDS_TABLE: [u64; ODDS_CARD_COUNT] = [10_000, 12_000, 1_000_000, 139_838_160];

/// The chart appears a beat after the last card flips face up.
const CHART_DELAY: Duration = Duration::from_millis(300);

#[derive(Debug, PartialEq, Eq)]
enum ChartState {
    Hidden,
    Pending(Duration),
    Shown,
}

#[derive(Debug)]
pub struct OddsUnit {
    flipped: [bool; ODDS_CARD_COUNT],
    chart: ChartState,
}

impl OddsUnit {
    #[must_use]
    pub fn new() -> Self {
        Self {
            flipped: [false; ODDS_CARD_COUNT],
            chart: ChartState::Hidden,
        }
    }

    #[must_use]
    pub fn flipped(&self, index: usize) -> bool {
        self.flipped.get(index).copied().unwrap_or(false)
    }

    /// The log-scale comparison chart, once all four cards have been seen.
    /// Flipping cards back down afterwards does not hide it again.
    #[must_use]
    pub fn chart_shown(&self) -> bool {
        self.chart == ChartState::Shown
    }

    /// Flip a card over (either direction).
    pub fn flip(&mut self, index: usize, sound: &mut SoundState) {
        let Some(card) = self.flipped.get_mut(index) else {
            return;
        };
        sound.play(Cue::Click);
        *card = !*card;
        if self.flipped.iter().all(|f| *f) && self.chart == ChartState::Hidden {
            self.chart = ChartState::Pending(Duration::ZERO);
        }
    }

    pub fn advance(&mut self, delta: Duration, sound: &mut SoundState) {
        if let ChartState::Pending(elapsed) = &mut self.chart {
            *elapsed = elapsed.saturating_add(delta);
            if *elapsed >= CHART_DELAY {
                sound.play(Cue::Surprise);
                self.chart = ChartState::Shown;
            }
        }
    }
}

impl Default for OddsUnit {
    fn default() -> Self {
        Self::new()
    }
}

/// Bar length for one odds value on the shared log10 scale, as a percent of
/// the widest bar. Floored at 2 so even 1-in-10,000 stays visible.
#[must_use]
pub fn bar_percent(odds: u64) -> f64 {
    let max = ODDS_TABLE[ODDS_CARD_COUNT - 1] as f64;
    let ratio = (odds as f64).log10() / max.log10();
    (ratio * 100.0).max(2.0)
}
