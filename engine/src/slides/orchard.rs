//! Orchard slide: a slider thins the odds from 1-in-2 to 1-in-100.

use rand::{Rng, RngExt};

use longshot_types::Cue;

use crate::sound::SoundState;

pub const MIN_APPLES: u16 = 2;
pub const MAX_APPLES: u16 = 100;
const DEFAULT_APPLES: u16 = 10;

/// The mascot's face tracks how hopeless the search is getting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reaction {
    Easy,
    Tricky,
    UhOh,
    AlmostImpossible,
}

#[derive(Debug)]
pub struct OrchardUnit {
    count: u16,
    red_index: u16,
}

impl OrchardUnit {
    #[must_use]
    pub fn new(rng: &mut impl Rng) -> Self {
        let mut unit = Self {
            count: DEFAULT_APPLES,
            red_index: 0,
        };
        unit.red_index = rng.random_range(0..unit.count);
        unit
    }

    #[must_use]
    pub fn count(&self) -> u16 {
        self.count
    }

    /// Which apple in the grid is the red one.
    #[must_use]
    pub fn red_index(&self) -> u16 {
        self.red_index
    }

    /// Chance of finding the red apple, as a percentage.
    #[must_use]
    pub fn chance_percent(&self) -> f64 {
        100.0 / f64::from(self.count)
    }

    #[must_use]
    pub fn reaction(&self) -> Reaction {
        match self.count {
            0..=5 => Reaction::Easy,
            6..=20 => Reaction::Tricky,
            21..=50 => Reaction::UhOh,
            _ => Reaction::AlmostImpossible,
        }
    }

    /// Move the slider. Clicks on every multiple of ten it crosses onto,
    /// and re-hides the red apple somewhere in the new crowd.
    pub fn adjust(&mut self, delta: i32, sound: &mut SoundState, rng: &mut impl Rng) {
        let next = (i32::from(self.count) + delta).clamp(i32::from(MIN_APPLES), i32::from(MAX_APPLES));
        let next = next as u16;
        if next == self.count {
            return;
        }
        self.count = next;
        if self.count % 10 == 0 {
            sound.play(Cue::Click);
        }
        self.red_index = rng.random_range(0..self.count);
    }
}
