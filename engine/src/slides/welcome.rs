//! Opening slide: greeting, confetti, and the "begin" action.

use std::time::Duration;

use rand::{Rng, RngExt};

use longshot_types::Cue;

use crate::sound::SoundState;

/// Content fades in shortly after the slide mounts.
const REVEAL_DELAY: Duration = Duration::from_millis(300);
/// The begin action lingers long enough for the confetti to land.
const DEPART_DELAY: Duration = Duration::from_millis(800);
const CONFETTI_COUNT: usize = 30;

/// One confetti particle: a screen column (percent) and a start stagger.
#[derive(Debug, Clone, Copy)]
pub struct Confetti {
    pub column_pct: f32,
    pub delay_secs: f32,
}

#[derive(Debug)]
pub struct WelcomeUnit {
    reveal_elapsed: Duration,
    revealed: bool,
    confetti: Vec<Confetti>,
    depart_elapsed: Option<Duration>,
    departed: bool,
}

impl WelcomeUnit {
    #[must_use]
    pub fn new() -> Self {
        Self {
            reveal_elapsed: Duration::ZERO,
            revealed: false,
            confetti: Vec::new(),
            depart_elapsed: None,
            departed: false,
        }
    }

    #[must_use]
    pub fn revealed(&self) -> bool {
        self.revealed
    }

    #[must_use]
    pub fn confetti(&self) -> &[Confetti] {
        &self.confetti
    }

    #[must_use]
    pub fn begun(&self) -> bool {
        self.depart_elapsed.is_some() || self.departed
    }

    /// The "begin" call to action: celebrate, then move on after a beat.
    pub fn begin(&mut self, sound: &mut SoundState, rng: &mut impl Rng) {
        if self.begun() {
            return;
        }
        sound.play(Cue::Success);
        self.confetti = (0..CONFETTI_COUNT)
            .map(|_| Confetti {
                column_pct: rng.random_range(0.0..100.0),
                delay_secs: rng.random_range(0.0..0.5),
            })
            .collect();
        self.depart_elapsed = Some(Duration::ZERO);
    }

    /// Returns true exactly once, when the begin delay elapses and the deck
    /// should advance to the next slide.
    pub fn advance(&mut self, delta: Duration, sound: &mut SoundState) -> bool {
        if !self.revealed {
            self.reveal_elapsed = self.reveal_elapsed.saturating_add(delta);
            if self.reveal_elapsed >= REVEAL_DELAY {
                self.revealed = true;
                sound.play(Cue::Welcome);
            }
        }

        if let Some(elapsed) = self.depart_elapsed.as_mut() {
            *elapsed = elapsed.saturating_add(delta);
            if *elapsed >= DEPART_DELAY {
                self.depart_elapsed = None;
                self.departed = true;
                return true;
            }
        }
        false
    }
}

impl Default for WelcomeUnit {
    fn default() -> Self {
        Self::new()
    }
}
