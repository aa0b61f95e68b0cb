//! Basket slide: a 1-in-2 draw between one red and one green apple.

use std::time::Duration;

use rand::{Rng, RngExt};

use longshot_types::Cue;

use crate::sound::SoundState;

/// The reach-into-the-basket animation before a result lands.
const DRAW_DURATION: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Apple {
    Red,
    Green,
}

#[derive(Debug)]
pub struct BasketUnit {
    drawing: Option<Duration>,
    last_draw: Option<Apple>,
    red_count: u32,
    green_count: u32,
}

impl BasketUnit {
    #[must_use]
    pub fn new() -> Self {
        Self {
            drawing: None,
            last_draw: None,
            red_count: 0,
            green_count: 0,
        }
    }

    #[must_use]
    pub fn is_drawing(&self) -> bool {
        self.drawing.is_some()
    }

    #[must_use]
    pub fn last_draw(&self) -> Option<Apple> {
        self.last_draw
    }

    #[must_use]
    pub fn red_count(&self) -> u32 {
        self.red_count
    }

    #[must_use]
    pub fn green_count(&self) -> u32 {
        self.green_count
    }

    #[must_use]
    pub fn total(&self) -> u32 {
        self.red_count + self.green_count
    }

    /// Reach into the basket. Ignored while a draw is already animating.
    pub fn draw(&mut self, sound: &mut SoundState) {
        if self.drawing.is_some() {
            return;
        }
        sound.play(Cue::Pop);
        self.drawing = Some(Duration::ZERO);
    }

    /// Clear the running tally.
    pub fn reset(&mut self, sound: &mut SoundState) {
        sound.play(Cue::Click);
        self.last_draw = None;
        self.red_count = 0;
        self.green_count = 0;
    }

    pub fn advance(&mut self, delta: Duration, rng: &mut impl Rng) {
        let Some(elapsed) = self.drawing.as_mut() else {
            return;
        };
        *elapsed = elapsed.saturating_add(delta);
        if *elapsed < DRAW_DURATION {
            return;
        }
        let apple = if rng.random::<f64>() < 0.5 {
            Apple::Red
        } else {
            Apple::Green
        };
        match apple {
            Apple::Red => self.red_count += 1,
            Apple::Green => self.green_count += 1,
        }
        self.last_draw = Some(apple);
        self.drawing = None;
    }
}

impl Default for BasketUnit {
    fn default() -> Self {
        Self::new()
    }
}
