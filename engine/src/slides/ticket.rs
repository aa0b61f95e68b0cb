//! Ticket slide: pick 5 of 50 numbers and 2 of 12 stars, then watch the draw.

use std::time::Duration;

use rand::{Rng, RngExt};

use longshot_types::Cue;

use crate::sound::SoundState;

pub const NUMBER_POOL: u8 = 50;
pub const STAR_POOL: u8 = 12;
pub const NUMBERS_PER_TICKET: usize = 5;
pub const STARS_PER_TICKET: usize = 2;

/// One ball drops every 400 ms during the draw; the outcome lands one
/// interval after the last star.
const REVEAL_INTERVAL: Duration = Duration::from_millis(400);

/// Which half of the ticket the selection cursor is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TicketGroup {
    Numbers,
    Stars,
}

/// How the finished draw compares against the player's picks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawOutcome {
    /// All five numbers and both stars matched.
    Jackpot,
    /// Two or more numbers matched: encouraging, not winning.
    Close,
    /// Fewer than two numbers matched.
    Miss,
}

#[derive(Debug)]
pub enum TicketPhase {
    Picking,
    Drawing {
        numbers: [u8; NUMBERS_PER_TICKET],
        stars: [u8; STARS_PER_TICKET],
        revealed_numbers: usize,
        revealed_stars: usize,
        since_reveal: Duration,
    },
    Revealed {
        numbers: [u8; NUMBERS_PER_TICKET],
        stars: [u8; STARS_PER_TICKET],
        matched_numbers: usize,
        matched_stars: usize,
    },
}

#[derive(Debug)]
pub struct TicketUnit {
    selected_numbers: Vec<u8>,
    selected_stars: Vec<u8>,
    cursor_group: TicketGroup,
    cursor: u8,
    phase: TicketPhase,
}

impl TicketUnit {
    #[must_use]
    pub fn new() -> Self {
        Self {
            selected_numbers: Vec::new(),
            selected_stars: Vec::new(),
            cursor_group: TicketGroup::Numbers,
            cursor: 1,
            phase: TicketPhase::Picking,
        }
    }

    #[must_use]
    pub fn phase(&self) -> &TicketPhase {
        &self.phase
    }

    #[must_use]
    pub fn selected_numbers(&self) -> &[u8] {
        &self.selected_numbers
    }

    #[must_use]
    pub fn selected_stars(&self) -> &[u8] {
        &self.selected_stars
    }

    #[must_use]
    pub fn cursor(&self) -> (TicketGroup, u8) {
        (self.cursor_group, self.cursor)
    }

    /// A full ticket is five numbers and two stars.
    #[must_use]
    pub fn ticket_complete(&self) -> bool {
        self.selected_numbers.len() == NUMBERS_PER_TICKET
            && self.selected_stars.len() == STARS_PER_TICKET
    }

    #[must_use]
    pub fn outcome(&self) -> Option<DrawOutcome> {
        match &self.phase {
            TicketPhase::Revealed {
                matched_numbers,
                matched_stars,
                ..
            } => Some(outcome_for(*matched_numbers, *matched_stars)),
            _ => None,
        }
    }

    /// Move the selection cursor within the active group, wrapping.
    pub fn move_cursor(&mut self, delta: i32) {
        let pool = match self.cursor_group {
            TicketGroup::Numbers => i32::from(NUMBER_POOL),
            TicketGroup::Stars => i32::from(STAR_POOL),
        };
        let zero_based = i32::from(self.cursor) - 1;
        let next = (zero_based + delta).rem_euclid(pool);
        self.cursor = (next + 1) as u8;
    }

    /// Flip the cursor between the number grid and the star row.
    pub fn switch_group(&mut self) {
        self.cursor_group = match self.cursor_group {
            TicketGroup::Numbers => TicketGroup::Stars,
            TicketGroup::Stars => TicketGroup::Numbers,
        };
        self.cursor = 1;
    }

    /// Toggle the ball under the cursor on or off the ticket.
    ///
    /// Clicks regardless, mirroring a button that is always pressable; a
    /// selection beyond the cap is simply not added.
    pub fn toggle_at_cursor(&mut self, sound: &mut SoundState) {
        if !matches!(self.phase, TicketPhase::Picking) {
            return;
        }
        sound.play(Cue::Click);
        let value = self.cursor;
        match self.cursor_group {
            TicketGroup::Numbers => toggle(&mut self.selected_numbers, value, NUMBERS_PER_TICKET),
            TicketGroup::Stars => toggle(&mut self.selected_stars, value, STARS_PER_TICKET),
        }
    }

    /// Start the draw. Requires a complete ticket and no draw in progress.
    pub fn start_draw(&mut self, sound: &mut SoundState, rng: &mut impl Rng) {
        if !matches!(self.phase, TicketPhase::Picking) || !self.ticket_complete() {
            return;
        }
        sound.play(Cue::Drumroll);
        self.phase = TicketPhase::Drawing {
            numbers: draw_unique(rng, NUMBER_POOL),
            stars: draw_unique(rng, STAR_POOL),
            revealed_numbers: 0,
            revealed_stars: 0,
            since_reveal: Duration::ZERO,
        };
    }

    /// Back to picking, with a blank ticket.
    pub fn reset(&mut self, sound: &mut SoundState) {
        sound.play(Cue::Click);
        self.selected_numbers.clear();
        self.selected_stars.clear();
        self.phase = TicketPhase::Picking;
    }

    pub fn advance(&mut self, delta: Duration, sound: &mut SoundState) {
        let TicketPhase::Drawing {
            numbers,
            stars,
            revealed_numbers,
            revealed_stars,
            since_reveal,
        } = &mut self.phase
        else {
            return;
        };

        *since_reveal = since_reveal.saturating_add(delta);
        while *since_reveal >= REVEAL_INTERVAL {
            *since_reveal -= REVEAL_INTERVAL;
            if *revealed_numbers < NUMBERS_PER_TICKET {
                *revealed_numbers += 1;
                sound.play(Cue::Pop);
            } else if *revealed_stars < STARS_PER_TICKET {
                *revealed_stars += 1;
                sound.play(Cue::Pop);
            } else {
                let matched_numbers = numbers
                    .iter()
                    .filter(|n| self.selected_numbers.contains(*n))
                    .count();
                let matched_stars = stars
                    .iter()
                    .filter(|s| self.selected_stars.contains(*s))
                    .count();

                let (numbers, stars) = (*numbers, *stars);
                sound.play(match outcome_for(matched_numbers, matched_stars) {
                    DrawOutcome::Jackpot => Cue::Fanfare,
                    DrawOutcome::Close => Cue::Success,
                    DrawOutcome::Miss => Cue::Wrong,
                });
                self.phase = TicketPhase::Revealed {
                    numbers,
                    stars,
                    matched_numbers,
                    matched_stars,
                };
                return;
            }
        }
    }
}

impl Default for TicketUnit {
    fn default() -> Self {
        Self::new()
    }
}

fn outcome_for(matched_numbers: usize, matched_stars: usize) -> DrawOutcome {
    if matched_numbers == NUMBERS_PER_TICKET && matched_stars == STARS_PER_TICKET {
        DrawOutcome::Jackpot
    } else if matched_numbers >= 2 {
        DrawOutcome::Close
    } else {
        DrawOutcome::Miss
    }
}

fn toggle(selection: &mut Vec<u8>, value: u8, cap: usize) {
    if let Some(pos) = selection.iter().position(|v| *v == value) {
        selection.remove(pos);
    } else if selection.len() < cap {
        selection.push(value);
    }
}

/// Draw N distinct balls from `1..=pool`.
fn draw_unique<const N: usize>(rng: &mut impl Rng, pool: u8) -> [u8; N] {
    let mut drawn = [0u8; N];
    let mut count = 0;
    while count < N {
        let ball = rng.random_range(1..=pool);
        if !drawn[..count].contains(&ball) {
            drawn[count] = ball;
            count += 1;
        }
    }
    drawn
}
