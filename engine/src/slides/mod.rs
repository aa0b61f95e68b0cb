//! Per-slide interaction state.
//!
//! One unit per slide, selected by the navigation index as a closed variant
//! set. A unit owns only slide-local state (tallies, sliders, in-progress
//! draws) and is rebuilt from scratch when its slide becomes current, so
//! leaving a slide drops every pending timer with it; a stale animation
//! cannot outlive its slide.

mod basket;
mod magnitude;
mod odds_cards;
mod orchard;
mod quiz;
mod ticket;
mod timescale;
mod welcome;

pub use basket::{Apple, BasketUnit};
pub use magnitude::{COUNTER_STEPS, ComparisonCard, JACKPOT_ODDS, MagnitudeUnit};
pub use odds_cards::{ODDS_CARD_COUNT, ODDS_TABLE, OddsUnit, bar_percent};
pub use orchard::{MAX_APPLES, MIN_APPLES, OrchardUnit, Reaction};
pub use quiz::{QUESTIONS, Question, QuizPhase, QuizUnit};
pub use ticket::{
    DrawOutcome, NUMBERS_PER_TICKET, NUMBER_POOL, STARS_PER_TICKET, STAR_POOL, TicketGroup,
    TicketPhase, TicketUnit,
};
pub use timescale::{AGE_MAX, AGE_MIN, GENERATION_YEARS, TimescaleUnit, YEARS_NEEDED};
pub use welcome::{Confetti, WelcomeUnit};

use longshot_types::SlideId;
use rand::Rng;

/// The interaction state of the currently mounted slide.
#[derive(Debug)]
pub enum SlideUnit {
    Welcome(WelcomeUnit),
    Basket(BasketUnit),
    Orchard(OrchardUnit),
    Ticket(TicketUnit),
    Magnitude(MagnitudeUnit),
    OddsCards(OddsUnit),
    Timescale(TimescaleUnit),
    Quiz(QuizUnit),
}

impl SlideUnit {
    /// Fresh state for the slide that just became current.
    pub fn mount(slide: SlideId, rng: &mut impl Rng) -> Self {
        match slide {
            SlideId::Welcome => SlideUnit::Welcome(WelcomeUnit::new()),
            SlideId::Basket => SlideUnit::Basket(BasketUnit::new()),
            SlideId::Orchard => SlideUnit::Orchard(OrchardUnit::new(rng)),
            SlideId::Ticket => SlideUnit::Ticket(TicketUnit::new()),
            SlideId::Magnitude => SlideUnit::Magnitude(MagnitudeUnit::new()),
            SlideId::OddsCards => SlideUnit::OddsCards(OddsUnit::new()),
            SlideId::Timescale => SlideUnit::Timescale(TimescaleUnit::new()),
            SlideId::Quiz => SlideUnit::Quiz(QuizUnit::new()),
        }
    }

    #[must_use]
    pub fn id(&self) -> SlideId {
        match self {
            SlideUnit::Welcome(_) => SlideId::Welcome,
            SlideUnit::Basket(_) => SlideId::Basket,
            SlideUnit::Orchard(_) => SlideId::Orchard,
            SlideUnit::Ticket(_) => SlideId::Ticket,
            SlideUnit::Magnitude(_) => SlideId::Magnitude,
            SlideUnit::OddsCards(_) => SlideId::OddsCards,
            SlideUnit::Timescale(_) => SlideId::Timescale,
            SlideUnit::Quiz(_) => SlideId::Quiz,
        }
    }
}
