//! Application state machine for Long Shot.
//!
//! Everything here is synchronous and deterministic: the [`App`] advances
//! only through [`App::tick`] (which measures the frame delta) or
//! [`App::advance`] (which takes one explicitly, for tests). Collaborators
//! with IO, the audio output and the analytics tracker, never appear in
//! this crate; the engine queues cues and analytics events and the
//! application shell drains both once per frame.

use std::time::{Duration, Instant};

use rand::SeedableRng;
use rand::rngs::StdRng;

pub mod analytics;
pub mod nav;
pub mod slides;
pub mod sound;

pub use analytics::{AnalyticsEvent, AnalyticsQueue};
pub use longshot_types::{Cue, SessionId, SlideId, TOTAL_SLIDES};
pub use nav::{CommittedTransition, Navigation, TRANSITION_DURATION};
pub use slides::SlideUnit;
pub use sound::SoundState;

use slides::{ComparisonCard, OddsUnit, QuizUnit, TicketUnit};

/// The whole application state: navigation, the mounted slide unit, the
/// sound dispatcher, and the pending analytics facts.
pub struct App {
    nav: Navigation,
    slide: SlideUnit,
    sound: SoundState,
    analytics: AnalyticsQueue,
    rng: StdRng,
    /// Monotonic session clock, the sum of all frame deltas.
    clock: Duration,
    /// Session-clock reading when the current slide became current.
    slide_entered_at: Duration,
    last_tick: Option<Instant>,
    should_quit: bool,
}

impl App {
    #[must_use]
    pub fn new(sound_enabled: bool) -> Self {
        Self::with_rng(sound_enabled, StdRng::from_rng(&mut rand::rng()))
    }

    /// Deterministic constructor for tests.
    #[must_use]
    pub fn with_seed(sound_enabled: bool, seed: u64) -> Self {
        Self::with_rng(sound_enabled, StdRng::seed_from_u64(seed))
    }

    fn with_rng(sound_enabled: bool, mut rng: StdRng) -> Self {
        let slide = SlideUnit::mount(SlideId::Welcome, &mut rng);
        let mut analytics = AnalyticsQueue::new();
        analytics.push(AnalyticsEvent::SlideView {
            slide: SlideId::Welcome,
            seconds_on_previous: 0,
        });
        Self {
            nav: Navigation::new(),
            slide,
            sound: SoundState::new(sound_enabled),
            analytics,
            rng,
            clock: Duration::ZERO,
            slide_entered_at: Duration::ZERO,
            last_tick: None,
            should_quit: false,
        }
    }

    // ------------------------------------------------------------------
    // Frame loop
    // ------------------------------------------------------------------

    /// Advance by the wall-clock time since the previous call.
    pub fn tick(&mut self) {
        let now = Instant::now();
        let delta = self
            .last_tick
            .map_or(Duration::ZERO, |last| now.saturating_duration_since(last));
        self.last_tick = Some(now);
        self.advance(delta);
    }

    /// Advance every active state machine by `delta`.
    pub fn advance(&mut self, delta: Duration) {
        self.clock = self.clock.saturating_add(delta);

        if let Some(committed) = self.nav.advance(delta) {
            let seconds_on_previous = (self.clock - self.slide_entered_at).as_secs();
            self.slide_entered_at = self.clock;
            self.analytics.push(AnalyticsEvent::SlideView {
                slide: committed.to,
                seconds_on_previous,
            });
            self.slide = SlideUnit::mount(committed.to, &mut self.rng);
        }

        match &mut self.slide {
            SlideUnit::Welcome(unit) => {
                if unit.advance(delta, &mut self.sound) {
                    self.go_next();
                }
            }
            SlideUnit::Basket(unit) => unit.advance(delta, &mut self.rng),
            SlideUnit::Orchard(_) => {}
            SlideUnit::Ticket(unit) => unit.advance(delta, &mut self.sound),
            SlideUnit::Magnitude(unit) => unit.advance(delta, &mut self.sound),
            SlideUnit::OddsCards(unit) => unit.advance(delta, &mut self.sound),
            SlideUnit::Timescale(unit) => unit.advance(delta, &mut self.sound),
            SlideUnit::Quiz(unit) => {
                if unit.advance(delta, &mut self.sound) {
                    self.analytics.push(AnalyticsEvent::Completed);
                }
            }
        }
    }

    // ------------------------------------------------------------------
    // Navigation
    // ------------------------------------------------------------------

    pub fn go_next(&mut self) {
        if self.nav.go_next() {
            self.sound.play(Cue::Whoosh);
        }
    }

    pub fn go_prev(&mut self) {
        if self.nav.go_prev() {
            self.sound.play(Cue::Whoosh);
        }
    }

    pub fn restart(&mut self) {
        if self.nav.restart() {
            self.sound.play(Cue::Whoosh);
        }
    }

    /// Jump straight to a slide (same drop semantics as next/prev).
    pub fn go_to(&mut self, slide: SlideId) {
        if self.nav.request_go_to(slide) {
            self.sound.play(Cue::Whoosh);
        }
    }

    #[must_use]
    pub fn current_slide(&self) -> SlideId {
        self.nav.current()
    }

    #[must_use]
    pub fn transitioning(&self) -> bool {
        self.nav.transitioning()
    }

    /// Progress of the in-flight transition animation, if any.
    #[must_use]
    pub fn transition_progress(&self) -> Option<f32> {
        self.nav.transition().map(|t| t.anim().progress())
    }

    // ------------------------------------------------------------------
    // Sound & lifecycle
    // ------------------------------------------------------------------

    #[must_use]
    pub fn sound_enabled(&self) -> bool {
        self.sound.enabled()
    }

    /// Flip the mute flag and record the new preference.
    pub fn toggle_sound(&mut self) {
        let enabled = self.sound.toggle();
        self.analytics
            .push(AnalyticsEvent::SoundPreference { enabled });
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Cues queued since the last drain; called once per frame by the shell.
    pub fn drain_cues(&mut self) -> Vec<Cue> {
        self.sound.drain()
    }

    /// Analytics events queued since the last drain.
    pub fn drain_analytics(&mut self) -> Vec<AnalyticsEvent> {
        self.analytics.drain()
    }

    // ------------------------------------------------------------------
    // Slide-local actions, routed from input handling
    // ------------------------------------------------------------------

    #[must_use]
    pub fn slide(&self) -> &SlideUnit {
        &self.slide
    }

    /// The primary action of the current slide (Enter).
    pub fn activate(&mut self) {
        // The certificate's "watch again" action leaves the slide entirely.
        if let SlideUnit::Quiz(unit) = &self.slide
            && matches!(unit.phase(), slides::QuizPhase::Certificate)
        {
            self.restart();
            return;
        }

        match &mut self.slide {
            SlideUnit::Welcome(unit) => unit.begin(&mut self.sound, &mut self.rng),
            SlideUnit::Basket(unit) => unit.draw(&mut self.sound),
            SlideUnit::Orchard(_) => {}
            SlideUnit::Ticket(unit) => unit.toggle_at_cursor(&mut self.sound),
            SlideUnit::Magnitude(unit) => unit.start_counter(&mut self.sound),
            SlideUnit::OddsCards(_) => {}
            SlideUnit::Timescale(unit) => unit.calculate(&mut self.sound, &mut self.analytics),
            SlideUnit::Quiz(unit) => match unit.phase() {
                slides::QuizPhase::Intro => unit.start(&mut self.sound),
                _ => unit.answer_at_cursor(&mut self.sound),
            },
        }
    }

    /// Vertical movement (Up/Down): sliders, cursors, option lists.
    pub fn adjust(&mut self, delta: i32) {
        match &mut self.slide {
            SlideUnit::Orchard(unit) => unit.adjust(delta, &mut self.sound, &mut self.rng),
            SlideUnit::Ticket(unit) => unit.move_cursor(delta),
            SlideUnit::Timescale(unit) => unit.adjust_age(delta, &mut self.sound),
            SlideUnit::Quiz(unit) => unit.move_cursor(delta),
            _ => {}
        }
    }

    /// Reset action (`r`): clears the current slide's local state where
    /// that is meaningful.
    pub fn reset_slide(&mut self) {
        match &mut self.slide {
            SlideUnit::Basket(unit) => unit.reset(&mut self.sound),
            SlideUnit::Ticket(unit) => unit.reset(&mut self.sound),
            SlideUnit::Quiz(unit) => unit.reset(&mut self.sound),
            _ => {}
        }
    }

    /// Tab: switch the ticket cursor between numbers and stars.
    pub fn switch_group(&mut self) {
        if let SlideUnit::Ticket(unit) = &mut self.slide {
            unit.switch_group();
        }
    }

    /// Start the lottery draw (`d` on the ticket slide).
    pub fn start_draw(&mut self) {
        if let SlideUnit::Ticket(unit) = &mut self.slide {
            unit.start_draw(&mut self.sound, &mut self.rng);
        }
    }

    /// Digit keys 1..=4: flip odds cards, toggle comparison cards, answer
    /// quiz options.
    pub fn select_option(&mut self, option: usize) {
        match &mut self.slide {
            SlideUnit::OddsCards(unit) => unit.flip(option, &mut self.sound),
            SlideUnit::Magnitude(unit) => {
                if let Some(card) = ComparisonCard::ALL.get(option) {
                    unit.toggle_card(*card, &mut self.sound);
                }
            }
            SlideUnit::Quiz(unit) => unit.answer(option, &mut self.sound),
            _ => {}
        }
    }

    #[must_use]
    pub fn ticket(&self) -> Option<&TicketUnit> {
        match &self.slide {
            SlideUnit::Ticket(unit) => Some(unit),
            _ => None,
        }
    }

    #[must_use]
    pub fn odds_cards(&self) -> Option<&OddsUnit> {
        match &self.slide {
            SlideUnit::OddsCards(unit) => Some(unit),
            _ => None,
        }
    }

    #[must_use]
    pub fn quiz(&self) -> Option<&QuizUnit> {
        match &self.slide {
            SlideUnit::Quiz(unit) => Some(unit),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests;
