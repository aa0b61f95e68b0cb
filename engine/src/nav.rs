//! Slide navigation: a tiny Idle -> Transitioning -> Idle state machine.
//!
//! Time never comes from the wall clock here. The owner feeds frame deltas
//! through [`Navigation::advance`], so tests drive transitions with
//! synthetic durations instead of sleeping.

use std::time::Duration;

use longshot_types::SlideId;

/// How long a slide change stays in flight before the index commits.
///
/// Matches the content fade in the renderer: the swap happens only once the
/// old slide has fully dimmed, so the viewer never sees a hard pop.
pub const TRANSITION_DURATION: Duration = Duration::from_millis(300);

/// Elapsed/total animation clock for an in-flight transition.
#[derive(Debug, Clone)]
pub struct TransitionAnim {
    elapsed: Duration,
    duration: Duration,
}

impl TransitionAnim {
    fn new(duration: Duration) -> Self {
        Self {
            elapsed: Duration::ZERO,
            duration,
        }
    }

    fn advance(&mut self, delta: Duration) {
        self.elapsed = self.elapsed.saturating_add(delta);
    }

    /// Animation progress in `0.0..=1.0`.
    #[must_use]
    pub fn progress(&self) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (self.elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0)
    }

    fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }
}

/// An accepted navigation request waiting out its animation.
#[derive(Debug, Clone)]
pub struct Transition {
    target: SlideId,
    anim: TransitionAnim,
}

impl Transition {
    #[must_use]
    pub fn target(&self) -> SlideId {
        self.target
    }

    #[must_use]
    pub fn anim(&self) -> &TransitionAnim {
        &self.anim
    }
}

/// A transition that just committed during [`Navigation::advance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommittedTransition {
    pub from: SlideId,
    pub to: SlideId,
}

/// Owns the current slide index and the transition lock.
///
/// Every request is either accepted or silently dropped; boundary
/// navigation (next on the last slide, prev on the first) is ordinary user
/// behavior, not an error.
#[derive(Debug)]
pub struct Navigation {
    current: SlideId,
    transition: Option<Transition>,
}

impl Navigation {
    #[must_use]
    pub fn new() -> Self {
        Self {
            current: SlideId::Welcome,
            transition: None,
        }
    }

    #[must_use]
    pub fn current(&self) -> SlideId {
        self.current
    }

    /// True strictly while a navigation is in flight.
    #[must_use]
    pub fn transitioning(&self) -> bool {
        self.transition.is_some()
    }

    #[must_use]
    pub fn transition(&self) -> Option<&Transition> {
        self.transition.as_ref()
    }

    /// Request a move to the slide at `index`.
    ///
    /// Dropped (returns `false`, no state change) while a transition is in
    /// flight or when `index` names no slide. Requests are never queued: a
    /// second press during the animation simply vanishes.
    pub fn request_index(&mut self, index: i64) -> bool {
        let Some(target) = SlideId::from_index(index) else {
            return false;
        };
        self.request_go_to(target)
    }

    /// Request a move to `target`. Same drop semantics as [`Self::request_index`].
    pub fn request_go_to(&mut self, target: SlideId) -> bool {
        if self.transition.is_some() {
            return false;
        }
        tracing::debug!(from = %self.current, to = %target, "slide transition start");
        self.transition = Some(Transition {
            target,
            anim: TransitionAnim::new(TRANSITION_DURATION),
        });
        true
    }

    /// One slide forward.
    pub fn go_next(&mut self) -> bool {
        self.request_index(self.current.index() as i64 + 1)
    }

    /// One slide back.
    pub fn go_prev(&mut self) -> bool {
        self.request_index(self.current.index() as i64 - 1)
    }

    /// Back to the first slide.
    pub fn restart(&mut self) -> bool {
        self.request_index(0)
    }

    /// Advance the in-flight animation; commit the index when it finishes.
    ///
    /// The index swap and the lock release are one step: no observer can
    /// see the new index while `transitioning()` still reports true.
    pub fn advance(&mut self, delta: Duration) -> Option<CommittedTransition> {
        let transition = self.transition.as_mut()?;
        transition.anim.advance(delta);
        if !transition.anim.is_finished() {
            return None;
        }
        let target = transition.target;
        let from = self.current;
        self.current = target;
        self.transition = None;
        tracing::debug!(from = %from, to = %target, "slide transition commit");
        Some(CommittedTransition { from, to: target })
    }
}

impl Default for Navigation {
    fn default() -> Self {
        Self::new()
    }
}
