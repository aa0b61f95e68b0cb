//! Unit tests for the engine crate.
//!
//! All timing is driven through `advance` with synthetic durations; nothing
//! here sleeps.

use std::time::Duration;

use super::*;
use crate::slides::{
    DrawOutcome, NUMBERS_PER_TICKET, QUESTIONS, QuizPhase, STARS_PER_TICKET, TicketGroup,
    TicketPhase, bar_percent,
};

const TRANSITION: Duration = TRANSITION_DURATION;
const HALF_TRANSITION: Duration = Duration::from_millis(150);

fn test_app() -> App {
    App::with_seed(true, 7)
}

/// An app parked on `slide`, with the startup cues and events drained.
fn app_at(slide: SlideId) -> App {
    let mut app = test_app();
    app.go_to(slide);
    app.advance(TRANSITION);
    app.drain_cues();
    app.drain_analytics();
    app
}

// ----------------------------------------------------------------------
// Navigation state machine
// ----------------------------------------------------------------------

#[test]
fn out_of_range_requests_are_no_ops() {
    let mut nav = Navigation::new();
    assert!(!nav.request_index(-1));
    assert!(!nav.request_index(TOTAL_SLIDES as i64));
    assert!(!nav.request_index(i64::MAX));
    assert_eq!(nav.current(), SlideId::Welcome);
    assert!(!nav.transitioning());
}

#[test]
fn valid_request_shows_two_discrete_snapshots() {
    let mut nav = Navigation::new();
    assert!(nav.request_index(1));

    // First snapshot: locked, index unchanged.
    assert!(nav.transitioning());
    assert_eq!(nav.current(), SlideId::Welcome);

    // Second snapshot: after the delay, index and lock change together.
    let committed = nav.advance(TRANSITION).expect("transition must commit");
    assert_eq!(committed.from, SlideId::Welcome);
    assert_eq!(committed.to, SlideId::Basket);
    assert_eq!(nav.current(), SlideId::Basket);
    assert!(!nav.transitioning());
}

#[test]
fn partial_advance_does_not_commit() {
    let mut nav = Navigation::new();
    nav.request_index(1);
    assert!(nav.advance(HALF_TRANSITION).is_none());
    assert!(nav.transitioning());
    assert_eq!(nav.current(), SlideId::Welcome);
}

#[test]
fn requests_during_transition_are_dropped_not_queued() {
    let mut nav = Navigation::new();
    assert!(nav.request_index(3));
    assert!(!nav.request_index(1));
    assert!(!nav.request_index(5));
    assert!(!nav.go_prev());

    nav.advance(TRANSITION);
    assert_eq!(nav.current(), SlideId::Ticket);
    assert!(!nav.transitioning());

    // Nothing buffered: no further transition starts on its own.
    assert!(nav.advance(TRANSITION).is_none());
    assert_eq!(nav.current(), SlideId::Ticket);
}

#[test]
fn go_next_on_last_slide_is_a_no_op() {
    let mut nav = Navigation::new();
    nav.request_go_to(SlideId::Quiz);
    nav.advance(TRANSITION);

    assert!(!nav.go_next());
    assert_eq!(nav.current(), SlideId::Quiz);
    assert!(!nav.transitioning());
}

#[test]
fn go_prev_on_first_slide_is_a_no_op() {
    let mut nav = Navigation::new();
    assert!(!nav.go_prev());
    assert_eq!(nav.current(), SlideId::Welcome);
    assert!(!nav.transitioning());
}

#[test]
fn restart_returns_to_the_first_slide() {
    for slide in [SlideId::Basket, SlideId::Magnitude, SlideId::Quiz] {
        let mut nav = Navigation::new();
        nav.request_go_to(slide);
        nav.advance(TRANSITION);

        assert!(nav.restart());
        assert!(nav.transitioning());
        assert_eq!(nav.current(), slide);

        nav.advance(TRANSITION);
        assert_eq!(nav.current(), SlideId::Welcome);
        assert!(!nav.transitioning());
    }
}

#[test]
fn forward_then_immediate_back_keeps_the_forward_target() {
    let mut nav = Navigation::new();
    nav.request_go_to(SlideId::Ticket);
    nav.advance(TRANSITION);

    assert!(nav.go_next());
    assert!(!nav.go_prev());

    nav.advance(TRANSITION);
    assert_eq!(nav.current(), SlideId::Magnitude);
    assert!(!nav.transitioning());
}

// ----------------------------------------------------------------------
// App glue: cues, analytics, slide mounting
// ----------------------------------------------------------------------

#[test]
fn accepted_navigation_plays_the_whoosh_cue() {
    let mut app = test_app();
    app.drain_cues();
    app.go_next();
    assert_eq!(app.drain_cues(), vec![Cue::Whoosh]);
}

#[test]
fn rejected_navigation_plays_nothing() {
    let mut app = test_app();
    app.drain_cues();
    app.go_prev();
    assert!(app.drain_cues().is_empty());

    let mut app = app_at(SlideId::Quiz);
    app.go_next();
    assert!(app.drain_cues().is_empty());
}

#[test]
fn startup_records_a_view_of_the_first_slide() {
    let mut app = test_app();
    let events = app.drain_analytics();
    assert_eq!(
        events,
        vec![AnalyticsEvent::SlideView {
            slide: SlideId::Welcome,
            seconds_on_previous: 0,
        }]
    );
}

#[test]
fn committed_transition_records_time_spent_on_the_previous_slide() {
    let mut app = test_app();
    app.drain_analytics();

    app.advance(Duration::from_secs(5));
    app.go_next();
    app.advance(TRANSITION);

    let events = app.drain_analytics();
    assert_eq!(
        events,
        vec![AnalyticsEvent::SlideView {
            slide: SlideId::Basket,
            seconds_on_previous: 5,
        }]
    );
}

#[test]
fn committed_transition_mounts_a_fresh_unit() {
    let mut app = app_at(SlideId::Basket);
    app.activate();
    app.advance(Duration::from_millis(500));
    match app.slide() {
        SlideUnit::Basket(unit) => assert_eq!(unit.total(), 1),
        other => panic!("expected basket, got {:?}", other.id()),
    }

    // Leave and come back: the tally starts over.
    app.go_next();
    app.advance(TRANSITION);
    app.go_prev();
    app.advance(TRANSITION);
    match app.slide() {
        SlideUnit::Basket(unit) => assert_eq!(unit.total(), 0),
        other => panic!("expected basket, got {:?}", other.id()),
    }
}

#[test]
fn toggling_sound_records_the_preference_and_mutes_cues() {
    let mut app = test_app();
    app.drain_analytics();
    app.drain_cues();

    app.toggle_sound();
    assert!(!app.sound_enabled());
    assert_eq!(
        app.drain_analytics(),
        vec![AnalyticsEvent::SoundPreference { enabled: false }]
    );

    app.go_next();
    assert!(app.drain_cues().is_empty());
}

// ----------------------------------------------------------------------
// Welcome
// ----------------------------------------------------------------------

#[test]
fn welcome_reveals_after_a_beat_and_plays_its_cue() {
    let mut app = test_app();
    app.drain_cues();

    app.advance(Duration::from_millis(299));
    match app.slide() {
        SlideUnit::Welcome(unit) => assert!(!unit.revealed()),
        _ => unreachable!(),
    }
    assert!(app.drain_cues().is_empty());

    app.advance(Duration::from_millis(1));
    match app.slide() {
        SlideUnit::Welcome(unit) => assert!(unit.revealed()),
        _ => unreachable!(),
    }
    assert_eq!(app.drain_cues(), vec![Cue::Welcome]);
}

#[test]
fn begin_celebrates_then_advances_to_the_next_slide() {
    let mut app = test_app();
    app.advance(TRANSITION);
    app.drain_cues();

    app.activate();
    assert_eq!(app.drain_cues(), vec![Cue::Success]);
    match app.slide() {
        SlideUnit::Welcome(unit) => assert_eq!(unit.confetti().len(), 30),
        _ => unreachable!(),
    }

    // Still on the welcome slide until the depart delay runs out.
    app.advance(Duration::from_millis(799));
    assert!(!app.transitioning());

    app.advance(Duration::from_millis(1));
    assert!(app.transitioning());
    assert_eq!(app.drain_cues(), vec![Cue::Whoosh]);

    app.advance(TRANSITION);
    assert_eq!(app.current_slide(), SlideId::Basket);
}

#[test]
fn begin_is_idempotent() {
    let mut app = test_app();
    app.advance(TRANSITION);
    app.drain_cues();

    app.activate();
    app.activate();
    assert_eq!(app.drain_cues(), vec![Cue::Success]);
}

// ----------------------------------------------------------------------
// Basket
// ----------------------------------------------------------------------

#[test]
fn basket_draw_locks_until_the_result_lands() {
    let mut app = app_at(SlideId::Basket);

    app.activate();
    assert_eq!(app.drain_cues(), vec![Cue::Pop]);

    // A second press during the animation is swallowed.
    app.activate();
    assert!(app.drain_cues().is_empty());

    app.advance(Duration::from_millis(499));
    match app.slide() {
        SlideUnit::Basket(unit) => {
            assert!(unit.is_drawing());
            assert!(unit.last_draw().is_none());
        }
        _ => unreachable!(),
    }

    app.advance(Duration::from_millis(1));
    match app.slide() {
        SlideUnit::Basket(unit) => {
            assert!(!unit.is_drawing());
            assert!(unit.last_draw().is_some());
            assert_eq!(unit.total(), 1);
        }
        _ => unreachable!(),
    }
}

#[test]
fn basket_tallies_accumulate_and_reset() {
    let mut app = app_at(SlideId::Basket);
    for _ in 0..10 {
        app.activate();
        app.advance(Duration::from_millis(500));
    }
    match app.slide() {
        SlideUnit::Basket(unit) => {
            assert_eq!(unit.total(), 10);
            assert_eq!(unit.red_count() + unit.green_count(), 10);
        }
        _ => unreachable!(),
    }

    app.drain_cues();
    app.reset_slide();
    assert_eq!(app.drain_cues(), vec![Cue::Click]);
    match app.slide() {
        SlideUnit::Basket(unit) => {
            assert_eq!(unit.total(), 0);
            assert!(unit.last_draw().is_none());
        }
        _ => unreachable!(),
    }
}

// ----------------------------------------------------------------------
// Orchard
// ----------------------------------------------------------------------

#[test]
fn orchard_slider_clamps_and_clicks_on_tens() {
    let mut app = app_at(SlideId::Orchard);

    // Default 10, step to 20: lands on a multiple of ten.
    app.adjust(10);
    assert_eq!(app.drain_cues(), vec![Cue::Click]);

    // 20 -> 25: no ten crossed onto.
    app.adjust(5);
    assert!(app.drain_cues().is_empty());

    app.adjust(1000);
    match app.slide() {
        SlideUnit::Orchard(unit) => {
            assert_eq!(unit.count(), 100);
            assert!(unit.red_index() < 100);
            assert!((unit.chance_percent() - 1.0).abs() < f64::EPSILON);
        }
        _ => unreachable!(),
    }

    app.adjust(-1000);
    match app.slide() {
        SlideUnit::Orchard(unit) => {
            assert_eq!(unit.count(), 2);
            assert!(unit.red_index() < 2);
        }
        _ => unreachable!(),
    }

    // Pinned at the floor: no change, no click.
    app.drain_cues();
    app.adjust(-1);
    assert!(app.drain_cues().is_empty());
}

// ----------------------------------------------------------------------
// Ticket
// ----------------------------------------------------------------------

/// Fill the ticket with numbers 1..=5 and stars 1..=2 via the cursor.
fn fill_ticket(app: &mut App) {
    for _ in 0..NUMBERS_PER_TICKET {
        app.activate();
        app.adjust(1);
    }
    app.switch_group();
    for _ in 0..STARS_PER_TICKET {
        app.activate();
        app.adjust(1);
    }
    app.drain_cues();
}

#[test]
fn ticket_selection_is_capped_but_still_clicks() {
    let mut app = app_at(SlideId::Ticket);
    fill_ticket(&mut app);

    app.switch_group();
    app.adjust(10); // cursor to number 11
    app.activate(); // sixth number: rejected, still clicks
    assert_eq!(app.drain_cues(), vec![Cue::Click]);

    let ticket = app.ticket().expect("on the ticket slide");
    assert_eq!(ticket.selected_numbers().len(), NUMBERS_PER_TICKET);
    assert!(ticket.ticket_complete());
}

#[test]
fn ticket_draw_needs_a_complete_ticket() {
    let mut app = app_at(SlideId::Ticket);
    app.start_draw();
    assert!(app.drain_cues().is_empty());
    assert!(matches!(
        app.ticket().expect("ticket").phase(),
        TicketPhase::Picking
    ));
}

#[test]
fn ticket_draw_reveals_on_a_cadence_then_lands_an_outcome() {
    let mut app = app_at(SlideId::Ticket);
    fill_ticket(&mut app);

    app.start_draw();
    assert_eq!(app.drain_cues(), vec![Cue::Drumroll]);

    // Five numbers, one every 400 ms.
    for expected in 1..=NUMBERS_PER_TICKET {
        app.advance(Duration::from_millis(400));
        match app.ticket().expect("ticket").phase() {
            TicketPhase::Drawing {
                revealed_numbers, ..
            } => assert_eq!(*revealed_numbers, expected),
            other => panic!("expected drawing, got {other:?}"),
        }
        assert_eq!(app.drain_cues(), vec![Cue::Pop]);
    }

    // Two stars.
    for expected in 1..=STARS_PER_TICKET {
        app.advance(Duration::from_millis(400));
        match app.ticket().expect("ticket").phase() {
            TicketPhase::Drawing { revealed_stars, .. } => {
                assert_eq!(*revealed_stars, expected);
            }
            other => panic!("expected drawing, got {other:?}"),
        }
        assert_eq!(app.drain_cues(), vec![Cue::Pop]);
    }

    // One more interval lands the outcome with its verdict cue.
    app.advance(Duration::from_millis(400));
    let outcome = app
        .ticket()
        .and_then(|ticket| ticket.outcome())
        .expect("outcome after the draw");
    let cues = app.drain_cues();
    match outcome {
        DrawOutcome::Jackpot => assert_eq!(cues, vec![Cue::Fanfare]),
        DrawOutcome::Close => assert_eq!(cues, vec![Cue::Success]),
        DrawOutcome::Miss => assert_eq!(cues, vec![Cue::Wrong]),
    }
    let ticket = app.ticket().expect("ticket");
    match ticket.phase() {
        TicketPhase::Revealed {
            numbers,
            stars,
            matched_numbers,
            matched_stars,
        } => {
            assert_eq!(numbers.len(), NUMBERS_PER_TICKET);
            assert_eq!(stars.len(), STARS_PER_TICKET);
            assert!(*matched_numbers <= NUMBERS_PER_TICKET);
            assert!(*matched_stars <= STARS_PER_TICKET);
        }
        other => panic!("expected revealed, got {other:?}"),
    }
}

#[test]
fn ticket_reset_returns_to_a_blank_ticket() {
    let mut app = app_at(SlideId::Ticket);
    fill_ticket(&mut app);
    app.start_draw();
    app.advance(Duration::from_secs(10));

    app.reset_slide();
    let ticket = app.ticket().expect("ticket");
    assert!(matches!(ticket.phase(), TicketPhase::Picking));
    assert!(ticket.selected_numbers().is_empty());
    assert!(ticket.selected_stars().is_empty());
}

#[test]
fn ticket_cursor_wraps_within_its_group() {
    let mut app = app_at(SlideId::Ticket);
    app.adjust(-1);
    assert_eq!(
        app.ticket().expect("ticket").cursor(),
        (TicketGroup::Numbers, 50)
    );

    app.switch_group();
    app.adjust(12);
    assert_eq!(
        app.ticket().expect("ticket").cursor(),
        (TicketGroup::Stars, 1)
    );
}

// ----------------------------------------------------------------------
// Magnitude
// ----------------------------------------------------------------------

#[test]
fn magnitude_counter_steps_to_the_jackpot_odds() {
    let mut app = app_at(SlideId::Magnitude);

    app.activate();
    assert_eq!(app.drain_cues(), vec![Cue::Surprise]);

    // Eight steps, a click each.
    for step in 0..8 {
        app.advance(Duration::from_millis(300));
        assert_eq!(app.drain_cues(), vec![Cue::Click], "step {step}");
    }
    match app.slide() {
        SlideUnit::Magnitude(unit) => {
            assert_eq!(unit.shown_value(), Some(139_838_160));
            assert!(!unit.counter_done());
        }
        _ => unreachable!(),
    }

    // The closing beat.
    app.advance(Duration::from_millis(300));
    assert_eq!(app.drain_cues(), vec![Cue::Surprise]);
    match app.slide() {
        SlideUnit::Magnitude(unit) => assert!(unit.counter_done()),
        _ => unreachable!(),
    }

    // Restarting a finished counter does nothing.
    app.activate();
    assert!(app.drain_cues().is_empty());
}

#[test]
fn magnitude_cards_toggle() {
    let mut app = app_at(SlideId::Magnitude);
    app.select_option(0);
    app.select_option(0);
    match app.slide() {
        SlideUnit::Magnitude(unit) => assert!(unit.active_card().is_none()),
        _ => unreachable!(),
    }
    app.select_option(2);
    match app.slide() {
        SlideUnit::Magnitude(unit) => assert!(unit.active_card().is_some()),
        _ => unreachable!(),
    }
}

// ----------------------------------------------------------------------
// Odds cards
// ----------------------------------------------------------------------

#[test]
fn chart_appears_once_all_cards_have_been_seen() {
    let mut app = app_at(SlideId::OddsCards);

    for i in 0..4 {
        app.select_option(i);
    }
    assert_eq!(app.drain_cues(), vec![Cue::Click; 4]);
    assert!(!app.odds_cards().expect("odds").chart_shown());

    app.advance(Duration::from_millis(300));
    assert_eq!(app.drain_cues(), vec![Cue::Surprise]);
    assert!(app.odds_cards().expect("odds").chart_shown());

    // Flipping a card back down does not retract the chart.
    app.select_option(0);
    assert!(app.odds_cards().expect("odds").chart_shown());
}

#[test]
fn bar_percent_is_log_scaled_and_floored() {
    assert!((bar_percent(139_838_160) - 100.0).abs() < 1e-9);
    assert!(bar_percent(10_000) > 2.0);
    assert!(bar_percent(10_000) < bar_percent(1_000_000));
    assert!((bar_percent(1) - 2.0).abs() < 1e-9);
}

// ----------------------------------------------------------------------
// Timescale
// ----------------------------------------------------------------------

#[test]
fn timescale_calculation_records_the_experiment_once() {
    let mut app = app_at(SlideId::Timescale);

    app.adjust(3); // age 12
    app.drain_cues();

    app.activate();
    assert_eq!(app.drain_cues(), vec![Cue::Surprise]);
    assert_eq!(
        app.drain_analytics(),
        vec![AnalyticsEvent::ExperimentResult {
            age: 12,
            years_needed: 2_688_233,
            generations_needed: 33_603,
        }]
    );

    // A second press does not double-report.
    app.activate();
    assert!(app.drain_analytics().is_empty());
}

#[test]
fn timescale_reveal_plays_ten_ticks() {
    let mut app = app_at(SlideId::Timescale);
    app.activate();
    app.drain_cues();

    app.advance(Duration::from_secs(2));
    assert_eq!(app.drain_cues(), vec![Cue::Tick; 10]);

    // And then stays quiet.
    app.advance(Duration::from_secs(2));
    assert!(app.drain_cues().is_empty());
}

#[test]
fn timescale_age_clamps_to_its_range() {
    let mut app = app_at(SlideId::Timescale);
    app.adjust(100);
    match app.slide() {
        SlideUnit::Timescale(unit) => assert_eq!(unit.age(), 15),
        _ => unreachable!(),
    }
    app.adjust(-100);
    match app.slide() {
        SlideUnit::Timescale(unit) => assert_eq!(unit.age(), 5),
        _ => unreachable!(),
    }
}

// ----------------------------------------------------------------------
// Quiz
// ----------------------------------------------------------------------

#[test]
fn quiz_runs_through_to_the_certificate() {
    let mut app = app_at(SlideId::Quiz);

    app.activate(); // leave the intro
    assert_eq!(app.drain_cues(), vec![Cue::Click]);

    for (i, question) in QUESTIONS.iter().enumerate() {
        app.select_option(question.correct);
        assert_eq!(app.drain_cues(), vec![Cue::Success], "question {i}");

        // Locked: a second answer is ignored.
        app.select_option(0);
        assert!(app.drain_cues().is_empty());

        app.advance(Duration::from_millis(1500));
    }

    let quiz = app.quiz().expect("quiz");
    assert!(matches!(quiz.phase(), QuizPhase::Certificate));
    assert_eq!(quiz.correct_count(), QUESTIONS.len());
    assert_eq!(app.drain_cues(), vec![Cue::Fanfare]);
    assert_eq!(app.drain_analytics(), vec![AnalyticsEvent::Completed]);
}

#[test]
fn quiz_scores_wrong_answers() {
    let mut app = app_at(SlideId::Quiz);
    app.activate();
    app.drain_cues();

    let wrong = (QUESTIONS[0].correct + 1) % 4;
    app.select_option(wrong);
    assert_eq!(app.drain_cues(), vec![Cue::Wrong]);

    app.advance(Duration::from_millis(1500));
    let quiz = app.quiz().expect("quiz");
    assert_eq!(quiz.correct_count(), 0);
    assert!(matches!(
        quiz.phase(),
        QuizPhase::Question { index: 1, .. }
    ));
}

#[test]
fn quiz_feedback_delay_gates_the_next_question() {
    let mut app = app_at(SlideId::Quiz);
    app.activate();
    app.select_option(QUESTIONS[0].correct);

    app.advance(Duration::from_millis(1499));
    assert!(matches!(
        app.quiz().expect("quiz").phase(),
        QuizPhase::Question { index: 0, .. }
    ));

    app.advance(Duration::from_millis(1));
    assert!(matches!(
        app.quiz().expect("quiz").phase(),
        QuizPhase::Question { index: 1, .. }
    ));
}

#[test]
fn quiz_reset_clears_the_score_sheet() {
    let mut app = app_at(SlideId::Quiz);
    app.activate();
    app.select_option(QUESTIONS[0].correct);
    app.advance(Duration::from_millis(1500));

    app.reset_slide();
    let quiz = app.quiz().expect("quiz");
    assert!(matches!(quiz.phase(), QuizPhase::Intro));
    assert!(quiz.answers().is_empty());
}

#[test]
fn certificate_activate_restarts_the_deck() {
    let mut app = app_at(SlideId::Quiz);
    app.activate();
    for question in &QUESTIONS {
        app.select_option(question.correct);
        app.advance(Duration::from_millis(1500));
    }
    app.drain_cues();

    app.activate();
    assert!(app.transitioning());
    assert_eq!(app.drain_cues(), vec![Cue::Whoosh]);

    app.advance(TRANSITION);
    assert_eq!(app.current_slide(), SlideId::Welcome);
}
