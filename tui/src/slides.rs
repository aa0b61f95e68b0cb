//! One renderer per slide.
//!
//! Renderers are pure functions of the engine state: they own no state of
//! their own and repaint from scratch every frame.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap};

use longshot_engine::slides::{
    Apple, BasketUnit, ComparisonCard, DrawOutcome, MagnitudeUnit, NUMBERS_PER_TICKET, ODDS_TABLE,
    OddsUnit, OrchardUnit, QUESTIONS, QuizPhase, QuizUnit, Reaction, STARS_PER_TICKET,
    TicketGroup, TicketPhase, TicketUnit, TimescaleUnit, WelcomeUnit, YEARS_NEEDED, bar_percent,
};
use longshot_engine::{App, SlideUnit};

use crate::theme;

pub(crate) fn render(frame: &mut Frame, area: Rect, app: &App) {
    match app.slide() {
        SlideUnit::Welcome(unit) => render_welcome(frame, area, unit),
        SlideUnit::Basket(unit) => render_basket(frame, area, unit),
        SlideUnit::Orchard(unit) => render_orchard(frame, area, unit),
        SlideUnit::Ticket(unit) => render_ticket(frame, area, unit),
        SlideUnit::Magnitude(unit) => render_magnitude(frame, area, unit),
        SlideUnit::OddsCards(unit) => render_odds_cards(frame, area, unit),
        SlideUnit::Timescale(unit) => render_timescale(frame, area, unit),
        SlideUnit::Quiz(unit) => render_quiz(frame, area, unit),
    }
}

/// Format with thousands separators: 139838160 -> "139,838,160".
fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

fn card_block(title: &str) -> Block<'_> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::muted())
        .padding(Padding::horizontal(1))
        .title(Span::styled(format!(" {title} "), theme::title()))
}

fn header_lines(title: &str, subtitle: &str) -> Vec<Line<'static>> {
    vec![
        Line::styled(title.to_string(), theme::title()).alignment(Alignment::Center),
        Line::styled(subtitle.to_string(), theme::subtitle()).alignment(Alignment::Center),
        Line::default(),
    ]
}

/// A horizontal meter: filled portion styled, remainder muted.
fn meter(width: usize, pct: f64, style: Style) -> Line<'static> {
    let width = width.max(1);
    let filled = ((pct / 100.0) * width as f64).round().clamp(0.0, width as f64) as usize;
    Line::from(vec![
        Span::styled("█".repeat(filled), style),
        Span::styled("░".repeat(width - filled), theme::muted()),
    ])
}

// ----------------------------------------------------------------------
// Welcome
// ----------------------------------------------------------------------

fn render_welcome(frame: &mut Frame, area: Rect, unit: &WelcomeUnit) {
    if !unit.revealed() {
        return;
    }

    let mut lines = vec![
        Line::default(),
        Line::styled("Hi there!", theme::title().add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center),
        Line::default(),
        Line::styled("I'm Albert, and I love puzzling out numbers!", theme::text())
            .alignment(Alignment::Center),
        Line::styled(
            "Today we'll discover something amazing about the lottery.",
            theme::text(),
        )
        .alignment(Alignment::Center),
        Line::styled("Ready for an adventure?", theme::text()).alignment(Alignment::Center),
        Line::default(),
        Line::styled("[ Press Enter to begin! ]", theme::accent()).alignment(Alignment::Center),
        Line::default(),
        Line::styled("E = mc²", theme::muted()).alignment(Alignment::Center),
    ];

    if unit.begun() {
        // Confetti burst across the top of the card.
        let width = area.width.saturating_sub(4).max(1) as usize;
        let mut burst = vec![' '; width];
        for particle in unit.confetti() {
            let col = ((particle.column_pct / 100.0) * (width as f32 - 1.0)) as usize;
            burst[col.min(width - 1)] = '*';
        }
        let burst: String = burst.into_iter().collect();
        lines.insert(
            0,
            Line::styled(burst, theme::highlight()).alignment(Alignment::Center),
        );
    }

    let card = Paragraph::new(lines)
        .block(card_block("Long Shot"))
        .wrap(Wrap { trim: true });
    frame.render_widget(card, area);
}

// ----------------------------------------------------------------------
// Basket
// ----------------------------------------------------------------------

fn render_basket(frame: &mut Frame, area: Rect, unit: &BasketUnit) {
    let mut lines = header_lines(
        "What is a chance?",
        "One red and one green apple hide in the basket.",
    );

    lines.push(
        Line::styled(
            "Close your eyes and pull one out. What are the odds it's red?",
            theme::text(),
        )
        .alignment(Alignment::Center),
    );
    lines.push(
        Line::styled("Exactly - one in two!", theme::accent()).alignment(Alignment::Center),
    );
    lines.push(Line::default());

    let status = if unit.is_drawing() {
        Line::styled("Reaching in...", theme::muted())
    } else {
        match unit.last_draw() {
            Some(Apple::Red) => Line::styled("You drew a RED apple!", theme::failure()),
            Some(Apple::Green) => Line::styled("You drew a GREEN apple!", theme::success()),
            None => Line::styled("[ Enter: reach into the basket ]", theme::accent()),
        }
    };
    lines.push(status.alignment(Alignment::Center));
    lines.push(Line::default());

    if unit.total() > 0 {
        let total = f64::from(unit.total());
        let red_pct = f64::from(unit.red_count()) / total * 100.0;
        let green_pct = f64::from(unit.green_count()) / total * 100.0;
        lines.push(
            Line::from(vec![
                Span::styled(format!("red {:>3}  ", unit.red_count()), theme::text()),
                Span::styled(format!("green {:>3}", unit.green_count()), theme::text()),
            ])
            .alignment(Alignment::Center),
        );
        lines.push(
            meter(24, red_pct, Style::default().fg(theme::colors::RED))
                .alignment(Alignment::Center),
        );
        lines.push(
            meter(24, green_pct, Style::default().fg(theme::colors::GREEN))
                .alignment(Alignment::Center),
        );
        lines.push(
            Line::styled(
                "Try it many times - it comes out about even!",
                theme::muted(),
            )
            .alignment(Alignment::Center),
        );
        lines.push(
            Line::styled("[ r: clear the tally ]", theme::muted()).alignment(Alignment::Center),
        );
    }

    let card = Paragraph::new(lines)
        .block(card_block("Slide 2"))
        .wrap(Wrap { trim: true });
    frame.render_widget(card, area);
}

// ----------------------------------------------------------------------
// Orchard
// ----------------------------------------------------------------------

fn render_orchard(frame: &mut Frame, area: Rect, unit: &OrchardUnit) {
    let mut lines = header_lines(
        "What if there are more apples?",
        "The more apples, the harder the red one is to find!",
    );

    lines.push(
        Line::from(vec![
            Span::styled("Apples in the basket: ", theme::text()),
            Span::styled(unit.count().to_string(), theme::accent()),
            Span::styled("  (Up/Down to change, PgUp/PgDn for 10)", theme::muted()),
        ])
        .alignment(Alignment::Center),
    );
    lines.push(Line::default());

    // The orchard grid, ten apples per row, the red one marked.
    for row_start in (0..unit.count()).step_by(10) {
        let mut spans = Vec::new();
        for i in row_start..(row_start + 10).min(unit.count()) {
            if i == unit.red_index() {
                spans.push(Span::styled("@ ", theme::failure()));
            } else {
                spans.push(Span::styled("o ", Style::default().fg(theme::colors::GREEN)));
            }
        }
        lines.push(Line::from(spans).alignment(Alignment::Center));
    }
    lines.push(Line::default());

    let chance = unit.chance_percent();
    lines.push(
        Line::from(vec![
            Span::styled("Chance of the red one: ", theme::text()),
            Span::styled(format!("1 in {}", unit.count()), theme::accent()),
            Span::styled(format!("  ({chance:.1}%)"), theme::muted()),
        ])
        .alignment(Alignment::Center),
    );
    lines.push(
        meter(30, chance.max(1.0), Style::default().fg(theme::colors::TEAL))
            .alignment(Alignment::Center),
    );

    let (face, verdict, style) = match unit.reaction() {
        Reaction::Easy => (":)", "Easy!", theme::success()),
        Reaction::Tricky => (":/", "Getting trickier...", theme::highlight()),
        Reaction::UhOh => (":(", "Uh-oh...", theme::failure()),
        Reaction::AlmostImpossible => (":O", "Almost impossible!", theme::failure()),
    };
    lines.push(
        Line::from(vec![
            Span::styled(format!("{face}  "), style),
            Span::styled(verdict, style),
        ])
        .alignment(Alignment::Center),
    );

    let card = Paragraph::new(lines)
        .block(card_block("Slide 3"))
        .wrap(Wrap { trim: true });
    frame.render_widget(card, area);
}

// ----------------------------------------------------------------------
// Ticket
// ----------------------------------------------------------------------

fn render_ticket(frame: &mut Frame, area: Rect, unit: &TicketUnit) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(10), Constraint::Length(6)])
        .split(area);

    let (cursor_group, cursor_value) = unit.cursor();
    let picking = matches!(unit.phase(), TicketPhase::Picking);

    let mut lines = header_lines(
        "How does the lottery work?",
        "Pick 5 numbers out of 50 and 2 stars out of 12!",
    );

    lines.push(
        Line::from(vec![
            Span::styled(
                format!("numbers {}/{NUMBERS_PER_TICKET}", unit.selected_numbers().len()),
                theme::text(),
            ),
            Span::raw("   "),
            Span::styled(
                format!("stars {}/{STARS_PER_TICKET}", unit.selected_stars().len()),
                theme::text(),
            ),
        ])
        .alignment(Alignment::Center),
    );

    for row_start in 0..5u8 {
        let mut spans = Vec::new();
        for col in 0..10u8 {
            let value = row_start * 10 + col + 1;
            spans.push(ball_span(
                value,
                unit.selected_numbers(),
                drawn_numbers(unit),
                picking && cursor_group == TicketGroup::Numbers && cursor_value == value,
            ));
        }
        lines.push(Line::from(spans).alignment(Alignment::Center));
    }
    lines.push(Line::styled("stars:", theme::muted()).alignment(Alignment::Center));
    let mut star_spans = Vec::new();
    for value in 1..=12u8 {
        star_spans.push(ball_span(
            value,
            unit.selected_stars(),
            drawn_stars(unit),
            picking && cursor_group == TicketGroup::Stars && cursor_value == value,
        ));
    }
    lines.push(Line::from(star_spans).alignment(Alignment::Center));

    let grid = Paragraph::new(lines).block(card_block("Slide 4"));
    frame.render_widget(grid, chunks[0]);

    // Status panel: what the draw is doing and how it ended.
    let mut status = Vec::new();
    match unit.phase() {
        TicketPhase::Picking => {
            let hint = if unit.ticket_complete() {
                Line::styled("[ d: start the draw! ]", theme::accent())
            } else {
                Line::styled(
                    "Up/Down move, Tab numbers<->stars, Enter picks a ball",
                    theme::muted(),
                )
            };
            status.push(hint.alignment(Alignment::Center));
        }
        TicketPhase::Drawing {
            numbers,
            stars,
            revealed_numbers,
            revealed_stars,
            ..
        } => {
            status.push(Line::styled("Drawing...", theme::highlight()).alignment(Alignment::Center));
            status.push(
                drawn_row(
                    &numbers[..*revealed_numbers],
                    &stars[..*revealed_stars],
                    unit,
                )
                .alignment(Alignment::Center),
            );
        }
        TicketPhase::Revealed {
            numbers,
            stars,
            matched_numbers,
            matched_stars,
        } => {
            status.push(drawn_row(numbers, stars, unit).alignment(Alignment::Center));
            status.push(
                Line::styled(
                    format!("Matched {matched_numbers} numbers and {matched_stars} stars"),
                    theme::text(),
                )
                .alignment(Alignment::Center),
            );
            let verdict = match unit.outcome() {
                Some(DrawOutcome::Jackpot) => {
                    Line::styled("JACKPOT! (That was pure luck!)", theme::success())
                }
                Some(DrawOutcome::Close) => {
                    Line::styled("Not bad - but not the jackpot!", theme::highlight())
                }
                _ => Line::styled("No luck! Try again!", theme::failure()),
            };
            status.push(verdict.alignment(Alignment::Center));
            status.push(
                Line::styled("[ r: play again ]", theme::muted()).alignment(Alignment::Center),
            );
        }
    }
    let panel = Paragraph::new(status).block(card_block("Draw"));
    frame.render_widget(panel, chunks[1]);
}

fn drawn_numbers(unit: &TicketUnit) -> &[u8] {
    match unit.phase() {
        TicketPhase::Drawing {
            numbers,
            revealed_numbers,
            ..
        } => &numbers[..*revealed_numbers],
        TicketPhase::Revealed { numbers, .. } => numbers,
        TicketPhase::Picking => &[],
    }
}

fn drawn_stars(unit: &TicketUnit) -> &[u8] {
    match unit.phase() {
        TicketPhase::Drawing {
            stars,
            revealed_stars,
            ..
        } => &stars[..*revealed_stars],
        TicketPhase::Revealed { stars, .. } => stars,
        TicketPhase::Picking => &[],
    }
}

fn ball_span(value: u8, selected: &[u8], drawn: &[u8], under_cursor: bool) -> Span<'static> {
    let is_selected = selected.contains(&value);
    let is_drawn = drawn.contains(&value);
    let mut style = if is_selected && is_drawn {
        theme::matched_ball()
    } else if is_selected {
        theme::selected_ball()
    } else if is_drawn {
        theme::drawn_ball()
    } else {
        theme::muted()
    };
    if under_cursor {
        style = style.add_modifier(Modifier::REVERSED);
    }
    Span::styled(format!("{value:>3} "), style)
}

fn drawn_row(numbers: &[u8], stars: &[u8], unit: &TicketUnit) -> Line<'static> {
    let mut spans = Vec::new();
    for n in numbers {
        let style = if unit.selected_numbers().contains(n) {
            theme::matched_ball()
        } else {
            theme::drawn_ball()
        };
        spans.push(Span::styled(format!(" {n:>2} "), style));
        spans.push(Span::raw(" "));
    }
    spans.push(Span::raw("| "));
    for s in stars {
        let style = if unit.selected_stars().contains(s) {
            theme::matched_ball()
        } else {
            Style::default().fg(theme::colors::YELLOW)
        };
        spans.push(Span::styled(format!("*{s} "), style));
    }
    Line::from(spans)
}

// ----------------------------------------------------------------------
// Magnitude
// ----------------------------------------------------------------------

const MAGNITUDE_CARDS: [(&str, &str, &str); 3] = [
    (
        "Whole countries",
        "Imagine everyone in Russia, Germany and France playing at once...",
        "144M + 83M + 67M people - nearly 294 million players for one jackpot!",
    ),
    (
        "Football stadiums",
        "Picture a stadium that seats 50,000 people...",
        "You would need 2,797 stadiums packed full. More than exist on Earth!",
    ),
    (
        "Grains of sand",
        "If every ticket were a grain of sand...",
        "That sack of sand would weigh about 14 tonnes. As much as 3 elephants!",
    ),
];

fn render_magnitude(frame: &mut Frame, area: Rect, unit: &MagnitudeUnit) {
    let mut lines = header_lines(
        "How big is that number?",
        "The odds are 1 in 139,838,160. But what does that mean?",
    );

    let counter = match unit.shown_value() {
        None => Line::from(vec![
            Span::styled("???", theme::title()),
            Span::styled("   [ Enter: count it up! ]", theme::accent()),
        ]),
        Some(value) => Line::styled(group_thousands(value), theme::title()),
    };
    lines.push(counter.alignment(Alignment::Center));
    if unit.counter_done() {
        lines.push(
            Line::styled(
                "One hundred thirty-nine million, eight hundred thirty-eight thousand, one hundred sixty!",
                theme::muted(),
            )
            .alignment(Alignment::Center),
        );
    }
    lines.push(Line::default());

    for (i, (title, summary, detail)) in MAGNITUDE_CARDS.iter().enumerate() {
        let active = matches!(
            (unit.active_card(), i),
            (Some(ComparisonCard::Countries), 0)
                | (Some(ComparisonCard::Stadiums), 1)
                | (Some(ComparisonCard::Sand), 2)
        );
        let marker = if active { ">" } else { " " };
        lines.push(Line::from(vec![
            Span::styled(format!("{marker} [{}] ", i + 1), theme::accent()),
            Span::styled(*title, if active { theme::highlight() } else { theme::text() }),
        ]));
        lines.push(
            Line::styled(
                format!("      {}", if active { *detail } else { *summary }),
                theme::muted(),
            ),
        );
    }
    lines.push(Line::default());
    lines.push(
        Line::styled(
            "Winning the jackpot is like finding ONE particular person among everyone in Russia!",
            theme::text(),
        )
        .alignment(Alignment::Center),
    );

    let card = Paragraph::new(lines)
        .block(card_block("Slide 5"))
        .wrap(Wrap { trim: true });
    frame.render_widget(card, area);
}

// ----------------------------------------------------------------------
// Odds cards
// ----------------------------------------------------------------------

const ODDS_LABELS: [(&str, &str, &str); 4] = [
    ("Find a four-leaf clover", "1 in 10,000", "in a meadow of ordinary clover"),
    ("Become an astronaut", "1 in 12,000", "if you really, really want it!"),
    ("Be struck by lightning", "1 in 1,000,000", "across a whole lifetime - and it's rare!"),
    ("Win the EuroMillions jackpot", "1 in 139,838,160", "the lottery's top prize"),
];

fn render_odds_cards(frame: &mut Frame, area: Rect, unit: &OddsUnit) {
    let mut lines = header_lines("Let's compare!", "Press 1-4 to flip the cards over.");

    for (i, (title, odds, description)) in ODDS_LABELS.iter().enumerate() {
        let jackpot = i == ODDS_LABELS.len() - 1;
        if unit.flipped(i) {
            lines.push(Line::from(vec![
                Span::styled(format!("[{}] {title}: ", i + 1), theme::text()),
                Span::styled(*odds, if jackpot { theme::failure() } else { theme::accent() }),
            ]));
            lines.push(Line::styled(format!("     {description}"), theme::muted()));
        } else {
            lines.push(Line::from(vec![
                Span::styled(format!("[{}] {title} ", i + 1), theme::text()),
                Span::styled("(flip me!)", theme::muted()),
            ]));
            lines.push(Line::default());
        }
    }

    if unit.chart_shown() {
        lines.push(Line::default());
        lines.push(
            Line::styled("The odds, on a log scale:", theme::highlight())
                .alignment(Alignment::Center),
        );
        for (i, (title, odds, _)) in ODDS_LABELS.iter().enumerate() {
            let jackpot = i == ODDS_LABELS.len() - 1;
            let color = if jackpot {
                theme::colors::RED
            } else {
                theme::colors::TEAL
            };
            let pct = bar_percent(ODDS_TABLE[i]);
            lines.push(Line::styled(format!("{title:<30}"), theme::muted()));
            let mut bar = meter(34, pct, Style::default().fg(color));
            bar.spans.push(Span::styled(format!(" {odds}"), theme::muted()));
            lines.push(bar);
        }
        lines.push(
            Line::styled(
                "The jackpot bar only looks close - every step is ten times bigger!",
                theme::muted(),
            )
            .alignment(Alignment::Center),
        );
    }

    let card = Paragraph::new(lines)
        .block(card_block("Slide 6"))
        .wrap(Wrap { trim: true });
    frame.render_widget(card, area);
}

// ----------------------------------------------------------------------
// Timescale
// ----------------------------------------------------------------------

const TIMELINE: [(&str, &str); 6] = [
    ("Dinosaurs go extinct", "65 million years ago"),
    ("First humans", "3 million years ago"),
    ("Ancient Egypt", "5,000 years ago"),
    ("Year zero", "2,000+ years ago"),
    ("Today", "now"),
    ("Your possible win", "2.7 million years from now"),
];

fn render_timescale(frame: &mut Frame, area: Rect, unit: &TimescaleUnit) {
    let mut lines = header_lines(
        "What if you played every week?",
        "Let's work out how long that takes!",
    );

    lines.push(
        Line::from(vec![
            Span::styled("How old are you?  ", theme::text()),
            Span::styled(unit.age().to_string(), theme::accent()),
            Span::styled("  (Up/Down to change)", theme::muted()),
        ])
        .alignment(Alignment::Center),
    );

    if unit.calculated() {
        lines.push(Line::default());
        lines.push(
            Line::from(vec![
                Span::styled("Playing weekly, on average you'd need ", theme::text()),
                Span::styled(
                    format!("{} years", group_thousands(YEARS_NEEDED)),
                    theme::highlight(),
                ),
            ])
            .alignment(Alignment::Center),
        );
        lines.push(
            Line::styled("That's almost 2.7 million years!", theme::muted())
                .alignment(Alignment::Center),
        );
        lines.push(
            Line::from(vec![
                Span::styled("That is ", theme::text()),
                Span::styled(
                    format!("{} generations", group_thousands(TimescaleUnit::generations_needed())),
                    theme::highlight(),
                ),
                Span::styled(" of people!", theme::text()),
            ])
            .alignment(Alignment::Center),
        );
        lines.push(
            Line::styled(
                "Your great-great-great... grandparents would have had to start before humans existed!",
                theme::muted(),
            )
            .alignment(Alignment::Center),
        );
    } else {
        lines.push(
            Line::styled("[ Enter: do the math! ]", theme::accent()).alignment(Alignment::Center),
        );
    }

    lines.push(Line::default());
    lines.push(Line::styled("A timeline:", theme::subtitle()).alignment(Alignment::Center));
    for (i, (label, when)) in TIMELINE.iter().enumerate() {
        let last = i == TIMELINE.len() - 1;
        let style = if last { theme::highlight() } else { theme::text() };
        lines.push(Line::from(vec![
            Span::styled(if last { " * " } else { " | " }, theme::muted()),
            Span::styled(format!("{label:<24}"), style),
            Span::styled(*when, theme::muted()),
        ]));
    }
    lines.push(Line::default());
    lines.push(
        Line::styled(
            "Dinosaurs died out 65 million years ago - playing weekly since then, they'd still be waiting!",
            theme::text(),
        )
        .alignment(Alignment::Center),
    );

    let card = Paragraph::new(lines)
        .block(card_block("Slide 7"))
        .wrap(Wrap { trim: true });
    frame.render_widget(card, area);
}

// ----------------------------------------------------------------------
// Quiz
// ----------------------------------------------------------------------

fn render_quiz(frame: &mut Frame, area: Rect, unit: &QuizUnit) {
    let mut lines = header_lines("What did we learn?", "A little quiz to finish!");

    match unit.phase() {
        QuizPhase::Intro => {
            lines.push(
                Line::styled("Four questions. Ready?", theme::text()).alignment(Alignment::Center),
            );
            lines.push(Line::default());
            lines.push(
                Line::styled("[ Enter: start the quiz! ]", theme::accent())
                    .alignment(Alignment::Center),
            );
        }
        QuizPhase::Question { index, picked } => {
            let question = &QUESTIONS[*index];
            lines.push(
                Line::styled(
                    format!("Question {} of {}", index + 1, QUESTIONS.len()),
                    theme::subtitle(),
                )
                .alignment(Alignment::Center),
            );
            lines.push(Line::styled(question.prompt, theme::text()).alignment(Alignment::Center));
            lines.push(Line::default());
            for (i, option) in question.options.iter().enumerate() {
                let marker = if picked.is_none() && i == unit.cursor() {
                    ">"
                } else {
                    " "
                };
                let style = match picked {
                    Some(answer) => {
                        if i == question.correct {
                            theme::success()
                        } else if i == answer.choice {
                            theme::failure()
                        } else {
                            theme::muted()
                        }
                    }
                    None => theme::text(),
                };
                lines.push(Line::from(vec![
                    Span::styled(format!("{marker} {}. ", i + 1), theme::accent()),
                    Span::styled(*option, style),
                ]));
            }
            if let Some(answer) = picked {
                lines.push(Line::default());
                let feedback = if answer.correct {
                    Line::styled("Correct!", theme::success())
                } else {
                    Line::styled("Not quite!", theme::failure())
                };
                lines.push(feedback.alignment(Alignment::Center));
            }
        }
        QuizPhase::Certificate => {
            lines.push(
                Line::styled("*** CERTIFICATE ***", theme::highlight())
                    .alignment(Alignment::Center),
            );
            lines.push(
                Line::styled("Junior Mathematician", theme::title()).alignment(Alignment::Center),
            );
            lines.push(Line::default());
            lines.push(
                Line::styled(
                    "You finished the probability lesson and know why winning the lottery is practically impossible!",
                    theme::text(),
                )
                .alignment(Alignment::Center),
            );
            lines.push(
                Line::styled(
                    format!(
                        "Correct answers: {} of {}",
                        unit.correct_count(),
                        QUESTIONS.len()
                    ),
                    theme::accent(),
                )
                .alignment(Alignment::Center),
            );
            lines.push(Line::default());
            lines.push(
                Line::styled("[ Enter: watch again   r: retake the quiz ]", theme::muted())
                    .alignment(Alignment::Center),
            );
        }
    }

    let card = Paragraph::new(lines)
        .block(card_block("Slide 8"))
        .wrap(Wrap { trim: true });
    frame.render_widget(card, area);
}
