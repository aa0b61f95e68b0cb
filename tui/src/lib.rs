//! TUI rendering for Long Shot using ratatui.
//!
//! The renderer is stateless: [`draw`] repaints the whole frame from the
//! engine's [`App`] every tick. Chrome (progress dots, sound indicator,
//! key hints) frames a content area owned by the current slide's renderer;
//! while a transition is in flight the content dims and the swap happens
//! at commit.

mod effects;
mod input;
mod slides;
pub mod theme;

pub use effects::apply_transition_fade;
pub use input::handle_events;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

use longshot_engine::App;
use longshot_types::{SlideId, TOTAL_SLIDES};

/// Main draw function.
pub fn draw(frame: &mut Frame, app: &App) {
    let bg = Block::default().style(Style::default().bg(theme::colors::BG));
    frame.render_widget(bg, frame.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(1), // Header: title + sound indicator
            Constraint::Min(1),    // Slide content
            Constraint::Length(1), // Progress dots
            Constraint::Length(1), // Key hints
        ])
        .split(frame.area());

    draw_header(frame, chunks[0], app);

    slides::render(frame, chunks[1], app);
    if let Some(progress) = app.transition_progress() {
        apply_transition_fade(frame.buffer_mut(), chunks[1], progress);
    }

    draw_progress_dots(frame, chunks[2], app);
    draw_hints(frame, chunks[3], app);
}

fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let sound = if app.sound_enabled() {
        Span::styled("[sound on] ", theme::accent())
    } else {
        Span::styled("[sound off]", theme::muted())
    };
    let header = Line::from(vec![
        Span::styled("Long Shot", theme::title()),
        Span::styled(" - a lesson in lottery luck", theme::subtitle()),
        Span::raw("  "),
        sound,
    ]);
    frame.render_widget(Paragraph::new(header), area);
}

/// One dot per slide: past dots dim teal, the current one bright.
fn draw_progress_dots(frame: &mut Frame, area: Rect, app: &App) {
    let current = app.current_slide().index();
    let mut spans = Vec::with_capacity(TOTAL_SLIDES * 2);
    for i in 0..TOTAL_SLIDES {
        let style = if i == current {
            theme::accent()
        } else if i < current {
            Style::default().fg(theme::colors::TEAL)
        } else {
            theme::muted()
        };
        spans.push(Span::styled(if i == current { "●" } else { "○" }, style));
        spans.push(Span::raw(" "));
    }
    let dots = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
    frame.render_widget(dots, area);
}

fn draw_hints(frame: &mut Frame, area: Rect, app: &App) {
    // The welcome slide hides the prev/next hints, like its begin-only chrome.
    let nav = if app.current_slide() == SlideId::Welcome {
        ""
    } else {
        "<-/-> slides   "
    };
    let hints = Line::styled(
        format!("{nav}m sound   q quit"),
        theme::muted(),
    )
    .alignment(Alignment::Center);
    frame.render_widget(Paragraph::new(hints), area);
}
