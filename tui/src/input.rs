//! Input handling: crossterm key events routed to engine actions.
//!
//! Global keys (navigation, mute, quit) work everywhere; the rest are
//! routed by which slide is current. Input arriving mid-transition is
//! accepted here and rejected by the engine's own preconditions, so
//! nothing needs to be gated in this layer.

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use longshot_engine::App;
use longshot_types::SlideId;

/// Drain all pending input events without blocking.
pub fn handle_events(app: &mut App) -> Result<()> {
    while event::poll(Duration::ZERO)? {
        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            handle_key(app, key);
        }
    }
    Ok(())
}

fn handle_key(app: &mut App, key: KeyEvent) {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.quit();
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.quit(),
        KeyCode::Char('m') => app.toggle_sound(),
        KeyCode::Right | KeyCode::Char(' ') => app.go_next(),
        KeyCode::Left => app.go_prev(),
        KeyCode::Enter => app.activate(),
        KeyCode::Tab => app.switch_group(),
        KeyCode::Char('r') => app.reset_slide(),
        KeyCode::Char('d') => app.start_draw(),
        KeyCode::Up => app.adjust(vertical_step(app.current_slide(), -1)),
        KeyCode::Down => app.adjust(vertical_step(app.current_slide(), 1)),
        KeyCode::PageUp => app.adjust(vertical_step(app.current_slide(), -10)),
        KeyCode::PageDown => app.adjust(vertical_step(app.current_slide(), 10)),
        KeyCode::Char(c @ '1'..='4') => {
            let option = c.to_digit(10).unwrap_or(1) as usize - 1;
            app.select_option(option);
        }
        _ => {}
    }
}

/// Up/Down mean "bigger/smaller" on sliders but "back/forward" on cursors.
fn vertical_step(slide: SlideId, down: i32) -> i32 {
    match slide {
        // Sliders: Up increases.
        SlideId::Orchard | SlideId::Timescale => -down,
        // Cursors: Down moves forward through the options.
        _ => down,
    }
}
