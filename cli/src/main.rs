//! Long Shot binary - terminal session management and the frame loop.
//!
//! # Architecture
//!
//! The binary bridges [`longshot_engine`] (application state) and
//! [`longshot_tui`] (rendering), with RAII-based terminal management and
//! two fire-and-forget collaborators: the audio output and the analytics
//! tracker.
//!
//! # Event Loop
//!
//! A fixed ~60 FPS cadence:
//!
//! 1. Wait for frame tick
//! 2. Drain input events (non-blocking)
//! 3. Advance application state (`app.tick()`)
//! 4. Drain queued sound cues into the audio output
//! 5. Drain queued analytics events into the tracker
//! 6. Render frame
//!
//! Neither collaborator can stall the loop: cues mix asynchronously in the
//! audio callback and tracker calls are spawned and forgotten.

mod config;

use std::fs::{self, OpenOptions};
use std::io::{Stdout, stdout};
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Duration;

use anyhow::Result;
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::{Backend, CrosstermBackend};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use longshot_audio::CuePlayer;
use longshot_engine::{AnalyticsEvent, App};
use longshot_tracker::Tracker;
use longshot_tui::{draw, handle_events};

use config::LongshotConfig;

const FRAME_DURATION: Duration = Duration::from_millis(16);

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap_or_else(|_| EnvFilter::try_new("warn").expect("warn filter is valid"));

    if let Some((path, file)) = open_log_file() {
        tracing_subscriber::registry()
            .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
            .with(env_filter)
            .init();
        tracing::info!(path = %path.display(), "logging initialized");
        return;
    }

    // No usable log file: prefer "no logs" over corrupting the TUI by
    // writing to stdout/stderr.
    tracing_subscriber::registry().with(env_filter).init();
}

fn open_log_file() -> Option<(PathBuf, std::fs::File)> {
    for candidate in log_file_candidates() {
        if let Some(parent) = candidate.parent()
            && fs::create_dir_all(parent).is_err()
        {
            continue;
        }
        if let Ok(file) = OpenOptions::new().create(true).append(true).open(&candidate) {
            return Some((candidate, file));
        }
    }
    None
}

fn log_file_candidates() -> Vec<PathBuf> {
    let mut candidates = Vec::new();

    // Primary: ~/.longshot/logs/longshot.log
    if let Some(config_path) = LongshotConfig::path()
        && let Some(config_dir) = config_path.parent()
    {
        candidates.push(config_dir.join("logs").join("longshot.log"));
    }

    // Fallback: ./.longshot/logs/longshot.log
    candidates.push(PathBuf::from(".longshot").join("logs").join("longshot.log"));

    candidates
}

/// RAII wrapper for terminal state with guaranteed cleanup on drop.
///
/// Raw mode and the alternate screen are restored even after panics or
/// early returns, so a crash never leaves the shell unusable.
struct TerminalSession {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalSession {
    fn new() -> Result<Self> {
        enable_raw_mode()?;
        let mut out = stdout();
        if let Err(err) = execute!(out, EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(err.into());
        }
        let terminal = match Terminal::new(CrosstermBackend::new(out)) {
            Ok(terminal) => terminal,
            Err(err) => {
                let _ = disable_raw_mode();
                let _ = execute!(stdout(), LeaveAlternateScreen);
                return Err(err.into());
            }
        };
        Ok(Self { terminal })
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let config = LongshotConfig::load();
    let sound_enabled = config.sound_enabled();

    let tracker = Tracker::new(config.resolve_analytics());
    tracker.start_session(sound_enabled);

    let player = CuePlayer::new();
    let mut app = App::new(sound_enabled);

    let mut session = TerminalSession::new()?;
    let result = run_app(&mut session.terminal, &mut app, &player, &tracker).await;
    drop(session);
    result
}

async fn run_app<B>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    player: &CuePlayer,
    tracker: &Tracker,
) -> Result<()>
where
    B: Backend,
    B::Error: Send + Sync + 'static,
{
    let mut frames = tokio::time::interval(FRAME_DURATION);
    frames.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

    loop {
        frames.tick().await;

        handle_events(app)?;
        if app.should_quit() {
            return Ok(());
        }

        app.tick();

        for cue in app.drain_cues() {
            player.play(cue);
        }
        for event in app.drain_analytics() {
            dispatch_analytics(tracker, event);
        }

        if let Err(err) = terminal.draw(|frame| draw(frame, app)) {
            return Err(err.into());
        }
    }
}

fn dispatch_analytics(tracker: &Tracker, event: AnalyticsEvent) {
    match event {
        AnalyticsEvent::SlideView {
            slide,
            seconds_on_previous,
        } => tracker.track_slide_view(slide, seconds_on_previous),
        AnalyticsEvent::Completed => tracker.mark_complete(),
        AnalyticsEvent::SoundPreference { enabled } => tracker.update_sound_preference(enabled),
        AnalyticsEvent::ExperimentResult {
            age,
            years_needed,
            generations_needed,
        } => tracker.save_experiment_result(age, years_needed, generations_needed),
    }
}
