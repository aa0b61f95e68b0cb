//! Color theme for the Long Shot TUI.
//!
//! A soft, kid-friendly palette: teal primary, warm accents, gentle
//! backgrounds. Styles are exposed as helpers so slide renderers never
//! touch raw colors.

use ratatui::style::{Color, Modifier, Style};

/// Palette constants.
pub mod colors {
    use super::Color;

    // === Backgrounds ===
    pub const BG: Color = Color::Rgb(24, 26, 33);
    pub const BG_PANEL: Color = Color::Rgb(34, 37, 46);

    // === Foregrounds ===
    pub const TEXT: Color = Color::Rgb(222, 222, 215);
    pub const TEXT_MUTED: Color = Color::Rgb(130, 132, 125);

    // === Brand ===
    pub const TEAL: Color = Color::Rgb(77, 201, 176);
    pub const CYAN: Color = Color::Rgb(102, 178, 216);

    // === Accents ===
    pub const RED: Color = Color::Rgb(235, 101, 108);
    pub const GREEN: Color = Color::Rgb(147, 196, 123);
    pub const YELLOW: Color = Color::Rgb(229, 192, 123);
    pub const ORANGE: Color = Color::Rgb(235, 155, 100);
    pub const VIOLET: Color = Color::Rgb(172, 142, 201);
}

#[must_use]
pub fn title() -> Style {
    Style::default()
        .fg(colors::TEAL)
        .add_modifier(Modifier::BOLD)
}

#[must_use]
pub fn subtitle() -> Style {
    Style::default().fg(colors::TEXT_MUTED)
}

#[must_use]
pub fn text() -> Style {
    Style::default().fg(colors::TEXT)
}

#[must_use]
pub fn muted() -> Style {
    Style::default().fg(colors::TEXT_MUTED)
}

#[must_use]
pub fn accent() -> Style {
    Style::default()
        .fg(colors::CYAN)
        .add_modifier(Modifier::BOLD)
}

#[must_use]
pub fn success() -> Style {
    Style::default()
        .fg(colors::GREEN)
        .add_modifier(Modifier::BOLD)
}

#[must_use]
pub fn failure() -> Style {
    Style::default()
        .fg(colors::RED)
        .add_modifier(Modifier::BOLD)
}

#[must_use]
pub fn highlight() -> Style {
    Style::default()
        .fg(colors::YELLOW)
        .add_modifier(Modifier::BOLD)
}

#[must_use]
pub fn panel() -> Style {
    Style::default().bg(colors::BG_PANEL)
}

/// A cell of the ticket grid that is on the player's ticket.
#[must_use]
pub fn selected_ball() -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(colors::TEAL)
        .add_modifier(Modifier::BOLD)
}

/// A drawn ball the player did not pick.
#[must_use]
pub fn drawn_ball() -> Style {
    Style::default().fg(Color::Black).bg(colors::ORANGE)
}

/// A drawn ball that matches the ticket.
#[must_use]
pub fn matched_ball() -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(colors::GREEN)
        .add_modifier(Modifier::BOLD)
}
