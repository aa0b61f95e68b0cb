//! Transition rendering effect.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};

/// Dim the already-rendered content area while a slide transition is in
/// flight. A terminal has no opacity, so the outgoing slide dims instead;
/// the swap happens only at commit, so content never pops.
pub fn apply_transition_fade(buf: &mut Buffer, area: Rect, progress: f32) {
    if progress >= 1.0 {
        return;
    }
    buf.set_style(area, Style::default().add_modifier(Modifier::DIM));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finished_transition_leaves_the_buffer_alone() {
        let area = Rect::new(0, 0, 4, 1);
        let mut buf = Buffer::empty(area);
        apply_transition_fade(&mut buf, area, 1.0);
        assert!(!buf[(0, 0)].style().add_modifier.contains(Modifier::DIM));
    }

    #[test]
    fn in_flight_transition_dims_the_area() {
        let area = Rect::new(0, 0, 4, 1);
        let mut buf = Buffer::empty(area);
        apply_transition_fade(&mut buf, area, 0.3);
        assert!(buf[(0, 0)].style().add_modifier.contains(Modifier::DIM));
    }
}
