//! Cue dispatch: a mute flag and a per-frame queue.
//!
//! The engine never touches an audio device. Slide units and the navigation
//! layer push [`Cue`]s here; the application shell drains the queue once per
//! frame and hands the cues to the audio output. When sound is off the
//! queue stays empty, so muting silences everything at the source.

use longshot_types::Cue;

#[derive(Debug)]
pub struct SoundState {
    enabled: bool,
    queue: Vec<Cue>,
}

impl SoundState {
    #[must_use]
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            queue: Vec::new(),
        }
    }

    #[must_use]
    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// Queue a cue for playback. No-op while muted.
    pub fn play(&mut self, cue: Cue) {
        if self.enabled {
            self.queue.push(cue);
        }
    }

    /// Flip the mute flag; returns the new enabled state.
    pub fn toggle(&mut self) -> bool {
        self.enabled = !self.enabled;
        self.enabled
    }

    /// Take everything queued since the last drain.
    pub fn drain(&mut self) -> Vec<Cue> {
        std::mem::take(&mut self.queue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn muted_state_queues_nothing() {
        let mut sound = SoundState::new(false);
        sound.play(Cue::Pop);
        assert!(sound.drain().is_empty());
    }

    #[test]
    fn drain_empties_the_queue() {
        let mut sound = SoundState::new(true);
        sound.play(Cue::Pop);
        sound.play(Cue::Click);
        assert_eq!(sound.drain(), vec![Cue::Pop, Cue::Click]);
        assert!(sound.drain().is_empty());
    }

    #[test]
    fn toggle_reports_the_new_state() {
        let mut sound = SoundState::new(true);
        assert!(!sound.toggle());
        assert!(sound.toggle());
    }
}
