use std::fmt;

/// A named, synthesized short sound effect.
///
/// Closed enum: only these ten cues exist, and the audio crate owns one
/// synthesis recipe per variant. Dispatch is fire-and-forget; overlapping
/// cues simply overlap in playback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cue {
    /// Short downward blip, used for reveals.
    Pop,
    /// Swept sawtooth marking a slide transition.
    Whoosh,
    /// Rising four-note arpeggio for correct answers.
    Success,
    /// Upward glide for "look at this" moments.
    Surprise,
    /// A second and a half of accelerating snare hits.
    Drumroll,
    /// Six-note square-wave flourish for the jackpot and the certificate.
    Fanfare,
    /// Tiny click for toggles and steps.
    Click,
    /// Very short high ping, used in counting sequences.
    Tick,
    /// Sagging buzz for wrong answers.
    Wrong,
    /// Gentle opening arpeggio on the first slide.
    Welcome,
}

impl fmt::Display for Cue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Cue::Pop => "pop",
            Cue::Whoosh => "whoosh",
            Cue::Success => "success",
            Cue::Surprise => "surprise",
            Cue::Drumroll => "drumroll",
            Cue::Fanfare => "fanfare",
            Cue::Click => "click",
            Cue::Tick => "tick",
            Cue::Wrong => "wrong",
            Cue::Welcome => "welcome",
        };
        f.write_str(name)
    }
}
