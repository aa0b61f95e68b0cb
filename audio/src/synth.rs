//! Cue synthesis recipes.
//!
//! Each cue is a fixed set of voices: an oscillator with a frequency
//! envelope and a gain envelope. Envelope segments interpolate step-wise,
//! linearly, or exponentially toward their target point, which is enough to
//! express every recipe (sweeps, pluck decays, little arpeggios).

use longshot_types::Cue;
use rand::RngExt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Waveform {
    Sine,
    Square,
    Sawtooth,
    Triangle,
}

#[derive(Debug, Clone, Copy)]
pub(crate) enum Curve {
    /// Hold the previous value until this point's time.
    Step,
    Linear,
    /// Exponential approach; both endpoint values must be positive.
    Exponential,
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct Point {
    pub at: f32,
    pub value: f32,
    pub curve: Curve,
}

/// Piecewise envelope over seconds-since-voice-start.
#[derive(Debug, Clone)]
pub(crate) struct Envelope {
    points: Vec<Point>,
}

impl Envelope {
    pub(crate) fn new(points: Vec<Point>) -> Self {
        debug_assert!(!points.is_empty());
        debug_assert!(points.windows(2).all(|w| w[0].at <= w[1].at));
        Self { points }
    }

    /// Constant envelope.
    pub(crate) fn hold(value: f32) -> Self {
        Self::new(vec![Point {
            at: 0.0,
            value,
            curve: Curve::Step,
        }])
    }

    pub(crate) fn value_at(&self, t: f32) -> f32 {
        let first = self.points[0];
        if t <= first.at {
            return first.value;
        }
        for window in self.points.windows(2) {
            let (a, b) = (window[0], window[1]);
            if t < b.at {
                let span = b.at - a.at;
                if span <= f32::EPSILON {
                    return b.value;
                }
                let frac = (t - a.at) / span;
                return match b.curve {
                    Curve::Step => a.value,
                    Curve::Linear => a.value + (b.value - a.value) * frac,
                    Curve::Exponential => {
                        let from = a.value.max(1e-4);
                        let to = b.value.max(1e-4);
                        from * (to / from).powf(frac)
                    }
                };
            }
        }
        self.points[self.points.len() - 1].value
    }
}

/// One oscillator's contribution to a cue.
#[derive(Debug, Clone)]
pub(crate) struct Voice {
    pub waveform: Waveform,
    /// Offset from the cue trigger, seconds.
    pub start: f32,
    /// Offset at which the voice ends, seconds.
    pub stop: f32,
    pub freq: Envelope,
    pub gain: Envelope,
}

fn point(at: f32, value: f32, curve: Curve) -> Point {
    Point { at, value, curve }
}

/// A plucked voice: start value, then an exponential decay to silence.
fn pluck(waveform: Waveform, start: f32, dur: f32, freq: Envelope, level: f32) -> Voice {
    Voice {
        waveform,
        start,
        stop: start + dur,
        freq,
        gain: Envelope::new(vec![
            point(0.0, level, Curve::Step),
            point(dur, 0.01, Curve::Exponential),
        ]),
    }
}

/// The synthesis table: what each cue sounds like.
pub(crate) fn voices_for(cue: Cue) -> Vec<Voice> {
    match cue {
        Cue::Pop => vec![pluck(
            Waveform::Sine,
            0.0,
            0.1,
            Envelope::new(vec![
                point(0.0, 600.0, Curve::Step),
                point(0.1, 200.0, Curve::Exponential),
            ]),
            0.3,
        )],

        Cue::Whoosh => vec![Voice {
            waveform: Waveform::Sawtooth,
            start: 0.0,
            stop: 0.3,
            freq: Envelope::new(vec![
                point(0.0, 100.0, Curve::Step),
                point(0.15, 800.0, Curve::Exponential),
                point(0.3, 100.0, Curve::Exponential),
            ]),
            gain: Envelope::new(vec![
                point(0.0, 0.1, Curve::Step),
                point(0.15, 0.15, Curve::Linear),
                point(0.3, 0.01, Curve::Exponential),
            ]),
        }],

        Cue::Success => [523.25, 659.25, 783.99, 1046.5]
            .iter()
            .enumerate()
            .map(|(i, freq)| attack_pluck(Waveform::Sine, i as f32 * 0.1, 0.05, 0.3, *freq, 0.2))
            .collect(),

        Cue::Surprise => vec![Voice {
            waveform: Waveform::Sine,
            start: 0.0,
            stop: 0.3,
            freq: Envelope::new(vec![
                point(0.0, 300.0, Curve::Step),
                point(0.2, 800.0, Curve::Exponential),
            ]),
            gain: Envelope::new(vec![
                point(0.0, 0.25, Curve::Step),
                point(0.3, 0.01, Curve::Exponential),
            ]),
        }],

        Cue::Drumroll => {
            let mut rng = rand::rng();
            let beats = 30;
            let duration = 1.5;
            (0..beats)
                .map(|i| {
                    let start = (i as f32 / beats as f32) * duration;
                    let level = 0.1 + (i as f32 / beats as f32) * 0.15;
                    pluck(
                        Waveform::Triangle,
                        start,
                        0.05,
                        Envelope::hold(rng.random_range(100.0..150.0)),
                        level,
                    )
                })
                .collect()
        }

        Cue::Fanfare => {
            let melody: [(f32, f32, f32); 6] = [
                (523.25, 0.0, 0.15),
                (659.25, 0.15, 0.15),
                (783.99, 0.3, 0.15),
                (1046.5, 0.45, 0.4),
                (783.99, 0.85, 0.15),
                (1046.5, 1.0, 0.5),
            ];
            melody
                .iter()
                .map(|(freq, start, dur)| Voice {
                    waveform: Waveform::Square,
                    start: *start,
                    stop: start + dur,
                    freq: Envelope::hold(*freq),
                    gain: Envelope::new(vec![
                        point(0.0, 0.15, Curve::Step),
                        point(dur - 0.05, 0.15, Curve::Step),
                        point(*dur, 0.01, Curve::Exponential),
                    ]),
                })
                .collect()
        }

        Cue::Click => vec![pluck(
            Waveform::Sine,
            0.0,
            0.05,
            Envelope::new(vec![
                point(0.0, 1000.0, Curve::Step),
                point(0.05, 500.0, Curve::Exponential),
            ]),
            0.2,
        )],

        Cue::Tick => vec![pluck(Waveform::Sine, 0.0, 0.03, Envelope::hold(800.0), 0.1)],

        Cue::Wrong => vec![Voice {
            waveform: Waveform::Sawtooth,
            start: 0.0,
            stop: 0.3,
            freq: Envelope::new(vec![
                point(0.0, 200.0, Curve::Step),
                point(0.3, 150.0, Curve::Linear),
            ]),
            gain: Envelope::new(vec![
                point(0.0, 0.15, Curve::Step),
                point(0.3, 0.01, Curve::Exponential),
            ]),
        }],

        Cue::Welcome => [392.0, 523.25, 659.25, 783.99]
            .iter()
            .enumerate()
            .map(|(i, freq)| attack_pluck(Waveform::Sine, i as f32 * 0.12, 0.05, 0.25, *freq, 0.2))
            .collect(),
    }
}

/// A note that fades in over `attack` and decays out by `dur`.
fn attack_pluck(
    waveform: Waveform,
    start: f32,
    attack: f32,
    dur: f32,
    freq: f32,
    level: f32,
) -> Voice {
    Voice {
        waveform,
        start,
        stop: start + dur,
        freq: Envelope::hold(freq),
        gain: Envelope::new(vec![
            point(0.0, 0.0, Curve::Step),
            point(attack, level, Curve::Linear),
            point(dur, 0.01, Curve::Exponential),
        ]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_CUES: [Cue; 10] = [
        Cue::Pop,
        Cue::Whoosh,
        Cue::Success,
        Cue::Surprise,
        Cue::Drumroll,
        Cue::Fanfare,
        Cue::Click,
        Cue::Tick,
        Cue::Wrong,
        Cue::Welcome,
    ];

    #[test]
    fn every_cue_has_voices_with_sane_extents() {
        for cue in ALL_CUES {
            let voices = voices_for(cue);
            assert!(!voices.is_empty(), "{cue} has no voices");
            for voice in &voices {
                assert!(voice.stop > voice.start, "{cue} voice ends before it starts");
                assert!(voice.stop <= 2.0, "{cue} voice runs suspiciously long");
            }
        }
    }

    #[test]
    fn every_cue_decays_to_near_silence() {
        for cue in ALL_CUES {
            for voice in voices_for(cue) {
                let end_gain = voice.gain.value_at(voice.stop - voice.start);
                assert!(end_gain <= 0.02, "{cue} ends at gain {end_gain}");
            }
        }
    }

    #[test]
    fn linear_segments_interpolate() {
        let env = Envelope::new(vec![
            Point {
                at: 0.0,
                value: 0.0,
                curve: Curve::Step,
            },
            Point {
                at: 1.0,
                value: 1.0,
                curve: Curve::Linear,
            },
        ]);
        assert!((env.value_at(0.5) - 0.5).abs() < 1e-6);
        assert!((env.value_at(2.0) - 1.0).abs() < 1e-6);
        assert!(env.value_at(-1.0).abs() < 1e-6);
    }

    #[test]
    fn exponential_segments_pass_through_their_endpoints() {
        let env = Envelope::new(vec![
            Point {
                at: 0.0,
                value: 600.0,
                curve: Curve::Step,
            },
            Point {
                at: 0.1,
                value: 200.0,
                curve: Curve::Exponential,
            },
        ]);
        assert!((env.value_at(0.0) - 600.0).abs() < 1e-3);
        let mid = env.value_at(0.05);
        assert!(mid < 600.0 && mid > 200.0);
        assert!((env.value_at(0.1) - 200.0).abs() < 1e-3);
    }

    #[test]
    fn step_segments_hold_the_previous_value() {
        let env = Envelope::new(vec![
            Point {
                at: 0.0,
                value: 0.15,
                curve: Curve::Step,
            },
            Point {
                at: 0.1,
                value: 0.15,
                curve: Curve::Step,
            },
            Point {
                at: 0.15,
                value: 0.01,
                curve: Curve::Exponential,
            },
        ]);
        assert!((env.value_at(0.05) - 0.15).abs() < 1e-6);
        assert!(env.value_at(0.14) < 0.15);
    }
}
