//! Additive mixing of active voices into an interleaved output buffer.

use std::f32::consts::TAU;

use crate::synth::{Voice, Waveform};

/// A voice that has been triggered and is somewhere in its envelope.
#[derive(Debug)]
struct ActiveVoice {
    voice: Voice,
    /// Seconds since the owning cue was triggered.
    t: f32,
    /// Oscillator phase in turns (0..1).
    phase: f32,
}

#[derive(Debug)]
pub(crate) struct Mixer {
    sample_rate: f32,
    voices: Vec<ActiveVoice>,
}

impl Mixer {
    pub(crate) fn new(sample_rate: f32) -> Self {
        Self {
            sample_rate,
            voices: Vec::new(),
        }
    }

    pub(crate) fn trigger(&mut self, voices: Vec<Voice>) {
        self.voices.extend(voices.into_iter().map(|voice| ActiveVoice {
            voice,
            t: 0.0,
            phase: 0.0,
        }));
    }

    pub(crate) fn active_voices(&self) -> usize {
        self.voices.len()
    }

    /// Render `data` in place: one mixed mono sample copied across all
    /// channels of each frame.
    pub(crate) fn fill(&mut self, data: &mut [f32], channels: usize) {
        let dt = 1.0 / self.sample_rate;
        for frame in data.chunks_mut(channels.max(1)) {
            let mut sample = 0.0f32;
            for active in &mut self.voices {
                let local = active.t - active.voice.start;
                if local >= 0.0 && active.t < active.voice.stop {
                    let freq = active.voice.freq.value_at(local);
                    let gain = active.voice.gain.value_at(local);
                    sample += oscillate(active.voice.waveform, active.phase) * gain;
                    active.phase = (active.phase + freq * dt).fract();
                }
                active.t += dt;
            }
            self.voices.retain(|active| active.t < active.voice.stop);

            let sample = sample.clamp(-1.0, 1.0);
            for out in frame.iter_mut() {
                *out = sample;
            }
        }
    }
}

fn oscillate(waveform: Waveform, phase: f32) -> f32 {
    match waveform {
        Waveform::Sine => (phase * TAU).sin(),
        Waveform::Square => {
            if phase < 0.5 {
                1.0
            } else {
                -1.0
            }
        }
        Waveform::Sawtooth => 2.0 * phase - 1.0,
        Waveform::Triangle => 4.0 * (phase - 0.5).abs() - 1.0,
    }
}
