//! Sound output for Long Shot.
//!
//! Ten named cues, each synthesized from a small additive recipe and mixed
//! into a cpal output stream. Everything is best-effort: if there is no
//! audio device, or the stream cannot be built, the player degrades to a
//! no-op and the slideshow carries on silently.

mod mixer;
mod synth;

use std::sync::{Arc, Mutex};

use cpal::SampleFormat;
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};

use longshot_types::Cue;

use mixer::Mixer;

/// Handle to the audio output. Playing a cue is fire-and-forget: cues mix
/// when they overlap and nothing queues or waits.
pub struct CuePlayer {
    inner: Option<Inner>,
}

struct Inner {
    mixer: Arc<Mutex<Mixer>>,
    // Playback stops when the stream drops; held for that reason only.
    _stream: cpal::Stream,
}

impl CuePlayer {
    /// Open the default output device. Falls back to a silent player when
    /// no usable device exists.
    #[must_use]
    pub fn new() -> Self {
        match open_stream() {
            Ok(inner) => Self { inner: Some(inner) },
            Err(err) => {
                tracing::warn!("audio unavailable, cues disabled: {err}");
                Self { inner: None }
            }
        }
    }

    /// A player that never makes a sound.
    #[must_use]
    pub fn disabled() -> Self {
        Self { inner: None }
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.inner.is_some()
    }

    /// Trigger a cue. No-op on a disabled player.
    pub fn play(&self, cue: Cue) {
        let Some(inner) = &self.inner else {
            return;
        };
        tracing::trace!(%cue, "cue");
        if let Ok(mut mixer) = inner.mixer.lock() {
            mixer.trigger(synth::voices_for(cue));
        }
    }
}

impl Default for CuePlayer {
    fn default() -> Self {
        Self::new()
    }
}

fn open_stream() -> Result<Inner, String> {
    let host = cpal::default_host();
    let device = host
        .default_output_device()
        .ok_or_else(|| "no default output device".to_string())?;
    let config = device
        .default_output_config()
        .map_err(|e| format!("no default output config: {e}"))?;

    if config.sample_format() != SampleFormat::F32 {
        return Err(format!(
            "unsupported sample format {:?}",
            config.sample_format()
        ));
    }

    let stream_config: cpal::StreamConfig = config.into();
    let channels = stream_config.channels as usize;
    let sample_rate = stream_config.sample_rate.0 as f32;

    let mixer = Arc::new(Mutex::new(Mixer::new(sample_rate)));
    let callback_mixer = Arc::clone(&mixer);

    let stream = device
        .build_output_stream(
            &stream_config,
            move |data: &mut [f32], _info: &cpal::OutputCallbackInfo| {
                match callback_mixer.lock() {
                    Ok(mut mixer) => mixer.fill(data, channels),
                    Err(_) => data.fill(0.0),
                }
            },
            |err| tracing::warn!("audio stream error: {err}"),
            None,
        )
        .map_err(|e| format!("failed to build output stream: {e}"))?;

    stream
        .play()
        .map_err(|e| format!("failed to start output stream: {e}"))?;

    tracing::info!(sample_rate, channels, "audio stream started");
    Ok(Inner {
        mixer,
        _stream: stream,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_player_swallows_cues() {
        let player = CuePlayer::disabled();
        assert!(!player.is_active());
        player.play(Cue::Fanfare);
    }
}
