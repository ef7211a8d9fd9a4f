//! Sound effects
//!
//! Each effect is a short chiptune written in a compact note notation and
//! synthesised by the host. In the browser that means Web Audio oscillators;
//! natively the cues are only logged.

use crate::error::{Error, Result};
use crate::settings::Settings;
use crate::sim::GameEvent;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Horse launched
    Jump,
    /// Fence cleared
    Score,
    /// Horse hit a fence
    GameOver,
}

impl SoundEffect {
    pub const ALL: [SoundEffect; 3] = [SoundEffect::Jump, SoundEffect::Score, SoundEffect::GameOver];

    /// (notes, tone, volume, speed) in tune notation
    fn source(&self) -> (&'static str, &'static str, &'static str, u32) {
        match self {
            SoundEffect::Jump => ("c2e2g2", "t", "4", 8),
            SoundEffect::Score => ("c3e3", "t", "3", 15),
            SoundEffect::GameOver => ("c2g1e1c1", "t", "5", 12),
        }
    }

    /// The tune for this effect
    pub fn tune(&self) -> Tune {
        let (notes, tone, volume, speed) = self.source();
        // The built-in tunes are known good; fall back to silence otherwise
        Tune::parse(notes, tone, volume, speed).unwrap_or_else(|e| {
            log::warn!("Bad tune for {:?}: {}", self, e);
            Tune::default()
        })
    }
}

impl From<GameEvent> for SoundEffect {
    fn from(event: GameEvent) -> Self {
        match event {
            GameEvent::Jump => SoundEffect::Jump,
            GameEvent::Score { .. } => SoundEffect::Score,
            GameEvent::GameOver { .. } => SoundEffect::GameOver,
        }
    }
}

/// Oscillator shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tone {
    #[default]
    Triangle,
    Square,
    Pulse,
    Noise,
}

impl Tone {
    pub fn from_char(c: char) -> Result<Self> {
        match c.to_ascii_lowercase() {
            't' => Ok(Tone::Triangle),
            's' => Ok(Tone::Square),
            'p' => Ok(Tone::Pulse),
            'n' => Ok(Tone::Noise),
            _ => Err(Error::InvalidTone(c)),
        }
    }
}

/// One step of a tune: a pitch or a rest
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Note {
    /// Frequency in Hz (None = rest)
    pub freq: Option<f32>,
    pub tone: Tone,
    /// Gain (0.0 - 1.0)
    pub volume: f32,
}

/// A parsed tune
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Tune {
    pub notes: Vec<Note>,
    /// Length of each note in seconds
    pub note_secs: f32,
}

/// Seconds per speed unit
pub const SPEED_UNIT_SECS: f32 = 1.0 / 120.0;
/// Loudest volume digit
pub const MAX_VOLUME: u32 = 7;

/// Frequency of a note index (octave * 12 + semitone); index 33 is A at 440 Hz
pub fn note_frequency(index: i32) -> f32 {
    440.0 * 2f32.powf((index - 33) as f32 / 12.0)
}

/// Per-note setting at position `n`; the last entry repeats
fn nth_or_last<T: Copy>(list: &[T], n: usize) -> Option<T> {
    list.get(n).or(list.last()).copied()
}

fn semitone(letter: char) -> Option<i32> {
    match letter {
        'c' => Some(0),
        'd' => Some(2),
        'e' => Some(4),
        'f' => Some(5),
        'g' => Some(7),
        'a' => Some(9),
        'b' => Some(11),
        _ => None,
    }
}

impl Tune {
    /// Parse a tune.
    ///
    /// `notes` is a sequence of `c d e f g a b` with optional `#`/`-`, each
    /// followed by an octave digit 0-4, or `r` for a rest. `tones` and
    /// `volumes` give one character per note; the last one repeats. `speed`
    /// is the note length in 1/120 s.
    pub fn parse(notes: &str, tones: &str, volumes: &str, speed: u32) -> Result<Self> {
        let tones = tones
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(Tone::from_char)
            .collect::<Result<Vec<_>>>()?;
        let volumes = volumes
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| match c.to_digit(10) {
                Some(v) if v <= MAX_VOLUME => Ok(v as f32 / MAX_VOLUME as f32),
                _ => Err(Error::InvalidVolume(c)),
            })
            .collect::<Result<Vec<_>>>()?;

        let mut pitches = Vec::new();
        let chars: Vec<char> = notes
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| c.to_ascii_lowercase())
            .collect();
        let mut i = 0;
        while i < chars.len() {
            let invalid = |len: usize| Error::InvalidNote {
                position: i,
                found: chars[i..(i + len).min(chars.len())].iter().collect(),
            };

            if chars[i] == 'r' {
                pitches.push(None);
                i += 1;
                continue;
            }

            let base = semitone(chars[i]).ok_or_else(|| invalid(1))?;
            let mut len = 1;
            let accidental = match chars.get(i + len) {
                Some('#') => {
                    len += 1;
                    1
                }
                Some('-') => {
                    len += 1;
                    -1
                }
                _ => 0,
            };
            let octave = chars
                .get(i + len)
                .and_then(|c| c.to_digit(10))
                .filter(|o| *o <= 4)
                .ok_or_else(|| invalid(len + 1))?;
            len += 1;

            let index = octave as i32 * 12 + base + accidental;
            if !(0..60).contains(&index) {
                return Err(invalid(len));
            }
            pitches.push(Some(note_frequency(index)));
            i += len;
        }

        let notes = pitches
            .into_iter()
            .enumerate()
            .map(|(n, freq)| Note {
                freq,
                tone: nth_or_last(&tones, n).unwrap_or_default(),
                volume: nth_or_last(&volumes, n).unwrap_or(0.0),
            })
            .collect();

        Ok(Self {
            notes,
            note_secs: speed as f32 * SPEED_UNIT_SECS,
        })
    }

    /// Total length in seconds
    pub fn duration(&self) -> f32 {
        self.notes.len() as f32 * self.note_secs
    }
}

/// Anything that can play a sound effect
pub trait AudioSink {
    fn play(&mut self, effect: SoundEffect);

    /// Play the cue for each event, in order
    fn play_events(&mut self, events: &[GameEvent]) {
        for event in events {
            self.play(SoundEffect::from(*event));
        }
    }
}

/// Native sink: records cues in the log
#[derive(Debug, Clone)]
pub struct LogAudio {
    volume: f32,
    played: u64,
}

impl LogAudio {
    pub fn new(settings: &Settings) -> Self {
        Self {
            volume: settings.effective_volume(),
            played: 0,
        }
    }

    /// Number of cues played so far
    pub fn played(&self) -> u64 {
        self.played
    }
}

impl AudioSink for LogAudio {
    fn play(&mut self, effect: SoundEffect) {
        self.played += 1;
        if self.volume <= 0.0 {
            return;
        }
        let tune = effect.tune();
        log::debug!(
            "Sound {:?}: {} notes over {:.3}s at volume {:.2}",
            effect,
            tune.notes.len(),
            tune.duration(),
            self.volume
        );
    }
}

#[cfg(target_arch = "wasm32")]
pub use web::AudioManager;

#[cfg(target_arch = "wasm32")]
mod web {
    use web_sys::{AudioContext, GainNode, OscillatorNode, OscillatorType};

    use super::{AudioSink, SoundEffect, Tone, Tune};
    use crate::settings::Settings;

    /// Audio manager for the game
    pub struct AudioManager {
        ctx: Option<AudioContext>,
        volume: f32,
        tunes: Vec<(SoundEffect, Tune)>,
    }

    impl AudioManager {
        pub fn new(settings: &Settings) -> Self {
            // Try to create audio context (may fail if not in secure context)
            let ctx = AudioContext::new().ok();
            if ctx.is_none() {
                log::warn!("Failed to create AudioContext - audio disabled");
            }
            Self {
                ctx,
                volume: settings.effective_volume(),
                tunes: SoundEffect::ALL.iter().map(|e| (*e, e.tune())).collect(),
            }
        }

        /// Resume audio context (required after user gesture)
        pub fn resume(&self) {
            if let Some(ctx) = &self.ctx {
                let _ = ctx.resume();
            }
        }

        pub fn apply_settings(&mut self, settings: &Settings) {
            self.volume = settings.effective_volume();
        }

        /// Create an oscillator with gain envelope
        fn create_osc(
            &self,
            ctx: &AudioContext,
            freq: f32,
            osc_type: OscillatorType,
        ) -> Option<(OscillatorNode, GainNode)> {
            let osc = ctx.create_oscillator().ok()?;
            let gain = ctx.create_gain().ok()?;

            osc.set_type(osc_type);
            osc.frequency().set_value(freq);
            osc.connect_with_audio_node(&gain).ok()?;
            gain.connect_with_audio_node(&ctx.destination()).ok()?;

            Some((osc, gain))
        }

        fn play_tune(&self, ctx: &AudioContext, tune: &Tune) {
            let start = ctx.current_time();
            let step = tune.note_secs as f64;

            for (i, note) in tune.notes.iter().enumerate() {
                let Some(freq) = note.freq else { continue };
                let osc_type = match note.tone {
                    Tone::Triangle => OscillatorType::Triangle,
                    Tone::Square | Tone::Pulse => OscillatorType::Square,
                    // No noise oscillator in Web Audio
                    Tone::Noise => OscillatorType::Sawtooth,
                };
                let Some((osc, gain)) = self.create_osc(ctx, freq, osc_type) else {
                    continue;
                };
                let t = start + i as f64 * step;
                let level = self.volume * note.volume * 0.5;

                gain.gain().set_value_at_time(level, t).ok();
                gain.gain()
                    .exponential_ramp_to_value_at_time(0.01, t + step)
                    .ok();

                osc.start_with_when(t).ok();
                osc.stop_with_when(t + step).ok();
            }
        }
    }

    impl AudioSink for AudioManager {
        fn play(&mut self, effect: SoundEffect) {
            if self.volume <= 0.0 {
                return;
            }
            let Some(ctx) = &self.ctx else { return };

            // Resume context if suspended (browsers require user gesture)
            if ctx.state() == web_sys::AudioContextState::Suspended {
                let _ = ctx.resume();
            }

            if let Some((_, tune)) = self.tunes.iter().find(|(e, _)| *e == effect) {
                self.play_tune(ctx, tune);
            }
        }
    }
}
