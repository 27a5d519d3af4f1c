//! Prosody units shared with the synthesis engine
//!
//! A mora is the minimal phonetic unit carrying timing and pitch values
//! for one syllable of text; an accent phrase groups moras under a single
//! accent position and may carry a trailing pause mora. The editor never
//! creates these from scratch: the engine produces them and the editor
//! adjusts the per-mora parameters.

use serde::{Deserialize, Serialize};

/// Minimal prosodic unit: one syllable of text with its phoneme timing
/// and pitch values.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Mora {
    /// The visible text of the mora (e.g., "コ", "ン")
    pub text: String,

    /// Consonant phoneme, absent for vowel-only moras
    pub consonant: Option<String>,

    /// Consonant duration in seconds, absent for vowel-only moras
    pub consonant_length: Option<f32>,

    /// Vowel phoneme ("a", "i", ... or "pau"/"cl" for silence)
    pub vowel: String,

    /// Vowel duration in seconds
    pub vowel_length: f32,

    /// Fundamental frequency, 0.0 for unvoiced moras
    pub pitch: f32,
}

impl Mora {
    /// Create a vowel-only mora
    pub fn new(text: impl Into<String>, vowel: impl Into<String>, vowel_length: f32, pitch: f32) -> Self {
        Self {
            text: text.into(),
            consonant: None,
            consonant_length: None,
            vowel: vowel.into(),
            vowel_length,
            pitch,
        }
    }

    /// Attach a consonant phoneme and its duration
    pub fn with_consonant(mut self, consonant: impl Into<String>, consonant_length: f32) -> Self {
        self.consonant = Some(consonant.into());
        self.consonant_length = Some(consonant_length);
        self
    }
}

/// Ordered group of moras sharing one accent position, optionally followed
/// by a pause mora.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct AccentPhrase {
    /// The moras of the phrase, in reading order
    pub moras: Vec<Mora>,

    /// 1-based position of the accent nucleus within `moras`
    pub accent: usize,

    /// Trailing pause, if the phrase is followed by silence
    pub pause_mora: Option<Mora>,

    /// Whether the phrase ends with rising interrogative intonation
    #[serde(default)]
    pub is_interrogative: bool,
}

impl AccentPhrase {
    /// Create an accent phrase with no trailing pause
    pub fn new(moras: Vec<Mora>, accent: usize) -> Self {
        Self {
            moras,
            accent,
            pause_mora: None,
            is_interrogative: false,
        }
    }

    /// Attach a trailing pause mora
    pub fn with_pause(mut self, pause_mora: Mora) -> Self {
        self.pause_mora = Some(pause_mora);
        self
    }
}

/// Whether two accent phrase lists differ in text content.
///
/// Compares only structure and mora/pause texts; timing and pitch values
/// are ignored. Used to decide whether an engine round trip (and the
/// tuning transcription that goes with it) is needed at all.
pub fn accent_phrases_text_differs(before: &[AccentPhrase], after: &[AccentPhrase]) -> bool {
    if before.len() != after.len() {
        return true;
    }

    for (before_phrase, after_phrase) in before.iter().zip(after) {
        if before_phrase.moras.len() != after_phrase.moras.len() {
            return true;
        }
        let before_pause = before_phrase.pause_mora.as_ref().map(|m| m.text.as_str());
        let after_pause = after_phrase.pause_mora.as_ref().map(|m| m.text.as_str());
        if before_pause != after_pause {
            return true;
        }
        for (before_mora, after_mora) in before_phrase.moras.iter().zip(&after_phrase.moras) {
            if before_mora.text != after_mora.text {
                return true;
            }
        }
    }
    false
}
