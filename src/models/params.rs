//! Prosody slider parameter definitions
//!
//! Bounds and step sizes for the per-audio-item parameter sliders shown
//! in the audio info panel. The scroll steps are the coarse/fine
//! increments used when adjusting a slider with the mouse wheel.

use serde::Serialize;

/// Range and step definition of one parameter slider
#[derive(Serialize, Clone, Copy, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SliderParameter {
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub scroll_step: f64,
    /// Fine increment used while a modifier key is held, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scroll_min_step: Option<f64>,
}

impl SliderParameter {
    /// Clamp a value into the slider range
    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }
}

/// 話速 (speaking speed)
pub const SPEED: SliderParameter = SliderParameter {
    min: 0.5,
    max: 2.0,
    step: 0.01,
    scroll_step: 0.1,
    scroll_min_step: Some(0.01),
};

/// スタイルの強さ (intonation / style intensity)
pub const INTONATION: SliderParameter = SliderParameter {
    min: 0.0,
    max: 2.0,
    step: 0.01,
    scroll_step: 0.1,
    scroll_min_step: Some(0.01),
};

/// テンポの緩急 (tempo dynamics)
pub const TEMPO_DYNAMICS: SliderParameter = SliderParameter {
    min: 0.0,
    max: 2.0,
    step: 0.01,
    scroll_step: 0.1,
    scroll_min_step: Some(0.01),
};

/// 音高 (pitch)
pub const PITCH: SliderParameter = SliderParameter {
    min: -0.15,
    max: 0.15,
    step: 0.01,
    scroll_step: 0.01,
    scroll_min_step: None,
};

/// 音量 (volume)
pub const VOLUME: SliderParameter = SliderParameter {
    min: 0.0,
    max: 2.0,
    step: 0.01,
    scroll_step: 0.1,
    scroll_min_step: Some(0.01),
};

/// 開始無音 (leading silence)
pub const PRE_PHONEME_LENGTH: SliderParameter = SliderParameter {
    min: 0.0,
    max: 1.5,
    step: 0.01,
    scroll_step: 0.1,
    scroll_min_step: Some(0.01),
};

/// 終了無音 (trailing silence)
pub const POST_PHONEME_LENGTH: SliderParameter = SliderParameter {
    min: 0.0,
    max: 1.5,
    step: 0.01,
    scroll_step: 0.1,
    scroll_min_step: Some(0.01),
};

/// モーフィングレート (morphing rate)
pub const MORPHING_RATE: SliderParameter = SliderParameter {
    min: 0.0,
    max: 1.0,
    step: 0.01,
    scroll_step: 0.1,
    scroll_min_step: Some(0.01),
};

/// All slider definitions keyed the way the settings store names them
#[derive(Serialize, Clone, Copy, Debug)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct SliderParameters {
    pub speed: SliderParameter,
    pub intonation: SliderParameter,
    pub tempo_dynamics: SliderParameter,
    pub pitch: SliderParameter,
    pub volume: SliderParameter,
    pub pre_phoneme_length: SliderParameter,
    pub post_phoneme_length: SliderParameter,
    pub morphing_rate: SliderParameter,
}

impl Default for SliderParameters {
    fn default() -> Self {
        Self {
            speed: SPEED,
            intonation: INTONATION,
            tempo_dynamics: TEMPO_DYNAMICS,
            pitch: PITCH,
            volume: VOLUME,
            pre_phoneme_length: PRE_PHONEME_LENGTH,
            post_phoneme_length: POST_PHONEME_LENGTH,
            morphing_rate: MORPHING_RATE,
        }
    }
}
