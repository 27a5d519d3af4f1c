//! Carrying tuned mora parameters across a text edit
//!
//! Example: editing 「こんにちは」 into 「こんばんは」 keeps the tuned
//! parameters of the bracketed moras in 「[こん]ばん[は]」; the two new
//! moras get the engine defaults.

use crate::models::accent::{AccentPhrase, Mora};
use crate::tuning::diff::{apply_patch, get_patch};

/// Reconciles a re-analyzed accent phrase list against the previously
/// tuned one.
///
/// The output always has the structure of the `after` side; only the
/// per-mora timing and pitch payloads are carried over from `before`.
pub struct TuningTranscription {
    before_accent: Vec<AccentPhrase>,
    after_accent: Vec<AccentPhrase>,
}

impl TuningTranscription {
    pub fn new(before_accent: &[AccentPhrase], after_accent: &[AccentPhrase]) -> Self {
        Self {
            before_accent: before_accent.to_vec(),
            after_accent: after_accent.to_vec(),
        }
    }

    /// Flatten both sides to plain mora sequences and patch the old one
    /// into the new shape. Matched positions keep the tuned `before`
    /// moras; everything else carries the `after` defaults.
    ///
    /// Pause moras are not part of the flattened sequences; pauses are
    /// regenerated by the engine and never carry user tuning here.
    fn create_transcription_source(&self) -> Vec<Mora> {
        let before_flat: Vec<Mora> = self
            .before_accent
            .iter()
            .flat_map(|accent_phrase| accent_phrase.moras.iter().cloned())
            .collect();
        let after_flat: Vec<Mora> = self
            .after_accent
            .iter()
            .flat_map(|accent_phrase| accent_phrase.moras.iter().cloned())
            .collect();

        let moras_diff = get_patch(&before_flat, &after_flat, |before_mora, after_mora| {
            before_mora.text == after_mora.text
        });

        apply_patch(&before_flat, &moras_diff)
    }

    /// Substitute the patched moras into the `after` accent phrase
    /// structure wherever the text at the same flat position agrees.
    fn apply_transcription_source(&self, source: &[Mora]) -> Vec<AccentPhrase> {
        let mut after = self.after_accent.clone();
        let mut mora_index = 0;

        for accent_phrase in &mut after {
            for mora in &mut accent_phrase.moras {
                if let Some(source_mora) = source.get(mora_index) {
                    if source_mora.text == mora.text {
                        *mora = source_mora.clone();
                    }
                }
                mora_index += 1;
            }
        }

        after
    }

    pub fn transcribe(&self) -> Vec<AccentPhrase> {
        let source = self.create_transcription_source();
        self.apply_transcription_source(&source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mora(text: &str, pitch: f32) -> Mora {
        Mora::new(text, "a", 0.1, pitch)
    }

    fn phrase(texts: &[&str], pitch: f32) -> AccentPhrase {
        AccentPhrase::new(texts.iter().map(|t| mora(t, pitch)).collect(), 1)
    }

    #[test]
    fn test_unchanged_text_keeps_all_tuning() {
        let before = vec![phrase(&["コ", "ン", "ニ", "チ", "ワ"], 6.5)];
        let after = vec![phrase(&["コ", "ン", "ニ", "チ", "ワ"], 5.0)];

        let result = TuningTranscription::new(&before, &after).transcribe();

        assert_eq!(result.len(), 1);
        for result_mora in &result[0].moras {
            assert_eq!(result_mora.pitch, 6.5);
        }
    }

    #[test]
    fn test_partial_edit_keeps_tuning_of_surviving_moras() {
        // 「こんにちは」→「こんばんは」: コ, ン and ワ survive.
        let before = vec![phrase(&["コ", "ン", "ニ", "チ", "ワ"], 6.5)];
        let after = vec![phrase(&["コ", "ン", "バ", "ン", "ワ"], 5.0)];

        let result = TuningTranscription::new(&before, &after).transcribe();

        let pitches: Vec<f32> = result[0].moras.iter().map(|m| m.pitch).collect();
        assert_eq!(pitches, vec![6.5, 6.5, 5.0, 5.0, 6.5]);
        let texts: Vec<&str> = result[0].moras.iter().map(|m| m.text.as_str()).collect();
        assert_eq!(texts, vec!["コ", "ン", "バ", "ン", "ワ"]);
    }

    #[test]
    fn test_full_rewrite_keeps_nothing() {
        let before = vec![phrase(&["ア", "サ"], 6.5)];
        let after = vec![phrase(&["ヨ", "ル"], 5.0)];

        let result = TuningTranscription::new(&before, &after).transcribe();

        for result_mora in &result[0].moras {
            assert_eq!(result_mora.pitch, 5.0);
        }
    }

    #[test]
    fn test_output_structure_is_always_the_after_structure() {
        let before = vec![phrase(&["コ", "ン", "ニ", "チ", "ワ"], 6.5)];
        let after = vec![
            phrase(&["コ", "ン"], 5.0).with_pause(mora("、", 0.0)),
            phrase(&["ニ", "チ", "ワ"], 5.0),
        ];

        let result = TuningTranscription::new(&before, &after).transcribe();

        assert_eq!(result.len(), 2);
        assert_eq!(result[0].moras.len(), 2);
        assert_eq!(result[1].moras.len(), 3);
        assert_eq!(result[0].pause_mora.as_ref().unwrap().text, "、");
        // Tuning still crosses the new phrase boundary.
        assert!(result[1].moras.iter().all(|m| m.pitch == 6.5));
    }

    #[test]
    fn test_consonant_parameters_are_carried() {
        let mut tuned = mora("カ", 6.5).with_consonant("k", 0.08);
        tuned.vowel_length = 0.21;
        let before = vec![AccentPhrase::new(vec![tuned.clone(), mora("ワ", 6.0)], 1)];
        let after = vec![AccentPhrase::new(
            vec![mora("カ", 5.0).with_consonant("k", 0.05), mora("サ", 5.0)],
            1,
        )];

        let result = TuningTranscription::new(&before, &after).transcribe();

        assert_eq!(result[0].moras[0], tuned);
        assert_eq!(result[0].moras[1].pitch, 5.0);
    }

    #[test]
    fn test_inputs_are_not_mutated() {
        let before = vec![phrase(&["ア"], 6.5)];
        let after = vec![phrase(&["ア"], 5.0)];
        let before_copy = before.clone();
        let after_copy = after.clone();

        let _ = TuningTranscription::new(&before, &after).transcribe();

        assert_eq!(before, before_copy);
        assert_eq!(after, after_copy);
    }
}
