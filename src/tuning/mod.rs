//! Tuning-preserving reconciliation of accent phrases
//!
//! When the user edits the text of an audio item, the engine re-analyzes
//! the whole sentence and returns fresh accent phrases with default
//! parameters, which would throw away every per-mora adjustment the user
//! made. This module diffs the old and new mora sequences and carries the
//! tuned parameters over wherever the mora text is unchanged.

pub mod diff;
pub mod transcription;

pub use diff::{apply_patch, get_patch, PatchOp};
pub use transcription::TuningTranscription;
