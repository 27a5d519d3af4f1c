//! Memo and ruby text notation
//!
//! The text field accepts two inline notations:
//!
//! - memo: `[note to self]` — dropped from both the exported text and
//!   the reading passed to the engine
//! - ruby: `{漢字|かんじ}` — the base form is kept for exported text,
//!   the reading for synthesis
//!
//! Both notations also accept their full-width bracket forms.

use once_cell::sync::Lazy;
use regex::Regex;

static MEMO: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[.*?\]").expect("valid regex"));
static MEMO_FULL_WIDTH: Lazy<Regex> = Lazy::new(|| Regex::new(r"［.*?］").expect("valid regex"));

static RUBY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{([^|]*)\|([^}]*)\}").expect("valid regex"));
static RUBY_FULL_WIDTH: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"｛([^｜]*)｜([^｝]*)｝").expect("valid regex"));

/// Which notations are enabled in the user's settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractOptions {
    pub enable_memo_notation: bool,
    pub enable_ruby_notation: bool,
}

/// Remove all memo spans
fn skip_memo_text(text: &str) -> String {
    let text = MEMO.replace_all(text, "");
    MEMO_FULL_WIDTH.replace_all(&text, "").into_owned()
}

/// Resolve ruby spans to their base (written) form
fn skip_ruby_reading_part(text: &str) -> String {
    let text = RUBY.replace_all(text, "${1}");
    RUBY_FULL_WIDTH.replace_all(&text, "${1}").into_owned()
}

/// Resolve ruby spans to their reading form
fn skip_ruby_writing_part(text: &str) -> String {
    let text = RUBY.replace_all(text, "${2}");
    RUBY_FULL_WIDTH.replace_all(&text, "${2}").into_owned()
}

/// Text for file export: memos dropped, ruby resolved to the base form
pub fn extract_export_text(text: &str, options: ExtractOptions) -> String {
    let mut text = text.to_string();
    if options.enable_memo_notation {
        text = skip_memo_text(&text);
    }
    if options.enable_ruby_notation {
        text = skip_ruby_reading_part(&text);
    }
    text
}

/// Text sent to the engine for synthesis: memos dropped, ruby resolved to
/// the reading form
pub fn extract_yomi_text(text: &str, options: ExtractOptions) -> String {
    let mut text = text.to_string();
    if options.enable_memo_notation {
        text = skip_memo_text(&text);
    }
    if options.enable_ruby_notation {
        text = skip_ruby_writing_part(&text);
    }
    text
}
