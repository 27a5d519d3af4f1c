//! Audio file-name templating
//!
//! Export file names come from a user-configurable template in which
//! `$tag$` placeholders are replaced with per-item values. Tag names are
//! the Japanese strings shown in the settings dialog. Unknown tags are
//! left in place so a typo never silently eats part of the name.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::models::character::DEFAULT_STYLE_NAME;

/// Project name used before the user saves the project
pub const DEFAULT_PROJECT_NAME: &str = "Untitled";

/// Default template for the base name (no extension)
pub const DEFAULT_AUDIO_FILE_BASE_NAME_TEMPLATE: &str = "$連番$_$キャラ$（$スタイル$）_$テキスト$";

/// Default template for the full audio file name
pub const DEFAULT_AUDIO_FILE_NAME_TEMPLATE: &str = "$連番$_$キャラ$（$スタイル$）_$テキスト$.wav";

// Displayed text is truncated to this many characters before templating.
const MAX_TEXT_CHARS: usize = 10;

// \x00-\x1f: ASCII control characters
// \x22: "  \x2a: *  \x2f: /  \x3a: :  \x3c: <  \x3e: >  \x3f: ?
// \x5c: \  \x7c: |  \x7f: DEL
static SANITIZER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[\x00-\x1f\x22\x2a\x2f\x3a\x3c\x3e\x3f\x5c\x7c\x7f]").expect("valid regex")
});

static TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"\$(.+?)\$").expect("valid regex"));

/// Remove OS-reserved file-name characters and ASCII control characters
pub fn sanitize_file_name(file_name: &str) -> String {
    SANITIZER.replace_all(file_name, "").into_owned()
}

/// Placeholders available in file-name templates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReplaceTag {
    Index,
    CharacterName,
    StyleName,
    Text,
    Date,
    ProjectName,
}

impl ReplaceTag {
    pub const ALL: [ReplaceTag; 6] = [
        ReplaceTag::Index,
        ReplaceTag::CharacterName,
        ReplaceTag::StyleName,
        ReplaceTag::Text,
        ReplaceTag::Date,
        ReplaceTag::ProjectName,
    ];

    /// The tag string the user writes between `$` markers
    pub fn tag_string(&self) -> &'static str {
        match self {
            ReplaceTag::Index => "連番",
            ReplaceTag::CharacterName => "キャラ",
            ReplaceTag::StyleName => "スタイル",
            ReplaceTag::Text => "テキスト",
            ReplaceTag::Date => "日付",
            ReplaceTag::ProjectName => "プロジェクト名",
        }
    }

    pub fn from_tag_string(tag: &str) -> Option<ReplaceTag> {
        ReplaceTag::ALL.iter().copied().find(|t| t.tag_string() == tag)
    }
}

/// Replace every known `$tag$` placeholder with its value.
///
/// Unknown tags stay verbatim; known tags with no supplied value become
/// the empty string.
pub fn replace_tag(template: &str, values: &HashMap<ReplaceTag, String>) -> String {
    TAG.replace_all(template, |caps: &regex::Captures| {
        match ReplaceTag::from_tag_string(&caps[1]) {
            Some(tag) => values.get(&tag).cloned().unwrap_or_default(),
            None => caps[0].to_string(),
        }
    })
    .into_owned()
}

/// Today's date as `YYYYMMDD`, for the `$日付$` placeholder
pub fn current_date_string() -> String {
    chrono::Local::now().format("%Y%m%d").to_string()
}

/// Per-item values substituted into the file-name template
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FileNameVariables {
    /// 0-based position of the audio item; rendered 1-based
    pub index: usize,
    pub character_name: String,
    pub style_name: String,
    pub text: String,
    pub date: String,
    pub project_name: String,
}

impl Default for FileNameVariables {
    fn default() -> Self {
        Self {
            index: 0,
            character_name: "女性1".to_string(),
            style_name: DEFAULT_STYLE_NAME.to_string(),
            text: "テキストテキストテキスト".to_string(),
            date: current_date_string(),
            project_name: DEFAULT_PROJECT_NAME.to_string(),
        }
    }
}

/// Expand a file-name template with sanitized per-item values.
///
/// An empty pattern means the setting was never changed and falls back to
/// the default template. The text value is truncated to ten characters
/// with an ellipsis so one long sentence cannot blow up the file name.
pub fn build_audio_file_name(pattern: &str, vars: &FileNameVariables) -> String {
    let pattern = if pattern.is_empty() {
        DEFAULT_AUDIO_FILE_NAME_TEMPLATE
    } else {
        pattern
    };

    let mut text = sanitize_file_name(&vars.text);
    if text.chars().count() > MAX_TEXT_CHARS {
        text = text.chars().take(MAX_TEXT_CHARS - 1).collect::<String>() + "…";
    }

    let values = HashMap::from([
        (ReplaceTag::Index, format!("{:03}", vars.index + 1)),
        (ReplaceTag::CharacterName, sanitize_file_name(&vars.character_name)),
        (ReplaceTag::StyleName, sanitize_file_name(&vars.style_name)),
        (ReplaceTag::Text, text),
        (ReplaceTag::Date, vars.date.clone()),
        (ReplaceTag::ProjectName, sanitize_file_name(&vars.project_name)),
    ]);

    replace_tag(pattern, &values)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars() -> FileNameVariables {
        FileNameVariables {
            index: 0,
            character_name: "四国めたん".to_string(),
            style_name: "ノーマル".to_string(),
            text: "テストテキスト".to_string(),
            date: "20250101".to_string(),
            project_name: "サンプルプロジェクト".to_string(),
        }
    }

    #[test]
    fn test_sanitize_removes_reserved_characters() {
        assert_eq!(sanitize_file_name("a/b\\c:d*e?f\"g<h>i|j"), "abcdefghij");
        assert_eq!(sanitize_file_name("a\x00b\x1fc\x7fd"), "abcd");
    }

    #[test]
    fn test_sanitize_keeps_everything_else() {
        assert_eq!(sanitize_file_name("わこ音声 (v2)!.wav"), "わこ音声 (v2)!.wav");
    }

    #[test]
    fn test_default_template_expansion() {
        let name = build_audio_file_name("", &vars());
        assert_eq!(name, "001_四国めたん（ノーマル）_テストテキスト.wav");
    }

    #[test]
    fn test_unknown_tag_is_left_verbatim() {
        let name = build_audio_file_name("$連番$_$謎タグ$.wav", &vars());
        assert_eq!(name, "001_$謎タグ$.wav");
    }

    #[test]
    fn test_long_text_is_truncated_with_ellipsis() {
        let mut v = vars();
        v.text = "あいうえおかきくけこさし".to_string();
        let name = build_audio_file_name("$テキスト$", &v);
        assert_eq!(name, "あいうえおかきくけ…");
    }

    #[test]
    fn test_index_is_one_based_and_zero_padded() {
        let mut v = vars();
        v.index = 41;
        assert_eq!(build_audio_file_name("$連番$", &v), "042");
    }

    #[test]
    fn test_values_are_sanitized() {
        let mut v = vars();
        v.character_name = "め/た\\ん".to_string();
        assert_eq!(build_audio_file_name("$キャラ$", &v), "めたん");
    }

    #[test]
    fn test_date_placeholder() {
        assert_eq!(build_audio_file_name("$日付$", &vars()), "20250101");
        let today = current_date_string();
        assert_eq!(today.len(), 8);
        assert!(today.chars().all(|c| c.is_ascii_digit()));
    }
}
