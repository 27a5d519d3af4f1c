//! Character and style metadata
//!
//! Characters are the selectable voices; each carries one or more styles
//! (normal, whisper, singing, ...). The talk and song editors show
//! different subsets of the style list, so filtering by style type lives
//! here next to the model.

use serde::{Deserialize, Serialize};

/// Default style name shown when a style has no explicit name
pub const DEFAULT_STYLE_NAME: &str = "ノーマル";

/// Kind of synthesis a style supports.
///
/// Engines that predate the song editor omit the field entirely, so
/// `Talk` is the default.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum StyleType {
    #[default]
    Talk,
    SingingTeacher,
    FrameDecode,
    Sing,
}

/// One selectable style of a character
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct StyleInfo {
    /// Display name, `None` for the character's unnamed default style
    pub style_name: Option<String>,

    /// Engine-side style identifier
    pub style_id: u32,

    /// Kind of synthesis this style supports
    #[serde(default)]
    pub style_type: StyleType,
}

impl StyleInfo {
    /// Whether this style is usable in the song editor
    pub fn is_singing_style(&self) -> bool {
        matches!(
            self.style_type,
            StyleType::FrameDecode | StyleType::Sing | StyleType::SingingTeacher
        )
    }
}

/// Character metadata as published by the engine
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct CharacterMetas {
    /// Display name of the character
    pub speaker_name: String,

    /// Stable identifier of the character across engines
    pub speaker_uuid: String,

    /// Styles the character offers
    pub styles: Vec<StyleInfo>,
}

/// A selectable voice character
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct CharacterInfo {
    pub metas: CharacterMetas,
}

/// Style subset selector for [`filter_character_infos_by_style_type`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleFilter {
    /// Keep only song-capable styles
    SingerLike,
    /// Keep styles of one type. `Type(Talk)` keeps every style that is
    /// not song-capable, because legacy engines never report a type.
    Type(StyleType),
}

impl StyleFilter {
    fn matches(&self, style: &StyleInfo) -> bool {
        match self {
            StyleFilter::SingerLike => style.is_singing_style(),
            StyleFilter::Type(StyleType::Talk) => !style.is_singing_style(),
            StyleFilter::Type(style_type) => style.style_type == *style_type,
        }
    }
}

impl std::str::FromStr for StyleFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "singerLike" => Ok(StyleFilter::SingerLike),
            "talk" => Ok(StyleFilter::Type(StyleType::Talk)),
            "singing_teacher" => Ok(StyleFilter::Type(StyleType::SingingTeacher)),
            "frame_decode" => Ok(StyleFilter::Type(StyleType::FrameDecode)),
            "sing" => Ok(StyleFilter::Type(StyleType::Sing)),
            _ => Err(format!("unknown style filter: {s}")),
        }
    }
}

/// Filter each character's style list by style type and drop characters
/// left with no styles at all.
pub fn filter_character_infos_by_style_type(
    character_infos: &[CharacterInfo],
    filter: StyleFilter,
) -> Vec<CharacterInfo> {
    character_infos
        .iter()
        .map(|character_info| {
            let styles = character_info
                .metas
                .styles
                .iter()
                .filter(|style| filter.matches(style))
                .cloned()
                .collect::<Vec<_>>();
            CharacterInfo {
                metas: CharacterMetas {
                    styles,
                    ..character_info.metas.clone()
                },
            }
        })
        .filter(|character_info| !character_info.metas.styles.is_empty())
        .collect()
}

/// Display label combining a character name and a style name.
///
/// The zero-width space before the opening bracket keeps long names from
/// breaking awkwardly in the UI.
pub fn format_character_style_name(character_name: &str, style_name: Option<&str>) -> String {
    let style_name = style_name.unwrap_or(DEFAULT_STYLE_NAME);
    format!("{character_name}\u{200b}（{style_name}）")
}
