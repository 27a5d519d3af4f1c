//! Toolbar button metadata
//!
//! The toolbar is user-configurable: the settings dialog stores an ordered
//! list of button tags, and the shell looks up display names and icons
//! here when rendering.

use serde::{Deserialize, Serialize};

// The connect-all export button has no Material Symbols equivalent, so it
// ships its own SVG as a data URI.
const EXPORT_AUDIO_CONNECT_ALL_ICON: &str = r##"img:data:image/svg+xml;charset=utf8,<svg viewBox="0 0 13 14" fill="none" xmlns="http://www.w3.org/2000/svg"><g clip-path="url(%23clip0_2_4)"><path d="M10.7961 10.7601V11.7519C10.7961 11.8254 10.8236 11.8897 10.8787 11.9448C10.9338 11.9999 10.9981 12.0274 11.0715 12.0274C11.145 12.0274 11.2093 11.9999 11.2644 11.9448C11.3195 11.8897 11.347 11.8254 11.347 11.7519V10.099C11.347 10.0255 11.3195 9.96121 11.2644 9.90611C11.2093 9.85101 11.145 9.82346 11.0715 9.82346H9.41858C9.34512 9.82346 9.28084 9.85101 9.22574 9.90611C9.17064 9.96121 9.14309 10.0255 9.14309 10.099C9.14309 10.1724 9.17064 10.2367 9.22574 10.2918C9.28084 10.3469 9.34512 10.3745 9.41858 10.3745H10.4104L9.06044 11.7244C9.00534 11.7795 8.97779 11.8438 8.97779 11.9172C8.97779 11.9907 9.00534 12.055 9.06044 12.1101C9.11554 12.1652 9.17982 12.1927 9.25329 12.1927C9.32675 12.1927 9.39103 12.1652 9.44613 12.1101L10.7961 10.7601ZM10.2451 13.6804C9.48286 13.6804 8.83316 13.4118 8.29595 12.8746C7.75873 12.3373 7.49013 11.6876 7.49013 10.9254C7.49013 10.1632 7.75873 9.51353 8.29595 8.97632C8.83316 8.43911 9.48286 8.1705 10.2451 8.1705C11.0073 8.1705 11.657 8.43911 12.1942 8.97632C12.7314 9.51353 13 10.1632 13 10.9254C13 11.6876 12.7314 12.3373 12.1942 12.8746C11.657 13.4118 11.0073 13.6804 10.2451 13.6804Z" fill="%23FBEEEA"/><path fill-rule="evenodd" clip-rule="evenodd" d="M9.65093 2.61512L7.68494 0.649134C7.47397 0.438155 7.18782 0.319626 6.88945 0.319626H2.10543C1.48411 0.319626 0.980434 0.823298 0.980434 1.44463V11.1946C0.980434 11.816 1.48411 12.3196 2.10543 12.3196H7.08844C7.06335 12.2558 7.04031 12.1909 7.01939 12.1251C6.91026 11.8317 6.84 11.5195 6.81485 11.1946H2.10543V1.44463H5.85543V3.88213C5.85543 4.19279 6.10727 4.44463 6.41793 4.44463H8.85543V7.77702C9.20389 7.623 9.58271 7.52513 9.98043 7.49487V3.41061C9.98043 3.11224 9.86191 2.8261 9.65093 2.61512ZM8.76445 3.31963H6.98043V1.53561L8.76445 3.31963ZM5.48043 9.41281C5.48043 9.66338 5.17748 9.78887 5.00032 9.61168L4.16793 8.76852H3.51168C3.35636 8.76852 3.23043 8.64259 3.23043 8.48727V7.17477C3.23043 7.01945 3.35636 6.89352 3.51168 6.89352H4.16793L5.00032 6.02757C5.1775 5.85038 5.48043 5.97587 5.48043 6.22644V9.41281ZM6.44608 8.3082C6.65822 8.09031 6.65843 7.74259 6.44611 7.52448C5.92699 6.99123 6.73286 6.20621 7.25224 6.73977C7.88969 7.39461 7.89002 8.43767 7.25226 9.09291C6.74149 9.61759 5.91757 8.85116 6.44608 8.3082Z" fill="%23FBEEEA"/></g><defs><clipPath id="clip0_2_4"><rect width="13" height="14" fill="white"/></clipPath></defs></svg>"##;

/// Tags for the configurable toolbar buttons
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ToolbarButtonTag {
    PlayContinuously,
    Play,
    Stop,
    ExportAudioSelected,
    ExportAudioAll,
    ExportAudioConnectAll,
    SaveProject,
    Undo,
    Redo,
    ImportText,
    Empty,
    #[serde(rename = "SPACER_1")]
    Spacer1,
    #[serde(rename = "SPACER_2")]
    Spacer2,
    #[serde(rename = "SPACER_3")]
    Spacer3,
}

impl ToolbarButtonTag {
    /// Display name shown as the button label and in the toolbar settings
    pub fn name(&self) -> &'static str {
        match self {
            ToolbarButtonTag::PlayContinuously => "連続再生",
            ToolbarButtonTag::Play => "選択音声を再生",
            ToolbarButtonTag::Stop => "停止",
            ToolbarButtonTag::ExportAudioSelected => "選択音声を書き出し",
            ToolbarButtonTag::ExportAudioAll => "全部書き出し",
            ToolbarButtonTag::ExportAudioConnectAll => "音声をつなげて書き出し",
            ToolbarButtonTag::SaveProject => "プロジェクトを保存",
            ToolbarButtonTag::Undo => "元に戻す",
            ToolbarButtonTag::Redo => "やり直す",
            ToolbarButtonTag::ImportText => "テキスト読み込み",
            ToolbarButtonTag::Empty => "空白",
            ToolbarButtonTag::Spacer1 | ToolbarButtonTag::Spacer2 | ToolbarButtonTag::Spacer3 => {
                "区切り"
            }
        }
    }

    /// Icon identifier for the button.
    ///
    /// Material Symbols names use `_` rather than `-`; spacers have no
    /// icon at all.
    pub fn icon(&self) -> &'static str {
        match self {
            ToolbarButtonTag::PlayContinuously => "sym_r_autoplay",
            ToolbarButtonTag::Play => "sym_r_play_arrow",
            ToolbarButtonTag::Stop => "sym_r_stop",
            ToolbarButtonTag::ExportAudioSelected => "sym_r_outbound",
            ToolbarButtonTag::ExportAudioAll => "sym_r_export_notes",
            ToolbarButtonTag::ExportAudioConnectAll => EXPORT_AUDIO_CONNECT_ALL_ICON,
            ToolbarButtonTag::SaveProject => "sym_r_save",
            ToolbarButtonTag::Undo => "sym_r_undo",
            ToolbarButtonTag::Redo => "sym_r_redo",
            ToolbarButtonTag::ImportText => "sym_r_upload_file",
            ToolbarButtonTag::Empty
            | ToolbarButtonTag::Spacer1
            | ToolbarButtonTag::Spacer2
            | ToolbarButtonTag::Spacer3 => "",
        }
    }
}

impl std::str::FromStr for ToolbarButtonTag {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        serde_json::from_value(serde_json::Value::String(s.to_string()))
            .map_err(|_| format!("unknown toolbar button tag: {s}"))
    }
}
