// Test memo/ruby notation stripping as used by text export and synthesis

use voice_editor_wasm::text::notation::{extract_export_text, extract_yomi_text, ExtractOptions};

const BOTH: ExtractOptions = ExtractOptions {
    enable_memo_notation: true,
    enable_ruby_notation: true,
};

#[test]
fn test_export_and_yomi_disagree_only_on_ruby() {
    let text = "この{漢字|かんじ}は[要確認]難しい";
    assert_eq!(extract_export_text(text, BOTH), "この漢字は難しい");
    assert_eq!(extract_yomi_text(text, BOTH), "このかんじは難しい");
}

#[test]
fn test_memo_only_setting() {
    let options = ExtractOptions {
        enable_memo_notation: true,
        enable_ruby_notation: false,
    };
    let text = "本文[メモ]{漢字|かんじ}";
    assert_eq!(extract_export_text(text, options), "本文{漢字|かんじ}");
    assert_eq!(extract_yomi_text(text, options), "本文{漢字|かんじ}");
}

#[test]
fn test_memo_strips_before_ruby_resolves() {
    // Memo stripping runs first, so a memo inside ruby braces disappears
    // and the remaining ruby span still resolves.
    let text = "{漢[x]字|かんじ}";
    assert_eq!(extract_export_text(text, BOTH), "漢字");
    assert_eq!(extract_yomi_text(text, BOTH), "かんじ");
}

#[test]
fn test_stripping_is_idempotent_on_arbitrary_inputs() {
    let samples = [
        "プレーンテキスト",
        "[:memo]残り",
        "{紅葉|もみじ}と｛銀杏｜いちょう｝",
        "混合[a]{b|c}［d］｛e｜f｝",
        "]}閉じだけ",
    ];
    for sample in samples {
        let export = extract_export_text(sample, BOTH);
        assert_eq!(extract_export_text(&export, BOTH), export, "export not idempotent for {sample:?}");
        let yomi = extract_yomi_text(sample, BOTH);
        assert_eq!(extract_yomi_text(&yomi, BOTH), yomi, "yomi not idempotent for {sample:?}");
    }
}
