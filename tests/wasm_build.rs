//! WASM build test
//!
//! Drives the JS-facing API through wasm-bindgen in a browser, the same
//! way the web-view shell calls it.

#![cfg(target_arch = "wasm32")]

use voice_editor_wasm::api;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn test_sanitize_and_date() {
    assert_eq!(api::sanitize_file_name_js("a/b|c"), "abc");
    assert_eq!(api::current_date_string_js().len(), 8);
}

#[wasm_bindgen_test]
fn test_build_audio_file_name_from_js_object() {
    let vars = js_sys::JSON::parse(
        r#"{"index": 0, "characterName": "めたん", "styleName": "ノーマル",
            "text": "こんにちは", "date": "20250101", "projectName": "p"}"#,
    )
    .unwrap();
    let name = api::build_audio_file_name_js("", vars).unwrap();
    assert_eq!(name, "001_めたん（ノーマル）_こんにちは.wav");
}

#[wasm_bindgen_test]
fn test_tuning_transcription_round_trip() {
    let before = js_sys::JSON::parse(
        r#"[{"moras": [{"text": "ア", "consonant": null, "consonant_length": null,
            "vowel": "a", "vowel_length": 0.2, "pitch": 6.5}],
            "accent": 1, "pause_mora": null}]"#,
    )
    .unwrap();
    let after = js_sys::JSON::parse(
        r#"[{"moras": [{"text": "ア", "consonant": null, "consonant_length": null,
            "vowel": "a", "vowel_length": 0.1, "pitch": 5.0}],
            "accent": 1, "pause_mora": null}]"#,
    )
    .unwrap();

    let result = api::apply_tuning_transcription(before, after).unwrap();
    let json = js_sys::JSON::stringify(&result).unwrap();
    let text: String = json.into();
    assert!(text.contains("6.5"), "tuned pitch lost: {text}");
}

#[wasm_bindgen_test]
fn test_malformed_input_becomes_error_not_panic() {
    let bogus = js_sys::JSON::parse(r#"{"not": "accent phrases"}"#).unwrap();
    let err = api::is_accent_phrases_text_different(bogus.clone(), bogus);
    assert!(err.is_err());
}

#[wasm_bindgen_test]
fn test_toolbar_metadata() {
    assert_eq!(api::get_toolbar_button_name("UNDO").unwrap(), "元に戻す");
    assert!(api::get_toolbar_button_icon("NOT_A_TAG").is_err());
}
