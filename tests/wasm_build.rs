// Browser tests for the JavaScript-facing API

use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;
use sequence_symmetry_wasm::api::*;
use sequence_symmetry_wasm::models::{Component, SequenceDesignation};

wasm_bindgen_test_configure!(run_in_browser);

const ROTATED_PAIR: &str = r#"{
    "start_position": {
        "blue": {"location": "n", "orientation": "in"},
        "red": {"location": "s", "orientation": "out"}
    },
    "beats": [
        {
            "blue": {"start_loc": "n", "end_loc": "e", "start_ori": "in", "end_ori": "clock", "motion_kind": "pro"},
            "red": {"start_loc": "s", "end_loc": "w", "start_ori": "out", "end_ori": "counter", "motion_kind": "anti"}
        },
        {
            "blue": {"start_loc": "s", "end_loc": "w", "start_ori": "in", "end_ori": "clock", "motion_kind": "pro"},
            "red": {"start_loc": "n", "end_loc": "e", "start_ori": "out", "end_ori": "counter", "motion_kind": "anti"}
        }
    ]
}"#;

#[wasm_bindgen_test]
fn test_classify_sequence_json() {
    let report = classify_sequence_json(ROTATED_PAIR).expect("classification succeeds");
    assert!(report.contains("\"label\":\"Rotated(½)\""));
    assert!(report.contains("\"canonical_id\":\"strict_rotated\""));
}

#[wasm_bindgen_test]
fn test_classify_sequence_json_rejects_garbage() {
    assert!(classify_sequence_json("{\"beats\": 3}").is_err());
}

#[wasm_bindgen_test]
fn test_detect_beat_pairs_rejects_unknown_strategy() {
    assert!(detect_beat_pairs(JsValue::NULL, "diagonal").is_err());
}

#[wasm_bindgen_test]
fn test_canonical_designation_id() {
    let components = serde_wasm_bindgen::to_value(&vec!["swapped", "rotated"]).unwrap();
    assert_eq!(
        canonical_designation_id(components).unwrap(),
        Some("rotated_swapped".to_string())
    );

    let empty = serde_wasm_bindgen::to_value(&Vec::<String>::new()).unwrap();
    assert_eq!(canonical_designation_id(empty).unwrap(), None);
}

#[wasm_bindgen_test]
fn test_format_designation() {
    let designation = SequenceDesignation {
        components: [Component::Mirrored].into_iter().collect(),
        base_word: Some("abab".to_string()),
        ..Default::default()
    };
    let designation = serde_wasm_bindgen::to_value(&designation).unwrap();
    assert_eq!(format_designation(designation).unwrap(), "Mirrored [ABAB]");
}

#[wasm_bindgen_test]
fn test_detect_base_word_fragments() {
    let fragments = detect_base_word_fragments("abzz");
    assert_eq!(fragments.length(), 1);
    assert_eq!(fragments.get(0).as_string(), Some("AB (from ABAB)".to_string()));
}
