//! Classification operations for the WASM API
//!
//! The UI and persistence collaborators hand in `Sequence` values (as JS
//! objects or JSON strings) and get back designations, labels, pair
//! relationships and compound patterns.

use wasm_bindgen::prelude::*;
use crate::analysis::{self, PairingStrategy};
use crate::api::helpers::{
    deserialize, engine_error, sequence_from_js, serialize, settings_from_yaml, validate_section_length,
    validation_error,
};
use crate::errors::EngineError;
use crate::labels;
use crate::models::{ComponentSet, Sequence, SequenceDesignation};
use crate::{wasm_info, wasm_log, wasm_warn};

// ============================================================================
// Sequence Classification
// ============================================================================

/// Classify a sequence
///
/// # Parameters
/// - `sequence`: Sequence object (start_position + beats)
/// - `settings_yaml`: optional classifier settings as YAML
///
/// # Returns
/// ClassificationReport object (designation, canonical_id, label, pass, pairs, compound)
#[wasm_bindgen(js_name = classifySequence)]
pub fn classify_sequence(sequence: JsValue, settings_yaml: Option<String>) -> Result<JsValue, JsValue> {
    let sequence = sequence_from_js(sequence)?;
    let settings = settings_from_yaml(settings_yaml)?;
    wasm_info!("classifySequence called: {} beats", sequence.len());

    let report = analysis::classify(&sequence, &settings);
    wasm_log!("  label: {}", report.label);
    if report.canonical_id.as_ref().is_some_and(|id| id.is_custom()) {
        wasm_warn!("  unlisted component combination: {:?}", report.canonical_id);
    }

    serialize(&report, "Failed to serialize classification report")
}

/// Classify a sequence given as JSON, returning the report as JSON
#[wasm_bindgen(js_name = classifySequenceJson)]
pub fn classify_sequence_json(sequence_json: &str) -> Result<String, JsValue> {
    let sequence: Sequence = serde_json::from_str(sequence_json)
        .map_err(|e| engine_error(EngineError::from(e)))?;
    wasm_info!("classifySequenceJson called: {} beats", sequence.len());

    let report = analysis::classify(&sequence, &Default::default());
    serde_json::to_string(&report)
        .map_err(|e| validation_error(format!("Failed to serialize classification report: {}", e)))
}

/// Classify consecutive fixed-length sections of a sequence
///
/// An explicit `section_length` wins over the one in the settings.
#[wasm_bindgen(js_name = classifySections)]
pub fn classify_sections(
    sequence: JsValue,
    section_length: Option<usize>,
    settings_yaml: Option<String>,
) -> Result<JsValue, JsValue> {
    let sequence = sequence_from_js(sequence)?;
    let settings = settings_from_yaml(settings_yaml)?;
    let section_length = section_length
        .or(settings.section_length)
        .ok_or_else(|| validation_error("No section length given and none configured"))?;
    validate_section_length(section_length, sequence.len()).map_err(validation_error)?;
    wasm_info!("classifySections called: {} beats, sections of {}", sequence.len(), section_length);

    let reports = analysis::classify_sections(&sequence, section_length, &settings);
    serialize(&reports, "Failed to serialize section reports")
}

// ============================================================================
// Pair Relationships
// ============================================================================

/// Detect and resolve beat pair relationships under a pairing strategy
///
/// # Parameters
/// - `sequence`: Sequence object
/// - `strategy`: "palindromic", "half_split" or "quarter_split"
#[wasm_bindgen(js_name = detectBeatPairs)]
pub fn detect_beat_pairs(sequence: JsValue, strategy: &str) -> Result<JsValue, JsValue> {
    let sequence = sequence_from_js(sequence)?;
    let strategy: PairingStrategy = strategy
        .parse()
        .map_err(|e: String| engine_error(EngineError::InvalidStrategy(e)))?;
    wasm_info!("detectBeatPairs called: {} beats, {}", sequence.len(), strategy);

    let pairs = analysis::classify_pairs(&sequence, strategy);
    let unclassifiable = pairs.iter().filter(|p| p.is_unclassifiable()).count();
    if unclassifiable > 0 {
        wasm_log!("  {} of {} pairs are unclassifiable", unclassifiable, pairs.len());
    }

    serialize(&pairs, "Failed to serialize beat pairs")
}

/// Compound pattern of a sequence, or null when there is none
#[wasm_bindgen(js_name = analyzeCompoundPattern)]
pub fn analyze_compound_pattern(sequence: JsValue) -> Result<JsValue, JsValue> {
    let sequence = sequence_from_js(sequence)?;
    match analysis::analyze(&sequence) {
        Some(pattern) => serialize(&pattern, "Failed to serialize compound pattern"),
        None => Ok(JsValue::NULL),
    }
}

// ============================================================================
// Labels
// ============================================================================

/// Render a designation object as its display label
#[wasm_bindgen(js_name = formatDesignation)]
pub fn format_designation(designation: JsValue) -> Result<String, JsValue> {
    let designation: SequenceDesignation = deserialize(designation, "Failed to deserialize designation")?;
    Ok(labels::format_designation(&designation))
}

/// Canonical id of a component list (e.g. ["rotated", "swapped"]), or
/// undefined for an empty list
#[wasm_bindgen(js_name = canonicalDesignationId)]
pub fn canonical_designation_id(components: JsValue) -> Result<Option<String>, JsValue> {
    let components: ComponentSet = deserialize(components, "Failed to deserialize components")?;
    Ok(labels::map_to_canonical_id(&components).map(|id| id.as_str().to_string()))
}

/// Base word fragment descriptions for a letter string
#[wasm_bindgen(js_name = detectBaseWordFragments)]
pub fn detect_base_word_fragments(letters: &str) -> js_sys::Array {
    labels::detect_fragments(letters)
        .into_iter()
        .map(|fragment| JsValue::from_str(&fragment))
        .collect()
}
