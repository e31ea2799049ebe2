//! Sequence Symmetry WASM API
//!
//! This module provides the JavaScript-facing API for the classification
//! engine.
//!
//! # Module Structure
//!
//! - `helpers`: Shared utilities for serialization, validation, error handling, and logging
//! - `classify`: Classification, pair detection, compound analysis and label operations

pub mod helpers;
pub mod classify;

pub use classify::{
    analyze_compound_pattern, canonical_designation_id, classify_sections, classify_sequence,
    classify_sequence_json, detect_base_word_fragments, detect_beat_pairs, format_designation,
};
